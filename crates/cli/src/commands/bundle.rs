use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result, bail};
use clap::Args;
use firelink_app::{AppBundle, WindowFeatures, WindowMode, create_app_bundle};

use super::finish;

#[derive(Debug, Args)]
pub struct BundleArgs {
    /// Output directory; replaced if it exists
    pub dir: PathBuf,

    /// App identifier
    #[arg(long)]
    pub id: String,

    /// Page the app window shows
    #[arg(long)]
    pub url: String,

    /// Window title (defaults to the id)
    #[arg(long)]
    pub title: Option<String>,

    /// normal, maximized, fullscreen or kiosk
    #[arg(long, value_name = "MODE", default_value = "normal")]
    pub window_mode: WindowMode,

    /// Window size as WIDTHxHEIGHT
    #[arg(long, value_name = "WxH")]
    pub size: Option<String>,

    /// Window position as LEFT,TOP (needs --size)
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub position: Option<String>,

    /// Icon file copied into the bundle
    #[arg(long)]
    pub icon: Option<PathBuf>,
}

fn parse_pair<T: std::str::FromStr>(value: &str, sep: char) -> Option<(T, T)> {
    let (a, b) = value.split_once(sep)?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

impl BundleArgs {
    pub fn to_bundle(&self) -> Result<AppBundle> {
        let mut features = WindowFeatures::new();
        if let Some(size) = &self.size {
            let Some((w, h)) = parse_pair::<u32>(size, 'x') else {
                bail!("invalid --size '{size}', expected WIDTHxHEIGHT");
            };
            features = features.with_size(w, h);
        }
        if let Some(position) = &self.position {
            let Some((x, y)) = parse_pair::<i32>(position, ',') else {
                bail!("invalid --position '{position}', expected LEFT,TOP");
            };
            features = features.with_position(x, y);
        }

        let mut bundle = AppBundle::new(&self.id, &self.url);
        if let Some(title) = &self.title {
            bundle.title = title.clone();
        }
        bundle.window_mode = self.window_mode;
        bundle.window_features = features;
        bundle.icon = self.icon.clone();
        Ok(bundle)
    }
}

pub fn run(args: BundleArgs) -> ExitCode {
    finish("bundle", execute(args))
}

fn execute(args: BundleArgs) -> Result<ExitCode> {
    let bundle = args.to_bundle()?;
    create_app_bundle(&args.dir, &bundle)
        .with_context(|| format!("creating bundle in {}", args.dir.display()))?;

    eprintln!("[bundle] created {}", args.dir.display());
    Ok(ExitCode::SUCCESS)
}
