use super::*;
use std::fs;

#[test]
fn window_mode_parses_known_modes() {
    let cases = [
        ("normal", WindowMode::Normal),
        ("Maximized", WindowMode::Maximized),
        ("FULLSCREEN", WindowMode::Fullscreen),
        ("kiosk", WindowMode::Kiosk),
    ];
    for (input, expected) in cases {
        assert_eq!(input.parse::<WindowMode>().unwrap(), expected, "{input}");
    }

    let err = "tiny".parse::<WindowMode>().unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)), "{err:?}");
}

#[test]
fn kiosk_renders_as_fullscreen_size_mode() {
    assert_eq!(WindowMode::Kiosk.size_mode(), "fullscreen");
    assert_eq!(WindowMode::Maximized.size_mode(), "maximized");
    assert_eq!(WindowMode::Normal.size_mode(), "normal");
}

#[test]
fn window_features_cases() {
    let sized = WindowFeatures::new().with_size(800, 600);
    let placed = sized.with_position(10, -20);

    let cases = [
        (WindowFeatures::new(), WindowMode::Normal, "resizable=1,minimizable=1,dialog=0,"),
        (sized, WindowMode::Normal, "resizable=1,minimizable=1,dialog=0,width=800,height=600"),
        (
            placed,
            WindowMode::Normal,
            "resizable=1,minimizable=1,dialog=0,width=800,height=600,left=10,top=-20",
        ),
        (placed, WindowMode::Maximized, "resizable=1,minimizable=1,dialog=0,"),
        (
            WindowFeatures::new().with_position(1, 2),
            WindowMode::Normal,
            "resizable=1,minimizable=1,dialog=0,",
        ),
    ];

    for (features, mode, expected) in cases {
        assert_eq!(features.render(mode), expected, "{features:?} {mode}");
    }
}

#[test]
fn create_app_bundle_writes_filled_templates() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("xul");

    let mut bundle = AppBundle::new("demo", "https://example.com/");
    bundle.title = "Demo App".into();
    bundle.window_mode = WindowMode::Kiosk;

    create_app_bundle(&dir, &bundle).unwrap();

    let read = |rel: &str| fs::read_to_string(dir.join(rel)).unwrap();

    assert_eq!(read("chrome.manifest"), "manifest chrome/chrome.manifest");
    assert_eq!(read("chrome/chrome.manifest"), "content firelink_demo content/");

    let ini = read("application.ini");
    assert!(ini.contains("Vendor=firelink contributors\n"), "{ini}");
    assert!(ini.contains("Name=firelink_demo\n"), "{ini}");
    assert!(ini.contains("Version=1.0\n"), "{ini}");
    assert!(ini.contains("BuildID=1\n"), "{ini}");
    assert!(ini.contains("ID=app_demo@firelink.io\n"), "{ini}");
    assert!(ini.contains("Profile=firelink_profile\n"), "{ini}");

    let xul = read("chrome/content/main.xul");
    assert!(xul.contains(r#"id="Wdemo""#), "{xul}");
    assert!(xul.contains(r#"title="Demo App""#), "{xul}");
    assert!(xul.contains(r#"sizemode="fullscreen""#), "{xul}");
    assert!(xul.contains(r#"<browser src="https://example.com/""#), "{xul}");
    assert!(xul.contains("chrome://firelink_demo/content/main.js"), "{xul}");

    let prefs = read("defaults/preferences/prefs.js");
    assert!(prefs.contains("chrome://firelink_demo/content/main.xul"), "{prefs}");
    assert!(
        prefs.contains(r#""toolkit.defaultChromeFeatures", "resizable=1,minimizable=1,dialog=0,""#),
        "{prefs}"
    );

    // Script braces survive untouched.
    assert_eq!(read("chrome/content/main.js"), templates::MAIN_JS);
    assert!(dir.join("chrome/icons/default").is_dir());
}

#[test]
fn create_app_bundle_replaces_previous_contents() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("xul");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("stale.txt"), "old").unwrap();

    create_app_bundle(&dir, &AppBundle::new("demo", "about:blank")).unwrap();

    assert!(!dir.join("stale.txt").exists());
    assert!(dir.join("application.ini").is_file());
}

#[test]
fn create_app_bundle_copies_icon_with_window_id() {
    let tmp = tempfile::tempdir().unwrap();
    let icon = tmp.path().join("logo.ico");
    fs::write(&icon, b"ICO-DATA").unwrap();
    let dir = tmp.path().join("xul");

    let mut bundle = AppBundle::new("demo", "about:blank");
    bundle.icon = Some(icon);
    create_app_bundle(&dir, &bundle).unwrap();

    let copied = dir.join("chrome/icons/default/Wdemo.ico");
    assert_eq!(fs::read(copied).unwrap(), b"ICO-DATA");
}

#[test]
fn create_app_bundle_rejects_bad_input() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("xul");

    let err = create_app_bundle(&dir, &AppBundle::new("", "about:blank")).unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)), "{err:?}");

    let err = create_app_bundle(&dir, &AppBundle::new("a/b", "about:blank")).unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)), "{err:?}");
    assert!(!dir.exists());

    let mut bundle = AppBundle::new("demo", "about:blank");
    bundle.icon = Some(tmp.path().join("missing.png"));
    let err = create_app_bundle(&dir, &bundle).unwrap_err();
    assert!(matches!(err, AppError::Filesystem { .. }), "{err:?}");
}

#[test]
fn render_leaves_unknown_placeholders() {
    let out = render("{a} {b} {", &[("a", "1")]);
    assert_eq!(out, "1 {b} {");
}
