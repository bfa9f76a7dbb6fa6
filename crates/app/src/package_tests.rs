use super::*;
use firelink_runtime::{DEFAULT_PACKAGER, PACKAGER_ENV};
use serial_test::serial;
use std::path::PathBuf;

fn args(cmd: &Command) -> Vec<OsString> {
    cmd.get_args().map(OsStr::to_os_string).collect()
}

#[test]
fn command_without_icon() {
    let packager = Packager::new("pack");
    let cmd = packager.command(Path::new("out/demo.py"), Path::new("out"), None);

    assert_eq!(cmd.get_program(), "pack");
    let expected: Vec<OsString> = [
        "out/demo.py",
        "--windowed",
        "--distpath",
        "out",
        "--workpath",
        PathBuf::from("out").join("build").to_str().unwrap(),
        "--specpath",
        "out",
    ]
    .iter()
    .map(OsString::from)
    .collect();
    assert_eq!(args(&cmd), expected);
}

#[test]
fn command_appends_icon() {
    let packager = Packager::new("pack");
    let cmd = packager.command(Path::new("a.py"), Path::new("o"), Some(Path::new("i.ico")));

    let got = args(&cmd);
    assert_eq!(got[got.len() - 2..], [OsString::from("--icon"), OsString::from("i.ico")]);
}

#[test]
#[serial]
fn from_env_honours_override() {
    unsafe { std::env::remove_var(PACKAGER_ENV) };
    assert_eq!(Packager::from_env().program(), DEFAULT_PACKAGER);

    unsafe { std::env::set_var(PACKAGER_ENV, "/opt/pack") };
    assert_eq!(Packager::default().program(), "/opt/pack");

    unsafe { std::env::remove_var(PACKAGER_ENV) };
}

#[test]
fn missing_program_is_tool_failure() {
    let packager = Packager::new("firelink-no-such-packager");
    let err = packager
        .package(Path::new("a.py"), Path::new("out"), None)
        .unwrap_err();

    match err {
        AppError::ExternalToolFailure { tool, detail } => {
            assert_eq!(tool, "firelink-no-such-packager");
            assert!(detail.starts_with("could not start"), "{detail}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn exit_status_decides_outcome() {
    let out = Path::new("out");

    Packager::new("true")
        .package(Path::new("a.py"), out, None)
        .unwrap();

    let err = Packager::new("false")
        .package(Path::new("a.py"), out, None)
        .unwrap_err();
    assert!(
        matches!(&err, AppError::ExternalToolFailure { detail, .. } if detail.starts_with("exited")),
        "{err:?}"
    );
}
