use super::*;
use serial_test::serial;

#[test]
#[serial]
fn firelink_dir_prefers_xdg_cache() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    unsafe { std::env::set_var("XDG_CACHE_HOME", tmp.path()) };

    assert_eq!(firelink_dir(), tmp.path().join(PROGRAM_NAME));
    assert_eq!(default_runtime_dir(), tmp.path().join(PROGRAM_NAME).join("runtime"));

    unsafe { std::env::remove_var("XDG_CACHE_HOME") };
}

#[test]
#[serial]
fn empty_xdg_cache_falls_back_to_home() {
    unsafe { std::env::set_var("XDG_CACHE_HOME", "") };

    let dir = firelink_dir();
    assert!(dir.ends_with(format!(".cache/{PROGRAM_NAME}")), "{dir:?}");

    unsafe { std::env::remove_var("XDG_CACHE_HOME") };
}

#[test]
#[serial]
fn packager_program_cases() {
    let cases: &[(Option<&str>, &str)] = &[
        (None, DEFAULT_PACKAGER),
        (Some(""), DEFAULT_PACKAGER),
        (Some("/opt/tools/pack"), "/opt/tools/pack"),
    ];

    for (value, expected) in cases {
        match value {
            Some(v) => unsafe { std::env::set_var(PACKAGER_ENV, v) },
            None => unsafe { std::env::remove_var(PACKAGER_ENV) },
        }
        assert_eq!(packager_program(), OsString::from(expected), "env {value:?}");
    }

    unsafe { std::env::remove_var(PACKAGER_ENV) };
}

#[test]
fn temp_shortcut_path_uses_app_name() {
    let path = temp_shortcut_path("demo");
    assert_eq!(path.file_name().unwrap(), "demo.lnk");
    assert_eq!(path.parent().unwrap(), std::env::temp_dir());
}
