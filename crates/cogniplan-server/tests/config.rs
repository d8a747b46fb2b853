use std::io::Write;

use cogniplan_core::models::weekday::Weekday;
use cogniplan_server::config::ServerConfig;

fn config(template_path: Option<std::path::PathBuf>) -> ServerConfig {
    ServerConfig {
        bind: "127.0.0.1:0".parse().unwrap(),
        template_path,
    }
}

#[test]
fn missing_path_uses_built_in_week() {
    let template = config(None).load_template().unwrap();

    assert_eq!(template.days().count(), 5);
    assert_eq!(template.total_capacity(Weekday::Thursday), 8);
}

#[test]
fn template_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"Saturday": [{{"start": "10:00", "end": "12:00", "capacity": 6}}]}}"#
    )
    .unwrap();

    let template = config(Some(file.path().to_path_buf())).load_template().unwrap();

    assert_eq!(template.days().collect::<Vec<_>>(), vec![Weekday::Saturday]);
    assert_eq!(template.total_capacity(Weekday::Saturday), 6);
}

#[test]
fn invalid_template_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"Monday": [{{"start": "10:00", "end": "12:00", "capacity": 0}}]}}"#
    )
    .unwrap();

    let err = config(Some(file.path().to_path_buf())).load_template().unwrap_err();

    assert!(err.to_string().contains("invalid template"), "{err}");
}

#[test]
fn unreadable_template_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = config(Some(dir.path().join("missing.json")))
        .load_template()
        .unwrap_err();

    assert!(err.to_string().contains("failed to read template"), "{err}");
}
