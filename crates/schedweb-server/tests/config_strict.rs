#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use schedweb_server::config;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn deny_unknown_fields() {
    let bad = r#"
port: 8080
static_rot: "public" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("port: 8081\n").expect("must parse");
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.static_root, Path::new("public"));
}

#[test]
fn port_zero_is_rejected() {
    let err = config::load_from_str("port: 0\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn defaults_without_environment() {
    let cfg = config::load_with(env(&[])).expect("defaults");
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.listen_addr().unwrap().to_string(), "0.0.0.0:3000");
}

#[test]
fn port_and_root_from_environment() {
    let cfg = config::load_with(env(&[("PORT", "4100"), ("STATIC_ROOT", "/srv/www")])).unwrap();
    assert_eq!(cfg.port, 4100);
    assert_eq!(cfg.static_root, Path::new("/srv/www"));
}

#[test]
fn empty_port_falls_back_to_default() {
    let cfg = config::load_with(env(&[("PORT", "")])).unwrap();
    assert_eq!(cfg.port, 3000);
}

#[test]
fn garbage_port_is_bad_request() {
    let err = config::load_with(env(&[("PORT", "eighty")])).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn environment_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "host: \"127.0.0.1\"\nport: 9000\nstatic_root: \"assets\"").unwrap();
    let path = file.path().display().to_string();

    let cfg = config::load_with(env(&[("SCHEDWEB_CONFIG", path.as_str()), ("PORT", "9001")])).unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 9001);
    assert_eq!(cfg.static_root, Path::new("assets"));
}

#[test]
fn missing_config_file_is_internal() {
    let err = config::load_with(env(&[("SCHEDWEB_CONFIG", "/definitely/not/here.yaml")]))
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}
