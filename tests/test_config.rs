use docroot::config::Config;
use docroot::http::sanitize::SanitizePolicy;
use std::path::PathBuf;

#[test]
fn test_config_defaults_match_reference_constants() {
    let cfg = Config::default();

    assert_eq!(cfg.listen_addr, "0.0.0.0:7000");
    assert_eq!(cfg.document_root, PathBuf::from("."));
    assert_eq!(cfg.buffer_capacity, 0x100000);
    assert_eq!(cfg.sanitize, SanitizePolicy::SinglePass);
}

#[test]
fn test_config_listen_from_env() {
    // Only this test touches the environment
    unsafe {
        std::env::remove_var("DOCROOT_CONFIG");
        std::env::remove_var("LISTEN");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:7000");

    unsafe {
        std::env::set_var("LISTEN", "127.0.0.1:8000");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8000");
    unsafe {
        std::env::remove_var("LISTEN");
    }
}

#[test]
fn test_config_from_yaml() {
    let cfg = Config::from_yaml_str(
        "listen_addr: 127.0.0.1:9000\ndocument_root: /srv/www\nbuffer_capacity: 4096\nsanitize: normalize\n",
    )
    .unwrap();

    assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.document_root, PathBuf::from("/srv/www"));
    assert_eq!(cfg.buffer_capacity, 4096);
    assert_eq!(cfg.sanitize, SanitizePolicy::Normalize);
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml_str("document_root: public\n").unwrap();

    assert_eq!(cfg.listen_addr, "0.0.0.0:7000");
    assert_eq!(cfg.document_root, PathBuf::from("public"));
    assert_eq!(cfg.sanitize, SanitizePolicy::SinglePass);
}

#[test]
fn test_config_rejects_zero_capacity() {
    assert!(Config::from_yaml_str("buffer_capacity: 0\n").is_err());
}

#[test]
fn test_config_rejects_unknown_keys() {
    assert!(Config::from_yaml_str("listen: 127.0.0.1:1\n").is_err());
}

#[test]
fn test_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("docroot.yaml");
    std::fs::write(&path, "sanitize: single-pass\nbuffer_capacity: 65536\n").unwrap();

    let cfg = Config::from_file(&path).unwrap();

    assert_eq!(cfg.buffer_capacity, 65536);
    assert_eq!(cfg.sanitize, SanitizePolicy::SinglePass);
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
}
