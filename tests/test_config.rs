use dynhttp::config::Config;
use std::time::Duration;

// Env mutation happens in a single test so parallel test threads cannot
// observe each other's variables.
#[test]
fn test_config_defaults_and_env_override() {
    unsafe {
        std::env::remove_var("CONFIG");
        std::env::remove_var("LISTEN");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.server.recv_timeout_ms, 2000);
    assert_eq!(cfg.recv_timeout(), Duration::from_millis(2000));

    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:3000");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    unsafe {
        std::env::remove_var("LISTEN");
    }
}

#[test]
fn test_config_from_yaml_file() {
    let path = std::env::temp_dir().join("dynhttp-test-config.yaml");
    std::fs::write(
        &path,
        "server:\n  listen_addr: 127.0.0.1:9090\n  recv_timeout_ms: 500\n",
    )
    .unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let cfg: Config = serde_yaml::from_str(&raw).unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9090");
    assert_eq!(cfg.recv_timeout(), Duration::from_millis(500));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_config_yaml_partial_sections_use_defaults() {
    let cfg: Config = serde_yaml::from_str("server:\n  listen_addr: 127.0.0.1:9091\n").unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9091");
    assert_eq!(cfg.server.recv_timeout_ms, 2000);
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
}
