//! Tests for recipe discovery and layered loading.

use packsmith_config::{ConfigDiscovery, ConfigError};
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
#[serial]
fn discovers_packsmith_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("packsmith.toml"),
        r#"
[options]
src_path = "/p/app"
public_path = "/static/"

[stages]
typescript = true
styles = true

[[html]]
template = "/p/app/index.html"
"#,
    )
    .unwrap();

    let discovery = ConfigDiscovery::new(dir.path());
    let found = discovery.find().unwrap();
    assert_eq!(found.file_name().unwrap(), "packsmith.toml");

    let config = discovery.load().unwrap();
    assert_eq!(config.options.src_path, Some(PathBuf::from("/p/app")));
    assert_eq!(config.options.public_path.as_deref(), Some("/static/"));
    assert!(config.stages.typescript);
    assert!(config.stages.styles);
    assert!(!config.stages.assets);
    assert_eq!(config.html[0].template, PathBuf::from("/p/app/index.html"));
}

#[test]
#[serial]
fn discovers_package_json_field() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
  "name": "site",
  "packsmith": {
    "options": { "entry_point": "src/main.ts", "devServer": { "port": 3000 } },
    "stages": { "manifest": true }
  }
}"#,
    )
    .unwrap();

    let discovery = ConfigDiscovery::new(dir.path());
    assert_eq!(discovery.find().unwrap().file_name().unwrap(), "package.json");

    let config = discovery.load().unwrap();
    assert_eq!(
        config.options.entry_point,
        Some(vec![PathBuf::from("src/main.ts")])
    );
    assert_eq!(config.options.dev_server.unwrap().port, 3000);
    assert!(config.stages.manifest);
}

#[test]
#[serial]
fn toml_wins_over_package_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("packsmith.toml"), "[stages]\nstyles = true\n").unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "packsmith": { "stages": { "typescript": true } } }"#,
    )
    .unwrap();

    let config = ConfigDiscovery::new(dir.path()).load().unwrap();
    assert!(config.stages.styles);
    assert!(!config.stages.typescript);
}

#[test]
#[serial]
fn environment_overrides_file_values() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("packsmith.toml"),
        "[options]\npublic_path = \"/from-file/\"\n",
    )
    .unwrap();

    unsafe { env::set_var("PACKSMITH_OPTIONS__PUBLIC_PATH", "/from-env/") };
    let result = ConfigDiscovery::new(dir.path()).load();
    unsafe { env::remove_var("PACKSMITH_OPTIONS__PUBLIC_PATH") };

    let config = result.unwrap();
    assert_eq!(config.options.public_path.as_deref(), Some("/from-env/"));
}

#[test]
#[serial]
fn load_or_default_without_recipe() {
    let dir = TempDir::new().unwrap();
    let config = ConfigDiscovery::new(dir.path()).load_or_default().unwrap();
    assert_eq!(config, Default::default());
}

#[test]
#[serial]
fn unknown_option_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("packsmith.toml"),
        "[options]\nsource = \"/p/src\"\n",
    )
    .unwrap();

    let err = ConfigDiscovery::new(dir.path()).load().unwrap_err();
    assert!(matches!(err, ConfigError::Extract(_)));
}

#[test]
#[serial]
fn environment_port_layers_over_file_dev_server() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("packsmith.toml"),
        "[options.devServer]\nport = 3000\nhistoryApiFallback = false\n",
    )
    .unwrap();

    for var in ["PACKSMITH_OPTIONS__DEV_SERVER__PORT", "PACKSMITH_OPTIONS__DEVSERVER__PORT"] {
        unsafe { env::set_var(var, "4000") };
        let result = ConfigDiscovery::new(dir.path()).load();
        unsafe { env::remove_var(var) };

        let dev_server = result.unwrap().options.dev_server.unwrap();
        assert_eq!(dev_server.port, 4000, "{var}");
        assert!(!dev_server.history_api_fallback, "{var}");
    }
}
