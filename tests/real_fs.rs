mod common;
use crate::common::init_tracing;

use std::fs;

use tempfile::tempdir;

use air::config::{
    default_config, ConfigLoader, ConfigLookup, WorkingContext, DEFAULT_CONFIG_FILE,
};
use air::errors::AirError;
use air::fs::RealFileSystem;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn conventional_file_on_disk_is_picked_up() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        r#"
root = "."
tmp_dir = ".cache"

[build]
bin = ".cache/app"
cmd = "go build -o ./.cache/app ."
log = "errors.log"
include_ext = ["go"]
exclude_dir = ["./vendor/"]
delay = 500
"#,
    )?;

    let ctx = WorkingContext::detached().with_current_dir(dir.path());
    let cfg = ConfigLoader::new(&RealFileSystem, &ctx).resolve(ConfigLookup::NotProvided)?;

    assert_eq!(cfg.root(), dir.path());
    assert_eq!(cfg.tmp_path(), dir.path().join(".cache"));
    assert_eq!(cfg.build_log_path(), dir.path().join(".cache").join("errors.log"));
    assert_eq!(cfg.build().exclude_dir, vec!["vendor"]);
    assert_eq!(cfg.build().delay, 500);

    Ok(())
}

#[test]
fn empty_directory_yields_defaults() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let ctx = WorkingContext::detached().with_current_dir(dir.path());
    let cfg = ConfigLoader::new(&RealFileSystem, &ctx).resolve(ConfigLookup::NotProvided)?;

    assert_eq!(cfg.root(), dir.path());
    assert_eq!(cfg.build(), &default_config().build);
    assert_eq!(cfg.color(), &default_config().color);

    Ok(())
}

#[test]
fn explicit_missing_file_on_disk_is_not_found() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let missing = dir.path().join("missing.toml");
    let ctx = WorkingContext::detached().with_current_dir(dir.path());

    let result = ConfigLoader::new(&RealFileSystem, &ctx).resolve(ConfigLookup::Found(missing));

    match result {
        Err(err) => assert!(err.is_not_found(), "unexpected error: {err:?}"),
        Ok(_) => panic!("Expected error, got Ok"),
    }

    Ok(())
}

#[test]
fn explicit_directory_instead_of_file_is_an_error() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let ctx = WorkingContext::detached().with_current_dir(dir.path());

    let result = ConfigLoader::new(&RealFileSystem, &ctx)
        .resolve(ConfigLookup::Found(dir.path().to_path_buf()));

    assert!(matches!(result, Err(AirError::ConfigRead { .. })));

    Ok(())
}
