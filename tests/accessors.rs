#![cfg(unix)]

mod common;
use crate::common::{work_ctx, RawConfigBuilder};

use std::path::PathBuf;
use std::time::Duration;

use air::config::{default_config, ColorRole, Config, WorkingContext};

#[test]
fn empty_tmp_dir_becomes_tmp() {
    let cfg = RawConfigBuilder::new().root("/proj").normalize_in("/work");

    assert_eq!(cfg.tmp_dir(), "tmp");
    assert_eq!(cfg.tmp_path(), PathBuf::from("/proj/tmp"));
}

#[test]
fn exclude_dirs_are_cleaned_in_order() {
    let cfg = RawConfigBuilder::new()
        .root("/proj")
        .exclude_dir("a/./b")
        .exclude_dir("c/../d")
        .exclude_dir("vendor//")
        .exclude_dir("d")
        .normalize_in("/work");

    assert_eq!(cfg.build().exclude_dir, vec!["a/b", "d", "vendor", "d"]);
}

#[test]
fn derived_paths_agree_with_full_path() {
    let cfg = RawConfigBuilder::from_defaults()
        .root("/proj")
        .tmp_dir("build/tmp")
        .bin("./out/app")
        .normalize_in("/work");

    assert_eq!(cfg.tmp_path(), cfg.full_path(cfg.tmp_dir()));
    assert_eq!(cfg.bin_path(), cfg.full_path(&cfg.build().bin));
    assert_eq!(cfg.bin_path(), PathBuf::from("/proj/out/app"));
    assert_eq!(
        cfg.build_log_path(),
        PathBuf::from("/proj/build/tmp/build-errors.log")
    );
}

#[test]
fn absolute_subpaths_stay_under_root() {
    let cfg = RawConfigBuilder::from_defaults()
        .root("/proj")
        .tmp_dir("/tmp")
        .watch_dir("/etc")
        .bin("/usr/bin/app")
        .normalize_in("/work");

    assert_eq!(cfg.full_path("/usr/local/bin"), PathBuf::from("/proj/usr/local/bin"));
    assert_eq!(cfg.full_path("a/../b"), PathBuf::from("/proj/b"));
    assert_eq!(cfg.tmp_path(), PathBuf::from("/proj/tmp"));
    assert_eq!(cfg.watch_root(), PathBuf::from("/proj/etc"));
    assert_eq!(cfg.bin_path(), PathBuf::from("/proj/usr/bin/app"));
    assert_eq!(
        cfg.build_log_path(),
        PathBuf::from("/proj/tmp/build-errors.log")
    );
}

#[test]
fn non_utf8_root_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    use air::errors::AirError;

    let cwd = PathBuf::from(OsStr::from_bytes(b"/work/\xff\xfe"));
    let ctx = WorkingContext::detached().with_current_dir(cwd);

    let result = Config::normalize(RawConfigBuilder::new().root(".").build(), &ctx);
    assert!(matches!(result, Err(AirError::NonUtf8Path(_))));
}

#[test]
fn non_utf8_home_is_rejected_only_when_used() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    use air::errors::AirError;

    let ctx = work_ctx().with_home_dir(PathBuf::from(OsStr::from_bytes(b"/home/\xff")));

    let tilde = Config::normalize(RawConfigBuilder::new().root("~/app").build(), &ctx);
    assert!(matches!(tilde, Err(AirError::NonUtf8Path(_))));

    let plain = Config::normalize(RawConfigBuilder::new().root("app").build(), &ctx).unwrap();
    assert_eq!(plain.root(), PathBuf::from("/work/app"));
}

#[test]
fn watch_root_prefers_watch_dir() {
    let plain = RawConfigBuilder::new().root("/proj").normalize_in("/work");
    assert_eq!(plain.watch_root(), PathBuf::from("/proj"));

    let nested = RawConfigBuilder::new()
        .root("/proj")
        .watch_dir("cmd/server")
        .normalize_in("/work");
    assert_eq!(nested.watch_root(), PathBuf::from("/proj/cmd/server"));
}

#[test]
fn build_delay_is_milliseconds() {
    let cfg = RawConfigBuilder::new().root("/proj").delay(1000).normalize_in("/work");
    assert_eq!(cfg.build_delay(), Duration::from_secs(1));

    let zero = RawConfigBuilder::new().root("/proj").normalize_in("/work");
    assert_eq!(zero.build_delay(), Duration::ZERO);
}

#[test]
fn relative_path_against_root() {
    let cfg = RawConfigBuilder::new().root("/proj").normalize_in("/work");

    assert_eq!(
        cfg.relative_path("/proj/src/main.go"),
        Some(PathBuf::from("src/main.go"))
    );
    assert_eq!(cfg.relative_path("/proj"), Some(PathBuf::from(".")));
    assert_eq!(
        cfg.relative_path("/other/x"),
        Some(PathBuf::from("../other/x"))
    );
    assert_eq!(cfg.relative_path("src/main.go"), None);
}

#[test]
fn root_expansion_handles_dots_and_home() {
    let ctx = WorkingContext::detached()
        .with_current_dir("/work/sub")
        .with_home_dir("/home/dev");

    let dotted = Config::normalize(RawConfigBuilder::new().root("../proj/./x").build(), &ctx).unwrap();
    assert_eq!(dotted.root(), PathBuf::from("/work/proj/x"));

    let home = Config::normalize(RawConfigBuilder::new().root("~/code/app").build(), &ctx).unwrap();
    assert_eq!(home.root(), PathBuf::from("/home/dev/code/app"));

    let bare_home = Config::normalize(RawConfigBuilder::new().root("~").build(), &ctx).unwrap();
    assert_eq!(bare_home.root(), PathBuf::from("/home/dev"));

    let empty = Config::normalize(RawConfigBuilder::new().build(), &ctx).unwrap();
    assert_eq!(empty.root(), PathBuf::from("/work/sub"));
}

#[test]
fn normalized_root_is_written_back_to_raw() {
    let cfg = Config::normalize(default_config(), &work_ctx()).unwrap();
    assert_eq!(cfg.raw().root, "/work");
}

#[test]
fn normalizing_twice_changes_nothing() {
    let ctx = work_ctx();
    let once = RawConfigBuilder::from_defaults()
        .root("./a/../b")
        .exclude_dir("x/./y/..")
        .normalize_in("/work");
    let twice = Config::normalize(once.clone().into_raw(), &ctx).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn color_info_covers_every_role() {
    let cfg = Config::normalize(default_config(), &work_ctx()).unwrap();
    let info = cfg.color_info();

    assert_eq!(info.len(), 5);
    assert_eq!(info[&ColorRole::Main], "magenta");
    assert_eq!(info[&ColorRole::Watcher], "cyan");
    assert_eq!(info[&ColorRole::Build], "yellow");
    assert_eq!(info[&ColorRole::Runner], "green");
    assert_eq!(info[&ColorRole::App], "white");

    let names: Vec<&str> = info.keys().map(|r| r.as_str()).collect();
    assert_eq!(names, vec!["main", "watcher", "build", "runner", "app"]);
}

#[test]
fn color_names_are_not_validated() {
    let mut raw = default_config();
    raw.color.app = "definitely-not-a-color".to_string();

    let cfg = Config::normalize(raw, &work_ctx()).unwrap();
    assert_eq!(cfg.color_info()[&ColorRole::App], "definitely-not-a-color");
}

#[test]
fn membership_helpers_ignore_order_and_formatting() {
    let cfg = Config::normalize(default_config(), &work_ctx()).unwrap();
    let build = cfg.build();

    assert!(build.includes_ext("go"));
    assert!(build.includes_ext(".tmpl"));
    assert!(!build.includes_ext("rs"));

    assert!(build.excludes_dir("vendor"));
    assert!(build.excludes_dir("./tmp/"));
    assert!(!build.excludes_dir("src"));
}
