// src/paths.rs

//! Lexical path helpers used by config normalization.
//!
//! Nothing here touches the filesystem: the project root is allowed to not
//! exist yet, so canonicalization is not an option.

use std::path::{Component, Path, PathBuf};

use crate::config::WorkingContext;
use crate::errors::{AirError, Result};

/// Clean a path given as a string and hand back a string.
///
/// See [`clean`] for the rules.
pub fn clean_path(path: &str) -> String {
    clean(Path::new(path)).to_string_lossy().into_owned()
}

/// Lexically clean `path`:
///
/// - repeated separators collapse and `.` segments disappear,
/// - `..` folds against the preceding normal segment,
/// - `..` directly above the root is dropped (`/..` is `/`),
/// - leading `..` on a relative path is kept,
/// - an empty result becomes `.`.
///
/// Cleaning an already clean path returns it unchanged.
pub fn clean(path: &Path) -> PathBuf {
    let mut prefix = None;
    let mut rooted = false;
    let mut parts: Vec<Component<'_>> = Vec::new();

    for comp in path.components() {
        match comp {
            Component::Prefix(_) => prefix = Some(comp),
            Component::RootDir => rooted = true,
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(comp),
            },
            Component::Normal(_) => parts.push(comp),
        }
    }

    let mut out = PathBuf::new();
    if let Some(prefix) = prefix {
        out.push(prefix);
    }
    if rooted {
        out.push(Component::RootDir);
    }
    for part in parts {
        out.push(part);
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Expand `raw` into an absolute, cleaned path.
///
/// A leading `~` is replaced by the context's home directory; anything still
/// relative afterwards is resolved against the context's current directory.
/// A home directory that is not valid UTF-8 cannot be substituted and is an
/// error.
pub fn expand_path(raw: &str, ctx: &WorkingContext) -> Result<PathBuf> {
    let home = if raw.starts_with('~') {
        ctx.home_dir().map(utf8_str).transpose()?
    } else {
        None
    };
    let expanded = shellexpand::tilde_with_context(raw, || home).into_owned();

    let path = Path::new(&expanded);
    if path.is_absolute() {
        return Ok(clean(path));
    }

    let cwd = ctx.current_dir().ok_or_else(|| {
        AirError::WorkingDir(format!("needed to expand relative path {raw:?}"))
    })?;
    Ok(clean(&cwd.join(path)))
}

fn utf8_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| AirError::NonUtf8Path(path.to_path_buf()))
}

/// Join `path` under `base` and clean the result.
///
/// `path` always lands below `base`: its root and volume prefix, if any, are
/// dropped, so `/proj` joined with `/tmp` is `/proj/tmp`.
pub fn join_path(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    let mut joined = base.to_path_buf();
    for comp in path.as_ref().components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => {}
            _ => joined.push(comp),
        }
    }
    clean(&joined)
}

/// Express `target` relative to `base`, purely lexically.
///
/// Returns `None` when no relative path exists: one side absolute and the
/// other not, different volume prefixes, or `base` climbing above its own
/// starting point with `..`.
pub fn relative_path(base: &Path, target: &Path) -> Option<PathBuf> {
    let base = clean(base);
    let target = clean(target);
    if base.is_absolute() != target.is_absolute() {
        return None;
    }

    let base_parts: Vec<Component<'_>> = base
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    let target_parts: Vec<Component<'_>> = target
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    let common = base_parts
        .iter()
        .zip(target_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let rest_base = &base_parts[common..];
    let rest_target = &target_parts[common..];

    if rest_base.iter().any(|c| !matches!(c, Component::Normal(_))) {
        return None;
    }
    if rest_target
        .iter()
        .any(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
    {
        return None;
    }

    let mut out = PathBuf::new();
    for _ in rest_base {
        out.push("..");
    }
    for part in rest_target {
        out.push(part);
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    Some(out)
}
