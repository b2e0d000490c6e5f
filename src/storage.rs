use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::error::{SeedError, SeedResult};

const INDENT: &[u8] = b"    ";

pub fn read_json<T: DeserializeOwned>(path: &Path) -> SeedResult<T> {
    let raw = fs::read(path).map_err(|e| SeedError::read_file(path, e))?;
    serde_json::from_slice(&raw).map_err(|e| SeedError::parse_json(path, e))
}

/// Pretty JSON with four-space indentation. Non-ASCII is written as-is.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> SeedResult<Vec<u8>> {
    let mut out = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut ser)
        .map_err(|source| SeedError::Serialize { source })?;
    Ok(out)
}

/// Replaces `path` with the JSON rendering of `value`.
///
/// The bytes go to a sibling temp file that is synced and then renamed over
/// the destination, so a reader sees either the old file or the new one.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> SeedResult<()> {
    let json = to_pretty_json(value)?;

    let parent = parent_dir(path);
    fs::create_dir_all(parent).map_err(|e| SeedError::write_file(parent, e))?;

    let temp_path = temp_path_for(path);
    {
        let mut file =
            fs::File::create(&temp_path).map_err(|e| SeedError::write_file(&temp_path, e))?;
        file.write_all(&json)
            .map_err(|e| SeedError::write_file(&temp_path, e))?;
        file.sync_all()
            .map_err(|e| SeedError::write_file(&temp_path, e))?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SeedError::atomic_rename(temp_path.clone(), path.to_path_buf(), e)
    })?;
    sync_dir(parent)?;

    debug!(path = %path.display(), bytes = json.len(), "wrote json");
    Ok(())
}

/// Directory holding `path`; `.` for a bare file name.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Persists the rename itself.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> SeedResult<()> {
    fs::File::open(dir)
        .and_then(|d| d.sync_all())
        .map_err(|e| SeedError::write_file(dir, e))
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> SeedResult<()> {
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out.json".into());
    path.with_file_name(format!("{name}.tmp.{}", std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pretty_json_uses_four_spaces_and_keeps_unicode() {
        let bytes = to_pretty_json(&json!([{ "sessionsWanted": "2–3" }])).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "[\n    {\n        \"sessionsWanted\": \"2–3\"\n    }\n]");
    }

    #[test]
    fn write_then_read_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "stale contents that are not json").unwrap();

        write_json_atomic(&path, &vec![1, 2, 3]).unwrap();
        let back: Vec<u32> = read_json(&path).unwrap();
        assert_eq!(back, vec![1, 2, 3]);

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("profiles.json");
        write_json_atomic(&path, &Vec::<u32>::new()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn bare_file_name_lives_in_current_dir() {
        assert_eq!(parent_dir(Path::new("users.json")), Path::new("."));
        assert_eq!(parent_dir(Path::new("out/users.json")), Path::new("out"));
    }

    #[test]
    fn directory_sync_succeeds_after_write() {
        let dir = tempfile::tempdir().unwrap();
        write_json_atomic(&dir.path().join("skills.json"), &vec!["Rust"]).unwrap();
        sync_dir(dir.path()).unwrap();
    }

    #[test]
    fn read_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_json::<Vec<u32>>(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SeedError::ReadFile { .. }));
    }

    #[test]
    fn read_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skills.json");
        fs::write(&path, "[{\"name\": ").unwrap();
        let err = read_json::<Vec<serde_json::Value>>(&path).unwrap_err();
        assert!(matches!(err, SeedError::ParseJson { .. }));
    }
}
