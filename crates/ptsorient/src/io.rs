//! File helpers for the CLI: read the input, place and write the output.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PtsError;

/// Output directory used when none is given, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "reversed_pts";

/// Read the whole input file.
///
/// Bytes that are not UTF-8 are replaced with U+FFFD. Such bytes can only sit
/// in non-record lines (exporter comments), which the pipeline drops anyway.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String, PtsError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| PtsError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// `<out_dir>/<input file name>` with the extension forced to `.pts`.
pub fn output_path<P: AsRef<Path>, Q: AsRef<Path>>(input: P, out_dir: Q) -> PathBuf {
    let name = input
        .as_ref()
        .file_name()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));
    let mut out = out_dir.as_ref().join(name);
    out.set_extension("pts");
    out
}

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<(), PtsError> {
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| PtsError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write the full rendered text in one call, so a failed open leaves no file behind.
pub fn write_output<P: AsRef<Path>>(path: P, text: &str) -> Result<(), PtsError> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|source| PtsError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn output_path_forces_pts_extension() {
        let out = output_path("/data/in/loop_a.txt", "/tmp/out");
        assert_eq!(out, Path::new("/tmp/out/loop_a.pts"));
        let out = output_path("relative/loop_b.pts", DEFAULT_OUT_DIR);
        assert_eq!(out, Path::new("reversed_pts/loop_b.pts"));
        let out = output_path("noext", "o");
        assert_eq!(out, Path::new("o/noext.pts"));
    }

    #[test]
    fn missing_input_is_open_error() {
        let dir = tempdir().unwrap();
        let err = read_input(dir.path().join("absent.pts")).unwrap_err();
        assert!(matches!(err, PtsError::OpenInput { .. }));
        assert!(err.to_string().starts_with("error opening input file"));
    }

    #[test]
    fn latin1_comment_does_not_reject_the_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("loop.pts");
        fs::write(&input, b"# Cr\xe9\xe9 par scanner\n0 0 0\n2 0 0\n2 2 0\n0 2 0\n").unwrap();
        let text = read_input(&input).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("# Cr"));
        assert_eq!(lines.collect::<Vec<_>>(), vec!["0 0 0", "2 0 0", "2 2 0", "0 2 0"]);
    }

    #[test]
    fn ensure_dir_then_write_round_trip() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        let target = nested.join("x.pts");
        write_output(&target, "#CCW. No reversal needed\n0 0 0\n").unwrap();
        assert_eq!(
            read_input(&target).unwrap(),
            "#CCW. No reversal needed\n0 0 0\n"
        );
    }

    #[test]
    fn write_into_missing_dir_fails_without_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("missing").join("x.pts");
        let err = write_output(&target, "data").unwrap_err();
        assert!(matches!(err, PtsError::CreateOutput { .. }));
        assert!(!target.exists());
    }
}
