//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod info;
pub mod score;
#[cfg(feature = "mcp")]
pub mod serve;

/// Path argument that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read a file, or standard input when `path` is `-`.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        read_limited(std::io::stdin().lock(), "standard input", max_bytes)
    } else {
        read_input_file(path, max_bytes)
    }
}

/// Read a stream to the end, stopping one byte past the limit.
///
/// The size check runs on raw bytes before decoding, so a limit that cuts a
/// multibyte character still reports the input as too large.
fn read_limited<R: Read>(reader: R, name: &str, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    match max_bytes {
        Some(max) => {
            let cap = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
            reader
                .take(cap)
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read {name}"))?;
            if buf.len() > max {
                anyhow::bail!("input too large: {name} exceeds {max} bytes");
            }
        }
        None => {
            let mut reader = reader;
            reader
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read {name}"))?;
        }
    }
    String::from_utf8(buf).with_context(|| format!("{name} is not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn reads_file_within_limit() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("a.txt")).unwrap();
        std::fs::write(&path, "Hello there.").unwrap();
        assert_eq!(read_input(&path, Some(100)).unwrap(), "Hello there.");
    }

    #[test]
    fn rejects_oversized_file() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("big.txt")).unwrap();
        std::fs::write(&path, "x".repeat(64)).unwrap();
        let err = read_input_file(&path, Some(10)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn missing_file_errors() {
        let err = read_input(Utf8Path::new("/nonexistent/file.txt"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn stream_limit() {
        let ok = read_limited("short".as_bytes(), "stdin", Some(5)).unwrap();
        assert_eq!(ok, "short");
        let err = read_limited("too long".as_bytes(), "stdin", Some(5)).unwrap_err();
        assert!(err.to_string().contains("exceeds 5 bytes"));
        assert_eq!(read_limited("any".as_bytes(), "stdin", None).unwrap(), "any");
    }

    #[test]
    fn stream_limit_inside_multibyte_character() {
        let text = "\u{e9}".repeat(10);
        let err = read_limited(text.as_bytes(), "stdin", Some(5)).unwrap_err();
        assert!(err.to_string().contains("input too large"), "{err}");

        let fits = read_limited(text.as_bytes(), "stdin", Some(20)).unwrap();
        assert_eq!(fits, text);
    }

    #[test]
    fn stream_with_invalid_utf8_errors() {
        let err = read_limited(&[0x66, 0xff, 0x6f][..], "stdin", Some(10)).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"), "{err}");
    }
}
