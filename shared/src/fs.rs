//! Filesystem helpers shared by the loader and the CLI.

use std::path::{Path, PathBuf};

/// Maximum allowed definition file size for reading into memory.
pub const MAX_DEFINITION_BYTES: u64 = 1024 * 1024; // 1 MiB
/// Maximum allowed image size for reading into memory.
pub const MAX_IMAGE_BYTES: u64 = 32 * 1024 * 1024; // 32 MiB

/// Error returned by the size-capped readers.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File too large: {} ({len} bytes, max {max} bytes)", path.display())]
    TooLarge { path: PathBuf, len: u64, max: u64 },
}

/// Read a file into memory with a size cap.
pub fn read_file_with_limit(path: &Path, max_bytes: u64) -> Result<Vec<u8>, ReadError> {
    let io_error = |source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let len = std::fs::metadata(path).map_err(io_error)?.len();
    if len > max_bytes {
        return Err(ReadError::TooLarge {
            path: path.to_path_buf(),
            len,
            max: max_bytes,
        });
    }
    std::fs::read(path).map_err(io_error)
}

/// Read a text file with a size cap.
///
/// Invalid UTF-8 is replaced rather than rejected; definition files are
/// hand-written and often saved in a legacy code page.
pub fn read_text_with_limit(path: &Path, max_bytes: u64) -> Result<String, ReadError> {
    let bytes = read_file_with_limit(path, max_bytes)?;
    Ok(decode_text(&bytes))
}

/// Decode raw definition bytes, dropping a UTF-8 byte order mark if present.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

/// Split text into lines on `\r\n`, `\r` or `\n`.
///
/// Unlike [`str::lines`], a lone `\r` also ends a line, and a trailing line
/// terminator yields a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    lines.push(&text[start..]);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_split_lines_mixed_terminators() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_lines_trailing_terminator() {
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_decode_text_strips_bom() {
        assert_eq!(decode_text(b"\xEF\xBB\xBFname: Ace"), "name: Ace");
    }

    #[test]
    fn test_read_file_with_limit_rejects_oversized() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("big.txt");
        std::fs::write(&path, vec![b'x'; 64]).unwrap();

        let err = read_file_with_limit(&path, 16).unwrap_err();
        assert!(matches!(err, ReadError::TooLarge { len: 64, max: 16, .. }));
        assert!(read_file_with_limit(&path, 64).is_ok());
    }

    #[test]
    fn test_read_file_with_limit_missing_file() {
        let err = read_file_with_limit(Path::new("/nonexistent/definition.txt"), 16).unwrap_err();
        assert!(matches!(err, ReadError::Io { .. }));
    }
}
