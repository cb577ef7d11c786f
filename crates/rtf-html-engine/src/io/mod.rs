use std::fs;
use std::path::{Path, PathBuf};

/// Separator between fragments when several are written to one file.
pub const FRAGMENT_SEPARATOR: &str = "\n\n";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read an RTF source file
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Join fragments into the text written by [`write_fragments`]
pub fn join_fragments(fragments: &[String]) -> String {
    fragments.join(FRAGMENT_SEPARATOR)
}

/// Write converted fragments to a file
pub fn write_fragments(path: &Path, fragments: &[String]) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, join_fragments(fragments)).map_err(IoError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn test_read_source_success() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "doc.rtf", r"{\rtf1 {\rtlch \ltrch\loch Hi}}");

        let content = read_source(&path).unwrap();
        assert_eq!(content, r"{\rtf1 {\rtlch \ltrch\loch Hi}}");
    }

    #[test]
    fn test_read_source_not_found() {
        let dir = create_test_dir();
        let result = read_source(&dir.path().join("missing.rtf"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_fragments_creates_parent_directories() {
        let dir = create_test_dir();
        let path = dir.path().join("out").join("nested").join("doc.html");
        let fragments = vec!["<span>a</span>".to_string(), "<span>b</span>".to_string()];

        write_fragments(&path, &fragments).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "<span>a</span>\n\n<span>b</span>");
    }

    #[test]
    fn test_write_fragments_overwrites_existing() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "doc.html", "old content");

        write_fragments(&path, &["<span>new</span>".to_string()]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<span>new</span>");
    }

    #[test]
    fn test_join_fragments_empty() {
        assert_eq!(join_fragments(&[]), "");
    }
}
