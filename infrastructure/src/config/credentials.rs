//! API key file reading

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("API key file not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("API key file is empty: {}", path.display())]
    Empty { path: PathBuf },

    #[error("Failed to read API key file {}: {message}", path.display())]
    Unreadable { path: PathBuf, message: String },
}

/// Read the API key from the first line of `path`
pub fn read_api_key(path: &Path) -> Result<String, CredentialError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CredentialError::Missing {
            path: path.to_path_buf(),
        },
        _ => CredentialError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })?;

    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CredentialError::Empty {
            path: path.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_trimmed_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.txt");
        std::fs::write(&path, "\n  sk-abc123  \n").unwrap();

        assert_eq!(read_api_key(&path).unwrap(), "sk-abc123");
    }

    #[test]
    fn test_missing_and_empty_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        assert!(matches!(
            read_api_key(&missing),
            Err(CredentialError::Missing { .. })
        ));

        let empty = dir.path().join("empty.txt");
        std::fs::write(&empty, "   \n\n").unwrap();
        assert!(matches!(
            read_api_key(&empty),
            Err(CredentialError::Empty { .. })
        ));
    }
}
