//! JSON reads and atomic file writes

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a JSON document, returning `None` when the file does not exist
pub fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Option<T>, FileError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| FileError::Json {
            path: path.display().to_string(),
            source,
        })
}

/// Serialize as pretty JSON and write it atomically
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<(), FileError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| FileError::Json {
        path: path.display().to_string(),
        source,
    })?;
    atomic_write(path, json.as_bytes())?;
    Ok(())
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        code: String,
        window: u32,
    }

    #[test]
    fn test_read_json_missing_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let result: Option<Sample> = read_json(&temp.path().join("absent.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_write_then_read_json() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("sample.json");

        let sample = Sample {
            code: "RP001".to_string(),
            window: 30,
        };
        write_json_pretty(&path, &sample).unwrap();

        let loaded: Sample = read_json(&path).unwrap().unwrap();
        assert_eq!(loaded, sample);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_read_json_malformed() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_json::<Sample>(&path).unwrap_err();
        assert!(matches!(err, FileError::Json { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_atomic_write() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("atomic.txt");

        atomic_write(&path, b"Hello, rails!").unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(data, b"Hello, rails!");
    }
}
