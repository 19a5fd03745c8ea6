//! Path resolution for Rail Pehchaan files

use std::path::PathBuf;

const APP_DIR: &str = ".rail-pehchaan";

/// Resolves standard paths under the user's home directory
#[derive(Debug, Clone)]
pub struct Paths {
    pub app_dir: PathBuf,
}

impl Paths {
    /// Create a resolver rooted at `~/.rail-pehchaan`
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self::at(home.join(APP_DIR)))
    }

    /// Create a resolver rooted at an explicit directory
    pub fn at(app_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_dir: app_dir.into(),
        }
    }

    /// Get config.json path
    pub fn config_file(&self) -> PathBuf {
        self.app_dir.join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_new() {
        let paths = Paths::new().unwrap();
        assert!(paths.app_dir.ends_with(".rail-pehchaan"));
    }

    #[test]
    fn test_config_file() {
        let paths = Paths::at("/tmp/rp");
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/rp/config.json"));
    }
}
