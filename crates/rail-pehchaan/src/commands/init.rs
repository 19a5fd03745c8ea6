use pehchaan_core::Config;
use pehchaan_files::Paths;

pub fn run() -> anyhow::Result<()> {
    let paths = Paths::new()?;
    if run_at(&paths)? {
        println!("✓ Wrote default config to {}", paths.config_file().display());
    } else {
        println!(
            "Config already exists at {}, leaving it untouched",
            paths.config_file().display()
        );
    }
    Ok(())
}

/// Write the default config unless one is already present.
/// Returns whether a file was written.
pub fn run_at(paths: &Paths) -> anyhow::Result<bool> {
    if paths.config_file().exists() {
        return Ok(false);
    }
    Config::default().save(paths)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::at(temp.path().join(".rail-pehchaan"));

        assert!(run_at(&paths).unwrap());

        let written: Config =
            serde_json::from_str(&fs::read_to_string(paths.config_file()).unwrap()).unwrap();
        assert_eq!(written, Config::default());
    }

    #[test]
    fn test_init_preserves_existing_config() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::at(temp.path());
        fs::write(paths.config_file(), r#"{"chat":{"reply_delay_ms":0}}"#).unwrap();

        assert!(!run_at(&paths).unwrap());

        let content = fs::read_to_string(paths.config_file()).unwrap();
        assert!(content.contains("\"reply_delay_ms\":0"));
    }

    #[test]
    #[serial]
    fn test_init_under_home() {
        let original_home = std::env::var("HOME").unwrap();
        let temp = TempDir::new().unwrap();

        unsafe { std::env::set_var("HOME", temp.path()) };
        let result = run();
        unsafe { std::env::set_var("HOME", &original_home) };

        assert!(result.is_ok());
        assert!(temp.path().join(".rail-pehchaan/config.json").exists());
    }
}
