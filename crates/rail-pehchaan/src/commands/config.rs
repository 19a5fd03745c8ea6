use pehchaan_core::Config;

pub fn run() -> anyhow::Result<()> {
    let config = super::load_config()?;
    println!("{}", serde_json::to_string_pretty(&redacted(config))?);
    Ok(())
}

/// Hide the API key when printing
fn redacted(mut config: Config) -> Config {
    if config.chat.api_key.is_some() {
        config.chat.api_key = Some("********".to_string());
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacted_hides_key() {
        let mut config = Config::default();
        config.chat.api_key = Some("secret-token".to_string());

        let json = serde_json::to_string(&redacted(config)).unwrap();
        assert!(!json.contains("secret-token"));
        assert!(json.contains("********"));
    }

    #[test]
    fn test_redacted_without_key() {
        let json = serde_json::to_string(&redacted(Config::default())).unwrap();
        assert!(!json.contains("api_key"));
    }
}
