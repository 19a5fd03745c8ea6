pub mod ask;
pub mod chat;
pub mod config;
pub mod demo_codes;
pub mod flag;
pub mod init;
pub mod reminders;
pub mod scan;
pub mod version;

use pehchaan_core::Config;
use pehchaan_files::Paths;

/// Config from `~/.rail-pehchaan/config.json` with environment overrides
pub(crate) fn load_config() -> anyhow::Result<Config> {
    let paths = Paths::new()?;
    Ok(Config::load(&paths)?)
}

/// Single-threaded runtime for the one async call a command makes
pub(crate) fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
