use camino::Utf8PathBuf;
use eyre::{eyre, OptionExt, Result};

/// Authority endpoint used when neither a flag, the environment nor the
/// config file names one.
pub const DEFAULT_API_URL: &str = "http://localhost:9000/";

const CONFIG_FILE: &str = "rpsctl/config.toml";

pub fn default_config_path() -> Result<Utf8PathBuf> {
    let config_dir = dirs::config_dir().ok_or_eyre("could not find config directory")?;

    let config_dir = Utf8PathBuf::from_path_buf(config_dir)
        .map_err(|path| eyre!("config directory {} is not valid UTF-8", path.display()))?;

    Ok(config_dir.join(CONFIG_FILE))
}
