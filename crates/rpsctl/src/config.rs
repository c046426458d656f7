use std::time::Duration;

use camino::Utf8Path;
use eyre::{bail, ensure, Result, WrapErr};
use rps_client::{JoinMode, SyncConfig};
use rps_primitives::lobby::LobbyId;
use serde::{Deserialize, Serialize};
use tokio::fs;
use url::Url;

use crate::defaults;

/// Optional settings read from `config.toml`; command-line flags win.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    pub api: Option<Url>,
    pub lobby: Option<LobbyId>,
    pub join_mode: Option<JoinMode>,
    pub match_poll_ms: Option<u64>,
    /// `0` turns periodic leaderboard refreshes off.
    pub leaderboard_poll_ms: Option<u64>,
}

impl Config {
    /// Loads `path`, or the default location when `None`.
    ///
    /// A missing default file yields the empty config; a missing explicit one
    /// is an error.
    pub async fn load(path: Option<&Utf8Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_owned(), true),
            None => (defaults::default_config_path()?, false),
        };

        Self::load_from(&path, explicit).await
    }

    async fn load_from(path: &Utf8Path, explicit: bool) -> Result<Self> {
        if !path.exists() {
            if explicit {
                bail!("config file {path} does not exist");
            }

            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("failed to read {path}"))?;

        let config = toml::from_str(&contents).wrap_err_with(|| format!("failed to parse {path}"))?;

        Ok(config)
    }

    /// Builds the session configuration, letting `lobby` and `join_mode`
    /// override whatever the file says.
    pub fn sync_config(
        &self,
        lobby: Option<LobbyId>,
        join_mode: Option<JoinMode>,
    ) -> Result<SyncConfig> {
        let mut config = lobby
            .or_else(|| self.lobby.clone())
            .map_or_else(SyncConfig::default, SyncConfig::new)
            .with_join_mode(join_mode.or(self.join_mode).unwrap_or_default());

        if let Some(ms) = self.match_poll_ms {
            ensure!(ms > 0, "match-poll-ms must be greater than zero");

            config = config.with_match_poll_interval(Duration::from_millis(ms));
        }

        if let Some(ms) = self.leaderboard_poll_ms {
            config =
                config.with_leaderboard_poll_interval((ms > 0).then(|| Duration::from_millis(ms)));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use camino::Utf8PathBuf;
    use rps_client::config::{DEFAULT_LEADERBOARD_POLL_INTERVAL_MS, DEFAULT_LOBBY_ID};
    use rps_client::JoinMode;
    use tempfile::tempdir;

    use super::Config;

    fn path_in(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join("config.toml")).unwrap()
    }

    #[tokio::test]
    async fn test_load_reads_kebab_case_keys() {
        let dir = tempdir().unwrap();
        let path = path_in(&dir);

        std::fs::write(
            &path,
            r#"
api = "http://authority.test:9000/"
lobby = "lobby7"
join-mode = "lobby-poll"
match-poll-ms = 250
leaderboard-poll-ms = 0
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).await.unwrap();

        assert_eq!(
            config.api.as_ref().map(url::Url::as_str),
            Some("http://authority.test:9000/")
        );

        let sync = config.sync_config(None, None).unwrap();

        assert_eq!(sync.lobby_id.as_str(), "lobby7");
        assert_eq!(sync.join_mode, JoinMode::LobbyPoll);
        assert_eq!(sync.match_poll_interval, Duration::from_millis(250));
        assert_eq!(sync.lobby_poll_interval, Duration::from_millis(250));
        assert_eq!(sync.leaderboard_poll_interval, None);
    }

    #[tokio::test]
    async fn test_missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = path_in(&dir);

        assert!(Config::load(Some(path.as_path())).await.is_err());
        assert!(Config::load_from(&path, false).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = path_in(&dir);

        std::fs::write(&path, "lobby-id = \"lobby1\"\n").unwrap();

        assert!(Config::load(Some(path.as_path())).await.is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let config = Config {
            lobby: Some("from-file".parse().unwrap()),
            join_mode: Some(JoinMode::LobbyPoll),
            ..Config::default()
        };

        let sync = config
            .sync_config(Some("from-flag".parse().unwrap()), Some(JoinMode::Immediate))
            .unwrap();

        assert_eq!(sync.lobby_id.as_str(), "from-flag");
        assert_eq!(sync.join_mode, JoinMode::Immediate);
    }

    #[test]
    fn test_defaults_when_empty() {
        let sync = Config::default().sync_config(None, None).unwrap();

        assert_eq!(sync.lobby_id.as_str(), DEFAULT_LOBBY_ID);
        assert_eq!(sync.join_mode, JoinMode::Immediate);
        assert_eq!(
            sync.leaderboard_poll_interval,
            Some(Duration::from_millis(DEFAULT_LEADERBOARD_POLL_INTERVAL_MS))
        );
    }

    #[test]
    fn test_zero_match_poll_is_rejected() {
        let config = Config {
            match_poll_ms: Some(0),
            ..Config::default()
        };

        assert!(config.sync_config(None, None).is_err());
    }
}
