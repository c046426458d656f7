use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, Subcommand};
use comfy_table::{Cell, Color, Table};
use const_format::concatcp;
use eyre::{Report as EyreReport, Result, WrapErr};
use rps_client::{Client, ClientError, ConnectionInfo};
use serde::{Serialize, Serializer};
use thiserror::Error as ThisError;
use url::Url;

use crate::config::Config;
use crate::defaults;
use crate::output::{Format, Output, Report};

mod leaderboard;
mod play;
mod player;

use leaderboard::LeaderboardCommand;
use play::PlayCommand;
use player::PlayerCommand;

pub const EXAMPLES: &str = r"
  # Register a player
  $ rpsctl player create alice Alice

  # Play a match in the default lobby
  $ rpsctl --api http://localhost:9000 play alice Alice

  # Show the standings
  $ rpsctl leaderboard
";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(after_help = concatcp!(
    "Environment variables:\n",
    "  RPS_API_URL    Authority endpoint\n\n",
    "Examples:",
    EXAMPLES
))]
pub struct RootCommand {
    #[command(flatten)]
    pub args: RootArgs,

    #[command(subcommand)]
    pub action: SubCommands,
}

#[derive(Debug, Subcommand)]
pub enum SubCommands {
    Player(PlayerCommand),
    Leaderboard(LeaderboardCommand),
    Play(PlayCommand),
}

#[derive(Debug, Parser)]
pub struct RootArgs {
    /// Authority endpoint URL
    #[arg(long, value_name = "URL", env = "RPS_API_URL")]
    pub api: Option<Url>,

    /// Configuration file, defaults to `<config dir>/rpsctl/config.toml`
    #[arg(long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    #[arg(long, value_name = "FORMAT", default_value_t, value_enum)]
    pub output_format: Format,

    /// Log more, repeat for even more
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug)]
pub struct Environment {
    pub output: Output,
    pub config: Config,
    pub client: Client,
}

impl RootCommand {
    pub async fn run(self) -> Result<(), CliError> {
        let output = Output::new(self.args.output_format);

        let environment = match self.args.prepare_environment(output).await {
            Ok(environment) => environment,
            Err(err) => {
                let err = CliError::Other(err);
                output.write(&err);
                return Err(err);
            }
        };

        let result = match self.action {
            SubCommands::Player(player) => player.run(&environment).await,
            SubCommands::Leaderboard(leaderboard) => leaderboard.run(&environment).await,
            SubCommands::Play(play) => play.run(&environment).await,
        };

        if let Err(err) = result {
            let err = match err.downcast::<ClientError>() {
                Ok(err) => CliError::ApiError(err),
                Err(err) => CliError::Other(err),
            };

            environment.output.write(&err);
            return Err(err);
        }

        Ok(())
    }
}

impl RootArgs {
    async fn prepare_environment(&self, output: Output) -> Result<Environment> {
        let config = Config::load(self.config.as_deref()).await?;

        let api_url = match self.api.as_ref().or(config.api.as_ref()) {
            Some(url) => url.clone(),
            None => Url::parse(defaults::DEFAULT_API_URL).wrap_err("invalid default API URL")?,
        };

        let connection = ConnectionInfo::new(api_url)?;

        Ok(Environment {
            output,
            config,
            client: Client::new(connection),
        })
    }
}

#[derive(Debug, Serialize, ThisError)]
pub enum CliError {
    #[error(transparent)]
    ApiError(#[from] ClientError),

    #[error(transparent)]
    Other(
        #[from]
        #[serde(serialize_with = "serialize_eyre_report")]
        EyreReport,
    ),
}

impl From<CliError> for ExitCode {
    fn from(error: CliError) -> Self {
        match error {
            CliError::ApiError(_) => Self::from(101),
            CliError::Other(_) => Self::FAILURE,
        }
    }
}

impl Report for CliError {
    fn report(&self) {
        let mut table = Table::new();
        let _ = table.set_header(vec![Cell::new("ERROR").fg(Color::Red)]);
        let _ = table.add_row(vec![match self {
            Self::ApiError(e) => format!("API Error ({}): {}", e.status_code, e.message),
            Self::Other(e) => format!("Error: {e:?}"),
        }]);
        println!("{table}");
    }
}

fn serialize_eyre_report<S>(report: &EyreReport, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(report.chain().map(ToString::to_string))
}
