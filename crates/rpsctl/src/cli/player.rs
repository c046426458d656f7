use clap::{Parser, Subcommand};
use const_format::concatcp;
use eyre::Result;
use rps_primitives::api::CreatePlayerRequest;
use rps_primitives::identity::PlayerId;

use crate::cli::Environment;
use crate::output::PlayerCreated;

pub const EXAMPLES: &str = r"
  # Register alice
  $ rpsctl player create alice Alice

  # Look her up and show her record
  $ rpsctl player get alice
  $ rpsctl player stats alice
";

#[derive(Debug, Parser)]
#[command(about = "Register and inspect players")]
#[command(after_help = concatcp!(
    "Examples:",
    EXAMPLES
))]
pub struct PlayerCommand {
    #[command(subcommand)]
    pub subcommand: PlayerSubCommands,
}

#[derive(Debug, Subcommand)]
pub enum PlayerSubCommands {
    /// Register a new player with the authority
    Create {
        /// Identifier the player signs in with
        id: PlayerId,
        /// Display name
        name: String,
    },
    /// Fetch a registered player
    Get { id: PlayerId },
    /// Show a player's win/loss record
    Stats { id: PlayerId },
}

impl PlayerCommand {
    pub async fn run(self, environment: &Environment) -> Result<()> {
        let client = &environment.client;

        match self.subcommand {
            PlayerSubCommands::Create { id, name } => {
                client
                    .create_player(CreatePlayerRequest::new(id.clone(), name.clone()))
                    .await?;

                environment.output.write(&PlayerCreated { id, name });
            }
            PlayerSubCommands::Get { id } => {
                let response = client.get_player(&id).await?;

                environment.output.write(&response);
            }
            PlayerSubCommands::Stats { id } => {
                let response = client.get_player_stats(&id).await?;

                environment.output.write(&response);
            }
        }

        Ok(())
    }
}
