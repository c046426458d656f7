use clap::Parser;
use const_format::concatcp;
use eyre::Result;

use crate::cli::Environment;

pub const EXAMPLES: &str = r"
  $ rpsctl leaderboard
  $ rpsctl --output-format json leaderboard
";

#[derive(Copy, Clone, Debug, Parser)]
#[command(about = "Show the top players, best score first")]
#[command(after_help = concatcp!(
    "Examples:",
    EXAMPLES
))]
pub struct LeaderboardCommand;

impl LeaderboardCommand {
    pub async fn run(self, environment: &Environment) -> Result<()> {
        let leaderboard = environment.client.get_leaderboard().await?;

        environment.output.write(&leaderboard);

        Ok(())
    }
}
