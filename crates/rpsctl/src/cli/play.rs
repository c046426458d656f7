use std::sync::Arc;

use clap::{Parser, ValueEnum};
use const_format::concatcp;
use eyre::{Report as EyreReport, Result};
use rps_client::session::LobbyStage;
use rps_client::{JoinMode, Session, SessionError, SessionHandle, SessionState};
use rps_primitives::game::{InvalidMove, Move};
use rps_primitives::identity::{Player, PlayerId};
use rps_primitives::lobby::LobbyId;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::cli::Environment;
use crate::output::{ErrorLine, InfoLine};

pub const EXAMPLES: &str = r"
  # Join the default lobby as alice
  $ rpsctl play alice Alice

  # Wait for a full lobby before polling the match
  $ rpsctl play bob Bob --lobby lobby2 --join-mode lobby-poll
";

const HELP: &str = "Type rock, paper or scissors (r/p/s) to move, `new` for another game, `status` or `quit`";

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum JoinModeArg {
    Immediate,
    LobbyPoll,
}

impl From<JoinModeArg> for JoinMode {
    fn from(value: JoinModeArg) -> Self {
        match value {
            JoinModeArg::Immediate => Self::Immediate,
            JoinModeArg::LobbyPoll => Self::LobbyPoll,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Register, join a lobby and play matches from the terminal")]
#[command(after_help = concatcp!(
    "Examples:",
    EXAMPLES
))]
pub struct PlayCommand {
    /// Identifier to register and play as
    pub id: PlayerId,

    /// Display name
    pub name: String,

    /// Lobby to join
    #[arg(long, value_name = "LOBBY")]
    pub lobby: Option<LobbyId>,

    /// How the authority pairs players
    #[arg(long, value_name = "MODE", value_enum)]
    pub join_mode: Option<JoinModeArg>,
}

/// One line typed by the player.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Input {
    Move(Move),
    NewGame,
    Status,
    Quit,
}

fn parse_input(line: &str) -> Result<Option<Input>, InvalidMove> {
    let line = line.trim();

    if line.is_empty() {
        return Ok(None);
    }

    let input = match line.to_ascii_lowercase().as_str() {
        "new" => Input::NewGame,
        "status" => Input::Status,
        "quit" | "exit" => Input::Quit,
        _ => Input::Move(line.parse()?),
    };

    Ok(Some(input))
}

impl PlayCommand {
    pub async fn run(self, environment: &Environment) -> Result<()> {
        let config = environment
            .config
            .sync_config(self.lobby, self.join_mode.map(Into::into))?;

        let (session, mut events) =
            Session::spawn(Arc::new(environment.client.clone()), config);

        session
            .register(Player::new(self.id, self.name))
            .await
            .map_err(into_report)?;

        let _lobby = session.join_lobby().await.map_err(into_report)?;

        environment.output.write(&InfoLine(HELP));

        let mut lines = BufReader::new(io::stdin()).lines();

        loop {
            tokio::select! {
                Some(event) = events.recv() => environment.output.write(&event),
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("Standard input closed");

                        break;
                    };

                    let input = match parse_input(&line) {
                        Ok(Some(input)) => input,
                        Ok(None) => continue,
                        Err(err) => {
                            environment.output.write(&ErrorLine(&err.to_string()));
                            environment.output.write(&InfoLine(HELP));

                            continue;
                        }
                    };

                    if input == Input::Quit {
                        break;
                    }

                    if let Err(err) = handle(&session, environment, input).await {
                        if matches!(err, SessionError::Disposed) {
                            break;
                        }

                        environment.output.write(&ErrorLine(&err.to_string()));
                    }
                }
            }
        }

        close(&session).await
    }
}

/// Disposes the session; one that already ended counts as closed.
async fn close(session: &SessionHandle) -> Result<()> {
    match session.dispose().await {
        Ok(()) | Err(SessionError::Disposed) => Ok(()),
        Err(err) => Err(into_report(err)),
    }
}

async fn handle(
    session: &SessionHandle,
    environment: &Environment,
    input: Input,
) -> Result<(), SessionError> {
    match input {
        Input::Move(move_) => session.submit_move(move_).await,
        Input::NewGame => {
            match session.new_game().await {
                // a failed join already left us idle
                Ok(())
                | Err(SessionError::InvalidTransition {
                    state: SessionState::Lobby(LobbyStage::Idle),
                    ..
                }) => {}
                Err(err) => return Err(err),
            }

            let _lobby = session.join_lobby().await?;

            Ok(())
        }
        Input::Status => {
            let status = session.status().await?;

            environment.output.write(&status);

            Ok(())
        }
        Input::Quit => Ok(()),
    }
}

/// Unwraps authority failures so the CLI can report their status code.
fn into_report(err: SessionError) -> EyreReport {
    match err {
        SessionError::Authority(report) => report,
        err => err.into(),
    }
}
