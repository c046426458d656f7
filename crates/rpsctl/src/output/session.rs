use color_eyre::owo_colors::OwoColorize;
use comfy_table::{Cell, Color, Table};
use rps_client::deriver::{DerivedView, Phase};
use rps_client::{SessionEvent, SessionStatus};
use rps_primitives::game::Move;

use super::Report;

impl Report for SessionEvent {
    fn report(&self) {
        match self {
            Self::Registered { player } => {
                println!("{} Registered as {} ({})", "[INFO]".green(), player.name, player.id);
            }
            Self::Joined { lobby } => match &lobby.game_id {
                Some(match_id) => println!("{} Joined the lobby, match {match_id}", "[INFO]".green()),
                None => println!("{} Joined the lobby, waiting for a match", "[INFO]".green()),
            },
            Self::MatchStarted {
                match_id,
                opponent_id,
            } => match opponent_id {
                Some(opponent) => println!(
                    "{} Match {match_id} started against {}",
                    "[MATCH]".cyan(),
                    opponent.bold()
                ),
                None => println!("{} Match {match_id} started", "[MATCH]".cyan()),
            },
            Self::ViewChanged { view } => describe(view),
            Self::RoundAdvanced { completed_rounds } => {
                println!("{} Round {completed_rounds} complete", "[MATCH]".cyan());
            }
            Self::MatchFinished { view } => {
                let score = score(view);

                if view.local_won {
                    println!("{} You won {score}!", "[MATCH]".cyan());
                } else {
                    println!("{} You lost {score}", "[MATCH]".cyan());
                }

                println!("Type `new` to play again or `quit` to leave");
            }
            Self::LeaderboardUpdated { leaderboard } => leaderboard.report(),
            Self::ViewRejected { error } => {
                println!("{} Ignoring match state: {error}", "[WARN]".yellow());
            }
            Self::Reset => println!("{} Ready for a new game", "[INFO]".green()),
        }
    }
}

fn describe(view: &DerivedView) {
    if let (Some(local), Some(opponent)) = (view.local_moves.last(), view.opponent_moves.last()) {
        println!(
            "{} Last round: you played {local}, opponent played {opponent}, {} ({})",
            "[MATCH]".cyan(),
            outcome(*local, *opponent),
            score(view)
        );
    }

    match view.phase {
        Phase::WaitingForOpponent => {
            println!("{} Waiting for an opponent to join", "[MATCH]".cyan());
        }
        Phase::AwaitingLocalMove => println!(
            "{} Round {}: your move ({})",
            "[MATCH]".cyan(),
            view.round(),
            choices(&view.actionable_moves)
        ),
        Phase::AwaitingOpponentMove => println!(
            "{} Round {}: waiting for the opponent",
            "[MATCH]".cyan(),
            view.round()
        ),
        Phase::Finished => {}
    }
}

/// Labels a finished round for display; the authority's scores stay the
/// source of truth.
const fn outcome(local: Move, opponent: Move) -> &'static str {
    if local.beats(&opponent) {
        "you took it"
    } else if opponent.beats(&local) {
        "opponent took it"
    } else {
        "a draw"
    }
}

fn score(view: &DerivedView) -> String {
    format!("{}-{}", view.local_score, view.opponent_score)
}

fn choices(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|move_| move_.as_str().to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Report for SessionStatus {
    fn report(&self) {
        let mut table = Table::new();
        let _ = table.set_header(vec![
            Cell::new("Session").fg(Color::Blue),
            Cell::new("").fg(Color::Blue),
        ]);

        let player = self
            .player
            .as_ref()
            .map_or_else(|| "-".to_owned(), |player| format!("{} ({})", player.name, player.id));
        let match_id = self
            .match_id
            .as_ref()
            .map_or_else(|| "-".to_owned(), ToString::to_string);

        let _ = table.add_row(vec!["State".to_owned(), self.state.to_string()]);
        let _ = table.add_row(vec!["Player".to_owned(), player]);
        let _ = table.add_row(vec!["Match".to_owned(), match_id]);

        if let Some(view) = &self.view {
            let opponent = view
                .opponent_id
                .as_ref()
                .map_or_else(|| "-".to_owned(), ToString::to_string);

            let _ = table.add_row(vec!["Opponent".to_owned(), opponent]);
            let _ = table.add_row(vec!["Phase".to_owned(), format!("{:?}", view.phase)]);
            let _ = table.add_row(vec!["Round".to_owned(), view.round().to_string()]);
            let _ = table.add_row(vec!["Score".to_owned(), score(view)]);
        }

        println!("{table}");
    }
}

#[cfg(test)]
mod tests {
    use rps_primitives::game::Move;

    use super::{choices, outcome};

    #[test]
    fn test_outcome_labels() {
        assert_eq!(outcome(Move::Rock, Move::Scissors), "you took it");
        assert_eq!(outcome(Move::Rock, Move::Paper), "opponent took it");
        assert_eq!(outcome(Move::Paper, Move::Paper), "a draw");
    }

    #[test]
    fn test_choices_are_lowercase() {
        assert_eq!(choices(Move::ALL), "rock, paper, scissors");
    }
}
