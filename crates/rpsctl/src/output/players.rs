use comfy_table::{Cell, Color, Table};
use rps_primitives::api::GetPlayerResponse;
use rps_primitives::identity::PlayerId;
use rps_primitives::leaderboard::LeaderboardEntry;
use serde::Serialize;

use super::Report;

/// Acknowledgement of a registration; the authority replies with no body.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerCreated {
    pub id: PlayerId,
    pub name: String,
}

impl Report for PlayerCreated {
    fn report(&self) {
        let mut table = Table::new();
        let _ = table.set_header(vec![
            Cell::new("Player Registered").fg(Color::Green),
            Cell::new("Name").fg(Color::Blue),
        ]);
        let _ = table.add_row(vec![self.id.to_string(), self.name.clone()]);
        println!("{table}");
    }
}

impl Report for GetPlayerResponse {
    fn report(&self) {
        let mut table = Table::new();
        let _ = table.set_header(vec![
            Cell::new("Player ID").fg(Color::Blue),
            Cell::new("Name").fg(Color::Blue),
        ]);
        let _ = table.add_row(vec![self.id.to_string(), self.name.clone()]);
        println!("{table}");
    }
}

impl Report for LeaderboardEntry {
    fn report(&self) {
        let mut table = Table::new();
        let _ = table.set_header(vec![
            Cell::new("Player").fg(Color::Blue),
            Cell::new("Won").fg(Color::Green),
            Cell::new("Lost").fg(Color::Red),
            Cell::new("Score").fg(Color::Blue),
        ]);
        let _ = table.add_row(vec![
            format!("{} ({})", self.player_name, self.player_id),
            self.games_won.to_string(),
            self.games_lost.to_string(),
            format!("{:.1}", self.score),
        ]);
        println!("{table}");
    }
}
