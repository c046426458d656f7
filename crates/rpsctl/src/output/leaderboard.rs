use comfy_table::{Cell, Color, Table};
use rps_primitives::leaderboard::Leaderboard;

use super::Report;

impl Report for Leaderboard {
    fn report(&self) {
        if self.players.is_empty() {
            println!("No games played yet");
            return;
        }

        let mut table = Table::new();
        let _ = table.set_header(vec![
            Cell::new("#").fg(Color::Blue),
            Cell::new("Player").fg(Color::Blue),
            Cell::new("Won").fg(Color::Green),
            Cell::new("Lost").fg(Color::Red),
            Cell::new("Score").fg(Color::Blue),
        ]);

        // keep the authority's order, it is the ranking
        for (rank, entry) in self.players.iter().enumerate() {
            let _ = table.add_row(vec![
                (rank + 1).to_string(),
                entry.player_name.clone(),
                entry.games_won.to_string(),
                entry.games_lost.to_string(),
                format!("{:.1}", entry.score),
            ]);
        }

        println!("{table}");
    }
}
