//! Round wins for the current session
//!
//! Kept in memory only; a new process starts from zero.

use serde::{Deserialize, Serialize};

use crate::sim::Side;

/// Win tally for both sides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub yellow_wins: u32,
    pub red_wins: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished round
    pub fn record(&mut self, winner: Side) {
        match winner {
            Side::Yellow => self.yellow_wins += 1,
            Side::Red => self.red_wins += 1,
        }
    }

    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Yellow => self.yellow_wins,
            Side::Red => self.red_wins,
        }
    }

    pub fn rounds_played(&self) -> u32 {
        self.yellow_wins + self.red_wins
    }

    /// Side with more wins, if any
    pub fn leader(&self) -> Option<Side> {
        match self.yellow_wins.cmp(&self.red_wins) {
            std::cmp::Ordering::Greater => Some(Side::Yellow),
            std::cmp::Ordering::Less => Some(Side::Red),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Tally line shown under the winner banner
    pub fn summary(&self) -> String {
        format!("Yellow {} - {} Red", self.yellow_wins, self.red_wins)
    }
}
