//! Round state and core simulation types
//!
//! Everything that changes during a round lives here and is owned by `Round`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

/// One of the two competing players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left half of the playfield
    Yellow,
    /// Right half of the playfield
    Red,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Yellow, Side::Red];

    pub fn opponent(self) -> Side {
        match self {
            Side::Yellow => Side::Red,
            Side::Red => Side::Yellow,
        }
    }

    /// Horizontal travel direction of this side's projectiles
    pub fn direction(self) -> i32 {
        match self {
            Side::Yellow => 1,
            Side::Red => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Yellow => "Yellow",
            Side::Red => "Red",
        }
    }

    /// Banner shown when this side takes the round
    pub fn win_message(self) -> &'static str {
        match self {
            Side::Yellow => "Yellow Wins",
            Side::Red => "Red Wins",
        }
    }
}

/// Discrete events consumed by the round each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Window closed - stop immediately
    Quit,
    /// Fire key pressed for a side
    Fire(Side),
    /// A projectile struck this side's ship
    Hit(Side),
}

/// A player's spacecraft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub side: Side,
    pub rect: Rect,
    pub health: u32,
}

impl Ship {
    pub fn new(side: Side, pos: IVec2, size: IVec2, health: u32) -> Self {
        Self {
            side,
            rect: Rect::from_pos_size(pos, size),
            health,
        }
    }

    pub fn pos(&self) -> IVec2 {
        self.rect.pos
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// Take one point of damage, never dropping below zero
    pub fn take_hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }
}

/// A projectile in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: Side,
    pub rect: Rect,
    /// +1 travels right, -1 travels left
    pub direction: i32,
}

impl Projectile {
    pub fn new(owner: Side, pos: IVec2, size: IVec2) -> Self {
        Self {
            owner,
            rect: Rect::from_pos_size(pos, size),
            direction: owner.direction(),
        }
    }
}

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    InProgress,
    RoundOver { winner: Side },
}

/// Complete state of one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub yellow: Ship,
    pub red: Ship,
    /// Projectiles in fire order
    pub yellow_projectiles: Vec<Projectile>,
    pub red_projectiles: Vec<Projectile>,
    /// Hits raised by collisions, applied at the start of the next tick
    pub pending_hits: Vec<Side>,
    pub phase: RoundPhase,
    /// Ticks simulated in this round
    pub time_ticks: u64,
}

impl Round {
    /// Fresh round: full health, no projectiles, ships at their spawn points
    pub fn new(config: &GameConfig) -> Self {
        let ship = |side| {
            Ship::new(
                side,
                config.start_position(side),
                config.ship_size,
                config.starting_health,
            )
        };
        Self {
            yellow: ship(Side::Yellow),
            red: ship(Side::Red),
            yellow_projectiles: Vec::with_capacity(config.max_projectiles),
            red_projectiles: Vec::with_capacity(config.max_projectiles),
            pending_hits: Vec::new(),
            phase: RoundPhase::InProgress,
            time_ticks: 0,
        }
    }

    pub fn ship(&self, side: Side) -> &Ship {
        match side {
            Side::Yellow => &self.yellow,
            Side::Red => &self.red,
        }
    }

    pub fn ship_mut(&mut self, side: Side) -> &mut Ship {
        match side {
            Side::Yellow => &mut self.yellow,
            Side::Red => &mut self.red,
        }
    }

    pub fn projectiles(&self, side: Side) -> &[Projectile] {
        match side {
            Side::Yellow => &self.yellow_projectiles,
            Side::Red => &self.red_projectiles,
        }
    }

    /// A side's projectiles together with its own ship
    pub fn arsenal_mut(&mut self, side: Side) -> (&mut Vec<Projectile>, &Ship) {
        match side {
            Side::Yellow => (&mut self.yellow_projectiles, &self.yellow),
            Side::Red => (&mut self.red_projectiles, &self.red),
        }
    }

    /// A side's projectiles together with the ship they are aimed at
    pub fn volley_mut(&mut self, side: Side) -> (&mut Vec<Projectile>, &Ship) {
        match side {
            Side::Yellow => (&mut self.yellow_projectiles, &self.red),
            Side::Red => (&mut self.red_projectiles, &self.yellow),
        }
    }

    pub fn health(&self, side: Side) -> u32 {
        self.ship(side).health
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, RoundPhase::RoundOver { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            RoundPhase::RoundOver { winner } => Some(winner),
            RoundPhase::InProgress => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round() {
        let config = GameConfig::default();
        let round = Round::new(&config);

        assert_eq!(round.phase, RoundPhase::InProgress);
        assert_eq!(round.health(Side::Yellow), 20);
        assert_eq!(round.health(Side::Red), 20);
        assert_eq!(round.yellow.pos(), IVec2::new(100, 300));
        assert_eq!(round.red.pos(), IVec2::new(700, 300));
        assert_eq!(round.yellow.rect.size, IVec2::new(55, 40));
        assert!(round.projectiles(Side::Yellow).is_empty());
        assert!(round.projectiles(Side::Red).is_empty());
        assert!(round.pending_hits.is_empty());
    }

    #[test]
    fn test_health_floor() {
        let mut ship = Ship::new(Side::Red, IVec2::ZERO, IVec2::new(55, 40), 1);
        ship.take_hit();
        assert!(ship.is_destroyed());
        ship.take_hit();
        assert_eq!(ship.health, 0);
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Yellow.opponent(), Side::Red);
        assert_eq!(Side::Red.opponent(), Side::Yellow);
        assert_eq!(Side::Yellow.direction(), 1);
        assert_eq!(Side::Red.direction(), -1);
        assert_eq!(Side::Red.win_message(), "Red Wins");
    }

    #[test]
    fn test_volley_targets_opponent() {
        let config = GameConfig::default();
        let mut round = Round::new(&config);
        let (_, target) = round.volley_mut(Side::Yellow);
        assert_eq!(target.side, Side::Red);
        let (_, own) = round.arsenal_mut(Side::Yellow);
        assert_eq!(own.side, Side::Yellow);
    }
}
