//! Ship movement from held keys
//!
//! Each direction is tested on its own, in a fixed order. A step that would
//! leave the ship's zone is dropped for the tick rather than clamped to the edge.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::{Ship, Side};
use crate::config::GameConfig;

/// Movement keys held down for one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Held movement keys for both sides, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub yellow: MoveKeys,
    pub red: MoveKeys,
}

impl HeldKeys {
    pub fn for_side(&self, side: Side) -> MoveKeys {
        match side {
            Side::Yellow => self.yellow,
            Side::Red => self.red,
        }
    }
}

/// Open interval a ship's edges must stay strictly inside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Zone {
    /// Legal movement zone for a side
    pub fn for_side(side: Side, config: &GameConfig) -> Self {
        let divider = config.divider();
        let (min_x, max_x) = match side {
            Side::Yellow => (0, divider.left()),
            Side::Red => (divider.right(), config.width),
        };
        Self {
            min_x,
            max_x,
            min_y: 0,
            max_y: config.height - config.bottom_margin,
        }
    }
}

/// Apply one tick of movement to a ship.
///
/// Steps run in the order left, right, up, down, each checked against the
/// position left by the previous step.
pub fn move_ship(ship: &mut Ship, keys: MoveKeys, config: &GameConfig) {
    let zone = Zone::for_side(ship.side, config);
    let v = config.ship_velocity;

    if keys.left && ship.rect.left() - v > zone.min_x {
        ship.rect = ship.rect.translated(IVec2::new(-v, 0));
    }
    if keys.right && ship.rect.right() + v < zone.max_x {
        ship.rect = ship.rect.translated(IVec2::new(v, 0));
    }
    if keys.up && ship.rect.top() - v > zone.min_y {
        ship.rect = ship.rect.translated(IVec2::new(0, -v));
    }
    if keys.down && ship.rect.bottom() + v < zone.max_y {
        ship.rect = ship.rect.translated(IVec2::new(0, v));
    }
}
