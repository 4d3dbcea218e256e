//! Immutable gameplay configuration
//!
//! Built once at startup and handed to the driver and simulation by reference.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Rect, Side};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield size (pixels)
    pub width: i32,
    pub height: i32,
    /// Target tick rate
    pub fps: u32,
    pub divider_width: i32,
    pub ship_size: IVec2,
    pub ship_velocity: i32,
    pub projectile_size: IVec2,
    pub projectile_velocity: i32,
    pub max_projectiles: usize,
    pub starting_health: u32,
    pub bottom_margin: i32,
    pub win_delay_ms: u64,
    pub yellow_start: IVec2,
    pub red_start: IVec2,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            fps: FPS,
            divider_width: DIVIDER_WIDTH,
            ship_size: IVec2::new(SHIP_WIDTH, SHIP_HEIGHT),
            ship_velocity: SHIP_VELOCITY,
            projectile_size: IVec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            projectile_velocity: PROJECTILE_VELOCITY,
            max_projectiles: MAX_PROJECTILES,
            starting_health: STARTING_HEALTH,
            bottom_margin: BOTTOM_MARGIN,
            win_delay_ms: WIN_DELAY_MS,
            yellow_start: IVec2::new(YELLOW_START.0, YELLOW_START.1),
            red_start: IVec2::new(RED_START.0, RED_START.1),
        }
    }
}

impl GameConfig {
    /// Vertical bar splitting the playfield into the two movement zones
    pub fn divider(&self) -> Rect {
        Rect::new(
            self.width / 2 - self.divider_width / 2,
            0,
            self.divider_width,
            self.height,
        )
    }

    /// Where a side's ship spawns at round start
    pub fn start_position(&self, side: Side) -> IVec2 {
        match side {
            Side::Yellow => self.yellow_start,
            Side::Red => self.red_start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divider_is_centred() {
        let config = GameConfig::default();
        let divider = config.divider();
        assert_eq!(divider, Rect::new(445, 0, 10, 500));
        assert_eq!(divider.left() + divider.width() / 2, config.width / 2);
    }

    #[test]
    fn test_start_positions_sit_in_own_zone() {
        let config = GameConfig::default();
        let divider = config.divider();
        assert!(config.start_position(Side::Yellow).x + config.ship_size.x < divider.left());
        assert!(config.start_position(Side::Red).x > divider.right());
    }
}
