//! Star Duel - a two-player split-screen space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ships, projectiles, round state)
//! - `driver`: Fixed-tick game loop over the platform collaborators
//! - `platform`: Render/audio/input/clock abstraction and native backends
//! - `renderer`: Scene drawing and the macroquad render surface
//! - `audio`: Sound effects

pub mod audio;
pub mod config;
pub mod driver;
pub mod platform;
pub mod renderer;
pub mod scoreboard;
pub mod settings;
pub mod sim;

pub use config::GameConfig;
pub use scoreboard::Scoreboard;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const WIDTH: i32 = 900;
    pub const HEIGHT: i32 = 500;

    /// Fixed simulation rate (ticks per second)
    pub const FPS: u32 = 60;

    /// Divider between the two movement zones, centred horizontally
    pub const DIVIDER_WIDTH: i32 = 10;

    /// Ship size before sprite rotation
    pub const SHIP_WIDTH: i32 = 55;
    pub const SHIP_HEIGHT: i32 = 40;
    /// Ship movement per tick, per held direction
    pub const SHIP_VELOCITY: i32 = 7;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: i32 = 10;
    pub const PROJECTILE_HEIGHT: i32 = 5;
    pub const PROJECTILE_VELOCITY: i32 = 10;
    /// Maximum projectiles in flight per side
    pub const MAX_PROJECTILES: usize = 3;

    /// Health each ship starts a round with
    pub const STARTING_HEALTH: u32 = 20;

    /// Space kept free under the ships for HUD text
    pub const BOTTOM_MARGIN: i32 = 15;

    /// How long the winner is shown before the next round (ms)
    pub const WIN_DELAY_MS: u64 = 5000;

    /// Spawn positions
    pub const YELLOW_START: (i32, i32) = (100, 300);
    pub const RED_START: (i32, i32) = (700, 300);
}
