//! Platform abstraction layer
//!
//! The driver only talks to the outside world through these traits:
//! - Rendering (`RenderSurface`)
//! - Sound (`AudioPlayer`)
//! - Input events and held keys (`InputSource`)
//! - Time/ticks (`Clock`)
//!
//! `native` holds the macroquad-backed input and clock used by the binary.

pub mod native;

use glam::IVec2;

use crate::audio::SoundEffect;
use crate::sim::{GameEvent, HeldKeys, Rect};

/// RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
}

/// Pre-loaded images the surface knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Background,
    YellowShip,
    RedShip,
}

/// Font used for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Health counters
    Hud,
    /// Winner banner
    Banner,
}

/// Something frames can be drawn to
#[allow(async_fn_in_trait)]
pub trait RenderSurface {
    fn clear(&mut self);
    fn draw_rect(&mut self, rect: Rect, color: Rgb);
    fn draw_sprite(&mut self, sprite: Sprite, pos: IVec2);
    /// Draw text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: IVec2, style: TextStyle);
    /// Width and height the text would occupy
    fn measure_text(&self, text: &str, style: TextStyle) -> IVec2;
    /// Show the finished frame
    async fn present(&mut self) -> anyhow::Result<()>;
}

/// Fire-and-forget sound playback
pub trait AudioPlayer {
    fn play(&self, effect: SoundEffect);
}

/// Keyboard and window events
pub trait InputSource {
    /// Discrete events since the last call (quit, fire)
    fn poll_discrete_events(&mut self) -> Vec<GameEvent>;
    /// Movement keys currently held down
    fn sample_held_keys(&self) -> HeldKeys;
}

/// Frame pacing
pub trait Clock {
    /// Block until at least 1/`target_rate` s has passed since the previous tick
    fn tick(&mut self, target_rate: u32);
    /// Block for `ms` milliseconds
    fn delay(&mut self, ms: u64);
}
