//! Rendering module
//!
//! `scene` decides what is drawn where; `surface` draws it with macroquad.

pub mod scene;
pub mod surface;

pub use scene::{draw_round, draw_winner};
pub use surface::{MacroquadSurface, Textures};
