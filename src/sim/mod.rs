//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed tick, integer pixel coordinates
//! - Stable iteration order (fire order per side)
//! - No rendering, audio or platform dependencies

pub mod motion;
pub mod projectiles;
pub mod rect;
pub mod state;
pub mod tick;

pub use motion::{HeldKeys, MoveKeys, Zone, move_ship};
pub use projectiles::{advance_and_collide, fire, out_of_bounds};
pub use rect::Rect;
pub use state::{GameEvent, Projectile, Round, RoundPhase, Ship, Side};
pub use tick::{EventOutcome, advance, apply_event, resolve_round, take_pending_hits};
