//! Projectile spawning, flight and collision
//!
//! Each side owns its own ordered list of projectiles. A projectile lives until
//! it strikes the opposing ship or leaves the playfield horizontally.

use glam::IVec2;

use super::state::{GameEvent, Projectile, Ship, Side};
use crate::config::GameConfig;

/// Spawn a projectile from the ship's leading edge.
///
/// Returns false without touching `projectiles` when the side already has the
/// maximum number in flight.
pub fn fire(projectiles: &mut Vec<Projectile>, ship: &Ship, config: &GameConfig) -> bool {
    if projectiles.len() >= config.max_projectiles {
        return false;
    }

    let size = config.projectile_size;
    let x = match ship.side {
        Side::Yellow => ship.rect.right(),
        Side::Red => ship.rect.left() - size.x,
    };
    let y = ship.rect.center_y() - 2;

    projectiles.push(Projectile::new(ship.side, IVec2::new(x, y), size));
    true
}

/// Whether a projectile has left the playfield horizontally
pub fn out_of_bounds(projectile: &Projectile, config: &GameConfig) -> bool {
    projectile.rect.left() < 0 || projectile.rect.left() >= config.width
}

/// Move every projectile one step toward `target`, retiring the ones that hit
/// it or leave the playfield.
///
/// A projectile that overlaps the target is counted as a hit even when it has
/// also left the playfield on the same tick.
pub fn advance_and_collide(
    projectiles: &mut Vec<Projectile>,
    target: &Ship,
    config: &GameConfig,
) -> Vec<GameEvent> {
    let mut hits = Vec::new();
    let step = config.projectile_velocity;

    projectiles.retain_mut(|projectile| {
        projectile.rect.pos.x += projectile.direction * step;

        if projectile.rect.overlaps(&target.rect) {
            hits.push(GameEvent::Hit(target.side));
            false
        } else {
            !out_of_bounds(projectile, config)
        }
    });

    hits
}
