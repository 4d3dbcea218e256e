//! Per-tick round progression
//!
//! The driver splits a tick in two around rendering: `apply_event` and
//! `resolve_round` run before the frame is drawn, `advance` runs after.

use super::motion::{HeldKeys, move_ship};
use super::projectiles::{advance_and_collide, fire};
use super::state::{GameEvent, Round, RoundPhase, Side};
use crate::config::GameConfig;

/// What applying a single event did to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing changed (fire at cap, or round already decided)
    Ignored,
    /// A projectile was launched by this side
    Fired(Side),
    /// This side lost one point of health
    Damaged(Side),
    /// The player asked to close the game
    Quit,
}

/// Apply one discrete event to the round
pub fn apply_event(round: &mut Round, event: GameEvent, config: &GameConfig) -> EventOutcome {
    if let GameEvent::Quit = event {
        return EventOutcome::Quit;
    }
    if round.is_over() {
        return EventOutcome::Ignored;
    }

    match event {
        GameEvent::Fire(side) => {
            let (projectiles, ship) = round.arsenal_mut(side);
            if fire(projectiles, ship, config) {
                log::debug!("{} fired ({} in flight)", side.as_str(), projectiles.len());
                EventOutcome::Fired(side)
            } else {
                EventOutcome::Ignored
            }
        }
        GameEvent::Hit(side) => {
            let ship = round.ship_mut(side);
            ship.take_hit();
            log::debug!("{} hit, health {}", side.as_str(), ship.health);
            EventOutcome::Damaged(side)
        }
        GameEvent::Quit => EventOutcome::Quit,
    }
}

/// Hits raised by last tick's collisions, in the order they happened
pub fn take_pending_hits(round: &mut Round) -> Vec<GameEvent> {
    round.pending_hits.drain(..).map(GameEvent::Hit).collect()
}

/// Move the round to `RoundOver` once a ship has run out of health.
///
/// Red is checked last, so if both ships fall on the same tick Yellow is
/// reported as the winner.
pub fn resolve_round(round: &mut Round) -> Option<Side> {
    if let RoundPhase::RoundOver { winner } = round.phase {
        return Some(winner);
    }

    let mut winner = None;
    if round.yellow.is_destroyed() {
        winner = Some(Side::Red);
    }
    if round.red.is_destroyed() {
        winner = Some(Side::Yellow);
    }

    if let Some(winner) = winner {
        round.phase = RoundPhase::RoundOver { winner };
    }
    winner
}

/// Motion and projectile half of the tick
pub fn advance(round: &mut Round, held: &HeldKeys, config: &GameConfig) {
    if round.is_over() {
        return;
    }

    round.time_ticks += 1;

    for side in Side::ALL {
        let keys = held.for_side(side);
        move_ship(round.ship_mut(side), keys, config);
    }

    for side in Side::ALL {
        let (projectiles, target) = round.volley_mut(side);
        let hits = advance_and_collide(projectiles, target, config);
        round
            .pending_hits
            .extend(hits.into_iter().filter_map(|event| match event {
                GameEvent::Hit(struck) => Some(struck),
                _ => None,
            }));
    }
}
