//! Desktop input and frame pacing backed by macroquad

use std::time::{Duration, Instant};

use macroquad::input::{KeyCode, is_key_down, is_key_pressed, is_quit_requested, prevent_quit};

use super::{Clock, InputSource};
use crate::sim::{GameEvent, HeldKeys, MoveKeys, Side};

/// Fixed keys for one side
#[derive(Debug, Clone, Copy)]
pub struct KeyLayout {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub fire: KeyCode,
}

impl KeyLayout {
    /// Arrow keys, Left Ctrl to fire
    pub const YELLOW: KeyLayout = KeyLayout {
        up: KeyCode::Up,
        down: KeyCode::Down,
        left: KeyCode::Left,
        right: KeyCode::Right,
        fire: KeyCode::LeftControl,
    };

    /// WASD, Right Ctrl to fire
    pub const RED: KeyLayout = KeyLayout {
        up: KeyCode::W,
        down: KeyCode::S,
        left: KeyCode::A,
        right: KeyCode::D,
        fire: KeyCode::RightControl,
    };

    pub fn for_side(side: Side) -> KeyLayout {
        match side {
            Side::Yellow => Self::YELLOW,
            Side::Red => Self::RED,
        }
    }

    fn held(&self) -> MoveKeys {
        MoveKeys {
            up: is_key_down(self.up),
            down: is_key_down(self.down),
            left: is_key_down(self.left),
            right: is_key_down(self.right),
        }
    }
}

/// Keyboard and window-close input from macroquad
pub struct MacroquadInput;

impl MacroquadInput {
    /// Takes over the window close button so it arrives as a `Quit` event
    pub fn new() -> Self {
        prevent_quit();
        Self
    }
}

impl Default for MacroquadInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for MacroquadInput {
    fn poll_discrete_events(&mut self) -> Vec<GameEvent> {
        if is_quit_requested() {
            return vec![GameEvent::Quit];
        }

        Side::ALL
            .into_iter()
            .filter(|side| is_key_pressed(KeyLayout::for_side(*side).fire))
            .map(GameEvent::Fire)
            .collect()
    }

    fn sample_held_keys(&self) -> HeldKeys {
        HeldKeys {
            yellow: KeyLayout::YELLOW.held(),
            red: KeyLayout::RED.held(),
        }
    }
}

/// Sleeps out the remainder of each tick
#[derive(Debug, Default)]
pub struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, target_rate: u32) {
        let budget = Duration::from_secs(1) / target_rate.max(1);
        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
        }
        self.last_tick = Some(Instant::now());
    }

    fn delay(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_caps_rate() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        // First tick only records the time
        clock.tick(100);
        clock.tick(100);
        clock.tick(100);
        assert!(start.elapsed() >= Duration::from_millis(19));
    }

    #[test]
    fn test_delay_blocks() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.delay(15);
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn test_layouts_are_distinct() {
        assert_ne!(KeyLayout::YELLOW.fire, KeyLayout::RED.fire);
        assert_eq!(KeyLayout::for_side(Side::Red).up, KeyCode::W);
    }
}
