//! Per-frame input supplied by the host
//!
//! The host samples its keyboard once per frame and hands the core two things:
//! the set of movement keys currently held, and an ordered queue of discrete
//! events (key presses and window close).

use serde::{Deserialize, Serialize};

/// Movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Physical movement keys. Each direction has two bindings (arrows and WASD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    A,
    D,
    W,
    S,
}

impl Key {
    pub const ALL: [Key; 8] = [
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::ArrowUp,
        Key::ArrowDown,
        Key::A,
        Key::D,
        Key::W,
        Key::S,
    ];

    pub fn direction(self) -> Direction {
        match self {
            Key::ArrowLeft | Key::A => Direction::Left,
            Key::ArrowRight | Key::D => Direction::Right,
            Key::ArrowUp | Key::W => Direction::Up,
            Key::ArrowDown | Key::S => Direction::Down,
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Snapshot of the movement keys held down this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys(u8);

impl HeldKeys {
    pub fn none() -> Self {
        Self(0)
    }

    pub fn from_keys(keys: &[Key]) -> Self {
        let mut held = Self::none();
        for &key in keys {
            held.press(key);
        }
        held
    }

    pub fn press(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    /// True if either binding for `direction` is held
    pub fn direction_held(&self, direction: Direction) -> bool {
        Key::ALL
            .iter()
            .any(|&key| key.direction() == direction && self.is_held(key))
    }
}

/// Discrete events, consumed in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window closed or quit key pressed
    Quit,
    /// Fire key pressed (one bullet per press)
    Fire,
    /// Restart key pressed (only honored after game over)
    Restart,
}

/// Everything the host samples for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub held: HeldKeys,
    pub events: Vec<InputEvent>,
}

/// What the host loop should do after handing input to the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopSignal {
    Continue,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_bindings_map_to_direction() {
        let arrows = HeldKeys::from_keys(&[Key::ArrowLeft]);
        let wasd = HeldKeys::from_keys(&[Key::A]);
        assert!(arrows.direction_held(Direction::Left));
        assert!(wasd.direction_held(Direction::Left));
        assert!(!arrows.direction_held(Direction::Right));
    }

    #[test]
    fn test_press_release() {
        let mut held = HeldKeys::none();
        held.press(Key::W);
        held.press(Key::ArrowUp);
        assert!(held.direction_held(Direction::Up));

        held.release(Key::W);
        // Arrow binding still held
        assert!(held.direction_held(Direction::Up));

        held.release(Key::ArrowUp);
        assert!(!held.direction_held(Direction::Up));
        assert_eq!(held, HeldKeys::none());
    }

    #[test]
    fn test_all_keys_have_distinct_bits() {
        let all = HeldKeys::from_keys(&Key::ALL);
        for key in Key::ALL {
            assert!(all.is_held(key));
            let mut one = HeldKeys::none();
            one.press(key);
            for other in Key::ALL {
                assert_eq!(one.is_held(other), other == key);
            }
        }
    }
}
