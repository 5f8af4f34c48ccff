//! Raw host input records and level-triggered keyboard state.
//!
//! The host's event dispatch appends [`RawInput`] records to the game's queue
//! at arbitrary times between frames; the frame step drains them wholesale in
//! FIFO order into a [`KeyboardState`]. Key repeat notifications from the host
//! carry a `repeat` flag and are dropped here -- only edge-triggered down/up
//! transitions update the held set, so a held key never re-triggers.

use std::collections::HashSet;

/// Key codes the game binds. Anything else never reaches the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    ArrowLeft,
    ArrowRight,
    Space,
}

/// One input record as delivered by the host environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    Press { key: Key, repeat: bool },
    Release { key: Key },
    PointerClick { x: f64, y: f64 },
}

/// Which keys are physically down right now.
#[derive(Debug, Default)]
pub struct KeyboardState {
    held: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
        }
    }

    /// Fold one raw record into the held set. Repeat-flagged presses are
    /// ignored, pointer clicks are logged and discarded (no gameplay effect).
    pub fn apply(&mut self, input: RawInput) {
        match input {
            RawInput::Press { key, repeat } => {
                if !repeat {
                    self.held.insert(key);
                }
            }
            RawInput::Release { key } => {
                self.held.remove(&key);
            }
            RawInput::PointerClick { x, y } => {
                log::debug!("pointer click at ({x:.0}, {y:.0}) ignored");
            }
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_sets_held() {
        let mut kb = KeyboardState::new();
        kb.apply(RawInput::Press {
            key: Key::D,
            repeat: false,
        });
        assert!(kb.is_held(Key::D));
        assert!(!kb.is_held(Key::A));
    }

    #[test]
    fn release_clears_held() {
        let mut kb = KeyboardState::new();
        kb.apply(RawInput::Press {
            key: Key::D,
            repeat: false,
        });
        kb.apply(RawInput::Release { key: Key::D });
        assert!(!kb.is_held(Key::D));
    }

    #[test]
    fn repeat_press_changes_nothing() {
        let mut kb = KeyboardState::new();
        kb.apply(RawInput::Press {
            key: Key::Space,
            repeat: true,
        });
        assert!(!kb.is_held(Key::Space));

        kb.apply(RawInput::Press {
            key: Key::Space,
            repeat: false,
        });
        kb.apply(RawInput::Press {
            key: Key::Space,
            repeat: true,
        });
        assert!(kb.is_held(Key::Space));
    }

    #[test]
    fn release_without_press_is_no_op() {
        let mut kb = KeyboardState::new();
        kb.apply(RawInput::Release { key: Key::A });
        assert!(!kb.is_held(Key::A));
    }

    #[test]
    fn pointer_click_is_discarded() {
        let mut kb = KeyboardState::new();
        kb.apply(RawInput::PointerClick { x: 10.0, y: 20.0 });
        for key in [Key::A, Key::D, Key::ArrowLeft, Key::ArrowRight, Key::Space] {
            assert!(!kb.is_held(key));
        }
    }

    #[test]
    fn multiple_keys_independent() {
        let mut kb = KeyboardState::new();
        kb.apply(RawInput::Press {
            key: Key::A,
            repeat: false,
        });
        kb.apply(RawInput::Press {
            key: Key::D,
            repeat: false,
        });
        kb.apply(RawInput::Release { key: Key::A });
        assert!(!kb.is_held(Key::A));
        assert!(kb.is_held(Key::D));
    }
}
