//! Translation from raw keyboard state to the per-frame semantic batch.
//!
//! The batch is immutable for the rest of the frame: every entity receives
//! the same slice and decides for itself which actions are relevant.

use lh_core::input::{Key, KeyboardState};

/// A semantic game action derived from key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Idle,
    Jump,
}

/// Synthesize the semantic batch for one frame.
///
/// `Jump` is independent and always first when the jump key is held. Exactly
/// one directional action follows: opposing directional keys held together,
/// or no directional key at all, resolve to `Idle`.
pub fn translate(keyboard: &KeyboardState) -> Vec<Action> {
    let mut batch = Vec::with_capacity(2);
    if keyboard.is_held(Key::Space) {
        batch.push(Action::Jump);
    }

    let left = keyboard.is_held(Key::A) || keyboard.is_held(Key::ArrowLeft);
    let right = keyboard.is_held(Key::D) || keyboard.is_held(Key::ArrowRight);
    batch.push(match (left, right) {
        (true, false) => Action::Left,
        (false, true) => Action::Right,
        _ => Action::Idle,
    });
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use lh_core::input::RawInput;

    fn keyboard(held: &[Key]) -> KeyboardState {
        let mut kb = KeyboardState::new();
        for &key in held {
            kb.apply(RawInput::Press {
                key,
                repeat: false,
            });
        }
        kb
    }

    #[test]
    fn no_keys_resolves_to_idle() {
        assert_eq!(translate(&keyboard(&[])), vec![Action::Idle]);
    }

    #[test]
    fn single_direction_translates() {
        assert_eq!(translate(&keyboard(&[Key::D])), vec![Action::Right]);
        assert_eq!(translate(&keyboard(&[Key::ArrowLeft])), vec![Action::Left]);
    }

    #[test]
    fn opposing_directions_resolve_to_idle() {
        assert_eq!(
            translate(&keyboard(&[Key::A, Key::D])),
            vec![Action::Idle]
        );
        assert_eq!(
            translate(&keyboard(&[Key::ArrowLeft, Key::ArrowRight])),
            vec![Action::Idle]
        );
    }

    #[test]
    fn jump_comes_first_and_keeps_direction() {
        assert_eq!(
            translate(&keyboard(&[Key::Space, Key::D])),
            vec![Action::Jump, Action::Right]
        );
        assert_eq!(
            translate(&keyboard(&[Key::Space])),
            vec![Action::Jump, Action::Idle]
        );
    }

    #[test]
    fn alternate_bindings_are_equivalent() {
        assert_eq!(translate(&keyboard(&[Key::A])), translate(&keyboard(&[Key::ArrowLeft])));
        assert_eq!(translate(&keyboard(&[Key::D])), translate(&keyboard(&[Key::ArrowRight])));
    }
}
