use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// orthographic_view = "KeyO"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Fly along the view direction.
    MoveForward,
    /// Fly against the view direction.
    MoveBackward,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Rise along world up.
    MoveUp,
    /// Sink along world up.
    MoveDown,
    /// Switch to perspective projection.
    PerspectiveView,
    /// Switch to orthographic projection.
    OrthographicView,
    /// Close the viewer.
    Quit,
}

impl KeyAction {
    /// The movement direction this action holds, if it is a movement key.
    #[must_use]
    pub fn movement(self) -> Option<Movement> {
        match self {
            Self::MoveForward => Some(Movement::Forward),
            Self::MoveBackward => Some(Movement::Backward),
            Self::MoveLeft => Some(Movement::Left),
            Self::MoveRight => Some(Movement::Right),
            Self::MoveUp => Some(Movement::Up),
            Self::MoveDown => Some(Movement::Down),
            Self::PerspectiveView | Self::OrthographicView | Self::Quit => None,
        }
    }
}

/// The six camera movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
    /// Against `right`.
    Left,
    /// Along `right`.
    Right,
    /// Along world up.
    Up,
    /// Against world up.
    Down,
}

impl Movement {
    /// All directions, in the order they are applied each frame.
    pub const ALL: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];
}

/// Set of movement keys currently held down.
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: FxHashSet<Movement>,
}

impl HeldKeys {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press (`true`) or release (`false`). Repeated presses are
    /// idempotent.
    pub fn set(&mut self, movement: Movement, pressed: bool) {
        if pressed {
            let _ = self.held.insert(movement);
        } else {
            let _ = self.held.remove(&movement);
        }
    }

    /// Whether `movement` is held.
    #[must_use]
    pub fn is_held(&self, movement: Movement) -> bool {
        self.held.contains(&movement)
    }

    /// Whether no movement key is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Release everything, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Held directions in [`Movement::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Movement> + '_ {
        Movement::ALL.into_iter().filter(|m| self.held.contains(m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_movement_actions_map_to_directions() {
        assert_eq!(KeyAction::MoveUp.movement(), Some(Movement::Up));
        assert_eq!(KeyAction::Quit.movement(), None);
        assert_eq!(KeyAction::OrthographicView.movement(), None);
    }

    #[test]
    fn held_keys_press_and_release() {
        let mut keys = HeldKeys::new();
        keys.set(Movement::Forward, true);
        keys.set(Movement::Forward, true);
        keys.set(Movement::Right, true);
        assert_eq!(
            keys.iter().collect::<Vec<_>>(),
            vec![Movement::Forward, Movement::Right]
        );

        keys.set(Movement::Forward, false);
        assert!(!keys.is_held(Movement::Forward));
        assert!(keys.is_held(Movement::Right));

        keys.clear();
        assert!(keys.is_empty());
    }
}
