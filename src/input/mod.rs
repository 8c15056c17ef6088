//! Input handling: platform-agnostic events, key actions, held-key state,
//! and pointer delta tracking.

/// Platform-agnostic input events.
pub mod event;
/// Key actions, movement directions and the held-key set.
pub mod keyboard;
/// Pointer position tracking with first-sample suppression.
pub mod mouse;

pub use event::InputEvent;
pub use keyboard::{HeldKeys, KeyAction, Movement};
pub use mouse::PointerTracker;
