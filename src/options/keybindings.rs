use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Key strings use the physical key-code names (`"KeyW"`, `"Escape"`).
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveUp` → `"KeyQ"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl PartialEq for KeybindingOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::MoveForward, "KeyW".into()),
            (KeyAction::MoveBackward, "KeyS".into()),
            (KeyAction::MoveLeft, "KeyA".into()),
            (KeyAction::MoveRight, "KeyD".into()),
            (KeyAction::MoveUp, "KeyQ".into()),
            (KeyAction::MoveDown, "KeyE".into()),
            (KeyAction::PerspectiveView, "KeyP".into()),
            (KeyAction::OrthographicView, "KeyO".into()),
            (KeyAction::Quit, "Escape".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Bind every action missing from `bindings` to its default key, unless
    /// another action already claimed that key.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (action, key) in defaults.bindings {
            if self.bindings.contains_key(&action)
                || self.bindings.values().any(|k| *k == key)
            {
                continue;
            }
            let _ = self.bindings.insert(action, key);
        }
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// First key string bound to more than one action, if any.
    pub(crate) fn duplicate_key(&self) -> Option<&str> {
        let mut seen: HashMap<&str, KeyAction> = HashMap::new();
        let mut keys: Vec<_> = self.bindings.iter().collect();
        keys.sort_by(|a, b| a.1.cmp(b.1));
        for (action, key) in keys {
            if let Some(prev) = seen.insert(key.as_str(), *action) {
                if prev != *action {
                    return Some(key.as_str());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_every_action() {
        let keys = KeybindingOptions::default();
        assert_eq!(keys.lookup("KeyW"), Some(KeyAction::MoveForward));
        assert_eq!(keys.lookup("KeyQ"), Some(KeyAction::MoveUp));
        assert_eq!(keys.lookup("KeyE"), Some(KeyAction::MoveDown));
        assert_eq!(keys.lookup("KeyP"), Some(KeyAction::PerspectiveView));
        assert_eq!(keys.lookup("KeyO"), Some(KeyAction::OrthographicView));
        assert_eq!(keys.lookup("Escape"), Some(KeyAction::Quit));
        assert_eq!(keys.lookup("KeyZ"), None);
        assert_eq!(keys.duplicate_key(), None);
    }

    #[test]
    fn rebinding_needs_reverse_map_rebuild() {
        let mut keys = KeybindingOptions::default();
        let _ = keys.bindings.insert(KeyAction::MoveUp, "Space".into());
        assert_eq!(keys.lookup("Space"), None);
        keys.rebuild_reverse_map();
        assert_eq!(keys.lookup("Space"), Some(KeyAction::MoveUp));
        assert_eq!(keys.lookup("KeyQ"), None);
    }

    #[test]
    fn merge_keeps_overrides_and_fills_gaps() {
        let mut keys = KeybindingOptions {
            bindings: HashMap::from([
                (KeyAction::MoveUp, "Space".into()),
                (KeyAction::Quit, "KeyE".into()),
            ]),
            key_to_action: HashMap::new(),
        };
        keys.merge_defaults();
        assert_eq!(keys.lookup("Space"), Some(KeyAction::MoveUp));
        assert_eq!(keys.lookup("KeyW"), Some(KeyAction::MoveForward));
        // KeyE was claimed by quit, so move_down stays unbound.
        assert_eq!(keys.lookup("KeyE"), Some(KeyAction::Quit));
        assert!(!keys.bindings.contains_key(&KeyAction::MoveDown));
        assert_eq!(keys.lookup("Escape"), None);
        assert_eq!(keys.duplicate_key(), None);
    }

    #[test]
    fn shared_key_is_reported() {
        let mut keys = KeybindingOptions::default();
        let _ = keys.bindings.insert(KeyAction::Quit, "KeyW".into());
        assert_eq!(keys.duplicate_key(), Some("KeyW"));
    }
}
