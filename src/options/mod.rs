//! Viewer options with TOML preset support.
//!
//! Window geometry, camera pose and control parameters, and keybindings are
//! consolidated here. Options serialize to/from TOML so a preset can
//! override any subset of them.

mod camera;
mod keybindings;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::TabletopError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window title and initial size.
    pub window: WindowOptions,
    /// Camera pose, control and projection parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`TabletopError::OptionsParse`] if the TOML is malformed or a value
    /// has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, TabletopError> {
        let mut opts: Self = toml::from_str(content)?;
        opts.keybindings.merge_defaults();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`TabletopError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, TabletopError> {
        let content =
            std::fs::read_to_string(path).map_err(TabletopError::Io)?;
        let opts = Self::from_toml_str(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`TabletopError::Io`] if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), TabletopError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TabletopError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TabletopError::Io)?;
        }
        std::fs::write(path, content).map_err(TabletopError::Io)
    }

    /// Reject values the camera or window cannot work with.
    ///
    /// # Errors
    ///
    /// [`TabletopError::InvalidOptions`] naming the first offending value.
    pub fn validate(&self) -> Result<(), TabletopError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(TabletopError::InvalidOptions(format!(
                "window size {}x{} has a zero side",
                self.window.width, self.window.height
            )));
        }
        if let Some(problem) = self.camera.problem() {
            return Err(TabletopError::InvalidOptions(problem));
        }
        if let Some(key) = self.keybindings.duplicate_key() {
            return Err(TabletopError::InvalidOptions(format!(
                "key {key} is bound to more than one action"
            )));
        }
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::ProjectionMode;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
        assert_eq!(
            parsed.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
zoom = 60.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.zoom, 60.0);
        // Everything else should be default
        assert_eq!(opts.camera.movement_speed, 2.5);
        assert_eq!(opts.window.width, 1000);
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Quit));
    }

    #[test]
    fn projection_mode_parses_from_toml() {
        let opts =
            Options::from_toml_str("[camera]\nprojection = \"orthographic\"\n")
                .unwrap();
        assert_eq!(opts.camera.projection, ProjectionMode::Orthographic);
        assert_eq!(
            Options::default().camera.projection,
            ProjectionMode::Perspective
        );
        assert!(Options::from_toml_str("[camera]\nprojection = \"fisheye\"\n")
            .is_err());
    }

    #[test]
    fn keybinding_override_from_toml() {
        let toml_str = r#"
[keybindings.bindings]
move_up = "Space"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("Space"), Some(KeyAction::MoveUp));
        // Unlisted actions keep their defaults; the old key is freed.
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("KeyQ"), None);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml_str("[camera\nzoom = ").unwrap_err();
        assert!(matches!(err, TabletopError::OptionsParse(_)));
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(Options::default().validate().is_ok());

        let mut opts = Options::default();
        opts.window.height = 0;
        assert!(matches!(
            opts.validate(),
            Err(TabletopError::InvalidOptions(_))
        ));

        let mut opts = Options::default();
        opts.camera.speed_min = 20.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("tabletop-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.mouse_sensitivity = 0.25;
        opts.save(&dir.join("slow.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("slow.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["slow".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err =
            Options::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, TabletopError::Io(_)));
    }
}
