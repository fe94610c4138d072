use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format
/// (`"ArrowLeft"`, `"KeyR"`, `"Digit1"`).
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `NextPreset` → `"ArrowRight"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self::from_bindings(HashMap::from([
            (KeyAction::NextPreset, "ArrowRight".into()),
            (KeyAction::PreviousPreset, "ArrowLeft".into()),
            (KeyAction::ToggleCameraMode, "KeyC".into()),
            (KeyAction::ResetCamera, "KeyR".into()),
            (KeyAction::CycleViewMode, "Tab".into()),
            (KeyAction::ViewKnight, "Digit1".into()),
            (KeyAction::ViewDemon, "Digit2".into()),
            (KeyAction::ViewVersus, "Digit3".into()),
            (KeyAction::ToggleIdleSpin, "Space".into()),
            (KeyAction::ToggleAnimation, "KeyP".into()),
            (KeyAction::Quit, "Escape".into()),
        ]))
    }
}

impl<'de> Deserialize<'de> for KeybindingOptions {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            bindings: Option<HashMap<KeyAction, String>>,
        }
        let raw = Raw::deserialize(d)?;
        Ok(raw
            .bindings
            .map_or_else(Self::default, Self::from_bindings))
    }
}

impl KeybindingOptions {
    /// Build from an action → key map.
    #[must_use]
    pub fn from_bindings(bindings: HashMap<KeyAction, String>) -> Self {
        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }

    /// Rebind `action` to `key`.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
