pub mod keyboard;

use std::collections::BTreeMap;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use shared::ToolAction;

use crate::config::WaterPlacerConfig;

pub use keyboard::*;

/// A physical input bound to a [`ToolAction`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputBinding {
    Key(KeyCode),
    Mouse(MouseButton),
}

impl InputBinding {
    pub fn label(&self) -> String {
        match self {
            InputBinding::Key(key) => key_label(*key),
            InputBinding::Mouse(MouseButton::Left) => "Left Mouse".to_string(),
            InputBinding::Mouse(MouseButton::Right) => "Right Mouse".to_string(),
            InputBinding::Mouse(MouseButton::Middle) => "Middle Mouse".to_string(),
            InputBinding::Mouse(button) => format!("Mouse {:?}", button),
        }
    }
}

pub(crate) fn default_bindings() -> BTreeMap<ToolAction, Vec<InputBinding>> {
    let mut map = BTreeMap::new();
    map.insert(
        ToolAction::Action,
        vec![InputBinding::Mouse(MouseButton::Left)],
    );
    map.insert(
        ToolAction::AlternateAction,
        vec![InputBinding::Mouse(MouseButton::Right)],
    );
    map.insert(
        ToolAction::ToggleBuildMode,
        vec![InputBinding::Key(KeyCode::KeyB)],
    );
    map.insert(ToolAction::ModeMenu, vec![InputBinding::Key(KeyCode::Tab)]);
    map
}

/// Read-only view of the button state through the configured bindings.
#[derive(SystemParam)]
pub struct ToolInput<'w> {
    keyboard: Res<'w, ButtonInput<KeyCode>>,
    mouse: Res<'w, ButtonInput<MouseButton>>,
    config: Res<'w, WaterPlacerConfig>,
}

impl ToolInput<'_> {
    fn bindings(&self, action: ToolAction) -> &[InputBinding] {
        self.config
            .input
            .bindings
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn just_pressed(&self, action: ToolAction) -> bool {
        is_action_just_pressed(self.bindings(action), &self.keyboard, &self.mouse)
    }

    pub fn just_released(&self, action: ToolAction) -> bool {
        is_action_just_released(self.bindings(action), &self.keyboard, &self.mouse)
    }

    pub fn label(&self, action: ToolAction) -> String {
        action_label(self.bindings(action))
    }
}
