use bevy::input::ButtonInput;
use bevy::input_focus::InputFocus;
use bevy::prelude::*;

use super::InputBinding;
use crate::config::WaterPlacerConfig;
use crate::ToolState;

pub fn is_action_just_pressed(
    bindings: &[InputBinding],
    keyboard_input: &ButtonInput<KeyCode>,
    mouse_input: &ButtonInput<MouseButton>,
) -> bool {
    bindings.iter().any(|binding| match binding {
        InputBinding::Key(key) => keyboard_input.just_pressed(*key),
        InputBinding::Mouse(button) => mouse_input.just_pressed(*button),
    })
}

pub fn is_action_just_released(
    bindings: &[InputBinding],
    keyboard_input: &ButtonInput<KeyCode>,
    mouse_input: &ButtonInput<MouseButton>,
) -> bool {
    bindings.iter().any(|binding| match binding {
        InputBinding::Key(key) => keyboard_input.just_released(*key),
        InputBinding::Mouse(button) => mouse_input.just_released(*button),
    })
}

pub fn key_label(key: KeyCode) -> String {
    let name = format!("{:?}", key);
    name.strip_prefix("Key")
        .or_else(|| name.strip_prefix("Digit"))
        .unwrap_or(&name)
        .to_string()
}

pub fn action_label(bindings: &[InputBinding]) -> String {
    if bindings.is_empty() {
        return "<unbound>".to_string();
    }
    bindings
        .iter()
        .map(InputBinding::label)
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Opens or closes the water placer with the configured key, unless a text
/// field or other widget currently owns keyboard input.
pub fn toggle_water_placer(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    config: Res<WaterPlacerConfig>,
    input_focus: Option<Res<InputFocus>>,
    state: Res<State<ToolState>>,
    mut next_state: ResMut<NextState<ToolState>>,
) {
    if !keyboard_input.just_pressed(config.input.open_water_placer_key) {
        return;
    }
    if input_focus.is_some_and(|focus| focus.0.is_some()) {
        return;
    }

    let next = match state.get() {
        ToolState::Inactive => ToolState::WaterPlacer,
        ToolState::WaterPlacer => ToolState::Inactive,
    };
    debug!("Water placer toggled to {:?}", next);
    next_state.set(next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<WaterPlacerConfig>()
            .init_state::<ToolState>()
            .add_systems(Update, toggle_water_placer);
        app
    }

    fn tap_open_key(app: &mut App) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::BracketLeft);
        app.update();
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.release(KeyCode::BracketLeft);
        keyboard.clear();
        app.update();
    }

    fn current(app: &App) -> ToolState {
        *app.world().resource::<State<ToolState>>().get()
    }

    #[test]
    fn open_key_toggles_tool() {
        let mut app = app();
        app.update();
        assert_eq!(current(&app), ToolState::Inactive);

        tap_open_key(&mut app);
        assert_eq!(current(&app), ToolState::WaterPlacer);

        tap_open_key(&mut app);
        assert_eq!(current(&app), ToolState::Inactive);
    }

    #[test]
    fn any_binding_triggers_action_edges() {
        let bindings = [
            InputBinding::Key(KeyCode::Tab),
            InputBinding::Mouse(MouseButton::Middle),
        ];
        let mut keyboard = ButtonInput::<KeyCode>::default();
        let mut mouse = ButtonInput::<MouseButton>::default();
        assert!(!is_action_just_pressed(&bindings, &keyboard, &mouse));

        mouse.press(MouseButton::Middle);
        assert!(is_action_just_pressed(&bindings, &keyboard, &mouse));
        assert!(!is_action_just_released(&bindings, &keyboard, &mouse));

        mouse.clear();
        mouse.release(MouseButton::Middle);
        keyboard.press(KeyCode::KeyQ);
        assert!(!is_action_just_pressed(&bindings, &keyboard, &mouse));
        assert!(is_action_just_released(&bindings, &keyboard, &mouse));
    }

    #[test]
    fn focused_widget_blocks_toggle() {
        let mut app = app();
        let widget = app.world_mut().spawn_empty().id();
        app.insert_resource(InputFocus(Some(widget)));

        tap_open_key(&mut app);
        assert_eq!(current(&app), ToolState::Inactive);
    }
}
