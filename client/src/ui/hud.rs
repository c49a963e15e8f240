use bevy::prelude::*;

use crate::constants::HUD_FONT_SIZE;
use crate::ToolState;

/// Text surfaces the tool writes to: the info line at the bottom of the
/// screen and the tablet panel (title plus quick actions) at the top left.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct ToolHudText {
    pub info: String,
    pub title: String,
    pub quick_actions: String,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudField {
    Info,
    Title,
    QuickActions,
}

impl HudField {
    fn read(self, hud: &ToolHudText) -> &str {
        match self {
            HudField::Info => &hud.info,
            HudField::Title => &hud.title,
            HudField::QuickActions => &hud.quick_actions,
        }
    }
}

fn hud_text(field: HudField, hud: &ToolHudText, color: Color) -> impl Bundle {
    (
        field,
        Text::new(field.read(hud)),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(color),
    )
}

pub fn setup_tool_hud(mut commands: Commands, hud: Res<ToolHudText>) {
    // Tablet panel
    commands
        .spawn((
            StateScoped(ToolState::WaterPlacer),
            BackgroundColor(Color::BLACK.with_alpha(0.5)),
            GlobalZIndex(i32::MAX),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(1.),
                top: Val::Percent(1.),
                padding: UiRect::all(Val::Px(6.0)),
                row_gap: Val::Px(4.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
        ))
        .with_children(|panel| {
            panel.spawn(hud_text(HudField::Title, &hud, Color::srgb(0.55, 0.8, 1.0)));
            panel.spawn(hud_text(HudField::QuickActions, &hud, Color::WHITE));
        });

    // Info line
    commands
        .spawn((
            StateScoped(ToolState::WaterPlacer),
            GlobalZIndex(i32::MAX),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.),
                bottom: Val::Percent(4.),
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|line| {
            line.spawn(hud_text(HudField::Info, &hud, Color::WHITE));
        });
}

pub fn update_tool_hud(hud: Res<ToolHudText>, mut texts: Query<(&mut Text, &HudField)>) {
    for (mut text, field) in &mut texts {
        let value = field.read(&hud);
        if text.0 != value {
            text.0 = value.to_string();
        }
    }
}
