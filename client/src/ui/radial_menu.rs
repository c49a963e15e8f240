//! Radial menu for picking the fill mode.
//!
//! Opens while the mode menu action is held and selects the hovered segment
//! when it is released.

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiContexts;
use egui::{Color32, Pos2, Stroke, Vec2};
use shared::{HandheldMode, MenuOption, ToolAction, WaterPlacerTool};

use crate::input::ToolInput;

#[derive(Resource, Debug, Clone, Default)]
pub struct RadialMenuState {
    pub visible: bool,
    pub center: Pos2,
    pub hovered_segment: Option<usize>,
}

impl RadialMenuState {
    pub fn open(&mut self, position: Pos2) {
        self.visible = true;
        self.center = position;
        self.hovered_segment = None;
    }

    /// Closes the menu and returns the segment that was hovered, if any.
    pub fn close(&mut self) -> Option<usize> {
        self.visible = false;
        self.hovered_segment.take()
    }
}

pub struct RadialMenuConfig {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub segment_gap: f32,
    pub bg_color: Color32,
    pub hover_color: Color32,
    pub active_color: Color32,
    pub text_color: Color32,
    pub border_color: Color32,
    pub border_width: f32,
}

impl Default for RadialMenuConfig {
    fn default() -> Self {
        Self {
            inner_radius: 40.0,
            outer_radius: 120.0,
            segment_gap: 0.03,
            bg_color: Color32::from_rgba_unmultiplied(30, 30, 40, 220),
            hover_color: Color32::from_rgba_unmultiplied(70, 130, 180, 240),
            active_color: Color32::from_rgba_unmultiplied(60, 120, 200, 240),
            text_color: Color32::WHITE,
            border_color: Color32::from_rgba_unmultiplied(100, 100, 120, 200),
            border_width: 2.0,
        }
    }
}

/// Segment under `pointer`, with segment 0 starting at the top and going
/// clockwise. `None` inside the dead zone.
pub fn segment_at(
    center: Pos2,
    pointer: Pos2,
    segment_count: usize,
    inner_radius: f32,
) -> Option<usize> {
    if segment_count == 0 {
        return None;
    }
    let delta = pointer - center;
    if delta.length() < inner_radius {
        return None;
    }

    let segment_angle = TAU / segment_count as f32;
    let angle = delta.y.atan2(delta.x);
    let normalized = (angle + FRAC_PI_2 + TAU) % TAU;
    Some((normalized / segment_angle) as usize % segment_count)
}

pub fn drive_radial_menu(
    input: ToolInput,
    mut state: ResMut<RadialMenuState>,
    mut tool: ResMut<WaterPlacerTool>,
    mut contexts: EguiContexts,
) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    if input.just_pressed(ToolAction::ModeMenu) {
        state.open(ctx.screen_rect().center());
        tool.set_menu_open(true);
    }
    if !state.visible {
        return;
    }

    let options = tool.menu_options();
    let config = RadialMenuConfig::default();
    if let Some(pointer) = ctx.pointer_hover_pos() {
        state.hovered_segment = segment_at(state.center, pointer, options.len(), config.inner_radius);
    }

    if input.just_released(ToolAction::ModeMenu) {
        if let Some(index) = state.close() {
            tool.select_menu_option(index);
        }
        tool.set_menu_open(false);
        return;
    }

    show_radial_menu(ctx, &state, &options, tool.fill_mode(), &config);
}

/// The release of the menu key is never seen once the tool is closed, so the
/// menu is dropped with it.
pub fn close_radial_menu(mut state: ResMut<RadialMenuState>) {
    if state.visible {
        state.close();
    }
}

fn show_radial_menu(
    ctx: &egui::Context,
    state: &RadialMenuState,
    options: &[MenuOption],
    active: shared::FillMode,
    config: &RadialMenuConfig,
) {
    let segment_angle = TAU / options.len().max(1) as f32;

    egui::Area::new(egui::Id::new("water_placer_radial_menu"))
        .fixed_pos(Pos2::ZERO)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let painter = ui.painter();
            let center = state.center;

            for (i, option) in options.iter().enumerate() {
                // Screen space: -PI/2 is the top, angles grow clockwise
                let start_angle = -FRAC_PI_2 + i as f32 * segment_angle + config.segment_gap / 2.0;
                let end_angle = start_angle + segment_angle - config.segment_gap;

                let fill_color = if state.hovered_segment == Some(i) {
                    config.hover_color
                } else if option.mode == active {
                    config.active_color
                } else {
                    config.bg_color
                };

                draw_arc_segment(
                    painter,
                    center,
                    config.inner_radius,
                    config.outer_radius,
                    start_angle,
                    end_angle,
                    fill_color,
                    Stroke::new(config.border_width, config.border_color),
                );

                let mid_angle = (start_angle + end_angle) / 2.0;
                let label_radius = (config.inner_radius + config.outer_radius) / 2.0;
                let label_pos =
                    center + Vec2::new(mid_angle.cos() * label_radius, mid_angle.sin() * label_radius);

                painter.text(
                    label_pos - Vec2::new(0.0, 8.0),
                    egui::Align2::CENTER_CENTER,
                    option.icon,
                    egui::FontId::proportional(20.0),
                    config.text_color,
                );
                painter.text(
                    label_pos + Vec2::new(0.0, 12.0),
                    egui::Align2::CENTER_CENTER,
                    option.label,
                    egui::FontId::proportional(12.0),
                    config.text_color,
                );
            }

            painter.circle_filled(center, config.inner_radius - 5.0, config.bg_color);
            painter.circle_stroke(
                center,
                config.inner_radius - 5.0,
                Stroke::new(config.border_width, config.border_color),
            );
        });
}

fn draw_arc_segment(
    painter: &egui::Painter,
    center: Pos2,
    inner_radius: f32,
    outer_radius: f32,
    start_angle: f32,
    end_angle: f32,
    fill: Color32,
    stroke: Stroke,
) {
    const SEGMENTS: usize = 32;
    let angle_step = (end_angle - start_angle) / SEGMENTS as f32;

    let mut points = Vec::with_capacity(SEGMENTS * 2 + 2);
    for i in 0..=SEGMENTS {
        let angle = start_angle + angle_step * i as f32;
        points.push(center + Vec2::new(angle.cos() * outer_radius, angle.sin() * outer_radius));
    }
    for i in (0..=SEGMENTS).rev() {
        let angle = start_angle + angle_step * i as f32;
        points.push(center + Vec2::new(angle.cos() * inner_radius, angle.sin() * inner_radius));
    }

    painter.add(egui::Shape::convex_polygon(points, fill, stroke));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    use crate::ToolState;

    const CENTER: Pos2 = Pos2::new(100.0, 100.0);

    #[test]
    fn dead_zone_selects_nothing() {
        assert_eq!(segment_at(CENTER, Pos2::new(110.0, 105.0), 3, 40.0), None);
        assert_eq!(segment_at(CENTER, Pos2::new(300.0, 100.0), 0, 40.0), None);
    }

    #[test]
    fn segments_start_at_top_and_go_clockwise() {
        // Screen y grows downwards
        assert_eq!(segment_at(CENTER, Pos2::new(110.0, 20.0), 3, 40.0), Some(0));
        assert_eq!(segment_at(CENTER, Pos2::new(140.0, 180.0), 3, 40.0), Some(1));
        assert_eq!(segment_at(CENTER, Pos2::new(20.0, 140.0), 3, 40.0), Some(2));
    }

    #[test]
    fn close_hands_back_hovered_segment() {
        let mut state = RadialMenuState::default();
        state.open(CENTER);
        state.hovered_segment = Some(2);

        assert_eq!(state.close(), Some(2));
        assert!(!state.visible);
        assert_eq!(state.close(), None);
    }

    #[test]
    fn leaving_the_tool_closes_the_menu() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_state::<ToolState>()
            .init_resource::<RadialMenuState>()
            .add_systems(OnExit(ToolState::WaterPlacer), close_radial_menu);

        app.world_mut()
            .resource_mut::<NextState<ToolState>>()
            .set(ToolState::WaterPlacer);
        app.update();
        app.world_mut()
            .resource_mut::<RadialMenuState>()
            .open(CENTER);

        app.world_mut()
            .resource_mut::<NextState<ToolState>>()
            .set(ToolState::Inactive);
        app.update();

        let state = app.world().resource::<RadialMenuState>();
        assert!(!state.visible);
        assert_eq!(state.hovered_segment, None);
    }
}
