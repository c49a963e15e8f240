//! The water placer tool.
//!
//! [`WaterPlacerTool`] is a per-frame state machine that picks a target cell,
//! highlights it and turns confirming input into [`LiquidEvent`]s. Everything
//! it needs from the game goes through [`HostAdapter`], so the same tool runs
//! inside the Bevy plugin and against the recording host used in tests.
//!
//! [`LiquidEvent`]: crate::messages::LiquidEvent

pub mod geometry;
pub mod hud;

use bevy::prelude::*;
use bevy_log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FREE_PLACE_DISTANCE, WATER_TEMPLATE_IDENTIFIER};
use crate::liquids::LiquidIndex;
use geometry::{
    cell_center, cell_from_point, free_place_target, intersect_plane, CellBox, HighlightBox,
};

/// Logical input actions the tool reacts to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ToolAction {
    Action,
    AlternateAction,
    ToggleBuildMode,
    ModeMenu,
}

impl ToolAction {
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolAction::Action => "Action",
            ToolAction::AlternateAction => "Alternate Action",
            ToolAction::ToggleBuildMode => "Toggle Build Mode",
            ToolAction::ModeMenu => "Mode Menu",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    #[default]
    Single,
    Flood,
    Box,
}

impl FillMode {
    pub const ALL: [FillMode; 3] = [FillMode::Single, FillMode::Flood, FillMode::Box];

    pub fn display_name(&self) -> &'static str {
        match self {
            FillMode::Single => "Single Mode",
            FillMode::Flood => "Flood Fill Mode",
            FillMode::Box => "Box Mode",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FillMode::Single => "▪",
            FillMode::Flood => "≈",
            FillMode::Box => "▣",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStep {
    #[default]
    Idle,
    /// Dragging the footprint on the horizontal plane through `from`.
    Horizontal,
    /// Dragging the top layer up or down.
    Vertical,
}

/// Corners of the box being edited. Only normalized when committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxEdit {
    pub step: BoxStep,
    pub from: IVec3,
    pub to: IVec3,
}

/// Everything the tool needs from the game it runs in.
pub trait HostAdapter {
    /// Cell targeted by the camera on the terrain, `None` on a miss.
    fn raycast_terrain(&mut self) -> Option<IVec3>;
    /// Ray along the camera's forward direction, `None` without an active camera.
    fn camera_ray(&self) -> Option<Ray3d>;

    fn just_pressed(&self, action: ToolAction) -> bool;
    fn hotkey_label(&self, action: ToolAction) -> String;

    fn resolve_liquid(&self, identifier: &str) -> Option<LiquidIndex>;

    fn submit_set_cell_event(&mut self, cell: IVec3, liquid: LiquidIndex);
    fn submit_flood_fill_event(&mut self, cell: IVec3, liquid: LiquidIndex);
    /// Deferred submission, delivered by the host over the following frames.
    fn queue_set_cell_event(&mut self, cell: IVec3, liquid: LiquidIndex);

    fn sounds_enabled(&self) -> bool;
    fn play_placement_sound(&mut self);

    fn set_info_text(&mut self, text: &str);
    fn set_tablet_text(&mut self, title: &str, quick_actions: &str);
    fn show_highlight_box(&mut self, highlight: HighlightBox);
}

/// Entry of the mode selection menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub label: &'static str,
    pub icon: &'static str,
    pub mode: FillMode,
}

/// Contract between the game's handheld-tool slot and a tool.
pub trait HandheldMode {
    fn enter(&mut self, host: &mut dyn HostAdapter);
    fn exit(&mut self, host: &mut dyn HostAdapter);
    fn update_behavior(&mut self, host: &mut dyn HostAdapter);
    fn menu_options(&self) -> Vec<MenuOption>;
    fn select_menu_option(&mut self, index: usize);
    /// Whether the tool consumes the rotate input.
    fn on_rotate_y(&mut self) -> bool;
}

#[derive(Resource, Debug, Clone)]
pub struct WaterPlacerTool {
    liquid: Option<LiquidIndex>,
    free_place: bool,
    free_place_distance: f32,
    fill_mode: FillMode,
    box_edit: BoxEdit,
    menu_open: bool,
}

impl Default for WaterPlacerTool {
    fn default() -> Self {
        Self::new(DEFAULT_FREE_PLACE_DISTANCE)
    }
}

impl WaterPlacerTool {
    pub fn new(free_place_distance: f32) -> Self {
        Self {
            liquid: None,
            free_place: false,
            free_place_distance,
            fill_mode: FillMode::default(),
            box_edit: BoxEdit::default(),
            menu_open: false,
        }
    }

    pub fn liquid(&self) -> Option<LiquidIndex> {
        self.liquid
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill_mode
    }

    pub fn is_free_place(&self) -> bool {
        self.free_place
    }

    pub fn box_edit(&self) -> BoxEdit {
        self.box_edit
    }

    /// Changes the fill mode only. A box edit in progress is kept and resumes
    /// when box mode is selected again.
    pub fn select_mode(&mut self, mode: FillMode) {
        if self.fill_mode != mode {
            debug!("Water placer switched to {}", mode.display_name());
        }
        self.fill_mode = mode;
    }

    /// While the mode menu is open, clicks belong to the menu.
    pub fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
    }

    fn just_pressed(&self, host: &dyn HostAdapter, action: ToolAction) -> bool {
        !self.menu_open && host.just_pressed(action)
    }

    fn target(&self, host: &mut dyn HostAdapter) -> Option<IVec3> {
        if self.free_place {
            host.camera_ray()
                .map(|ray| free_place_target(ray, self.free_place_distance))
        } else {
            host.raycast_terrain()
        }
    }

    fn play_sound(host: &mut dyn HostAdapter) {
        if host.sounds_enabled() {
            host.play_placement_sound();
        }
    }

    fn update_cell_mode(
        &mut self,
        host: &mut dyn HostAdapter,
        target: Option<IVec3>,
        liquid: LiquidIndex,
    ) {
        let Some(cell) = target else {
            return;
        };
        host.show_highlight_box(HighlightBox::cell(cell));

        if self.just_pressed(host, ToolAction::Action) {
            match self.fill_mode {
                FillMode::Flood => host.submit_flood_fill_event(cell, liquid),
                _ => host.submit_set_cell_event(cell, liquid),
            }
            Self::play_sound(host);
        }
    }

    fn update_box_mode(
        &mut self,
        host: &mut dyn HostAdapter,
        target: Option<IVec3>,
        liquid: LiquidIndex,
    ) {
        let pressed = self.just_pressed(host, ToolAction::Action);
        let mut commit = false;
        let edit = &mut self.box_edit;

        match edit.step {
            BoxStep::Idle => {
                if let Some(cell) = target {
                    edit.from = cell;
                    edit.to = cell;
                    if pressed {
                        edit.step = BoxStep::Horizontal;
                    }
                }
            }
            BoxStep::Horizontal => {
                let floor = edit.from.as_vec3() + Vec3::Y * 0.5;
                if let Some(hit) = host
                    .camera_ray()
                    .and_then(|ray| intersect_plane(ray, floor, Dir3::Y))
                {
                    edit.to = cell_from_point(hit).with_y(edit.from.y);
                }
                if pressed {
                    edit.step = BoxStep::Vertical;
                }
            }
            BoxStep::Vertical => {
                let wall = cell_center(edit.to);
                if let Some(hit) = host
                    .camera_ray()
                    .and_then(|ray| intersect_plane(ray, wall, ray.direction))
                {
                    edit.to.y = hit.y.floor() as i32;
                    commit = pressed;
                }
            }
        }

        if commit {
            self.commit_box(host, liquid);
        }

        if target.is_some() || self.box_edit.step != BoxStep::Idle {
            host.show_highlight_box(HighlightBox::spanning(self.box_edit.from, self.box_edit.to));
        }
    }

    fn commit_box(&mut self, host: &mut dyn HostAdapter, liquid: LiquidIndex) {
        Self::play_sound(host);
        self.box_edit.step = BoxStep::Idle;

        let cells = CellBox::from_corners(self.box_edit.from, self.box_edit.to);
        for cell in cells.top_layer() {
            host.queue_set_cell_event(cell, liquid);
        }
        log::debug!(
            "Queued {} liquid cells between {} and {}",
            cells.column_count(),
            cells.min,
            cells.max
        );
    }
}

impl HandheldMode for WaterPlacerTool {
    fn enter(&mut self, host: &mut dyn HostAdapter) {
        if self.liquid.is_some() {
            return;
        }
        self.liquid = host.resolve_liquid(WATER_TEMPLATE_IDENTIFIER);
        match self.liquid {
            Some(liquid) => info!("Water placer resolved water to liquid {}", liquid),
            None => warn!("Water placer could not resolve {}", WATER_TEMPLATE_IDENTIFIER),
        }
    }

    fn exit(&mut self, host: &mut dyn HostAdapter) {
        host.set_info_text("");
        self.box_edit.step = BoxStep::Idle;
        self.menu_open = false;
    }

    fn update_behavior(&mut self, host: &mut dyn HostAdapter) {
        let help = hud::help_text(host, self.free_place);
        host.set_info_text(&help);
        host.set_tablet_text(&hud::tablet_title(self.fill_mode, self.free_place), &help);

        let Some(liquid) = self.liquid else {
            return;
        };

        if self.just_pressed(host, ToolAction::ToggleBuildMode) {
            self.free_place = !self.free_place;
        }

        let target = self.target(host);
        match self.fill_mode {
            FillMode::Single | FillMode::Flood => self.update_cell_mode(host, target, liquid),
            FillMode::Box => self.update_box_mode(host, target, liquid),
        }
    }

    fn menu_options(&self) -> Vec<MenuOption> {
        FillMode::ALL
            .iter()
            .map(|mode| MenuOption {
                label: mode.display_name(),
                icon: mode.icon(),
                mode: *mode,
            })
            .collect()
    }

    fn select_menu_option(&mut self, index: usize) {
        if let Some(mode) = FillMode::ALL.get(index) {
            self.select_mode(*mode);
        }
    }

    fn on_rotate_y(&mut self) -> bool {
        false
    }
}
