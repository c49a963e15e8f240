use bevy::ecs::system::SystemParam;
use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings, RayCastVisibility};
use bevy::prelude::*;
use shared::tool::geometry::HighlightBox;
use shared::{HostAdapter, LiquidEvent, LiquidIndex, LiquidRegistry, ToolAction};

use super::queue::QueuedLiquidEvents;
use crate::audio::PlacementSoundEvent;
use crate::config::WaterPlacerConfig;
use crate::constants::HIGHLIGHT_COLOR;
use crate::input::ToolInput;
use crate::ui::hud::ToolHudText;
use crate::{Terrain, ToolCamera};

/// Cell in front of the first [`Terrain`] face hit by `ray` within `reach`.
pub fn cast_terrain(
    ray_cast: &mut MeshRayCast,
    terrain_query: &Query<(), With<Terrain>>,
    ray: Ray3d,
    reach: f32,
) -> Option<IVec3> {
    let filter = |entity: Entity| terrain_query.contains(entity);
    let settings = MeshRayCastSettings::default()
        .with_visibility(RayCastVisibility::Visible)
        .with_filter(&filter);

    let (_, hit) = ray_cast.cast_ray(ray, &settings).first()?;
    if hit.distance > reach {
        return None;
    }
    Some((hit.point + hit.normal * 0.5).floor().as_ivec3())
}

/// Bevy side of [`HostAdapter`]: camera, mesh ray casting, gizmos, input,
/// HUD text and the liquid event queues.
#[derive(SystemParam)]
pub struct ToolHost<'w, 's> {
    camera_query: Query<'w, 's, &'static GlobalTransform, With<ToolCamera>>,
    terrain_query: Query<'w, 's, (), With<Terrain>>,
    ray_cast: MeshRayCast<'w, 's>,
    gizmos: Gizmos<'w, 's>,
    input: ToolInput<'w>,
    config: Res<'w, WaterPlacerConfig>,
    liquids: Res<'w, LiquidRegistry>,
    hud: ResMut<'w, ToolHudText>,
    queue: ResMut<'w, QueuedLiquidEvents>,
    liquid_events: EventWriter<'w, LiquidEvent>,
    sound_events: EventWriter<'w, PlacementSoundEvent>,
}

impl HostAdapter for ToolHost<'_, '_> {
    fn raycast_terrain(&mut self) -> Option<IVec3> {
        let ray = self.camera_ray()?;
        cast_terrain(
            &mut self.ray_cast,
            &self.terrain_query,
            ray,
            self.config.tool.terrain_reach,
        )
    }

    fn camera_ray(&self) -> Option<Ray3d> {
        let camera_transform = self.camera_query.single().ok()?;
        Some(Ray3d::new(
            camera_transform.translation(),
            camera_transform.forward(),
        ))
    }

    fn just_pressed(&self, action: ToolAction) -> bool {
        self.input.just_pressed(action)
    }

    fn hotkey_label(&self, action: ToolAction) -> String {
        self.input.label(action)
    }

    fn resolve_liquid(&self, identifier: &str) -> Option<LiquidIndex> {
        self.liquids.resolve(identifier)
    }

    fn submit_set_cell_event(&mut self, cell: IVec3, liquid: LiquidIndex) {
        self.liquid_events.write(LiquidEvent::set_cell(cell, liquid));
    }

    fn submit_flood_fill_event(&mut self, cell: IVec3, liquid: LiquidIndex) {
        self.liquid_events.write(LiquidEvent::flood_fill(cell, liquid));
    }

    fn queue_set_cell_event(&mut self, cell: IVec3, liquid: LiquidIndex) {
        self.queue.push(LiquidEvent::set_cell(cell, liquid));
    }

    fn sounds_enabled(&self) -> bool {
        self.config.general.play_sounds
    }

    fn play_placement_sound(&mut self) {
        self.sound_events.write(PlacementSoundEvent);
    }

    fn set_info_text(&mut self, text: &str) {
        if self.hud.info != text {
            self.hud.info = text.to_string();
        }
    }

    fn set_tablet_text(&mut self, title: &str, quick_actions: &str) {
        if self.hud.title != title {
            self.hud.title = title.to_string();
        }
        if self.hud.quick_actions != quick_actions {
            self.hud.quick_actions = quick_actions.to_string();
        }
    }

    fn show_highlight_box(&mut self, highlight: HighlightBox) {
        self.gizmos.cuboid(
            Transform::from_translation(highlight.center).with_scale(highlight.size),
            HIGHLIGHT_COLOR,
        );
    }
}
