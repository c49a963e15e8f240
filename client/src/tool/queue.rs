use std::collections::VecDeque;

use bevy::prelude::*;
use shared::LiquidEvent;

use crate::config::WaterPlacerConfig;

/// Liquid events waiting to be handed to the lockstep queue.
///
/// Large box commits land here and are released a few per frame, in the order
/// they were queued.
#[derive(Resource, Debug, Default)]
pub struct QueuedLiquidEvents(VecDeque<LiquidEvent>);

impl QueuedLiquidEvents {
    pub fn push(&mut self, event: LiquidEvent) {
        self.0.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn dispatch_queued_liquid_events(
    mut queue: ResMut<QueuedLiquidEvents>,
    config: Res<WaterPlacerConfig>,
    mut liquid_events: EventWriter<LiquidEvent>,
) {
    if queue.is_empty() {
        return;
    }

    let budget = config.tool.queued_events_per_frame.max(1).min(queue.len());
    for event in queue.0.drain(..budget) {
        liquid_events.write(event);
    }
    log::trace!(
        "Dispatched {} queued liquid events, {} remaining",
        budget,
        queue.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::event::Events;
    use shared::LiquidIndex;

    fn drained(app: &mut App) -> Vec<LiquidEvent> {
        let mut events = app.world_mut().resource_mut::<Events<LiquidEvent>>();
        events.drain().collect()
    }

    #[test]
    fn queue_drains_in_order_at_configured_rate() {
        let mut config = WaterPlacerConfig::default();
        config.tool.queued_events_per_frame = 4;

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(config)
            .init_resource::<QueuedLiquidEvents>()
            .add_event::<LiquidEvent>()
            .add_systems(Update, dispatch_queued_liquid_events);

        let queued: Vec<LiquidEvent> = (0..10)
            .map(|x| LiquidEvent::set_cell(IVec3::new(x, 7, 0), LiquidIndex(0)))
            .collect();
        {
            let mut queue = app.world_mut().resource_mut::<QueuedLiquidEvents>();
            for event in &queued {
                queue.push(*event);
            }
        }

        let mut delivered = Vec::new();
        for expected_batch in [4, 4, 2, 0] {
            app.update();
            let batch = drained(&mut app);
            assert_eq!(batch.len(), expected_batch);
            delivered.extend(batch);
        }

        assert_eq!(delivered, queued);
        assert!(app.world().resource::<QueuedLiquidEvents>().is_empty());
    }
}
