//! Liquid placement sounds.
//!
//! The tool only emits [`PlacementSoundEvent`]; one clip is picked at random
//! per event. Actual playback needs the `audio` feature, otherwise the pick
//! is only logged.

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(feature = "audio")]
use crate::constants::PLACEMENT_SOUND_PATHS;

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PlacementSoundEvent;

pub fn pick_clip<'a, T, R: Rng + ?Sized>(clips: &'a [T], rng: &mut R) -> Option<&'a T> {
    clips.choose(rng)
}

pub struct PlacementAudioPlugin;

impl Plugin for PlacementAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlacementSoundEvent>();

        #[cfg(feature = "audio")]
        app.init_resource::<PlacementSounds>()
            .add_systems(Startup, load_placement_sounds)
            .add_systems(Update, play_placement_sounds);

        #[cfg(not(feature = "audio"))]
        app.add_systems(Update, log_placement_sounds);
    }
}

#[cfg(feature = "audio")]
#[derive(Resource, Default)]
pub struct PlacementSounds {
    clips: Vec<Handle<AudioSource>>,
}

#[cfg(feature = "audio")]
fn load_placement_sounds(asset_server: Res<AssetServer>, mut sounds: ResMut<PlacementSounds>) {
    sounds.clips = PLACEMENT_SOUND_PATHS
        .iter()
        .map(|path| asset_server.load(*path))
        .collect();
}

#[cfg(feature = "audio")]
fn play_placement_sounds(
    mut commands: Commands,
    mut events: EventReader<PlacementSoundEvent>,
    sounds: Res<PlacementSounds>,
) {
    let mut rng = rand::thread_rng();
    for _ in events.read() {
        let Some(clip) = pick_clip(&sounds.clips, &mut rng) else {
            warn!("No placement sounds loaded");
            continue;
        };
        commands.spawn((AudioPlayer::new(clip.clone()), PlaybackSettings::DESPAWN));
    }
}

#[cfg(not(feature = "audio"))]
fn log_placement_sounds(mut events: EventReader<PlacementSoundEvent>) {
    let mut rng = rand::thread_rng();
    for _ in events.read() {
        if let Some(path) = pick_clip(&crate::constants::PLACEMENT_SOUND_PATHS, &mut rng) {
            debug!("Placement sound {} (audio feature disabled)", path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pick_clip_only_returns_available_clips() {
        let clips = ["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let clip = pick_clip(&clips, &mut rng).unwrap();
            assert!(clips.contains(clip));
        }

        let empty: [&str; 0] = [];
        assert!(pick_clip(&empty, &mut rng).is_none());
    }
}
