//! Background audio thread and its bridge systems.
//!
//! [`audio_thread`] runs on its own OS thread, owns the raylib audio
//! device, and reacts to [`AudioCmd`] messages, emitting [`AudioMessage`]
//! responses. All file I/O and playback control happen there; the main
//! thread communicates exclusively through lock-free channels, so the
//! bootstrap core never blocks on audio decode.
//!
//! Music streaming needs periodic `update_stream()` calls; the thread loop
//! takes care of that while tracks are playing.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{
    IntoScheduleConfigs, MessageReader, MessageWriter, Messages, Mut, Res, ResMut, Resource,
    Schedule, World,
};
use crossbeam_channel::{Receiver, Sender};
use log::{error, info, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::Duration;

/// The chained audio bridge systems, run once per running frame.
///
/// Stored as a resource so the lifecycle driver can run it against the
/// world without owning schedule state itself.
#[derive(Resource)]
pub struct AudioSchedule(pub Schedule);

/// Build the bridge schedule. Ordering matters: commands written by
/// modules must become readable and reach the audio thread before this
/// frame's messages are pulled back.
pub fn build_audio_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            update_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_audio_messages,
            log_audio_failures,
        )
            .chain(),
    );
    schedule
}

/// Run the audio bridge schedule against the world.
///
/// A world without the audio subsystem (headless tests) is left alone.
pub fn pump_audio(world: &mut World) {
    if world.contains_resource::<AudioSchedule>() {
        world.resource_scope(|world, mut schedule: Mut<AudioSchedule>| {
            schedule.0.run(world);
        });
    }
}

/// Drain pending audio-thread messages into the ECS mailbox.
///
/// Non-blocking; run once per frame on the main thread.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

/// Forward ECS [`AudioCmd`] messages to the audio thread.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Send errors only happen during shutdown; nothing to do then.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`].
pub fn update_audio_cmds(mut messages: ResMut<Messages<AudioCmd>>) {
    messages.update();
}

/// Surface audio load failures reported by the audio thread.
pub fn log_audio_failures(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicLoadFailed { id, error } => {
                warn!("audio: music '{}' unavailable: {}", id, error);
            }
            AudioMessage::SoundLoadFailed { id, error } => {
                warn!("audio: sound '{}' unavailable: {}", id, error);
            }
            _ => {}
        }
    }
}

/// Entry point of the dedicated audio thread.
///
/// Initializes the raylib audio device once, owns every `Music` and
/// `Sound` handle for the life of the thread, and loops draining commands,
/// pumping music streams, and reporting finished tracks. Blocks until
/// [`AudioCmd::Shutdown`] arrives, then unloads everything and exits.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match raylib::core::audio::RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("audio device init failed: {}", e);
            return;
        }
    };

    let mut musics: FxHashMap<String, raylib::core::audio::Music> = FxHashMap::default();
    let mut sounds: FxHashMap<String, raylib::core::audio::Sound> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();

    'run: loop {
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        info!("audio: loaded music '{}' from '{}'", id, path);
                        musics.insert(id.clone(), music);
                        let _ = tx_msg.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        error!("audio: music '{}' load failed: {}", id, e);
                        let _ = tx_msg.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::LoadSound { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        info!("audio: loaded sound '{}' from '{}'", id, path);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_msg.send(AudioMessage::SoundLoaded { id });
                    }
                    Err(e) => {
                        error!("audio: sound '{}' load failed: {}", id, e);
                        let _ = tx_msg.send(AudioMessage::SoundLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayMusic { id, looped: does_loop } => {
                    if let Some(music) = musics.get_mut(&id) {
                        music.play_stream();
                        playing.insert(id.clone());
                        if does_loop {
                            looped.insert(id);
                        } else {
                            looped.remove(&id);
                        }
                    }
                }
                AudioCmd::StopMusic { id } => {
                    if let Some(music) = musics.get_mut(&id) {
                        music.stop_stream();
                        playing.remove(&id);
                    }
                }
                AudioCmd::PlaySound { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        sound.play();
                    }
                }
                AudioCmd::Shutdown => break 'run,
            }
        }

        // Pump streams for playing tracks and notice finished ones.
        let mut finished: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get_mut(id) {
                music.update_stream();
                if !music.is_stream_playing() {
                    if looped.contains(id) {
                        music.seek_stream(0.0);
                        music.play_stream();
                    } else {
                        finished.push(id.clone());
                    }
                }
            }
        }
        for id in finished {
            playing.remove(&id);
            let _ = tx_msg.send(AudioMessage::MusicFinished { id });
        }

        std::thread::sleep(Duration::from_millis(4));
    }

    info!("audio: thread shutting down");
    // Handles are unloaded when the maps drop, before the device does.
    drop(playing);
    drop(sounds);
    drop(musics);
}
