//! Commands and messages crossing the audio thread boundary.

use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    LoadSound { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    PlaySound { id: String },
    Shutdown,
}

/// Messages sent *back* from the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    SoundLoaded { id: String },
    SoundLoadFailed { id: String, error: String },
    /// A non-looping track reached its end.
    MusicFinished { id: String },
}
