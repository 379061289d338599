//! This module handles the sound clips of the game.
//!
//! Clips are decoded fully into memory and bound to a caller-owned audio context
//! ([`AudioManager`]). Each clip gets its own sub-track on that context, so every stream
//! can be played, rewound and stopped without touching the others.

use std::borrow::Cow;
use std::io::Cursor;
use std::time::Duration;

use kira::manager::{backend::Backend, AudioManager};
use kira::sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings};
use kira::sound::PlaybackState;
use kira::track::{TrackBuilder, TrackHandle};
use kira::tween::Tween;
use strum_macros::{Display, EnumIter, IntoStaticStr};
use tracing::{debug, info, trace};

use crate::asset::{Asset, AssetSource, EmbeddedAssets};
use crate::error::{AssetError, AudioError, DecodeError, GameResult, ResultExt};

/// The sound clips, in loading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Sound {
    /// Intro jingle played when a game starts.
    Beginning,
    /// Eating loop while Pac-Man munches dots.
    Chomp,
    Death,
    /// Pac-Man picked up a power flask.
    EatFlask,
    EatGhost,
    /// An extra life was earned.
    ExtraPac,
}

impl Sound {
    /// Whether the clip repeats until stopped.
    pub fn loops(self) -> bool {
        matches!(self, Sound::Chomp)
    }
}

/// One decoded clip bound to an audio context.
pub struct SoundStream {
    sound: Sound,
    data: StaticSoundData,
    track: TrackHandle,
    instance: Option<StaticSoundHandle>,
}

impl SoundStream {
    /// Decodes a whole clip into memory.
    pub fn decode(sound: Sound, bytes: Cow<'static, [u8]>) -> Result<StaticSoundData, AssetError> {
        StaticSoundData::from_cursor(Cursor::new(bytes))
            .map_err(|e| DecodeError::Sound(e.to_string()))
            .for_asset(Asset::SoundFile(sound))
    }

    /// Registers the clip with the audio context by giving it a sub-track of its own.
    pub fn bind<B: Backend>(sound: Sound, data: StaticSoundData, manager: &mut AudioManager<B>) -> Result<Self, AudioError> {
        let track = manager
            .add_sub_track(TrackBuilder::new())
            .map_err(|e| AudioError::ContextBinding {
                sound,
                reason: e.to_string(),
            })?;
        trace!(%sound, "Bound sound to audio context");
        Ok(Self {
            sound,
            data,
            track,
            instance: None,
        })
    }

    pub fn sound(&self) -> Sound {
        self.sound
    }

    pub fn duration(&self) -> Duration {
        self.data.duration()
    }

    /// Plays the clip from its start, cutting off any instance this stream already started.
    pub fn play<B: Backend>(&mut self, manager: &mut AudioManager<B>) -> Result<(), AudioError> {
        self.stop();

        let mut settings = StaticSoundSettings::new().output_destination(&self.track);
        if self.sound.loops() {
            settings = settings.loop_region(0.0..);
        }

        let handle = manager
            .play(self.data.clone().with_settings(settings))
            .map_err(|e| AudioError::Playback {
                sound: self.sound,
                reason: format!("{e:?}"),
            })?;
        trace!(sound = %self.sound, "Playing sound");
        self.instance = Some(handle);
        Ok(())
    }

    /// Seeks the current instance back to the start. Does nothing if the stream was never played.
    pub fn rewind(&mut self) {
        if let Some(handle) = self.instance.as_mut() {
            handle.seek_to(0.0);
        }
    }

    pub fn stop(&mut self) {
        if let Some(mut handle) = self.instance.take() {
            handle.stop(Tween::default());
        }
    }

    pub fn is_playing(&self) -> bool {
        self.instance
            .as_ref()
            .is_some_and(|handle| !matches!(handle.state(), PlaybackState::Stopping | PlaybackState::Stopped))
    }

    /// Playback position of the current instance in seconds, zero when not started.
    pub fn position(&self) -> f64 {
        self.instance.as_ref().map_or(0.0, |handle| handle.position())
    }
}

/// All six clips, each bound to the same audio context.
pub struct SoundBundle {
    pub beginning: SoundStream,
    pub chomp: SoundStream,
    pub death: SoundStream,
    pub eat_flask: SoundStream,
    pub eat_ghost: SoundStream,
    pub extra_pac: SoundStream,
}

impl SoundBundle {
    pub fn get(&self, sound: Sound) -> &SoundStream {
        match sound {
            Sound::Beginning => &self.beginning,
            Sound::Chomp => &self.chomp,
            Sound::Death => &self.death,
            Sound::EatFlask => &self.eat_flask,
            Sound::EatGhost => &self.eat_ghost,
            Sound::ExtraPac => &self.extra_pac,
        }
    }

    pub fn get_mut(&mut self, sound: Sound) -> &mut SoundStream {
        match sound {
            Sound::Beginning => &mut self.beginning,
            Sound::Chomp => &mut self.chomp,
            Sound::Death => &mut self.death,
            Sound::EatFlask => &mut self.eat_flask,
            Sound::EatGhost => &mut self.eat_ghost,
            Sound::ExtraPac => &mut self.extra_pac,
        }
    }

    /// Plays one clip from its start.
    pub fn play<B: Backend>(&mut self, sound: Sound, manager: &mut AudioManager<B>) -> Result<(), AudioError> {
        self.get_mut(sound).play(manager)
    }

    /// Halts every clip this bundle started.
    pub fn stop_all(&mut self) {
        for stream in [
            &mut self.beginning,
            &mut self.chomp,
            &mut self.death,
            &mut self.eat_flask,
            &mut self.eat_ghost,
            &mut self.extra_pac,
        ] {
            stream.stop();
        }
    }
}

/// Decodes the embedded sound clips and binds them to `manager`.
///
/// # Errors
///
/// Returns the first decode or binding failure; no partial bundle is ever produced.
pub fn load_sounds<B: Backend>(manager: &mut AudioManager<B>) -> GameResult<SoundBundle> {
    load_sounds_from(&EmbeddedAssets, manager)
}

/// Like [`load_sounds`], reading the clips from `source`.
pub fn load_sounds_from<B: Backend>(source: &impl AssetSource, manager: &mut AudioManager<B>) -> GameResult<SoundBundle> {
    info!("Loading sounds");

    let mut load = |sound: Sound| -> GameResult<SoundStream> {
        debug!(%sound, "Decoding sound");
        let bytes = source.get_bytes(Asset::SoundFile(sound))?;
        let data = SoundStream::decode(sound, bytes)?;
        Ok(SoundStream::bind(sound, data, manager)?)
    };

    let bundle = SoundBundle {
        beginning: load(Sound::Beginning)?,
        chomp: load(Sound::Chomp)?,
        death: load(Sound::Death)?,
        eat_flask: load(Sound::EatFlask)?,
        eat_ghost: load(Sound::EatGhost)?,
        extra_pac: load(Sound::ExtraPac)?,
    };

    info!("Sounds loaded");
    Ok(bundle)
}
