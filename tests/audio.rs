use std::time::Duration;

use kira::manager::backend::mock::MockBackend;
use kira::manager::{AudioManager, AudioManagerSettings, Capacities};
use pacman_arcade::asset::Asset;
use pacman_arcade::audio::{load_sounds, load_sounds_from, Sound, SoundStream};
use pacman_arcade::error::{AssetError, AudioError, DecodeError, GameError};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use strum::IntoEnumIterator;

mod common;

use common::PatchedAssets;

fn mock_manager() -> AudioManager<MockBackend> {
    AudioManager::new(AudioManagerSettings::default()).unwrap()
}

/// A mock context rendering 100 frames per second of playback.
fn clocked_manager() -> AudioManager<MockBackend> {
    let mut manager = mock_manager();
    manager.backend_mut().set_sample_rate(100);
    manager
}

/// Renders `frames` frames. Handle positions trail the renderer by one frame.
fn advance(manager: &mut AudioManager<MockBackend>, frames: usize) {
    let backend = manager.backend_mut();
    backend.on_start_processing();
    for _ in 0..frames {
        backend.process();
    }
}

#[test]
fn test_load_sounds_binds_all_six() {
    let mut manager = mock_manager();
    let sounds = load_sounds(&mut manager).unwrap();

    for sound in Sound::iter() {
        let stream = sounds.get(sound);
        assert_eq!(stream.sound(), sound);
        assert_that(&stream.duration()).is_greater_than(Duration::ZERO);
        assert_that(&stream.is_playing()).is_false();
        assert_eq!(stream.position(), 0.0);
    }
}

#[test]
fn test_longer_clip_has_longer_duration() {
    let mut manager = mock_manager();
    let sounds = load_sounds(&mut manager).unwrap();

    assert_that(&sounds.beginning.duration()).is_greater_than(sounds.chomp.duration());
}

#[test]
fn test_streams_play_independently() {
    let mut manager = mock_manager();
    let mut sounds = load_sounds(&mut manager).unwrap();

    sounds.play(Sound::Beginning, &mut manager).unwrap();
    sounds.play(Sound::Chomp, &mut manager).unwrap();
    sounds.play(Sound::EatGhost, &mut manager).unwrap();

    assert_that(&sounds.beginning.is_playing()).is_true();
    assert_that(&sounds.chomp.is_playing()).is_true();
    assert_that(&sounds.eat_ghost.is_playing()).is_true();
    assert_that(&sounds.death.is_playing()).is_false();

    sounds.chomp.stop();
    assert_that(&sounds.chomp.is_playing()).is_false();
    assert_that(&sounds.beginning.is_playing()).is_true();
    assert_that(&sounds.eat_ghost.is_playing()).is_true();
}

#[test]
fn test_playing_one_stream_keeps_another_position() {
    let mut manager = clocked_manager();
    let mut sounds = load_sounds(&mut manager).unwrap();

    sounds.play(Sound::Beginning, &mut manager).unwrap();
    advance(&mut manager, 100);
    let before = sounds.beginning.position();
    assert_that(&before).is_greater_than(0.5);

    sounds.play(Sound::Death, &mut manager).unwrap();
    advance(&mut manager, 50);
    let after = sounds.beginning.position();
    let death = sounds.death.position();

    assert_that(&after).is_greater_than(before + 0.3);
    assert_that(&death).is_less_than(0.6);
    assert_that(&death).is_less_than(before);
    assert_that(&sounds.beginning.is_playing()).is_true();
    assert_that(&sounds.death.is_playing()).is_true();
}

#[test]
fn test_rewind_seeks_back_to_start() {
    let mut manager = clocked_manager();
    let mut sounds = load_sounds(&mut manager).unwrap();

    sounds.play(Sound::Death, &mut manager).unwrap();
    advance(&mut manager, 100);
    let played = sounds.death.position();
    assert_that(&played).is_greater_than(0.5);

    sounds.death.rewind();
    advance(&mut manager, 10);

    assert_that(&sounds.death.position()).is_less_than(0.3);
    assert_that(&sounds.death.is_playing()).is_true();
}

#[test]
fn test_replay_restarts_from_start() {
    let mut manager = clocked_manager();
    let mut sounds = load_sounds(&mut manager).unwrap();

    sounds.play(Sound::Beginning, &mut manager).unwrap();
    advance(&mut manager, 100);
    assert_that(&sounds.beginning.position()).is_greater_than(0.5);

    sounds.play(Sound::Beginning, &mut manager).unwrap();
    advance(&mut manager, 10);

    assert_that(&sounds.beginning.position()).is_less_than(0.3);
    assert_that(&sounds.beginning.is_playing()).is_true();

    advance(&mut manager, 100);
    assert_that(&sounds.beginning.position()).is_greater_than(0.5);
}

#[test]
fn test_rewind_and_stop_without_playing() {
    let mut manager = mock_manager();
    let mut sounds = load_sounds(&mut manager).unwrap();

    sounds.extra_pac.rewind();
    sounds.extra_pac.stop();

    assert_that(&sounds.extra_pac.is_playing()).is_false();
}

#[test]
fn test_stop_all() {
    let mut manager = mock_manager();
    let mut sounds = load_sounds(&mut manager).unwrap();

    for sound in Sound::iter() {
        sounds.play(sound, &mut manager).unwrap();
    }
    sounds.stop_all();

    for sound in Sound::iter() {
        assert_that(&sounds.get(sound).is_playing()).is_false();
    }
}

#[test]
fn test_only_chomp_loops() {
    let looping: Vec<_> = Sound::iter().filter(|sound| sound.loops()).collect();

    assert_eq!(looping, vec![Sound::Chomp]);
}

#[test]
fn test_corrupted_sound_yields_no_bundle() {
    let mut manager = mock_manager();
    let source = PatchedAssets::new().with(Asset::SoundFile(Sound::Death), b"not an mp3 at all".to_vec());

    match load_sounds_from(&source, &mut manager) {
        Err(GameError::Asset(AssetError::Decode {
            asset,
            source: DecodeError::Sound(_),
        })) => assert_eq!(asset, Asset::SoundFile(Sound::Death)),
        Err(other) => panic!("unexpected error {other:?}"),
        Ok(_) => panic!("corrupted sound produced a bundle"),
    }
}

#[test]
fn test_missing_sound_is_not_found() {
    let mut manager = mock_manager();
    let source = PatchedAssets::new().without(Asset::SoundFile(Sound::ExtraPac));

    match load_sounds_from(&source, &mut manager) {
        Err(GameError::Asset(AssetError::NotFound(path))) => assert_eq!(path, "sound/extra_pac.mp3"),
        Err(other) => panic!("unexpected error {other:?}"),
        Ok(_) => panic!("missing sound produced a bundle"),
    }
}

#[test]
fn test_full_context_fails_to_bind() {
    let mut manager = AudioManager::<MockBackend>::new(AudioManagerSettings {
        capacities: Capacities {
            sub_track_capacity: 2,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();

    match load_sounds(&mut manager) {
        Err(GameError::Audio(AudioError::ContextBinding { .. })) => {}
        Err(other) => panic!("unexpected error {other:?}"),
        Ok(_) => panic!("bound six sounds to a context with room for two"),
    }
}

#[test]
fn test_decode_embedded_clip() {
    let bytes = Asset::SoundFile(Sound::Chomp).get_bytes().unwrap();
    let data = SoundStream::decode(Sound::Chomp, bytes).unwrap();

    assert_that(&data.duration()).is_greater_than(Duration::ZERO);
}
