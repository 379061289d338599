#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use anyhow::anyhow;
use kira::manager::{AudioManager, AudioManagerSettings};
use tracing::{debug, info, warn};

use pacman_arcade::audio::{load_sounds, Sound};
use pacman_arcade::bundle::load_assets;
use pacman_arcade::config::AppConfig;
use pacman_arcade::game::state::GameData;
use pacman_arcade::logging::setup_logging;

#[cfg(feature = "device-audio")]
type AudioBackend = kira::manager::backend::cpal::CpalBackend;
#[cfg(not(feature = "device-audio"))]
type AudioBackend = kira::manager::backend::mock::MockBackend;

/// Loads every embedded resource once and reports what was built.
///
/// Any loading failure ends the process with a non-zero status.
fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = AppConfig::load()?;
    debug!(?config, "Loaded configuration");

    let bundle = load_assets()?;
    info!(
        skin_width = bundle.skin.width(),
        skin_height = bundle.skin.height(),
        font = ?bundle.arcade_font,
        "Resource bundle ready"
    );

    let data = GameData::new();
    debug!(lives = data.lives, score = data.score, "Initial game state");

    if config.sounds {
        let mut manager = AudioManager::<AudioBackend>::new(AudioManagerSettings::default())
            .map_err(|e| anyhow!("Failed to create audio context: {e:?}"))?;
        let mut sounds = load_sounds(&mut manager)?;
        info!(beginning = ?sounds.beginning.duration(), "Sound bundle ready");

        if config.plays_intro() {
            sounds.play(Sound::Beginning, &mut manager)?;
            std::thread::sleep(sounds.beginning.duration());
            sounds.stop_all();
        } else if config.intro {
            warn!("No audio device backend (built without `device-audio`); skipping intro");
        }
    }

    info!("All resources loaded");
    Ok(())
}
