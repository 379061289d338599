use figment::{providers::Env, Figment};
use serde::Deserialize;

/// Launcher settings, read from `PACMAN_*` environment variables.
///
/// These only steer the binary. The loaders themselves take no configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Decode and bind the sound clips (`PACMAN_SOUNDS`).
    #[serde(default = "default_sounds")]
    pub sounds: bool,
    /// Play the intro jingle once the sounds are loaded (`PACMAN_INTRO`).
    #[serde(default)]
    pub intro: bool,
}

fn default_sounds() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sounds: default_sounds(),
            intro: false,
        }
    }
}

impl AppConfig {
    pub fn figment() -> Figment {
        Figment::new().merge(Env::prefixed("PACMAN_"))
    }

    /// Whether the intro jingle should actually be played.
    ///
    /// Without the `device-audio` feature the sounds are bound to a silent backend, so the
    /// intro is skipped rather than waited out.
    pub fn plays_intro(&self) -> bool {
        self.sounds && self.intro && cfg!(feature = "device-audio")
    }

    /// Reads the configuration from the environment.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
