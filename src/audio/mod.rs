//! Audio feedback: spoken pronunciation and short result clips
//!
//! Synthesis and playback are external services. Everything here reports
//! failures as [`QuizError::Synthesis`] or [`QuizError::Playback`] and leaves
//! it to the caller to carry on without sound.

pub mod player;
pub mod sounds;
pub mod tts;

pub use player::{CommandPlayer, Player};
pub use sounds::Sound;
pub use tts::{EspeakSynthesizer, Synthesizer, TtsCache};

use crate::config::Config;
use crate::error::{QuizError, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Handle to a prepared pronunciation clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pronunciation {
    text: String,
    path: Option<PathBuf>,
}

impl Pronunciation {
    pub fn cached(text: impl Into<String>, path: PathBuf) -> Self {
        Self {
            text: text.into(),
            path: Some(path),
        }
    }

    /// A pronunciation with nothing to play.
    pub fn silent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            path: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Everything the quiz needs from the audio side.
pub trait AudioFeedback {
    /// Make the pronunciation of `text` ready to play, reusing a cached clip.
    fn prepare_pronunciation(&mut self, text: &str) -> Result<Pronunciation>;

    /// Play a prepared pronunciation and block until it finishes.
    fn play_pronunciation(&mut self, clip: &Pronunciation) -> Result<()>;

    /// Play a packaged clip and block until it finishes.
    fn play_sound(&mut self, sound: Sound) -> Result<()>;
}

/// Audio through a synthesizer cache and a blocking player
pub struct SystemAudio<S: Synthesizer, P: Player> {
    cache: TtsCache<S>,
    player: P,
}

impl<S: Synthesizer, P: Player> SystemAudio<S, P> {
    pub fn new(cache: TtsCache<S>, player: P) -> Self {
        Self { cache, player }
    }
}

impl<S: Synthesizer, P: Player> AudioFeedback for SystemAudio<S, P> {
    fn prepare_pronunciation(&mut self, text: &str) -> Result<Pronunciation> {
        let path = self.cache.synthesize_and_cache(text)?;
        Ok(Pronunciation::cached(text, path))
    }

    fn play_pronunciation(&mut self, clip: &Pronunciation) -> Result<()> {
        let Some(path) = clip.path() else {
            return Ok(());
        };
        let bytes = fs::read(path)
            .map_err(|e| QuizError::Playback(format!("cannot read {}: {e}", path.display())))?;
        self.player.play_and_wait(&bytes)
    }

    fn play_sound(&mut self, sound: Sound) -> Result<()> {
        let clip = sound
            .clip()
            .ok_or_else(|| QuizError::Playback(format!("no packaged clip for {sound}")))?;
        self.player.play_and_wait(clip)
    }
}

/// Audio disabled: every call succeeds without making a sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioFeedback for SilentAudio {
    fn prepare_pronunciation(&mut self, text: &str) -> Result<Pronunciation> {
        Ok(Pronunciation::silent(text))
    }

    fn play_pronunciation(&mut self, _clip: &Pronunciation) -> Result<()> {
        Ok(())
    }

    fn play_sound(&mut self, _sound: Sound) -> Result<()> {
        Ok(())
    }
}

/// Build the audio backend selected by the configuration.
pub fn create_audio(config: &Config) -> Box<dyn AudioFeedback> {
    if !config.audio {
        info!("Audio disabled");
        return Box::new(SilentAudio);
    }

    info!(
        "Audio via {} ({}) and {}",
        config.synth_program, config.voice, config.player_program
    );
    let synth = EspeakSynthesizer::new(&config.synth_program, &config.voice);
    let player = CommandPlayer::new(&config.player_program, config.player_args.clone());
    Box::new(SystemAudio::new(TtsCache::new(&config.tts_dir, synth), player))
}
