use crate::app_dirs::AppDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_REPORT_PATH: &str = "wrong-answers-report.txt";
pub const DEFAULT_TTS_DIR: &str = "tts";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub audio: bool,
    pub show_hints: bool,
    pub voice: String,
    pub synth_program: String,
    pub player_program: String,
    pub player_args: Vec<String>,
    pub tts_dir: PathBuf,
    pub report_path: PathBuf,
    pub affirmative: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            audio: true,
            show_hints: true,
            voice: "en-us".to_string(),
            synth_program: "espeak-ng".to_string(),
            player_program: "aplay".to_string(),
            player_args: vec!["-q".to_string(), "-".to_string()],
            tts_dir: PathBuf::from(DEFAULT_TTS_DIR),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            affirmative: vec!["y".to_string(), "yes".to_string()],
        }
    }
}

impl Config {
    /// Whether a confirmation reply accepts the answer.
    pub fn is_affirmative(&self, reply: &str) -> bool {
        let reply = reply.trim();
        self.affirmative
            .iter()
            .any(|token| token.eq_ignore_ascii_case(reply))
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("vocab-quiz.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            debug!("No config at {}, using defaults", self.path.display());
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Ignoring unreadable config {}: {}", self.path.display(), e);
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}
