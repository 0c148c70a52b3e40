// Library surface for the binary and integration tests.
pub mod app_dirs;
pub mod assets;
pub mod audio;
pub mod config;
pub mod error;
pub mod input;
pub mod quiz;
pub mod report;
pub mod score;
pub mod session;
pub mod words;

pub use error::{QuizError, Result};
