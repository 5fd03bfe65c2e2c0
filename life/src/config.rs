//! Runtime configuration, passed explicitly into the codec and the store.

use std::{path::PathBuf, time::Duration};

/// File suffix of stored boards.
pub const EXTENSION: &str = ".gol";

/// Character written for live cells.
pub const LIVE_MARKER: char = '#';

/// Delay between generations.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

const BOARDS_DIR: &str = "boards";
const FAVOURITES_DIR: &str = "favourites";

/// Paths and tunables for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    /// Directory holding `boards/` and `favourites/`.
    pub data_dir: PathBuf,
    /// Suffix appended to board names.
    pub extension: String,
    /// Character used for live cells when serializing.
    pub live_marker: char,
    /// Sleep between generations.
    pub tick_interval: Duration,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            extension: EXTENSION.to_owned(),
            live_marker: LIVE_MARKER,
            tick_interval: TICK_INTERVAL,
        }
    }
}

impl LifeConfig {
    /// Config rooted at `data_dir`, other fields defaulted.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into(), ..Self::default() }
    }

    /// Directory for regular boards.
    pub fn boards_dir(&self) -> PathBuf {
        self.data_dir.join(BOARDS_DIR)
    }

    /// Directory for favourite boards.
    pub fn favourites_dir(&self) -> PathBuf {
        self.data_dir.join(FAVOURITES_DIR)
    }
}
