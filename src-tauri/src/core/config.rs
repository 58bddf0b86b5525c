use std::path::{Path, PathBuf};
use crate::utils::ConfigError;

/// Folder under the user's home directory that receives every resized image.
pub const DESTINATION_FOLDER: &str = "imageresize";

/// Pipeline settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    destination_dir: PathBuf,
}

impl PipelineConfig {
    /// `<home>/imageresize` for the current user.
    pub fn from_home() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
        Ok(Self::with_home(home))
    }

    /// Same layout rooted at an explicit home directory.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            destination_dir: home.into().join(DESTINATION_FOLDER),
        }
    }

    pub fn destination_dir(&self) -> &Path {
        &self.destination_dir
    }
}
