use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors surfaced while loading assets, building prototypes, or parsing maps.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A required sprite or tile bitmap is missing or cannot be decoded.
    /// Fatal during construction, since the game cannot run without its prototypes.
    #[error("asset not found or unreadable: {path}")]
    AssetNotFound {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The requested map file does not exist. `load_next` turns this into
    /// its wrap-around / empty-game convention instead of surfacing it.
    #[error("map file not found: {path}")]
    MapNotFound { path: PathBuf },

    /// The map file exists but could not be read as text.
    #[error("failed to read map file: {path}")]
    MapUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An animation frame was given a non-positive duration.
    #[error("animation frame duration must be positive (got {duration:?})")]
    MalformedFrame { duration: Duration },
}
