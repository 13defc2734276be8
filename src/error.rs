use std::path::PathBuf;

/// Errors surfaced at the service boundary.
///
/// All failures are synchronous refusals: a rejected call never leaves the
/// store partially mutated.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A construction-time parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A sample contained a NaN or infinite component.
    #[error("non-finite sample ({x}, {y}, {z}, distance={distance})")]
    NonFiniteSample { x: f64, y: f64, z: f64, distance: f64 },

    /// A configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
