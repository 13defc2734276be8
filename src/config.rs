//! Service configuration, fixed at construction time.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analyzer::AnalyzerParams;
use crate::error::Error;

/// Construction-time configuration for a [`crate::LaserService`].
///
/// `units` is a display string only; no unit conversion is performed
/// anywhere.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub units: String,
    /// XZ cell width of the sample store. Sets the spatial resolution.
    pub cell_size: f64,
    pub analyzer: AnalyzerParams,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            units: "meters".to_string(),
            cell_size: 0.02,
            analyzer: AnalyzerParams::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.cell_size > 0.0) || !self.cell_size.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        self.analyzer.validate()
    }
}

/// Loads a [`ServiceConfig`] from a JSON file. Missing fields fall back to
/// their defaults.
pub fn load_config(path: &Path) -> Result<ServiceConfig, Error> {
    let contents = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ServiceConfig =
        serde_json::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::ServiceConfig;

    #[test]
    fn defaults_validate() {
        assert!(ServiceConfig::default().validate().is_ok());
    }

    #[test]
    fn non_positive_cell_size_is_rejected() {
        for cell_size in [0.0, -0.02, f64::NAN] {
            let config = ServiceConfig { cell_size, ..Default::default() };
            assert!(config.validate().is_err(), "cell_size {cell_size} accepted");
        }
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: ServiceConfig = serde_json::from_str(r#"{"cell_size": 0.05}"#).unwrap();
        assert_eq!(config.cell_size, 0.05);
        assert_eq!(config.units, "meters");
        assert_eq!(config.analyzer.min_samples, 5);
    }
}
