//! Scope configuration.
//!
//! A small static set of color strings plus the inset margin. Keys are
//! camelCase so existing configurations can be reused as-is:
//!
//! ```yaml
//! canvasBackground: "#fff"
//! vectorscopeBkg: "#333"
//! vectorscopeLines: "#fdb44e"
//! vectorscopeAxes: "#fdb44e"
//! buffer: 10
//! ```
//!
//! Missing keys fall back to [`ScopeConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlotError, PlotResult};
use crate::vectorscope::DEFAULT_BUFFER;

/// Colors and margin used by the vectorscope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScopeConfig {
    /// Page/canvas background outside the scope.
    pub canvas_background: String,
    /// Scope background, used by [`crate::Vectorscope::clear`].
    pub vectorscope_bkg: String,
    /// Bounding circle stroke color.
    pub vectorscope_lines: String,
    /// Axis stroke color.
    pub vectorscope_axes: String,
    /// Inset in pixels between the surface edge and the disc/axes.
    pub buffer: u32,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            canvas_background: "#fff".to_string(),
            vectorscope_bkg: "#333".to_string(),
            vectorscope_lines: "#fdb44e".to_string(),
            vectorscope_axes: "#fdb44e".to_string(),
            buffer: DEFAULT_BUFFER,
        }
    }
}

impl ScopeConfig {
    /// Loads configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> PlotResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PlotError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading scope config");
        Self::from_yaml_str(&content)
    }

    /// Loads configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> PlotResult<Self> {
        let config: ScopeConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serializes to YAML.
    pub fn to_yaml(&self) -> PlotResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let c = ScopeConfig::default();
        assert_eq!(c.canvas_background, "#fff");
        assert_eq!(c.vectorscope_bkg, "#333");
        assert_eq!(c.vectorscope_lines, "#fdb44e");
        assert_eq!(c.vectorscope_axes, "#fdb44e");
        assert_eq!(c.buffer, 10);
    }

    #[test]
    fn test_partial_yaml() {
        let c = ScopeConfig::from_yaml_str("vectorscopeAxes: \"#00ff00\"\nbuffer: 4\n").unwrap();
        assert_eq!(c.vectorscope_axes, "#00ff00");
        assert_eq!(c.buffer, 4);
        assert_eq!(c.vectorscope_lines, "#fdb44e");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let c = ScopeConfig {
            vectorscope_bkg: "#101010".into(),
            ..Default::default()
        };
        let yaml = c.to_yaml().unwrap();
        assert!(yaml.contains("vectorscopeBkg"));
        assert_eq!(ScopeConfig::from_yaml_str(&yaml).unwrap(), c);
    }

    #[test]
    fn test_bad_yaml() {
        assert!(matches!(
            ScopeConfig::from_yaml_str("buffer: [1, 2"),
            Err(PlotError::Yaml(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "vectorscopeLines: \"rgb(255, 0, 0)\"").unwrap();
        let c = ScopeConfig::from_file(file.path()).unwrap();
        assert_eq!(c.vectorscope_lines, "rgb(255, 0, 0)");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScopeConfig::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, PlotError::ConfigNotFound { .. }));
    }
}
