//! YAML configuration.
//!
//! Loaded from `.assumptions.yaml` in the working directory unless a path is
//! given explicitly. Every key is optional; command line flags win over the
//! file and the file wins over built-in defaults.
//!
//! ```yaml
//! log_type: assumptions_caveats_log
//! outfile: docs/assumptions_caveats_log.md
//! path: src
//! extension: .py
//! template: docs/log_template.md
//! max_file_bytes: 1048576
//! custom_kinds:
//!   - name: Risk
//!     keywords: [risk]
//!     marker: "{ risks }"
//!     empty_message: No known risks.
//!     style: heading
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LogError;
use crate::items::{CustomKind, ItemStyle};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".assumptions.yaml";

/// Settings read from the config file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Kind-set name
    pub log_type: Option<String>,
    /// Output log path
    pub outfile: Option<PathBuf>,
    /// Search root
    pub path: Option<PathBuf>,
    /// File name suffix filter
    pub extension: Option<String>,
    /// Template override
    pub template: Option<PathBuf>,
    /// Size limit for scanned files
    pub max_file_bytes: Option<u64>,
    /// Extra kinds registered after the kind-set's built-ins
    #[serde(default)]
    pub custom_kinds: Vec<CustomKindConfig>,
}

/// Config entry describing a [`CustomKind`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CustomKindConfig {
    /// Kind name used in headings
    pub name: String,
    /// Header keywords
    pub keywords: Vec<String>,
    /// Template marker
    pub marker: String,
    /// Empty-state message
    pub empty_message: Option<String>,
    /// Rendering style
    #[serde(default)]
    pub style: ItemStyle,
}

impl CustomKindConfig {
    /// Build the kind this entry describes.
    ///
    /// # Errors
    /// See [`CustomKind::new`].
    pub fn build(&self) -> Result<CustomKind, LogError> {
        let keywords: Vec<&str> = self.keywords.iter().map(String::as_str).collect();
        let kind = CustomKind::new(self.name.clone(), &keywords, self.marker.clone(), self.style)?;
        Ok(match &self.empty_message {
            Some(message) => kind.with_empty_message(message.clone()),
            None => kind,
        })
    }
}

impl LogConfig {
    /// Parse YAML text. `origin` is only used in error messages.
    ///
    /// # Errors
    /// Returns `LogError::Config` for invalid YAML or unknown keys.
    pub fn from_yaml_str(text: &str, origin: &Path) -> Result<Self, LogError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| LogError::Config {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load an explicitly named config file.
    ///
    /// # Errors
    /// Returns `LogError::Config` when the file is missing or invalid.
    pub fn load(path: &Path) -> Result<Self, LogError> {
        let text = assumptions_io::read_text(path).map_err(|e| LogError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = Self::from_yaml_str(&text, path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load [`CONFIG_FILE_NAME`] from `dir` if it exists.
    ///
    /// # Errors
    /// Returns `LogError::Config` when the file exists but is invalid.
    pub fn load_default(dir: &Path) -> Result<Self, LogError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let text = r#"
log_type: todo_list
outfile: docs/todo.md
extension: py
custom_kinds:
  - name: Fixme
    keywords: [fixme]
    marker: "{ fixmes }"
    style: checklist
"#;
        let config = LogConfig::from_yaml_str(text, Path::new("test.yaml")).unwrap();
        assert_eq!(config.log_type.as_deref(), Some("todo_list"));
        assert_eq!(config.outfile, Some(PathBuf::from("docs/todo.md")));
        assert_eq!(config.custom_kinds.len(), 1);
        assert_eq!(config.custom_kinds[0].style, ItemStyle::Checklist);
        assert!(config.custom_kinds[0].build().is_ok());
    }

    #[test]
    fn test_empty_config() {
        let config = LogConfig::from_yaml_str("\n", Path::new("empty.yaml")).unwrap();
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = LogConfig::from_yaml_str("outfil: typo.md\n", Path::new("bad.yaml"));
        assert!(matches!(result, Err(LogError::Config { .. })));
    }

    #[test]
    fn test_missing_explicit_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing.yaml");
        let result = LogConfig::load(&path);
        assert!(matches!(result, Err(LogError::Config { path: p, .. }) if p == path));
    }

    #[test]
    fn test_default_config_absent() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(LogConfig::load_default(dir.path()).unwrap(), LogConfig::default());
    }
}
