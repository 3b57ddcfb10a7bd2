//! Analysis limits and their sources.

use serde::Deserialize;
use tracing::warn;

/// Environment variable overriding the scan ceiling.
pub const MAX_LINES_ENV: &str = "FCS_MAX_SCAN_LINES";

/// Ceiling on the lines scanned by the symbol table builder and bracket matcher.
pub const DEFAULT_MAX_LINES: usize = 10_000;

/// Limits applied to every analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Lines at or beyond this index are never read.
    pub max_lines: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

/// Client-supplied `initializationOptions`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InitializationOptions {
    max_scan_lines: Option<usize>,
}

impl AnalysisConfig {
    /// Resolves the configuration.
    ///
    /// Checks in order:
    /// 1. Environment variable `FCS_MAX_SCAN_LINES`
    /// 2. `maxScanLines` in the LSP initialization options
    /// 3. The built-in default
    pub fn from_env_or_default(init_options: Option<&serde_json::Value>) -> Self {
        if let Ok(raw) = std::env::var(MAX_LINES_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(max_lines) if max_lines > 0 => return Self { max_lines },
                _ => warn!("Ignoring invalid {} value '{}'", MAX_LINES_ENV, raw),
            }
        }

        Self::from_init_options(init_options)
    }

    /// Resolves the configuration from initialization options alone.
    pub fn from_init_options(init_options: Option<&serde_json::Value>) -> Self {
        let Some(value) = init_options else {
            return Self::default();
        };

        match InitializationOptions::deserialize(value) {
            Ok(InitializationOptions { max_scan_lines: Some(max_lines) }) if max_lines > 0 => {
                Self { max_lines }
            }
            Ok(InitializationOptions { max_scan_lines: Some(_) }) => {
                warn!("Ignoring maxScanLines of 0");
                Self::default()
            }
            Ok(_) => Self::default(),
            Err(e) => {
                warn!("Failed to parse initialization options: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_ceiling() {
        assert_eq!(AnalysisConfig::default().max_lines, 10_000);
        assert_eq!(AnalysisConfig::from_init_options(None), AnalysisConfig::default());
    }

    #[test]
    fn test_init_options_override() {
        let options = json!({ "maxScanLines": 250 });
        assert_eq!(AnalysisConfig::from_init_options(Some(&options)).max_lines, 250);
    }

    #[test]
    fn test_invalid_init_options_fall_back() {
        let zero = json!({ "maxScanLines": 0 });
        assert_eq!(AnalysisConfig::from_init_options(Some(&zero)), AnalysisConfig::default());

        let wrong_type = json!({ "maxScanLines": "lots" });
        assert_eq!(AnalysisConfig::from_init_options(Some(&wrong_type)), AnalysisConfig::default());

        let unrelated = json!({ "theme": "dark" });
        assert_eq!(AnalysisConfig::from_init_options(Some(&unrelated)), AnalysisConfig::default());
    }
}
