//! Typed editor configuration

use serde::{Deserialize, Serialize};

use crate::io::NewlineMode;

/// Editor preferences
///
/// Typed, with baked-in defaults: no config files, no environment
/// variables. Hosts construct one and hand it to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Spaces inserted per Tab key
    pub tab_width: usize,
    /// Rows the viewport shows
    pub viewport_lines: usize,
    /// Display clamp for a single rendered line
    pub max_line_chars: usize,
    /// Newline convention applied on save
    pub newline_mode: NewlineMode,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: 4,
            viewport_lines: 20,
            max_line_chars: 256,
            newline_mode: NewlineMode::native(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.tab_width, 4);
        assert_eq!(config.viewport_lines, 20);
        assert_eq!(config.max_line_chars, 256);
        assert_eq!(config.newline_mode, NewlineMode::native());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = EditorConfig {
            tab_width: 2,
            viewport_lines: 10,
            max_line_chars: 120,
            newline_mode: NewlineMode::CrLf,
        };
        let json = serde_json::to_string(&config).unwrap();
        let decoded: EditorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, decoded);
    }
}
