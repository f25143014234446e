//! Tunables for the viewport-driven state machines

use serde::{Deserialize, Serialize};

/// Default scroll offset past which the navigation bar counts as scrolled
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll classifier configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Offset that must be strictly exceeded to count as scrolled
    pub threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

/// Reveal gate configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction (0.0 - 1.0) that must be strictly exceeded to reveal
    pub min_visible_ratio: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            min_visible_ratio: 0.0,
        }
    }
}

impl RevealConfig {
    /// Whether a reported visible ratio counts as intersecting
    pub fn is_intersecting(&self, ratio: f64) -> bool {
        ratio > self.min_visible_ratio.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ScrollConfig::default().threshold, 50.0);
        assert_eq!(RevealConfig::default().min_visible_ratio, 0.0);
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let scroll: ScrollConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(scroll, ScrollConfig::default());

        let reveal: RevealConfig = serde_json::from_str(r#"{"min_visible_ratio":0.25}"#).unwrap();
        assert_eq!(reveal.min_visible_ratio, 0.25);
    }

    #[test]
    fn test_is_intersecting() {
        let config = RevealConfig::default();
        assert!(!config.is_intersecting(0.0));
        assert!(config.is_intersecting(0.01));

        let half = RevealConfig {
            min_visible_ratio: 0.5,
        };
        assert!(!half.is_intersecting(0.5));
        assert!(half.is_intersecting(0.6));
    }
}
