//! Strip configuration.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::error::ConfigError;
use crate::transitions::{Easing, TransitionConfig};

/// Tunables for a [`NavStrip`](crate::NavStrip).
///
/// Every field has a default, so a JSON document only needs the keys it
/// overrides:
///
/// ```
/// let config = navstrip::StripConfig::from_json(r#"{ "item_gap": 16 }"#).unwrap();
/// assert_eq!(config.item_gap, 16.0);
/// assert_eq!(config.drag_sensitivity, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StripConfig {
    /// Multiplier applied to pointer drag distance. Touch drags are 1:1.
    pub drag_sensitivity: f32,

    /// Slack in pixels when deciding whether the region is at either end.
    pub edge_tolerance: f32,

    /// Gap between items, added to the first item's width for the minimum page.
    pub item_gap: f32,

    /// Share of the viewport scrolled by one page.
    pub page_fraction: f32,

    /// Page amount used when the strip has no items.
    pub fallback_page: f32,

    #[serde(rename = "resize_debounce_ms", deserialize_with = "millis")]
    pub resize_debounce: Duration,

    /// Quiet period after the last scroll before `is_scrolling` clears.
    #[serde(rename = "scroll_settle_ms", deserialize_with = "millis")]
    pub scroll_settle: Duration,

    /// Delay before centering the active item on auto-scroll strips.
    #[serde(rename = "auto_scroll_delay_ms", deserialize_with = "millis")]
    pub auto_scroll_delay: Duration,

    #[serde(rename = "smooth_scroll_ms", deserialize_with = "millis")]
    pub smooth_duration: Duration,

    pub easing: Easing,
}

impl Default for StripConfig {
    fn default() -> Self {
        let smooth = TransitionConfig::default();
        Self {
            drag_sensitivity: 2.0,
            edge_tolerance: 1.0,
            item_gap: 12.0,
            page_fraction: 0.8,
            fallback_page: 120.0,
            resize_debounce: Duration::from_millis(150),
            scroll_settle: Duration::from_millis(150),
            auto_scroll_delay: Duration::from_millis(100),
            smooth_duration: smooth.duration,
            easing: smooth.easing,
        }
    }
}

impl StripConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every numeric field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check("drag_sensitivity", "positive", self.drag_sensitivity, |v| v > 0.0)?;
        check("edge_tolerance", "non-negative", self.edge_tolerance, |v| v >= 0.0)?;
        check("item_gap", "non-negative", self.item_gap, |v| v >= 0.0)?;
        check("page_fraction", "in (0, 1]", self.page_fraction, |v| {
            v > 0.0 && v <= 1.0
        })?;
        check("fallback_page", "positive", self.fallback_page, |v| v > 0.0)?;
        Ok(())
    }

    /// Animation used for arrow, keyboard and programmatic scrolls.
    pub fn transition(&self) -> TransitionConfig {
        TransitionConfig::new(self.smooth_duration, self.easing)
    }

    pub fn drag_sensitivity(mut self, sensitivity: f32) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    pub fn item_gap(mut self, gap: f32) -> Self {
        self.item_gap = gap;
        self
    }

    pub fn smooth(mut self, duration: Duration, easing: Easing) -> Self {
        self.smooth_duration = duration;
        self.easing = easing;
        self
    }

    /// Complete every scroll on the next tick (reduced motion).
    pub fn reduced_motion(self) -> Self {
        self.smooth(Duration::ZERO, Easing::Linear)
    }
}

fn check(
    field: &'static str,
    expected: &'static str,
    value: f32,
    ok: impl Fn(f32) -> bool,
) -> Result<(), ConfigError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected,
            value,
        })
    }
}

fn millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_markup_behavior() {
        let config = StripConfig::default();
        assert_eq!(config.drag_sensitivity, 2.0);
        assert_eq!(config.edge_tolerance, 1.0);
        assert_eq!(config.item_gap, 12.0);
        assert_eq!(config.fallback_page, 120.0);
        assert_eq!(config.resize_debounce, Duration::from_millis(150));
        assert_eq!(config.scroll_settle, Duration::from_millis(150));
        assert_eq!(config.auto_scroll_delay, Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_overrides() {
        let config = StripConfig::from_json(
            r#"{ "resize_debounce_ms": 50, "easing": "ease-out", "page_fraction": 0.5 }"#,
        )
        .unwrap();
        assert_eq!(config.resize_debounce, Duration::from_millis(50));
        assert_eq!(config.easing, Easing::EaseOut);
        assert_eq!(config.page_fraction, 0.5);
        assert_eq!(config.item_gap, 12.0);
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let err = StripConfig::from_json(r#"{ "gap": 3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_json_rejects_out_of_range() {
        let err = StripConfig::from_json(r#"{ "page_fraction": 1.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "page_fraction",
                ..
            }
        ));
    }
}
