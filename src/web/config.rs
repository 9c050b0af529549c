//! Tuning for the pointer web effect.

use std::ops::RangeInclusive;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How often, where, and how large webs are spawned, and how long they live.
///
/// Pure data: it describes the effect but does not run it. The defaults
/// match the shipped form.
///
/// ```rust
/// use spidr_form::web::WebConfig;
/// use std::time::Duration;
///
/// let config = WebConfig::default()
///     .with_throttle(Duration::from_millis(500))
///     .with_trigger_chance(0.25);
///
/// assert_eq!(config.throttle(), Duration::from_millis(500));
/// assert_eq!(config.visible_for(), Duration::from_millis(2000));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WebConfig {
    throttle: Duration,
    trigger_chance: f64,
    form_margin: f64,
    outer_nodes: RangeInclusive<usize>,
    min_radius: f64,
    radius_spread: f64,
    edge_padding: f64,
    visible_for: Duration,
    fade_out: Duration,
    leave_fade: Duration,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            throttle: Duration::from_millis(200),
            trigger_chance: 0.1,
            form_margin: 30.0,
            outer_nodes: 3..=4,
            min_radius: 40.0,
            radius_spread: 30.0,
            edge_padding: 10.0,
            visible_for: Duration::from_millis(2000),
            fade_out: Duration::from_millis(400),
            leave_fade: Duration::from_millis(300),
        }
    }
}

impl WebConfig {
    /// Minimum time between two spawns.
    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    /// Probability that a single pointer move tries to spawn, clamped to `0.0..=1.0`.
    pub fn with_trigger_chance(mut self, chance: f64) -> Self {
        self.trigger_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Distance around the form box where no web spawns.
    pub fn with_form_margin(mut self, margin: f64) -> Self {
        self.form_margin = margin;
        self
    }

    /// Range of outer node counts. An empty range falls back to its start.
    pub fn with_outer_nodes(mut self, nodes: RangeInclusive<usize>) -> Self {
        self.outer_nodes = nodes;
        self
    }

    /// Radius is drawn from `min..min + spread`.
    pub fn with_radius(mut self, min: f64, spread: f64) -> Self {
        self.min_radius = min;
        self.radius_spread = spread.max(0.0);
        self
    }

    /// How long a web stays fully visible, and how long it then fades.
    pub fn with_lifetime(mut self, visible_for: Duration, fade_out: Duration) -> Self {
        self.visible_for = visible_for;
        self.fade_out = fade_out;
        self
    }

    /// Fade applied to every web when the pointer leaves the container.
    pub fn with_leave_fade(mut self, fade: Duration) -> Self {
        self.leave_fade = fade;
        self
    }

    /// Minimum time between two spawns.
    pub fn throttle(&self) -> Duration {
        self.throttle
    }

    /// Per-move spawn probability.
    pub fn trigger_chance(&self) -> f64 {
        self.trigger_chance
    }

    /// Distance around the form box where no web spawns.
    pub fn form_margin(&self) -> f64 {
        self.form_margin
    }

    /// Range of outer node counts.
    pub fn outer_nodes(&self) -> RangeInclusive<usize> {
        self.outer_nodes.clone()
    }

    /// Smallest radius.
    pub fn min_radius(&self) -> f64 {
        self.min_radius
    }

    /// Radius spread above the minimum.
    pub fn radius_spread(&self) -> f64 {
        self.radius_spread
    }

    /// Outer nodes are kept this far inside the container edges.
    pub fn edge_padding(&self) -> f64 {
        self.edge_padding
    }

    /// How long a web stays fully visible.
    pub fn visible_for(&self) -> Duration {
        self.visible_for
    }

    /// How long a web takes to fade before removal.
    pub fn fade_out(&self) -> Duration {
        self.fade_out
    }

    /// Fade applied on pointer leave.
    pub fn leave_fade(&self) -> Duration {
        self.leave_fade
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WebConfig::default();
        assert_eq!(config.throttle(), Duration::from_millis(200));
        assert_eq!(config.trigger_chance(), 0.1);
        assert_eq!(config.form_margin(), 30.0);
        assert_eq!(config.outer_nodes(), 3..=4);
        assert_eq!(config.fade_out(), Duration::from_millis(400));
        assert_eq!(config.leave_fade(), Duration::from_millis(300));
    }

    #[test]
    fn test_trigger_chance_is_clamped() {
        assert_eq!(WebConfig::default().with_trigger_chance(3.0).trigger_chance(), 1.0);
        assert_eq!(WebConfig::default().with_trigger_chance(-1.0).trigger_chance(), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config_deserializes_over_defaults() {
        let config: WebConfig =
            serde_json::from_str(r#"{ "trigger_chance": 1.0, "form_margin": 0.0 }"#).unwrap();
        assert_eq!(config.trigger_chance(), 1.0);
        assert_eq!(config.form_margin(), 0.0);
        assert_eq!(config.throttle(), Duration::from_millis(200));
    }
}
