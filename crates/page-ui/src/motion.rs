//! Entrance animation presets
//!
//! An [`Entrance`] describes where an element starts before it animates to
//! its resting place: offset, scale and opacity, plus timing. Elements with
//! [`Trigger::Reveal`] wait for their reveal gate; [`Trigger::Mount`]
//! elements play immediately. Elements that leave the tree while the page
//! is mounted can carry an exit [`Pose`], and an [`IdleMotion`] loops for as
//! long as the element is shown.

use serde::{Deserialize, Serialize};

/// Default delay between siblings in a staggered list
pub const DEFAULT_STAGGER_MS: u64 = 100;

/// When an entrance plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// As soon as the page mounts
    Mount,
    /// When the element's reveal gate latches
    #[default]
    Reveal,
}

/// Starting pose and timing of an entrance animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entrance {
    /// Horizontal start offset in pixels
    pub x: f64,
    /// Vertical start offset in pixels
    pub y: f64,
    /// Start scale
    pub scale: f64,
    /// Start opacity
    pub opacity: f64,
    /// Delay before playing
    pub delay_ms: u64,
    /// Duration override; the frontend default applies when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// When to play
    pub trigger: Trigger,
    /// Pose animated to before the element is removed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit: Option<Pose>,
}

impl Default for Entrance {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            opacity: 0.0,
            delay_ms: 0,
            duration_ms: None,
            trigger: Trigger::Reveal,
            exit: None,
        }
    }
}

impl Entrance {
    /// Fade in while rising `distance` pixels
    pub fn fade_up(distance: f64) -> Self {
        Self {
            y: distance,
            ..Self::default()
        }
    }

    /// Fade in while sliding from `offset` pixels horizontally
    ///
    /// Negative offsets enter from the left.
    pub fn slide_in(offset: f64) -> Self {
        Self {
            x: offset,
            ..Self::default()
        }
    }

    /// Fade in while growing from `scale`
    pub fn scale_in(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Set the delay
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Delay by `index` steps of `stagger_ms`
    pub fn staggered(self, index: usize, stagger_ms: u64) -> Self {
        let steps = u64::try_from(index).unwrap_or(u64::MAX);
        self.with_delay(steps.saturating_mul(stagger_ms))
    }

    /// Set the duration
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Play on mount instead of waiting for a reveal gate
    pub fn on_mount(mut self) -> Self {
        self.trigger = Trigger::Mount;
        self
    }

    /// Animate to `pose` when the element is removed
    pub fn with_exit(mut self, pose: Pose) -> Self {
        self.exit = Some(pose);
        self
    }
}

/// Offset, scale and opacity of an element at one end of a transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Horizontal offset in pixels
    pub x: f64,
    /// Vertical offset in pixels
    pub y: f64,
    /// Scale
    pub scale: f64,
    /// Opacity
    pub opacity: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            opacity: 0.0,
        }
    }
}

// =============================================================================
// Idle Motion
// =============================================================================

/// Motion repeated for as long as an element is shown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdleMotion {
    /// Vertical offset at the midpoint of each cycle
    pub y: f64,
    /// Length of one cycle
    pub period_ms: u64,
}

impl IdleMotion {
    /// Rise `height` pixels and settle back, once per `period_ms`
    pub fn float(height: f64, period_ms: u64) -> Self {
        Self {
            y: -height,
            period_ms,
        }
    }

    /// Offsets of one cycle: rest, peak, rest
    pub fn keyframes(&self) -> [f64; 3] {
        [0.0, self.y, 0.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let up = Entrance::fade_up(20.0);
        assert_eq!((up.x, up.y, up.scale), (0.0, 20.0, 1.0));

        let left = Entrance::slide_in(-50.0);
        assert_eq!(left.x, -50.0);

        let grow = Entrance::scale_in(0.9);
        assert_eq!(grow.scale, 0.9);
        assert_eq!(grow.opacity, 0.0);
    }

    #[test]
    fn test_stagger() {
        let third = Entrance::fade_up(20.0).staggered(2, DEFAULT_STAGGER_MS);
        assert_eq!(third.delay_ms, 200);
        assert_eq!(Entrance::fade_up(20.0).staggered(0, 200).delay_ms, 0);
    }

    #[test]
    fn test_stagger_saturates() {
        let last = Entrance::fade_up(20.0).staggered(5, u64::MAX);
        assert_eq!(last.delay_ms, u64::MAX);
        assert_eq!(Entrance::fade_up(20.0).staggered(0, u64::MAX).delay_ms, 0);
    }

    #[test]
    fn test_exit_pose() {
        assert_eq!(Entrance::fade_up(20.0).exit, None);

        let panel = Entrance::scale_in(0.9).with_exit(Pose {
            y: 20.0,
            scale: 0.9,
            ..Pose::default()
        });
        let exit = panel.exit.unwrap();
        assert_eq!((exit.y, exit.scale, exit.opacity), (20.0, 0.9, 0.0));
    }

    #[test]
    fn test_idle_float() {
        let float = IdleMotion::float(15.0, 4000);
        assert_eq!(float.keyframes(), [0.0, -15.0, 0.0]);
        assert_eq!(float.period_ms, 4000);
    }

    #[test]
    fn test_trigger_defaults_to_reveal() {
        assert_eq!(Entrance::fade_up(20.0).trigger, Trigger::Reveal);
        assert_eq!(Entrance::slide_in(-50.0).on_mount().trigger, Trigger::Mount);
    }
}
