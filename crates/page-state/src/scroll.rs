//! Scroll position classifier for the navigation bar

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::config::ScrollConfig;
use crate::viewport::{ListenerControl, Subscription, Viewport};

/// Where the page is scrolled relative to the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollPosition {
    /// Offset at or below the threshold
    #[default]
    Top,
    /// Past the threshold
    Scrolled,
}

impl ScrollPosition {
    /// Classify an offset; `Scrolled` only when it strictly exceeds `threshold`
    pub fn classify(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            ScrollPosition::Scrolled
        } else {
            ScrollPosition::Top
        }
    }

    /// Whether this is `Scrolled`
    pub fn is_scrolled(&self) -> bool {
        matches!(self, ScrollPosition::Scrolled)
    }
}

/// Tracks the scroll classification while mounted on a viewport
#[derive(Debug)]
pub struct ScrollClassifier {
    threshold: f64,
    position: Arc<Mutex<ScrollPosition>>,
    subscription: Option<Subscription>,
}

impl ScrollClassifier {
    /// Create an unmounted classifier at the top
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            threshold: config.threshold,
            position: Arc::new(Mutex::new(ScrollPosition::Top)),
            subscription: None,
        }
    }

    /// Re-evaluate against a new offset
    pub fn update(&self, offset: f64) -> ScrollPosition {
        record(&self.position, offset, self.threshold)
    }

    /// Subscribe to the viewport and classify its current offset
    ///
    /// Mounting an already mounted classifier replaces its subscription.
    pub fn mount(&mut self, viewport: &Viewport) {
        self.update(viewport.scroll_offset());
        let position = Arc::clone(&self.position);
        let threshold = self.threshold;
        self.subscription = Some(viewport.on_scroll(move |offset| {
            record(&position, offset, threshold);
            ListenerControl::Continue
        }));
    }

    /// Release the viewport subscription
    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            debug!("scroll classifier unsubscribed");
        }
    }

    /// Whether a viewport subscription is held
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Current classification
    pub fn position(&self) -> ScrollPosition {
        *self.position.lock()
    }

    /// Whether the page is past the threshold
    pub fn is_scrolled(&self) -> bool {
        self.position().is_scrolled()
    }
}

impl Default for ScrollClassifier {
    fn default() -> Self {
        Self::new(&ScrollConfig::default())
    }
}

fn record(slot: &Mutex<ScrollPosition>, offset: f64, threshold: f64) -> ScrollPosition {
    let next = ScrollPosition::classify(offset, threshold);
    let mut current = slot.lock();
    if *current != next {
        debug!(offset, position = ?next, "scroll classification changed");
        *current = next;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_threshold_is_strict() {
        assert_eq!(ScrollPosition::classify(0.0, 50.0), ScrollPosition::Top);
        assert_eq!(ScrollPosition::classify(50.0, 50.0), ScrollPosition::Top);
        assert_eq!(ScrollPosition::classify(50.5, 50.0), ScrollPosition::Scrolled);
    }

    #[test]
    fn test_update_is_not_sticky() {
        let classifier = ScrollClassifier::default();
        assert_eq!(classifier.update(0.0), ScrollPosition::Top);
        assert_eq!(classifier.update(80.0), ScrollPosition::Scrolled);
        assert_eq!(classifier.update(10.0), ScrollPosition::Top);
        assert!(!classifier.is_scrolled());
    }

    #[test]
    fn test_mounted_classifier_follows_viewport() {
        let viewport = Viewport::new();
        let mut classifier = ScrollClassifier::default();
        classifier.mount(&viewport);
        assert!(classifier.is_mounted());

        viewport.scroll_to(80.0);
        assert!(classifier.is_scrolled());
        viewport.scroll_to(10.0);
        assert!(!classifier.is_scrolled());
    }

    #[test]
    fn test_mount_reads_current_offset() {
        let viewport = Viewport::new();
        viewport.scroll_to(400.0);

        let mut classifier = ScrollClassifier::default();
        assert!(!classifier.is_scrolled());
        classifier.mount(&viewport);
        assert!(classifier.is_scrolled());
    }

    #[test]
    fn test_unmount_releases_listener() {
        let viewport = Viewport::new();
        let mut classifier = ScrollClassifier::default();
        classifier.mount(&viewport);
        assert_eq!(viewport.scroll_listener_count(), 1);

        classifier.unmount();
        assert_eq!(viewport.scroll_listener_count(), 0);

        viewport.scroll_to(200.0);
        assert!(!classifier.is_scrolled());
    }

    #[test]
    fn test_drop_releases_listener() {
        let viewport = Viewport::new();
        {
            let mut classifier = ScrollClassifier::default();
            classifier.mount(&viewport);
        }
        assert_eq!(viewport.scroll_listener_count(), 0);
    }

    #[test]
    fn test_remount_does_not_leak() {
        let viewport = Viewport::new();
        let mut classifier = ScrollClassifier::default();
        classifier.mount(&viewport);
        classifier.mount(&viewport);
        assert_eq!(viewport.scroll_listener_count(), 1);
    }

    #[test]
    fn test_custom_threshold() {
        let classifier = ScrollClassifier::new(&ScrollConfig { threshold: 200.0 });
        assert!(!classifier.update(150.0).is_scrolled());
        assert!(classifier.update(201.0).is_scrolled());
    }
}
