//! Viewport event bus
//!
//! The rendering layer reports scroll offsets and per-element intersections
//! to a [`Viewport`]; state holders subscribe to the events they need. Every
//! subscription is held by a [`Subscription`] guard and removed when the
//! guard is dropped, so an unmounted component never receives events.
//!
//! Listeners run synchronously on the thread that reports the event. A
//! listener may return [`ListenerControl::Release`] to unsubscribe itself.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};

/// Identifier for an element tracked by intersection listeners
pub type ElementKey = String;

/// What a listener wants after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerControl {
    /// Keep receiving events
    Continue,
    /// Unsubscribe now
    Release,
}

type ScrollListener = Box<dyn FnMut(f64) -> ListenerControl + Send>;
type IntersectionListener = Box<dyn FnMut(f64) -> ListenerControl + Send>;

struct ScrollEntry {
    id: u64,
    listener: ScrollListener,
}

struct IntersectionEntry {
    id: u64,
    element: ElementKey,
    listener: IntersectionListener,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    offset: f64,
    scroll: Vec<ScrollEntry>,
    intersection: Vec<IntersectionEntry>,
    /// Dispatches currently holding listeners outside the registry
    dispatching: usize,
    /// Ids dropped while their listener was out for dispatch
    released: Vec<u64>,
}

impl Registry {
    /// Return listeners taken for dispatch, dropping those released meanwhile
    fn restore<T>(&mut self, taken: Vec<T>, id: impl Fn(&T) -> u64) -> (Vec<T>, Vec<T>) {
        self.dispatching = self.dispatching.saturating_sub(1);
        let released = if self.dispatching == 0 {
            std::mem::take(&mut self.released)
        } else {
            self.released.clone()
        };
        taken
            .into_iter()
            .partition(|entry| !released.contains(&id(entry)))
    }

    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Detach a listener; the caller drops it after releasing the lock
    fn remove(&mut self, id: u64) -> Detached {
        let (scroll, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.scroll)
            .into_iter()
            .partition(|entry| entry.id == id);
        self.scroll = kept;
        let (intersection, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.intersection)
            .into_iter()
            .partition(|entry| entry.id == id);
        self.intersection = kept;

        if scroll.is_empty() && intersection.is_empty() && self.dispatching > 0 {
            self.released.push(id);
        }
        Detached {
            _scroll: scroll,
            _intersection: intersection,
        }
    }
}

/// Listeners removed under the lock, dropped after it is released
struct Detached {
    _scroll: Vec<ScrollEntry>,
    _intersection: Vec<IntersectionEntry>,
}

/// Shared handle to the viewport event bus
#[derive(Clone, Default)]
pub struct Viewport {
    inner: Arc<Mutex<Registry>>,
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.inner.lock();
        f.debug_struct("Viewport")
            .field("offset", &registry.offset)
            .field("scroll_listeners", &registry.scroll.len())
            .field("intersection_listeners", &registry.intersection.len())
            .finish()
    }
}

impl Viewport {
    /// Create a viewport scrolled to the top
    pub fn new() -> Self {
        Self::default()
    }

    /// Last reported vertical scroll offset
    pub fn scroll_offset(&self) -> f64 {
        self.inner.lock().offset
    }

    /// Subscribe to scroll offset changes
    pub fn on_scroll<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(f64) -> ListenerControl + Send + 'static,
    {
        let mut registry = self.inner.lock();
        let id = registry.allocate();
        registry.scroll.push(ScrollEntry {
            id,
            listener: Box::new(listener),
        });
        self.subscription(id)
    }

    /// Subscribe to intersection reports for one element
    ///
    /// The listener receives the visible fraction of the element (0.0 - 1.0).
    pub fn observe<F>(&self, element: impl Into<ElementKey>, listener: F) -> Subscription
    where
        F: FnMut(f64) -> ListenerControl + Send + 'static,
    {
        let mut registry = self.inner.lock();
        let id = registry.allocate();
        registry.intersection.push(IntersectionEntry {
            id,
            element: element.into(),
            listener: Box::new(listener),
        });
        self.subscription(id)
    }

    /// Report a new vertical scroll offset
    pub fn scroll_to(&self, offset: f64) {
        let mut taken = {
            let mut registry = self.inner.lock();
            registry.offset = offset;
            registry.dispatching += 1;
            std::mem::take(&mut registry.scroll)
        };

        taken.retain_mut(|entry| (entry.listener)(offset) == ListenerControl::Continue);

        let mut registry = self.inner.lock();
        let (mut kept, dropped) = registry.restore(taken, |entry| entry.id);
        kept.append(&mut registry.scroll);
        registry.scroll = kept;
        drop(registry);
        drop(dropped);
    }

    /// Report the visible fraction of an element
    pub fn intersect(&self, element: &str, ratio: f64) {
        let ratio = ratio.clamp(0.0, 1.0);
        let mut taken = {
            let mut registry = self.inner.lock();
            registry.dispatching += 1;
            std::mem::take(&mut registry.intersection)
        };

        taken.retain_mut(|entry| {
            entry.element != element || (entry.listener)(ratio) == ListenerControl::Continue
        });

        let mut registry = self.inner.lock();
        let (mut kept, dropped) = registry.restore(taken, |entry| entry.id);
        kept.append(&mut registry.intersection);
        registry.intersection = kept;
        drop(registry);
        drop(dropped);
    }

    /// Number of live scroll subscriptions
    pub fn scroll_listener_count(&self) -> usize {
        self.inner.lock().scroll.len()
    }

    /// Number of live intersection subscriptions
    pub fn intersection_listener_count(&self) -> usize {
        self.inner.lock().intersection.len()
    }

    fn subscription(&self, id: u64) -> Subscription {
        Subscription {
            registry: Arc::downgrade(&self.inner),
            id,
        }
    }
}

/// Guard for a viewport listener; dropping it unsubscribes
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Subscription {
    /// Unsubscribe now
    pub fn release(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let detached = registry.lock().remove(self.id);
            drop(detached);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==========================================================================
    // Scroll Subscription Tests
    // ==========================================================================

    #[test]
    fn test_scroll_listener_receives_offsets() {
        let viewport = Viewport::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _subscription = viewport.on_scroll(move |offset| {
            sink.lock().push(offset);
            ListenerControl::Continue
        });

        viewport.scroll_to(10.0);
        viewport.scroll_to(80.0);

        assert_eq!(*seen.lock(), vec![10.0, 80.0]);
        assert_eq!(viewport.scroll_offset(), 80.0);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let viewport = Viewport::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let subscription = viewport.on_scroll(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            ListenerControl::Continue
        });
        assert_eq!(viewport.scroll_listener_count(), 1);

        viewport.scroll_to(5.0);
        drop(subscription);
        viewport.scroll_to(6.0);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(viewport.scroll_listener_count(), 0);
    }

    #[test]
    fn test_listener_can_release_itself() {
        let viewport = Viewport::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let _subscription = viewport.on_scroll(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            ListenerControl::Release
        });

        viewport.scroll_to(1.0);
        viewport.scroll_to(2.0);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(viewport.scroll_listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_viewport() {
        let viewport = Viewport::new();
        let subscription = viewport.on_scroll(|_| ListenerControl::Continue);
        drop(viewport);
        subscription.release();
    }

    // ==========================================================================
    // Intersection Subscription Tests
    // ==========================================================================

    #[test]
    fn test_intersection_routes_by_element() {
        let viewport = Viewport::new();
        let hits = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&hits);
        let _a = viewport.observe("hero", move |ratio| {
            sink.lock().push(("hero", ratio));
            ListenerControl::Continue
        });
        let sink = Arc::clone(&hits);
        let _b = viewport.observe("footer", move |ratio| {
            sink.lock().push(("footer", ratio));
            ListenerControl::Continue
        });

        viewport.intersect("footer", 0.5);
        viewport.intersect("missing", 1.0);

        assert_eq!(*hits.lock(), vec![("footer", 0.5)]);
        assert_eq!(viewport.intersection_listener_count(), 2);
    }

    #[test]
    fn test_intersection_ratio_is_clamped() {
        let viewport = Viewport::new();
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let _subscription = viewport.observe("card", move |ratio| {
            *sink.lock() = Some(ratio);
            ListenerControl::Continue
        });

        viewport.intersect("card", 3.0);
        assert_eq!(*seen.lock(), Some(1.0));
    }

    #[test]
    fn test_subscribing_during_dispatch_is_kept() {
        let viewport = Viewport::new();
        let nested = viewport.clone();
        let late = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&late);
        let _outer = viewport.on_scroll(move |_| {
            *slot.lock() = Some(nested.on_scroll(|_| ListenerControl::Continue));
            ListenerControl::Release
        });

        viewport.scroll_to(1.0);
        assert_eq!(viewport.scroll_listener_count(), 1);

        late.lock().take();
        assert_eq!(viewport.scroll_listener_count(), 0);
    }

    // ==========================================================================
    // Release Bookkeeping Tests
    // ==========================================================================

    fn pending_releases(viewport: &Viewport) -> usize {
        viewport.inner.lock().released.len()
    }

    #[test]
    fn test_dropping_self_released_guard_leaves_nothing_pending() {
        let viewport = Viewport::new();
        let guard = viewport.observe("card", |_| ListenerControl::Release);

        viewport.intersect("card", 0.4);
        assert_eq!(viewport.intersection_listener_count(), 0);

        drop(guard);
        assert_eq!(pending_releases(&viewport), 0);
    }

    #[test]
    fn test_guard_dropped_during_dispatch_is_removed() {
        let viewport = Viewport::new();
        let victim = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&victim);

        let _killer = viewport.on_scroll(move |_| {
            slot.lock().take();
            ListenerControl::Continue
        });
        *victim.lock() = Some(viewport.on_scroll(|_| ListenerControl::Continue));
        assert_eq!(viewport.scroll_listener_count(), 2);

        viewport.scroll_to(10.0);
        assert_eq!(viewport.scroll_listener_count(), 1);
        assert_eq!(pending_releases(&viewport), 0);
    }
}
