//! One-shot reveal gates
//!
//! A gate starts [`RevealState::Pending`] and latches to
//! [`RevealState::Revealed`] the first time its element intersects the
//! viewport. Nothing moves it back: leaving the viewport, scrolling away or
//! re-observing all leave a revealed gate revealed. After latching the gate
//! drops its viewport listener.

use parking_lot::Mutex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::config::RevealConfig;
use crate::viewport::{ElementKey, ListenerControl, Subscription, Viewport};

/// Visibility latch of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    /// Not yet seen; content renders hidden
    #[default]
    Pending,
    /// Seen at least once; content renders visible
    Revealed,
}

impl RevealState {
    /// Whether the latch has fired
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// Latch for a single element
#[derive(Debug)]
pub struct RevealGate {
    element: ElementKey,
    config: RevealConfig,
    state: Arc<Mutex<RevealState>>,
    subscription: Option<Subscription>,
}

impl RevealGate {
    /// Create a pending gate for `element`
    pub fn new(element: impl Into<ElementKey>, config: RevealConfig) -> Self {
        Self {
            element: element.into(),
            config,
            state: Arc::new(Mutex::new(RevealState::Pending)),
            subscription: None,
        }
    }

    /// Element this gate watches
    pub fn element(&self) -> &str {
        &self.element
    }

    /// Current latch state
    pub fn state(&self) -> RevealState {
        *self.state.lock()
    }

    /// Whether the element has been seen
    pub fn is_revealed(&self) -> bool {
        self.state().is_revealed()
    }

    /// Feed one intersection report directly; returns the resulting state
    pub fn report(&self, ratio: f64) -> RevealState {
        latch(&self.state, &self.element, self.config, ratio)
    }

    /// Start watching the element on `viewport`
    ///
    /// A gate that is already revealed does not subscribe.
    pub fn observe(&mut self, viewport: &Viewport) {
        if self.is_revealed() {
            self.subscription = None;
            return;
        }

        let state = Arc::clone(&self.state);
        let element = self.element.clone();
        let config = self.config;
        self.subscription = Some(viewport.observe(self.element.clone(), move |ratio| {
            match latch(&state, &element, config, ratio) {
                RevealState::Revealed => ListenerControl::Release,
                RevealState::Pending => ListenerControl::Continue,
            }
        }));
    }

    /// Stop watching without changing the state
    pub fn release(&mut self) {
        self.subscription = None;
    }
}

fn latch(
    state: &Mutex<RevealState>,
    element: &str,
    config: RevealConfig,
    ratio: f64,
) -> RevealState {
    let mut current = state.lock();
    if *current == RevealState::Pending && config.is_intersecting(ratio) {
        debug!(element, ratio, "element revealed");
        *current = RevealState::Revealed;
    }
    *current
}

/// Reveal gates for every animated block on a page, keyed by element
#[derive(Debug, Default)]
pub struct RevealRegistry {
    config: RevealConfig,
    gates: BTreeMap<ElementKey, RevealGate>,
}

impl RevealRegistry {
    /// Create an empty registry
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            gates: BTreeMap::new(),
        }
    }

    /// Gate for `element`, created pending if absent
    pub fn ensure(&mut self, element: &str) -> &mut RevealGate {
        let config = self.config;
        self.gates
            .entry(element.to_string())
            .or_insert_with(|| RevealGate::new(element, config))
    }

    /// Gate for `element`, if registered
    pub fn get(&self, element: &str) -> Option<&RevealGate> {
        self.gates.get(element)
    }

    /// Whether `element` has been revealed; unknown elements are pending
    pub fn is_revealed(&self, element: &str) -> bool {
        self.get(element).is_some_and(RevealGate::is_revealed)
    }

    /// Subscribe every pending gate to `viewport`
    pub fn observe_all(&mut self, viewport: &Viewport) {
        for gate in self.gates.values_mut() {
            gate.observe(viewport);
        }
    }

    /// Drop every viewport subscription, keeping latched states
    pub fn release_all(&mut self) {
        for gate in self.gates.values_mut() {
            gate.release();
        }
    }

    /// Number of registered gates
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether no gates are registered
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Number of revealed gates
    pub fn revealed_count(&self) -> usize {
        self.gates.values().filter(|gate| gate.is_revealed()).count()
    }
}
