//! Viewport-intersection observation contracts.
//!
//! A host enumerates every element carrying the requested marker class, watches them with one
//! shared observer, and forwards intersection batches to a runtime callback. The callback returns
//! the targets that should receive the revealed class; the host applies it. Releasing the
//! [`ObservationHandle`] tears down the whole watcher.

use std::{cell::RefCell, rc::Rc};

use thiserror::Error;

/// Opaque id of one observed element, stable for the lifetime of an observation.
///
/// Hosts assign ids in document enumeration order starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevealTargetId(pub usize);

/// One intersection observation for one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    /// Observed element.
    pub target: RevealTargetId,
    /// Whether the element currently intersects the viewport.
    pub is_intersecting: bool,
    /// Visible fraction of the element in `[0.0, 1.0]`.
    pub ratio: f64,
}

/// Parameters for a shared viewport watcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserveRequest {
    /// Class identifying elements to observe.
    pub marker_class: String,
    /// Class applied to targets returned by the runtime callback.
    pub revealed_class: String,
    /// Minimum visible fraction that triggers a callback.
    pub threshold: f64,
}

/// Runtime callback invoked with each intersection batch; returns the targets to reveal.
pub type RevealCallback = Box<dyn FnMut(&[IntersectionSample]) -> Vec<RevealTargetId>>;

/// Observation setup failures. None of these are fatal for the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObserveError {
    /// The host has no intersection-observation capability.
    #[error("viewport observation unsupported: {0}")]
    Unsupported(String),
    /// The host supports observation but building the watcher failed.
    #[error("viewport observer construction failed: {0}")]
    Construction(String),
}

/// Owned watcher resource. Dropping it must disconnect the watcher.
pub trait ObservationHandle {
    /// Number of elements the watcher subscribed at setup.
    fn target_count(&self) -> usize;

    /// Disconnects the watcher. No callbacks are delivered afterwards. Idempotent.
    fn disconnect(&mut self);

    /// Returns whether the watcher is still delivering callbacks.
    fn is_connected(&self) -> bool;
}

/// Host service creating shared viewport watchers.
pub trait ViewportObserverService {
    /// Subscribes every element carrying `request.marker_class` to one watcher.
    ///
    /// # Errors
    ///
    /// Returns [`ObserveError`] when the host cannot observe the viewport.
    fn observe(
        &self,
        request: &ObserveRequest,
        on_samples: RevealCallback,
    ) -> Result<Box<dyn ObservationHandle>, ObserveError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Viewport observer for hosts without a DOM.
pub struct NoopViewportObserverService;

impl ViewportObserverService for NoopViewportObserverService {
    fn observe(
        &self,
        _request: &ObserveRequest,
        _on_samples: RevealCallback,
    ) -> Result<Box<dyn ObservationHandle>, ObserveError> {
        Err(ObserveError::Unsupported(
            "no document on this host".to_string(),
        ))
    }
}

#[derive(Default)]
struct MemoryObserverInner {
    supported: bool,
    classes: Vec<Vec<String>>,
    callback: Option<RevealCallback>,
    revealed_class: String,
    connected: bool,
    observe_calls: usize,
}

/// In-memory viewport observer simulating a document with a fixed number of marked elements.
///
/// Tests drive it with [`MemoryViewportObserver::emit`]. Clones share state.
#[derive(Clone)]
pub struct MemoryViewportObserver {
    inner: Rc<RefCell<MemoryObserverInner>>,
}

impl MemoryViewportObserver {
    /// Creates an observer whose document holds `count` marked elements.
    pub fn with_targets(count: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryObserverInner {
                supported: true,
                classes: vec![Vec::new(); count],
                ..MemoryObserverInner::default()
            })),
        }
    }

    /// Creates an observer that reports missing capability.
    pub fn unsupported() -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryObserverInner::default())),
        }
    }

    /// Delivers an intersection batch to the active callback, if connected.
    ///
    /// Returns the number of class additions that actually changed an element.
    pub fn emit(&self, samples: &[IntersectionSample]) -> usize {
        let callback = {
            let mut inner = self.inner.borrow_mut();
            if !inner.connected {
                return 0;
            }
            inner.callback.take()
        };
        let Some(mut callback) = callback else {
            return 0;
        };
        let targets = callback(samples);

        let mut inner = self.inner.borrow_mut();
        if inner.connected {
            inner.callback = Some(callback);
        }
        let revealed_class = inner.revealed_class.clone();
        let mut changed = 0;
        for RevealTargetId(index) in targets {
            let Some(classes) = inner.classes.get_mut(index) else {
                continue;
            };
            if !classes.contains(&revealed_class) {
                classes.push(revealed_class.clone());
                changed += 1;
            }
        }
        changed
    }

    /// Returns how many times `class` appears on an element.
    pub fn class_count(&self, target: RevealTargetId, class: &str) -> usize {
        self.inner
            .borrow()
            .classes
            .get(target.0)
            .map(|classes| classes.iter().filter(|entry| *entry == class).count())
            .unwrap_or(0)
    }

    /// Returns whether an element carries `class`.
    pub fn has_class(&self, target: RevealTargetId, class: &str) -> bool {
        self.class_count(target, class) > 0
    }

    /// Returns whether a watcher is currently connected.
    pub fn is_connected(&self) -> bool {
        self.inner.borrow().connected
    }

    /// Returns how many watchers were created.
    pub fn observe_calls(&self) -> usize {
        self.inner.borrow().observe_calls
    }
}

impl ViewportObserverService for MemoryViewportObserver {
    fn observe(
        &self,
        request: &ObserveRequest,
        on_samples: RevealCallback,
    ) -> Result<Box<dyn ObservationHandle>, ObserveError> {
        let mut inner = self.inner.borrow_mut();
        if !inner.supported {
            return Err(ObserveError::Unsupported(
                "memory observer built without capability".to_string(),
            ));
        }
        inner.observe_calls += 1;
        inner.callback = Some(on_samples);
        inner.revealed_class = request.revealed_class.clone();
        inner.connected = true;
        Ok(Box::new(MemoryObservationHandle {
            target_count: inner.classes.len(),
            inner: self.inner.clone(),
        }))
    }
}

struct MemoryObservationHandle {
    target_count: usize,
    inner: Rc<RefCell<MemoryObserverInner>>,
}

impl ObservationHandle for MemoryObservationHandle {
    fn target_count(&self) -> usize {
        self.target_count
    }

    fn disconnect(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.connected = false;
        inner.callback = None;
    }

    fn is_connected(&self) -> bool {
        self.inner.borrow().connected
    }
}

impl Drop for MemoryObservationHandle {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ObserveRequest {
        ObserveRequest {
            marker_class: "fade-on-scroll".to_string(),
            revealed_class: "animate-fade-in".to_string(),
            threshold: 0.1,
        }
    }

    fn sample(index: usize) -> IntersectionSample {
        IntersectionSample {
            target: RevealTargetId(index),
            is_intersecting: true,
            ratio: 1.0,
        }
    }

    #[test]
    fn noop_observer_reports_unsupported() {
        let result = NoopViewportObserverService.observe(&request(), Box::new(|_| Vec::new()));
        assert!(matches!(result, Err(ObserveError::Unsupported(_))));
    }

    #[test]
    fn memory_observer_applies_returned_targets_once() {
        let observer = MemoryViewportObserver::with_targets(2);
        let handle = observer
            .observe(
                &request(),
                Box::new(|samples| samples.iter().map(|s| s.target).collect()),
            )
            .expect("observe");
        assert_eq!(handle.target_count(), 2);

        assert_eq!(observer.emit(&[sample(1)]), 1);
        assert_eq!(observer.emit(&[sample(1)]), 0);
        assert_eq!(
            observer.class_count(RevealTargetId(1), "animate-fade-in"),
            1
        );
        assert!(!observer.has_class(RevealTargetId(0), "animate-fade-in"));
    }

    #[test]
    fn dropping_handle_disconnects_watcher() {
        let observer = MemoryViewportObserver::with_targets(1);
        let handle = observer
            .observe(
                &request(),
                Box::new(|samples| samples.iter().map(|s| s.target).collect()),
            )
            .expect("observe");
        assert!(observer.is_connected());
        drop(handle);

        assert!(!observer.is_connected());
        assert_eq!(observer.emit(&[sample(0)]), 0);
        assert!(!observer.has_class(RevealTargetId(0), "animate-fade-in"));
    }

    #[test]
    fn unsupported_memory_observer_fails_setup() {
        let observer = MemoryViewportObserver::unsupported();
        let result = observer.observe(&request(), Box::new(|_| Vec::new()));
        assert!(matches!(result, Err(ObserveError::Unsupported(_))));
        assert_eq!(observer.observe_calls(), 0);
    }
}
