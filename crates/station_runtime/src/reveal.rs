//! Reveal-on-view engine: one-way `Pending -> Revealed` transitions driven by a shared viewport
//! watcher.
//!
//! [`RevealEngine`] is the pure state machine; [`RevealWatcher`] owns the host observation and the
//! engine together so releasing the watcher stops every further transition.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use platform_host::{
    IntersectionSample, ObservationHandle, ObserveError, ObserveRequest, RevealTargetId,
    ViewportObserverService,
};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_MARKER_CLASS: &str = "fade-on-scroll";
pub const DEFAULT_REVEALED_CLASS: &str = "animate-fade-in";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RevealConfigError {
    #[error("reveal threshold {0} must be within (0, 1]")]
    InvalidThreshold(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
/// Reasons a [`RevealWatcher`] could not start.
pub enum RevealStartError {
    #[error("invalid reveal config: {0}")]
    Config(#[from] RevealConfigError),
    #[error(transparent)]
    Observe(#[from] ObserveError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Marker convention and visibility threshold for reveal-on-view.
pub struct RevealConfig {
    pub marker_class: String,
    pub revealed_class: String,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            revealed_class: DEFAULT_REVEALED_CLASS.to_string(),
            threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

impl RevealConfig {
    /// # Errors
    ///
    /// Returns [`RevealConfigError::InvalidThreshold`] unless `0 < threshold <= 1`.
    pub fn validate(&self) -> Result<(), RevealConfigError> {
        if self.threshold > 0.0 && self.threshold <= 1.0 {
            Ok(())
        } else {
            Err(RevealConfigError::InvalidThreshold(self.threshold))
        }
    }

    pub fn observe_request(&self) -> ObserveRequest {
        ObserveRequest {
            marker_class: self.marker_class.clone(),
            revealed_class: self.revealed_class.clone(),
            threshold: self.threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Pending,
    Revealed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealEngine {
    threshold: f64,
    targets: BTreeMap<RevealTargetId, RevealPhase>,
    connected: bool,
}

impl RevealEngine {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            targets: BTreeMap::new(),
            connected: true,
        }
    }

    /// Registers targets `0..count` as pending. Already tracked targets keep their phase.
    pub fn register(&mut self, count: usize) {
        for index in 0..count {
            self.targets
                .entry(RevealTargetId(index))
                .or_insert(RevealPhase::Pending);
        }
    }

    /// Applies one intersection batch and returns the targets revealed by it, each at most once.
    ///
    /// A sample qualifies when it is intersecting with a visible ratio at or above the threshold.
    /// Unregistered targets and samples delivered after [`Self::disconnect`] are ignored.
    pub fn apply(&mut self, samples: &[IntersectionSample]) -> Vec<RevealTargetId> {
        if !self.connected {
            return Vec::new();
        }
        let mut revealed = Vec::new();
        for sample in samples {
            if !sample.is_intersecting || sample.ratio < self.threshold {
                continue;
            }
            if let Some(phase) = self.targets.get_mut(&sample.target) {
                if *phase == RevealPhase::Pending {
                    *phase = RevealPhase::Revealed;
                    revealed.push(sample.target);
                }
            }
        }
        revealed
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn phase(&self, target: RevealTargetId) -> Option<RevealPhase> {
        self.targets.get(&target).copied()
    }

    pub fn revealed_count(&self) -> usize {
        self.targets
            .values()
            .filter(|phase| **phase == RevealPhase::Revealed)
            .count()
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}

/// Scoped reveal resource: the host watcher plus the engine it feeds.
///
/// Dropping the watcher (or calling [`RevealWatcher::stop`]) disconnects both.
pub struct RevealWatcher {
    engine: Rc<RefCell<RevealEngine>>,
    handle: Option<Box<dyn ObservationHandle>>,
}

impl RevealWatcher {
    /// Subscribes every marked element to one shared watcher.
    ///
    /// # Errors
    ///
    /// Returns [`RevealStartError::Config`] for an out-of-range threshold before touching the
    /// host, and [`RevealStartError::Observe`] when the host cannot observe the viewport. The page
    /// then renders without reveal transitions.
    pub fn start(
        service: &dyn ViewportObserverService,
        config: &RevealConfig,
    ) -> Result<Self, RevealStartError> {
        config.validate()?;

        let engine = Rc::new(RefCell::new(RevealEngine::new(config.threshold)));
        let callback_engine = engine.clone();
        let handle = service.observe(
            &config.observe_request(),
            Box::new(move |samples| callback_engine.borrow_mut().apply(samples)),
        )?;
        engine.borrow_mut().register(handle.target_count());

        Ok(Self {
            engine,
            handle: Some(handle),
        })
    }

    pub fn stop(&mut self) {
        self.engine.borrow_mut().disconnect();
        if let Some(mut handle) = self.handle.take() {
            handle.disconnect();
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| handle.is_connected())
            .unwrap_or(false)
    }

    pub fn target_count(&self) -> usize {
        self.engine.borrow().target_count()
    }

    pub fn revealed_count(&self) -> usize {
        self.engine.borrow().revealed_count()
    }
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}
