//! Anchor scrolling host-service contracts.

use std::{cell::RefCell, collections::BTreeSet, rc::Rc};

/// Scroll animation requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animated scroll.
    #[default]
    Smooth,
    /// Immediate jump.
    Instant,
}

/// Result of a scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The anchor element exists and was scrolled into view.
    Scrolled,
    /// No element with the requested id exists in the document.
    AnchorMissing,
    /// The host has no document to scroll.
    Unavailable,
}

/// Host service that scrolls the viewport to an element identified by DOM id.
///
/// Implementations must never panic on a missing anchor; they report
/// [`ScrollOutcome::AnchorMissing`] instead.
pub trait ScrollService {
    /// Scrolls the element with id `anchor` into view.
    fn scroll_to_anchor(&self, anchor: &str, behavior: ScrollBehavior) -> ScrollOutcome;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op scroll service for unsupported targets.
pub struct NoopScrollService;

impl ScrollService for NoopScrollService {
    fn scroll_to_anchor(&self, _anchor: &str, _behavior: ScrollBehavior) -> ScrollOutcome {
        ScrollOutcome::Unavailable
    }
}

#[derive(Debug, Default)]
struct MemoryScrollInner {
    anchors: BTreeSet<String>,
    history: Vec<(String, ScrollBehavior)>,
}

/// In-memory scroll service with a fixed anchor set and a record of successful scrolls.
///
/// Clones share state, so a test can keep one handle while the runtime owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryScrollService {
    inner: Rc<RefCell<MemoryScrollInner>>,
}

impl MemoryScrollService {
    /// Creates a service whose document contains the given anchor ids.
    pub fn with_anchors<I, S>(anchors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let service = Self::default();
        service
            .inner
            .borrow_mut()
            .anchors
            .extend(anchors.into_iter().map(Into::into));
        service
    }

    /// Returns the anchor of the last successful scroll.
    pub fn last_scrolled(&self) -> Option<String> {
        self.inner
            .borrow()
            .history
            .last()
            .map(|(anchor, _)| anchor.clone())
    }

    /// Returns every successful scroll in call order.
    pub fn history(&self) -> Vec<(String, ScrollBehavior)> {
        self.inner.borrow().history.clone()
    }
}

impl ScrollService for MemoryScrollService {
    fn scroll_to_anchor(&self, anchor: &str, behavior: ScrollBehavior) -> ScrollOutcome {
        let mut inner = self.inner.borrow_mut();
        if !inner.anchors.contains(anchor) {
            return ScrollOutcome::AnchorMissing;
        }
        inner.history.push((anchor.to_string(), behavior));
        ScrollOutcome::Scrolled
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_scroll_records_present_anchors_only() {
        let service = MemoryScrollService::with_anchors(["home", "live"]);

        assert_eq!(
            service.scroll_to_anchor("live", ScrollBehavior::Smooth),
            ScrollOutcome::Scrolled
        );
        assert_eq!(
            service.scroll_to_anchor("missing", ScrollBehavior::Smooth),
            ScrollOutcome::AnchorMissing
        );
        assert_eq!(
            service.history(),
            vec![("live".to_string(), ScrollBehavior::Smooth)]
        );
    }
}
