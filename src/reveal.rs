use std::collections::BTreeSet;

use crate::page::{Page, REVEAL_CLASS};

/// Fraction of an element's area that must be inside the viewport
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Lifecycle of a reveal-eligible element. `Entered` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    UnwatchedPending,
    WatchedPending,
    Entered,
}

/// One viewport observation of a watched element
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: String,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(target: impl Into<String>, ratio: f64) -> Self {
        IntersectionEntry {
            target: target.into(),
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }
}

/// Shared viewport-intersection watcher
///
/// Targets are unobserved as soon as they fire, so the watched set only
/// shrinks once setup is done.
#[derive(Debug, Clone)]
pub struct RevealWatcher {
    threshold: f64,
    watched: BTreeSet<String>,
}

impl RevealWatcher {
    pub fn new(threshold: f64) -> Self {
        RevealWatcher {
            threshold,
            watched: BTreeSet::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn observe(&mut self, target: impl Into<String>) {
        self.watched.insert(target.into());
    }

    pub fn unobserve(&mut self, target: &str) -> bool {
        self.watched.remove(target)
    }

    pub fn is_watching(&self, target: &str) -> bool {
        self.watched.contains(target)
    }

    pub fn watched_len(&self) -> usize {
        self.watched.len()
    }

    /// Process one batch of observations and return the targets that entered.
    ///
    /// Every returned target has been unobserved.
    pub fn handle(&mut self, entries: &[IntersectionEntry]) -> Vec<String> {
        let mut entered = Vec::new();
        for entry in entries {
            if !entry.is_intersecting || entry.ratio < self.threshold {
                continue;
            }
            if self.unobserve(&entry.target) {
                entered.push(entry.target.clone());
            }
        }
        entered
    }
}

/// Watch every reveal-eligible element of the page with one shared watcher.
///
/// A page that already has a watcher keeps it.
pub fn setup_reveal(page: &mut Page) {
    if page.watcher().is_some() {
        tracing::debug!("Reveal watcher already attached");
        return;
    }

    let mut watcher = RevealWatcher::new(REVEAL_THRESHOLD);

    for element in page.reveal_elements_mut() {
        if element.state == RevealState::UnwatchedPending {
            watcher.observe(element.id.clone());
            element.state = RevealState::WatchedPending;
        }
    }

    tracing::debug!(
        "Watching {} '{}' elements at threshold {}",
        watcher.watched_len(),
        REVEAL_CLASS,
        watcher.threshold()
    );
    page.attach_watcher(watcher);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_page() -> Page {
        let mut page = Page::docs();
        page.ready();
        page
    }

    #[test]
    fn test_setup_watches_all_reveal_elements() {
        let page = ready_page();
        let watcher = page.watcher().unwrap();
        assert_eq!(watcher.watched_len(), 3);
        assert_eq!(watcher.threshold(), REVEAL_THRESHOLD);
        for id in ["hero", "web-section", "api-section"] {
            assert!(watcher.is_watching(id));
            assert_eq!(page.reveal_state(id), Some(RevealState::WatchedPending));
        }
    }

    #[test]
    fn test_below_threshold_does_not_enter() {
        let mut page = ready_page();
        page.intersect(&[IntersectionEntry::new("hero", 0.1)]);
        assert_eq!(page.reveal_state("hero"), Some(RevealState::WatchedPending));
        assert!(page.watcher().unwrap().is_watching("hero"));
    }

    #[test]
    fn test_crossing_threshold_enters_and_unwatches() {
        let mut page = ready_page();
        page.intersect(&[
            IntersectionEntry::new("hero", 0.2),
            IntersectionEntry::new("web-section", 0.05),
        ]);

        assert_eq!(page.reveal_state("hero"), Some(RevealState::Entered));
        assert_eq!(page.reveal_state("web-section"), Some(RevealState::WatchedPending));
        let watcher = page.watcher().unwrap();
        assert!(!watcher.is_watching("hero"));
        assert_eq!(watcher.watched_len(), 2);
    }

    #[test]
    fn test_entered_is_terminal() {
        let mut page = ready_page();
        page.intersect(&[IntersectionEntry::new("api-section", 0.9)]);
        page.intersect(&[IntersectionEntry::new("api-section", 0.0)]);
        page.intersect(&[IntersectionEntry::new("api-section", 1.0)]);
        assert_eq!(page.reveal_state("api-section"), Some(RevealState::Entered));
    }

    #[test]
    fn test_watcher_fires_once_per_target() {
        let mut watcher = RevealWatcher::new(REVEAL_THRESHOLD);
        watcher.observe("a");
        let batch = [IntersectionEntry::new("a", 0.5), IntersectionEntry::new("a", 0.7)];
        assert_eq!(watcher.handle(&batch), vec!["a".to_string()]);
        assert!(watcher.handle(&batch).is_empty());
        assert_eq!(watcher.watched_len(), 0);
    }

    #[test]
    fn test_not_intersecting_entries_ignored() {
        let mut watcher = RevealWatcher::new(REVEAL_THRESHOLD);
        watcher.observe("a");
        let leaving = IntersectionEntry {
            target: "a".to_string(),
            ratio: 0.5,
            is_intersecting: false,
        };
        assert!(watcher.handle(&[leaving]).is_empty());
        assert!(watcher.is_watching("a"));
    }

    #[test]
    fn test_unknown_targets_ignored() {
        let mut page = ready_page();
        page.intersect(&[IntersectionEntry::new("footer", 1.0)]);
        assert_eq!(page.reveal_state("footer"), None);
        assert_eq!(page.watcher().unwrap().watched_len(), 3);
    }

    #[test]
    fn test_second_ready_keeps_watcher() {
        let mut page = ready_page();
        page.intersect(&[IntersectionEntry::new("web-section", 0.5)]);
        page.ready();

        let watcher = page.watcher().unwrap();
        assert_eq!(watcher.watched_len(), 2);
        assert!(!watcher.is_watching("web-section"));

        page.intersect(&[IntersectionEntry::new("hero", 1.0)]);
        assert_eq!(page.reveal_state("hero"), Some(RevealState::Entered));
        assert_eq!(page.reveal_state("web-section"), Some(RevealState::Entered));
        assert_eq!(page.reveal_state("api-section"), Some(RevealState::WatchedPending));
    }

    #[test]
    fn test_page_without_reveal_elements() {
        let mut page = Page::new();
        setup_reveal(&mut page);
        page.intersect(&[IntersectionEntry::new("hero", 1.0)]);
        assert_eq!(page.watcher().unwrap().watched_len(), 0);
    }

    #[test]
    fn test_intersect_before_setup_is_noop() {
        let mut page = Page::docs();
        page.intersect(&[IntersectionEntry::new("hero", 1.0)]);
        assert_eq!(page.reveal_state("hero"), Some(RevealState::UnwatchedPending));
    }
}
