use crate::page::{API_CONTAINER, FILTER_INPUT, Page};
use crate::render::RouteCard;

/// Subscription of the filter controller to the filter input's change stream
///
/// Only cards of `container_id` are re-evaluated; other containers are
/// outside the subscription's scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSubscription {
    pub container_id: &'static str,
}

impl FilterSubscription {
    /// Re-derive visibility of every card in scope from the raw input value
    pub fn on_input(&self, page: &mut Page, raw: &str) {
        let term = filter_term(raw);
        let Some(container) = page.container_mut(self.container_id) else {
            return;
        };

        let mut shown = 0;
        for card in &mut container.cards {
            card.visible = matches(card, &term);
            if card.visible {
                shown += 1;
            }
        }

        tracing::debug!(
            "Filter '{}' shows {}/{} cards in '{}'",
            term,
            shown,
            container.cards.len(),
            self.container_id
        );
    }
}

/// Trimmed, lowercased filter term
pub fn filter_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Substring test against the card's lowercased path and summary.
/// The empty term matches every card.
pub fn matches(card: &RouteCard, term: &str) -> bool {
    card.path_tag.contains(term) || card.summary_tag.contains(term)
}

/// Attach the filter controller to the page's filter input.
///
/// A page without a filter input is left untouched.
pub fn setup_filter(page: &mut Page) {
    if page.filter_input(FILTER_INPUT).is_none() {
        tracing::debug!("No '{}' input, filter disabled", FILTER_INPUT);
        return;
    }

    page.subscribe_filter(FilterSubscription {
        container_id: API_CONTAINER,
    });
}
