use crate::dom::{Node, escape};
use crate::filter::{FilterSubscription, setup_filter};
use crate::registry::{API_ROUTES, WEB_ROUTES};
use crate::render::{RouteCard, render_routes};
use crate::reveal::{IntersectionEntry, RevealState, RevealWatcher, setup_reveal};

pub const WEB_CONTAINER: &str = "web-routes";
pub const API_CONTAINER: &str = "api-routes";
pub const FILTER_INPUT: &str = "route-filter";
pub const REVEAL_CLASS: &str = "reveal";
pub const ENTERED_CLASS: &str = "in";

const STYLE: &str = include_str!("page.css");

/// Host element holding rendered cards
#[derive(Debug, Clone, Default)]
pub struct Container {
    pub id: String,
    pub cards: Vec<RouteCard>,
}

impl Container {
    fn to_node(&self) -> Node {
        self.cards.iter().fold(
            Node::new("div").class("route-list").attr("id", self.id.clone()),
            |list, card| list.child(card.display_node()),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct RevealElement {
    pub id: String,
    pub state: RevealState,
}

impl RevealElement {
    fn mark_entered(&mut self) {
        self.state = RevealState::Entered;
    }
}

/// In-memory documentation page
///
/// Everything the rendering script needs from its host: containers by id,
/// the filter input, reveal-eligible elements and the active subscriptions.
/// All mutation goes through `&mut self`, one event at a time.
#[derive(Debug, Clone, Default)]
pub struct Page {
    containers: Vec<Container>,
    filter_input: Option<TextInput>,
    reveal_elements: Vec<RevealElement>,
    filter_subscription: Option<FilterSubscription>,
    watcher: Option<RevealWatcher>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard documentation host
    pub fn docs() -> Self {
        Page::new()
            .with_reveal_element("hero")
            .with_reveal_element("web-section")
            .with_reveal_element("api-section")
            .with_container(WEB_CONTAINER)
            .with_container(API_CONTAINER)
            .with_filter_input(FILTER_INPUT)
    }

    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.containers.push(Container {
            id: id.into(),
            cards: Vec::new(),
        });
        self
    }

    pub fn with_filter_input(mut self, id: impl Into<String>) -> Self {
        self.filter_input = Some(TextInput {
            id: id.into(),
            value: String::new(),
        });
        self
    }

    pub fn with_reveal_element(mut self, id: impl Into<String>) -> Self {
        self.reveal_elements.push(RevealElement {
            id: id.into(),
            state: RevealState::UnwatchedPending,
        });
        self
    }

    /// Page-ready wiring: render both registries, then attach the controllers
    pub fn ready(&mut self) {
        render_routes(self, &WEB_ROUTES, WEB_CONTAINER);
        render_routes(self, &API_ROUTES, API_CONTAINER);
        setup_filter(self);
        setup_reveal(self);
    }

    /// Set the filter input's value and notify its subscriber
    pub fn input(&mut self, value: &str) {
        let Some(input) = self.filter_input.as_mut() else {
            return;
        };
        input.value = value.to_string();

        if let Some(subscription) = self.filter_subscription {
            subscription.on_input(self, value);
        }
    }

    /// Deliver one batch of viewport observations to the reveal watcher
    pub fn intersect(&mut self, entries: &[IntersectionEntry]) {
        let Some(watcher) = self.watcher.as_mut() else {
            return;
        };

        for target in watcher.handle(entries) {
            if let Some(element) = self.reveal_elements.iter_mut().find(|e| e.id == target) {
                element.mark_entered();
                tracing::debug!("Revealed '{}'", target);
            }
        }
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.id == id)
    }

    pub fn filter_input(&self, id: &str) -> Option<&TextInput> {
        self.filter_input.as_ref().filter(|input| input.id == id)
    }

    pub fn reveal_state(&self, id: &str) -> Option<RevealState> {
        self.reveal_elements
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.state)
    }

    pub fn reveal_elements_mut(&mut self) -> impl Iterator<Item = &mut RevealElement> {
        self.reveal_elements.iter_mut()
    }

    pub fn watcher(&self) -> Option<&RevealWatcher> {
        self.watcher.as_ref()
    }

    pub(crate) fn subscribe_filter(&mut self, subscription: FilterSubscription) {
        self.filter_subscription = Some(subscription);
    }

    pub(crate) fn attach_watcher(&mut self, watcher: RevealWatcher) {
        self.watcher = Some(watcher);
    }

    /// Serialize the page as a complete HTML document.
    ///
    /// Parts of the layout whose host element is missing are left out.
    pub fn to_html(&self, title: &str) -> String {
        let mut out = String::with_capacity(32 * 1024);
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str(&format!("<title>{}</title>\n", escape(title)));
        out.push_str(&format!("<style>\n{}</style>\n</head>\n<body>\n", STYLE));

        self.reveal_node("header", "hero")
            .child(Node::new("h1").text(title))
            .child(Node::new("p").text(
                "Pages and endpoints exposed by the whiskey tasting application.",
            ))
            .write_html(&mut out);
        out.push('\n');

        let mut web = self
            .reveal_node("section", "web-section")
            .child(Node::new("h2").text("Web routes"));
        if let Some(container) = self.container(WEB_CONTAINER) {
            web = web.child(container.to_node());
        }
        web.write_html(&mut out);
        out.push('\n');

        let mut api = self
            .reveal_node("section", "api-section")
            .child(Node::new("h2").text("API routes"));
        if let Some(input) = &self.filter_input {
            api = api.child(
                Node::new("form")
                    .attr("method", "get")
                    .attr("action", "/")
                    .child(
                        Node::new("input")
                            .attr("id", input.id.clone())
                            .attr("name", "q")
                            .attr("type", "search")
                            .attr("placeholder", "Filter API routes")
                            .attr("value", input.value.clone()),
                    ),
            );
        }
        if let Some(container) = self.container(API_CONTAINER) {
            api = api.child(container.to_node());
        }
        api.write_html(&mut out);
        out.push('\n');

        out.push_str("</body>\n</html>\n");
        out
    }

    fn reveal_node(&self, tag: &'static str, id: &str) -> Node {
        let node = Node::new(tag).attr("id", id);
        match self.reveal_state(id) {
            Some(RevealState::Entered) => node.class(REVEAL_CLASS).class(ENTERED_CLASS),
            Some(_) => node.class(REVEAL_CLASS),
            None => node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::IntersectionEntry;

    #[test]
    fn test_ready_renders_both_registries_in_order() {
        let mut page = Page::docs();
        page.ready();

        let web = page.container(WEB_CONTAINER).unwrap();
        assert_eq!(web.cards.len(), 9);
        for (card, route) in web.cards.iter().zip(WEB_ROUTES.iter()) {
            assert_eq!(card.path_tag, route.path.to_lowercase());
        }

        let api = page.container(API_CONTAINER).unwrap();
        assert_eq!(api.cards.len(), 19);
        for (card, route) in api.cards.iter().zip(API_ROUTES.iter()) {
            assert_eq!(card.path_tag, route.path.to_lowercase());
        }
    }

    #[test]
    fn test_ready_twice_is_idempotent() {
        let mut page = Page::docs();
        page.ready();
        let first = page.to_html("Routes");
        page.ready();
        assert_eq!(page.to_html("Routes"), first);
        assert_eq!(page.container(API_CONTAINER).unwrap().cards.len(), 19);
    }

    #[test]
    fn test_input_without_filter_input_is_noop() {
        let mut page = Page::new().with_container(API_CONTAINER);
        page.ready();
        page.input("event");
        assert!(page.filter_input(FILTER_INPUT).is_none());
        assert!(page.container(API_CONTAINER).unwrap().cards.iter().all(|c| c.visible));
    }

    #[test]
    fn test_input_records_value() {
        let mut page = Page::docs();
        page.ready();
        page.input("  Event");
        assert_eq!(page.filter_input(FILTER_INPUT).unwrap().value, "  Event");
    }

    #[test]
    fn test_html_document_contains_all_cards() {
        let mut page = Page::docs();
        page.ready();
        let html = page.to_html("Whiskey <Routes>");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Whiskey &lt;Routes&gt;</title>"));
        assert_eq!(html.matches("<article class=\"route-card\"").count(), 28);
        assert!(html.contains("id=\"web-routes\"><article"));
        assert!(html.contains("id=\"route-filter\""));
        assert!(!html.contains(" hidden=\"\""));
    }

    #[test]
    fn test_html_reflects_filter_and_reveal_state() {
        let mut page = Page::docs();
        page.ready();
        page.input("event");
        page.intersect(&[IntersectionEntry::new("hero", 0.5)]);
        let html = page.to_html("Routes");

        let hidden = page
            .container(API_CONTAINER)
            .unwrap()
            .cards
            .iter()
            .filter(|c| !c.visible)
            .count();
        assert!(hidden > 0);
        assert_eq!(html.matches(" hidden=\"\"").count(), hidden);
        assert!(html.contains("<header class=\"reveal in\" id=\"hero\">"));
        assert!(html.contains("<section class=\"reveal\" id=\"web-section\">"));
        assert!(html.contains("value=\"event\""));
    }

    #[test]
    fn test_html_omits_missing_host_elements() {
        let mut page = Page::new().with_container(WEB_CONTAINER);
        page.ready();
        let html = page.to_html("Routes");
        assert!(!html.contains("route-filter"));
        assert!(!html.contains("id=\"api-routes\""));
        assert_eq!(html.matches("<article").count(), 9);
    }
}
