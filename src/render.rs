use crate::dom::Node;
use crate::models::RouteDescriptor;
use crate::page::Page;

/// Rendered display representation of one route descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCard {
    pub node: Node,
    /// Lowercased path, used by the filter
    pub path_tag: String,
    /// Lowercased summary, used by the filter
    pub summary_tag: String,
    pub visible: bool,
}

impl RouteCard {
    /// The `div.meta` sub-node
    pub fn meta(&self) -> Option<&Node> {
        self.node.elements().find(|n| n.has_class("meta"))
    }

    /// The card node as displayed, carrying `hidden` when filtered out
    pub fn display_node(&self) -> Node {
        if self.visible {
            self.node.clone()
        } else {
            self.node.clone().attr("hidden", "")
        }
    }
}

/// Build the card for one route. Pure; the card is not attached anywhere.
pub fn render_route_card(route: &RouteDescriptor) -> RouteCard {
    let path_tag = route.path.to_lowercase();
    let summary_tag = route.summary.to_lowercase();

    let header = Node::new("div")
        .class("route-header")
        .child(Node::new("span").class("method").text(route.method.as_str()))
        .child(Node::new("span").class("path").text(route.path));

    let summary = Node::new("div").text(route.summary);

    let meta = [
        ("Params:", route.params),
        ("Returns:", route.returns),
        ("Notes:", route.notes),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .fold(Node::new("div").class("meta"), |meta, (label, value)| {
        meta.child(
            Node::new("div")
                .child(Node::new("span").text(label))
                .text(format!(" {}", value)),
        )
    });

    let node = Node::new("article")
        .class("route-card")
        .attr("data-path", path_tag.clone())
        .attr("data-summary", summary_tag.clone())
        .child(header)
        .child(summary)
        .child(meta);

    RouteCard {
        node,
        path_tag,
        summary_tag,
        visible: true,
    }
}

/// Replace the cards of `container_id` with one card per route, in order.
///
/// A missing container is a silent no-op.
pub fn render_routes(page: &mut Page, routes: &[RouteDescriptor], container_id: &str) {
    let Some(container) = page.container_mut(container_id) else {
        tracing::debug!("Container '{}' not present, skipping render", container_id);
        return;
    };

    container.cards.clear();
    container.cards.extend(routes.iter().map(render_route_card));

    tracing::debug!(
        "Rendered {} cards into '{}'",
        container.cards.len(),
        container_id
    );
}
