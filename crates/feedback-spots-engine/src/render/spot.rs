use crate::models::Marker;
use crate::render::{Node, UiAction, classes};

/// Absolutely positioned marker, optionally holding its info box
pub fn render_marker(marker: &Marker, active: bool, info_box: Option<Node>) -> Node {
    let mut node = Node::div().class(classes::FEEDBACK_SPOT);
    if active {
        node = node.class(classes::ACTIVE);
    }
    node.attr("id", marker.id.to_string())
        .style(format!("top: {}px; left: {}px;", marker.top, marker.left))
        .on_click(UiAction::ClickSpot(marker.id))
        .stop_propagation()
        .children(info_box)
}

/// Popup box around a `feedback-container`. Clicks inside never reach the marker.
pub fn render_box(toggled: bool, contents: impl IntoIterator<Item = Node>) -> Node {
    let mut node = Node::div().class(classes::FEEDBACK_BOX);
    if toggled {
        node = node.class(classes::TOGGLED);
    }
    node.stop_propagation().child(
        Node::div()
            .class(classes::FEEDBACK_CONTAINER)
            .children(contents),
    )
}
