use dioxus::prelude::*;
use feedback_spots_engine::{FieldTarget, Node, Tag, UiAction};

/// Renders one node of the widget tree and its children as real elements.
///
/// Clicks are reported as the node's [`UiAction`]; textarea input is
/// reported with the draft the textarea is bound to.
#[component]
pub fn NodeView(
    node: Node,
    on_action: EventHandler<UiAction>,
    on_input: EventHandler<(FieldTarget, String)>,
) -> Element {
    let class = (!node.classes.is_empty()).then(|| node.class_list());
    let style = node.style.clone();
    let id = node.attribute("id").map(str::to_string);
    let action = node.on_click;
    let stops_propagation = node.stops_propagation;
    let prevents_default = node.prevents_default;

    let onclick = move |evt: MouseEvent| {
        if prevents_default {
            evt.prevent_default();
        }
        if stops_propagation {
            evt.stop_propagation();
        }
        if let Some(action) = action {
            on_action.call(action);
        }
    };

    let text = node.text.clone();
    let children = rsx! {
        for child in node.children.iter().cloned() {
            NodeView { node: child, on_action, on_input }
        }
    };

    match node.tag {
        Tag::Div => rsx! {
            div { id, class, style, onclick: onclick,
                if let Some(text) = text {
                    "{text}"
                }
                {children}
            }
        },
        Tag::Anchor => {
            let href = node.attribute("href").map(str::to_string);
            let role = node.attribute("role").map(str::to_string);
            rsx! {
                a { id, class, style, href, role, onclick: onclick,
                    if let Some(text) = text {
                        "{text}"
                    }
                    {children}
                }
            }
        }
        Tag::Label => rsx! {
            label { id, class, style,
                if let Some(text) = text {
                    "{text}"
                }
            }
        },
        Tag::TextArea => {
            let binding = node.binding;
            rsx! {
                textarea { id, class, style,
                    value: text.unwrap_or_default(),
                    oninput: move |evt: FormEvent| {
                        if let Some(target) = binding {
                            on_input.call((target, evt.value()));
                        }
                    },
                }
            }
        }
        Tag::Button => rsx! {
            button { id, class, style, r#type: "button", onclick: onclick,
                if let Some(text) = text {
                    "{text}"
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use feedback_spots_engine::{SpotId, classes};

    #[component]
    fn Harness(node: Node) -> Element {
        rsx! {
            NodeView {
                node,
                on_action: |_: UiAction| {},
                on_input: |_: (FieldTarget, String)| {},
            }
        }
    }

    fn render_node(node: Node) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { node });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_div_carries_classes_and_text() {
        let html = render_node(
            Node::div()
                .class(classes::FEEDBACK_TEXT)
                .text("Move this up")
                .child(Node::div().class(classes::FEEDBACK_INFO).text("By bob")),
        );

        assert!(html.contains(r#"class="feedback-text""#));
        assert!(html.contains("Move this up"));
        assert!(html.contains(r#"class="feedback-info""#));
        assert!(html.contains("By bob"));
    }

    #[test]
    fn test_anchor_attributes() {
        let html = render_node(
            Node::new(Tag::Anchor)
                .class(classes::REPLY_BUTTON)
                .attr("role", "button")
                .attr("href", "#")
                .text("Reply"),
        );

        assert!(html.contains("<a "));
        assert!(html.contains(r##"href="#""##));
        assert!(html.contains(r#"role="button""#));
    }

    #[test]
    fn test_textarea_shows_draft() {
        let spot = SpotId::new();
        let html = render_node(
            Node::new(Tag::TextArea)
                .text("half written")
                .bind(FieldTarget::Comment(spot)),
        );

        assert!(html.contains("<textarea"));
        assert!(html.contains("half written"));
    }

    #[test]
    fn test_button_type() {
        let html = render_node(
            Node::new(Tag::Button)
                .class(classes::SAVE_BUTTON)
                .text("Save"),
        );

        assert!(html.contains(r#"type="button""#));
        assert!(html.contains(r#"class="save-button""#));
    }
}
