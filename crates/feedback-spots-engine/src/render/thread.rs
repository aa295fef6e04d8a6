use crate::models::{Comment, Reply, SpotId, TextField};
use crate::render::{FieldTarget, Node, Tag, UiAction, classes};
use crate::session::DatetimeDisplay;

/// A comment with its attribution, reply button and replies.
///
/// `reply_form` is the open reply draft for this comment, rendered after the
/// existing replies.
pub fn render_text(
    spot: SpotId,
    index: usize,
    comment: &Comment,
    reply_form: Option<&TextField>,
    display: &DatetimeDisplay,
) -> Node {
    let reply_button = Node::new(Tag::Anchor)
        .class(classes::REPLY_BUTTON)
        .text("Reply")
        .attr("role", "button")
        .attr("href", "#")
        .prevent_default()
        .on_click(UiAction::OpenReplyForm {
            spot,
            comment: index,
        });

    let replies = Node::div()
        .class(classes::REPLIES_CONTAINER)
        .children(
            comment
                .replies
                .iter()
                .map(|reply| render_reply(reply, display)),
        )
        .children(reply_form.map(|field| {
            render_text_field(
                field,
                FieldTarget::Reply {
                    spot,
                    comment: index,
                },
            )
        }));

    Node::div()
        .class(classes::FEEDBACK_TEXT)
        .text(comment.text.clone())
        .child(render_attribution(
            comment.user.as_deref(),
            &comment.datetime,
            display,
        ))
        .child(reply_button)
        .child(replies)
}

pub fn render_reply(reply: &Reply, display: &DatetimeDisplay) -> Node {
    Node::div()
        .class(classes::REPLY_CONTAINER)
        .child(
            Node::div()
                .class(classes::FEEDBACK_REPLY)
                .text(reply.text.clone()),
        )
        .child(render_attribution(
            reply.user.as_deref(),
            &reply.datetime,
            display,
        ))
}

pub fn render_attribution(user: Option<&str>, datetime: &str, display: &DatetimeDisplay) -> Node {
    Node::div()
        .class(classes::FEEDBACK_INFO)
        .text(display.attribution(user, datetime))
}

/// Label, textarea and cancel/save buttons editing the draft at `target`
pub fn render_text_field(field: &TextField, target: FieldTarget) -> Node {
    Node::div()
        .child(Node::new(Tag::Label).text(field.label.clone()))
        .child(
            Node::new(Tag::TextArea)
                .text(field.value.clone())
                .bind(target),
        )
        .child(
            Node::div()
                .class(classes::BUTTON_HOLDER)
                .child(
                    Node::new(Tag::Button)
                        .class(classes::CANCEL_BUTTON)
                        .text("Cancel")
                        .on_click(target.cancel_action()),
                )
                .child(
                    Node::new(Tag::Button)
                        .class(classes::SAVE_BUTTON)
                        .text("Save")
                        .on_click(target.save_action()),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const WHEN: &str = "2024-01-02T03:04:05.678Z";

    fn reply(user: Option<&str>, text: &str) -> Reply {
        Reply {
            datetime: WHEN.to_string(),
            user: user.map(str::to_string),
            text: text.to_string(),
        }
    }

    fn comment(replies: Vec<Reply>) -> Comment {
        Comment {
            datetime: WHEN.to_string(),
            user: Some("alice".to_string()),
            text: "Button is misaligned".to_string(),
            replies,
        }
    }

    #[test]
    fn test_render_reply_structure() {
        let node = render_reply(&reply(Some("bob"), "Fixed"), &DatetimeDisplay::utc());

        assert_eq!(node.class_list(), "reply-container");
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].class_list(), "feedback-reply");
        assert_eq!(node.children[0].text.as_deref(), Some("Fixed"));
        assert_eq!(
            node.children[1].text.as_deref(),
            Some("By bob at 1/2/2024, 3:04:05 AM")
        );
    }

    #[test]
    fn test_render_reply_unknown_user() {
        let node = render_reply(&reply(None, "?"), &DatetimeDisplay::utc());

        let info = node.find(classes::FEEDBACK_INFO).unwrap();
        assert_eq!(
            info.text.as_deref(),
            Some("By unknown user at 1/2/2024, 3:04:05 AM")
        );
    }

    #[test]
    fn test_render_text_structure() {
        let spot = SpotId::new();
        let node = render_text(
            spot,
            0,
            &comment(vec![reply(None, "one"), reply(None, "two")]),
            None,
            &DatetimeDisplay::utc(),
        );

        assert_eq!(node.class_list(), "feedback-text");
        assert_eq!(node.text.as_deref(), Some("Button is misaligned"));

        let child_classes: Vec<_> = node.children.iter().map(Node::class_list).collect();
        assert_eq!(
            child_classes,
            vec!["feedback-info", "reply-button", "replies-container"]
        );

        let button = &node.children[1];
        assert_eq!(button.tag, Tag::Anchor);
        assert_eq!(button.attribute("role"), Some("button"));
        assert_eq!(button.attribute("href"), Some("#"));
        assert!(button.prevents_default);
        assert_eq!(
            button.on_click,
            Some(UiAction::OpenReplyForm { spot, comment: 0 })
        );

        let replies = node.find_all(classes::REPLY_CONTAINER);
        assert_eq!(replies.len(), 2);
        assert!(node.fields().is_empty());
    }

    #[test]
    fn test_render_text_without_replies_keeps_container() {
        let node = render_text(SpotId::new(), 0, &comment(vec![]), None, &DatetimeDisplay::utc());

        let container = node.find(classes::REPLIES_CONTAINER).unwrap();
        assert!(container.children.is_empty());
    }

    #[test]
    fn test_reply_form_follows_replies() {
        let spot = SpotId::new();
        let mut draft = TextField::new("Reply:");
        draft.value = "half written".to_string();

        let node = render_text(
            spot,
            3,
            &comment(vec![reply(None, "one")]),
            Some(&draft),
            &DatetimeDisplay::utc(),
        );

        let replies = node.find(classes::REPLIES_CONTAINER).unwrap();
        assert_eq!(replies.children.len(), 2);
        assert_eq!(replies.children[0].class_list(), "reply-container");

        let textarea = replies.children[1].fields()[0];
        assert_eq!(textarea.text.as_deref(), Some("half written"));
        assert_eq!(
            textarea.binding,
            Some(FieldTarget::Reply { spot, comment: 3 })
        );
    }

    #[test]
    fn test_render_text_field_structure() {
        let spot = SpotId::new();
        let node = render_text_field(&TextField::new("Comment:"), FieldTarget::Comment(spot));

        insta::assert_snapshot!(node.outline().trim_end(), @r#"
        div
          label "Comment:"
          textarea ""
          div.button-holder
            button.cancel-button "Cancel"
            button.save-button "Save"
        "#);

        let holder = node.find(classes::BUTTON_HOLDER).unwrap();
        assert_eq!(
            holder.children[0].on_click,
            Some(UiAction::CancelComment(spot))
        );
        assert_eq!(holder.children[1].on_click, Some(UiAction::SaveComment(spot)));
    }
}
