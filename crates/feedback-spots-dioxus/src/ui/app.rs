use crate::fixture::Fixture;
use crate::state::PageState;
use dioxus::prelude::*;
use feedback_spots_engine::{
    ContainerRect, DatetimeDisplay, FeedbackEvent, FieldTarget, Session, UiAction,
};

const FEEDBACK_CSS: &str = include_str!("../assets/feedback.css");

#[component]
pub fn App(fixture: Fixture, current_user: Option<String>, display: DatetimeDisplay) -> Element {
    let mut state = use_signal(|| {
        PageState::build(&fixture, Session::new(current_user.clone()), display.clone())
    });

    let nodes = state.read().nodes();
    let errors = state.read().errors().to_vec();
    let event_names: Vec<&'static str> = state
        .read()
        .events()
        .iter()
        .map(FeedbackEvent::name)
        .collect();
    let mut containers: Vec<(String, ContainerRect)> = state
        .read()
        .layout()
        .containers()
        .map(|(selector, rect)| (selector.to_string(), *rect))
        .collect();
    containers.sort_by(|a, b| a.0.cmp(&b.0));

    rsx! {
        style { {FEEDBACK_CSS} }
        div {
            class: "page",
            // Spots and boxes stop propagation, so only background clicks land here
            onclick: move |_| state.write().close_info_box(),
            for (selector, rect) in containers {
                super::components::HostContainer { selector, rect }
            }
            for node in nodes {
                super::components::NodeView {
                    node,
                    on_action: move |action: UiAction| {
                        if let Err(e) = state.write().dispatch(action) {
                            log::warn!("Ignoring {action:?}: {e}");
                        }
                    },
                    on_input: move |(target, text): (FieldTarget, String)| {
                        if let Err(e) = state.write().set_draft(target, text) {
                            log::warn!("Dropping input for {target:?}: {e}");
                        }
                    }
                }
            }
        }
        div {
            class: "sidebar",
            if !errors.is_empty() {
                h2 { "Spots not shown" }
                ul {
                    class: "page-errors",
                    for error in errors {
                        li { "{error}" }
                    }
                }
            }
            h2 { "Events" }
            if event_names.is_empty() {
                p { class: "event-log-empty", "No events yet" }
            } else {
                ol {
                    class: "event-log",
                    for name in event_names {
                        li { "{name}" }
                    }
                }
            }
        }
    }
}
