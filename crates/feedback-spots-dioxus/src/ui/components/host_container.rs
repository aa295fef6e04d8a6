use dioxus::prelude::*;
use feedback_spots_engine::ContainerRect;

/// Placeholder for a page element spots are positioned over
#[component]
pub fn HostContainer(selector: String, rect: ContainerRect) -> Element {
    let style = format!(
        "left: {}px; top: {}px; width: {}px; height: {}px;",
        rect.x, rect.y, rect.width, rect.height
    );

    rsx! {
        div {
            class: "host-container",
            style: "{style}",
            span { class: "host-container-label", "{selector}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_host_container_geometry() {
        let mut dom = VirtualDom::new_with_props(
            HostContainer,
            HostContainerProps {
                selector: "#hero".to_string(),
                rect: ContainerRect::new(100.0, 50.0, 800.0, 400.0),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("left: 100px; top: 50px; width: 800px; height: 400px;"));
        assert!(html.contains("#hero"));
    }
}
