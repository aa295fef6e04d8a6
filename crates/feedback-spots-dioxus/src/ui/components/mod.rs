pub mod host_container;
pub mod node_view;

pub use host_container::HostContainer;
pub use node_view::NodeView;
