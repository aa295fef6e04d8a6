pub mod position;
pub mod record;
pub mod spot;

pub use position::{ContainerSize, PositionDescriptor, Positioning};
pub use record::{Comment, Reply, TextField};
pub use spot::{Marker, SpotId, SpotPayload};
