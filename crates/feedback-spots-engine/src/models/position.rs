use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a marker should be anchored, as supplied by the host page.
///
/// `positioning` is kept as the raw string from the host so that an
/// unrecognised mode can be reported when the marker is placed rather than
/// when the payload is deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionDescriptor {
    /// Selector of the element the marker is placed over
    pub container: String,
    /// `"pixel"` or `"percent"`
    pub positioning: String,
    /// Horizontal and vertical offset from the container's top left corner
    pub offset: [f64; 2],
    /// Container size the offset was captured against (percent mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_size: Option<ContainerSize>,
}

impl PositionDescriptor {
    pub fn pixel(container: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            container: container.into(),
            positioning: Positioning::Pixel.to_string(),
            offset: [x, y],
            container_size: None,
        }
    }

    pub fn percent(container: impl Into<String>, x: f64, y: f64, size: ContainerSize) -> Self {
        Self {
            container: container.into(),
            positioning: Positioning::Percent.to_string(),
            offset: [x, y],
            container_size: Some(size),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// How a descriptor's offset is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    /// Offset is a literal pixel distance
    Pixel,
    /// Offset is relative to `container_size` and rescaled to the rendered size
    Percent,
}

impl FromStr for Positioning {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pixel" => Ok(Positioning::Pixel),
            "percent" => Ok(Positioning::Percent),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Positioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Positioning::Pixel => f.write_str("pixel"),
            Positioning::Percent => f.write_str("percent"),
        }
    }
}
