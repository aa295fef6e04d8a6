use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Page geometry of a resolved container element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerRect {
    /// Page relative x offset of the element
    pub x: f64,
    /// Page relative y offset of the element
    pub y: f64,
    /// Current rendered width
    pub width: f64,
    /// Current rendered height
    pub height: f64,
}

impl ContainerRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Resolves container selectors against whatever UI layer hosts the widget
pub trait PageLayout {
    /// Geometry of the single element matching `selector`, if there is one
    fn resolve(&self, selector: &str) -> Option<ContainerRect>;
}

/// Layout backed by a fixed selector table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticLayout {
    containers: HashMap<String, ContainerRect>,
}

impl StaticLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, selector: impl Into<String>, rect: ContainerRect) -> Self {
        self.insert(selector, rect);
        self
    }

    /// Register or replace the geometry of a container, e.g. after a resize
    pub fn insert(&mut self, selector: impl Into<String>, rect: ContainerRect) {
        self.containers.insert(selector.into(), rect);
    }

    pub fn containers(&self) -> impl Iterator<Item = (&str, &ContainerRect)> {
        self.containers.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl PageLayout for StaticLayout {
    fn resolve(&self, selector: &str) -> Option<ContainerRect> {
        self.containers.get(selector).copied()
    }
}
