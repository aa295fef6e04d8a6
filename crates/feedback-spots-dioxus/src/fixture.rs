use anyhow::Context;
use feedback_spots_engine::{SpotPayload, StaticLayout};
use serde::Deserialize;
use std::path::Path;

/// Page description loaded by the desktop host: the containers it lays out
/// and the spots placed over them.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Fixture {
    /// Selector to page geometry
    #[serde(default)]
    pub containers: StaticLayout,
    #[serde(default)]
    pub spots: Vec<FixtureSpot>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FixtureSpot {
    #[serde(flatten)]
    pub payload: SpotPayload,
    /// Show the thread in an always-open box without authoring controls
    #[serde(default)]
    pub read_only: bool,
}

impl Fixture {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid fixture JSON")
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Failed to load {}", path.display()))
    }
}
