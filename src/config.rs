//! Render configuration: the column names read from the export and the
//! site-generator placeholders written into the output.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::info;

/// Column headers of the submission export.
///
/// The defaults are the scheduled-conference export (`Privacy: Bio`).
/// Older exports name the privacy flag `Bio`; select that explicitly.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Columns {
    pub title: String,
    pub speaker: String,
    pub session: String,
    pub timeslot: String,
    pub room: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub bio: String,
    pub faith: String,
    pub active: String,
    pub bio_privacy: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            title: "Talk Title".into(),
            speaker: "Full Name".into(),
            session: "Session".into(),
            timeslot: "Timeslot".into(),
            room: "Room".into(),
            abstract_text: "Talk Abstract".into(),
            bio: "Professional Bio".into(),
            faith: "Statement of Faith".into(),
            active: "Active".into(),
            bio_privacy: "Privacy: Bio".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Front-matter `layout` of every talk page.
    pub layout: String,
    /// Prefix of index links, left for the site generator to expand.
    pub base_url: String,
    /// Path segment between `base_url` and the talk slug.
    pub talk_segment: String,
    pub columns: Columns,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: "page".into(),
            base_url: "{{ site.baseurl }}".into(),
            talk_segment: "talk".into(),
            columns: Columns::default(),
        }
    }
}

impl RenderConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("parsing render config")
    }

    /// Reads a YAML config file; absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading config {:?}", path))?;
        let cfg = Self::from_yaml(&text).with_context(|| format!("in {:?}", path))?;
        info!(path = %path.display(), "loaded render config");
        Ok(cfg)
    }
}
