//! Page configuration.
//!
//! Read once at startup from a JSON file and never written back. Besides
//! a few presentation knobs it lists the cards that are already on the
//! page when the widget starts.

use crate::card::{Card, ControlKind, StatusBadge, UrgencyPill};
use crate::error::{Result, TodoError};
use crate::theme::ThemeName;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub title: String,
    pub theme: ThemeName,
    pub default_urgency: String,
    pub cards: Vec<SeedCard>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Todos".to_string(),
            theme: ThemeName::Dark,
            default_urgency: "normal".to_string(),
            cards: Vec::new(),
        }
    }
}

impl PageConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| TodoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&data).map_err(|source| TodoError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded page config");
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Status of a pre-existing card, written either as an ordinal or as the
/// label the card displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedStatus {
    Ordinal(i64),
    Label(String),
}

impl Default for SeedStatus {
    fn default() -> Self {
        SeedStatus::Ordinal(0)
    }
}

/// A card that is on the page before the widget starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedCard {
    pub name: String,
    #[serde(default)]
    pub urgency: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: SeedStatus,
    #[serde(default = "all_markers")]
    pub controls: Vec<String>,
}

fn all_markers() -> Vec<String> {
    ControlKind::ALL
        .into_iter()
        .map(|kind| kind.marker().to_string())
        .collect()
}

impl SeedCard {
    pub fn to_card(&self) -> Card {
        let badge = match &self.status {
            SeedStatus::Ordinal(ordinal) => StatusBadge::for_ordinal(*ordinal),
            SeedStatus::Label(label) => StatusBadge::for_label(label),
        };
        let controls = self
            .controls
            .iter()
            .filter_map(|marker| {
                let kind = ControlKind::from_marker(marker);
                if kind.is_none() {
                    tracing::warn!(card = %self.name, marker = %marker, "ignoring unknown control marker");
                }
                kind
            })
            .collect();
        Card::new(
            self.name.clone(),
            UrgencyPill::new(&self.urgency),
            self.description.clone(),
            badge,
            controls,
        )
    }
}
