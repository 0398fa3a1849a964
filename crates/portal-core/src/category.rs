//! Content categories and the joined section registry.
//!
//! Categories are shown in the content-selector dropdown, two columns wide.
//! Each category corresponds to the top-level navigation entry at the same
//! position. That pairing is resolved once, in [`SectionRegistry::join`], which
//! fails when the two lists disagree in length. Activation code works with
//! [`Section`] records and never does index arithmetic of its own.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::navigation::NavigationEntry;
use crate::route::Route;

/// Default boundary between the left and right dropdown columns
pub const DEFAULT_COLUMN_SPLIT: usize = 3;

/// Release stage badge shown next to a category title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stage {
    Beta,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Beta => "BETA",
        }
    }
}

/// A thematic documentation section listed in the content selector
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentCategory {
    pub title: String,

    #[serde(default)]
    pub sub_title: String,

    /// Glyph or short label rendered in place of the section icon
    #[serde(default = "default_icon")]
    pub icon: String,

    #[serde(default)]
    pub stage: Option<Stage>,

    /// Whether the right-hand contextual sidebar is shown for this section
    #[serde(default = "default_show_side_bar")]
    pub show_side_bar: bool,
}

fn default_icon() -> String {
    "▸".to_string()
}

fn default_show_side_bar() -> bool {
    true
}

impl ContentCategory {
    pub fn new(title: impl Into<String>, sub_title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sub_title: sub_title.into(),
            icon: default_icon(),
            stage: None,
            show_side_bar: default_show_side_bar(),
        }
    }

    pub fn beta(mut self) -> Self {
        self.stage = Some(Stage::Beta);
        self
    }

    pub fn hide_side_bar(mut self) -> Self {
        self.show_side_bar = false;
        self
    }

    pub fn is_beta(&self) -> bool {
        self.stage == Some(Stage::Beta)
    }
}

/// Dropdown column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Left,
    Right,
}

impl Column {
    pub fn other(self) -> Self {
        match self {
            Column::Left => Column::Right,
            Column::Right => Column::Left,
        }
    }
}

/// A category paired with the top-level navigation entry it opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Flat position in the registry, also the category index dispatched to the store
    pub index: usize,
    pub column: Column,
    pub category: ContentCategory,
    /// `None` when the paired entry has no usable path
    pub route: Option<Route>,
}

impl Section {
    pub fn title(&self) -> &str {
        &self.category.title
    }
}

/// The joined category/navigation registry
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
    split: usize,
}

impl SectionRegistry {
    /// Pair categories with top-level entries by position.
    ///
    /// `split` is the number of sections in the left column; it is clamped to
    /// the registry length.
    pub fn join(
        categories: Vec<ContentCategory>,
        entries: &[NavigationEntry],
        split: usize,
    ) -> Result<Self> {
        if categories.len() != entries.len() {
            return Err(Error::registry_mismatch(categories.len(), entries.len()));
        }

        let split = split.min(categories.len());
        let sections = categories
            .into_iter()
            .zip(entries)
            .enumerate()
            .map(|(index, (category, entry))| {
                if entry.title != category.title {
                    debug!(
                        "Section '{}' opens navigation entry '{}'",
                        category.title, entry.title
                    );
                }
                let route = match entry.route() {
                    Ok(route) => Some(route),
                    Err(e) => {
                        warn!("Section '{}' has no route: {}", category.title, e);
                        None
                    }
                };
                Section {
                    index,
                    column: if index < split {
                        Column::Left
                    } else {
                        Column::Right
                    },
                    category,
                    route,
                }
            })
            .collect();

        Ok(Self { sections, split })
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn split(&self) -> usize {
        self.split
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Sections in one display column, in order
    pub fn column(&self, column: Column) -> &[Section] {
        match column {
            Column::Left => &self.sections[..self.split],
            Column::Right => &self.sections[self.split..],
        }
    }

    /// Section at `row` within `column`
    pub fn at(&self, column: Column, row: usize) -> Option<&Section> {
        self.column(column).get(row)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.category.title == title)
    }
}
