//! Preview children and layout-mode resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Arrangement policy applied to every child of one preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Padded,
    Centered,
    Fullscreen,
}

impl LayoutMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Padded => "padded",
            Self::Centered => "centered",
            Self::Fullscreen => "fullscreen",
        }
    }

    /// Padded and centered layouts keep a gutter around the content area.
    pub const fn has_gutter(self) -> bool {
        matches!(self, Self::Padded | Self::Centered)
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layout hint: {0:?}")]
pub struct UnknownLayoutHint(pub String);

impl FromStr for LayoutMode {
    type Err = UnknownLayoutHint;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "padded" => Ok(Self::Padded),
            "centered" => Ok(Self::Centered),
            "fullscreen" => Ok(Self::Fullscreen),
            other => Err(UnknownLayoutHint(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveValue {
    Text(String),
    Number(f64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryParameters {
    #[serde(default)]
    pub layout: Option<String>,
}

/// A structured example fragment; only `id` and the layout hint are read here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub parameters: StoryParameters,
}

impl StoryItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.parameters.layout = Some(layout.into());
        self
    }

    pub fn layout_hint(&self) -> Option<LayoutMode> {
        let hint = self
            .parameters
            .layout
            .as_deref()
            .filter(|hint| !hint.is_empty())?;
        match hint.parse() {
            Ok(mode) => Some(mode),
            Err(err) => {
                tracing::warn!(%err, id = ?self.id, "ignoring layout hint");
                None
            }
        }
    }
}

/// One opaque renderable item inside a preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreviewChild {
    Primitive(PrimitiveValue),
    Story(StoryItem),
}

impl PreviewChild {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Primitive(PrimitiveValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::Primitive(PrimitiveValue::Number(value))
    }

    pub fn story(item: StoryItem) -> Self {
        Self::Story(item)
    }

    pub fn story_id(&self) -> Option<&str> {
        match self {
            Self::Primitive(_) => None,
            Self::Story(item) => item.id.as_deref(),
        }
    }

    /// Primitives settle the layout as padded; stories without a hint defer to later children.
    fn layout_contribution(&self) -> Option<LayoutMode> {
        match self {
            Self::Primitive(_) => Some(LayoutMode::Padded),
            Self::Story(item) => item.layout_hint(),
        }
    }
}

impl From<StoryItem> for PreviewChild {
    fn from(item: StoryItem) -> Self {
        Self::Story(item)
    }
}

/// First contribution in child order wins; defaults to padded.
pub fn resolve_layout(children: &[PreviewChild]) -> LayoutMode {
    children
        .iter()
        .find_map(PreviewChild::layout_contribution)
        .unwrap_or_default()
}
