//! Arrangement of preview children inside the responsive container.

use serde::Serialize;

use super::layout::LayoutMode;
use super::zoom::ZoomContext;
use crate::ui::{StyleTokens, LAYOUT_TOKENS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerDisplay {
    Block,
    Flex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowDirection {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChildDisplay {
    Block,
    InlineBlock,
}

/// Horizontal extent of a child relative to the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Length {
    Auto,
    /// `100%`
    Full,
    /// `100% - px`
    FullMinus { px: i32 },
    /// `100% / divisor - px`
    FractionMinus { divisor: u32, px: i32 },
}

impl Length {
    /// Resolves against a concrete container width in pixels; `Auto` yields `None`.
    pub fn resolve(self, container_width: i32) -> Option<i32> {
        match self {
            Self::Auto => None,
            Self::Full => Some(container_width),
            Self::FullMinus { px } => Some(container_width - px),
            Self::FractionMinus { divisor, px } => {
                let divisor = i32::try_from(divisor).unwrap_or(i32::MAX).max(1);
                Some(container_width / divisor - px)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Insets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Insets {
    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Constraints applied to every direct child.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChildFrame {
    pub display: ChildDisplay,
    pub width: Option<Length>,
    pub max_width: Option<Length>,
    pub min_width: Option<Length>,
    pub border_inset: i32,
    pub zoom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArrangementRequest {
    pub is_column: bool,
    pub columns: Option<u32>,
    pub child_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChildrenArrangement {
    pub layout: LayoutMode,
    pub display: ContainerDisplay,
    pub direction: FlowDirection,
    pub wraps: bool,
    pub scrolls: bool,
    pub centered: bool,
    pub padding: Insets,
    pub margin: i32,
    pub child: ChildFrame,
}

impl ArrangementRequest {
    /// A lone child always stacks, whatever the caller asked for.
    pub fn stacks(&self) -> bool {
        self.is_column || self.child_count <= 1
    }

    fn columns(&self) -> Option<u32> {
        self.columns.filter(|&columns| columns > 0)
    }
}

pub fn arrange(
    layout: LayoutMode,
    request: ArrangementRequest,
    zoom: &ZoomContext,
) -> ChildrenArrangement {
    arrange_with_tokens(layout, request, zoom, LAYOUT_TOKENS)
}

pub fn arrange_with_tokens(
    layout: LayoutMode,
    request: ArrangementRequest,
    zoom: &ZoomContext,
    tokens: StyleTokens,
) -> ChildrenArrangement {
    let stacks = request.stacks();
    let columns = request.columns();

    let inset_width = if layout == LayoutMode::Fullscreen {
        Length::Full
    } else {
        Length::FullMinus { px: tokens.gutter }
    };

    let mut child = if stacks {
        ChildFrame {
            display: ChildDisplay::Block,
            width: Some(inset_width),
            max_width: None,
            min_width: None,
            border_inset: 0,
            zoom: zoom.child_zoom(),
        }
    } else {
        ChildFrame {
            display: ChildDisplay::InlineBlock,
            width: None,
            max_width: Some(inset_width),
            min_width: None,
            border_inset: 0,
            zoom: zoom.child_zoom(),
        }
    };

    let mut display = if stacks || columns.is_none() {
        ContainerDisplay::Block
    } else {
        ContainerDisplay::Flex
    };
    let mut padding = Insets::default();
    let mut margin = 0;

    if layout.has_gutter() {
        padding = Insets::symmetric(
            tokens.content_padding_vertical,
            tokens.content_padding_horizontal,
        );
        margin = tokens.content_margin;
        child.width = Some(Length::Auto);
        child.border_inset = tokens.child_border_inset;
    }

    let centered = layout == LayoutMode::Centered;
    if centered {
        display = ContainerDisplay::Flex;
    }

    if let Some(columns) = columns.filter(|&columns| columns > 1) {
        child.min_width = Some(Length::FractionMinus {
            divisor: columns,
            px: tokens.gutter,
        });
    }

    tracing::trace!(
        %layout,
        stacks,
        ?columns,
        child_count = request.child_count,
        child_zoom = child.zoom,
        "arranged preview children"
    );

    ChildrenArrangement {
        layout,
        display,
        direction: if stacks {
            FlowDirection::Column
        } else {
            FlowDirection::Row
        },
        wraps: true,
        scrolls: true,
        centered,
        padding,
        margin,
        child,
    }
}
