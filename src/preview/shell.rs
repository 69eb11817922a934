//! Preview orchestrator: owns zoom and source state and renders one preview block.

use serde::Serialize;

use super::actions::{compose_actions, ActionHandler, ActionItem, ActionKind, ActionView};
use super::arrangement::{arrange, ArrangementRequest, ChildrenArrangement};
use super::layout::{resolve_layout, PreviewChild};
use super::source::{SourceDescriptor, SourcePanel, SourcePanelState};
use super::toolbar::{story_id_for, ToolbarCommand, ToolbarView, TOOLBAR_BASE_URL};
use super::zoom::{ZoomContext, ZoomState};
use crate::config::PreviewSettings;
use crate::ui::LAYOUT_TOKENS;

/// Marker classes the hosting documentation site styles against.
pub const PREVIEW_MARKER_CLASSES: [&str; 2] = ["sbdocs", "sbdocs-preview"];

/// Caller-supplied configuration for one preview block.
#[derive(Debug, Clone, Default)]
pub struct PreviewConfig {
    pub is_column: bool,
    pub columns: Option<u32>,
    pub with_source: Option<SourceDescriptor>,
    pub is_expanded: bool,
    pub with_toolbar: bool,
    pub additional_actions: Vec<ActionItem>,
    pub class_name: Option<String>,
}

#[derive(Debug)]
pub struct Preview {
    is_column: bool,
    columns: Option<u32>,
    with_toolbar: bool,
    additional_actions: Vec<ActionItem>,
    class_name: Option<String>,
    children: Vec<PreviewChild>,
    settings: PreviewSettings,
    zoom: ZoomState,
    source: SourcePanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContainerFrame {
    pub padding_top: i32,
    pub margin_top: i32,
    pub margin_bottom: i32,
    pub square_bottom_corners: bool,
    pub bottom_border: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildSlot {
    pub index: usize,
    pub child: PreviewChild,
    pub zoom: ZoomContext,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildrenView {
    pub arrangement: ChildrenArrangement,
    pub slots: Vec<ChildSlot>,
}

/// Source panel attached below the children: square top corners, rounded bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcePanelView {
    pub descriptor: SourceDescriptor,
    pub dark: bool,
    pub square_top_corners: bool,
    pub bottom_radius: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewSection {
    Toolbar,
    Children,
    ActionBar,
    Source,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewView {
    pub class_names: Vec<String>,
    pub frame: ContainerFrame,
    pub toolbar: Option<ToolbarView>,
    pub zoom: ZoomContext,
    pub children: ChildrenView,
    pub actions: Vec<ActionView>,
    pub source: Option<SourcePanelView>,
}

impl PreviewView {
    pub fn class_list(&self) -> String {
        self.class_names.join(" ")
    }

    /// Sections in structural order, top to bottom.
    pub fn sections(&self) -> Vec<PreviewSection> {
        let mut sections = Vec::with_capacity(4);
        if self.toolbar.is_some() {
            sections.push(PreviewSection::Toolbar);
        }
        sections.push(PreviewSection::Children);
        sections.push(PreviewSection::ActionBar);
        if self.source.is_some() {
            sections.push(PreviewSection::Source);
        }
        sections
    }
}

impl Preview {
    pub fn new(config: PreviewConfig, children: Vec<PreviewChild>) -> Self {
        Self::with_settings(config, children, PreviewSettings::default())
    }

    pub fn with_settings(
        config: PreviewConfig,
        children: Vec<PreviewChild>,
        settings: PreviewSettings,
    ) -> Self {
        let PreviewConfig {
            is_column,
            columns,
            with_source,
            is_expanded,
            with_toolbar,
            additional_actions,
            class_name,
        } = config;

        tracing::debug!(
            child_count = children.len(),
            has_source = with_source.is_some(),
            with_toolbar,
            "creating preview"
        );

        Self {
            is_column,
            columns,
            with_toolbar,
            additional_actions,
            class_name,
            children,
            settings,
            zoom: ZoomState::new(),
            source: SourcePanel::new(with_source, is_expanded),
        }
    }

    pub fn children(&self) -> &[PreviewChild] {
        &self.children
    }

    pub fn set_children(&mut self, children: Vec<PreviewChild>) {
        self.children = children;
    }

    pub fn set_source(&mut self, descriptor: Option<SourceDescriptor>) {
        self.source.reconfigure(descriptor);
    }

    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn source_panel(&self) -> &SourcePanel {
        &self.source
    }

    pub fn apply_zoom_factor(&mut self, factor: f64) {
        self.zoom.apply_zoom_factor(factor);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom.reset_zoom();
    }

    pub fn handle_toolbar(&mut self, command: ToolbarCommand) {
        match command {
            ToolbarCommand::ZoomIn => self.zoom.apply_zoom_factor(self.settings.zoom_in_factor),
            ToolbarCommand::ZoomOut => self.zoom.apply_zoom_factor(self.settings.zoom_out_factor),
            ToolbarCommand::ResetZoom => self.zoom.reset_zoom(),
        }
    }

    pub fn actions(&self) -> Vec<ActionItem> {
        compose_actions(self.source.action(), &self.additional_actions)
    }

    pub fn action(&self, index: usize) -> Option<ActionItem> {
        self.actions().into_iter().nth(index)
    }

    /// Runs the action-bar entry at `index`. Disabled caller actions are skipped.
    pub fn activate_action(&mut self, index: usize) -> Option<ActionKind> {
        let Some(item) = self.action(index) else {
            tracing::debug!(index, "ignoring activation outside the action bar");
            return None;
        };

        match item.handler() {
            ActionHandler::ToggleSource => {
                self.source.activate();
            }
            ActionHandler::Callback(callback) => {
                if item.disabled {
                    tracing::debug!(index, title = %item.title, "ignoring disabled action");
                } else {
                    (callback.as_ref())();
                }
            }
        }
        Some(item.kind())
    }

    pub fn render(&self) -> PreviewView {
        let zoom = self.zoom.context();
        let layout = resolve_layout(&self.children);
        let arrangement = arrange(
            layout,
            ArrangementRequest {
                is_column: self.is_column,
                columns: self.columns,
                child_count: self.children.len(),
            },
            &zoom,
        );

        let slots = self
            .children
            .iter()
            .enumerate()
            .map(|(index, child)| ChildSlot {
                index,
                child: child.clone(),
                zoom,
            })
            .collect();

        let toolbar = self.with_toolbar.then(|| ToolbarView {
            story_id: story_id_for(&self.children),
            base_url: TOOLBAR_BASE_URL,
            border: true,
            height: LAYOUT_TOKENS.toolbar_height,
        });

        let source = self
            .source
            .expanded_source()
            .map(|descriptor| SourcePanelView {
                descriptor: descriptor.clone(),
                dark: true,
                square_top_corners: true,
                bottom_radius: LAYOUT_TOKENS.panel_radius,
            });

        let expanded = self.source.state() == Some(SourcePanelState::Expanded);
        let frame = ContainerFrame {
            padding_top: if self.with_toolbar {
                LAYOUT_TOKENS.toolbar_height
            } else {
                0
            },
            margin_top: LAYOUT_TOKENS.container_margin_top,
            margin_bottom: LAYOUT_TOKENS.container_margin_bottom,
            square_bottom_corners: expanded,
            bottom_border: !expanded,
        };

        PreviewView {
            class_names: self.class_names(),
            frame,
            toolbar,
            zoom,
            children: ChildrenView { arrangement, slots },
            actions: self.actions().iter().map(ActionItem::view).collect(),
            source,
        }
    }

    fn class_names(&self) -> Vec<String> {
        self.class_name
            .iter()
            .flat_map(|name| name.split_whitespace())
            .chain(PREVIEW_MARKER_CLASSES)
            .map(str::to_string)
            .collect()
    }
}
