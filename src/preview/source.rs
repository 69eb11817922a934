//! Source panel toggle: the collapsible code view attached below the children.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SHOW_CODE_TITLE: &str = "Show code";
pub const HIDE_CODE_TITLE: &str = "Hide code";
pub const NO_CODE_TITLE: &str = "No code available";

/// Source text handed to the code renderer; only the presence of `error` is interpreted here.
///
/// `error` may be any non-null JSON value. Fields this crate does not name, such as
/// `format` or `dark`, are kept in `extra` and rendered back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SourceDescriptor {
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn with_error(error: impl Into<String>) -> Self {
        Self {
            error: Some(Value::String(error.into())),
            ..Self::default()
        }
    }

    pub fn signals_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourcePanelState {
    Collapsed,
    Expanded,
    Unavailable,
}

impl SourcePanelState {
    fn initial(descriptor: &SourceDescriptor, expanded: bool) -> Self {
        if descriptor.signals_error() {
            Self::Unavailable
        } else if expanded {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }

    /// Unavailable has no source to show, so activating it keeps the panel collapsed.
    const fn on_activate(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
            Self::Unavailable => Self::Unavailable,
        }
    }

    const fn action(self) -> SourceToggleAction {
        match self {
            Self::Collapsed => SourceToggleAction {
                title: SHOW_CODE_TITLE,
                disabled: false,
            },
            Self::Expanded => SourceToggleAction {
                title: HIDE_CODE_TITLE,
                disabled: false,
            },
            Self::Unavailable => SourceToggleAction {
                title: NO_CODE_TITLE,
                disabled: true,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceToggleAction {
    pub title: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone)]
struct AttachedSource {
    descriptor: SourceDescriptor,
    state: SourcePanelState,
}

#[derive(Debug, Clone)]
pub struct SourcePanel {
    expanded_initially: bool,
    attached: Option<AttachedSource>,
}

impl SourcePanel {
    pub fn new(descriptor: Option<SourceDescriptor>, expanded_initially: bool) -> Self {
        let attached = descriptor.map(|descriptor| AttachedSource {
            state: SourcePanelState::initial(&descriptor, expanded_initially),
            descriptor,
        });
        Self {
            expanded_initially,
            attached,
        }
    }

    /// `None` while no descriptor is attached.
    pub fn state(&self) -> Option<SourcePanelState> {
        self.attached.as_ref().map(|attached| attached.state)
    }

    pub fn descriptor(&self) -> Option<&SourceDescriptor> {
        self.attached.as_ref().map(|attached| &attached.descriptor)
    }

    pub fn action(&self) -> Option<SourceToggleAction> {
        self.state().map(SourcePanelState::action)
    }

    /// Descriptor to render below the children, present only while expanded.
    pub fn expanded_source(&self) -> Option<&SourceDescriptor> {
        self.attached
            .as_ref()
            .filter(|attached| attached.state == SourcePanelState::Expanded)
            .map(|attached| &attached.descriptor)
    }

    pub fn activate(&mut self) -> Option<SourcePanelState> {
        let attached = self.attached.as_mut()?;
        let from = attached.state;
        attached.state = from.on_activate();
        tracing::debug!(from = ?from, to = ?attached.state, "source panel activated");
        Some(attached.state)
    }

    /// Swaps the descriptor, keeping the toggle position where it still applies.
    pub fn reconfigure(&mut self, descriptor: Option<SourceDescriptor>) {
        let previous = self.state();
        let expanded_initially = self.expanded_initially;
        self.attached = descriptor.map(|descriptor| {
            let state = if descriptor.signals_error() {
                SourcePanelState::Unavailable
            } else {
                match previous {
                    Some(SourcePanelState::Expanded) => SourcePanelState::Expanded,
                    Some(SourcePanelState::Collapsed | SourcePanelState::Unavailable) => {
                        SourcePanelState::Collapsed
                    }
                    None => SourcePanelState::initial(&descriptor, expanded_initially),
                }
            };
            AttachedSource { descriptor, state }
        });
        tracing::debug!(from = ?previous, to = ?self.state(), "source panel reconfigured");
    }
}
