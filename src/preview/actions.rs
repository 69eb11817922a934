use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use super::source::SourceToggleAction;

pub type ActionCallback = Rc<dyn Fn()>;

/// What activating an action-bar item does.
#[derive(Clone)]
pub enum ActionHandler {
    ToggleSource,
    Callback(ActionCallback),
}

#[derive(Clone)]
pub struct ActionItem {
    pub title: String,
    pub disabled: bool,
    handler: ActionHandler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    SourceToggle,
    Custom,
}

/// Presentation data for one action-bar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionView {
    pub title: String,
    pub disabled: bool,
    pub kind: ActionKind,
}

impl ActionItem {
    pub fn new(title: impl Into<String>, on_activate: impl Fn() + 'static) -> Self {
        Self {
            title: title.into(),
            disabled: false,
            handler: ActionHandler::Callback(Rc::new(on_activate)),
        }
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub(crate) fn source_toggle(action: SourceToggleAction) -> Self {
        Self {
            title: action.title.to_string(),
            disabled: action.disabled,
            handler: ActionHandler::ToggleSource,
        }
    }

    pub fn handler(&self) -> &ActionHandler {
        &self.handler
    }

    pub fn kind(&self) -> ActionKind {
        match self.handler {
            ActionHandler::ToggleSource => ActionKind::SourceToggle,
            ActionHandler::Callback(_) => ActionKind::Custom,
        }
    }

    pub fn view(&self) -> ActionView {
        ActionView {
            title: self.title.clone(),
            disabled: self.disabled,
            kind: self.kind(),
        }
    }
}

impl fmt::Debug for ActionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionItem")
            .field("title", &self.title)
            .field("disabled", &self.disabled)
            .field("kind", &self.kind())
            .finish()
    }
}

/// Source toggle first (when a source is attached), then caller actions in caller order.
pub fn compose_actions(
    source: Option<SourceToggleAction>,
    additional: &[ActionItem],
) -> Vec<ActionItem> {
    source
        .map(ActionItem::source_toggle)
        .into_iter()
        .chain(additional.iter().cloned())
        .collect()
}
