mod actions;
mod arrangement;
mod layout;
mod shell;
mod source;
mod toolbar;
mod zoom;

pub use actions::{
    compose_actions, ActionCallback, ActionHandler, ActionItem, ActionKind, ActionView,
};
pub use arrangement::{
    arrange, arrange_with_tokens, ArrangementRequest, ChildDisplay, ChildFrame,
    ChildrenArrangement, ContainerDisplay, FlowDirection, Insets, Length,
};
pub use layout::{
    resolve_layout, LayoutMode, PreviewChild, PrimitiveValue, StoryItem, StoryParameters,
    UnknownLayoutHint,
};
pub use shell::{
    ChildSlot, ChildrenView, ContainerFrame, Preview, PreviewConfig, PreviewSection, PreviewView,
    SourcePanelView, PREVIEW_MARKER_CLASSES,
};
pub use source::{
    SourceDescriptor, SourcePanel, SourcePanelState, SourceToggleAction, HIDE_CODE_TITLE,
    NO_CODE_TITLE, SHOW_CODE_TITLE,
};
pub use toolbar::{story_id_for, ToolbarCommand, ToolbarView, TOOLBAR_BASE_URL};
pub use zoom::{ZoomContext, ZoomState};
