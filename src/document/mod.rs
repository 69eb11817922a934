//! JSON preview documents: configuration plus children for one preview block.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::config::PreviewSettings;
use crate::preview::{
    ActionItem, Preview, PreviewChild, PreviewConfig, SourceDescriptor, ToolbarCommand,
};

pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read preview document: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse preview document")]
    Parse(#[from] serde_json::Error),
    #[error("invalid preview event {0:?}")]
    InvalidEvent(String),
}

/// Caller action declared in a document; activation is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionSpec {
    pub title: String,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewDocument {
    pub is_column: bool,
    pub columns: Option<u32>,
    pub with_source: Option<SourceDescriptor>,
    pub is_expanded: bool,
    pub with_toolbar: Option<bool>,
    pub class_name: Option<String>,
    pub additional_actions: Vec<ActionSpec>,
    pub children: Vec<PreviewChild>,
}

impl PreviewDocument {
    /// Builds a preview; `withToolbar` falls back to the settings when the document omits it.
    pub fn into_preview(self, settings: PreviewSettings) -> Preview {
        let additional_actions = self
            .additional_actions
            .into_iter()
            .map(|spec| {
                let title = spec.title.clone();
                ActionItem::new(spec.title, move || {
                    tracing::info!(title = %title, "preview action activated");
                })
                .with_disabled(spec.disabled)
            })
            .collect();

        let config = PreviewConfig {
            is_column: self.is_column,
            columns: self.columns,
            with_source: self.with_source,
            is_expanded: self.is_expanded,
            with_toolbar: self.with_toolbar.unwrap_or(settings.with_toolbar),
            additional_actions,
            class_name: self.class_name,
        };
        Preview::with_settings(config, self.children, settings)
    }
}

/// One user interaction replayed against a preview before it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewEvent {
    Toolbar(ToolbarCommand),
    Activate(usize),
}

impl PreviewEvent {
    pub fn apply(self, preview: &mut Preview) {
        match self {
            Self::Toolbar(command) => preview.handle_toolbar(command),
            Self::Activate(index) => {
                preview.activate_action(index);
            }
        }
    }
}

/// Parses a comma-separated event list such as `zoom-in,activate:0,reset-zoom`.
pub fn parse_events(list: &str) -> DocumentResult<Vec<PreviewEvent>> {
    list.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_event)
        .collect()
}

fn parse_event(token: &str) -> DocumentResult<PreviewEvent> {
    let event = match token {
        "zoom-in" => PreviewEvent::Toolbar(ToolbarCommand::ZoomIn),
        "zoom-out" => PreviewEvent::Toolbar(ToolbarCommand::ZoomOut),
        "reset-zoom" => PreviewEvent::Toolbar(ToolbarCommand::ResetZoom),
        other => {
            let index = other
                .strip_prefix("activate:")
                .and_then(|index| index.parse().ok())
                .ok_or_else(|| DocumentError::InvalidEvent(other.to_string()))?;
            PreviewEvent::Activate(index)
        }
    };
    Ok(event)
}

pub fn parse_document(contents: &str) -> DocumentResult<PreviewDocument> {
    Ok(serde_json::from_str(contents)?)
}

pub fn load_document(path: &Path) -> DocumentResult<PreviewDocument> {
    let contents = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_document(&contents)?;
    tracing::debug!(
        ?path,
        child_count = document.children.len(),
        "loaded preview document"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::{LayoutMode, SourcePanelState, HIDE_CODE_TITLE, NO_CODE_TITLE};

    const DOCUMENT: &str = r#"{
        "isColumn": false,
        "columns": 2,
        "withSource": { "code": "<Button primary />", "language": "jsx" },
        "additionalActions": [{ "title": "Copy link" }, { "title": "Share", "disabled": true }],
        "className": "docs-story",
        "children": [
            { "id": "button--primary", "parameters": { "layout": "centered" } },
            { "id": "button--secondary" }
        ]
    }"#;

    #[test]
    fn document_builds_configured_preview() {
        let document = parse_document(DOCUMENT).expect("document should parse");
        assert_eq!(document.columns, Some(2));
        assert_eq!(document.children.len(), 2);

        let view = document.into_preview(PreviewSettings::default()).render();
        assert_eq!(view.children.arrangement.layout, LayoutMode::Centered);
        assert_eq!(view.actions.len(), 3);
        assert!(view.actions[2].disabled);
        assert_eq!(view.class_list(), "docs-story sbdocs sbdocs-preview");
        assert!(view.toolbar.is_none());
    }

    #[test]
    fn toolbar_flag_falls_back_to_settings() {
        let settings = PreviewSettings {
            with_toolbar: true,
            ..PreviewSettings::default()
        };
        let document = parse_document(r#"{"children": [{"id": "only"}]}"#).expect("should parse");
        let view = document.into_preview(settings).render();
        assert_eq!(
            view.toolbar.and_then(|toolbar| toolbar.story_id).as_deref(),
            Some("only")
        );

        let document =
            parse_document(r#"{"withToolbar": false, "children": []}"#).expect("should parse");
        assert!(document.into_preview(settings).render().toolbar.is_none());
    }

    #[test]
    fn events_replay_in_order() {
        let events = parse_events("zoom-in, zoom-in,reset-zoom,activate:0").expect("should parse");
        assert_eq!(
            events,
            [
                PreviewEvent::Toolbar(ToolbarCommand::ZoomIn),
                PreviewEvent::Toolbar(ToolbarCommand::ZoomIn),
                PreviewEvent::Toolbar(ToolbarCommand::ResetZoom),
                PreviewEvent::Activate(0),
            ]
        );

        let mut preview = parse_document(DOCUMENT)
            .expect("document should parse")
            .into_preview(PreviewSettings::default());
        for event in events {
            event.apply(&mut preview);
        }
        let view = preview.render();
        assert_eq!(view.zoom.scale(), 1.0);
        assert_eq!(view.actions[0].title, HIDE_CODE_TITLE);
    }

    #[test]
    fn boolean_source_error_makes_code_unavailable() {
        let document = parse_document(r#"{"withSource": {"error": true}, "children": []}"#)
            .expect("document should parse");
        let preview = document.into_preview(PreviewSettings::default());
        assert_eq!(
            preview.source_panel().state(),
            Some(SourcePanelState::Unavailable)
        );
        assert_eq!(preview.render().actions[0].title, NO_CODE_TITLE);
    }

    #[test]
    fn expanded_source_keeps_renderer_fields() {
        let document = parse_document(
            r#"{
                "isExpanded": true,
                "withSource": {"code": "x", "format": "dedent", "dark": false},
                "children": []
            }"#,
        )
        .expect("document should parse");
        let view = document.into_preview(PreviewSettings::default()).render();
        let source = view.source.expect("source panel should render");

        let encoded = serde_json::to_value(&source.descriptor).expect("should encode");
        assert_eq!(
            encoded,
            serde_json::json!({"code": "x", "format": "dedent", "dark": false})
        );
    }

    #[test]
    fn unknown_event_is_rejected() {
        let err = parse_events("zoom-in,spin").expect_err("unknown event should fail");
        assert!(matches!(err, DocumentError::InvalidEvent(token) if token == "spin"));
        assert!(parse_events("activate:x").is_err());
    }

    #[test]
    fn missing_document_reports_path() {
        let path = Path::new("/nonexistent/docpreview/preview.json");
        let err = load_document(path).expect_err("missing file should fail");
        assert!(matches!(err, DocumentError::Read { path: ref p, .. } if p == path));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = parse_document("{\"children\": 3}").expect_err("should fail");
        assert!(matches!(err, DocumentError::Parse(_)));
    }
}
