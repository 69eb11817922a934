use serde::{Deserialize, Serialize};

use super::layout::PreviewChild;

/// Relative locator of the iframe host that renders live examples.
pub const TOOLBAR_BASE_URL: &str = "./iframe.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolbarCommand {
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarView {
    pub story_id: Option<String>,
    pub base_url: &'static str,
    pub border: bool,
    pub height: i32,
}

impl ToolbarView {
    /// Link to the example on its own; the id is percent-encoded into the query.
    pub fn story_href(&self) -> Option<String> {
        self.story_id
            .as_deref()
            .map(|id| format!("{}?id={}", self.base_url, urlencoding::encode(id)))
    }
}

/// Identifier of the example being viewed; only a lone child can name one.
pub fn story_id_for(children: &[PreviewChild]) -> Option<String> {
    match children {
        [only] => only.story_id().map(str::to_string),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::layout::StoryItem;

    #[test]
    fn story_id_requires_exactly_one_identified_child() {
        assert_eq!(story_id_for(&[]), None);
        assert_eq!(
            story_id_for(&[StoryItem::new().with_id("abc").into()]),
            Some("abc".to_string())
        );
        assert_eq!(story_id_for(&[StoryItem::new().into()]), None);
        assert_eq!(story_id_for(&[PreviewChild::text("abc")]), None);
        assert_eq!(
            story_id_for(&[
                StoryItem::new().with_id("abc").into(),
                StoryItem::new().with_id("def").into(),
            ]),
            None
        );
    }

    #[test]
    fn story_href_points_at_iframe_host() {
        let toolbar = ToolbarView {
            story_id: Some("button--primary".to_string()),
            base_url: TOOLBAR_BASE_URL,
            border: true,
            height: 40,
        };
        assert_eq!(
            toolbar.story_href().as_deref(),
            Some("./iframe.html?id=button--primary")
        );

        let toolbar = ToolbarView {
            story_id: None,
            ..toolbar
        };
        assert_eq!(toolbar.story_href(), None);
    }

    #[test]
    fn story_href_escapes_query_characters() {
        let toolbar = ToolbarView {
            story_id: Some("forms/input&label #2".to_string()),
            base_url: TOOLBAR_BASE_URL,
            border: true,
            height: 40,
        };
        assert_eq!(
            toolbar.story_href().as_deref(),
            Some("./iframe.html?id=forms%2Finput%26label%20%232")
        );
    }

    #[test]
    fn toolbar_commands_use_kebab_case_names() {
        let command: ToolbarCommand =
            serde_json::from_str(r#""reset-zoom""#).expect("should parse");
        assert_eq!(command, ToolbarCommand::ResetZoom);
    }
}
