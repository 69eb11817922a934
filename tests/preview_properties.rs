use std::cell::RefCell;
use std::rc::Rc;

use docpreview::config::PreviewSettings;
use docpreview::document::parse_document;
use docpreview::preview::{
    resolve_layout, ActionItem, ActionKind, LayoutMode, Preview, PreviewChild, PreviewConfig,
    PreviewSection, SourceDescriptor, SourcePanelState, StoryItem, ToolbarCommand,
    HIDE_CODE_TITLE, NO_CODE_TITLE, SHOW_CODE_TITLE,
};

fn story(id: &str) -> PreviewChild {
    StoryItem::new().with_id(id).into()
}

#[test]
fn first_layout_hint_wins_across_the_public_api() {
    let children = vec![
        StoryItem::new().into(),
        StoryItem::new().with_layout("fullscreen").into(),
        StoryItem::new().with_layout("centered").into(),
    ];
    assert_eq!(resolve_layout(&children), LayoutMode::Fullscreen);

    let preview = Preview::new(PreviewConfig::default(), children);
    assert_eq!(
        preview.render().children.arrangement.layout,
        LayoutMode::Fullscreen
    );
}

#[test]
fn full_interaction_session_keeps_invariants() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_for_action = log.clone();
    let mut preview = Preview::new(
        PreviewConfig {
            with_toolbar: true,
            with_source: Some(SourceDescriptor::with_code("<Badge />")),
            additional_actions: vec![ActionItem::new("Copy", move || {
                log_for_action.borrow_mut().push("copy")
            })],
            ..PreviewConfig::default()
        },
        vec![story("badge--default")],
    );

    let view = preview.render();
    assert_eq!(
        view.sections(),
        [
            PreviewSection::Toolbar,
            PreviewSection::Children,
            PreviewSection::ActionBar,
        ]
    );
    assert_eq!(
        view.toolbar.as_ref().and_then(|toolbar| toolbar.story_id.as_deref()),
        Some("badge--default")
    );
    assert_eq!(view.actions[0].title, SHOW_CODE_TITLE);

    preview.handle_toolbar(ToolbarCommand::ZoomIn);
    preview.handle_toolbar(ToolbarCommand::ZoomIn);
    assert!(preview.zoom().scale() > 1.0);
    assert!(preview.render().children.arrangement.child.zoom < 1.0);

    assert_eq!(preview.activate_action(0), Some(ActionKind::SourceToggle));
    assert_eq!(
        preview.source_panel().state(),
        Some(SourcePanelState::Expanded)
    );
    let view = preview.render();
    assert_eq!(view.actions[0].title, HIDE_CODE_TITLE);
    assert_eq!(view.sections().last(), Some(&PreviewSection::Source));

    assert_eq!(preview.activate_action(1), Some(ActionKind::Custom));
    assert_eq!(*log.borrow(), ["copy"]);

    preview.handle_toolbar(ToolbarCommand::ResetZoom);
    assert_eq!(preview.render().zoom.scale(), 1.0);
}

#[test]
fn errored_source_document_stays_unavailable() {
    let document = parse_document(
        r#"{
            "isExpanded": true,
            "withSource": { "error": "Source unavailable" },
            "children": ["plain text", { "id": "ignored", "parameters": { "layout": "centered" } }]
        }"#,
    )
    .expect("document should parse");

    let mut preview = document.into_preview(PreviewSettings::default());
    for _ in 0..2 {
        let view = preview.render();
        assert_eq!(view.actions.len(), 1);
        assert_eq!(view.actions[0].title, NO_CODE_TITLE);
        assert!(view.actions[0].disabled);
        assert!(view.source.is_none());
        assert_eq!(view.children.arrangement.layout, LayoutMode::Padded);
        preview.activate_action(0);
    }
}

#[test]
fn rendered_view_serializes_to_json() {
    let preview = Preview::new(
        PreviewConfig {
            columns: Some(2),
            ..PreviewConfig::default()
        },
        vec![story("a"), story("b"), PreviewChild::text("c")],
    );
    let json = serde_json::to_value(preview.render()).expect("view should serialize");

    assert_eq!(json["children"]["arrangement"]["display"], "flex");
    assert_eq!(json["children"]["arrangement"]["layout"], "padded");
    assert_eq!(
        json["children"]["arrangement"]["child"]["min_width"]["kind"],
        "fraction-minus"
    );
    assert_eq!(json["children"]["slots"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["class_names"][1], "sbdocs-preview");
}
