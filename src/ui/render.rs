//! GTK materialisation of a rendered preview, rebuilt after every interaction.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{
    Align, Application, ApplicationWindow, Box as GtkBox, CssProvider, FlowBox, Frame, Label,
    LinkButton, Orientation, Overlay, ScrolledWindow, SelectionMode, Widget,
};

use crate::preview::{
    ActionHandler, ActionView, ChildSlot, ChildrenArrangement, ChildrenView, ContainerDisplay,
    ContainerFrame, FlowDirection, Length, Preview, PreviewChild, PrimitiveValue,
    SourcePanelView, ToolbarCommand, ToolbarView,
};
use crate::ui::{action_button, icon_button, LAYOUT_TOKENS};

const APPLICATION_ID: &str = "io.github.docpreview";
const DEFAULT_WINDOW_WIDTH: i32 = 960;
const TOOLBAR_ENTRIES: [(ToolbarCommand, &str, &str); 3] = [
    (ToolbarCommand::ZoomIn, "zoom-in-symbolic", "Zoom in"),
    (ToolbarCommand::ZoomOut, "zoom-out-symbolic", "Zoom out"),
    (ToolbarCommand::ResetZoom, "zoom-original-symbolic", "Reset zoom"),
];

#[derive(Clone)]
struct PreviewRuntime {
    preview: Rc<RefCell<Preview>>,
    root: GtkBox,
    css: CssProvider,
}

/// Opens a window showing `preview` and blocks until it is closed.
pub fn present(preview: Preview) {
    let application = Application::builder()
        .application_id(APPLICATION_ID)
        .build();
    let preview = Rc::new(RefCell::new(preview));

    application.connect_activate(move |app| {
        let css = CssProvider::new();
        if let Some(display) = gtk4::gdk::Display::default() {
            gtk4::style_context_add_provider_for_display(
                &display,
                &css,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        } else {
            tracing::warn!("no display available; preview zoom styling disabled");
        }

        let root = GtkBox::new(Orientation::Vertical, 0);
        let scroller = ScrolledWindow::builder().child(&root).build();
        let window = ApplicationWindow::builder()
            .application(app)
            .title("docpreview")
            .default_width(DEFAULT_WINDOW_WIDTH)
            .default_height(640)
            .child(&scroller)
            .build();

        let runtime = PreviewRuntime {
            preview: preview.clone(),
            root,
            css,
        };
        runtime.refresh();
        tracing::info!("presenting preview window");
        window.present();
    });

    // GTK only sees argv[0]; preview flags are parsed before this point.
    application.run_with_args::<&str>(&[]);
}

impl PreviewRuntime {
    fn refresh(&self) {
        while let Some(child) = self.root.first_child() {
            self.root.remove(&child);
        }

        let view = self.preview.borrow().render();
        self.root.set_css_classes(&[]);
        for class_name in &view.class_names {
            self.root.add_css_class(class_name);
        }
        self.root.set_margin_top(view.frame.margin_top);
        self.root.set_margin_bottom(view.frame.margin_bottom);
        self.css.load_from_data(&preview_css(view.zoom.child_zoom()));

        let container_width = match self.root.width() {
            0 => DEFAULT_WINDOW_WIDTH,
            width => width,
        };
        let body = GtkBox::new(Orientation::Vertical, 0);
        body.set_margin_top(view.frame.padding_top);
        body.append(&build_children(&view.children, container_width));
        body.append(&self.build_action_bar(&view.actions));

        // The toolbar sits inside the frame's top padding.
        let framed = Overlay::new();
        framed.set_overflow(gtk4::Overflow::Hidden);
        for class_name in frame_classes(&view.frame) {
            framed.add_css_class(class_name);
        }
        framed.set_child(Some(&body));
        if let Some(toolbar) = &view.toolbar {
            let row = self.build_toolbar(toolbar);
            row.set_valign(Align::Start);
            framed.add_overlay(&row);
        }
        self.root.append(&framed);
        if let Some(source) = &view.source {
            self.root.append(&build_source_panel(source));
        }
        tracing::trace!(sections = ?view.sections(), "preview widgets rebuilt");
    }

    fn schedule_refresh(&self) {
        let runtime = self.clone();
        gtk4::glib::idle_add_local_once(move || runtime.refresh());
    }

    fn build_toolbar(&self, toolbar: &ToolbarView) -> GtkBox {
        let row = GtkBox::new(Orientation::Horizontal, LAYOUT_TOKENS.spacing_4);
        row.add_css_class("preview-toolbar");
        row.set_size_request(-1, toolbar.height);
        if toolbar.border {
            row.add_css_class("bordered");
        }

        for (command, icon_name, tooltip) in TOOLBAR_ENTRIES {
            let button = icon_button(
                icon_name,
                tooltip,
                i32::from(LAYOUT_TOKENS.control_size),
                &["preview-toolbar-button"],
            );
            let runtime = self.clone();
            button.connect_clicked(move |_| {
                runtime.preview.borrow_mut().handle_toolbar(command);
                runtime.schedule_refresh();
            });
            row.append(&button);
        }

        if let Some(href) = toolbar.story_href() {
            let link = LinkButton::with_label(&href, "Open canvas in new tab");
            link.set_hexpand(true);
            link.set_halign(Align::End);
            row.append(&link);
        }
        row
    }

    fn build_action_bar(&self, actions: &[ActionView]) -> GtkBox {
        let bar = GtkBox::new(Orientation::Horizontal, LAYOUT_TOKENS.spacing_8);
        bar.add_css_class("preview-action-bar");
        bar.set_halign(Align::End);

        for (index, action) in actions.iter().enumerate() {
            let button = action_button(&action.title, action.disabled, &[]);
            let runtime = self.clone();
            button.connect_clicked(move |_| runtime.activate(index));
            bar.append(&button);
        }
        bar
    }

    /// Caller callbacks run without the preview borrowed so they may read it.
    fn activate(&self, index: usize) {
        let Some(item) = self.preview.borrow().action(index) else {
            return;
        };
        match item.handler() {
            ActionHandler::ToggleSource => {
                self.preview.borrow_mut().activate_action(index);
            }
            ActionHandler::Callback(callback) => {
                if !item.disabled {
                    (callback.as_ref())();
                }
            }
        }
        self.schedule_refresh();
    }
}

fn build_children(children: &ChildrenView, container_width: i32) -> Widget {
    let arrangement = &children.arrangement;
    let padding = arrangement.padding;
    let min_width = slot_min_width(arrangement, container_width);

    let flows = arrangement.display == ContainerDisplay::Flex && !arrangement.centered;
    let container: Widget = if flows {
        let flow = FlowBox::new();
        flow.set_selection_mode(SelectionMode::None);
        flow.set_homogeneous(false);
        if let Some(Length::FractionMinus { divisor, .. }) = arrangement.child.min_width {
            flow.set_max_children_per_line(divisor);
        }
        for slot in &children.slots {
            flow.insert(&build_slot(slot, arrangement.child.border_inset, min_width), -1);
        }
        flow.upcast()
    } else {
        let orientation = if arrangement.centered && arrangement.direction == FlowDirection::Row {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let stack = GtkBox::new(orientation, 0);
        for slot in &children.slots {
            stack.append(&build_slot(slot, arrangement.child.border_inset, min_width));
        }
        stack.upcast()
    };

    container.add_css_class("preview-children");
    container.add_css_class(arrangement.layout.as_str());
    container.set_margin_top(padding.top);
    container.set_margin_end(padding.right);
    container.set_margin_bottom(padding.bottom);
    container.set_margin_start(padding.left);
    if arrangement.centered {
        container.set_halign(Align::Center);
        container.set_valign(Align::Center);
    }
    container
}

fn build_slot(slot: &ChildSlot, border_inset: i32, min_width: Option<i32>) -> Frame {
    let label = Label::new(Some(&describe_child(&slot.child)));
    let frame = Frame::new(None);
    if let Some(width) = min_width {
        frame.set_size_request(width, -1);
    }
    frame.set_child(Some(&label));
    frame.add_css_class("preview-slot");
    frame.set_margin_top(border_inset);
    frame.set_margin_end(border_inset);
    frame.set_margin_bottom(border_inset);
    frame.set_margin_start(border_inset);
    frame
}

fn build_source_panel(source: &SourcePanelView) -> Label {
    let code = source.descriptor.code.as_deref().unwrap_or_default();
    let label = Label::new(Some(code));
    label.set_selectable(true);
    label.set_xalign(0.0);
    label.add_css_class("preview-source");
    label.add_css_class("monospace");
    if source.dark {
        label.add_css_class("dark");
    }
    label
}

fn frame_classes(frame: &ContainerFrame) -> Vec<&'static str> {
    let mut classes = vec!["preview-frame"];
    if frame.square_bottom_corners {
        classes.push("attached");
    }
    if frame.bottom_border {
        classes.push("bottom-border");
    }
    classes
}

/// Per-column minimum width, less the slot's own border inset on both sides.
fn slot_min_width(arrangement: &ChildrenArrangement, container_width: i32) -> Option<i32> {
    let inset = arrangement.child.border_inset * 2;
    arrangement
        .child
        .min_width
        .and_then(|length| length.resolve(container_width))
        .map(|width| (width - inset).max(0))
}

fn describe_child(child: &PreviewChild) -> String {
    match child {
        PreviewChild::Primitive(PrimitiveValue::Text(text)) => text.clone(),
        PreviewChild::Primitive(PrimitiveValue::Number(number)) => number.to_string(),
        PreviewChild::Story(item) => item.id.clone().unwrap_or_else(|| "story".to_string()),
    }
}

fn preview_css(child_zoom: f64) -> String {
    format!(
        "
.preview-slot > * {{
  transform: scale({child_zoom});
}}
.preview-frame {{
  border: 1px solid rgba(0, 0, 0, 0.1);
  border-bottom-width: 0;
  border-radius: {radius}px;
}}
.preview-frame.bottom-border {{
  border-bottom-width: 1px;
}}
.preview-frame.attached {{
  border-bottom-left-radius: 0;
  border-bottom-right-radius: 0;
}}
.preview-source {{
  border-top-left-radius: 0;
  border-top-right-radius: 0;
  border-bottom-left-radius: {radius}px;
  border-bottom-right-radius: {radius}px;
  padding: {padding}px;
}}
.preview-source.dark {{
  background: rgba(0, 0, 0, 0.85);
  color: #ffffff;
}}
",
        radius = LAYOUT_TOKENS.panel_radius,
        padding = LAYOUT_TOKENS.spacing_8,
    )
}
