use gtk4::prelude::*;
use gtk4::Button;

pub fn icon_button(
    icon_name: &str,
    tooltip: &str,
    control_size: i32,
    extra_classes: &[&str],
) -> Button {
    let button = Button::from_icon_name(icon_name);
    button.set_focus_on_click(false);
    button.set_tooltip_text(Some(tooltip));
    button.add_css_class("flat");
    button.add_css_class("icon-button");
    for css_class in extra_classes {
        button.add_css_class(css_class);
    }
    button.set_size_request(control_size, control_size);
    button
}

pub fn action_button(title: &str, disabled: bool, extra_classes: &[&str]) -> Button {
    let button = Button::with_label(title);
    button.set_focus_on_click(false);
    button.set_sensitive(!disabled);
    button.add_css_class("flat");
    button.add_css_class("action-bar-item");
    for css_class in extra_classes {
        button.add_css_class(css_class);
    }
    button
}
