/// Compile-time layout tokens for preview blocks — not user-overridable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub gutter: i32,
    pub content_padding_vertical: i32,
    pub content_padding_horizontal: i32,
    pub content_margin: i32,
    pub child_border_inset: i32,
    pub toolbar_height: i32,
    pub container_margin_top: i32,
    pub container_margin_bottom: i32,
    pub panel_radius: u16,
    pub control_size: u16,
    pub spacing_4: i32,
    pub spacing_8: i32,
}

pub const LAYOUT_TOKENS: StyleTokens = StyleTokens {
    gutter: 20,
    content_padding_vertical: 30,
    content_padding_horizontal: 20,
    content_margin: -10,
    child_border_inset: 10,
    toolbar_height: 40,
    container_margin_top: 25,
    container_margin_bottom: 40,
    panel_radius: 4,
    control_size: 28,
    spacing_4: 4,
    spacing_8: 8,
};
