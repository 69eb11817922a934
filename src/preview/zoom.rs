use serde::Serialize;

const DEFAULT_ZOOM_SCALE: f64 = 1.0;

/// Zoom scale owned by one preview instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    scale: f64,
}

/// Read-only view of the zoom scale handed down the render tree of one preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoomContext {
    scale: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomState {
    pub const fn new() -> Self {
        Self {
            scale: DEFAULT_ZOOM_SCALE,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Multiplies the scale; callers pass positive factors only.
    pub fn apply_zoom_factor(&mut self, factor: f64) {
        let previous = self.scale;
        self.scale *= factor;
        tracing::debug!(previous, factor, scale = self.scale, "preview zoom applied");
    }

    pub fn reset_zoom(&mut self) {
        self.scale = DEFAULT_ZOOM_SCALE;
        tracing::debug!("preview zoom reset");
    }

    pub fn context(&self) -> ZoomContext {
        ZoomContext { scale: self.scale }
    }
}

impl ZoomContext {
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Visual zoom applied to each direct child: the reciprocal of the shared scale.
    pub fn child_zoom(&self) -> f64 {
        1.0 / self.scale
    }
}

impl Default for ZoomContext {
    fn default() -> Self {
        ZoomState::new().context()
    }
}
