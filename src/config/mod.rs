use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "docpreview";
const APP_CONFIG_FILE: &str = "config.json";
const DEFAULT_ZOOM_IN_FACTOR: f64 = 1.25;
const DEFAULT_ZOOM_OUT_FACTOR: f64 = 0.8;

/// Preview settings from `config.json`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    pub with_toolbar: bool,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            zoom_in_factor: DEFAULT_ZOOM_IN_FACTOR,
            zoom_out_factor: DEFAULT_ZOOM_OUT_FACTOR,
            with_toolbar: false,
        }
    }
}

impl PreviewSettings {
    fn sanitized(mut self) -> Self {
        if !is_valid_zoom_factor(self.zoom_in_factor) {
            tracing::warn!(
                factor = self.zoom_in_factor,
                "invalid zoom_in_factor; using default"
            );
            self.zoom_in_factor = DEFAULT_ZOOM_IN_FACTOR;
        }
        if !is_valid_zoom_factor(self.zoom_out_factor) {
            tracing::warn!(
                factor = self.zoom_out_factor,
                "invalid zoom_out_factor; using default"
            );
            self.zoom_out_factor = DEFAULT_ZOOM_OUT_FACTOR;
        }
        self
    }
}

fn is_valid_zoom_factor(factor: f64) -> bool {
    factor.is_finite() && factor > 0.0
}

pub fn load_preview_settings() -> PreviewSettings {
    let (xdg_config_home, home) = config_env_dirs();
    load_preview_settings_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_preview_settings_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> PreviewSettings {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return PreviewSettings::default(),
    };
    if !path.exists() {
        return PreviewSettings::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str::<PreviewSettings>(&contents)
            .map(PreviewSettings::sanitized)
            .unwrap_or_else(|err| {
                tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
                PreviewSettings::default()
            }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            PreviewSettings::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
