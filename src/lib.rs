pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod preview;
pub mod ui;

use std::path::PathBuf;

pub use error::{AppError, AppResult};

use document::PreviewEvent;

/// Parsed command line: `docpreview [--window] [--events LIST] DOCUMENT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub document: PathBuf,
    pub events: Vec<PreviewEvent>,
    pub window: bool,
}

pub fn parse_args(mut args: pico_args::Arguments) -> AppResult<RunOptions> {
    let window = args.contains("--window");
    let events = args
        .opt_value_from_fn("--events", document::parse_events)?
        .unwrap_or_default();
    let free = args.finish();
    let unexpected: Vec<String> = free
        .iter()
        .enumerate()
        .filter(|(index, arg)| *index > 0 || arg.to_string_lossy().starts_with('-'))
        .map(|(_, arg)| arg.to_string_lossy().into_owned())
        .collect();
    if !unexpected.is_empty() {
        return Err(AppError::UnexpectedArguments(unexpected));
    }
    let document = free
        .into_iter()
        .next()
        .map(PathBuf::from)
        .ok_or(AppError::MissingDocumentPath)?;

    Ok(RunOptions {
        document,
        events,
        window,
    })
}

/// Entrypoint used by the CLI binary.
pub fn run() -> AppResult<()> {
    logging::init();
    let options = parse_args(pico_args::Arguments::from_env())?;
    tracing::info!(document = ?options.document, "starting docpreview");

    let settings = config::load_preview_settings();
    let mut preview = document::load_document(&options.document)?.into_preview(settings);
    for event in &options.events {
        event.apply(&mut preview);
    }

    if options.window {
        return present_window(preview);
    }

    let rendered =
        serde_json::to_string_pretty(&preview.render()).map_err(AppError::Encode)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(feature = "gtk")]
fn present_window(preview: preview::Preview) -> AppResult<()> {
    ui::render::present(preview);
    Ok(())
}

#[cfg(not(feature = "gtk"))]
fn present_window(_preview: preview::Preview) -> AppResult<()> {
    Err(AppError::WindowUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use crate::preview::ToolbarCommand;

    fn args_from<const N: usize>(args: [&str; N]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(args.into_iter().map(OsString::from).collect())
    }

    #[test]
    fn parse_args_reads_flags_and_document() {
        let options = parse_args(args_from([
            "--window",
            "--events",
            "zoom-in,activate:1",
            "preview.json",
        ]))
        .expect("arguments should parse");

        assert!(options.window);
        assert_eq!(options.document, PathBuf::from("preview.json"));
        assert_eq!(
            options.events,
            [
                PreviewEvent::Toolbar(ToolbarCommand::ZoomIn),
                PreviewEvent::Activate(1),
            ]
        );
    }

    #[test]
    fn parse_args_requires_document_path() {
        let err = parse_args(args_from(["--window"])).expect_err("path is required");
        assert!(matches!(err, AppError::MissingDocumentPath));
    }

    #[test]
    fn parse_args_rejects_leftover_arguments() {
        let err = parse_args(args_from(["--verbose", "preview.json"]))
            .expect_err("unknown flag should fail");
        let AppError::UnexpectedArguments(args) = err else {
            panic!("expected leftover arguments");
        };
        assert_eq!(args, ["--verbose", "preview.json"]);

        let err = parse_args(args_from(["preview.json", "other.json"]))
            .expect_err("second path should fail");
        let AppError::UnexpectedArguments(args) = err else {
            panic!("expected leftover arguments");
        };
        assert_eq!(args, ["other.json"]);
    }

    #[test]
    fn parse_args_rejects_unknown_events() {
        let err = parse_args(args_from(["--events", "spin", "preview.json"]))
            .expect_err("unknown event should fail");
        assert!(matches!(err, AppError::Arguments(_)));
    }
}
