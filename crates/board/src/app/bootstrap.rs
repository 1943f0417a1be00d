use std::path::PathBuf;

use engine::{BackgroundSource, LoopConfig, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::tabletop::{self, TabletopScene};

pub(crate) const BACKGROUND_ENV_VAR: &str = "BOARD_BACKGROUND";
const WINDOW_TITLE: &str = "Board";

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CliOptions {
    pub(crate) background: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CliCommand {
    Help,
    Run(CliOptions),
}

/// A positional path wins over the environment fallback. An empty env value counts as unset.
pub(crate) fn parse_args(
    args: &[String],
    env_background: Option<String>,
) -> Result<CliCommand, String> {
    let mut background = None;
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option '{flag}'"));
            }
            path => {
                if background.is_some() {
                    return Err(format!("unexpected argument '{path}'"));
                }
                background = Some(PathBuf::from(path));
            }
        }
    }

    let background = background.or_else(|| {
        env_background
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from)
    });
    Ok(CliCommand::Run(CliOptions { background }))
}

pub(crate) fn usage_text() -> String {
    [
        "board - tabletop token sandbox",
        "",
        "Usage:",
        "  board [<background-image>]",
        "",
        "Environment:",
        "  BOARD_BACKGROUND  background image used when no path is given",
        "  RUST_LOG          log filter (default: info)",
        "",
        "Keys:",
        "  r / g / b         spawn a red / green / blue token",
        "  drag (left)       move a token; double-click edits its label",
        "  drag (right)      measure with the ruler",
        "  1-9, 0            dice count; space or d rolls",
        "  delete            remove the selected token",
        "  ctrl+c            clear the board",
    ]
    .join("\n")
}

pub(crate) fn build_app(options: CliOptions) -> AppWiring {
    init_tracing();
    info!("=== Board Startup ===");

    let (window_width, window_height) = tabletop::board_size_px();
    let background = options
        .background
        .map_or_else(BackgroundSource::default, BackgroundSource::Image);
    let config = LoopConfig {
        window_title: WINDOW_TITLE.to_string(),
        window_width,
        window_height,
        background,
        ..LoopConfig::default()
    };

    AppWiring {
        config,
        scene: Box::new(TabletopScene::new(StdRng::from_os_rng())),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn no_arguments_runs_with_solid_background() {
        assert_eq!(
            parse_args(&[], None),
            Ok(CliCommand::Run(CliOptions::default()))
        );
    }

    #[test]
    fn positional_argument_is_background_path() {
        assert_eq!(
            parse_args(&args(&["maps/cave.png"]), Some("other.png".to_string())),
            Ok(CliCommand::Run(CliOptions {
                background: Some(PathBuf::from("maps/cave.png")),
            }))
        );
    }

    #[test]
    fn env_var_is_fallback_background() {
        assert_eq!(
            parse_args(&[], Some(" forest.jpg ".to_string())),
            Ok(CliCommand::Run(CliOptions {
                background: Some(PathBuf::from("forest.jpg")),
            }))
        );
        assert_eq!(
            parse_args(&[], Some("   ".to_string())),
            Ok(CliCommand::Run(CliOptions::default()))
        );
    }

    #[test]
    fn help_flags_win() {
        assert_eq!(parse_args(&args(&["-h"]), None), Ok(CliCommand::Help));
        assert_eq!(
            parse_args(&args(&["map.png", "--help"]), None),
            Ok(CliCommand::Help)
        );
    }

    #[test]
    fn unknown_flag_is_usage_error() {
        let err = parse_args(&args(&["--fullscreen"]), None).unwrap_err();
        assert!(err.contains("--fullscreen"));
    }

    #[test]
    fn second_positional_is_usage_error() {
        assert!(parse_args(&args(&["a.png", "b.png"]), None).is_err());
    }

    #[test]
    fn usage_mentions_env_var() {
        assert!(usage_text().contains(BACKGROUND_ENV_VAR));
    }
}
