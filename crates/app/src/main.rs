use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{ConfigError, QuizConfig};
use tracing::info;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidValue { flag: &'static str, raw: String },
    Config(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidValue { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct DesktopApp {
    initial_config: QuizConfig,
}

impl UiApp for DesktopApp {
    fn initial_config(&self) -> QuizConfig {
        self.initial_config
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--max-table <n>] [--questions <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --max-table 5");
    eprintln!("  --questions 10");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MATHBUDDY_MAX_TABLE, MATHBUDDY_QUESTIONS");
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name).ok().and_then(|value| value.parse().ok())
}

/// Setup-screen defaults from environment and flags; the fixed option
/// sets are a UI concern, so any valid bounds are accepted here.
fn parse_args(args: &mut impl Iterator<Item = String>) -> Result<QuizConfig, ArgsError> {
    let defaults = QuizConfig::default();
    let mut max_table = env_u32("MATHBUDDY_MAX_TABLE").unwrap_or(defaults.max_table());
    let mut question_count = env_u32("MATHBUDDY_QUESTIONS").unwrap_or(defaults.question_count());

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--max-table" => {
                let value = require_value(args, "--max-table")?;
                max_table = value.parse().map_err(|_| ArgsError::InvalidValue {
                    flag: "--max-table",
                    raw: value.clone(),
                })?;
            }
            "--questions" => {
                let value = require_value(args, "--questions")?;
                question_count = value.parse().map_err(|_| ArgsError::InvalidValue {
                    flag: "--questions",
                    raw: value.clone(),
                })?;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    QuizConfig::new(max_table, question_count).map_err(ArgsError::Config)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let initial_config = parse_args(&mut args).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    info!(
        max_table = initial_config.max_table(),
        question_count = initial_config.question_count(),
        "starting MathBuddy"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { initial_config });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("MathBuddy")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    dioxus::logger::initialize_default();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
