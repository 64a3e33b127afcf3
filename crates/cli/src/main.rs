// edtheme CLI - inspect and export editor themes, manage the theme preference

mod exit_codes;
mod logging;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use edtheme_config::{ConfigError, Settings, ThemeSelection, UiThemeConfig};
use edtheme_registry::{validate_builtin, ThemeError, ThemeRegistry};

use exit_codes::{EXIT_ERROR, EXIT_INVALID, EXIT_NOT_FOUND, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "edtheme")]
#[command(about = "Editor theme registry: list, export and select themes")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    /// Log filter (env_logger syntax)
    #[arg(long, global = true, env = "EDTHEME_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered themes in declared order
    List {
        /// Emit a JSON array of {name, alias_of, appearance}
        #[arg(long)]
        json: bool,
    },

    /// Print a theme in the editor's theme JSON format
    #[command(after_help = "\
Examples:
  edtheme show dracula
  edtheme show forest --compact > forest.json")]
    Show {
        /// Display name (exact match)
        name: String,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check every built-in theme table
    Validate,

    /// Print the UI theme list as JSON (stock names, custom themes with `extends`)
    UiConfig,

    /// Show the editor theme the saved preference resolves to
    Current {
        /// Settings file (default: <config dir>/edtheme/settings.json)
        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// Save a theme preference
    #[command(after_help = "\
Examples:
  edtheme set forest              # UI theme; the editor follows it
  edtheme set dracula --editor    # pin the editor theme
  edtheme set --editor --clear    # follow the UI theme again")]
    Set {
        /// UI theme name, or editor theme name with --editor
        #[arg(required_unless_present = "clear")]
        name: Option<String>,

        /// Set the editor theme override instead of the UI theme
        #[arg(long)]
        editor: bool,

        /// Remove the editor theme override
        #[arg(long, requires = "editor", conflicts_with = "name")]
        clear: bool,

        /// Settings file (default: <config dir>/edtheme/settings.json)
        #[arg(long)]
        settings: Option<PathBuf>,
    },
}

fn long_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nbuild:   debug",
            "\ntarget:  ", env!("TARGET"),
        )
    } else {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nbuild:   release",
            "\ntarget:  ", env!("TARGET"),
        )
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup_logger(&cli.log_level);

    let result = match cli.command {
        Commands::List { json } => cmd_list(json),
        Commands::Show { name, compact } => cmd_show(&name, compact),
        Commands::Validate => cmd_validate(),
        Commands::UiConfig => cmd_ui_config(),
        Commands::Current { settings } => cmd_current(settings.as_deref()),
        Commands::Set { name, editor, clear, settings } => {
            cmd_set(name.as_deref(), editor, clear, settings.as_deref())
        }
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, msg: impl Into<String>) -> Self {
        Self { code, message: msg.into(), hint: None }
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::new(EXIT_ERROR, msg)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<ThemeError> for CliError {
    fn from(e: ThemeError) -> Self {
        let code = match e {
            ThemeError::NotFound { .. } => EXIT_NOT_FOUND,
            ThemeError::EmptyName => EXIT_USAGE,
            ThemeError::InvalidTheme { .. }
            | ThemeError::InvalidColor { .. }
            | ThemeError::InvalidFontStyle { .. }
            | ThemeError::DuplicateColorKey { .. }
            | ThemeError::BlankKey { .. }
            | ThemeError::EmptyRule { .. } => EXIT_INVALID,
            _ => EXIT_ERROR,
        };
        let err = CliError::new(code, e.to_string());
        if code == EXIT_NOT_FOUND {
            err.with_hint("run `edtheme list` to see available themes")
        } else {
            err
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Theme(theme) => theme.into(),
            other => CliError::io(other.to_string()),
        }
    }
}

fn registry() -> Result<Arc<ThemeRegistry>, CliError> {
    Ok(Arc::new(ThemeRegistry::builtin()?))
}

fn write_stdout(text: &str) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", text).map_err(|e| CliError::io(e.to_string()))
}

fn settings_path(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf).unwrap_or_else(Settings::config_path)
}

// ============================================================================
// list
// ============================================================================

fn cmd_list(json: bool) -> Result<(), CliError> {
    let registry = registry()?;

    if json {
        let entries: Vec<_> = registry
            .list()
            .iter()
            .map(|e| {
                serde_json::json!({
                    "name": e.name(),
                    "alias_of": e.alias_of(),
                    "appearance": e.definition().appearance(),
                })
            })
            .collect();
        let out = serde_json::to_string(&entries).map_err(|e| CliError::io(e.to_string()))?;
        return write_stdout(&out);
    }

    for entry in registry.list() {
        match entry.alias_of() {
            Some(target) => write_stdout(&format!("{} -> {}", entry.name(), target))?,
            None => write_stdout(entry.name())?,
        }
    }
    Ok(())
}

// ============================================================================
// show
// ============================================================================

fn cmd_show(name: &str, compact: bool) -> Result<(), CliError> {
    let registry = registry()?;
    let theme = registry.resolve(name)?;
    let out = if compact { theme.to_json()? } else { theme.to_json_pretty()? };
    write_stdout(&out)
}

// ============================================================================
// validate
// ============================================================================

fn cmd_validate() -> Result<(), CliError> {
    let errors = validate_builtin();
    if errors.is_empty() {
        let registry = registry()?;
        log::info!("{} themes valid", registry.len());
        return write_stdout("ok");
    }

    for e in &errors {
        eprintln!("{}", e);
    }
    Err(CliError::new(EXIT_INVALID, format!("{} problem(s) in built-in themes", errors.len())))
}

// ============================================================================
// ui-config
// ============================================================================

fn cmd_ui_config() -> Result<(), CliError> {
    let config = UiThemeConfig::default();
    let out = config.to_json_pretty().map_err(|e| CliError::io(e.to_string()))?;
    write_stdout(&out)
}

// ============================================================================
// current / set
// ============================================================================

fn cmd_current(settings: Option<&Path>) -> Result<(), CliError> {
    let settings = match settings {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let selection = ThemeSelection::from_settings(registry()?, &settings)?;

    if selection.fell_back() {
        eprintln!(
            "note: '{}' has no editor theme, using '{}'",
            selection.requested(),
            selection.name()
        );
    }
    write_stdout(selection.name())
}

fn cmd_set(name: Option<&str>, editor: bool, clear: bool, settings: Option<&Path>) -> Result<(), CliError> {
    let path = settings_path(settings);
    // Strict read: a file we cannot parse is never overwritten
    let mut current = if path.exists() {
        Settings::read(&path).map_err(|e| {
            CliError::from(e).with_hint(format!("fix or remove {}", path.display()))
        })?
    } else {
        Settings::default()
    };

    if clear {
        current.editor_theme = None;
    } else {
        let name = name.ok_or_else(|| CliError::new(EXIT_USAGE, "missing theme name"))?;
        if name.is_empty() {
            return Err(ThemeError::EmptyName.into());
        }
        if editor {
            // Explicit choices must resolve; no fallback here
            registry()?.resolve(name)?;
            current.editor_theme = Some(name.to_string());
        } else {
            let ui = UiThemeConfig::default();
            if !ui.contains(name) {
                return Err(CliError::new(EXIT_NOT_FOUND, format!("UI theme not found: '{name}'"))
                    .with_hint(format!("available: {}", ui.names().collect::<Vec<_>>().join(", "))));
            }
            current.ui_theme = name.to_string();
        }
    }

    current.save_to(&path)?;
    log::info!("saved preference to {}", path.display());
    write_stdout(current.editor_theme_name())
}
