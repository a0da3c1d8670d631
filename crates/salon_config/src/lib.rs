// --- File: crates/salon_config/src/lib.rs ---
use config::{Config, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod models;
pub use config::ConfigError;
pub use models::*;


/// Prefix for environment overrides, e.g. `SALON__SCHEDULING__SLOT_MINUTES=15`.
pub const ENV_PREFIX: &str = "SALON";

/// Loads the application configuration.
///
/// Sources, later ones winning:
/// 1. built-in defaults (see [`models`])
/// 2. `<SALON_CONFIG_DIR>/default.{toml,yaml,json}` (optional)
/// 3. `<SALON_CONFIG_DIR>/<RUN_ENV>.{toml,yaml,json}` (optional)
/// 4. `SALON__*` environment variables
///
/// `SALON_CONFIG_DIR` defaults to `config` relative to the working directory,
/// `RUN_ENV` defaults to `debug`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let config_dir = env::var("SALON_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));
    load_config_from_dir(&config_dir)
}

/// Same as [`load_config`] but reads the files from an explicit directory.
pub fn load_config_from_dir(config_dir: &Path) -> Result<AppConfig, ConfigError> {
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);
    debug!(
        "Loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

    builder.build()?.try_deserialize()
}

/// Parses a TOML document on top of the built-in defaults.
pub fn load_config_from_str(toml: &str) -> Result<AppConfig, ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment, at most once.
///
/// The file is `DOTENV_OVERRIDE` if set, otherwise the first command line
/// argument when it starts with `.env`, otherwise `.env`. A missing file is
/// not an error. Returns the path that was tried.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
