//! Config discovery and layered merging.
//!
//! Sources, weakest first: built-in defaults, the XDG global file, a
//! project-local `cardio.toml` (or `.cardio.toml`), `CARDIO_*` environment
//! variables, and finally an explicit `--config` path. Later layers win
//! per key; a file that sets only `[service] timeout_secs` inherits
//! everything else.

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const GLOBAL_DIR: &str = "cardio-quorum";
const PROJECT_FILES: [&str; 2] = ["cardio.toml", ".cardio.toml"];

/// Discovers and merges configuration sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Merge every discovered source into one [`FileConfig`].
    pub fn load(explicit: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut layers = Figment::from(Serialized::defaults(FileConfig::default()));

        for path in Self::discovered_files() {
            layers = layers.merge(Toml::file(path));
        }
        // CARDIO_SERVICE__BASE_URL=... maps onto [service] base_url
        layers = layers.merge(Env::prefixed("CARDIO_").split("__"));
        if let Some(path) = explicit {
            layers = layers.merge(Toml::file(path));
        }

        layers.extract().map_err(Box::new)
    }

    /// Built-in defaults only, for `--no-config`.
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Config files that exist on disk, weakest first.
    fn discovered_files() -> impl Iterator<Item = PathBuf> {
        Self::global_config_path()
            .into_iter()
            .chain(Self::project_config_path())
            .filter(|path| path.exists())
    }

    /// `$XDG_CONFIG_HOME/cardio-quorum/config.toml` (platform equivalent).
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(GLOBAL_DIR).join("config.toml"))
    }

    /// The project-local config file, if one exists in the working directory.
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(Path::to_path_buf)
    }

    /// Print where configuration is read from, for `--show-config`.
    pub fn print_config_sources() {
        println!("Configuration sources (weakest first):");
        println!("  built-in defaults");

        match Self::global_config_path() {
            Some(path) if path.exists() => println!("  {} (found)", path.display()),
            Some(path) => println!("  {} (absent)", path.display()),
            None => println!("  <no platform config directory>"),
        }

        match Self::project_config_path() {
            Some(path) => println!("  ./{} (found)", path.display()),
            None => println!("  ./cardio.toml or ./.cardio.toml (absent)"),
        }

        println!("  CARDIO_* environment variables");
        println!("  --config <path>, if given");
    }
}
