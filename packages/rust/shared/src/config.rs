//! Application configuration for the curriculum tools.
//!
//! User config lives at `~/.curriculum/curriculum.toml`.
//! CLI flags override config file values, which override defaults.
//! Nothing here changes page content; config only drives URLs and export.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CurriculumError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "curriculum.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".curriculum";

// ---------------------------------------------------------------------------
// Config structs (matching curriculum.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Public site settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Export settings.
    #[serde(default)]
    pub export: ExportConfig,
}

/// `[site]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute origin used for canonical URLs and structured data.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Organisation name used in structured data.
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// First path segment of curriculum pages.
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            site_name: default_site_name(),
            route_prefix: default_route_prefix(),
        }
    }
}

impl SiteConfig {
    /// Parse `base_url`, rejecting relative or non-http(s) values.
    ///
    /// `base_url` is an origin only: page paths are absolute, so a subpath
    /// would be silently replaced when joining.
    pub fn base(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            CurriculumError::config(format!("invalid base_url '{}': {e}", self.base_url))
        })?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(CurriculumError::config(format!(
                    "base_url must be http or https, got '{other}'"
                )));
            }
        }
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(CurriculumError::config(format!(
                "base_url must be an origin without a path, got '{}'",
                self.base_url
            )));
        }
        Ok(url)
    }

    /// Check `route_prefix` is a single non-empty path segment.
    pub fn validate_route_prefix(&self) -> Result<()> {
        let prefix = &self.route_prefix;
        let valid = !prefix.is_empty()
            && !prefix.contains('/')
            && prefix != "."
            && prefix != ".."
            && !prefix.chars().any(|c| c.is_whitespace() || c == '?' || c == '#');
        if valid {
            Ok(())
        } else {
            Err(CurriculumError::config(format!(
                "route_prefix must be a single path segment, got '{prefix}'"
            )))
        }
    }

    /// Join a site-relative path onto the base URL.
    pub fn absolute(&self, path: &str) -> Result<String> {
        let joined = self
            .base()?
            .join(path)
            .map_err(|e| CurriculumError::config(format!("cannot join '{path}': {e}")))?;
        Ok(joined.to_string())
    }
}

fn default_base_url() -> String {
    "https://www.example-tutors.ae".into()
}
fn default_site_name() -> String {
    "Apex Tutoring Institute".into()
}
fn default_route_prefix() -> String {
    "curriculum".into()
}

/// `[export]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the site data is written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Pretty-print JSON files.
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Also write a Markdown preview per page.
    #[serde(default = "default_true")]
    pub emit_markdown: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            pretty: true,
            emit_markdown: true,
        }
    }
}

fn default_output_dir() -> String {
    "site-data".into()
}
fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.curriculum/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CurriculumError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.curriculum/curriculum.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| CurriculumError::io(path, e))?;
    parse_config(&content).map_err(|e| match e {
        CurriculumError::Config { message } => {
            CurriculumError::config(format!("{}: {message}", path.display()))
        }
        other => other,
    })
}

/// Parse and validate config from a TOML string.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(content)
        .map_err(|e| CurriculumError::config(format!("failed to parse: {e}")))?;
    config.site.base()?;
    config.site.validate_route_prefix()?;
    Ok(config)
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| CurriculumError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| CurriculumError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| CurriculumError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
