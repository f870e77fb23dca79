use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use wikiweave_engine::config::{Interwiki, InterwikiError, ParserConfig};

/// Environment variables read by [`Config::from_env`].
pub mod vars {
    pub const CONFIG: &str = "WIKIWEAVE_CONFIG";
    pub const NAMESPACE: &str = "WIKIWEAVE_NAMESPACE";
    pub const PAGES_BASE: &str = "WIKIWEAVE_PAGES_BASE";
    pub const MEDIA_BASE: &str = "WIKIWEAVE_MEDIA_BASE";
    pub const INTERWIKI: &str = "WIKIWEAVE_INTERWIKI";
    pub const USE_TXT_EXTENSION: &str = "WIKIWEAVE_USE_TXT_EXTENSION";
    pub const DOKUWIKI_PATHS: &str = "WIKIWEAVE_DOKUWIKI_PATHS";
    pub const HTML: &str = "WIKIWEAVE_HTML";
    pub const TYPOGRAPHY: &str = "WIKIWEAVE_TYPOGRAPHY";
    pub const EMOJI: &str = "WIKIWEAVE_EMOJI";
    pub const TOC: &str = "WIKIWEAVE_TOC";
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config file {config_path} does not exist")]
    ConfigNotFound { config_path: PathBuf },

    #[error("{var}={value:?} is not a flag (expected 1/0, true/false, yes/no or on/off)")]
    InvalidFlag { var: String, value: String },

    #[error("Interwiki entry {entry:?} is not of the form prefix=url")]
    MalformedInterwiki { entry: String },

    #[error("Interwiki entry {entry:?} is invalid: {source}")]
    InvalidInterwiki {
        entry: String,
        source: InterwikiError,
    },
}

/// Parser options as stored in a TOML file.
///
/// The file uses the `ParserConfig` field names at the top level, with the
/// interwiki table under `[interwiki]`:
///
/// ```toml
/// current_namespace = "wiki"
/// toc_enabled = true
///
/// [interwiki]
/// gh = "https://github.com/{NAME}"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub parser: ParserConfig,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Loads from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from variables returned by `lookup`.
    ///
    /// The file named by `WIKIWEAVE_CONFIG` (shell-expanded) is loaded first
    /// and must exist; the other variables override it. Unset variables keep
    /// the file's or the default values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(vars::CONFIG).filter(|p| !p.trim().is_empty()) {
            Some(raw) => {
                let config_path = Self::expand_path(raw.trim(), &lookup);
                Self::load_from_path(&config_path)?
                    .ok_or(ConfigError::ConfigNotFound { config_path })?
            }
            None => Self::default(),
        };
        config.apply_overrides(&lookup)?;
        Ok(config)
    }

    fn apply_overrides<F>(&mut self, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parser = &mut self.parser;
        if let Some(value) = lookup(vars::NAMESPACE) {
            parser.current_namespace = value.trim().to_string();
        }
        if let Some(value) = lookup(vars::PAGES_BASE) {
            parser.pages_base_path = value.trim().to_string();
        }
        if let Some(value) = lookup(vars::MEDIA_BASE) {
            parser.media_base_path = value.trim().to_string();
        }
        if let Some(value) = lookup(vars::INTERWIKI) {
            parse_interwiki(&value, &mut parser.interwiki)?;
        }

        let flags: [(&str, &mut bool); 6] = [
            (vars::USE_TXT_EXTENSION, &mut parser.use_txt_extension),
            (vars::DOKUWIKI_PATHS, &mut parser.use_dokuwiki_paths),
            (vars::HTML, &mut parser.html_embed_allowed),
            (vars::TYPOGRAPHY, &mut parser.typography_enabled),
            (vars::EMOJI, &mut parser.use_emoji),
            (vars::TOC, &mut parser.toc_enabled),
        ];
        for (var, field) in flags {
            if let Some(value) = lookup(var) {
                *field = parse_flag(var, &value)?;
            }
        }
        Ok(())
    }

    /// Expands `~` and `$VAR` using the same lookup as the other variables.
    fn expand_path<F>(raw: &str, lookup: &F) -> PathBuf
    where
        F: Fn(&str) -> Option<String>,
    {
        let expanded = shellexpand::full_with_context_no_errors(raw, || lookup("HOME"), lookup);
        PathBuf::from(expanded.as_ref())
    }

    pub fn parser_config(&self) -> &ParserConfig {
        &self.parser
    }

    pub fn into_parser_config(self) -> ParserConfig {
        self.parser
    }
}

/// Parses a boolean environment value.
pub fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Merges `prefix=url` entries, separated by commas or newlines, into `table`.
pub fn parse_interwiki(entries: &str, table: &mut Interwiki) -> Result<(), ConfigError> {
    for entry in entries
        .split([',', '\n'])
        .map(str::trim)
        .filter(|e| !e.is_empty())
    {
        let Some((prefix, base)) = entry.split_once('=') else {
            return Err(ConfigError::MalformedInterwiki {
                entry: entry.to_string(),
            });
        };
        table
            .insert(prefix, base)
            .map_err(|source| ConfigError::InvalidInterwiki {
                entry: entry.to_string(),
                source,
            })?;
    }
    Ok(())
}
