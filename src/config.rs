//! Configuration for the Studeo agent
//!
//! Layered: built-in defaults, then an optional TOML config file
//! (`~/.config/studeo/config.toml`), then environment variables. All file
//! fields are optional — the file is a partial overlay.

use std::path::PathBuf;

use serde::Deserialize;

use crate::Result;

/// Env var holding the compression-service credential
pub const API_KEY_ENV: &str = "TTC_API_KEY";

/// Env var holding the default study document path
pub const DOCUMENT_PATH_ENV: &str = "STUDY_PDF_PATH";

/// Env var overriding the cache file location
pub const CACHE_FILE_ENV: &str = "STUDY_MATERIAL_CACHE_FILE";

const CACHE_FILE_NAME: &str = "study_material_cache.txt";

/// Studeo agent configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Compression-service credential, if configured
    pub api_key: Option<String>,

    /// Default study document, used when no document is passed explicitly
    pub document_path: Option<PathBuf>,

    /// Location of the single-slot material cache
    pub cache_path: PathBuf,

    /// Voice-session model stack
    pub voice: VoiceConfig,
}

/// Model stack handed to the external voice runtime
#[derive(Debug, Clone)]
pub struct VoiceConfig {
    /// STT model (e.g. "nova-2")
    pub stt_model: String,

    /// LLM model for grading (e.g. "gpt-4o")
    pub llm_model: String,

    /// TTS voice identifier
    pub tts_voice: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            stt_model: "nova-2".to_string(),
            llm_model: "gpt-4o".to_string(),
            tts_voice: "rachel".to_string(),
        }
    }
}

/// Top-level TOML config file schema
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    /// Default study document path
    document: Option<PathBuf>,

    /// Cache file location
    cache_file: Option<PathBuf>,

    /// Voice model overrides
    #[serde(default)]
    voice: VoiceFileConfig,
}

/// Voice section of the config file
#[derive(Debug, Default, Deserialize)]
struct VoiceFileConfig {
    stt_model: Option<String>,
    llm_model: Option<String>,
    tts_voice: Option<String>,
}

impl Config {
    /// Load configuration from defaults, the config file, and environment
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        let file = load_config_file()?;
        Ok(Self::from_overlay(file))
    }

    fn from_overlay(file: ConfigFile) -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());

        let document_path = std::env::var(DOCUMENT_PATH_ENV)
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or(file.document);

        let cache_path = std::env::var(CACHE_FILE_ENV)
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or(file.cache_file)
            .unwrap_or_else(default_cache_path);

        let defaults = VoiceConfig::default();
        let voice = VoiceConfig {
            stt_model: file.voice.stt_model.unwrap_or(defaults.stt_model),
            llm_model: file.voice.llm_model.unwrap_or(defaults.llm_model),
            tts_voice: file.voice.tts_voice.unwrap_or(defaults.tts_voice),
        };

        Self {
            api_key,
            document_path,
            cache_path,
            voice,
        }
    }
}

/// Default cache location in the platform data directory
fn default_cache_path() -> PathBuf {
    directories::ProjectDirs::from("dev", "studeo", "studeo").map_or_else(
        || PathBuf::from(CACHE_FILE_NAME),
        |dirs| dirs.data_dir().join(CACHE_FILE_NAME),
    )
}

/// Load the optional config file, treating a missing file as empty
fn load_config_file() -> Result<ConfigFile> {
    let Some(path) = directories::ProjectDirs::from("dev", "studeo", "studeo")
        .map(|dirs| dirs.config_dir().join("config.toml"))
    else {
        return Ok(ConfigFile::default());
    };

    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    tracing::debug!(path = %path.display(), "loading config file");
    let content = std::fs::read_to_string(&path)?;
    Ok(toml::from_str(&content)?)
}
