use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Filesystem layout for everything the service persists: the vector
/// database, the feedback log, daily log files, and the settings file.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub db_path: PathBuf,
    pub feedback_path: PathBuf,
    pub settings_path: PathBuf,
}

impl AppPaths {
    pub fn new() -> Self {
        Self::with_data_dir(discover_data_dir())
    }

    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        let log_dir = data_dir.join("logs");
        let db_path = data_dir.join("helpbot.db");
        let feedback_path = data_dir.join("feedback.txt");
        let settings_path = data_dir.join("helpbot.toml");

        for dir in [&data_dir, &log_dir] {
            let _ = fs::create_dir_all(dir);
        }

        AppPaths {
            data_dir,
            log_dir,
            db_path,
            feedback_path,
            settings_path,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

fn discover_data_dir() -> PathBuf {
    if let Ok(dir) = env::var("HELPBOT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("helpbot-data")
}

/// Runtime settings, loaded from `helpbot.toml` in the data directory with
/// environment-variable overrides for the endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Base URL of the OpenAI-compatible endpoint used for generation.
    pub llm_base_url: String,
    /// Model id sent with chat completions.
    pub chat_model: String,
    /// Base URL of the OpenAI-compatible embeddings endpoint.
    pub embedding_base_url: String,
    /// Pinned embedding model. Changing this invalidates the stored corpus;
    /// the vector store refuses to open against a mismatched version.
    pub embedding_model: String,
    /// Output dimension of the embedding model.
    pub embedding_dimension: usize,
    /// Number of nearest chunks retrieved per question.
    pub top_k: usize,
    /// Character budget for the assembled context.
    pub max_context_chars: usize,
    /// Sampling temperature for generation.
    pub temperature: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bind_addr: "127.0.0.1:8000".to_string(),
            llm_base_url: "http://127.0.0.1:1234".to_string(),
            chat_model: "claude-3-5-sonnet".to_string(),
            embedding_base_url: "http://127.0.0.1:8090".to_string(),
            embedding_model: "all-MiniLM-L6-v2".to_string(),
            embedding_dimension: 384,
            top_k: 20,
            max_context_chars: 8000,
            temperature: 0.0,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut settings = if path.exists() {
            let raw = fs::read_to_string(path)?;
            toml::from_str(&raw)?
        } else {
            Settings::default()
        };
        settings.apply_env_overrides();
        Ok(settings)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(addr) = env::var("HELPBOT_BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Ok(url) = env::var("HELPBOT_LLM_BASE_URL") {
            self.llm_base_url = url;
        }
        if let Ok(url) = env::var("HELPBOT_EMBEDDING_BASE_URL") {
            self.embedding_base_url = url;
        }
    }
}
