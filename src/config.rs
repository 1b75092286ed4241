use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_state_path")]
    pub state_path: String,

    /// Daily trigger time, `HH:MM` in server local time.
    #[serde(default = "default_run_at")]
    pub run_at: String,

    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    #[serde(default)]
    pub run_on_startup: bool,

    #[serde(default = "default_image_model")]
    pub image_model: String,

    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,

    // Secrets only come from the environment and are never written back.
    #[serde(skip)]
    pub google_api_key: Option<String>,
    #[serde(skip)]
    pub gmail_user: Option<String>,
    #[serde(skip)]
    pub gmail_password: Option<String>,
    #[serde(skip)]
    pub recipient_email: Option<String>,
}

fn default_state_path() -> String {
    PathBuf::from("data")
        .join("generation_state.json")
        .to_string_lossy()
        .to_string()
}

fn default_run_at() -> String {
    "09:00".to_string()
}

fn default_poll_interval() -> u64 {
    60
}

fn default_image_model() -> String {
    "gemini-3-pro-image-preview".to_string()
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_request_timeout() -> u64 {
    120
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
            run_at: default_run_at(),
            poll_interval_secs: default_poll_interval(),
            run_on_startup: false,
            image_model: default_image_model(),
            smtp_host: default_smtp_host(),
            request_timeout_secs: default_request_timeout(),
            catalog_path: None,
            google_api_key: None,
            gmail_user: None,
            gmail_password: None,
            recipient_email: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            config
        } else {
            let config = Config::default();
            if let Err(e) = config.save() {
                tracing::warn!("Could not write default config to {:?}: {}", config_path, e);
            }
            config
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("SKETCH_MAILER_CONFIG") {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sketch-mailer")
            .join("config.toml")
    }

    /// Overlay credentials and overrides from the environment. Empty values
    /// are treated as unset.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        self.google_api_key = get("GOOGLE_API_KEY");
        self.gmail_user = get("GMAIL_USER");
        self.gmail_password = get("GMAIL_PASSWORD");
        self.recipient_email = get("RECIPIENT_EMAIL");

        if let Some(path) = get("STATE_FILE") {
            self.state_path = path;
        }
        if let Some(run_at) = get("RUN_AT") {
            self.run_at = run_at;
        }
    }

    /// Where the image is sent: the explicit recipient, or the mail account itself.
    pub fn recipient(&self) -> Option<&str> {
        self.recipient_email
            .as_deref()
            .or(self.gmail_user.as_deref())
    }
}
