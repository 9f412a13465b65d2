use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure for code-mentor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub limits: PromptLimits,
    pub groq: GroqConfig,
    pub huggingface: HuggingFaceConfig,
    pub openai: OpenAiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    pub bind: String,
}

/// Bounds applied to inbound prompts before anything else sees them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptLimits {
    pub min_chars: usize,
    pub max_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    /// Credential comes from the environment only; absence means the
    /// provider is skipped, never an error.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_seconds: u64,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuggingFaceConfig {
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_seconds: u64,
    pub max_new_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_seconds: u64,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Config {
    /// Load configuration from file with environment variable overrides.
    /// ALWAYS returns a valid config - never fails.
    pub fn load() -> Self {
        // Load environment variables from .env files
        let env_paths = [".env", "../.env"];

        let mut env_loaded = false;
        for path in &env_paths {
            if dotenvy::from_path(path).is_ok() {
                tracing::info!("Loaded .env from: {}", path);
                env_loaded = true;
                break;
            }
        }

        if !env_loaded {
            tracing::debug!("No .env file found - continuing with process env only");
        }

        let config_path =
            env::var("CODE_MENTOR_CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

        // Load config from file if it exists
        let mut config = if Path::new(&config_path).exists() {
            match fs::read_to_string(&config_path) {
                Ok(contents) => match serde_yaml::from_str::<Config>(&contents) {
                    Ok(config) => {
                        tracing::info!("Loaded configuration from {}", config_path);
                        config
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to parse config file {}: {} - using defaults",
                            config_path,
                            e
                        );
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::error!(
                        "Failed to read config file {}: {} - using defaults",
                        config_path,
                        e
                    );
                    Self::default()
                }
            }
        } else {
            tracing::debug!("Config file not found at {} - using defaults", config_path);
            Self::default()
        };

        // Apply environment variable overrides
        config.apply_env_overrides();

        // Validate configuration - log warnings but don't fail
        if let Err(e) = config.validate() {
            tracing::warn!("Config validation warnings: {} - continuing anyway", e);
        }

        config
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // Server overrides
        if let Ok(name) = env::var("CODE_MENTOR_SERVER_NAME") {
            self.server.name = name;
        }
        if let Ok(bind) = env::var("CODE_MENTOR_BIND") {
            self.server.bind = bind;
        }

        // Prompt limit overrides
        if let Ok(min) = env::var("CODE_MENTOR_MIN_PROMPT_CHARS") {
            if let Ok(min_chars) = min.parse() {
                self.limits.min_chars = min_chars;
            }
        }
        if let Ok(max) = env::var("CODE_MENTOR_MAX_PROMPT_CHARS") {
            if let Ok(max_chars) = max.parse() {
                self.limits.max_chars = max_chars;
            }
        }

        // Groq overrides
        if let Ok(api_key) = env::var("GROQ_API_KEY") {
            self.groq.api_key = Some(api_key);
        }
        if let Ok(model) = env::var("GROQ_MODEL") {
            self.groq.model = model;
        }
        if let Ok(timeout) = env::var("GROQ_TIMEOUT_SECONDS") {
            if let Ok(secs) = timeout.parse() {
                self.groq.timeout_seconds = secs;
            }
        }

        // Hugging Face overrides; HF_API_KEY takes precedence over the
        // longer alias
        if let Ok(api_key) = env::var("HF_API_KEY").or_else(|_| env::var("HUGGINGFACE_API_KEY")) {
            self.huggingface.api_key = Some(api_key);
        }
        if let Ok(model) = env::var("HF_MODEL") {
            self.huggingface.model = model;
        }
        if let Ok(timeout) = env::var("HF_TIMEOUT_SECONDS") {
            if let Ok(secs) = timeout.parse() {
                self.huggingface.timeout_seconds = secs;
            }
        }

        // OpenAI overrides
        if let Ok(api_key) = env::var("OPENAI_API_KEY") {
            self.openai.api_key = Some(api_key);
        }
        if let Ok(model) = env::var("OPENAI_MODEL") {
            self.openai.model = model;
        }
        if let Ok(timeout) = env::var("OPENAI_TIMEOUT_SECONDS") {
            if let Ok(secs) = timeout.parse() {
                self.openai.timeout_seconds = secs;
            }
        }
    }

    /// Validate configuration
    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.limits.min_chars == 0 {
            return Err("limits.min_chars cannot be 0".into());
        }
        if self.limits.max_chars <= self.limits.min_chars {
            return Err("limits.max_chars must exceed limits.min_chars".into());
        }
        for (name, timeout) in [
            ("groq", self.groq.timeout_seconds),
            ("huggingface", self.huggingface.timeout_seconds),
            ("openai", self.openai.timeout_seconds),
        ] {
            if timeout == 0 {
                return Err(format!("{name}.timeout_seconds cannot be 0").into());
            }
        }

        // Missing credentials are a valid state: the chain just falls
        // through to the local responder
        if self.groq.api_key.is_none()
            && self.huggingface.api_key.is_none()
            && self.openai.api_key.is_none()
        {
            return Err(
                "no provider credentials configured - every answer will come from the local responder"
                    .into(),
            );
        }

        Ok(())
    }

    pub fn groq_timeout(&self) -> Duration {
        Duration::from_secs(self.groq.timeout_seconds)
    }

    pub fn huggingface_timeout(&self) -> Duration {
        Duration::from_secs(self.huggingface.timeout_seconds)
    }

    pub fn openai_timeout(&self) -> Duration {
        Duration::from_secs(self.openai.timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "code-mentor".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                bind: "127.0.0.1:3000".to_string(),
            },
            limits: PromptLimits {
                min_chars: 3,
                max_chars: 5000,
            },
            groq: GroqConfig {
                api_key: None,
                model: "llama-3.3-70b-versatile".to_string(),
                timeout_seconds: 20,
                max_tokens: 2000,
                temperature: 0.7,
            },
            huggingface: HuggingFaceConfig {
                api_key: None,
                model: "codellama/CodeLlama-34b-Instruct-hf".to_string(),
                timeout_seconds: 25,
                max_new_tokens: 1500,
                temperature: 0.7,
            },
            openai: OpenAiConfig {
                api_key: None,
                model: "gpt-3.5-turbo".to_string(),
                timeout_seconds: 15,
                max_tokens: 1500,
                temperature: 0.7,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_apart_from_missing_credentials() {
        let cfg = Config::default();
        // Only the all-credentials-missing warning should fire
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("no provider credentials"));
    }

    #[test]
    fn validation_catches_inverted_limits() {
        let mut cfg = Config::default();
        cfg.groq.api_key = Some("key".to_string());
        cfg.limits.max_chars = 2;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("max_chars"));
    }

    #[test]
    fn default_timeouts_follow_provider_order() {
        let cfg = Config::default();
        assert_eq!(cfg.groq_timeout(), Duration::from_secs(20));
        assert_eq!(cfg.huggingface_timeout(), Duration::from_secs(25));
        assert_eq!(cfg.openai_timeout(), Duration::from_secs(15));
    }
}
