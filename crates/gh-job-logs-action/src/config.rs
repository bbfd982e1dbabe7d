use anyhow::{Context, Result, anyhow};
use gh_job_logs::RunRef;
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

const CONFIG_FILE: &str = "gh-job-logs.toml";

/// Action configuration
///
/// Read from gh-job-logs.toml, then overridden by the step's inputs and the
/// runner's default environment variables.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub run_id: Option<u64>,
    #[serde(default)]
    pub api_url: Option<String>,
}

fn default_mode() -> String {
    "off".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            token: None,
            repository: None,
            run_id: None,
            api_url: None,
        }
    }
}

impl Config {
    /// Load config file and `.env`, then apply the environment
    pub fn load() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => log::warn!("Ignoring unreadable .env file: {err}"),
        }

        Self::load_file().with_env(|key| env::var(key).ok())
    }

    /// Load config from CWD first, then home directory, or use defaults
    fn load_file() -> Self {
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE)
            && let Ok(config) = toml::from_str(&content)
        {
            log::debug!("Loaded config from {}", CONFIG_FILE);
            return config;
        }

        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home).join(format!(".{}", CONFIG_FILE));
            if let Ok(content) = std::fs::read_to_string(&home_config)
                && let Ok(config) = toml::from_str(&content)
            {
                log::debug!("Loaded config from {}", home_config.display());
                return config;
            }
        }

        log::debug!("Using default config");
        Self::default()
    }

    /// Override fields with step inputs (`INPUT_*`) or runner defaults
    ///
    /// Empty values are treated as unset, as the runner exports every
    /// declared input even when the workflow leaves it blank.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |keys: &[&str]| {
            keys.iter()
                .find_map(|key| lookup(key).filter(|value| !value.trim().is_empty()))
        };

        if let Some(mode) = get(&["INPUT_MODE"]) {
            self.mode = mode.trim().to_string();
        }
        if let Some(token) = get(&["INPUT_TOKEN", "GITHUB_TOKEN"]) {
            self.token = Some(token);
        }
        if let Some(repository) = get(&["INPUT_REPOSITORY", "GITHUB_REPOSITORY"]) {
            self.repository = Some(repository);
        }
        if let Some(run_id) = get(&["INPUT_RUN_ID", "GITHUB_RUN_ID"]) {
            let parsed = run_id
                .trim()
                .parse()
                .with_context(|| format!("Invalid workflow run id '{}'", run_id.trim()))?;
            self.run_id = Some(parsed);
        }
        if let Some(api_url) = get(&["GITHUB_API_URL"]) {
            self.api_url = Some(api_url);
        }

        Ok(self)
    }

    pub fn token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .ok_or_else(|| anyhow!("No GitHub token configured, set the `token` input or GITHUB_TOKEN"))
    }

    /// Workflow run whose logs are printed
    pub fn run_ref(&self) -> Result<RunRef> {
        let repository = self.repository.as_deref().ok_or_else(|| {
            anyhow!("No repository configured, set the `repository` input or GITHUB_REPOSITORY")
        })?;
        let run_id = self.run_id.ok_or_else(|| {
            anyhow!("No workflow run configured, set the `run_id` input or GITHUB_RUN_ID")
        })?;

        Ok(RunRef::from_repository(repository, run_id)?)
    }
}
