use anyhow::Result;
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Fallback home directory on the Replit runner image
pub const DEFAULT_HOME: &str = "/home/runner";
/// Placeholder shown when `REPL_SLUG` is not provided
pub const DEFAULT_REPL_SLUG: &str = "your-repl";
/// Placeholder shown when `REPL_OWNER` is not provided
pub const DEFAULT_REPL_OWNER: &str = "username";

/// Directory name n8n keeps its local state in, relative to the home directory
pub const N8N_CONFIG_DIR: &str = ".n8n";
/// Webhook path registered by the workflow's trigger node
pub const WEBHOOK_PATH: &str = "webhook/webhook-masjid";

const RECOGNIZED_VARS: [&str; 3] = ["HOME", "REPL_SLUG", "REPL_OWNER"];

/// Environment-derived values the bootstrapper works with
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SetupEnvironment {
    /// Base path for the n8n config directory (`HOME`)
    pub home: String,
    /// Replit project slug (`REPL_SLUG`)
    pub repl_slug: String,
    /// Replit account name (`REPL_OWNER`)
    pub repl_owner: String,
}

impl Default for SetupEnvironment {
    fn default() -> Self {
        Self {
            home: DEFAULT_HOME.to_string(),
            repl_slug: DEFAULT_REPL_SLUG.to_string(),
            repl_owner: DEFAULT_REPL_OWNER.to_string(),
        }
    }
}

impl SetupEnvironment {
    /// Resolve from the process environment, after loading `.env` if present.
    pub fn load() -> Result<Self, config::ConfigError> {
        if let Err(e) = Self::load_env_file() {
            tracing::warn!(error = %e, "Ignoring unreadable .env file");
        }
        Self::from_vars(recognized_vars(std::env::vars_os()))
    }

    /// Resolve from an explicit set of variables.
    ///
    /// Unset and empty variables both fall back to the defaults. Variables
    /// other than `HOME`, `REPL_SLUG` and `REPL_OWNER` are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let source: config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| RECOGNIZED_VARS.contains(&k.as_str()))
            .collect();

        let defaults = Self::default();
        let config = Config::builder()
            .set_default("home", defaults.home)?
            .set_default("repl_slug", defaults.repl_slug)?
            .set_default("repl_owner", defaults.repl_owner)?
            .add_source(Environment::default().source(Some(source)).ignore_empty(true))
            .build()?;

        let environment: SetupEnvironment = config.try_deserialize()?;
        tracing::debug!(
            home = %environment.home,
            repl_slug = %environment.repl_slug,
            repl_owner = %environment.repl_owner,
            "Resolved setup environment"
        );
        Ok(environment)
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }

    /// `<HOME>/.n8n`
    pub fn config_dir(&self) -> PathBuf {
        Path::new(&self.home).join(N8N_CONFIG_DIR)
    }

    /// Public URL the WhatsApp provider should call once the workflow is active.
    pub fn webhook_url(&self) -> String {
        format!(
            "https://{}.{}.repl.co/{}",
            self.repl_slug, self.repl_owner, WEBHOOK_PATH
        )
    }
}

/// Keep the variables we read, as UTF-8.
///
/// Anything else in the process environment is skipped without being decoded.
/// A recognized variable holding non-UTF-8 data counts as unset.
fn recognized_vars<I>(vars: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| {
            let key = RECOGNIZED_VARS
                .iter()
                .find(|name| key.as_os_str() == OsStr::new(name))?;
            match value.into_string() {
                Ok(value) => Some((key.to_string(), value)),
                Err(_) => {
                    tracing::warn!(variable = %key, "Ignoring non-UTF-8 value, using default");
                    None
                }
            }
        })
        .collect()
}
