use crate::store::{DEFAULT_ARTIFACT_PREFIX, MalformedPolicy};
use crate::traits::MailPath;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct MailAssertConfig {
    pub mail_path: PathBuf,
    pub artifact_prefix: String,
    #[serde(default)]
    pub skip_malformed: bool,
    pub log_level: Option<String>,
}

impl MailAssertConfig {
    // Load config from defaults, then file (if exists), then environment variables
    pub fn new() -> Result<Self, ConfigError> {
        Self::configure_defaults()?
            .add_source(File::with_name("mail-assertions").required(false))
            // e.g. MAIL_ASSERT_MAIL_PATH=/tmp/mails MAIL_ASSERT_SKIP_MALFORMED=true
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    // Load config from a specific file path
    pub fn new_from_file(path: &str) -> Result<Self, ConfigError> {
        Self::configure_defaults()?
            .add_source(File::with_name(path).required(true))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    pub fn malformed_policy(&self) -> MalformedPolicy {
        if self.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Fail
        }
    }

    fn environment() -> Environment {
        Environment::with_prefix("MAIL_ASSERT")
            .prefix_separator("_")
            .separator("__")
    }

    fn configure_defaults()
    -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder().set_default("artifact_prefix", DEFAULT_ARTIFACT_PREFIX)
    }
}

impl MailPath for MailAssertConfig {
    fn mail_path(&self) -> PathBuf {
        self.mail_path.clone()
    }
}
