pub mod cli;

use crate::domain::model::{Command, Credential};
use crate::utils::error::{ChaosError, Result};
use crate::utils::validation::{validate_domain, validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://dns.projectdiscovery.io";
pub const CHAOS_KEY_ENV: &str = "CHAOS_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "chaos")]
#[command(about = "Client for the Chaos subdomain dataset API")]
pub struct CliConfig {
    #[arg(long = "chaos-key", default_value = "", hide_default_value = true, help = "Chaos key for API")]
    pub chaos_key: String,

    #[arg(
        short = 'd',
        long = "domain",
        default_value = "",
        hide_default_value = true,
        help = "Domain to find subdomains for"
    )]
    pub domain: String,

    #[arg(long, help = "Show statistics for the specified domain")]
    pub count: bool,

    #[arg(short = 'f', long = "file", help = "File containing subdomains to upload")]
    pub file: Option<String>,

    #[arg(long, env = "CHAOS_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[arg(short = 'v', long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Parses the process arguments, accepting single-dash long flags as well.
    pub fn from_args() -> Self {
        Self::parse_from(cli::normalize_args(std::env::args_os()))
    }

    fn upload_path(&self) -> Option<&str> {
        self.file.as_deref().filter(|path| !path.is_empty())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_url", &self.api_url)?;
        if let Some(path) = self.upload_path() {
            validate_path("file", path)?;
        }
        Ok(())
    }
}

/// Everything an invocation needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credential: Credential,
    pub command: Command,
    pub api_url: String,
}

impl Settings {
    /// `env_key` is the value of `CHAOS_KEY`, used only when the flag is empty.
    pub fn resolve(config: &CliConfig, env_key: Option<String>) -> Result<Self> {
        let credential = resolve_credential(&config.chaos_key, env_key)?;
        config.validate()?;
        let command = select_command(config)?;

        Ok(Self {
            credential,
            command,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }
}

pub fn resolve_credential(flag: &str, env_key: Option<String>) -> Result<Credential> {
    Credential::new(flag)
        .or_else(|| env_key.and_then(Credential::new))
        .ok_or(ChaosError::MissingCredential)
}

/// Upload wins over everything and never looks at the domain; otherwise a domain is required.
pub fn select_command(config: &CliConfig) -> Result<Command> {
    if let Some(path) = config.upload_path() {
        return Ok(Command::Upload {
            path: PathBuf::from(path),
        });
    }

    let domain = config.domain.trim();
    if domain.is_empty() {
        return Err(ChaosError::MissingDomain);
    }
    validate_domain("domain", domain)?;

    if config.count {
        Ok(Command::Stats {
            domain: domain.to_string(),
        })
    } else {
        Ok(Command::Enumerate {
            domain: domain.to_string(),
        })
    }
}
