pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::runner::run;
pub use config::{CliConfig, Settings};
pub use core::{client::ChaosClient, dispatch::dispatch};
pub use domain::model::{Command, Credential, DomainStats, SubdomainsResponse};
pub use domain::ports::ChaosApi;
pub use utils::error::{ChaosError, Result};
