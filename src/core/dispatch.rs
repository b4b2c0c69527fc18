use crate::domain::model::Command;
use crate::domain::ports::ChaosApi;
use crate::utils::error::Result;
use std::io::Write;

pub const UPLOAD_CONFIRMATION: &str =
    "File processed successfully and subdomains with valid records will be updated to chaos dataset.";

/// Runs a single command against the service and writes its result lines to `out`.
///
/// Nothing is written until the response is fully decoded, so a failed call leaves
/// `out` untouched.
pub async fn dispatch<A, W>(api: &A, command: &Command, out: &mut W) -> Result<()>
where
    A: ChaosApi + ?Sized,
    W: Write,
{
    match command {
        Command::Upload { path } => {
            tracing::info!("Uploading subdomains from {}", path.display());
            api.upload(path).await?;
            writeln!(out, "{}", UPLOAD_CONFIRMATION)?;
        }
        Command::Stats { domain } => {
            tracing::info!("Fetching stats for {}", domain);
            let stats = api.domain_stats(domain).await?;
            writeln!(out, "{}", stats.subdomains_display())?;
        }
        Command::Enumerate { domain } => {
            tracing::info!("Enumerating subdomains for {}", domain);
            let response = api.subdomains(domain).await?;
            let mut printed = 0usize;
            for hostname in response.hostnames(domain) {
                writeln!(out, "{}", hostname)?;
                printed += 1;
            }
            tracing::debug!("Printed {} of {} labels", printed, response.subdomains.len());
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DomainStats, SubdomainsResponse};
    use crate::utils::error::ChaosError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// Records which endpoint was hit and answers with canned data.
    #[derive(Default)]
    struct FakeApi {
        calls: Mutex<Vec<String>>,
        fail_with_status: Option<u16>,
    }

    impl FakeApi {
        fn failing(status: u16) -> Self {
            Self {
                fail_with_status: Some(status),
                ..Default::default()
            }
        }

        fn record(&self, call: String) -> Result<()> {
            self.calls.lock().unwrap().push(call);
            match self.fail_with_status {
                Some(status) => Err(ChaosError::UnexpectedStatus { status }),
                None => Ok(()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChaosApi for FakeApi {
        async fn domain_stats(&self, domain: &str) -> Result<DomainStats> {
            self.record(format!("stats:{}", domain))?;
            Ok(serde_json::from_value(json!({"subdomains": {"count": 5}}))?)
        }

        async fn subdomains(&self, domain: &str) -> Result<SubdomainsResponse> {
            self.record(format!("subdomains:{}", domain))?;
            Ok(serde_json::from_value(json!({"subdomains": ["a", "b", ""]}))?)
        }

        async fn upload(&self, path: &Path) -> Result<()> {
            self.record(format!("upload:{}", path.display()))
        }
    }

    fn run(api: &FakeApi, command: Command) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = tokio_test::block_on(dispatch(api, &command, &mut out));
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_enumerate_prints_hostnames_in_order() {
        let api = FakeApi::default();
        let (result, out) = run(
            &api,
            Command::Enumerate {
                domain: "example.com".to_string(),
            },
        );
        assert!(result.is_ok());
        assert_eq!(out, "a.example.com\nb.example.com\n");
        assert_eq!(api.calls(), vec!["subdomains:example.com"]);
    }

    #[test]
    fn test_stats_prints_subdomains_value() {
        let api = FakeApi::default();
        let (result, out) = run(
            &api,
            Command::Stats {
                domain: "example.com".to_string(),
            },
        );
        assert!(result.is_ok());
        assert_eq!(out, "{\"count\":5}\n");
    }

    #[test]
    fn test_upload_prints_confirmation() {
        let api = FakeApi::default();
        let (result, out) = run(
            &api,
            Command::Upload {
                path: PathBuf::from("subs.txt"),
            },
        );
        assert!(result.is_ok());
        assert_eq!(out, format!("{}\n", UPLOAD_CONFIRMATION));
        assert_eq!(api.calls(), vec!["upload:subs.txt"]);
    }

    #[test]
    fn test_failure_prints_nothing() {
        for command in [
            Command::Enumerate {
                domain: "example.com".to_string(),
            },
            Command::Stats {
                domain: "example.com".to_string(),
            },
            Command::Upload {
                path: PathBuf::from("subs.txt"),
            },
        ] {
            let api = FakeApi::failing(500);
            let (result, out) = run(&api, command);
            assert!(matches!(
                result,
                Err(ChaosError::UnexpectedStatus { status: 500 })
            ));
            assert!(out.is_empty());
        }
    }
}
