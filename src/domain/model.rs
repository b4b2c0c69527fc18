use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Opaque token sent verbatim in the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for an empty token so callers can fall through to the next source.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Exactly one of these runs per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Upload { path: PathBuf },
    Stats { domain: String },
    Enumerate { domain: String },
}

/// Stats payload. The service does not promise a schema, so every field is kept as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainStats {
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl DomainStats {
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }

    /// The `subdomains` entry rendered for a terminal: bare strings, compact JSON
    /// for anything else, `null` when the service left it out.
    pub fn subdomains_display(&self) -> String {
        match self.get("subdomains") {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(value) => value.to_string(),
            None => serde_json::Value::Null.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubdomainsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subdomains: Vec<String>,
}

// the service sends `null` instead of `[]` for domains without results
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let labels: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(labels.unwrap_or_default())
}

impl SubdomainsResponse {
    /// Full hostnames in service order, skipping empty labels.
    pub fn hostnames<'a>(&'a self, domain: &'a str) -> impl Iterator<Item = String> + 'a {
        self.subdomains
            .iter()
            .filter(|label| !label.is_empty())
            .map(move |label| format!("{}.{}", label, domain))
    }
}
