use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use shared::{AdminCredentials, Candidate, Directory, Error, Result};
use crate::config::Config;

/// Fetches the directory documents with unauthenticated GETs.
#[derive(Debug, Clone, Copy)]
pub struct HttpDirectory {
    candidates_url: &'static str,
    admin_url: &'static str,
}

impl HttpDirectory {
    pub const fn new(config: &Config) -> Self {
        Self {
            candidates_url: config.candidates_url,
            admin_url: config.admin_url,
        }
    }
}

impl Directory for HttpDirectory {
    async fn candidates(&self) -> Result<Vec<Candidate>> {
        fetch_json(self.candidates_url, "candidate list").await
    }

    async fn admin_credentials(&self) -> Result<AdminCredentials> {
        fetch_json(self.admin_url, "administrator record").await
    }
}

async fn fetch_json<T: DeserializeOwned>(url: &str, resource: &str) -> Result<T> {
    let response = Request::get(url).send().await
        .map_err(|e| Error::fetch(resource, e))?;

    if !response.ok() {
        return Err(Error::fetch(resource, format!("HTTP {}", response.status())));
    }

    let body = response.text().await
        .map_err(|e| Error::fetch(resource, e))?;
    serde_json::from_str(&body).map_err(|e| Error::decode(resource, e))
}
