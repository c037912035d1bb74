#[cfg(test)]
pub mod fake;
pub mod http;

use std::sync::Arc;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::ApiHandle;

pub struct ApiManager {}

impl ApiManager {
    pub fn get(url: &str) -> Result<ApiHandle> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            bail!(format!("api-url must be an http(s) URL, got '{url}'"));
        }

        return Ok(Arc::new(http::HttpApi::new(url)));
    }
}
