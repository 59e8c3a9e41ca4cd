use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

use crate::config::constants::USER_AGENT as DEFAULT_USER_AGENT;
use crate::network::errors::NetworkError;

// * Browser-like request headers; retail storefronts often reject bare client agents.
#[derive(Debug, Clone)]
pub struct IdentityProfile {
    pub user_agent: String,
    pub accept_language: String,
}

impl IdentityProfile {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            accept_language: "en-US,en;q=0.9".to_string(),
        }
    }

    // * Builds the default header set attached to every request.
    pub fn headers(&self) -> Result<HeaderMap, NetworkError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(&self.accept_language)?);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert("Upgrade-Insecure-Requests", HeaderValue::from_static("1"));
        Ok(headers)
    }
}

impl Default for IdentityProfile {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT)
    }
}
