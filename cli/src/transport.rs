use musigraph_core::{MusigraphError, Result, Transport};
use reqwest::blocking::Client;
use std::time::Duration;

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("musigraph/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<String> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| MusigraphError::Transport(e.to_string()))?;

        // Error statuses still carry a JSON body describing the failure
        response
            .text()
            .map_err(|e| MusigraphError::Transport(e.to_string()))
    }
}
