#![allow(dead_code)]

use musigraph_core::{Authorizer, MusigraphError, Result, Transport};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::path::Path;

pub type Query = Vec<(String, String)>;

/// Scripted Last.fm stand-in. Responses are keyed by `method`, or by
/// `method:artist` for per-artist calls; every request is recorded.
#[derive(Default)]
pub struct FakeTransport {
    responses: FxHashMap<String, String>,
    requests: RefCell<Vec<(String, Query)>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, key: &str, body: &str) -> Self {
        self.responses.insert(key.to_string(), body.to_string());
        self
    }

    pub fn requests(&self) -> Vec<(String, Query)> {
        self.requests.borrow().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .filter_map(|(_, query)| param(query, "method").map(str::to_string))
            .collect()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<String> {
        self.requests
            .borrow_mut()
            .push((url.to_string(), query.to_vec()));

        let method = param(query, "method").unwrap_or_default();
        let specific = param(query, "artist").map(|artist| format!("{method}:{artist}"));

        specific
            .and_then(|key| self.responses.get(&key))
            .or_else(|| self.responses.get(method))
            .cloned()
            .ok_or_else(|| MusigraphError::Transport(format!("no response scripted for {method}")))
    }
}

pub fn param<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[derive(Default)]
pub struct FakeAuthorizer {
    pub urls: Vec<String>,
    pub fail: bool,
}

impl Authorizer for FakeAuthorizer {
    fn authorize(&mut self, url: &str) -> Result<()> {
        self.urls.push(url.to_string());
        if self.fail {
            return Err(MusigraphError::Authorization("operator aborted".to_string()));
        }
        Ok(())
    }
}

pub fn write_config(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, contents).unwrap();
    path
}

pub const UNAUTHENTICATED_CONFIG: &str =
    r#"{"lastfm": {"api_key": "key123", "secret": "shh"}, "other": {"keep": true}}"#;

pub const AUTHENTICATED_CONFIG: &str = r#"{
    "lastfm": {
        "api_key": "key123",
        "secret": "shh",
        "session_key": "stored-session",
        "username": "rj"
    }
}"#;
