use crate::error::{MusigraphError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, ser::PrettyFormatter};
use std::{
    fs,
    path::{Path, PathBuf},
};

const SECTION: &str = "lastfm";

/// Last.fm account credentials as stored in the `lastfm` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub api_key: String,
    pub secret: String,
    /// Empty until the authorization handshake has completed
    pub session_key: String,
    pub username: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSection {
    api_key: Option<String>,
    secret: Option<String>,
    #[serde(default)]
    session_key: Option<String>,
    #[serde(default)]
    username: Option<String>,
}

impl Credentials {
    pub fn has_session(&self) -> bool {
        !self.session_key.is_empty()
    }

    fn from_section(section: &Value) -> Result<Self> {
        let raw: RawSection = serde_json::from_value(section.clone())
            .map_err(|e| MusigraphError::Config(format!("invalid {SECTION} section: {e}")))?;

        let api_key = require(raw.api_key, "api_key")?;
        let secret = require(raw.secret, "secret")?;
        let session_key = raw.session_key.unwrap_or_default();
        let username = raw.username.unwrap_or_default();

        if !session_key.is_empty() && username.is_empty() {
            return Err(MusigraphError::Config(
                "session_key is set but username is missing".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            secret,
            session_key,
            username,
        })
    }
}

fn require(field: Option<String>, name: &str) -> Result<String> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(MusigraphError::Config(format!(
            "{name} not in {SECTION} config"
        ))),
    }
}

/// JSON credential document on disk. Sections other than `lastfm` are carried
/// through untouched when the document is rewritten.
pub struct CredentialStore {
    path: PathBuf,
    document: Value,
}

impl CredentialStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = fs::read_to_string(&path)?;
        let document: Value = serde_json::from_str(&contents)?;

        if !document.is_object() {
            return Err(MusigraphError::Config(format!(
                "{} is not a JSON object",
                path.display()
            )));
        }

        Ok(Self { path, document })
    }

    pub fn credentials(&self) -> Result<Credentials> {
        let section = self
            .document
            .get(SECTION)
            .ok_or_else(|| MusigraphError::Config(format!("{SECTION} not in config")))?;
        Credentials::from_section(section)
    }

    pub fn persist(&mut self, credentials: &Credentials) -> Result<()> {
        let section = serde_json::to_value(credentials)?;
        if let Value::Object(root) = &mut self.document {
            root.insert(SECTION.to_string(), section);
        } else {
            let mut root = Map::new();
            root.insert(SECTION.to_string(), section);
            self.document = Value::Object(root);
        }

        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.document.serialize(&mut serializer)?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &buffer)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), "credentials persisted");
        Ok(())
    }
}
