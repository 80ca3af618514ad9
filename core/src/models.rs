use serde::{Deserialize, Deserializer, de::Error};

#[derive(Debug, Deserialize, Clone)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionResponse {
    pub session: Session,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Session {
    pub name: String,
    pub key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TopArtistsResponse {
    pub topartists: ArtistList,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimilarArtistsResponse {
    pub similarartists: ArtistList,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ArtistList {
    #[serde(default, deserialize_with = "one_or_many")]
    pub artist: Vec<ArtistEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ArtistEntry {
    pub name: String,
}

impl ArtistList {
    pub fn into_names(self) -> Vec<String> {
        self.artist.into_iter().map(|entry| entry.name).collect()
    }
}

// Last.fm collapses one-element lists into a bare object and reports an
// empty list as "" or omits the key.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
    Text(String),
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
        OneOrMany::Text(text) if text.is_empty() => Vec::new(),
        OneOrMany::Text(text) => {
            return Err(D::Error::custom(format!(
                "expected an artist list, found \"{text}\""
            )));
        }
    })
}
