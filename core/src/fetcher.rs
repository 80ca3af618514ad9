use crate::client::{LastFmClient, Transport};
use crate::error::{MusigraphError, Result};
use crate::fetch_config::FetchConfig;
use crate::graph::SimilarityRow;
use crate::models::{SimilarArtistsResponse, TopArtistsResponse};

pub struct SimilarityFetcher<'a, T: Transport> {
    client: &'a LastFmClient<T>,
    config: FetchConfig,
}

impl<'a, T: Transport> SimilarityFetcher<'a, T> {
    pub fn new(client: &'a LastFmClient<T>, config: FetchConfig) -> Self {
        Self { client, config }
    }

    /// The account's top artists in the service's ranking order.
    pub fn get_top_artists(&self) -> Result<Vec<String>> {
        let response = self.client.get(
            "user.gettopartists",
            false,
            &[
                ("user", self.client.username().to_string()),
                ("limit", self.config.top_limit.to_string()),
                ("period", self.config.period.clone()),
            ],
        )?;

        let parsed: TopArtistsResponse = serde_json::from_value(response)
            .map_err(|e| MusigraphError::MalformedResponse(format!("user.gettopartists: {e}")))?;
        Ok(parsed.topartists.into_names())
    }

    pub fn get_similar_artists(&self, artist: &str) -> Result<Vec<String>> {
        let response = self.client.get(
            "artist.getSimilar",
            false,
            &[
                ("artist", artist.to_string()),
                ("limit", self.config.similar_limit.to_string()),
            ],
        )?;

        let parsed: SimilarArtistsResponse = serde_json::from_value(response)
            .map_err(|e| MusigraphError::MalformedResponse(format!("artist.getSimilar: {e}")))?;
        Ok(parsed.similarartists.into_names())
    }

    pub fn fetch_all(&self, artists: &[String]) -> Result<Vec<SimilarityRow>> {
        self.fetch_all_with(artists, |_| {})
    }

    /// Same as `fetch_all`, calling `on_row` after each artist has been fetched.
    pub fn fetch_all_with<F>(&self, artists: &[String], mut on_row: F) -> Result<Vec<SimilarityRow>>
    where
        F: FnMut(&SimilarityRow),
    {
        let mut rows = Vec::with_capacity(artists.len());

        for artist in artists {
            let similar = self.get_similar_artists(artist)?;
            tracing::debug!(artist = %artist, similar = similar.len(), "similar artists fetched");

            let row = SimilarityRow::new(artist.clone(), similar);
            on_row(&row);
            rows.push(row);
        }

        Ok(rows)
    }
}
