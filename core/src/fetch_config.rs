/// Limits used when querying Last.fm for the similarity graph
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Number of top artists requested for the account
    pub top_limit: usize,
    /// Number of similar artists requested per top artist
    pub similar_limit: usize,
    /// Chart period for the top-artist list
    pub period: String,
}

impl FetchConfig {
    pub fn new(top_limit: usize, similar_limit: usize) -> Self {
        Self {
            top_limit,
            similar_limit,
            ..Self::default()
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            top_limit: 50,
            similar_limit: 10,
            period: "overall".to_string(),
        }
    }
}
