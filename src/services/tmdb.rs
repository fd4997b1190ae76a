//! TMDB API client.

use crate::models::media::SearchCandidate;
use crate::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Poster size used for previews.
pub const POSTER_SIZE: &str = "w500";

/// TMDB client configuration.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// API root, without a trailing slash.
    pub base_url: String,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_key: api_key.into(),
            timeout,
            base_url: TMDB_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Something that can search a movie database by free-text title.
#[async_trait]
pub trait MovieSearch: Send + Sync {
    /// Run one search and return the raw, unranked results.
    async fn search_movies(&self, query: &str, language: &str) -> Result<Vec<SearchCandidate>>;
}

/// TMDB API client.
pub struct TmdbClient {
    config: TmdbConfig,
    client: reqwest::Client,
}

/// Movie search result.
#[derive(Debug, Deserialize)]
pub struct MovieSearchResult {
    #[serde(default)]
    pub results: Vec<MovieSearchItem>,
}

/// Movie search item.
#[derive(Debug, Deserialize)]
pub struct MovieSearchItem {
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub popularity: Option<f64>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
}

impl MovieSearchItem {
    /// Convert into a candidate. Items without a usable title are dropped.
    pub fn into_candidate(self) -> Option<SearchCandidate> {
        let title = self.title.filter(|t| !t.trim().is_empty())?;
        Some(SearchCandidate {
            title,
            release_date: self.release_date.unwrap_or_default(),
            popularity: self.popularity.unwrap_or(0.0),
            overview: self.overview.unwrap_or_default(),
            poster_path: self.poster_path.unwrap_or_default(),
        })
    }
}

impl MovieSearchResult {
    /// All titled results, in response order.
    pub fn into_candidates(self) -> Vec<SearchCandidate> {
        let total = self.results.len();
        let candidates: Vec<SearchCandidate> = self
            .results
            .into_iter()
            .filter_map(MovieSearchItem::into_candidate)
            .collect();
        if candidates.len() < total {
            tracing::debug!("Dropped {} untitled TMDB results", total - candidates.len());
        }
        candidates
    }
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    /// Build URL with the api_key and language parameters.
    fn build_url(&self, path: &str, language: &str, extra_params: &str) -> String {
        format!(
            "{}/{}?api_key={}&language={}{}",
            self.config.base_url,
            path,
            self.config.api_key,
            urlencoding::encode(language),
            extra_params
        )
    }
}

#[async_trait]
impl MovieSearch for TmdbClient {
    async fn search_movies(&self, query: &str, language: &str) -> Result<Vec<SearchCandidate>> {
        let url = self.build_url(
            "search/movie",
            language,
            &format!("&query={}", urlencoding::encode(query)),
        );
        tracing::debug!("TMDB search: {:?} ({})", query, language);

        // The URL carries the api_key, so it is stripped from transport errors
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(crate::Error::TmdbSearchError(format!(
                "TMDB returned {} for {:?}",
                status, query
            )));
        }

        let text = resp.text().await.map_err(reqwest::Error::without_url)?;
        let body: MovieSearchResult = serde_json::from_str(&text)?;
        Ok(body.into_candidates())
    }
}

/// Get poster image URL, or an empty string when there is no poster.
pub fn poster_url(poster_path: &str) -> String {
    if poster_path.is_empty() {
        return String::new();
    }
    format!("{}/{}{}", TMDB_IMAGE_BASE_URL, POSTER_SIZE, poster_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TmdbClient {
        TmdbClient::new(TmdbConfig::new("secret", Duration::from_secs(5))).unwrap()
    }

    #[test]
    fn test_build_url_encodes_parameters() {
        let url = client().build_url("search/movie", "pt BR", "&query=Am%C3%A9lie");
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/search/movie?api_key=secret&language=pt%20BR&query=Am%C3%A9lie"
        );
    }

    #[test]
    fn test_decode_search_response() {
        let json = r#"{
            "page": 1,
            "results": [
                {
                    "id": 218,
                    "title": "The Terminator",
                    "release_date": "1984-10-26",
                    "popularity": 50.5,
                    "overview": "A cyborg assassin...",
                    "poster_path": "/qvktm0BHcnmDpul4Hz01GIazWPr.jpg"
                },
                {
                    "id": 1,
                    "title": "Obscure",
                    "release_date": "",
                    "popularity": 0.6,
                    "overview": "",
                    "poster_path": null
                }
            ]
        }"#;

        let parsed: MovieSearchResult = serde_json::from_str(json).unwrap();
        let candidates = parsed.into_candidates();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].title, "The Terminator");
        assert_eq!(candidates[0].year(), "1984");
        assert_eq!(candidates[0].popularity, 50.5);
        assert_eq!(candidates[1].poster_path, "");
        assert_eq!(candidates[1].release_date, "");
    }

    #[test]
    fn test_decode_skips_untitled_results() {
        let json = r#"{
            "results": [
                { "id": 1, "title": null, "popularity": 9.0 },
                { "id": 2, "popularity": 8.0 },
                { "id": 3, "title": "  ", "popularity": 7.0 },
                { "id": 4, "title": "Heat", "release_date": "1995-12-15", "popularity": 6.0 }
            ]
        }"#;

        let parsed: MovieSearchResult = serde_json::from_str(json).unwrap();
        let candidates = parsed.into_candidates();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "Heat");
        assert_eq!(candidates[0].year(), "1995");
    }

    #[tokio::test]
    async fn test_transport_error_hides_api_key() {
        // Nothing listens on port 1, so the request fails before any response
        let config = TmdbConfig::new("SUPERSECRETKEY", Duration::from_secs(5))
            .with_base_url("http://127.0.0.1:1/3");
        let client = TmdbClient::new(config).unwrap();

        let err = client
            .search_movies("Terminator", "en-US")
            .await
            .unwrap_err();

        assert!(matches!(err, crate::Error::Http(_)));
        assert!(!err.to_string().contains("SUPERSECRETKEY"));
        assert!(!format!("{:?}", err).contains("SUPERSECRETKEY"));
    }

    #[test]
    fn test_decode_missing_results() {
        let parsed: MovieSearchResult = serde_json::from_str("{}").unwrap();
        assert!(parsed.results.is_empty());
    }

    #[test]
    fn test_poster_url() {
        assert_eq!(
            poster_url("/abc.jpg"),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(poster_url(""), "");
    }
}
