use crate::error::Error;
use log::warn;
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Client for the OMDb metadata provider. One blocking GET per search,
/// no retry, no caching, transport-default timeouts.
pub struct OmdbClient {
    client: Client,
    url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(url: String, api_key: String) -> OmdbClient {
        OmdbClient {
            client: Client::new(),
            url,
            api_key,
        }
    }

    /// Look a movie up by title. Returns the provider's JSON payload
    /// unmodified on a 200 response, `None` otherwise. Note that the
    /// provider signals "not found" inside a 200 payload; that payload is
    /// passed through as-is.
    pub fn search(&self, title: &str) -> Option<Value> {
        match self.fetch(title) {
            Ok(movie) => Some(movie),
            Err(e) => {
                warn!("movie search failed: {}", e);
                None
            }
        }
    }

    fn fetch(&self, title: &str) -> Result<Value, Error> {
        // The title is passed through as typed; no extra encoding.
        let url = search_url(&self.url, &self.api_key, title);
        let mut response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| Error::UpstreamUnavailable(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(Error::UpstreamUnavailable(format!(
                "status {}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| Error::UpstreamUnavailable(e.to_string()))
    }
}

fn search_url(url: &str, api_key: &str, title: &str) -> String {
    format!("{}?apikey={}&t={}", url, api_key, title)
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn test_search_url() {
        assert_eq!(
            search_url("http://www.omdbapi.com/", "k3y", "Dune"),
            "http://www.omdbapi.com/?apikey=k3y&t=Dune"
        );
    }

    #[test]
    fn test_search_url_passes_title_through() {
        // Titles are not re-encoded before they hit the transport.
        assert_eq!(
            search_url("http://www.omdbapi.com/", "k3y", "The Good, the Bad and the Ugly"),
            "http://www.omdbapi.com/?apikey=k3y&t=The Good, the Bad and the Ugly"
        );
    }
}
