//! Stateless request builder and response parser for `search.php`.
//!
//! # Design
//! `CocktailClient` holds only a `base_url`. A search is split into
//! `build_search`, which produces an `HttpRequest`, and `parse_search`, which
//! consumes an `HttpResponse`. The caller executes the round-trip in between,
//! keeping this module deterministic and free of I/O.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Drink, SearchResponse};

/// Public TheCocktailDB endpoint using the shared test key `1`.
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Synchronous, stateless client for the cocktail search API.
#[derive(Debug, Clone)]
pub struct CocktailClient {
    base_url: String,
}

impl Default for CocktailClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CocktailClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the lookup for `term`. The term is sent as typed, percent-encoded.
    pub fn build_search(&self, term: &str) -> HttpRequest {
        let url = format!(
            "{}/search.php?s={}",
            self.base_url,
            urlencoding::encode(term)
        );
        debug!(%url, "built search request");
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Classify a search response.
    ///
    /// `drinks: null` and a missing `drinks` key mean `NoResults`. An empty
    /// array is a successful, empty result. Records come back in the order
    /// the API sent them.
    pub fn parse_search(&self, response: HttpResponse) -> Result<Vec<Drink>, ApiError> {
        check_status(&response)?;
        let body: SearchResponse = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        match body.drinks {
            Some(drinks) => Ok(drinks),
            None => Err(ApiError::NoResults),
        }
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CocktailClient {
        CocktailClient::new("http://localhost:3000/api/json/v1/1")
    }

    #[test]
    fn build_search_produces_get_with_query() {
        let req = client().build_search("margarita");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.url,
            "http://localhost:3000/api/json/v1/1/search.php?s=margarita"
        );
        assert_eq!(
            req.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn build_search_percent_encodes_term() {
        let req = client().build_search("old fashioned & co");
        assert_eq!(
            req.url,
            "http://localhost:3000/api/json/v1/1/search.php?s=old%20fashioned%20%26%20co"
        );
    }

    #[test]
    fn default_client_targets_public_api() {
        let req = CocktailClient::default().build_search("mojito");
        assert_eq!(
            req.url,
            "https://www.thecocktaildb.com/api/json/v1/1/search.php?s=mojito"
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = CocktailClient::new("http://localhost:3000/api/json/v1/1/");
        assert_eq!(client.base_url(), "http://localhost:3000/api/json/v1/1");
    }

    #[test]
    fn parse_search_keeps_received_order() {
        let response = HttpResponse::new(
            200,
            r#"{"drinks":[
                {"idDrink":"2","strDrink":"Zombie","strDrinkThumb":"z","strInstructions":"z"},
                {"idDrink":"1","strDrink":"Aviation","strDrinkThumb":"a","strInstructions":"a"}
            ]}"#,
        );
        let drinks = client().parse_search(response).unwrap();
        let ids: Vec<&str> = drinks.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[test]
    fn parse_search_null_drinks_is_no_results() {
        let err = client()
            .parse_search(HttpResponse::new(200, r#"{"drinks":null}"#))
            .unwrap_err();
        assert_eq!(err, ApiError::NoResults);
    }

    #[test]
    fn parse_search_empty_array_is_empty_success() {
        let drinks = client()
            .parse_search(HttpResponse::new(200, r#"{"drinks":[]}"#))
            .unwrap();
        assert!(drinks.is_empty());
    }

    #[test]
    fn parse_search_server_error() {
        let err = client()
            .parse_search(HttpResponse::new(503, "unavailable"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 503, .. }));
    }

    #[test]
    fn parse_search_bad_json() {
        let err = client()
            .parse_search(HttpResponse::new(200, "<html>"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_search_unexpected_drinks_shape() {
        let err = client()
            .parse_search(HttpResponse::new(200, r#"{"drinks":"None Found"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
