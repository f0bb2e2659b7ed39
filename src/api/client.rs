use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::{
    Category, CategoryEnvelope, ErrorBody, GiftCard, ItemsEnvelope, Review, ReviewsEnvelope, User,
};
use crate::config::ApiConfig;

/// Query parameters for the paginated/searchable item listing.
#[derive(Debug, Clone, Serialize)]
pub struct ItemsQuery {
    pub skip: u32,
    pub limit: u32,
    pub search: String,
}

impl Default for ItemsQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 10,
            search: String::new(),
        }
    }
}

impl ItemsQuery {
    pub fn with_search(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }
}

/// HTTP client for the marketplace API plus the demo user service.
///
/// Marketplace requests carry `Content-Type: application/json` and, when a
/// token is configured, a bearer Authorization header. The user service is
/// a separate unauthenticated host and gets neither.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    user_base_url: String,
    token: Option<String>,
    timeout_seconds: u64,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ApiError::InvalidConfig {
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_base_url: config.user_base_url.trim_end_matches('/').to_string(),
            token: config.resolved_token(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    /// `GET /category` → the category list.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let envelope: CategoryEnvelope = self.send(self.get("/category")).await?;
        Ok(envelope.category)
    }

    /// `GET /items/trending` → the curated trending card list.
    pub async fn trending_items(&self) -> Result<Vec<GiftCard>, ApiError> {
        let envelope: ItemsEnvelope = self.send(self.get("/items/trending")).await?;
        Ok(envelope.items)
    }

    /// `GET /items?skip&limit&search` → the full (paginated) card list.
    pub async fn items(&self, query: &ItemsQuery) -> Result<Vec<GiftCard>, ApiError> {
        let envelope: ItemsEnvelope = self.send(self.get("/items").query(query)).await?;
        Ok(envelope.items)
    }

    /// `GET /reviews/good` → highly-rated storefront reviews.
    pub async fn good_reviews(&self) -> Result<Vec<Review>, ApiError> {
        let envelope: ReviewsEnvelope = self.send(self.get("/reviews/good")).await?;
        Ok(envelope.reviews)
    }

    /// `GET {user_base_url}/users/{id}` → a bare user object.
    pub async fn user(&self, id: u64) -> Result<User, ApiError> {
        let url = format!("{}/users/{}", self.user_base_url, id);
        self.send(self.http.get(url)).await
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::from_send(e, self.timeout_seconds))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            // Upstream errors usually carry a JSON body with a message field;
            // fall back to the raw text when they don't.
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.message)
                .unwrap_or(text);
            tracing::warn!(status = status.as_u16(), %message, "api request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode { source: e })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_query_defaults_match_storefront_paging() {
        let query = ItemsQuery::default();
        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, 10);
        assert_eq!(query.search, "");
    }

    // reqwest encodes `.query()` via serde; pin the wire field names here
    // so a rename doesn't silently change the request.
    #[test]
    fn items_query_serializes_to_expected_params() {
        let query = ItemsQuery {
            skip: 20,
            limit: 10,
            search: "steam".to_string(),
        };
        let value = serde_json::to_value(&query).expect("serialize query");
        assert_eq!(value["skip"], 20);
        assert_eq!(value["limit"], 10);
        assert_eq!(value["search"], "steam");
    }

    #[test]
    fn client_builds_from_default_config() {
        let client = ApiClient::new(&ApiConfig::default()).expect("build client");
        assert!(client.base_url.starts_with("http"));
        assert!(!client.base_url.ends_with('/'));
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let config = ApiConfig {
            base_url: "https://market.example.com/api/".to_string(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).expect("build client");
        assert_eq!(client.base_url, "https://market.example.com/api");
    }
}
