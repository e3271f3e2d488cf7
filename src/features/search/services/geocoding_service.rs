use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config::GeocodingConfig;
use crate::core::error::{AppError, Result};
use crate::features::search::models::GeocodeMatch;
use crate::shared::constants::MSG_FETCH_FAILED;

/// Forward geocoding: free text to the best matching coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve `query` to its first match, `None` when the provider found nothing
    async fn forward(&self, query: &str) -> Result<Option<GeocodeMatch>>;
}

/// positionstack `/forward` response
#[derive(Debug, Deserialize)]
pub struct PositionstackResponse {
    #[serde(default)]
    pub data: Vec<PositionstackEntry>,
    pub error: Option<PositionstackError>,
}

/// Entries are result objects, but the provider sometimes sends `[]` in
/// place of an object when nothing matched.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PositionstackEntry {
    Result(PositionstackResult),
    #[allow(dead_code)]
    Other(serde_json::Value),
}

#[derive(Debug, Deserialize)]
pub struct PositionstackResult {
    pub latitude: f64,
    pub longitude: f64,
    pub label: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PositionstackError {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl PositionstackResponse {
    /// First entry as a match; everything after it is ignored
    pub fn first_match(self) -> Option<GeocodeMatch> {
        match self.data.into_iter().next()? {
            PositionstackEntry::Result(r) => Some(GeocodeMatch {
                latitude: r.latitude,
                longitude: r.longitude,
                label: r.label.or(r.name).unwrap_or_default(),
            }),
            PositionstackEntry::Other(_) => None,
        }
    }
}

/// Geocoding client for the positionstack forward endpoint
pub struct GeocodingService {
    client: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl GeocodingService {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_key: config.access_key.clone(),
        })
    }

    fn forward_url(&self, query: &str, access_key: &str) -> String {
        format!(
            "{}/forward?access_key={}&query={}",
            self.base_url,
            urlencoding::encode(access_key),
            urlencoding::encode(query)
        )
    }

    /// Execute HTTP request to positionstack and parse response
    async fn execute_request(&self, query: &str) -> Result<PositionstackResponse> {
        let url = self.forward_url(query, &self.access_key);
        tracing::debug!("Geocoding: {} -> {}", query, self.forward_url(query, "***"));

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("positionstack request failed: {}", e.without_url());
            AppError::ExternalServiceError(MSG_FETCH_FAILED.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<PositionstackResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .and_then(|e| e.message.or(e.code))
                .unwrap_or(body);
            tracing::error!("positionstack returned status {}: {}", status, detail);
            return Err(AppError::ExternalServiceError(MSG_FETCH_FAILED.to_string()));
        }

        let parsed: PositionstackResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse positionstack response: {}", e.without_url());
            AppError::ExternalServiceError(MSG_FETCH_FAILED.to_string())
        })?;

        if let Some(ref error) = parsed.error {
            tracing::error!(
                "positionstack reported an error: code={:?}, message={:?}",
                error.code,
                error.message
            );
            return Err(AppError::ExternalServiceError(MSG_FETCH_FAILED.to_string()));
        }

        Ok(parsed)
    }
}

#[async_trait]
impl Geocoder for GeocodingService {
    async fn forward(&self, query: &str) -> Result<Option<GeocodeMatch>> {
        let response = self.execute_request(query).await?;
        let total = response.data.len();
        let first = response.first_match();

        tracing::debug!(
            "Geocoding '{}' returned {} result(s), first match: {:?}",
            query,
            total,
            first
        );

        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        routing::get,
        Router,
    };
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Vec<HashMap<String, String>>>>;

    /// Serve `body` with `status` on `/v1/forward` and record query params
    async fn spawn_provider(status: StatusCode, body: String) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route(
                "/v1/forward",
                get(
                    move |State(captured): State<Captured>,
                          Query(params): Query<HashMap<String, String>>| {
                        let body = body.clone();
                        async move {
                            captured.lock().unwrap().push(params);
                            (
                                status,
                                [(axum::http::header::CONTENT_TYPE, "application/json")],
                                body,
                            )
                        }
                    },
                ),
            )
            .with_state(Arc::clone(&captured));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/v1", addr), captured)
    }

    fn service(base_url: &str) -> GeocodingService {
        GeocodingService::new(&GeocodingConfig {
            base_url: base_url.to_string(),
            access_key: "test-key".to_string(),
            timeout: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_forward_returns_first_result_only() {
        let body = json!({
            "data": [
                {"latitude": 48.8566, "longitude": 2.3522, "label": "Paris, France", "name": "Paris"},
                {"latitude": 33.6609, "longitude": -95.5555, "label": "Paris, TX, USA", "name": "Paris"}
            ]
        });
        let (base_url, _) = spawn_provider(StatusCode::OK, body.to_string()).await;

        let result = service(&base_url).forward("Paris").await.unwrap();

        assert_eq!(
            result,
            Some(GeocodeMatch {
                latitude: 48.8566,
                longitude: 2.3522,
                label: "Paris, France".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_forward_sends_key_and_encoded_query() {
        let body = json!({"data": []});
        let (base_url, captured) = spawn_provider(StatusCode::OK, body.to_string()).await;

        service(&base_url)
            .forward("Rue de Rivoli & Louvre, Paris")
            .await
            .unwrap();

        let requests = captured.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].get("access_key").map(String::as_str), Some("test-key"));
        assert_eq!(
            requests[0].get("query").map(String::as_str),
            Some("Rue de Rivoli & Louvre, Paris")
        );
    }

    #[tokio::test]
    async fn test_forward_empty_data_is_none() {
        let (base_url, _) = spawn_provider(StatusCode::OK, json!({"data": []}).to_string()).await;
        assert_eq!(service(&base_url).forward("zzzzznowhere").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_forward_nested_empty_entry_is_none() {
        let (base_url, _) =
            spawn_provider(StatusCode::OK, json!({"data": [[]]}).to_string()).await;
        assert_eq!(service(&base_url).forward("zzzzznowhere").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_forward_missing_label_falls_back_to_name() {
        let body = json!({"data": [{"latitude": 1.0, "longitude": 2.0, "label": null, "name": "Somewhere"}]});
        let (base_url, _) = spawn_provider(StatusCode::OK, body.to_string()).await;

        let result = service(&base_url).forward("somewhere").await.unwrap().unwrap();
        assert_eq!(result.label, "Somewhere");
    }

    #[tokio::test]
    async fn test_forward_error_status_is_external_error() {
        let body = json!({"error": {"code": "invalid_access_key", "message": "You have not supplied a valid API Access Key."}});
        let (base_url, _) = spawn_provider(StatusCode::UNAUTHORIZED, body.to_string()).await;

        let result = service(&base_url).forward("Paris").await;
        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_forward_error_object_with_ok_status_is_external_error() {
        let body = json!({"error": {"code": "usage_limit_reached", "message": "limit"}});
        let (base_url, _) = spawn_provider(StatusCode::OK, body.to_string()).await;

        let result = service(&base_url).forward("Paris").await;
        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_forward_malformed_body_is_external_error() {
        let (base_url, _) = spawn_provider(StatusCode::OK, "<html>oops</html>".to_string()).await;

        let result = service(&base_url).forward("Paris").await;
        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_forward_unreachable_provider_is_external_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = service(&format!("http://{}/v1", addr)).forward("Paris").await;
        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[test]
    fn test_forward_url_redaction() {
        let svc = service("http://api.positionstack.com/v1/");
        let url = svc.forward_url("New York", "***");
        assert_eq!(
            url,
            "http://api.positionstack.com/v1/forward?access_key=%2A%2A%2A&query=New%20York"
        );
    }
}
