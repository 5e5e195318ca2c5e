//! Custom axum extractors for Launchpad

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use validator::Validate;

use crate::Error;

/// Default page size for list endpoints
const DEFAULT_LIMIT: i64 = 25;

/// Maximum page size for list endpoints
const MAX_LIMIT: i64 = 100;

/// Pagination query parameters for list endpoints
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl Pagination {
    /// Offset, defaulting to 0
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    /// Limit, defaulting to 25, capped at 100
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}

/// JSON extractor that runs `validator` rules after deserialising.
///
/// Malformed JSON and failed rules both surface as `Error::Validation` (400).
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[derive(Debug)]
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Validation(Error),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            ValidatedJsonRejection::Json(e) => Error::Validation(e.body_text()).into_response(),
            ValidatedJsonRejection::Validation(e) => e.into_response(),
        }
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        value.validate().map_err(|e| {
            ValidatedJsonRejection::Validation(Error::Validation(format!(
                "Validation failed: {}",
                e
            )))
        })?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{self, Request as HttpRequest, StatusCode};

    #[derive(Debug, Deserialize, Validate)]
    struct SavePayload {
        #[validate(length(min = 1, max = 20))]
        title: String,
    }

    fn json_request(body: &str) -> HttpRequest<axum::body::Body> {
        HttpRequest::builder()
            .method(http::Method::POST)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_validated_json_accepts_valid_body() {
        let req = json_request(r#"{"title": "Pitch deck v2"}"#);
        let result = ValidatedJson::<SavePayload>::from_request(req, &()).await;
        assert_eq!(result.unwrap().0.title, "Pitch deck v2");
    }

    #[tokio::test]
    async fn test_validated_json_rejects_malformed_json() {
        let req = json_request("{title:");
        let err = ValidatedJson::<SavePayload>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_validated_json_rejects_rule_violation() {
        let req = json_request(r#"{"title": ""}"#);
        let err = ValidatedJson::<SavePayload>::from_request(req, &())
            .await
            .unwrap_err();
        assert!(matches!(err, ValidatedJsonRejection::Validation(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_pagination_defaults() {
        let p = Pagination::default();
        assert_eq!(p.offset(), 0);
        assert_eq!(p.limit(), 25);
    }

    #[test]
    fn test_pagination_clamps() {
        let p = Pagination {
            offset: Some(-3),
            limit: Some(1_000),
        };
        assert_eq!(p.offset(), 0);
        assert_eq!(p.limit(), 100);

        let p = Pagination {
            offset: None,
            limit: Some(0),
        };
        assert_eq!(p.limit(), 1);
    }
}
