use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use domain::PageInfo;
use serde::Serialize;
use serde_json::json;

/// Page size when the request has no `maxResults`.
pub const DEFAULT_MAX_RESULTS: usize = 5;
/// Largest page the provider hands out.
pub const MAX_RESULTS_LIMIT: usize = 50;

const PAGE_TOKEN_PREFIX: &str = "page-";

/// The list envelope every endpoint answers with
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEnvelope<T> {
    pub kind: String,
    pub etag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    pub page_info: PageInfo,
    pub items: Vec<T>,
}

/// Google-style error reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub reason: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, reason: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            reason,
            message: message.into(),
        }
    }

    pub fn bad_request(reason: &'static str, message: impl Into<String>) -> Self {
        Self::new(400, reason, message)
    }

    pub fn not_found(reason: &'static str, message: impl Into<String>) -> Self {
        Self::new(404, reason, message)
    }

    pub fn body(&self) -> serde_json::Value {
        json!({
            "error": {
                "code": self.status,
                "message": self.message,
                "errors": [{
                    "message": self.message,
                    "domain": "youtube.api",
                    "reason": self.reason,
                }],
            }
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body())).into_response()
    }
}

/// Cuts one page out of `items` using the offset encoded in the page token.
pub fn paginate<T>(
    kind: &str,
    items: Vec<T>,
    max_results: Option<u32>,
    page_token: Option<&str>,
) -> Result<ListEnvelope<T>, ApiError> {
    let per_page = max_results
        .map(|m| m as usize)
        .unwrap_or(DEFAULT_MAX_RESULTS)
        .min(MAX_RESULTS_LIMIT);
    let offset = match page_token.filter(|t| !t.is_empty()) {
        Some(token) => parse_page_token(token)?,
        None => 0,
    };

    let total = items.len();
    let items: Vec<T> = items.into_iter().skip(offset).take(per_page).collect();
    let end = offset + items.len();
    let next_page_token = (per_page > 0 && end < total).then(|| page_token_for(end));

    Ok(ListEnvelope {
        kind: kind.to_string(),
        etag: format!("etag-{kind}-{offset}"),
        next_page_token,
        page_info: PageInfo {
            total_results: total as u64,
            results_per_page: per_page as u64,
        },
        items,
    })
}

pub fn page_token_for(offset: usize) -> String {
    format!("{PAGE_TOKEN_PREFIX}{offset}")
}

fn parse_page_token(token: &str) -> Result<usize, ApiError> {
    token
        .strip_prefix(PAGE_TOKEN_PREFIX)
        .and_then(|offset| offset.parse().ok())
        .ok_or_else(|| ApiError::bad_request("invalidPageToken", "The request specifies an invalid page token."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_has_next_token() {
        let page = paginate("k", (0..12).collect(), Some(5), None).unwrap();
        assert_eq!(page.items, [0, 1, 2, 3, 4]);
        assert_eq!(page.next_page_token.as_deref(), Some("page-5"));
        assert_eq!(page.page_info.total_results, 12);
        assert_eq!(page.page_info.results_per_page, 5);
    }

    #[test]
    fn test_last_page_has_no_token() {
        let page = paginate("k", (0..12).collect(), Some(5), Some("page-10")).unwrap();
        assert_eq!(page.items, [10, 11]);
        assert_eq!(page.next_page_token, None);
    }

    #[test]
    fn test_default_and_capped_page_size() {
        let page = paginate("k", (0..100).collect(), None, None).unwrap();
        assert_eq!(page.items.len(), DEFAULT_MAX_RESULTS);
        let page = paginate("k", (0..100).collect(), Some(500), None).unwrap();
        assert_eq!(page.items.len(), MAX_RESULTS_LIMIT);
    }

    #[test]
    fn test_invalid_page_token() {
        let err = paginate("k", vec![1], None, Some("CAUQAA")).unwrap_err();
        assert_eq!(err.status, 400);
        assert_eq!(err.reason, "invalidPageToken");
    }

    #[test]
    fn test_error_body_shape() {
        let body = ApiError::new(403, "quotaExceeded", "over quota").body();
        assert_eq!(body["error"]["code"], 403);
        assert_eq!(body["error"]["message"], "over quota");
        assert_eq!(body["error"]["errors"][0]["reason"], "quotaExceeded");
    }
}
