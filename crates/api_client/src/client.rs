use domain::ListResponse;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::error::{FetchError, describe_error_body};
use crate::request::{ListRequest, QueryParams};
use crate::transport::{HttpTransport, RawResponse, Transport};

/// Result of a single provider call, keeping the failure cause around for
/// logging. Callers that only care about data use [`Fetched::into_response`].
#[derive(Debug)]
pub enum Fetched<T> {
    Items(ListResponse<T>),
    Empty(ListResponse<T>),
    Failed(FetchError),
}

impl<T> Fetched<T> {
    /// Collapses failures to `None`; an empty page is still `Some`.
    pub fn into_response(self) -> Option<ListResponse<T>> {
        match self {
            Fetched::Items(response) | Fetched::Empty(response) => Some(response),
            Fetched::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Fetched::Failed(_))
    }

    fn label(&self) -> &'static str {
        match self {
            Fetched::Items(_) => "items",
            Fetched::Empty(_) => "empty",
            Fetched::Failed(_) => "failed",
        }
    }
}

pub struct YouTubeClient<T = HttpTransport> {
    config: ApiConfig,
    transport: T,
}

impl YouTubeClient<HttpTransport> {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> YouTubeClient<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issues exactly one GET for `request` and classifies the outcome.
    pub async fn fetch<R: ListRequest>(&self, request: &R) -> Fetched<R::Item> {
        let params = request.params();
        debug!(endpoint = R::ENDPOINT, ?params, "fetching from provider");

        let url = self.request_url(R::ENDPOINT, &params);
        let fetched = match self.transport.get(url).await {
            Ok(response) => decode(response),
            Err(err) => Fetched::Failed(err.into()),
        };

        match &fetched {
            Fetched::Failed(error) => {
                warn!(endpoint = R::ENDPOINT, %error, "provider request failed");
            }
            other => debug!(endpoint = R::ENDPOINT, outcome = other.label(), "provider responded"),
        }
        fetched
    }

    /// The public contract of [`YouTubeClient::fetch`]: data or `None`.
    pub async fn fetch_resource<R: ListRequest>(&self, request: &R) -> Option<ListResponse<R::Item>> {
        self.fetch(request).await.into_response()
    }

    fn request_url(&self, endpoint: &str, params: &QueryParams) -> Url {
        let mut url = self.config.endpoint_url(endpoint);
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("key", self.config.api_key());
            for (key, value) in params.iter() {
                query.append_pair(key, value);
            }
        }
        url
    }
}

fn decode<T: DeserializeOwned>(response: RawResponse) -> Fetched<T> {
    if !response.is_success() {
        return Fetched::Failed(FetchError::Status {
            status: response.status,
            message: describe_error_body(&response.body),
        });
    }
    match serde_json::from_str::<ListResponse<T>>(&response.body) {
        Ok(list) if list.items.is_empty() => Fetched::Empty(list),
        Ok(list) => Fetched::Items(list),
        Err(err) => Fetched::Failed(err.into()),
    }
}
