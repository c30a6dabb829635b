//! Scripted transport used by the unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};
use url::Url;

use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::transport::{RawResponse, Transport};
use crate::YouTubeClient;

pub(crate) type Params = HashMap<String, String>;
type Handler = Box<dyn Fn(&Params) -> Option<Reply> + Send + Sync>;

pub(crate) enum Reply {
    Json(u16, Value),
    Raw(u16, String),
    Error(String),
}

/// Answers each endpoint with the first handler that returns a reply, and
/// records every URL it is asked for. Unanswered calls get a 404.
pub(crate) struct ScriptedTransport {
    handlers: Vec<(String, Handler)>,
    calls: Mutex<Vec<Url>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self {
            handlers: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn on(
        mut self,
        endpoint: &str,
        handler: impl Fn(&Params) -> Option<Reply> + Send + Sync + 'static,
    ) -> Self {
        self.handlers.push((endpoint.to_string(), Box::new(handler)));
        self
    }

    pub(crate) fn calls(&self) -> Vec<Url> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    /// Endpoint name and query of every call, in order.
    pub(crate) fn log(&self) -> Vec<(String, Params)> {
        self.calls()
            .iter()
            .map(|url| (endpoint_of(url), url.query_pairs().into_owned().collect()))
            .collect()
    }

    pub(crate) fn endpoints(&self) -> Vec<String> {
        self.log().into_iter().map(|(endpoint, _)| endpoint).collect()
    }
}

fn endpoint_of(url: &Url) -> String {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default()
        .to_string()
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: Url) -> Result<RawResponse, TransportError> {
        self.calls.lock().expect("calls lock poisoned").push(url.clone());

        let endpoint = endpoint_of(&url);
        let params: Params = url.query_pairs().into_owned().collect();
        let reply = self
            .handlers
            .iter()
            .filter(|(name, _)| *name == endpoint)
            .find_map(|(_, handler)| handler(&params));

        match reply {
            Some(Reply::Json(status, body)) => Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
            Some(Reply::Raw(status, body)) => Ok(RawResponse { status, body }),
            Some(Reply::Error(message)) => Err(TransportError::Other(message)),
            None => Ok(RawResponse {
                status: 404,
                body: json!({"error": {"code": 404, "message": "Not Found"}}).to_string(),
            }),
        }
    }
}

pub(crate) fn client(transport: ScriptedTransport) -> YouTubeClient<ScriptedTransport> {
    let config = ApiConfig::new("test-key")
        .and_then(|config| config.with_base_url("https://provider.test/youtube/v3"))
        .expect("test config should be valid");
    YouTubeClient::with_transport(config, transport)
}

pub(crate) fn ok(body: Value) -> Option<Reply> {
    Some(Reply::Json(200, body))
}

pub(crate) fn video(id: &str, channel_id: &str, category_id: Option<&str>) -> Value {
    let mut snippet = json!({
        "title": format!("Video {id}"),
        "channelId": channel_id,
        "channelTitle": format!("Channel {channel_id}"),
        "publishedAt": "2023-01-01T00:00:00Z",
    });
    if let Some(category_id) = category_id {
        snippet["categoryId"] = json!(category_id);
    }
    json!({
        "id": id,
        "snippet": snippet,
        "contentDetails": {"duration": "PT4M13S"},
        "statistics": {"viewCount": "100", "likeCount": "10"},
    })
}

pub(crate) fn search_hits(ids: &[&str]) -> Value {
    let items: Vec<Value> = ids
        .iter()
        .map(|id| json!({"id": {"kind": "youtube#video", "videoId": id}}))
        .collect();
    json!({"items": items})
}

/// `videos` handler answering `id=` lookups from a fixed catalog.
pub(crate) fn videos_by_id(catalog: Vec<Value>) -> impl Fn(&Params) -> Option<Reply> + Send + Sync {
    move |params| {
        let ids = params.get("id")?;
        let items: Vec<Value> = ids
            .split(',')
            .filter_map(|id| catalog.iter().find(|v| v["id"] == *id).cloned())
            .collect();
        ok(json!({"items": items}))
    }
}

pub(crate) fn ids(page: &domain::VideoPage) -> Vec<&str> {
    page.videos.iter().map(|v| v.id.as_str()).collect()
}
