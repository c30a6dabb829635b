//! A stand-in for the YouTube Data API v3 list endpoints, served from a
//! [`datastore::Repository`]. Used for offline development and by the
//! client's integration tests.

use axum::{
    Json, Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use datastore::Repository;
use domain::{
    Channel, CommentThread, PlaylistItem, PlaylistItemSnippet, ResourceId, SearchResult,
    SearchResultId, Video,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

mod envelope;
mod params;

pub use envelope::{ApiError, ListEnvelope, page_token_for, paginate};
pub use params::ListParams;
use params::{matches_any, query_terms};

pub const VIDEOS: &str = "videos";
pub const SEARCH: &str = "search";
pub const COMMENT_THREADS: &str = "commentThreads";
pub const CHANNELS: &str = "channels";
pub const PLAYLIST_ITEMS: &str = "playlistItems";

/// Shared state of the stub: the catalog plus injected failures
pub struct ProviderStub {
    repo: Arc<dyn Repository>,
    failures: RwLock<HashMap<String, u16>>,
}

impl ProviderStub {
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self {
            repo,
            failures: RwLock::new(HashMap::new()),
        }
    }

    /// Makes every call to `endpoint` answer with `status` until cleared
    pub fn fail_endpoint(&self, endpoint: &str, status: u16) {
        self.failures
            .write()
            .expect("Failed to acquire write lock on failures")
            .insert(endpoint.to_string(), status);
    }

    pub fn clear_failures(&self) {
        self.failures
            .write()
            .expect("Failed to acquire write lock on failures")
            .clear();
    }

    /// Rejects calls without a key and calls to failing endpoints
    fn check(&self, endpoint: &str, params: &ListParams) -> Result<(), ApiError> {
        if !params.has_key() {
            return Err(ApiError::new(
                403,
                "forbidden",
                "The request is missing a valid API key.",
            ));
        }
        let injected = self
            .failures
            .read()
            .expect("Failed to acquire read lock on failures")
            .get(endpoint)
            .copied();
        match injected {
            Some(status) => Err(ApiError::new(status, "backendError", format!("Injected failure for {endpoint}"))),
            None => Ok(()),
        }
    }

    pub fn videos(&self, params: &ListParams) -> Result<ListEnvelope<Video>, ApiError> {
        self.check(VIDEOS, params)?;

        let videos: Vec<Video> = if params.id.is_some() {
            params
                .ids()
                .into_iter()
                .filter_map(|id| self.repo.get_video(id))
                .collect()
        } else if params.chart.as_deref() == Some("mostPopular") {
            let category = params.video_category_id.as_deref().filter(|c| !c.is_empty());
            let mut chart: Vec<Video> = self
                .repo
                .get_videos()
                .into_iter()
                .filter(|video| category.is_none() || video.category_id() == category)
                .collect();
            chart.sort_by(|a, b| b.statistics.views().cmp(&a.statistics.views()));
            chart
        } else {
            return Err(ApiError::bad_request(
                "missingRequiredParameter",
                "No filter selected. Expected one of: id, chart",
            ));
        };

        let videos = videos
            .into_iter()
            .map(|video| shape_video(video, params))
            .collect();
        paginate("youtube#videoListResponse", videos, params.max_results, params.page_token())
    }

    pub fn search(&self, params: &ListParams) -> Result<ListEnvelope<SearchResult>, ApiError> {
        self.check(SEARCH, params)?;

        let candidates: Vec<Video> = match params.related_to_video_id.as_deref() {
            Some(seed) => self
                .repo
                .get_related_ids(seed)
                .iter()
                .filter_map(|id| self.repo.get_video(id))
                .collect(),
            None => self.repo.get_videos(),
        };

        let terms = query_terms(params.q.as_deref().unwrap_or_default());
        let live_only = params.event_type.as_deref() == Some("live");
        let hits: Vec<SearchResult> = candidates
            .into_iter()
            .filter(|video| matches_any(&video.snippet.title, &terms))
            .filter(|video| {
                params
                    .channel_id
                    .as_deref()
                    .is_none_or(|channel| video.snippet.channel_id == channel)
            })
            .filter(|video| {
                params
                    .video_category_id
                    .as_deref()
                    .is_none_or(|category| video.category_id() == Some(category))
            })
            .filter(|video| !live_only || self.repo.is_live(&video.id))
            .map(|video| SearchResult {
                kind: Some("youtube#searchResult".to_string()),
                id: SearchResultId {
                    kind: Some("youtube#video".to_string()),
                    video_id: Some(video.id),
                },
            })
            .collect();

        paginate("youtube#searchListResponse", hits, params.max_results, params.page_token())
    }

    pub fn comment_threads(&self, params: &ListParams) -> Result<ListEnvelope<CommentThread>, ApiError> {
        self.check(COMMENT_THREADS, params)?;

        let Some(video_id) = params.video_id.as_deref().filter(|id| !id.is_empty()) else {
            return Err(ApiError::bad_request(
                "missingRequiredParameter",
                "No filter selected. Expected one of: videoId",
            ));
        };
        if self.repo.get_video(video_id).is_none() {
            return Err(ApiError::not_found(
                "videoNotFound",
                format!("The video identified by the videoId parameter could not be found: {video_id}"),
            ));
        }

        let mut threads = self.repo.get_comment_threads(video_id);
        match params.order.as_deref() {
            Some("time") => threads.sort_by(|a, b| {
                let published = |t: &CommentThread| t.snippet.top_level_comment.snippet.published_at.clone();
                published(b).cmp(&published(a))
            }),
            _ => threads.sort_by_key(|t| std::cmp::Reverse(t.snippet.top_level_comment.snippet.like_count)),
        }

        paginate(
            "youtube#commentThreadListResponse",
            threads,
            params.max_results,
            params.page_token(),
        )
    }

    pub fn channels(&self, params: &ListParams) -> Result<ListEnvelope<Channel>, ApiError> {
        self.check(CHANNELS, params)?;

        let channels: Vec<Channel> = params
            .ids()
            .into_iter()
            .filter_map(|id| self.repo.get_channel(id))
            .map(|mut channel| {
                if !params.wants("snippet") {
                    channel.snippet = Default::default();
                }
                if !params.wants("statistics") {
                    channel.statistics = Default::default();
                }
                if !params.wants("brandingSettings") {
                    channel.branding_settings = None;
                }
                if !params.wants("contentDetails") {
                    channel.content_details = None;
                }
                channel
            })
            .collect();

        paginate("youtube#channelListResponse", channels, params.max_results, params.page_token())
    }

    pub fn playlist_items(&self, params: &ListParams) -> Result<ListEnvelope<PlaylistItem>, ApiError> {
        self.check(PLAYLIST_ITEMS, params)?;

        let playlist_id = params.playlist_id.as_deref().unwrap_or_default();
        let Some(video_ids) = self.repo.get_playlist_video_ids(playlist_id) else {
            return Err(ApiError::not_found(
                "playlistNotFound",
                format!("The playlist identified with the request's playlistId parameter cannot be found: {playlist_id}"),
            ));
        };

        let items = video_ids
            .into_iter()
            .map(|video_id| PlaylistItem {
                snippet: PlaylistItemSnippet {
                    resource_id: ResourceId {
                        kind: Some("youtube#video".to_string()),
                        video_id: Some(video_id),
                    },
                },
            })
            .collect();

        paginate("youtube#playlistItemListResponse", items, params.max_results, params.page_token())
    }
}

/// Drops the parts of a video the request did not ask for
fn shape_video(mut video: Video, params: &ListParams) -> Video {
    if !params.wants("snippet") {
        video.snippet = Default::default();
    }
    if !params.wants("statistics") {
        video.statistics = Default::default();
    }
    if !params.wants("contentDetails") {
        video.content_details = None;
    }
    video
}

fn respond<T: Serialize>(endpoint: &str, result: Result<ListEnvelope<T>, ApiError>) -> Response {
    match result {
        Ok(envelope) => {
            debug!(endpoint, items = envelope.items.len(), "served list");
            Json(envelope).into_response()
        }
        Err(error) => {
            debug!(endpoint, status = error.status, reason = error.reason, "served error");
            error.into_response()
        }
    }
}

async fn videos_list(
    State(stub): State<Arc<ProviderStub>>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    respond(VIDEOS, stub.videos(&params))
}

async fn search_list(
    State(stub): State<Arc<ProviderStub>>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    respond(SEARCH, stub.search(&params))
}

async fn comment_threads_list(
    State(stub): State<Arc<ProviderStub>>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    respond(COMMENT_THREADS, stub.comment_threads(&params))
}

async fn channels_list(
    State(stub): State<Arc<ProviderStub>>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    respond(CHANNELS, stub.channels(&params))
}

async fn playlist_items_list(
    State(stub): State<Arc<ProviderStub>>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    respond(PLAYLIST_ITEMS, stub.playlist_items(&params))
}

/// Create the router for the provider API
pub fn create_router(stub: Arc<ProviderStub>) -> Router {
    Router::new()
        .route("/youtube/v3/videos", get(videos_list))
        .route("/youtube/v3/search", get(search_list))
        .route("/youtube/v3/commentThreads", get(comment_threads_list))
        .route("/youtube/v3/channels", get(channels_list))
        .route("/youtube/v3/playlistItems", get(playlist_items_list))
        .with_state(stub)
}
