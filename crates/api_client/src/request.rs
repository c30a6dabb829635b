//! Typed query parameters, one structure per provider endpoint.
//!
//! Each request knows its endpoint name and the item type of the list it
//! returns. Only parameters that are set end up in the query string.

use std::fmt;

use domain::{Channel, CommentThread, PlaylistItem, SearchResult, Video};
use serde::de::DeserializeOwned;
use strum::{Display, IntoStaticStr};

/// A request against one of the provider's list endpoints.
pub trait ListRequest {
    const ENDPOINT: &'static str;
    type Item: DeserializeOwned;

    fn params(&self) -> QueryParams;
}

/// Ordered query pairs, without the API key.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.push((key, value.into()));
    }

    fn push_opt<V: ToString>(&mut self, key: &'static str, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value.to_string());
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Debug for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum Part {
    Snippet,
    Statistics,
    ContentDetails,
    BrandingSettings,
}

/// Parts needed to render a video card.
pub const VIDEO_PARTS: &[Part] = &[Part::Snippet, Part::Statistics, Part::ContentDetails];

fn join_parts(parts: &[Part]) -> String {
    parts
        .iter()
        .map(|part| <&'static str>::from(*part))
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EventType {
    Live,
    Upcoming,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum VideoDuration {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CommentOrder {
    #[default]
    Relevance,
    Time,
}

/// Which videos a `videos` call selects. The provider requires exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoFilter {
    Ids(Vec<String>),
    MostPopular {
        region_code: String,
        category_id: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideosRequest {
    pub parts: Vec<Part>,
    pub filter: VideoFilter,
    pub max_results: Option<u32>,
    pub page_token: Option<String>,
}

impl VideosRequest {
    pub fn by_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(VideoFilter::Ids(ids.into_iter().map(Into::into).collect()))
    }

    pub fn most_popular(region_code: &str, category_id: Option<&str>) -> Self {
        Self::new(VideoFilter::MostPopular {
            region_code: region_code.to_string(),
            category_id: category_id.map(str::to_string),
        })
    }

    fn new(filter: VideoFilter) -> Self {
        Self {
            parts: VIDEO_PARTS.to_vec(),
            filter,
            max_results: None,
            page_token: None,
        }
    }

    pub fn parts(mut self, parts: &[Part]) -> Self {
        self.parts = parts.to_vec();
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn page_token(mut self, page_token: Option<&str>) -> Self {
        self.page_token = page_token.filter(|t| !t.is_empty()).map(str::to_string);
        self
    }
}

impl ListRequest for VideosRequest {
    const ENDPOINT: &'static str = "videos";
    type Item = Video;

    fn params(&self) -> QueryParams {
        let mut params = QueryParams::default();
        params.push("part", join_parts(&self.parts));
        match &self.filter {
            VideoFilter::Ids(ids) => params.push("id", ids.join(",")),
            VideoFilter::MostPopular {
                region_code,
                category_id,
            } => {
                params.push("chart", "mostPopular");
                params.push_opt("regionCode", Some(region_code).filter(|r| !r.is_empty()));
                params.push_opt("videoCategoryId", category_id.as_ref());
            }
        }
        params.push_opt("maxResults", self.max_results);
        params.push_opt("pageToken", self.page_token.as_ref());
        params
    }
}

/// `search` restricted to videos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub related_to_video_id: Option<String>,
    pub event_type: Option<EventType>,
    pub video_duration: Option<VideoDuration>,
    pub video_category_id: Option<String>,
    pub max_results: Option<u32>,
    pub page_token: Option<String>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    pub fn related_to(mut self, video_id: &str) -> Self {
        self.related_to_video_id = Some(video_id.to_string());
        self
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Some(event_type);
        self
    }

    pub fn video_duration(mut self, duration: VideoDuration) -> Self {
        self.video_duration = Some(duration);
        self
    }

    pub fn category(mut self, category_id: &str) -> Self {
        self.video_category_id = Some(category_id.to_string());
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn page_token(mut self, page_token: Option<&str>) -> Self {
        self.page_token = page_token.filter(|t| !t.is_empty()).map(str::to_string);
        self
    }
}

impl ListRequest for SearchRequest {
    const ENDPOINT: &'static str = "search";
    type Item = SearchResult;

    fn params(&self) -> QueryParams {
        let mut params = QueryParams::default();
        params.push("part", join_parts(&[Part::Snippet]));
        params.push("type", "video");
        params.push_opt("q", self.query.as_ref());
        params.push_opt("relatedToVideoId", self.related_to_video_id.as_ref());
        params.push_opt("eventType", self.event_type);
        params.push_opt("videoDuration", self.video_duration);
        params.push_opt("videoCategoryId", self.video_category_id.as_ref());
        params.push_opt("maxResults", self.max_results);
        params.push_opt("pageToken", self.page_token.as_ref());
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentThreadsRequest {
    pub video_id: String,
    pub order: CommentOrder,
    pub max_results: Option<u32>,
    pub page_token: Option<String>,
}

impl CommentThreadsRequest {
    pub fn for_video(video_id: &str) -> Self {
        Self {
            video_id: video_id.to_string(),
            order: CommentOrder::default(),
            max_results: None,
            page_token: None,
        }
    }

    pub fn order(mut self, order: CommentOrder) -> Self {
        self.order = order;
        self
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn page_token(mut self, page_token: Option<&str>) -> Self {
        self.page_token = page_token.filter(|t| !t.is_empty()).map(str::to_string);
        self
    }
}

impl ListRequest for CommentThreadsRequest {
    const ENDPOINT: &'static str = "commentThreads";
    type Item = CommentThread;

    fn params(&self) -> QueryParams {
        let mut params = QueryParams::default();
        params.push("part", join_parts(&[Part::Snippet]));
        params.push("videoId", self.video_id.as_str());
        params.push("order", self.order.to_string());
        params.push_opt("maxResults", self.max_results);
        params.push_opt("pageToken", self.page_token.as_ref());
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelsRequest {
    pub id: String,
    pub parts: Vec<Part>,
}

impl ChannelsRequest {
    pub fn new(id: &str, parts: &[Part]) -> Self {
        Self {
            id: id.to_string(),
            parts: parts.to_vec(),
        }
    }
}

impl ListRequest for ChannelsRequest {
    const ENDPOINT: &'static str = "channels";
    type Item = Channel;

    fn params(&self) -> QueryParams {
        let mut params = QueryParams::default();
        params.push("part", join_parts(&self.parts));
        params.push("id", self.id.as_str());
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistItemsRequest {
    pub playlist_id: String,
    pub max_results: Option<u32>,
    pub page_token: Option<String>,
}

impl PlaylistItemsRequest {
    pub fn new(playlist_id: &str) -> Self {
        Self {
            playlist_id: playlist_id.to_string(),
            max_results: None,
            page_token: None,
        }
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn page_token(mut self, page_token: Option<&str>) -> Self {
        self.page_token = page_token.filter(|t| !t.is_empty()).map(str::to_string);
        self
    }
}

impl ListRequest for PlaylistItemsRequest {
    const ENDPOINT: &'static str = "playlistItems";
    type Item = PlaylistItem;

    fn params(&self) -> QueryParams {
        let mut params = QueryParams::default();
        params.push("part", join_parts(&[Part::Snippet]));
        params.push("playlistId", self.playlist_id.as_str());
        params.push_opt("maxResults", self.max_results);
        params.push_opt("pageToken", self.page_token.as_ref());
        params
    }
}
