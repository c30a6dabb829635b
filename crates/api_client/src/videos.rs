use std::convert::Infallible;
use std::str::FromStr;

use domain::{Video, VideoPage};
use formatting::{VideoCategory, format_duration};

use crate::client::YouTubeClient;
use crate::request::VideosRequest;
use crate::transport::Transport;

/// Page size of chart-based feeds.
const FEED_PAGE_SIZE: u32 = 20;

/// Largest `maxResults` the provider accepts.
const MAX_PAGE_SIZE: u32 = 50;

/// A browsable feed of popular videos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Feed {
    #[default]
    Home,
    Trending,
    Category(VideoCategory),
}

impl Feed {
    /// Maps a feed name to a feed. Category names match case-insensitively,
    /// anything unrecognized is the home feed.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("trending") {
            return Feed::Trending;
        }
        name.parse::<VideoCategory>()
            .map(Feed::Category)
            .unwrap_or(Feed::Home)
    }
}

impl FromStr for Feed {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Feed::parse(s))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedOptions {
    pub page_token: Option<String>,
    pub max_results: Option<u32>,
}

/// Rewrites every ISO-8601 duration into its display form. Must run exactly
/// once per fetched video.
fn normalize_durations(videos: &mut [Video]) {
    for details in videos.iter_mut().filter_map(|v| v.content_details.as_mut()) {
        details.duration = format_duration(&details.duration);
    }
}

impl<T: Transport> YouTubeClient<T> {
    /// One `videos` call, durations normalized. `None` when the call failed.
    pub(crate) async fn list_videos(&self, request: &VideosRequest) -> Option<VideoPage> {
        let response = self.fetch_resource(request).await?;
        let mut videos = response.items;
        normalize_durations(&mut videos);
        Some(VideoPage::new(videos, response.next_page_token))
    }

    /// Batched detail lookup. No ids means no request and an empty page.
    pub(crate) async fn fetch_videos_by_ids(&self, ids: &[String]) -> Option<VideoPage> {
        if ids.is_empty() {
            return Some(VideoPage::default());
        }
        self.list_videos(&VideosRequest::by_ids(ids.iter().cloned()))
            .await
    }

    pub(crate) async fn fetch_popular_in_category(
        &self,
        category_id: Option<&str>,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Option<VideoPage> {
        let request = VideosRequest::most_popular(self.config().region_code(), category_id)
            .max_results(max_results)
            .page_token(page_token);
        self.list_videos(&request).await
    }

    /// Most popular videos in the configured region.
    pub async fn fetch_popular_videos(&self, page_token: Option<&str>) -> VideoPage {
        self.fetch_popular_in_category(None, FEED_PAGE_SIZE, page_token)
            .await
            .unwrap_or_default()
    }

    /// First page of the regional chart, without a category filter.
    pub async fn fetch_trending_videos(&self) -> VideoPage {
        self.fetch_popular_in_category(None, FEED_PAGE_SIZE, None)
            .await
            .unwrap_or_default()
    }

    pub async fn fetch_category_videos(
        &self,
        category: VideoCategory,
        page_token: Option<&str>,
    ) -> VideoPage {
        self.fetch_popular_in_category(Some(category.id()), FEED_PAGE_SIZE, page_token)
            .await
            .unwrap_or_default()
    }

    pub async fn fetch_videos(&self, feed: Feed, options: &FeedOptions) -> VideoPage {
        let max_results = options
            .max_results
            .unwrap_or(FEED_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);
        let page_token = options.page_token.as_deref();
        let category_id = match feed {
            Feed::Home | Feed::Trending => None,
            Feed::Category(category) => Some(category.id()),
        };
        self.fetch_popular_in_category(category_id, max_results, page_token)
            .await
            .unwrap_or_default()
    }

    /// Full details of one video, or `None` if it is unknown or the lookup failed.
    pub async fn fetch_video_details(&self, video_id: &str) -> Option<Video> {
        let video_id = video_id.trim();
        if video_id.is_empty() {
            return None;
        }
        let page = self.list_videos(&VideosRequest::by_ids([video_id])).await?;
        page.videos.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Reply, ScriptedTransport, client, ids, ok, video, videos_by_id};
    use serde_json::json;

    #[test]
    fn test_feed_parse() {
        assert_eq!(Feed::parse("home"), Feed::Home);
        assert_eq!(Feed::parse("Trending"), Feed::Trending);
        assert_eq!(Feed::parse("MUSIC"), Feed::Category(VideoCategory::Music));
        assert_eq!(Feed::parse("fashion"), Feed::Category(VideoCategory::Fashion));
        assert_eq!(Feed::parse("shorts"), Feed::Home);
        assert_eq!("news".parse::<Feed>(), Ok(Feed::Category(VideoCategory::News)));
    }

    #[tokio::test]
    async fn test_popular_uses_region_and_normalizes_durations() {
        let client = client(ScriptedTransport::new().on("videos", |_| {
            ok(json!({"items": [video("a", "c1", None)], "nextPageToken": "NEXT"}))
        }));

        let page = client.fetch_popular_videos(Some("TOKEN")).await;
        assert_eq!(ids(&page), ["a"]);
        assert_eq!(page.videos[0].duration(), Some("4:13"));
        assert_eq!(page.next_page_token.as_deref(), Some("NEXT"));

        let (_, params) = &client.transport().log()[0];
        assert_eq!(params["chart"], "mostPopular");
        assert_eq!(params["regionCode"], "IN");
        assert_eq!(params["maxResults"], "20");
        assert_eq!(params["pageToken"], "TOKEN");
        assert!(!params.contains_key("videoCategoryId"));
    }

    #[tokio::test]
    async fn test_category_feed_filters_by_category() {
        let client = client(ScriptedTransport::new().on("videos", |_| ok(json!({"items": []}))));
        let options = FeedOptions {
            page_token: None,
            max_results: Some(8),
        };
        client
            .fetch_videos(Feed::Category(VideoCategory::Gaming), &options)
            .await;

        let (_, params) = &client.transport().log()[0];
        assert_eq!(params["videoCategoryId"], "20");
        assert_eq!(params["maxResults"], "8");
    }

    #[tokio::test]
    async fn test_feed_page_size_is_capped() {
        let client = client(ScriptedTransport::new().on("videos", |_| ok(json!({"items": []}))));
        let options = FeedOptions {
            page_token: None,
            max_results: Some(100),
        };
        client.fetch_videos(Feed::Home, &options).await;

        let (_, params) = &client.transport().log()[0];
        assert_eq!(params["maxResults"], "50");
    }

    #[tokio::test]
    async fn test_failed_feed_is_empty_page() {
        let client = client(ScriptedTransport::new().on("videos", |_| Some(Reply::Error("down".into()))));
        assert_eq!(client.fetch_trending_videos().await, VideoPage::default());
        assert_eq!(
            client.fetch_category_videos(VideoCategory::News, None).await,
            VideoPage::default()
        );
    }

    #[tokio::test]
    async fn test_video_details() {
        let client = client(
            ScriptedTransport::new().on("videos", videos_by_id(vec![video("a", "c1", Some("10"))])),
        );

        let found = client.fetch_video_details("a").await.expect("video a");
        assert_eq!(found.category_id(), Some("10"));
        assert_eq!(found.duration(), Some("4:13"));
        assert_eq!(client.fetch_video_details("missing").await, None);
        assert_eq!(client.fetch_video_details("  ").await, None);
        assert_eq!(client.transport().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_batched_lookup_without_ids_makes_no_request() {
        let client = client(ScriptedTransport::new());
        assert_eq!(client.fetch_videos_by_ids(&[]).await, Some(VideoPage::default()));
        assert!(client.transport().calls().is_empty());
    }
}
