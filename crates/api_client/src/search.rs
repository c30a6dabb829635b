use domain::VideoPage;
use formatting::VideoCategory;
use strum::{Display, EnumIter, EnumString};
use tracing::debug;

use crate::client::YouTubeClient;
use crate::request::{EventType, SearchRequest, VideoDuration};
use crate::transport::Transport;

const SEARCH_PAGE_SIZE: u32 = 20;
const COLLECTION_PAGE_SIZE: u32 = 15;
pub(crate) const RELATED_SEARCH_SIZE: u32 = 15;

/// Curated, search-backed shelves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Collection {
    Podcasts,
    #[strum(serialize = "trailers")]
    MovieTrailers,
    #[strum(serialize = "live")]
    LiveStreams,
    Shopping,
}

impl Collection {
    pub fn search_request(self) -> SearchRequest {
        let request = SearchRequest::new().max_results(COLLECTION_PAGE_SIZE);
        match self {
            Collection::Podcasts => request
                .query("podcast OR talk show")
                .video_duration(VideoDuration::Long),
            Collection::MovieTrailers => request
                .query("official movie trailer")
                .video_duration(VideoDuration::Short),
            Collection::LiveStreams => request.event_type(EventType::Live),
            Collection::Shopping => request.query("product review OR unboxing"),
        }
    }
}

impl<T: Transport> YouTubeClient<T> {
    /// Runs `request`, then fetches full details for the hits in one batched
    /// call. The continuation token is the search's. `None` when either call
    /// failed; an empty search is an empty page.
    pub(crate) async fn search_then_details(&self, request: &SearchRequest) -> Option<VideoPage> {
        let response = self.fetch_resource(request).await?;

        let mut ids: Vec<String> = Vec::with_capacity(response.items.len());
        for id in response.items.iter().filter_map(|hit| hit.video_id()) {
            if !ids.iter().any(|seen| seen == id) {
                ids.push(id.to_string());
            }
        }
        if ids.is_empty() {
            debug!("search returned no video ids");
            return Some(VideoPage::default());
        }

        let details = self.fetch_videos_by_ids(&ids).await?;
        Some(VideoPage::new(details.videos, response.next_page_token))
    }

    /// Free-text search. A blank query returns an empty page without a request.
    pub async fn search_videos(&self, query: &str, page_token: Option<&str>) -> VideoPage {
        let query = query.trim();
        if query.is_empty() {
            return VideoPage::default();
        }
        let request = SearchRequest::new()
            .query(query)
            .max_results(SEARCH_PAGE_SIZE)
            .page_token(page_token);
        self.search_then_details(&request).await.unwrap_or_default()
    }

    /// Searches by category label within the category.
    pub async fn search_category(
        &self,
        category: VideoCategory,
        page_token: Option<&str>,
    ) -> VideoPage {
        let request = SearchRequest::new()
            .query(category.name())
            .category(category.id())
            .max_results(SEARCH_PAGE_SIZE)
            .page_token(page_token);
        self.search_then_details(&request).await.unwrap_or_default()
    }

    pub async fn fetch_collection(
        &self,
        collection: Collection,
        page_token: Option<&str>,
    ) -> VideoPage {
        let request = collection.search_request().page_token(page_token);
        self.search_then_details(&request).await.unwrap_or_default()
    }

    /// Provider-side related videos of `video_id`, unfiltered.
    pub(crate) async fn related_candidates(&self, video_id: &str) -> Option<VideoPage> {
        let request = SearchRequest::new()
            .related_to(video_id)
            .max_results(RELATED_SEARCH_SIZE);
        self.search_then_details(&request).await
    }
}
