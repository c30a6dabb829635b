use domain::{Comment, CommentPage};

use crate::client::YouTubeClient;
use crate::request::{CommentOrder, CommentThreadsRequest, Part, VideosRequest};
use crate::transport::Transport;

const COMMENT_PAGE_SIZE: u32 = 50;

impl<T: Transport> YouTubeClient<T> {
    /// Top-level comments by relevance. Failures give an empty page.
    pub async fn fetch_video_comments(&self, video_id: &str, page_token: Option<&str>) -> CommentPage {
        let video_id = video_id.trim();
        if video_id.is_empty() {
            return CommentPage::default();
        }
        let request = CommentThreadsRequest::for_video(video_id)
            .order(CommentOrder::Relevance)
            .max_results(COMMENT_PAGE_SIZE)
            .page_token(page_token);
        let Some(response) = self.fetch_resource(&request).await else {
            return CommentPage::default();
        };

        let total_count = response.total_results();
        CommentPage {
            comments: response.items.into_iter().map(Comment::from).collect(),
            total_count,
            next_page_token: response.next_page_token,
        }
    }

    /// `statistics.commentCount` of the video, 0 when unknown.
    pub async fn fetch_video_comment_count(&self, video_id: &str) -> u64 {
        let video_id = video_id.trim();
        if video_id.is_empty() {
            return 0;
        }
        let request = VideosRequest::by_ids([video_id]).parts(&[Part::Statistics]);
        self.fetch_resource(&request)
            .await
            .and_then(|response| response.items.into_iter().next())
            .map(|video| video.statistics.comments())
            .unwrap_or(0)
    }
}
