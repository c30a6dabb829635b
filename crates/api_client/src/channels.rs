use domain::{Channel, ChannelPage, VideoPage};
use tracing::debug;

use crate::client::YouTubeClient;
use crate::request::{ChannelsRequest, Part, PlaylistItemsRequest};
use crate::transport::Transport;

const CHANNEL_VIDEOS_PAGE_SIZE: u32 = 30;

impl<T: Transport> YouTubeClient<T> {
    /// Channel header: snippet, statistics and branding.
    pub async fn fetch_channel(&self, channel_id: &str) -> Option<Channel> {
        let channel_id = channel_id.trim();
        if channel_id.is_empty() {
            return None;
        }
        let request = ChannelsRequest::new(
            channel_id,
            &[Part::Snippet, Part::Statistics, Part::BrandingSettings],
        );
        self.fetch_resource(&request)
            .await?
            .items
            .into_iter()
            .next()
    }

    /// Uploads of a channel, newest first.
    ///
    /// Resolves the uploads playlist, lists it, then fetches details for the
    /// listed videos. Any missing step yields an empty page. The token is the
    /// playlist's.
    pub async fn fetch_channel_videos(&self, channel_id: &str, page_token: Option<&str>) -> VideoPage {
        let channel_id = channel_id.trim();
        if channel_id.is_empty() {
            return VideoPage::default();
        }

        let request = ChannelsRequest::new(channel_id, &[Part::ContentDetails]);
        let Some(channel) = self
            .fetch_resource(&request)
            .await
            .and_then(|response| response.items.into_iter().next())
        else {
            debug!(channel_id, "channel not found");
            return VideoPage::default();
        };
        let Some(uploads) = channel.uploads_playlist_id() else {
            debug!(channel_id, "channel has no uploads playlist");
            return VideoPage::default();
        };

        let request = PlaylistItemsRequest::new(uploads)
            .max_results(CHANNEL_VIDEOS_PAGE_SIZE)
            .page_token(page_token);
        let Some(playlist) = self.fetch_resource(&request).await else {
            return VideoPage::default();
        };
        let ids: Vec<String> = playlist
            .items
            .iter()
            .filter_map(|item| item.video_id())
            .map(str::to_string)
            .collect();
        if ids.is_empty() {
            return VideoPage::default();
        }

        match self.fetch_videos_by_ids(&ids).await {
            Some(details) => VideoPage::new(details.videos, playlist.next_page_token),
            None => VideoPage::default(),
        }
    }

    /// Channel header plus its first page of uploads.
    pub async fn fetch_channel_page(&self, channel_id: &str) -> Option<ChannelPage> {
        let channel = self.fetch_channel(channel_id).await?;
        let uploads = self.fetch_channel_videos(&channel.id, None).await;
        Some(ChannelPage {
            channel,
            videos: uploads.videos,
            next_page_token: uploads.next_page_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{ScriptedTransport, client, ids, ok, video, videos_by_id};
    use serde_json::{Value, json};

    fn channel_with_uploads(uploads: Option<&str>) -> Value {
        let mut channel = json!({
            "id": "c1",
            "snippet": {"title": "Channel One"},
            "statistics": {"subscriberCount": "1500", "videoCount": "2"},
            "brandingSettings": {"image": {"bannerExternalUrl": "https://img.test/banner"}},
            "contentDetails": {"relatedPlaylists": {}},
        });
        if let Some(uploads) = uploads {
            channel["contentDetails"]["relatedPlaylists"]["uploads"] = json!(uploads);
        }
        channel
    }

    #[tokio::test]
    async fn test_channel_videos_follow_uploads_playlist() {
        let client = client(
            ScriptedTransport::new()
                .on("channels", |_| ok(json!({"items": [channel_with_uploads(Some("UUc1"))]})))
                .on("playlistItems", |params| {
                    assert_eq!(params["playlistId"], "UUc1");
                    assert_eq!(params["maxResults"], "30");
                    ok(json!({
                        "items": [
                            {"snippet": {"resourceId": {"videoId": "v1"}}},
                            {"snippet": {"resourceId": {}}},
                            {"snippet": {"resourceId": {"videoId": "v2"}}}
                        ],
                        "nextPageToken": "PL2"
                    }))
                })
                .on(
                    "videos",
                    videos_by_id(vec![video("v1", "c1", None), video("v2", "c1", None)]),
                ),
        );

        let page = client.fetch_channel_videos("c1", None).await;
        assert_eq!(ids(&page), ["v1", "v2"]);
        assert_eq!(page.next_page_token.as_deref(), Some("PL2"));
        assert_eq!(
            client.transport().endpoints(),
            ["channels", "playlistItems", "videos"]
        );
        let (_, params) = &client.transport().log()[0];
        assert_eq!(params["part"], "contentDetails");
    }

    #[tokio::test]
    async fn test_channel_without_uploads_is_empty() {
        let client = client(
            ScriptedTransport::new().on("channels", |_| ok(json!({"items": [channel_with_uploads(None)]}))),
        );
        assert!(client.fetch_channel_videos("c1", None).await.is_empty());
        assert_eq!(client.transport().endpoints(), ["channels"]);
    }

    #[tokio::test]
    async fn test_unknown_channel_is_empty() {
        let client = client(ScriptedTransport::new().on("channels", |_| ok(json!({"items": []}))));
        assert!(client.fetch_channel_videos("nope", None).await.is_empty());
        assert_eq!(client.fetch_channel("nope").await, None);
        assert_eq!(client.fetch_channel_page("nope").await, None);
    }

    #[tokio::test]
    async fn test_fetch_channel_header() {
        let client = client(
            ScriptedTransport::new().on("channels", |_| ok(json!({"items": [channel_with_uploads(None)]}))),
        );
        let channel = client.fetch_channel("c1").await.expect("channel");
        assert_eq!(channel.snippet.title, "Channel One");
        assert_eq!(channel.statistics.subscribers(), 1500);
        assert_eq!(channel.banner_url(), Some("https://img.test/banner"));

        let (_, params) = &client.transport().log()[0];
        assert_eq!(params["part"], "snippet,statistics,brandingSettings");
        assert_eq!(params["id"], "c1");
    }

    #[tokio::test]
    async fn test_channel_page_combines_header_and_uploads() {
        let client = client(
            ScriptedTransport::new()
                .on("channels", |_| ok(json!({"items": [channel_with_uploads(Some("UUc1"))]})))
                .on("playlistItems", |_| {
                    ok(json!({"items": [{"snippet": {"resourceId": {"videoId": "v1"}}}]}))
                })
                .on("videos", videos_by_id(vec![video("v1", "c1", None)])),
        );
        let page = client.fetch_channel_page("c1").await.expect("channel page");
        assert_eq!(page.channel.id, "c1");
        assert_eq!(page.videos.len(), 1);
        assert_eq!(page.next_page_token, None);
    }
}
