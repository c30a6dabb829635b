//! Resource model of the YouTube Data API v3 as seen by this client.
//!
//! Provider resources (`Video`, `CommentThread`, `Channel`, ...) mirror the
//! camelCase JSON the API returns. Every nested field defaults when absent so
//! partial payloads decode instead of failing. The page types at the bottom
//! are the shapes handed to consumers.

mod channel;
mod comment;
mod listing;
mod page;
mod video;

pub use channel::{
    BrandingImage, BrandingSettings, Channel, ChannelContentDetails, ChannelSnippet,
    ChannelStatistics, RelatedPlaylists,
};
pub use comment::{Comment, CommentSnippet, CommentThread, CommentThreadSnippet, TopLevelComment};
pub use listing::{
    ListResponse, PageInfo, PlaylistItem, PlaylistItemSnippet, ResourceId, SearchResult,
    SearchResultId,
};
pub use page::{ChannelPage, CommentPage, VideoPage};
pub use video::{ContentDetails, Thumbnail, Thumbnails, Video, VideoSnippet, VideoStatistics};

/// Parses one of the provider's numeric strings, treating garbage as zero.
pub(crate) fn parse_count(value: Option<&str>) -> u64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// Returns the value only if it is present and non-empty.
pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}
