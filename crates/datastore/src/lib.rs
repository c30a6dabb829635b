use domain::{Channel, CommentThread, Video};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

mod fixtures;

/// Repository trait for data access abstraction
/// This allows switching between different storage backends (in-memory, filesystem, database)
pub trait Repository: Send + Sync {
    /// Get a video by ID
    fn get_video(&self, id: &str) -> Option<Video>;

    /// Get all videos, in insertion order
    fn get_videos(&self) -> Vec<Video>;

    fn get_channel(&self, id: &str) -> Option<Channel>;

    fn get_channels(&self) -> Vec<Channel>;

    /// Top-level comment threads of a video
    fn get_comment_threads(&self, video_id: &str) -> Vec<CommentThread>;

    /// Ids of the videos the provider considers related to `video_id`
    fn get_related_ids(&self, video_id: &str) -> Vec<String>;

    fn is_live(&self, video_id: &str) -> bool;

    /// Video ids in a channel's uploads playlist, newest first.
    /// `None` if no channel owns the playlist.
    fn get_playlist_video_ids(&self, playlist_id: &str) -> Option<Vec<String>>;

    /// Add a video, replacing any video with the same ID
    fn add_video(&self, video: Video);

    fn add_channel(&self, channel: Channel);

    fn add_comment_thread(&self, video_id: &str, thread: CommentThread);

    fn add_related(&self, video_id: &str, related_id: &str);

    fn set_live(&self, video_id: &str, live: bool);
}

/// In-memory implementation of the Repository trait
pub struct InMemoryRepository {
    videos: Arc<RwLock<Vec<Video>>>,
    channels: Arc<RwLock<Vec<Channel>>>,
    comment_threads: Arc<RwLock<HashMap<String, Vec<CommentThread>>>>,
    related: Arc<RwLock<HashMap<String, Vec<String>>>>,
    live: Arc<RwLock<HashSet<String>>>,
}

impl InMemoryRepository {
    /// Create a new in-memory repository with the fixture catalog
    pub fn new() -> Self {
        let repo = Self::empty();
        fixtures::populate(&repo);
        repo
    }

    /// Create a repository with no data at all
    pub fn empty() -> Self {
        Self {
            videos: Arc::new(RwLock::new(Vec::new())),
            channels: Arc::new(RwLock::new(Vec::new())),
            comment_threads: Arc::new(RwLock::new(HashMap::new())),
            related: Arc::new(RwLock::new(HashMap::new())),
            live: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Add `count` randomly generated videos to the fixture channels
    pub fn populate_generated(&self, count: usize) {
        fixtures::populate_generated(self, count);
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for InMemoryRepository {
    fn get_video(&self, id: &str) -> Option<Video> {
        self.videos
            .read()
            .expect("Failed to acquire read lock on videos")
            .iter()
            .find(|video| video.id == id)
            .cloned()
    }

    fn get_videos(&self) -> Vec<Video> {
        self.videos
            .read()
            .expect("Failed to acquire read lock on videos")
            .clone()
    }

    fn get_channel(&self, id: &str) -> Option<Channel> {
        self.channels
            .read()
            .expect("Failed to acquire read lock on channels")
            .iter()
            .find(|channel| channel.id == id)
            .cloned()
    }

    fn get_channels(&self) -> Vec<Channel> {
        self.channels
            .read()
            .expect("Failed to acquire read lock on channels")
            .clone()
    }

    fn get_comment_threads(&self, video_id: &str) -> Vec<CommentThread> {
        self.comment_threads
            .read()
            .expect("Failed to acquire read lock on comment_threads")
            .get(video_id)
            .cloned()
            .unwrap_or_default()
    }

    fn get_related_ids(&self, video_id: &str) -> Vec<String> {
        self.related
            .read()
            .expect("Failed to acquire read lock on related")
            .get(video_id)
            .cloned()
            .unwrap_or_default()
    }

    fn is_live(&self, video_id: &str) -> bool {
        self.live
            .read()
            .expect("Failed to acquire read lock on live")
            .contains(video_id)
    }

    fn get_playlist_video_ids(&self, playlist_id: &str) -> Option<Vec<String>> {
        let owner = self
            .channels
            .read()
            .expect("Failed to acquire read lock on channels")
            .iter()
            .find(|channel| channel.uploads_playlist_id() == Some(playlist_id))
            .map(|channel| channel.id.clone())?;

        let mut uploads: Vec<Video> = self
            .videos
            .read()
            .expect("Failed to acquire read lock on videos")
            .iter()
            .filter(|video| video.snippet.channel_id == owner)
            .cloned()
            .collect();
        // RFC 3339 timestamps in UTC sort lexicographically
        uploads.sort_by(|a, b| b.snippet.published_at.cmp(&a.snippet.published_at));
        Some(uploads.into_iter().map(|video| video.id).collect())
    }

    fn add_video(&self, video: Video) {
        let mut videos = self
            .videos
            .write()
            .expect("Failed to acquire write lock on videos");
        match videos.iter_mut().find(|existing| existing.id == video.id) {
            Some(existing) => *existing = video,
            None => videos.push(video),
        }
    }

    fn add_channel(&self, channel: Channel) {
        let mut channels = self
            .channels
            .write()
            .expect("Failed to acquire write lock on channels");
        match channels.iter_mut().find(|existing| existing.id == channel.id) {
            Some(existing) => *existing = channel,
            None => channels.push(channel),
        }
    }

    fn add_comment_thread(&self, video_id: &str, thread: CommentThread) {
        self.comment_threads
            .write()
            .expect("Failed to acquire write lock on comment_threads")
            .entry(video_id.to_string())
            .or_default()
            .push(thread);
    }

    fn add_related(&self, video_id: &str, related_id: &str) {
        self.related
            .write()
            .expect("Failed to acquire write lock on related")
            .entry(video_id.to_string())
            .or_default()
            .push(related_id.to_string());
    }

    fn set_live(&self, video_id: &str, live: bool) {
        let mut set = self.live.write().expect("Failed to acquire write lock on live");
        if live {
            set.insert(video_id.to_string());
        } else {
            set.remove(video_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_uploads_are_newest_first() {
        let repo = InMemoryRepository::new();
        let uploads = repo
            .get_playlist_video_ids(fixtures::CHANNEL_1_UPLOADS)
            .expect("uploads playlist");
        assert_eq!(uploads, ["video-4", "video-3", "video-2", "video-1"]);
        assert_eq!(repo.get_playlist_video_ids("UU-unknown"), None);
    }

    #[test]
    fn test_fixture_relations() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get_related_ids("video-1"), ["video-2", "video-3"]);
        assert!(repo.get_related_ids("video-5").is_empty());
        assert!(repo.is_live("video-6"));
        assert!(!repo.is_live("video-1"));
        assert!(!repo.get_comment_threads("video-1").is_empty());
        assert!(repo.get_comment_threads("video-2").is_empty());
    }

    #[test]
    fn test_channel_without_uploads_playlist() {
        let repo = InMemoryRepository::new();
        let channel = repo.get_channel("channel-3").expect("channel-3");
        assert_eq!(channel.uploads_playlist_id(), None);
    }

    #[test]
    fn test_add_video_replaces_by_id() {
        let repo = InMemoryRepository::empty();
        let mut video = Video {
            id: "v".to_string(),
            ..Default::default()
        };
        repo.add_video(video.clone());
        video.snippet.title = "renamed".to_string();
        repo.add_video(video);

        assert_eq!(repo.get_videos().len(), 1);
        assert_eq!(repo.get_video("v").map(|v| v.snippet.title), Some("renamed".to_string()));
    }

    #[test]
    fn test_set_live_toggles() {
        let repo = InMemoryRepository::empty();
        repo.set_live("v", true);
        assert!(repo.is_live("v"));
        repo.set_live("v", false);
        assert!(!repo.is_live("v"));
    }

    #[test]
    fn test_generated_videos_belong_to_fixture_channels() {
        let repo = InMemoryRepository::new();
        let before = repo.get_videos().len();
        repo.populate_generated(10);

        let videos = repo.get_videos();
        assert_eq!(videos.len(), before + 10);
        for video in &videos[before..] {
            assert!(repo.get_channel(&video.snippet.channel_id).is_some());
            assert!(!video.snippet.title.is_empty());
            assert!(video.duration().is_some());
        }
    }
}
