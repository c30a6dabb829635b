use serde::{Deserialize, Serialize};

/// Comment thread resource as returned by `commentThreads`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
    pub total_reply_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentSnippet {
    pub author_display_name: String,
    pub author_profile_image_url: String,
    pub text_display: String,
    pub like_count: u64,
    pub published_at: String,
}

/// Flattened comment handed to consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author_display_name: String,
    pub author_profile_image_url: String,
    pub text_display: String,
    pub like_count: u64,
    pub published_at: String,
    pub reply_count: u64,
}

impl From<CommentThread> for Comment {
    fn from(thread: CommentThread) -> Self {
        let CommentThreadSnippet {
            top_level_comment,
            total_reply_count,
        } = thread.snippet;
        let snippet = top_level_comment.snippet;
        Self {
            id: thread.id,
            author_display_name: snippet.author_display_name,
            author_profile_image_url: snippet.author_profile_image_url,
            text_display: snippet.text_display,
            like_count: snippet.like_count,
            published_at: snippet.published_at,
            reply_count: total_reply_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_flattens_into_comment() {
        let thread: CommentThread = serde_json::from_str(
            r#"{
                "id": "thread-1",
                "snippet": {
                    "topLevelComment": {
                        "snippet": {
                            "authorDisplayName": "Ana",
                            "authorProfileImageUrl": "https://img/ana.png",
                            "textDisplay": "Great video",
                            "likeCount": 12,
                            "publishedAt": "2023-01-01T00:00:00Z"
                        }
                    },
                    "totalReplyCount": 3
                }
            }"#,
        )
        .unwrap();

        let comment = Comment::from(thread);
        assert_eq!(comment.id, "thread-1");
        assert_eq!(comment.author_display_name, "Ana");
        assert_eq!(comment.text_display, "Great video");
        assert_eq!(comment.like_count, 12);
        assert_eq!(comment.reply_count, 3);
    }
}
