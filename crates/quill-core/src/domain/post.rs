use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, RepoError};

/// Author recorded when a post is written without one.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

const REQUIRED_FIELDS_MESSAGE: &str = "Title and content are required";

/// Post entity - a single user-submitted item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with generated ID and timestamps.
    pub fn new(input: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            author: input.author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update in place and advance `updated_at`.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(author) = changes.author {
            self.author = author;
        }
        self.updated_at = Utc::now();
    }
}

/// Validated input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
    author: String,
}

impl NewPost {
    /// Check the required fields and fill in the default author.
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        author: Option<String>,
    ) -> Result<Self, DomainError> {
        let (Some(title), Some(content)) = (non_empty(title), non_empty(content)) else {
            return Err(DomainError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        };

        Ok(Self {
            title,
            content,
            author: author_or_default(author),
        })
    }
}

/// Validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl PostChanges {
    /// Supplied `title`/`content` must be non-empty; a supplied empty author
    /// resets to [`DEFAULT_AUTHOR`].
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        author: Option<String>,
    ) -> Result<Self, DomainError> {
        let blank = |field: &Option<String>| field.as_deref().is_some_and(str::is_empty);
        if blank(&title) || blank(&content) {
            return Err(DomainError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        Ok(Self {
            title,
            content,
            author: author.map(|a| author_or_default(Some(a))),
        })
    }
}

/// Parse a path identifier into the store's key format.
pub fn parse_post_id(raw: &str) -> Result<Uuid, RepoError> {
    Uuid::parse_str(raw).map_err(|_| RepoError::InvalidId(raw.to_string()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn author_or_default(author: Option<String>) -> String {
    non_empty(author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_new_post_defaults_author() {
        let input = NewPost::new(some("A"), some("B"), None).unwrap();
        assert_eq!(input.author, DEFAULT_AUTHOR);

        let input = NewPost::new(some("A"), some("B"), some("")).unwrap();
        assert_eq!(input.author, DEFAULT_AUTHOR);

        let input = NewPost::new(some("A"), some("B"), some("Ann")).unwrap();
        assert_eq!(input.author, "Ann");
    }

    #[test]
    fn test_new_post_requires_title_and_content() {
        let cases = [
            (None, some("B")),
            (some("A"), None),
            (some(""), some("B")),
            (some("A"), some("")),
            (None, None),
        ];

        for (title, content) in cases {
            let err = NewPost::new(title, content, None).unwrap_err();
            assert_eq!(
                err,
                DomainError::Validation("Title and content are required".to_string())
            );
        }
    }

    #[test]
    fn test_post_new_assigns_id_and_timestamps() {
        let a = Post::new(NewPost::new(some("A"), some("B"), None).unwrap());
        let b = Post::new(NewPost::new(some("A"), some("B"), None).unwrap());

        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(a.title, "A");
        assert_eq!(a.content, "B");
    }

    #[test]
    fn test_apply_changes_only_supplied_fields() {
        let mut post = Post::new(NewPost::new(some("A"), some("B"), some("Ann")).unwrap());
        let before = post.clone();

        post.apply(PostChanges::new(some("A2"), None, None).unwrap());

        assert_eq!(post.title, "A2");
        assert_eq!(post.content, before.content);
        assert_eq!(post.author, before.author);
        assert_eq!(post.created_at, before.created_at);
        assert!(post.updated_at >= before.updated_at);
    }

    #[test]
    fn test_changes_reject_blank_required_fields() {
        assert!(PostChanges::new(some(""), None, None).is_err());
        assert!(PostChanges::new(None, some(""), None).is_err());
        assert_eq!(
            PostChanges::new(None, None, None).unwrap(),
            PostChanges::default()
        );
    }

    #[test]
    fn test_changes_reset_blank_author() {
        let changes = PostChanges::new(None, None, some("")).unwrap();
        assert_eq!(changes.author.as_deref(), Some(DEFAULT_AUTHOR));
    }

    #[test]
    fn test_parse_post_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_post_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_post_id("not-a-uuid"),
            Err(RepoError::InvalidId(raw)) if raw == "not-a-uuid"
        ));
    }

    #[test]
    fn test_post_serializes_camel_case() {
        let post = Post::new(NewPost::new(some("A"), some("B"), None).unwrap());
        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(json["author"], "Anonymous");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
