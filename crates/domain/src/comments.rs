use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::identity::ActorIdentity;
use crate::util::{now_ms, uuid_v7_without_dashes};

pub const MAX_COMMENT_LENGTH: usize = 1_000;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum CommentParent {
    Complaint(String),
    Story(String),
}

impl CommentParent {
    pub fn id(&self) -> &str {
        match self {
            Self::Complaint(id) | Self::Story(id) => id,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub comment_id: String,
    pub parent: CommentParent,
    pub author_name: String,
    pub content: String,
    pub created_at_ms: i64,
}

#[derive(Clone, Debug)]
pub struct CommentCreate {
    pub content: String,
}

impl Comment {
    pub fn new(
        parent: CommentParent,
        actor: &ActorIdentity,
        input: &CommentCreate,
    ) -> Result<Self, DomainError> {
        let content = validate_comment_content(&input.content)?;
        Ok(Self {
            comment_id: uuid_v7_without_dashes(),
            parent,
            author_name: actor.username.clone(),
            content,
            created_at_ms: now_ms(),
        })
    }
}

fn validate_comment_content(raw: &str) -> Result<String, DomainError> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(DomainError::Validation("comment is required".into()));
    }
    if content.chars().count() > MAX_COMMENT_LENGTH {
        return Err(DomainError::Validation(format!(
            "comment exceeds max length of {MAX_COMMENT_LENGTH}"
        )));
    }
    Ok(content.to_string())
}
