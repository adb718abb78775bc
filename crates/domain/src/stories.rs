use std::sync::Arc;
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::DomainResult;
use crate::comments::{Comment, CommentCreate, CommentParent};
use crate::error::DomainError;
use crate::identity::ActorIdentity;
use crate::ports::stories::StoryRepository;
use crate::util::{now_ms, trimmed_non_empty, uuid_v7_without_dashes};

const MAX_CONTENT_LENGTH: usize = 5_000;
const MAX_IMAGE_URL_LENGTH: usize = 2_048;

/// The page that owns a story list. Lists never share records.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StoryChannel {
    Feed,
    Stories,
}

impl StoryChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Stories => "stories",
        }
    }
}

impl fmt::Display for StoryChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoryChannel {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "feed" => Ok(Self::Feed),
            "stories" => Ok(Self::Stories),
            other => Err(DomainError::Validation(format!(
                "unknown story channel '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Story {
    pub story_id: String,
    pub channel: StoryChannel,
    pub content: String,
    pub image_url: Option<String>,
    pub author_name: String,
    pub likes: u64,
    pub supported: bool,
    pub comments: Vec<Comment>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

#[derive(Clone, Debug)]
pub struct StoryCreate {
    pub content: String,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug)]
pub enum StoryMutation {
    Like,
    ToggleSupport,
    AppendComment(Comment),
}

impl StoryMutation {
    pub fn apply(&self, story: &mut Story, at_ms: i64) -> DomainResult<()> {
        match self {
            Self::Like => story.likes = story.likes.saturating_add(1),
            Self::ToggleSupport => story.supported = !story.supported,
            Self::AppendComment(comment) => {
                if comment.parent != CommentParent::Story(story.story_id.clone()) {
                    return Err(DomainError::Validation(
                        "comment does not belong to this story".into(),
                    ));
                }
                story.comments.push(comment.clone());
            }
        }
        story.updated_at_ms = at_ms;
        Ok(())
    }
}

#[derive(Clone)]
pub struct StoryService {
    repository: Arc<dyn StoryRepository>,
}

impl StoryService {
    pub fn new(repository: Arc<dyn StoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn post(
        &self,
        channel: StoryChannel,
        actor: &ActorIdentity,
        input: StoryCreate,
    ) -> DomainResult<Story> {
        let payload = validate_story_create(&input)?;
        let now = now_ms();
        let story = Story {
            story_id: uuid_v7_without_dashes(),
            channel,
            content: payload.content,
            image_url: payload.image_url,
            author_name: actor.username.clone(),
            likes: 0,
            supported: false,
            comments: Vec::new(),
            created_at_ms: now,
            updated_at_ms: now,
        };
        self.repository.create(&story).await
    }

    pub async fn get(&self, channel: StoryChannel, story_id: &str) -> DomainResult<Story> {
        self.repository
            .get(channel, story_id)
            .await?
            .ok_or(DomainError::NotFound)
    }

    pub async fn list(&self, channel: StoryChannel) -> DomainResult<Vec<Story>> {
        self.repository.list(channel).await
    }

    pub async fn like(&self, channel: StoryChannel, story_id: &str) -> DomainResult<Story> {
        self.repository
            .apply(channel, story_id, &StoryMutation::Like, now_ms())
            .await
    }

    pub async fn toggle_support(
        &self,
        channel: StoryChannel,
        story_id: &str,
    ) -> DomainResult<Story> {
        self.repository
            .apply(channel, story_id, &StoryMutation::ToggleSupport, now_ms())
            .await
    }

    pub async fn add_comment(
        &self,
        channel: StoryChannel,
        story_id: &str,
        actor: &ActorIdentity,
        input: CommentCreate,
    ) -> DomainResult<Story> {
        let comment = Comment::new(CommentParent::Story(story_id.to_string()), actor, &input)?;
        self.repository
            .apply(
                channel,
                story_id,
                &StoryMutation::AppendComment(comment),
                now_ms(),
            )
            .await
    }
}

fn validate_story_create(input: &StoryCreate) -> Result<StoryCreate, DomainError> {
    let content = input.content.trim();
    if content.is_empty() {
        return Err(DomainError::Validation(
            "please write something to post".into(),
        ));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(DomainError::Validation(format!(
            "story exceeds max length of {MAX_CONTENT_LENGTH}"
        )));
    }

    let image_url = trimmed_non_empty(input.image_url.as_deref());
    if image_url
        .as_ref()
        .is_some_and(|url| url.chars().count() > MAX_IMAGE_URL_LENGTH)
    {
        return Err(DomainError::Validation(format!(
            "image_url exceeds max length of {MAX_IMAGE_URL_LENGTH}"
        )));
    }

    Ok(StoryCreate {
        content: content.to_string(),
        image_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story() -> Story {
        Story {
            story_id: "s-1".into(),
            channel: StoryChannel::Stories,
            content: "Power is back".into(),
            image_url: None,
            author_name: "Anonymous User".into(),
            likes: 0,
            supported: false,
            comments: vec![],
            created_at_ms: 1,
            updated_at_ms: 1,
        }
    }

    #[test]
    fn empty_story_is_rejected_with_prompt() {
        let result = validate_story_create(&StoryCreate {
            content: "   ".into(),
            image_url: None,
        });
        assert_eq!(
            result.unwrap_err(),
            DomainError::Validation("please write something to post".into())
        );
    }

    #[test]
    fn blank_image_url_is_dropped() {
        let payload = validate_story_create(&StoryCreate {
            content: "Bank reversed the charge".into(),
            image_url: Some(" ".into()),
        })
        .expect("valid");
        assert_eq!(payload.image_url, None);
    }

    #[test]
    fn support_toggles_back_and_forth() {
        let mut story = story();
        StoryMutation::ToggleSupport.apply(&mut story, 2).unwrap();
        assert!(story.supported);
        StoryMutation::ToggleSupport.apply(&mut story, 3).unwrap();
        assert!(!story.supported);
        assert_eq!(story.updated_at_ms, 3);
    }

    #[test]
    fn comment_for_another_story_is_refused() {
        let mut story = story();
        let comment = Comment::new(
            CommentParent::Story("s-2".into()),
            &ActorIdentity::anonymous("user123"),
            &CommentCreate {
                content: "hi".into(),
            },
        )
        .unwrap();
        assert!(
            StoryMutation::AppendComment(comment)
                .apply(&mut story, 2)
                .is_err()
        );
        assert!(story.comments.is_empty());
    }

    #[test]
    fn channel_parses_from_path_segment() {
        assert_eq!("feed".parse::<StoryChannel>(), Ok(StoryChannel::Feed));
        assert!("news".parse::<StoryChannel>().is_err());
    }
}
