use crate::DomainResult;
use crate::ports::BoxFuture;
use crate::stories::{Story, StoryChannel, StoryMutation};

pub trait StoryRepository: Send + Sync {
    /// Stores a new story at the top of its channel.
    fn create(&self, story: &Story) -> BoxFuture<'_, DomainResult<Story>>;

    fn get(
        &self,
        channel: StoryChannel,
        story_id: &str,
    ) -> BoxFuture<'_, DomainResult<Option<Story>>>;

    fn list(&self, channel: StoryChannel) -> BoxFuture<'_, DomainResult<Vec<Story>>>;

    fn apply(
        &self,
        channel: StoryChannel,
        story_id: &str,
        mutation: &StoryMutation,
        at_ms: i64,
    ) -> BoxFuture<'_, DomainResult<Story>>;
}
