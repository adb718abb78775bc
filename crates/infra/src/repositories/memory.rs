use std::collections::HashMap;
use std::sync::Arc;

use grievance_domain::DomainResult;
use grievance_domain::complaints::{Complaint, ComplaintFilter, ComplaintMutation};
use grievance_domain::error::DomainError;
use grievance_domain::ports::BoxFuture;
use grievance_domain::ports::complaints::ComplaintRepository;
use grievance_domain::ports::stories::StoryRepository;
use grievance_domain::stories::{Story, StoryChannel, StoryMutation};
use tokio::sync::RwLock;

/// Complaints held newest first; nothing survives a restart.
#[derive(Default)]
pub struct InMemoryComplaintRepository {
    store: Arc<RwLock<Vec<Complaint>>>,
}

impl InMemoryComplaintRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// `complaints` must already be newest first.
    pub fn with_complaints(complaints: Vec<Complaint>) -> Self {
        Self {
            store: Arc::new(RwLock::new(complaints)),
        }
    }
}

impl ComplaintRepository for InMemoryComplaintRepository {
    fn create(&self, complaint: &Complaint) -> BoxFuture<'_, DomainResult<Complaint>> {
        let complaint = complaint.clone();
        let store = self.store.clone();
        Box::pin(async move {
            let mut items = store.write().await;
            if items
                .iter()
                .any(|existing| existing.complaint_id == complaint.complaint_id)
            {
                return Err(DomainError::Conflict(format!(
                    "complaint {} already exists",
                    complaint.complaint_id
                )));
            }
            items.insert(0, complaint.clone());
            Ok(complaint)
        })
    }

    fn get(&self, complaint_id: &str) -> BoxFuture<'_, DomainResult<Option<Complaint>>> {
        let complaint_id = complaint_id.to_string();
        let store = self.store.clone();
        Box::pin(async move {
            let items = store.read().await;
            Ok(items
                .iter()
                .find(|complaint| complaint.complaint_id == complaint_id)
                .cloned())
        })
    }

    fn list(&self, filter: &ComplaintFilter) -> BoxFuture<'_, DomainResult<Vec<Complaint>>> {
        let filter = filter.clone();
        let store = self.store.clone();
        Box::pin(async move {
            let items = store.read().await;
            Ok(items
                .iter()
                .filter(|complaint| filter.matches(complaint))
                .cloned()
                .collect())
        })
    }

    fn apply(
        &self,
        complaint_id: &str,
        mutation: &ComplaintMutation,
        at_ms: i64,
    ) -> BoxFuture<'_, DomainResult<Complaint>> {
        let complaint_id = complaint_id.to_string();
        let mutation = mutation.clone();
        let store = self.store.clone();
        Box::pin(async move {
            let mut items = store.write().await;
            let complaint = items
                .iter_mut()
                .find(|complaint| complaint.complaint_id == complaint_id)
                .ok_or(DomainError::NotFound)?;
            let mut updated = complaint.clone();
            mutation.apply(&mut updated, at_ms)?;
            *complaint = updated.clone();
            Ok(updated)
        })
    }
}

/// One list per channel, newest first.
#[derive(Default)]
pub struct InMemoryStoryRepository {
    store: Arc<RwLock<HashMap<StoryChannel, Vec<Story>>>>,
}

impl InMemoryStoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each channel's stories must already be newest first.
    pub fn with_stories(stories: HashMap<StoryChannel, Vec<Story>>) -> Self {
        Self {
            store: Arc::new(RwLock::new(stories)),
        }
    }
}

impl StoryRepository for InMemoryStoryRepository {
    fn create(&self, story: &Story) -> BoxFuture<'_, DomainResult<Story>> {
        let story = story.clone();
        let store = self.store.clone();
        Box::pin(async move {
            let mut channels = store.write().await;
            let items = channels.entry(story.channel).or_default();
            if items
                .iter()
                .any(|existing| existing.story_id == story.story_id)
            {
                return Err(DomainError::Conflict(format!(
                    "story {} already exists",
                    story.story_id
                )));
            }
            items.insert(0, story.clone());
            Ok(story)
        })
    }

    fn get(
        &self,
        channel: StoryChannel,
        story_id: &str,
    ) -> BoxFuture<'_, DomainResult<Option<Story>>> {
        let story_id = story_id.to_string();
        let store = self.store.clone();
        Box::pin(async move {
            let channels = store.read().await;
            Ok(channels.get(&channel).and_then(|items| {
                items
                    .iter()
                    .find(|story| story.story_id == story_id)
                    .cloned()
            }))
        })
    }

    fn list(&self, channel: StoryChannel) -> BoxFuture<'_, DomainResult<Vec<Story>>> {
        let store = self.store.clone();
        Box::pin(async move {
            let channels = store.read().await;
            Ok(channels.get(&channel).cloned().unwrap_or_default())
        })
    }

    fn apply(
        &self,
        channel: StoryChannel,
        story_id: &str,
        mutation: &StoryMutation,
        at_ms: i64,
    ) -> BoxFuture<'_, DomainResult<Story>> {
        let story_id = story_id.to_string();
        let mutation = mutation.clone();
        let store = self.store.clone();
        Box::pin(async move {
            let mut channels = store.write().await;
            let story = channels
                .get_mut(&channel)
                .and_then(|items| items.iter_mut().find(|story| story.story_id == story_id))
                .ok_or(DomainError::NotFound)?;
            let mut updated = story.clone();
            mutation.apply(&mut updated, at_ms)?;
            *story = updated.clone();
            Ok(updated)
        })
    }
}

/// Builds the stores, optionally filled with the sample records.
pub fn seeded_repositories(
    seed_samples: bool,
) -> (InMemoryComplaintRepository, InMemoryStoryRepository) {
    if !seed_samples {
        return (
            InMemoryComplaintRepository::new(),
            InMemoryStoryRepository::new(),
        );
    }

    let complaints = grievance_domain::seed::sample_complaints();
    let stories = [StoryChannel::Feed, StoryChannel::Stories]
        .into_iter()
        .map(|channel| (channel, grievance_domain::seed::sample_stories(channel)))
        .collect();
    tracing::debug!(
        complaints = complaints.len(),
        "seeding in-memory stores with sample records"
    );
    (
        InMemoryComplaintRepository::with_complaints(complaints),
        InMemoryStoryRepository::with_stories(stories),
    )
}
