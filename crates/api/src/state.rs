use std::sync::Arc;

use grievance_domain::complaints::ComplaintService;
use grievance_domain::identity::ActorIdentity;
use grievance_domain::ports::complaints::ComplaintRepository;
use grievance_domain::ports::stories::StoryRepository;
use grievance_domain::stories::StoryService;
use grievance_infra::config::AppConfig;
use grievance_infra::repositories::seeded_repositories;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub complaints: ComplaintService,
    pub stories: StoryService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let (complaints, stories) = seeded_repositories(config.seed_samples);
        Self::with_repositories(config, Arc::new(complaints), Arc::new(stories))
    }

    pub fn with_repositories(
        config: AppConfig,
        complaint_repo: Arc<dyn ComplaintRepository>,
        story_repo: Arc<dyn StoryRepository>,
    ) -> Self {
        Self {
            config,
            complaints: ComplaintService::new(complaint_repo),
            stories: StoryService::new(story_repo),
        }
    }

    /// The signed-in user. There is no login, so the identity comes from config.
    pub fn current_actor(&self) -> ActorIdentity {
        ActorIdentity::new(
            self.config.current_user_id.clone(),
            self.config.current_user_name.clone(),
        )
    }
}
