use axum::extract::{Path, Query, State};
use axum::{Json, Router, routing::get};
use grievance_domain::department::Department;
use grievance_domain::pages::{
    AboutPage, ComplaintsPage, HomePage, StoriesPage, about_page, complaints_page, home_page,
    stories_page,
};
use grievance_domain::stories::StoryChannel;
use grievance_domain::wizard::ComplaintWizard;

use super::complaints::ComplaintQuery;
use super::map_domain_error;
use crate::{error::ApiError, state::AppState};

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/pages/home", get(home))
        .route("/v1/pages/home/:department", get(home_form))
        .route("/v1/pages/about", get(about))
        .route("/v1/pages/complaints", get(complaints))
        .route("/v1/pages/feed", get(feed))
        .route("/v1/pages/stories", get(stories))
}

async fn home() -> Json<HomePage> {
    Json(home_page(ComplaintWizard::default()))
}

async fn home_form(Path(department): Path<String>) -> Result<Json<HomePage>, ApiError> {
    let department = department
        .parse::<Department>()
        .map_err(|_| ApiError::NotFound)?;
    Ok(Json(home_page(ComplaintWizard::default().select(department))))
}

async fn about() -> Json<AboutPage> {
    Json(about_page())
}

/// "My Complaints": the list is scoped to the current user, the stat cards
/// count every complaint on the board.
async fn complaints(
    State(state): State<AppState>,
    Query(query): Query<ComplaintQuery>,
) -> Result<Json<ComplaintsPage>, ApiError> {
    let mut filter = query.into_filter()?;
    filter.author_id = Some(state.config.current_user_id.clone());

    let stats = state
        .complaints
        .stats(None)
        .await
        .map_err(|err| map_domain_error("complaints_page", err))?;
    let complaints = state
        .complaints
        .list(&filter)
        .await
        .map_err(|err| map_domain_error("complaints_page", err))?;
    Ok(Json(complaints_page(stats, &filter, &complaints)))
}

async fn feed(State(state): State<AppState>) -> Result<Json<StoriesPage>, ApiError> {
    channel_page(&state, StoryChannel::Feed).await.map(Json)
}

async fn stories(State(state): State<AppState>) -> Result<Json<StoriesPage>, ApiError> {
    channel_page(&state, StoryChannel::Stories).await.map(Json)
}

async fn channel_page(state: &AppState, channel: StoryChannel) -> Result<StoriesPage, ApiError> {
    let stories = state
        .stories
        .list(channel)
        .await
        .map_err(|err| map_domain_error("stories_page", err))?;
    Ok(stories_page(channel, &stories))
}
