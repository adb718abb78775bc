use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{
    Json, Router,
    routing::{get, post},
};
use grievance_domain::comments::CommentCreate;
use grievance_domain::notice::Notice;
use grievance_domain::stories::{Story, StoryChannel, StoryCreate};
use serde::{Deserialize, Serialize};

use super::map_domain_error;
use crate::{error::ApiError, observability, state::AppState};

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/channels/:channel/stories",
            post(post_story).get(list_stories),
        )
        .route("/v1/channels/:channel/stories/:story_id", get(get_story))
        .route(
            "/v1/channels/:channel/stories/:story_id/like",
            post(like_story),
        )
        .route(
            "/v1/channels/:channel/stories/:story_id/support",
            post(toggle_story_support),
        )
        .route(
            "/v1/channels/:channel/stories/:story_id/comments",
            post(comment_on_story),
        )
}

/// Unknown channels are treated as missing pages.
pub(super) fn parse_channel(raw: &str) -> Result<StoryChannel, ApiError> {
    raw.parse::<StoryChannel>().map_err(|_| ApiError::NotFound)
}

#[derive(Debug, Deserialize)]
struct PostStoryRequest {
    #[serde(default)]
    content: String,
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentRequest {
    #[serde(default)]
    content: String,
}

#[derive(Serialize)]
struct StoryResponse {
    story: Story,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<Notice>,
}

#[derive(Serialize)]
struct StoryListResponse {
    channel: StoryChannel,
    stories: Vec<Story>,
}

async fn post_story(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    Json(payload): Json<PostStoryRequest>,
) -> Result<(StatusCode, Json<StoryResponse>), ApiError> {
    let channel = parse_channel(&channel)?;
    let actor = state.current_actor();
    let story = state
        .stories
        .post(
            channel,
            &actor,
            StoryCreate {
                content: payload.content,
                image_url: payload.image_url,
            },
        )
        .await
        .map_err(|err| map_domain_error("post_story", err))?;

    observability::register_story_action("posted", channel.as_str());
    tracing::info!(story_id = %story.story_id, %channel, "story posted");
    Ok((
        StatusCode::CREATED,
        Json(StoryResponse {
            story,
            notice: Some(Notice::story_posted(channel)),
        }),
    ))
}

async fn list_stories(
    State(state): State<AppState>,
    Path(channel): Path<String>,
) -> Result<Json<StoryListResponse>, ApiError> {
    let channel = parse_channel(&channel)?;
    let stories = state
        .stories
        .list(channel)
        .await
        .map_err(|err| map_domain_error("list_stories", err))?;
    Ok(Json(StoryListResponse { channel, stories }))
}

async fn get_story(
    State(state): State<AppState>,
    Path((channel, story_id)): Path<(String, String)>,
) -> Result<Json<Story>, ApiError> {
    let channel = parse_channel(&channel)?;
    let story = state
        .stories
        .get(channel, &story_id)
        .await
        .map_err(|err| map_domain_error("get_story", err))?;
    Ok(Json(story))
}

// Likes are silent on the page; only the counter moves.
async fn like_story(
    State(state): State<AppState>,
    Path((channel, story_id)): Path<(String, String)>,
) -> Result<Json<StoryResponse>, ApiError> {
    let channel = parse_channel(&channel)?;
    let story = state
        .stories
        .like(channel, &story_id)
        .await
        .map_err(|err| map_domain_error("like_story", err))?;

    observability::register_story_action("liked", channel.as_str());
    tracing::info!(story_id = %story.story_id, likes = story.likes, "story liked");
    Ok(Json(StoryResponse {
        story,
        notice: None,
    }))
}

async fn toggle_story_support(
    State(state): State<AppState>,
    Path((channel, story_id)): Path<(String, String)>,
) -> Result<Json<StoryResponse>, ApiError> {
    let channel = parse_channel(&channel)?;
    let story = state
        .stories
        .toggle_support(channel, &story_id)
        .await
        .map_err(|err| map_domain_error("toggle_story_support", err))?;

    observability::register_story_action("support_toggled", channel.as_str());
    tracing::info!(
        story_id = %story.story_id,
        supported = story.supported,
        "story support toggled"
    );
    Ok(Json(StoryResponse {
        story,
        notice: Some(Notice::story_supported()),
    }))
}

async fn comment_on_story(
    State(state): State<AppState>,
    Path((channel, story_id)): Path<(String, String)>,
    Json(payload): Json<CommentRequest>,
) -> Result<(StatusCode, Json<StoryResponse>), ApiError> {
    let channel = parse_channel(&channel)?;
    let actor = state.current_actor();
    let story = state
        .stories
        .add_comment(
            channel,
            &story_id,
            &actor,
            CommentCreate {
                content: payload.content,
            },
        )
        .await
        .map_err(|err| map_domain_error("comment_on_story", err))?;

    observability::register_story_action("commented", channel.as_str());
    tracing::info!(
        story_id = %story.story_id,
        comment_count = story.comments.len(),
        "story comment added"
    );
    Ok((
        StatusCode::CREATED,
        Json(StoryResponse {
            story,
            notice: Some(Notice::comment_posted()),
        }),
    ))
}
