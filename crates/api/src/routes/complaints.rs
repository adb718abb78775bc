use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{
    Json, Router,
    routing::{get, post},
};
use grievance_domain::comments::CommentCreate;
use grievance_domain::complaints::{Complaint, ComplaintFilter, ComplaintStatus};
use grievance_domain::department::{Department, Selection};
use grievance_domain::notice::Notice;
use grievance_domain::wizard::{ComplaintForm, ComplaintWizard};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::map_domain_error;
use crate::{error::ApiError, observability, state::AppState, validation};

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/complaints", post(submit_complaint).get(list_complaints))
        .route("/v1/complaints/:complaint_id", get(get_complaint))
        .route(
            "/v1/complaints/:complaint_id/support",
            post(support_complaint),
        )
        .route(
            "/v1/complaints/:complaint_id/comments",
            post(comment_on_complaint),
        )
        .route(
            "/v1/complaints/:complaint_id/status",
            post(update_complaint_status),
        )
}

/// Query string shared by the complaints page and the list endpoint.
#[derive(Debug, Default, Deserialize, Validate)]
pub(super) struct ComplaintQuery {
    #[validate(length(max = 32, message = "department filter is too long"))]
    pub department: Option<String>,
    #[validate(length(max = 32, message = "status filter is too long"))]
    pub status: Option<String>,
    #[validate(length(max = 200, message = "search must be at most 200 characters"))]
    pub search: Option<String>,
    #[validate(length(min = 1, max = 128, message = "author_id must be 1 to 128 characters"))]
    pub author_id: Option<String>,
}

impl ComplaintQuery {
    pub(super) fn into_filter(self) -> Result<ComplaintFilter, ApiError> {
        validation::validate(&self)?;
        Ok(ComplaintFilter {
            department: Selection::parse(self.department.as_deref())
                .map_err(|err| map_domain_error("parse_department_filter", err))?,
            status: Selection::parse(self.status.as_deref())
                .map_err(|err| map_domain_error("parse_status_filter", err))?,
            author_id: self.author_id,
            search: self.search,
        })
    }
}

// Missing text fields arrive as "" so the domain reports them as required.
#[derive(Debug, Deserialize)]
struct SubmitComplaintRequest {
    department: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    organization: Option<String>,
    #[serde(default)]
    contact_email: String,
}

#[derive(Debug, Deserialize)]
struct CommentRequest {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct StatusRequest {
    #[serde(default)]
    status: String,
}

#[derive(Serialize)]
struct ComplaintResponse {
    complaint: Complaint,
    notice: Notice,
}

#[derive(Serialize)]
struct ComplaintListResponse {
    complaints: Vec<Complaint>,
}

async fn submit_complaint(
    State(state): State<AppState>,
    Json(payload): Json<SubmitComplaintRequest>,
) -> Result<(StatusCode, Json<ComplaintResponse>), ApiError> {
    let mut wizard = ComplaintWizard::default();
    if let Some(raw) = payload.department.as_deref() {
        let department = raw
            .parse::<Department>()
            .map_err(|err| map_domain_error("submit_complaint", err))?;
        wizard = wizard.select(department);
    }
    let input = wizard
        .submit(ComplaintForm {
            title: payload.title,
            description: payload.description,
            contact_email: payload.contact_email,
            organization: payload.organization,
        })
        .map_err(|err| map_domain_error("submit_complaint", err))?;

    let actor = state.current_actor();
    let complaint = state
        .complaints
        .submit(&actor, input)
        .await
        .map_err(|err| map_domain_error("submit_complaint", err))?;

    observability::register_complaint_action("submitted", complaint.department.as_str());
    tracing::info!(
        complaint_id = %complaint.complaint_id,
        department = %complaint.department,
        author_id = %complaint.author_id,
        "complaint submitted"
    );
    Ok((
        StatusCode::CREATED,
        Json(ComplaintResponse {
            complaint,
            notice: Notice::complaint_submitted(),
        }),
    ))
}

async fn list_complaints(
    State(state): State<AppState>,
    Query(query): Query<ComplaintQuery>,
) -> Result<Json<ComplaintListResponse>, ApiError> {
    let filter = query.into_filter()?;
    let complaints = state
        .complaints
        .list(&filter)
        .await
        .map_err(|err| map_domain_error("list_complaints", err))?;
    Ok(Json(ComplaintListResponse { complaints }))
}

async fn get_complaint(
    State(state): State<AppState>,
    Path(complaint_id): Path<String>,
) -> Result<Json<Complaint>, ApiError> {
    let complaint = state
        .complaints
        .get(&complaint_id)
        .await
        .map_err(|err| map_domain_error("get_complaint", err))?;
    Ok(Json(complaint))
}

async fn support_complaint(
    State(state): State<AppState>,
    Path(complaint_id): Path<String>,
) -> Result<Json<ComplaintResponse>, ApiError> {
    let complaint = state
        .complaints
        .support(&complaint_id)
        .await
        .map_err(|err| map_domain_error("support_complaint", err))?;

    observability::register_complaint_action("supported", complaint.department.as_str());
    tracing::info!(
        complaint_id = %complaint.complaint_id,
        support_count = complaint.support_count,
        "complaint supported"
    );
    Ok(Json(ComplaintResponse {
        complaint,
        notice: Notice::complaint_supported(),
    }))
}

async fn comment_on_complaint(
    State(state): State<AppState>,
    Path(complaint_id): Path<String>,
    Json(payload): Json<CommentRequest>,
) -> Result<(StatusCode, Json<ComplaintResponse>), ApiError> {
    let actor = state.current_actor();
    let complaint = state
        .complaints
        .add_comment(
            &complaint_id,
            &actor,
            CommentCreate {
                content: payload.content,
            },
        )
        .await
        .map_err(|err| map_domain_error("comment_on_complaint", err))?;

    observability::register_complaint_action("commented", complaint.department.as_str());
    tracing::info!(
        complaint_id = %complaint.complaint_id,
        comment_count = complaint.comments.len(),
        "complaint comment added"
    );
    Ok((
        StatusCode::CREATED,
        Json(ComplaintResponse {
            complaint,
            notice: Notice::comment_posted(),
        }),
    ))
}

async fn update_complaint_status(
    State(state): State<AppState>,
    Path(complaint_id): Path<String>,
    Json(payload): Json<StatusRequest>,
) -> Result<Json<ComplaintResponse>, ApiError> {
    let status = payload
        .status
        .parse::<ComplaintStatus>()
        .map_err(|err| map_domain_error("update_complaint_status", err))?;
    let complaint = state
        .complaints
        .update_status(&complaint_id, status)
        .await
        .map_err(|err| map_domain_error("update_complaint_status", err))?;

    observability::register_complaint_action("status_changed", complaint.department.as_str());
    tracing::info!(
        complaint_id = %complaint.complaint_id,
        status = %complaint.status,
        "complaint status updated"
    );
    let notice = Notice::status_updated(complaint.status.label());
    Ok(Json(ComplaintResponse { complaint, notice }))
}
