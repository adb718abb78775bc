use std::sync::Arc;
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::DomainResult;
use crate::comments::{Comment, CommentCreate, CommentParent};
use crate::department::{Department, Selection};
use crate::error::DomainError;
use crate::identity::ActorIdentity;
use crate::ports::complaints::ComplaintRepository;
use crate::util::{now_ms, trimmed_non_empty, uuid_v7_without_dashes};

const MAX_TITLE_LENGTH: usize = 200;
const MAX_DESCRIPTION_LENGTH: usize = 5_000;
const MAX_ORGANIZATION_LENGTH: usize = 120;
const MAX_EMAIL_LENGTH: usize = 254;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Pending,
    #[serde(alias = "in-progress", alias = "reviewing")]
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" | "in-progress" | "reviewing" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            other => Err(DomainError::Validation(format!(
                "unknown complaint status '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Complaint {
    pub complaint_id: String,
    pub title: String,
    pub description: String,
    pub department: Department,
    pub organization: String,
    pub contact_email: Option<String>,
    pub author_id: String,
    pub author_name: String,
    pub status: ComplaintStatus,
    pub support_count: u64,
    pub comments: Vec<Comment>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

#[derive(Clone, Debug)]
pub struct ComplaintCreate {
    pub department: Department,
    pub title: String,
    pub description: String,
    pub organization: Option<String>,
    pub contact_email: String,
}

#[derive(Clone, Debug, Default)]
pub struct ComplaintFilter {
    pub department: Selection<Department>,
    pub status: Selection<ComplaintStatus>,
    pub author_id: Option<String>,
    pub search: Option<String>,
}

impl ComplaintFilter {
    pub fn matches(&self, complaint: &Complaint) -> bool {
        if !self.department.admits(&complaint.department) {
            return false;
        }
        if !self.status.admits(&complaint.status) {
            return false;
        }
        if self
            .author_id
            .as_deref()
            .is_some_and(|author_id| author_id != complaint.author_id)
        {
            return false;
        }
        match trimmed_non_empty(self.search.as_deref()) {
            Some(needle) => {
                let needle = needle.to_lowercase();
                [
                    &complaint.title,
                    &complaint.description,
                    &complaint.organization,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            }
            None => true,
        }
    }
}

/// In-place changes a repository applies under its write lock.
#[derive(Clone, Debug)]
pub enum ComplaintMutation {
    Support,
    AppendComment(Comment),
    SetStatus(ComplaintStatus),
}

impl ComplaintMutation {
    pub fn apply(&self, complaint: &mut Complaint, at_ms: i64) -> DomainResult<()> {
        match self {
            Self::Support => {
                complaint.support_count = complaint.support_count.saturating_add(1);
            }
            Self::AppendComment(comment) => {
                if comment.parent != CommentParent::Complaint(complaint.complaint_id.clone()) {
                    return Err(DomainError::Validation(
                        "comment does not belong to this complaint".into(),
                    ));
                }
                complaint.comments.push(comment.clone());
            }
            Self::SetStatus(next) => {
                // statuses only move forward: pending -> in_progress -> resolved
                if *next <= complaint.status {
                    return Err(DomainError::Conflict(format!(
                        "cannot move complaint from {} to {}",
                        complaint.status, next
                    )));
                }
                complaint.status = *next;
            }
        }
        complaint.updated_at_ms = at_ms;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComplaintStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl ComplaintStats {
    pub fn tally<'a>(complaints: impl IntoIterator<Item = &'a Complaint>) -> Self {
        complaints
            .into_iter()
            .fold(Self::default(), |mut stats, complaint| {
                stats.total += 1;
                match complaint.status {
                    ComplaintStatus::Pending => stats.pending += 1,
                    ComplaintStatus::InProgress => stats.in_progress += 1,
                    ComplaintStatus::Resolved => stats.resolved += 1,
                }
                stats
            })
    }
}

#[derive(Clone)]
pub struct ComplaintService {
    repository: Arc<dyn ComplaintRepository>,
}

impl ComplaintService {
    pub fn new(repository: Arc<dyn ComplaintRepository>) -> Self {
        Self { repository }
    }

    pub async fn submit(
        &self,
        actor: &ActorIdentity,
        input: ComplaintCreate,
    ) -> DomainResult<Complaint> {
        let payload = validate_complaint_create(&input)?;
        let now = now_ms();
        let complaint = Complaint {
            complaint_id: uuid_v7_without_dashes(),
            title: payload.title,
            description: payload.description,
            department: payload.department,
            organization: payload.organization.unwrap_or_default(),
            contact_email: Some(payload.contact_email),
            author_id: actor.user_id.clone(),
            author_name: actor.username.clone(),
            status: ComplaintStatus::Pending,
            support_count: 0,
            comments: Vec::new(),
            created_at_ms: now,
            updated_at_ms: now,
        };
        self.repository.create(&complaint).await
    }

    pub async fn get(&self, complaint_id: &str) -> DomainResult<Complaint> {
        self.repository
            .get(complaint_id)
            .await?
            .ok_or(DomainError::NotFound)
    }

    pub async fn list(&self, filter: &ComplaintFilter) -> DomainResult<Vec<Complaint>> {
        self.repository.list(filter).await
    }

    pub async fn support(&self, complaint_id: &str) -> DomainResult<Complaint> {
        self.repository
            .apply(complaint_id, &ComplaintMutation::Support, now_ms())
            .await
    }

    pub async fn add_comment(
        &self,
        complaint_id: &str,
        actor: &ActorIdentity,
        input: CommentCreate,
    ) -> DomainResult<Complaint> {
        let comment = Comment::new(
            CommentParent::Complaint(complaint_id.to_string()),
            actor,
            &input,
        )?;
        self.repository
            .apply(
                complaint_id,
                &ComplaintMutation::AppendComment(comment),
                now_ms(),
            )
            .await
    }

    pub async fn update_status(
        &self,
        complaint_id: &str,
        status: ComplaintStatus,
    ) -> DomainResult<Complaint> {
        self.repository
            .apply(complaint_id, &ComplaintMutation::SetStatus(status), now_ms())
            .await
    }

    pub async fn stats(&self, author_id: Option<&str>) -> DomainResult<ComplaintStats> {
        let filter = ComplaintFilter {
            author_id: author_id.map(str::to_string),
            ..ComplaintFilter::default()
        };
        let complaints = self.repository.list(&filter).await?;
        Ok(ComplaintStats::tally(&complaints))
    }
}

fn validate_complaint_create(input: &ComplaintCreate) -> Result<ComplaintCreate, DomainError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(DomainError::Validation("title is required".into()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(DomainError::Validation(format!(
            "title exceeds max length of {MAX_TITLE_LENGTH}"
        )));
    }

    let description = input.description.trim();
    if description.is_empty() {
        return Err(DomainError::Validation("description is required".into()));
    }
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(DomainError::Validation(format!(
            "description exceeds max length of {MAX_DESCRIPTION_LENGTH}"
        )));
    }

    let organization = trimmed_non_empty(input.organization.as_deref());
    if organization
        .as_ref()
        .is_some_and(|organization| organization.chars().count() > MAX_ORGANIZATION_LENGTH)
    {
        return Err(DomainError::Validation(format!(
            "organization exceeds max length of {MAX_ORGANIZATION_LENGTH}"
        )));
    }

    let contact_email = input.contact_email.trim();
    if contact_email.is_empty() {
        return Err(DomainError::Validation("contact email is required".into()));
    }
    if contact_email.chars().count() > MAX_EMAIL_LENGTH || !contact_email.validate_email() {
        return Err(DomainError::Validation(
            "contact email must be a valid address".into(),
        ));
    }

    Ok(ComplaintCreate {
        department: input.department,
        title: title.to_string(),
        description: description.to_string(),
        organization,
        contact_email: contact_email.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> ComplaintCreate {
        ComplaintCreate {
            department: Department::Banking,
            title: "  Unauthorized Transaction ".into(),
            description: "Found an unauthorized debit.".into(),
            organization: Some("  ".into()),
            contact_email: "citizen@example.in".into(),
        }
    }

    fn sample_complaint(status: ComplaintStatus) -> Complaint {
        Complaint {
            complaint_id: "c-1".into(),
            title: "Frequent Network Disruptions".into(),
            description: "Call drops every evening".into(),
            department: Department::Telecom,
            organization: "Jio".into(),
            contact_email: None,
            author_id: "user123".into(),
            author_name: "Anonymous User".into(),
            status,
            support_count: 0,
            comments: vec![],
            created_at_ms: 1,
            updated_at_ms: 1,
        }
    }

    #[test]
    fn validation_trims_and_drops_blank_organization() {
        let payload = validate_complaint_create(&sample_input()).expect("valid");
        assert_eq!(payload.title, "Unauthorized Transaction");
        assert_eq!(payload.organization, None);
    }

    #[test]
    fn validation_requires_title_and_description() {
        let mut input = sample_input();
        input.title = "   ".into();
        assert_eq!(
            validate_complaint_create(&input).unwrap_err(),
            DomainError::Validation("title is required".into())
        );

        let mut input = sample_input();
        input.description = String::new();
        assert_eq!(
            validate_complaint_create(&input).unwrap_err(),
            DomainError::Validation("description is required".into())
        );
    }

    #[test]
    fn validation_checks_contact_email() {
        for bad in [
            "",
            "citizen",
            "citizen@",
            "@example.in",
            "a b@example.in",
            "citizen@@example.in",
        ] {
            let mut input = sample_input();
            input.contact_email = bad.into();
            assert!(validate_complaint_create(&input).is_err(), "{bad}");
        }
    }

    #[test]
    fn status_parses_aliases() {
        assert_eq!(
            "in-progress".parse::<ComplaintStatus>(),
            Ok(ComplaintStatus::InProgress)
        );
        assert_eq!(
            "Reviewing".parse::<ComplaintStatus>(),
            Ok(ComplaintStatus::InProgress)
        );
        assert!("closed".parse::<ComplaintStatus>().is_err());
    }

    #[test]
    fn filter_matches_department_status_and_search() {
        let complaint = sample_complaint(ComplaintStatus::Resolved);

        assert!(ComplaintFilter::default().matches(&complaint));

        let by_department = ComplaintFilter {
            department: Selection::Only(Department::Banking),
            ..ComplaintFilter::default()
        };
        assert!(!by_department.matches(&complaint));

        let by_status = ComplaintFilter {
            status: Selection::Only(ComplaintStatus::Resolved),
            ..ComplaintFilter::default()
        };
        assert!(by_status.matches(&complaint));

        let by_search = ComplaintFilter {
            search: Some("JIO".into()),
            ..ComplaintFilter::default()
        };
        assert!(by_search.matches(&complaint));

        let by_author = ComplaintFilter {
            author_id: Some("someone-else".into()),
            ..ComplaintFilter::default()
        };
        assert!(!by_author.matches(&complaint));
    }

    #[test]
    fn status_only_moves_forward() {
        let mut complaint = sample_complaint(ComplaintStatus::Pending);
        ComplaintMutation::SetStatus(ComplaintStatus::InProgress)
            .apply(&mut complaint, 5)
            .expect("forward");
        assert_eq!(complaint.status, ComplaintStatus::InProgress);
        assert_eq!(complaint.updated_at_ms, 5);

        let result =
            ComplaintMutation::SetStatus(ComplaintStatus::Pending).apply(&mut complaint, 6);
        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert_eq!(complaint.status, ComplaintStatus::InProgress);
        assert_eq!(complaint.updated_at_ms, 5);
    }

    #[test]
    fn support_increments_by_one_each_time() {
        let mut complaint = sample_complaint(ComplaintStatus::Pending);
        for _ in 0..3 {
            ComplaintMutation::Support
                .apply(&mut complaint, 2)
                .expect("support");
        }
        assert_eq!(complaint.support_count, 3);
    }

    #[test]
    fn stats_tally_each_status() {
        let complaints = [
            sample_complaint(ComplaintStatus::Pending),
            sample_complaint(ComplaintStatus::Resolved),
            sample_complaint(ComplaintStatus::Resolved),
        ];
        assert_eq!(
            ComplaintStats::tally(&complaints),
            ComplaintStats {
                total: 3,
                pending: 1,
                in_progress: 0,
                resolved: 2,
            }
        );
    }
}
