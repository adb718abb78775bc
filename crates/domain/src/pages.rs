//! View models for each page. Handlers fill these from the stores and the
//! client renders them as-is.

use serde::Serialize;

use crate::comments::Comment;
use crate::complaints::{Complaint, ComplaintFilter, ComplaintStats, ComplaintStatus};
use crate::department::{Department, Selection};
use crate::navigation::{Header, View, header};
use crate::stories::{Story, StoryChannel};
use crate::util::{format_ms_date, format_ms_rfc3339};
use crate::wizard::ComplaintWizard;

const FOOTER: &str = "© 2024 Speak Up. All rights reserved.";

#[derive(Clone, Debug, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct DepartmentCard {
    pub department: Department,
    pub label: &'static str,
    pub description: String,
}

impl From<Department> for DepartmentCard {
    fn from(department: Department) -> Self {
        Self {
            department,
            label: department.label(),
            description: department.blurb(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct ComplaintFormView {
    pub heading: &'static str,
    pub department: DepartmentCard,
    pub fields: Vec<FormField>,
    pub submit_label: &'static str,
    pub back_label: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct HomePage {
    pub view: View,
    pub header: Header,
    pub brand: &'static str,
    pub motto: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub wizard: ComplaintWizard,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<DepartmentCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<ComplaintFormView>,
    pub footer: &'static str,
}

pub fn home_page(wizard: ComplaintWizard) -> HomePage {
    let (departments, form) = match wizard.department() {
        None => (
            Department::ALL.into_iter().map(DepartmentCard::from).collect(),
            None,
        ),
        Some(department) => (Vec::new(), Some(complaint_form(department))),
    };
    HomePage {
        view: View::Home,
        header: header(),
        brand: "Speak Up",
        motto: "Your Voice Matters",
        title: View::Home.title(),
        intro: "Select a department to file your complaint. We ensure your voice is heard \
                and addressed properly.",
        wizard,
        departments,
        form,
        footer: FOOTER,
    }
}

fn complaint_form(department: Department) -> ComplaintFormView {
    ComplaintFormView {
        heading: "File a Complaint",
        department: department.into(),
        fields: vec![
            FormField {
                name: "title",
                label: "Complaint Title",
                input_type: "text",
                placeholder: "Brief description of your complaint",
                required: true,
            },
            FormField {
                name: "description",
                label: "Detailed Description",
                input_type: "textarea",
                placeholder: "Please provide all relevant details of your complaint",
                required: true,
            },
            FormField {
                name: "organization",
                label: "Organization",
                input_type: "text",
                placeholder: "Company or office the complaint is about",
                required: false,
            },
            FormField {
                name: "contact_email",
                label: "Contact Email",
                input_type: "email",
                placeholder: "Your email address",
                required: true,
            },
        ],
        submit_label: "Submit Complaint",
        back_label: "← Back to Categories",
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ValueCard {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct AboutPage {
    pub view: View,
    pub header: Header,
    pub title: &'static str,
    pub tagline: &'static str,
    pub mission: &'static str,
    pub vision: &'static str,
    pub values: Vec<ValueCard>,
    pub how_we_work: Vec<&'static str>,
}

pub fn about_page() -> AboutPage {
    AboutPage {
        view: View::About,
        header: header(),
        title: View::About.title(),
        tagline: "Empowering citizens to voice their concerns and drive positive change in India.",
        mission: "To create a transparent and efficient platform where every citizen's voice \
                  matters. We believe in the power of collective action to bring about \
                  positive change in society.",
        vision: "To become India's most trusted platform for citizen grievance redressal, \
                 fostering accountability and transparency across all sectors.",
        values: vec![
            ValueCard {
                title: "User-Centric",
                description: "Built with users in mind, ensuring a seamless experience",
            },
            ValueCard {
                title: "Excellence",
                description: "Committed to maintaining the highest standards",
            },
            ValueCard {
                title: "Security",
                description: "Your data is protected with enterprise-grade security",
            },
            ValueCard {
                title: "Innovation",
                description: "Leveraging AI to provide better solutions",
            },
        ],
        how_we_work: vec![
            "Our AI-powered platform processes complaints and ensures they reach the right \
             department. We track the status of each complaint and keep users updated \
             throughout the resolution process.",
            "We work with various organizations across sectors to ensure quick resolution of \
             complaints. Our platform provides analytics and insights to help organizations \
             improve their services.",
        ],
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CommentCard {
    pub comment_id: String,
    pub author_name: String,
    pub content: String,
    pub date: String,
}

impl From<&Comment> for CommentCard {
    fn from(comment: &Comment) -> Self {
        Self {
            comment_id: comment.comment_id.clone(),
            author_name: comment.author_name.clone(),
            content: comment.content.clone(),
            date: format_ms_date(comment.created_at_ms),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ComplaintCard {
    pub complaint_id: String,
    pub title: String,
    pub organization: String,
    pub department: Department,
    pub date: String,
    pub status: ComplaintStatus,
    pub status_label: &'static str,
    pub description: String,
    pub support_count: u64,
    pub comments: Vec<CommentCard>,
}

impl From<&Complaint> for ComplaintCard {
    fn from(complaint: &Complaint) -> Self {
        Self {
            complaint_id: complaint.complaint_id.clone(),
            title: complaint.title.clone(),
            organization: complaint.organization.clone(),
            department: complaint.department,
            date: format_ms_date(complaint.created_at_ms),
            status: complaint.status,
            status_label: complaint.status.label(),
            description: complaint.description.clone(),
            support_count: complaint.support_count,
            comments: complaint.comments.iter().map(CommentCard::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct AppliedFilters {
    pub department: String,
    pub status: String,
    pub search: String,
}

impl From<&ComplaintFilter> for AppliedFilters {
    fn from(filter: &ComplaintFilter) -> Self {
        Self {
            department: match filter.department {
                Selection::All => "all".to_string(),
                Selection::Only(department) => department.as_str().to_string(),
            },
            status: match filter.status {
                Selection::All => "all".to_string(),
                Selection::Only(status) => status.as_str().to_string(),
            },
            search: filter.search.clone().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ComplaintsPage {
    pub view: View,
    pub header: Header,
    pub title: &'static str,
    pub stats: ComplaintStats,
    pub filters: AppliedFilters,
    pub department_options: Vec<SelectOption>,
    pub status_options: Vec<SelectOption>,
    pub complaints: Vec<ComplaintCard>,
}

pub fn complaints_page(
    stats: ComplaintStats,
    filter: &ComplaintFilter,
    complaints: &[Complaint],
) -> ComplaintsPage {
    let mut department_options = vec![SelectOption {
        value: "all",
        label: "All Departments",
    }];
    department_options.extend(Department::ALL.into_iter().map(|department| SelectOption {
        value: department.as_str(),
        label: department.label(),
    }));

    let mut status_options = vec![SelectOption {
        value: "all",
        label: "All Status",
    }];
    status_options.extend(
        [
            ComplaintStatus::Resolved,
            ComplaintStatus::InProgress,
            ComplaintStatus::Pending,
        ]
        .into_iter()
        .map(|status| SelectOption {
            value: status.as_str(),
            label: status.label(),
        }),
    );

    ComplaintsPage {
        view: View::Complaints,
        header: header(),
        title: View::Complaints.title(),
        stats,
        filters: filter.into(),
        department_options,
        status_options,
        complaints: complaints.iter().map(ComplaintCard::from).collect(),
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct StoryCard {
    pub story_id: String,
    pub author_name: String,
    pub date: String,
    pub posted_at: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub likes: u64,
    pub supported: bool,
    pub comment_count: usize,
    pub comments: Vec<CommentCard>,
}

impl From<&Story> for StoryCard {
    fn from(story: &Story) -> Self {
        Self {
            story_id: story.story_id.clone(),
            author_name: story.author_name.clone(),
            date: format_ms_date(story.created_at_ms),
            posted_at: format_ms_rfc3339(story.created_at_ms),
            content: story.content.clone(),
            image_url: story.image_url.clone(),
            likes: story.likes,
            supported: story.supported,
            comment_count: story.comments.len(),
            comments: story.comments.iter().map(CommentCard::from).collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct StoriesPage {
    pub view: View,
    pub header: Header,
    pub channel: StoryChannel,
    pub title: &'static str,
    pub composer_placeholder: &'static str,
    pub stories: Vec<StoryCard>,
}

pub fn stories_page(channel: StoryChannel, stories: &[Story]) -> StoriesPage {
    let (view, composer_placeholder) = match channel {
        StoryChannel::Feed => (View::Feed, "Share your story or experience..."),
        StoryChannel::Stories => (View::Stories, "What's on your mind?"),
    };
    StoriesPage {
        view,
        header: header(),
        channel,
        title: view.title(),
        composer_placeholder,
        stories: stories.iter().map(StoryCard::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_lists_departments_until_one_is_selected() {
        let page = home_page(ComplaintWizard::default());
        assert_eq!(page.departments.len(), Department::ALL.len());
        assert!(page.form.is_none());

        let page = home_page(ComplaintWizard::default().select(Department::Insurance));
        assert!(page.departments.is_empty());
        let form = page.form.expect("form");
        assert_eq!(form.department.department, Department::Insurance);
        assert!(
            form.fields
                .iter()
                .filter(|field| field.required)
                .map(|field| field.name)
                .eq(["title", "description", "contact_email"])
        );
    }

    #[test]
    fn complaints_page_reports_applied_filters() {
        let filter = ComplaintFilter {
            department: Selection::Only(Department::Telecom),
            ..ComplaintFilter::default()
        };
        let page = complaints_page(ComplaintStats::default(), &filter, &[]);
        assert_eq!(page.filters.department, "telecom");
        assert_eq!(page.filters.status, "all");
        assert_eq!(page.department_options.len(), Department::ALL.len() + 1);
        assert_eq!(page.status_options.len(), 4);
    }

    #[test]
    fn about_page_has_four_values() {
        let page = about_page();
        assert_eq!(page.values.len(), 4);
        assert_eq!(page.values[0].title, "User-Centric");
    }
}
