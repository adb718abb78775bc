use serde::Serialize;

use crate::stories::StoryChannel;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// Transient confirmation shown after a page action.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    fn new(title: &str, description: &str, variant: NoticeVariant) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant,
        }
    }

    pub fn complaint_submitted() -> Self {
        Self::new(
            "Complaint Submitted Successfully",
            "We'll process your complaint and get back to you soon.",
            NoticeVariant::Default,
        )
    }

    pub fn complaint_supported() -> Self {
        Self::new(
            "Success",
            "Thank you for your support!",
            NoticeVariant::Default,
        )
    }

    pub fn status_updated(label: &str) -> Self {
        Self::new(
            "Status Updated",
            &format!("Complaint is now {label}."),
            NoticeVariant::Default,
        )
    }

    pub fn story_posted(channel: StoryChannel) -> Self {
        match channel {
            StoryChannel::Feed => Self::new(
                "Story Posted",
                "Your story has been shared successfully!",
                NoticeVariant::Default,
            ),
            StoryChannel::Stories => {
                Self::new("Success", "Your story has been posted!", NoticeVariant::Default)
            }
        }
    }

    pub fn story_supported() -> Self {
        Self::complaint_supported()
    }

    pub fn comment_posted() -> Self {
        Self::new(
            "Comment Posted",
            "Your comment has been added successfully!",
            NoticeVariant::Default,
        )
    }

    pub fn error(description: &str) -> Self {
        Self::new("Error", description, NoticeVariant::Destructive)
    }
}
