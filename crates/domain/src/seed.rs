//! Sample records the stores start with.

use crate::comments::{Comment, CommentParent};
use crate::complaints::{Complaint, ComplaintStatus};
use crate::department::Department;
use crate::identity::ANONYMOUS_DISPLAY_NAME;
use crate::stories::{Story, StoryChannel};

pub const SAMPLE_USER_ID: &str = "user123";

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
// 2024-02-01T00:00:00Z
const FEB_01_2024_MS: i64 = 1_706_745_600_000;

fn feb_2024(day: i64) -> i64 {
    FEB_01_2024_MS + (day - 1) * DAY_MS
}

struct ComplaintSeed {
    id: &'static str,
    title: &'static str,
    department: Department,
    organization: &'static str,
    status: ComplaintStatus,
    day: i64,
    description: &'static str,
}

const COMPLAINTS: [ComplaintSeed; 3] = [
    ComplaintSeed {
        id: "seed0000000000000000000000000003",
        title: "Flight Cancellation Without Notice",
        department: Department::Airlines,
        organization: "Air India",
        status: ComplaintStatus::Pending,
        day: 3,
        description: "Flight was cancelled without any prior notice or compensation.",
    },
    ComplaintSeed {
        id: "seed0000000000000000000000000002",
        title: "Unauthorized Transaction",
        department: Department::Banking,
        organization: "HDFC Bank",
        status: ComplaintStatus::InProgress,
        day: 2,
        description: "Found an unauthorized transaction of ₹5000 in my account.",
    },
    ComplaintSeed {
        id: "seed0000000000000000000000000001",
        title: "Frequent Network Disruptions",
        department: Department::Telecom,
        organization: "Jio",
        status: ComplaintStatus::Resolved,
        day: 1,
        description: "Experiencing frequent call drops and internet connectivity issues.",
    },
];

/// Newest first, matching list order.
pub fn sample_complaints() -> Vec<Complaint> {
    COMPLAINTS
        .iter()
        .map(|seed| Complaint {
            complaint_id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            department: seed.department,
            organization: seed.organization.to_string(),
            contact_email: None,
            author_id: SAMPLE_USER_ID.to_string(),
            author_name: ANONYMOUS_DISPLAY_NAME.to_string(),
            status: seed.status,
            support_count: 0,
            comments: Vec::new(),
            created_at_ms: feb_2024(seed.day),
            updated_at_ms: feb_2024(seed.day),
        })
        .collect()
}

/// Sample posts for the community feed. The stories page starts empty.
pub fn sample_stories(channel: StoryChannel) -> Vec<Story> {
    if channel != StoryChannel::Feed {
        return Vec::new();
    }

    let power_story_id = "seedstory000000000000000000000001";
    vec![
        Story {
            story_id: power_story_id.to_string(),
            channel,
            content: "After filing a complaint about frequent power outages in our area through \
                      this platform, the electricity board took notice and fixed the underlying \
                      infrastructure issues. Now we have stable power supply!"
                .to_string(),
            image_url: None,
            author_name: "Priya Singh".to_string(),
            likes: 45,
            supported: false,
            comments: vec![Comment {
                comment_id: "seedcomment00000000000000000001".to_string(),
                parent: CommentParent::Story(power_story_id.to_string()),
                author_name: "Rahul Kumar".to_string(),
                content: "This is great news! We faced similar issues in our locality."
                    .to_string(),
                created_at_ms: feb_2024(15),
            }],
            created_at_ms: feb_2024(14),
            updated_at_ms: feb_2024(15),
        },
        Story {
            story_id: "seedstory000000000000000000000002".to_string(),
            channel,
            content: "Successfully resolved a banking dispute through this platform. The bank \
                      responded within 48 hours and reversed the unauthorized transaction."
                .to_string(),
            image_url: None,
            author_name: "Amit Patel".to_string(),
            likes: 32,
            supported: false,
            comments: Vec::new(),
            created_at_ms: feb_2024(13),
            updated_at_ms: feb_2024(13),
        },
    ]
}
