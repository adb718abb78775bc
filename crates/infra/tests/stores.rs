use std::sync::Arc;

use grievance_domain::comments::CommentCreate;
use grievance_domain::complaints::{
    ComplaintCreate, ComplaintFilter, ComplaintService, ComplaintStats, ComplaintStatus,
};
use grievance_domain::department::{Department, Selection};
use grievance_domain::error::DomainError;
use grievance_domain::identity::ActorIdentity;
use grievance_domain::stories::{StoryChannel, StoryCreate, StoryService};
use grievance_infra::repositories::{
    InMemoryComplaintRepository, InMemoryStoryRepository, seeded_repositories,
};

fn actor() -> ActorIdentity {
    ActorIdentity::anonymous("user123")
}

fn complaint_input(title: &str) -> ComplaintCreate {
    ComplaintCreate {
        department: Department::Healthcare,
        title: title.to_string(),
        description: "Waited six hours in the emergency ward.".to_string(),
        organization: Some("City Hospital".to_string()),
        contact_email: "citizen@example.in".to_string(),
    }
}

fn seeded_services() -> (ComplaintService, StoryService) {
    let (complaints, stories) = seeded_repositories(true);
    (
        ComplaintService::new(Arc::new(complaints)),
        StoryService::new(Arc::new(stories)),
    )
}

#[tokio::test]
async fn invalid_complaint_adds_nothing() {
    let (service, _) = seeded_services();
    let before = service.list(&ComplaintFilter::default()).await.unwrap();

    let result = service.submit(&actor(), complaint_input("  ")).await;
    assert!(matches!(result, Err(DomainError::Validation(_))));

    let after = service.list(&ComplaintFilter::default()).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn valid_complaint_lands_on_top_with_fresh_identity() {
    let (service, _) = seeded_services();
    let before = service.list(&ComplaintFilter::default()).await.unwrap();

    let created = service
        .submit(&actor(), complaint_input("Long emergency wait"))
        .await
        .unwrap();
    assert_eq!(created.status, ComplaintStatus::Pending);
    assert_eq!(created.support_count, 0);
    assert!(created.comments.is_empty());
    assert!(created.created_at_ms > 0);
    assert!(
        before
            .iter()
            .all(|complaint| complaint.complaint_id != created.complaint_id)
    );

    let after = service.list(&ComplaintFilter::default()).await.unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[0], created);
    assert_eq!(&after[1..], &before[..]);
}

#[tokio::test]
async fn support_counts_every_click() {
    let service = ComplaintService::new(Arc::new(InMemoryComplaintRepository::new()));
    let created = service
        .submit(&actor(), complaint_input("Long emergency wait"))
        .await
        .unwrap();

    for expected in 1..=3 {
        let updated = service.support(&created.complaint_id).await.unwrap();
        assert_eq!(updated.support_count, expected);
    }
}

#[tokio::test]
async fn concurrent_support_loses_no_increment() {
    let service = ComplaintService::new(Arc::new(InMemoryComplaintRepository::new()));
    let created = service
        .submit(&actor(), complaint_input("Long emergency wait"))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..50 {
        let service = service.clone();
        let complaint_id = created.complaint_id.clone();
        handles.push(tokio::spawn(
            async move { service.support(&complaint_id).await },
        ));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let complaint = service.get(&created.complaint_id).await.unwrap();
    assert_eq!(complaint.support_count, 50);
}

#[tokio::test]
async fn comment_touches_only_its_complaint() {
    let (service, _) = seeded_services();
    let before = service.list(&ComplaintFilter::default()).await.unwrap();
    let target = before[1].complaint_id.clone();

    let updated = service
        .add_comment(
            &target,
            &actor(),
            CommentCreate {
                content: "Same thing happened to me".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.comments.len(), before[1].comments.len() + 1);
    assert_eq!(
        updated.comments.last().unwrap().content,
        "Same thing happened to me"
    );

    let after = service.list(&ComplaintFilter::default()).await.unwrap();
    for (old, new) in before.iter().zip(after.iter()) {
        if old.complaint_id != target {
            assert_eq!(old, new);
        }
    }
}

#[tokio::test]
async fn missing_records_are_not_found() {
    let (complaints, stories) = seeded_services();
    assert_eq!(
        complaints.support("missing").await.unwrap_err(),
        DomainError::NotFound
    );
    assert_eq!(
        stories.like(StoryChannel::Feed, "missing").await.unwrap_err(),
        DomainError::NotFound
    );
}

#[tokio::test]
async fn filters_by_department_and_status() {
    let (service, _) = seeded_services();

    let all = service.list(&ComplaintFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    let banking = service
        .list(&ComplaintFilter {
            department: Selection::Only(Department::Banking),
            ..ComplaintFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(banking.len(), 1);
    assert!(
        banking
            .iter()
            .all(|complaint| complaint.department == Department::Banking)
    );

    let resolved = service
        .list(&ComplaintFilter {
            status: Selection::Only(ComplaintStatus::Resolved),
            ..ComplaintFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].organization, "Jio");

    let none = service
        .list(&ComplaintFilter {
            department: Selection::Only(Department::Banking),
            status: Selection::Only(ComplaintStatus::Resolved),
            ..ComplaintFilter::default()
        })
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn status_moves_forward_and_stats_follow() {
    let (service, _) = seeded_services();
    let pending = service
        .list(&ComplaintFilter {
            status: Selection::Only(ComplaintStatus::Pending),
            ..ComplaintFilter::default()
        })
        .await
        .unwrap();
    let complaint_id = pending[0].complaint_id.clone();

    service
        .update_status(&complaint_id, ComplaintStatus::Resolved)
        .await
        .unwrap();
    let err = service
        .update_status(&complaint_id, ComplaintStatus::InProgress)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    assert_eq!(
        service.stats(None).await.unwrap(),
        ComplaintStats {
            total: 3,
            pending: 0,
            in_progress: 1,
            resolved: 2,
        }
    );
    assert_eq!(service.stats(Some("nobody")).await.unwrap().total, 0);
}

#[tokio::test]
async fn story_channels_are_independent() {
    let (_, service) = seeded_services();
    assert_eq!(service.list(StoryChannel::Feed).await.unwrap().len(), 2);
    assert!(service.list(StoryChannel::Stories).await.unwrap().is_empty());

    let posted = service
        .post(
            StoryChannel::Stories,
            &actor(),
            StoryCreate {
                content: "The municipal office fixed our street lights.".to_string(),
                image_url: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(posted.author_name, "Anonymous User");
    assert_eq!(posted.likes, 0);

    assert_eq!(service.list(StoryChannel::Feed).await.unwrap().len(), 2);
    let stories = service.list(StoryChannel::Stories).await.unwrap();
    assert_eq!(stories, vec![posted.clone()]);
    assert_eq!(
        service
            .get(StoryChannel::Feed, &posted.story_id)
            .await
            .unwrap_err(),
        DomainError::NotFound
    );
}

#[tokio::test]
async fn empty_story_is_refused() {
    let service = StoryService::new(Arc::new(InMemoryStoryRepository::new()));
    let result = service
        .post(
            StoryChannel::Feed,
            &actor(),
            StoryCreate {
                content: "\n\t".to_string(),
                image_url: None,
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
    assert!(service.list(StoryChannel::Feed).await.unwrap().is_empty());
}

#[tokio::test]
async fn likes_comments_and_support_on_feed_story() {
    let (_, service) = seeded_services();
    let feed = service.list(StoryChannel::Feed).await.unwrap();
    let story = &feed[1];

    let liked = service
        .like(StoryChannel::Feed, &story.story_id)
        .await
        .unwrap();
    assert_eq!(liked.likes, story.likes + 1);
    let liked = service
        .like(StoryChannel::Feed, &story.story_id)
        .await
        .unwrap();
    assert_eq!(liked.likes, story.likes + 2);

    let supported = service
        .toggle_support(StoryChannel::Feed, &story.story_id)
        .await
        .unwrap();
    assert!(supported.supported);

    let commented = service
        .add_comment(
            StoryChannel::Feed,
            &story.story_id,
            &actor(),
            CommentCreate {
                content: "Congratulations!".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(commented.comments.len(), 1);

    let untouched = service
        .get(StoryChannel::Feed, &feed[0].story_id)
        .await
        .unwrap();
    assert_eq!(untouched, feed[0]);
}

#[tokio::test]
async fn unseeded_stores_start_empty() {
    let (complaints, stories) = seeded_repositories(false);
    let complaints = ComplaintService::new(Arc::new(complaints));
    let stories = StoryService::new(Arc::new(stories));
    assert!(
        complaints
            .list(&ComplaintFilter::default())
            .await
            .unwrap()
            .is_empty()
    );
    assert!(stories.list(StoryChannel::Feed).await.unwrap().is_empty());
}
