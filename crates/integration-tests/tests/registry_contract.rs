//! Registry contract tests
//!
//! Service + in-memory repository, exercised the way the HTTP adapter uses them.

use std::sync::Arc;

use jobboard_core::application::JobBoardService;
use jobboard_core::domain::{JobPost, PostId};
use jobboard_core::error::AppError;
use jobboard_infra_memory::InMemoryJobPostRepository;

fn seeded_service() -> JobBoardService {
    JobBoardService::new(Arc::new(InMemoryJobPostRepository::seeded()))
}

fn ids(posts: &[JobPost]) -> Vec<PostId> {
    posts.iter().map(|p| p.post_id).collect()
}

#[tokio::test]
async fn test_adds_follow_seeds_in_order() {
    let service = seeded_service();
    for id in [10, 4, 7] {
        service
            .add(JobPost::new(id, format!("profile {}", id), "desc", 1, ["Rust"]))
            .await
            .unwrap();
    }

    let posts = service.list_all().await.unwrap();
    assert_eq!(ids(&posts), vec![1, 2, 10, 4, 7]);
}

#[tokio::test]
async fn test_go_developer_scenario() {
    let service = seeded_service();
    let go = JobPost::new(3, "Go developer", "2yr", 2, ["Go"]);
    service.add(go.clone()).await.unwrap();

    let posts = service.list_all().await.unwrap();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts.last().unwrap().post_id, 3);
    assert_eq!(service.get_by_id(3).await.unwrap(), go);
}

#[tokio::test]
async fn test_delete_seed_scenario() {
    let service = seeded_service();

    let removed = service.delete_by_id(1).await.unwrap();
    assert_eq!(removed.post_profile, "Java developer");

    let posts = service.list_all().await.unwrap();
    assert_eq!(ids(&posts), vec![2]);
    assert!(matches!(
        service.get_by_id(1).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_duplicate_id_lookup_returns_first() {
    let service = seeded_service();
    service
        .add(JobPost::new(1, "Kotlin developer", "new", 4, ["Kotlin"]))
        .await
        .unwrap();

    let found = service.get_by_id(1).await.unwrap();
    assert_eq!(found.post_profile, "Java developer");
    assert_eq!(service.list_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_overwrites_everything_but_id() {
    let service = seeded_service();
    let patch = JobPost::new(1, "Senior Java developer", "Must have 6exp", 6, ["Java 21"]);

    let updated = service.update(patch.clone()).await.unwrap();
    assert_eq!(updated, patch);

    let posts = service.list_all().await.unwrap();
    assert_eq!(ids(&posts), vec![1, 2]);
    assert_eq!(posts[0], patch);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found_and_unchanged() {
    let service = seeded_service();
    let before = service.list_all().await.unwrap();

    let result = service
        .update(JobPost::new(55, "ghost", "none", 0, Vec::<String>::new()))
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.list_all().await.unwrap(), before);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found_and_unchanged() {
    let service = seeded_service();
    let before = service.list_all().await.unwrap();

    assert!(matches!(
        service.delete_by_id(55).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(service.list_all().await.unwrap(), before);
}

#[tokio::test]
async fn test_delete_removes_only_first_duplicate() {
    let service = seeded_service();
    service
        .add(JobPost::new(2, "second c developer", "dup", 1, ["c"]))
        .await
        .unwrap();

    service.delete_by_id(2).await.unwrap();

    let posts = service.list_all().await.unwrap();
    assert_eq!(ids(&posts), vec![1, 2]);
    assert_eq!(posts[1].post_profile, "second c developer");
}

#[tokio::test]
async fn test_deleted_id_can_be_added_again() {
    let service = seeded_service();
    service.delete_by_id(2).await.unwrap();
    service
        .add(JobPost::new(2, "c developer", "back again", 3, ["c"]))
        .await
        .unwrap();

    let posts = service.list_all().await.unwrap();
    assert_eq!(ids(&posts), vec![1, 2]);
    assert_eq!(service.get_by_id(2).await.unwrap().post_desc, "back again");
}
