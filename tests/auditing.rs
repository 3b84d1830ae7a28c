mod common;

use member_service::domain::{CrudRepository, Member, RepositoryProvider};

use common::{fixed_auditing, setup_repos, setup_repos_with};

#[tokio::test]
async fn insert_stamps_created_and_modified() {
    let (_db, repos) = setup_repos_with(fixed_auditing("alice")).await;

    let saved = repos.members().save(Member::new("member1")).await.unwrap();

    let created = saved.audit.created_date().expect("created date");
    assert_eq!(saved.audit.last_modified_date(), Some(created));
    assert_eq!(saved.audit.created_by(), Some("alice"));
    assert_eq!(saved.audit.last_modified_by(), Some("alice"));
}

#[tokio::test]
async fn update_only_touches_modified_fields() {
    let (_db, repos) = setup_repos_with(fixed_auditing("alice")).await;
    let mut saved = repos.members().save(Member::new("member1")).await.unwrap();
    let created = saved.audit.created_date();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    saved.set_username("member2");
    let updated = repos.members().save(saved).await.unwrap();

    assert_eq!(updated.audit.created_date(), created);
    assert!(updated.audit.last_modified_date() > created);

    let reloaded = repos
        .members()
        .find_by_id(updated.id().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.audit, updated.audit);
}

#[tokio::test]
async fn without_auditor_actor_columns_stay_empty() {
    let (_db, repos) = setup_repos().await;

    let saved = repos.members().save(Member::new("member1")).await.unwrap();

    assert!(saved.audit.created_date().is_some());
    assert!(saved.audit.created_by().is_none());
    assert!(saved.audit.last_modified_by().is_none());
}
