mod common;

use member_service::domain::{CrudRepository, Item, RepositoryProvider};

use common::{fixed_auditing, setup_repos, setup_repos_with};

#[tokio::test]
async fn new_item_with_assigned_key_is_inserted() {
    let (_db, repos) = setup_repos().await;

    let saved = repos.items().save(Item::new("A")).await.unwrap();

    assert_eq!(saved.id(), "A");
    assert!(saved.audit.created_date().is_some());
    assert_eq!(repos.items().count().await.unwrap(), 1);
}

#[tokio::test]
async fn saving_stored_item_updates_it() {
    let (_db, repos) = setup_repos_with(fixed_auditing("alice")).await;

    let saved = repos.items().save(Item::new("A")).await.unwrap();
    let again = repos.items().save(saved.clone()).await.unwrap();

    assert_eq!(repos.items().count().await.unwrap(), 1);
    assert_eq!(again.audit.created_date(), saved.audit.created_date());
    assert_eq!(again.audit.created_by(), Some("alice"));
    assert_eq!(again.audit.last_modified_by(), Some("alice"));
}

#[tokio::test]
async fn inserting_duplicate_key_fails() {
    let (_db, repos) = setup_repos().await;

    repos.items().save(Item::new("A")).await.unwrap();
    assert!(repos.items().save(Item::new("A")).await.is_err());
}

#[tokio::test]
async fn find_and_delete() {
    let (_db, repos) = setup_repos().await;
    let saved = repos.items().save(Item::new("A")).await.unwrap();
    repos.items().save(Item::new("B")).await.unwrap();

    assert_eq!(
        repos.items().find_by_id("A".to_string()).await.unwrap(),
        Some(saved.clone())
    );
    assert_eq!(repos.items().find_all().await.unwrap().len(), 2);

    repos.items().delete(&saved).await.unwrap();
    assert!(repos
        .items()
        .find_by_id("A".to_string())
        .await
        .unwrap()
        .is_none());
    assert_eq!(repos.items().delete_all().await.unwrap(), 1);
}
