mod common;

use member_service::domain::{
    CrudRepository, DomainError, Member, RepositoryProvider, Team, TeamRepository,
};

use common::setup_repos;

#[tokio::test]
async fn save_stamps_created_and_updated_dates() {
    let (_db, repos) = setup_repos().await;

    let team = repos.teams().save(Team::new("teamA")).await.unwrap();

    let created = team.audit.created_date().expect("created date stamped");
    assert_eq!(team.audit.updated_date(), Some(created));
}

#[tokio::test]
async fn update_keeps_created_date() {
    let (_db, repos) = setup_repos().await;
    let mut team = repos.teams().save(Team::new("teamA")).await.unwrap();
    let created = team.audit.created_date();

    team.set_name("teamB");
    let updated = repos.teams().save(team).await.unwrap();

    assert_eq!(updated.name(), "teamB");
    assert_eq!(updated.audit.created_date(), created);
    assert!(updated.audit.updated_date() >= created);
    assert_eq!(repos.teams().count().await.unwrap(), 1);
}

#[tokio::test]
async fn find_by_id_loads_member_back_references() {
    let (_db, repos) = setup_repos().await;
    let mut team = repos.teams().save(Team::new("teamA")).await.unwrap();
    repos
        .members()
        .save(Member::with_team("member1", 10, &mut team).unwrap())
        .await
        .unwrap();
    repos
        .members()
        .save(Member::with_team("member2", 20, &mut team).unwrap())
        .await
        .unwrap();

    let found = repos
        .teams()
        .find_by_id(team.id().unwrap())
        .await
        .unwrap()
        .unwrap();

    let names: Vec<&str> = found.members().iter().map(|m| m.username()).collect();
    assert_eq!(names, vec!["member1", "member2"]);
    assert!(found.members().iter().all(|m| m.id().is_some()));
}

#[tokio::test]
async fn find_by_name() {
    let (_db, repos) = setup_repos().await;
    repos.teams().save(Team::new("teamA")).await.unwrap();

    assert!(repos.teams().find_by_name("teamA").await.unwrap().is_some());
    assert!(repos.teams().find_by_name("nope").await.unwrap().is_none());

    repos.teams().save(Team::new("teamA")).await.unwrap();
    assert!(matches!(
        repos.teams().find_by_name("teamA").await,
        Err(DomainError::IncorrectResultSize { .. })
    ));
}

#[tokio::test]
async fn deleting_team_detaches_members() {
    let (_db, repos) = setup_repos().await;
    let mut team = repos.teams().save(Team::new("teamA")).await.unwrap();
    let member = repos
        .members()
        .save(Member::with_team("member1", 10, &mut team).unwrap())
        .await
        .unwrap();

    repos.teams().delete(&team).await.unwrap();

    assert_eq!(repos.teams().count().await.unwrap(), 0);
    let reloaded = repos
        .members()
        .find_by_id(member.id().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert!(reloaded.team().is_none());
}

#[tokio::test]
async fn updating_missing_team_is_not_found() {
    let (_db, repos) = setup_repos().await;
    let ghost = Team::restore(42, "ghost".into(), Vec::new(), Default::default());

    assert!(matches!(
        repos.teams().save(ghost).await,
        Err(DomainError::NotFound { .. })
    ));
}
