mod common;

use member_service::domain::{
    CrudRepository, DomainError, Member, MemberDto, MemberRepository, RepositoryProvider, Team,
    UsernameOnlyDto,
};
use member_service::shared::{Direction, PageRequest, Sort};

use common::setup_repos;

async fn save_all(members: &dyn MemberRepository, rows: &[(&str, i32)]) -> Vec<Member> {
    let mut saved = Vec::new();
    for (username, age) in rows {
        saved.push(
            members
                .save(Member::with_age(*username, *age))
                .await
                .unwrap(),
        );
    }
    saved
}

#[tokio::test]
async fn save_then_find_by_id() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();

    let saved = members.save(Member::new("memberA")).await.unwrap();
    let id = saved.id().expect("saved member has id");

    let found = members.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.id(), saved.id());
    assert_eq!(found.username(), "memberA");
    assert_eq!(found, saved);
}

#[tokio::test]
async fn basic_crud() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();

    let member1 = members.save(Member::new("member1")).await.unwrap();
    let member2 = members.save(Member::new("member2")).await.unwrap();

    assert_eq!(
        members.find_by_id(member1.id().unwrap()).await.unwrap(),
        Some(member1.clone())
    );
    assert_eq!(
        members.find_by_id(member2.id().unwrap()).await.unwrap(),
        Some(member2.clone())
    );

    assert_eq!(members.find_all().await.unwrap().len(), 2);
    assert_eq!(members.count().await.unwrap(), 2);

    members.delete(&member1).await.unwrap();
    members.delete(&member2).await.unwrap();
    assert_eq!(members.count().await.unwrap(), 0);
}

#[tokio::test]
async fn update_existing_member() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();

    let mut member = members.save(Member::with_age("member1", 10)).await.unwrap();
    member.set_username("renamed");
    member.set_age(11);
    members.save(member.clone()).await.unwrap();

    assert_eq!(members.count().await.unwrap(), 1);
    let found = members.find_by_id(member.id().unwrap()).await.unwrap().unwrap();
    assert_eq!(found.username(), "renamed");
    assert_eq!(found.age(), 11);
}

#[tokio::test]
async fn delete_by_id_and_delete_all() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    let saved = save_all(members, &[("a", 1), ("b", 2), ("c", 3)]).await;

    members.delete_by_id(saved[0].id().unwrap()).await.unwrap();
    assert!(matches!(
        members.delete_by_id(saved[0].id().unwrap()).await,
        Err(DomainError::NotFound { .. })
    ));

    assert_eq!(members.delete_all().await.unwrap(), 2);
    assert_eq!(members.count().await.unwrap(), 0);
}

#[tokio::test]
async fn find_by_username_and_age_greater_than() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    save_all(members, &[("AAA", 10), ("AAA", 20)]).await;

    let result = members
        .find_by_username_and_age_greater_than("AAA", 15)
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].username(), "AAA");
    assert_eq!(result[0].age(), 20);
}

#[tokio::test]
async fn find_top3_returns_first_three() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    let saved = save_all(members, &[("a", 1), ("b", 2), ("c", 3), ("d", 4)]).await;

    let top = members.find_top3().await.unwrap();
    assert_eq!(top, saved[..3].to_vec());
}

#[tokio::test]
async fn find_by_username_and_find_user() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    let saved = save_all(members, &[("AAA", 10), ("AAA", 20)]).await;

    let by_name = members.find_by_username("AAA").await.unwrap();
    assert_eq!(by_name[0], saved[0]);

    let user = members.find_user("AAA", 10).await.unwrap();
    assert_eq!(user, vec![saved[0].clone()]);
}

#[tokio::test]
async fn find_username_list() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    save_all(members, &[("AAA", 10), ("BBB", 20)]).await;

    assert_eq!(
        members.find_username_list().await.unwrap(),
        vec!["AAA".to_string(), "BBB".to_string()]
    );
}

#[tokio::test]
async fn find_member_dto_joins_team_name() {
    let (_db, repos) = setup_repos().await;
    let mut team = repos.teams().save(Team::new("teamA")).await.unwrap();

    let m1 = repos
        .members()
        .save(Member::with_team("AAA", 10, &mut team).unwrap())
        .await
        .unwrap();
    repos
        .members()
        .save(Member::with_team("BBB", 20, &mut team).unwrap())
        .await
        .unwrap();
    // Members without a team are left out of the inner join
    repos.members().save(Member::new("CCC")).await.unwrap();

    let dtos = repos.members().find_member_dto().await.unwrap();

    assert_eq!(dtos.len(), 2);
    assert_eq!(
        dtos[0],
        MemberDto::new(m1.id().unwrap(), "AAA", Some("teamA".into()))
    );
}

#[tokio::test]
async fn find_by_names() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    let saved = save_all(members, &[("AAA", 10), ("BBB", 20), ("CCC", 30)]).await;

    let result = members
        .find_by_names(&["AAA".to_string(), "CCC".to_string()])
        .await
        .unwrap();
    assert_eq!(result, vec![saved[0].clone(), saved[2].clone()]);

    assert!(members.find_by_names(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn various_return_types() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    let saved = save_all(members, &[("AAA", 10)]).await;

    assert_eq!(members.find_list_by_username("AAA").await.unwrap(), saved);
    assert_eq!(
        members.find_member_by_username("AAA").await.unwrap(),
        Some(saved[0].clone())
    );
    assert_eq!(
        members.find_optional_by_username("AAA").await.unwrap(),
        Some(saved[0].clone())
    );

    assert!(members
        .find_list_by_username("asdasdwqf")
        .await
        .unwrap()
        .is_empty());
    assert_eq!(members.find_member_by_username("asdasdwqf").await.unwrap(), None);
    assert_eq!(
        members.find_optional_by_username("asdasdwqf").await.unwrap(),
        None
    );
}

#[tokio::test]
async fn single_result_with_duplicates_is_an_error() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    save_all(members, &[("AAA", 10), ("AAA", 20)]).await;

    let result = members.find_optional_by_username("AAA").await;
    assert!(matches!(
        result,
        Err(DomainError::IncorrectResultSize { actual: 2, .. })
    ));
}

#[tokio::test]
async fn paging_by_age() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    save_all(
        members,
        &[
            ("member1", 10),
            ("member2", 10),
            ("member3", 10),
            ("member4", 10),
            ("member5", 10),
        ],
    )
    .await;

    let request =
        PageRequest::with_sort(0, 3, Sort::by(Direction::Desc, &["username"])).unwrap();

    let page = members.find_by_age(10, &request).await.unwrap();
    let slice = members.find_slice_by_age(10, &request).await.unwrap();

    assert_eq!(page.content().len(), 3);
    assert_eq!(page.total_elements(), 5);
    assert_eq!(page.number(), 0);
    assert_eq!(page.total_pages(), 2);
    assert!(page.is_first());
    assert!(page.has_next());
    assert_eq!(page.content()[0].username(), "member5");

    assert_eq!(slice.content().len(), 3);
    assert_eq!(slice.number(), 0);
    assert!(slice.is_first());
    assert!(slice.has_next());

    let dtos = page.map(|m| MemberDto::new(m.id().unwrap(), m.username(), None));
    assert_eq!(dtos.content().len(), 3);
    assert_eq!(dtos.total_elements(), 5);
    assert_eq!(dtos.total_pages(), 2);
    assert!(dtos.has_next());
}

#[tokio::test]
async fn last_slice_has_no_next() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    save_all(members, &[("a", 10), ("b", 10), ("c", 10), ("d", 10)]).await;

    let slice = members
        .find_slice_by_age(10, &PageRequest::of(1, 3).unwrap())
        .await
        .unwrap();

    assert_eq!(slice.content().len(), 1);
    assert!(!slice.has_next());
    assert!(slice.has_previous());
}

#[tokio::test]
async fn slice_with_largest_page_size_returns_everything() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    save_all(members, &[("a", 10), ("b", 10), ("c", 20)]).await;

    let request = PageRequest::of(0, i64::MAX as u64 - 1).unwrap();
    let slice = members.find_slice_by_age(10, &request).await.unwrap();

    assert_eq!(slice.content().len(), 2);
    assert!(!slice.has_next());
}

#[tokio::test]
async fn last_representable_page_is_empty() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    save_all(members, &[("a", 10), ("b", 10)]).await;

    let request = PageRequest::of(i64::MAX as u64, 1).unwrap();
    let page = members.find_all_page(&request).await.unwrap();

    assert!(page.is_empty());
    assert_eq!(page.total_elements(), 2);
    assert!(page.is_last());
}

#[tokio::test]
async fn unknown_sort_property_is_rejected() {
    let (_db, repos) = setup_repos().await;
    let request = PageRequest::with_sort(0, 3, Sort::by(Direction::Asc, &["password"])).unwrap();

    let result = repos.members().find_all_page(&request).await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn bulk_age_plus_updates_matching_rows() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    save_all(
        members,
        &[
            ("member1", 10),
            ("member2", 19),
            ("member3", 20),
            ("member4", 21),
            ("member5", 40),
        ],
    )
    .await;

    let updated = members.bulk_age_plus(20).await.unwrap();

    assert_eq!(updated, 3);
    assert_eq!(members.find_by_username("member5").await.unwrap()[0].age(), 41);
    assert_eq!(members.find_by_username("member2").await.unwrap()[0].age(), 19);
}

#[tokio::test]
async fn fetch_join_and_entity_graph_load_team_names() {
    let (_db, repos) = setup_repos().await;
    let mut team_a = repos.teams().save(Team::new("teamA")).await.unwrap();
    let mut team_b = repos.teams().save(Team::new("teamB")).await.unwrap();

    repos
        .members()
        .save(Member::with_team("member1", 10, &mut team_a).unwrap())
        .await
        .unwrap();
    repos
        .members()
        .save(Member::with_team("member2", 20, &mut team_b).unwrap())
        .await
        .unwrap();
    repos.members().save(Member::new("loner")).await.unwrap();

    // Plain loads only know the team key
    let plain = repos.members().find_all().await.unwrap();
    assert!(plain[0].team().is_some_and(|t| !t.is_loaded()));

    let fetched = repos.members().find_member_fetch_join().await.unwrap();
    assert_eq!(fetched.len(), 2);
    assert_eq!(fetched[0].team().and_then(|t| t.name()), Some("teamA"));
    assert_eq!(fetched[1].team().and_then(|t| t.name()), Some("teamB"));

    let graph = repos.members().find_member_entity_graph().await.unwrap();
    assert_eq!(graph.len(), 3);
    assert!(graph[2].team().is_none());

    let by_name = repos
        .members()
        .find_entity_graph_by_username("member2")
        .await
        .unwrap();
    assert_eq!(by_name[0].team().and_then(|t| t.name()), Some("teamB"));
}

#[tokio::test]
async fn read_only_copy_is_never_written() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    save_all(members, &[("member1", 10)]).await;

    let read_only = members
        .find_read_only_by_username("member1")
        .await
        .unwrap()
        .unwrap();
    let mut detached = read_only.into_detached();
    detached.set_username("member2");

    assert_eq!(members.find_by_username("member2").await.unwrap().len(), 0);
    assert_eq!(members.find_by_username("member1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn lock_query_returns_rows() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    save_all(members, &[("member1", 10)]).await;

    let locked = members.find_lock_by_username("member1").await.unwrap();
    assert_eq!(locked.len(), 1);
}

#[tokio::test]
async fn projections() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    save_all(members, &[("m1", 0), ("m2", 0)]).await;

    let open = members.find_projections_by_username("m1").await.unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].username(), "m1 0");

    let closed = members.find_username_only_by_username("m1").await.unwrap();
    assert_eq!(closed, vec![UsernameOnlyDto::new("m1")]);
}

#[tokio::test]
async fn custom_query_loads_every_member() {
    let (_db, repos) = setup_repos().await;
    let members = repos.members();
    let saved = save_all(members, &[("a", 1), ("b", 2)]).await;

    assert_eq!(members.find_member_custom().await.unwrap(), saved);
}
