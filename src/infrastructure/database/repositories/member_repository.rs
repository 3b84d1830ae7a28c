//! SeaORM implementation of MemberRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    FromQueryResult, Order as SqlOrder, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    Select, Set, Statement,
};

use super::{single_result, update_err};
use crate::domain::{
    AuditMetadata, AuditingHandler, CrudRepository, DomainError, DomainResult, Member,
    MemberCustomRepository, MemberDto, MemberRepository, ReadOnly, TeamRef, UsernameOnly,
    UsernameOnlyDto,
};
use crate::infrastructure::database::entities::{member, team};
use crate::shared::{Direction, Page, PageRequest, Slice, Sort};

const ENTITY: &str = "Member";

pub struct SeaOrmMemberRepository {
    db: DatabaseConnection,
    auditing: AuditingHandler,
}

impl SeaOrmMemberRepository {
    pub fn new(db: DatabaseConnection, auditing: AuditingHandler) -> Self {
        Self { db, auditing }
    }

    async fn load(&self, query: Select<member::Entity>) -> DomainResult<Vec<Member>> {
        let rows = query.all(&self.db).await?;
        Ok(rows.into_iter().map(|m| model_to_domain(m, None)).collect())
    }

    async fn load_with_team(&self, query: Select<member::Entity>) -> DomainResult<Vec<Member>> {
        let rows = query.find_also_related(team::Entity).all(&self.db).await?;
        Ok(rows
            .into_iter()
            .map(|(m, t)| model_to_domain(m, t))
            .collect())
    }

    async fn load_one(&self, query: Select<member::Entity>) -> DomainResult<Option<Member>> {
        single_result(ENTITY, self.load(query).await?)
    }

    async fn load_page(
        &self,
        query: Select<member::Entity>,
        request: &PageRequest,
        fetch_team: bool,
    ) -> DomainResult<Page<Member>> {
        let total = query.clone().count(&self.db).await?;
        let query = apply_sort(query, request.sort())?
            .offset(request.offset())
            .limit(request.size());
        let content = if fetch_team {
            self.load_with_team(query).await?
        } else {
            self.load(query).await?
        };
        Ok(Page::new(content, request.clone(), total))
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: member::Model, team: Option<team::Model>) -> Member {
    let team_ref = match (m.team_id, team) {
        (Some(id), Some(t)) => Some(TeamRef::loaded(id, t.name)),
        (Some(id), None) => Some(TeamRef::unloaded(id)),
        (None, _) => None,
    };
    restore(m, team_ref)
}

fn restore(m: member::Model, team_ref: Option<TeamRef>) -> Member {
    Member::restore(
        m.id,
        m.username,
        m.age,
        team_ref,
        AuditMetadata::restore(
            m.created_date,
            m.last_modified_date,
            m.created_by,
            m.last_modified_by,
        ),
    )
}

fn domain_to_active(member: &Member) -> member::ActiveModel {
    member::ActiveModel {
        username: Set(member.username().to_string()),
        age: Set(member.age()),
        team_id: Set(member.team_id()),
        created_date: Set(member.audit.created_date()),
        last_modified_date: Set(member.audit.last_modified_date()),
        created_by: Set(member.audit.created_by().map(str::to_string)),
        last_modified_by: Set(member.audit.last_modified_by().map(str::to_string)),
        ..Default::default()
    }
}

/// Map a sort property to its column. Both field names and column names
/// are accepted.
fn sort_column(property: &str) -> DomainResult<member::Column> {
    let column = match property {
        "id" => member::Column::Id,
        "username" => member::Column::Username,
        "age" => member::Column::Age,
        "teamId" | "team_id" | "team.id" => member::Column::TeamId,
        "createdDate" | "created_date" => member::Column::CreatedDate,
        "lastModifiedDate" | "last_modified_date" => member::Column::LastModifiedDate,
        "createdBy" | "created_by" => member::Column::CreatedBy,
        "lastModifiedBy" | "last_modified_by" => member::Column::LastModifiedBy,
        other => {
            return Err(DomainError::Validation(format!(
                "No property '{}' found for type {}",
                other, ENTITY
            )))
        }
    };
    Ok(column)
}

/// Apply `sort`, then the key as tie-breaker so paging is stable.
fn apply_sort(
    mut query: Select<member::Entity>,
    sort: &Sort,
) -> DomainResult<Select<member::Entity>> {
    for order in sort.orders() {
        let direction = match order.direction {
            Direction::Asc => SqlOrder::Asc,
            Direction::Desc => SqlOrder::Desc,
        };
        query = query.order_by(sort_column(&order.property)?, direction);
    }
    Ok(query.order_by_asc(member::Column::Id))
}

fn by_username(username: &str) -> Select<member::Entity> {
    member::Entity::find()
        .filter(member::Column::Username.eq(username))
        .order_by_asc(member::Column::Id)
}

#[derive(Debug, FromQueryResult)]
struct MemberDtoRow {
    id: i64,
    username: String,
    team_name: String,
}

// ── CrudRepository impl ─────────────────────────────────────────

#[async_trait]
impl CrudRepository<Member, i64> for SeaOrmMemberRepository {
    async fn save(&self, mut entity: Member) -> DomainResult<Member> {
        self.auditing.mark_for_save(&mut entity);
        let mut active = domain_to_active(&entity);

        let model = match entity.id() {
            None => {
                debug!("Inserting member: {}", entity.username());
                active.insert(&self.db).await?
            }
            Some(id) => {
                debug!("Updating member: {}", id);
                active.id = Set(id);
                active
                    .update(&self.db)
                    .await
                    .map_err(update_err(ENTITY, id))?
            }
        };

        // The team reference is kept as given so a loaded name survives.
        Ok(restore(model, entity.team().cloned()))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Member>> {
        let model = member::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(|m| model_to_domain(m, None)))
    }

    async fn find_all(&self) -> DomainResult<Vec<Member>> {
        self.load(member::Entity::find().order_by_asc(member::Column::Id))
            .await
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(member::Entity::find().count(&self.db).await?)
    }

    async fn delete(&self, entity: &Member) -> DomainResult<()> {
        if let Some(id) = entity.id() {
            debug!("Deleting member: {}", id);
            member::Entity::delete_by_id(id).exec(&self.db).await?;
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        let result = member::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(ENTITY, "id", id));
        }
        Ok(())
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = member::Entity::delete_many().exec(&self.db).await?;
        debug!("Deleted {} members", result.rows_affected);
        Ok(result.rows_affected)
    }
}

// ── MemberCustomRepository impl ─────────────────────────────────

#[async_trait]
impl MemberCustomRepository for SeaOrmMemberRepository {
    async fn find_member_custom(&self) -> DomainResult<Vec<Member>> {
        let stmt = Statement::from_string(
            self.db.get_database_backend(),
            "SELECT * FROM members ORDER BY id",
        );
        let rows = member::Entity::find()
            .from_raw_sql(stmt)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|m| model_to_domain(m, None)).collect())
    }
}

// ── MemberRepository impl ───────────────────────────────────────

#[async_trait]
impl MemberRepository for SeaOrmMemberRepository {
    async fn find_all_page(&self, request: &PageRequest) -> DomainResult<Page<Member>> {
        self.load_page(member::Entity::find(), request, true).await
    }

    async fn find_by_username_and_age_greater_than(
        &self,
        username: &str,
        age: i32,
    ) -> DomainResult<Vec<Member>> {
        self.load(by_username(username).filter(member::Column::Age.gt(age)))
            .await
    }

    async fn find_top3(&self) -> DomainResult<Vec<Member>> {
        self.load(
            member::Entity::find()
                .order_by_asc(member::Column::Id)
                .limit(3),
        )
        .await
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Vec<Member>> {
        self.load(by_username(username)).await
    }

    async fn find_user(&self, username: &str, age: i32) -> DomainResult<Vec<Member>> {
        self.load(by_username(username).filter(member::Column::Age.eq(age)))
            .await
    }

    async fn find_username_list(&self) -> DomainResult<Vec<String>> {
        let names = member::Entity::find()
            .select_only()
            .column(member::Column::Username)
            .order_by_asc(member::Column::Id)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;
        Ok(names)
    }

    async fn find_member_dto(&self) -> DomainResult<Vec<MemberDto>> {
        let rows = member::Entity::find()
            .select_only()
            .column_as(member::Column::Id, "id")
            .column_as(member::Column::Username, "username")
            .column_as(team::Column::Name, "team_name")
            .inner_join(team::Entity)
            .order_by_asc(member::Column::Id)
            .into_model::<MemberDtoRow>()
            .all(&self.db)
            .await?;
        Ok(rows
            .into_iter()
            .map(|r| MemberDto::new(r.id, r.username, Some(r.team_name)))
            .collect())
    }

    async fn find_by_names(&self, names: &[String]) -> DomainResult<Vec<Member>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }
        self.load(
            member::Entity::find()
                .filter(member::Column::Username.is_in(names.iter().cloned()))
                .order_by_asc(member::Column::Id),
        )
        .await
    }

    async fn find_list_by_username(&self, username: &str) -> DomainResult<Vec<Member>> {
        self.load(by_username(username)).await
    }

    async fn find_member_by_username(&self, username: &str) -> DomainResult<Option<Member>> {
        self.load_one(by_username(username)).await
    }

    async fn find_optional_by_username(&self, username: &str) -> DomainResult<Option<Member>> {
        self.load_one(by_username(username)).await
    }

    async fn find_by_age(&self, age: i32, request: &PageRequest) -> DomainResult<Page<Member>> {
        let query = member::Entity::find().filter(member::Column::Age.eq(age));
        self.load_page(query, request, false).await
    }

    async fn find_slice_by_age(
        &self,
        age: i32,
        request: &PageRequest,
    ) -> DomainResult<Slice<Member>> {
        let query = member::Entity::find().filter(member::Column::Age.eq(age));
        let rows = self
            .load(
                apply_sort(query, request.sort())?
                    .offset(request.offset())
                    .limit(request.size().saturating_add(1)),
            )
            .await?;
        Ok(Slice::from_overfetch(rows, request.clone()))
    }

    async fn bulk_age_plus(&self, age: i32) -> DomainResult<u64> {
        let result = member::Entity::update_many()
            .col_expr(member::Column::Age, Expr::col(member::Column::Age).add(1))
            .filter(member::Column::Age.gte(age))
            .exec(&self.db)
            .await?;
        debug!(
            "Bulk age update for age >= {}: {} rows",
            age, result.rows_affected
        );
        Ok(result.rows_affected)
    }

    async fn find_member_fetch_join(&self) -> DomainResult<Vec<Member>> {
        self.load_with_team(
            member::Entity::find()
                .filter(team::Column::Id.is_not_null())
                .order_by_asc(member::Column::Id),
        )
        .await
    }

    async fn find_member_entity_graph(&self) -> DomainResult<Vec<Member>> {
        self.load_with_team(member::Entity::find().order_by_asc(member::Column::Id))
            .await
    }

    async fn find_entity_graph_by_username(&self, username: &str) -> DomainResult<Vec<Member>> {
        self.load_with_team(by_username(username)).await
    }

    async fn find_read_only_by_username(
        &self,
        username: &str,
    ) -> DomainResult<Option<ReadOnly<Member>>> {
        Ok(self
            .load_one(by_username(username))
            .await?
            .map(ReadOnly::new))
    }

    async fn find_lock_by_username(&self, username: &str) -> DomainResult<Vec<Member>> {
        self.load(by_username(username).lock_shared()).await
    }

    async fn find_projections_by_username(
        &self,
        username: &str,
    ) -> DomainResult<Vec<UsernameOnly>> {
        let members = self.load(by_username(username)).await?;
        Ok(members.iter().map(UsernameOnly::from_member).collect())
    }

    async fn find_username_only_by_username(
        &self,
        username: &str,
    ) -> DomainResult<Vec<UsernameOnlyDto>> {
        let names = by_username(username)
            .select_only()
            .column(member::Column::Username)
            .into_tuple::<String>()
            .all(&self.db)
            .await?;
        Ok(names.into_iter().map(UsernameOnlyDto::new).collect())
    }
}
