//! Sample data written on startup

use log::info;

use crate::domain::{DomainError, DomainResult, Member, MemberRepository};

/// Insert `count` members named `user{i}` with age `i`.
///
/// Does nothing when members already exist, so restarts against a file
/// database do not duplicate rows. Returns the number inserted.
pub async fn seed_members(members: &dyn MemberRepository, count: u32) -> DomainResult<u32> {
    let last_age = i32::try_from(count).map_err(|_| {
        DomainError::Validation(format!(
            "Cannot seed {} members, ages stop at {}",
            count,
            i32::MAX
        ))
    })?;

    if members.count().await? > 0 {
        info!("Members already present, skipping seed");
        return Ok(0);
    }

    for age in 0..last_age {
        members
            .save(Member::with_age(format!("user{}", age), age))
            .await?;
    }
    info!("Seeded {} members", count);
    Ok(count)
}
