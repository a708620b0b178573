//! Ownership checks for member-owned resources.

use super::session::AuthenticatedIdentity;
use crate::{IaiqError, Result};

/// A resource with an owning member.
pub trait OwnedResource {
    /// ID of the owning member.
    fn owner_id(&self) -> i64;
}

/// Fail with `NotResourceOwner` unless `identity` owns the resource.
///
/// Called before every edit or delete. Reads do not go through here.
pub fn require_ownership(identity: &AuthenticatedIdentity, resource_owner_id: i64) -> Result<()> {
    if identity.member_id() != resource_owner_id {
        tracing::info!(
            "Member {} denied on resource owned by {}",
            identity.member_id(),
            resource_owner_id
        );
        return Err(IaiqError::NotResourceOwner {
            actor_id: identity.member_id(),
        });
    }
    Ok(())
}

/// [`require_ownership`] for any [`OwnedResource`].
pub fn require_owner_of<R: OwnedResource>(identity: &AuthenticatedIdentity, resource: &R) -> Result<()> {
    require_ownership(identity, resource.owner_id())
}
