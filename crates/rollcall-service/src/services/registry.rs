//! Registry service
//!
//! Manages the standing member roster: registration with duplicate
//! detection, removal, listing, and live roster subscriptions.

use tracing::{info, instrument};

use rollcall_core::{DocumentId, DomainError, Member, MemberRole, NewMember, RosterWatch};

use crate::dto::NewMemberRequest;

use super::context::ServiceContext;
use super::error::ServiceResult;
use validator::Validate;

/// Registry service
pub struct RegistryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RegistryService<'a> {
    /// Create a new RegistryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new roster member
    ///
    /// The name is canonicalized (title-cased, whitespace-collapsed)
    /// before the duplicate check, so "budi santoso" and " BUDI
    /// Santoso " collide. The check and the insert are two separate
    /// store operations; concurrent registrations of the same name can
    /// both pass the check and both land.
    #[instrument(skip(self, request))]
    pub async fn add_member(&self, request: NewMemberRequest) -> ServiceResult<Member> {
        request.validate()?;

        if request.name.trim().is_empty() {
            return Err(DomainError::validation("Name must not be empty").into());
        }
        if request.role == MemberRole::Officer
            && request
                .category
                .as_deref()
                .is_none_or(|c| c.trim().is_empty())
        {
            return Err(DomainError::validation("Officers must have a category").into());
        }

        let draft = NewMember::new(
            &request.name,
            request.role,
            request.category.as_deref(),
            request.default_status,
        );

        if let Some(existing) = self
            .ctx
            .member_repo()
            .find_by_normalized_name(&draft.normalized_name)
            .await?
        {
            return Err(DomainError::DuplicateName {
                name: existing.name,
                role: existing.role,
                category: existing.category,
            }
            .into());
        }

        let member = self.ctx.member_repo().insert(draft).await?;

        info!(member_id = %member.id, name = %member.name, role = %member.role, "Member registered");

        Ok(member)
    }

    /// Remove a member from the roster
    ///
    /// Idempotent: removing an unknown or already-removed id succeeds.
    /// Snapshots previously archived from this member are untouched,
    /// and the freed name becomes registerable again immediately.
    #[instrument(skip(self))]
    pub async fn remove_member(&self, id: DocumentId) -> ServiceResult<()> {
        self.ctx.member_repo().delete(id).await?;

        info!(member_id = %id, "Member removed");

        Ok(())
    }

    /// Get the full roster, sorted by display name
    #[instrument(skip(self))]
    pub async fn list_members(&self) -> ServiceResult<Vec<Member>> {
        let mut members = self.ctx.member_repo().list().await?;
        members.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(members)
    }

    /// Find one member by id
    #[instrument(skip(self))]
    pub async fn get_member(&self, id: DocumentId) -> ServiceResult<Option<Member>> {
        Ok(self.ctx.member_repo().find_by_id(id).await?)
    }

    /// Subscribe to the roster; each update carries the full list
    #[instrument(skip(self))]
    pub async fn watch_members(&self) -> ServiceResult<RosterWatch> {
        Ok(self.ctx.member_repo().watch().await?)
    }
}
