//! Member Lookup Port
//!
//! Abstract interface for resolving Clubhouse member ids into
//! profiles. Translation uses it for the title's actor name and for
//! owner changes.

use async_trait::async_trait;

use crate::domain::entities::Member;
use crate::domain::errors::DomainError;

/// Member lookup interface
///
/// # Example
///
/// ```rust,ignore
/// use clubhook::ports::MemberLookup;
///
/// struct ClubhouseClient { /* reqwest client + token */ }
///
/// #[async_trait]
/// impl MemberLookup for ClubhouseClient {
///     async fn get_member(&self, member_id: &str) -> Result<Member, DomainError> {
///         // GET /api/v3/members/{member_id}
///     }
/// }
/// ```
#[async_trait]
pub trait MemberLookup: Send + Sync {
    /// Fetch a member by its opaque public id
    ///
    /// Every call goes to the backing API; results are not cached.
    async fn get_member(&self, member_id: &str) -> Result<Member, DomainError>;
}
