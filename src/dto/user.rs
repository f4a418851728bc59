//! DTOs describing user accounts for admins and the CLIs.

use serde::Serialize;

use crate::domain::types::Role;
use crate::domain::user::User;

/// Totals printed under the user listing.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct UserSummary {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub admins: usize,
    pub stylers: usize,
    pub partners: usize,
}

impl UserSummary {
    pub fn from_users(users: &[User]) -> Self {
        users.iter().fold(Self::default(), |mut summary, user| {
            summary.total += 1;
            if user.is_approved {
                summary.approved += 1;
            } else {
                summary.pending += 1;
            }
            match user.role {
                Role::Admin => summary.admins += 1,
                Role::Styler => summary.stylers += 1,
                Role::Partner => summary.partners += 1,
            }
            summary
        })
    }
}

/// Result of approving an account by email.
#[derive(Debug)]
pub enum ApprovalOutcome {
    Approved(User),
    AlreadyApproved(User),
}
