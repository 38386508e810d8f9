//! Centralized access policy.
//!
//! All role-based authorization decisions go through [`evaluate`] so the
//! rules live in one place instead of ad-hoc predicates scattered across
//! handlers. Handlers deny with `AppError::Forbidden` when the decision is
//! [`Decision::Deny`].

use uuid::Uuid;

use crate::models::UserRole;

/// Action a subject attempts against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

/// Resource being acted upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// A user account. `None` targets the collection (listing, creating).
    User(Option<Uuid>),
    /// Records created by the upload endpoint.
    CustomMedia,
    /// The standard media collection.
    Media,
    /// The merged gallery view.
    Gallery,
}

/// Policy decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        self == Decision::Allow
    }
}

/// Evaluate whether `subject_id` with `role` may perform `action` on `resource`.
///
/// Rules:
/// - User accounts: admins may do anything; regular users may read and
///   update only their own account. Creating and deleting accounts is
///   admin-only, as is listing the collection.
/// - Media collections and the gallery: any authenticated subject may read;
///   any authenticated subject may create custom media. Records are
///   immutable, so update/delete are denied for everyone.
pub fn evaluate(role: UserRole, subject_id: Uuid, action: Action, resource: Resource) -> Decision {
    match resource {
        Resource::User(target) => match role {
            UserRole::Admin => Decision::Allow,
            UserRole::User => match (action, target) {
                (Action::Read | Action::Update, Some(id)) if id == subject_id => Decision::Allow,
                _ => Decision::Deny,
            },
        },
        Resource::CustomMedia => match action {
            Action::Read | Action::Create => Decision::Allow,
            Action::Update | Action::Delete => Decision::Deny,
        },
        Resource::Media | Resource::Gallery => match action {
            Action::Read => Decision::Allow,
            _ => Decision::Deny,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_manages_users() {
        let admin = Uuid::new_v4();
        let other = Uuid::new_v4();
        for action in [Action::Create, Action::Read, Action::Update, Action::Delete] {
            assert_eq!(
                evaluate(UserRole::Admin, admin, action, Resource::User(Some(other))),
                Decision::Allow
            );
        }
        assert_eq!(
            evaluate(UserRole::Admin, admin, Action::Read, Resource::User(None)),
            Decision::Allow
        );
    }

    #[test]
    fn user_reads_and_updates_only_self() {
        let me = Uuid::new_v4();
        let other = Uuid::new_v4();
        assert_eq!(
            evaluate(UserRole::User, me, Action::Read, Resource::User(Some(me))),
            Decision::Allow
        );
        assert_eq!(
            evaluate(UserRole::User, me, Action::Update, Resource::User(Some(me))),
            Decision::Allow
        );
        assert_eq!(
            evaluate(UserRole::User, me, Action::Read, Resource::User(Some(other))),
            Decision::Deny
        );
        assert_eq!(
            evaluate(UserRole::User, me, Action::Delete, Resource::User(Some(me))),
            Decision::Deny
        );
        assert_eq!(
            evaluate(UserRole::User, me, Action::Create, Resource::User(None)),
            Decision::Deny
        );
        assert_eq!(
            evaluate(UserRole::User, me, Action::Read, Resource::User(None)),
            Decision::Deny
        );
    }

    #[test]
    fn media_is_readable_and_immutable() {
        let me = Uuid::new_v4();
        assert!(evaluate(UserRole::User, me, Action::Read, Resource::Gallery).is_allowed());
        assert!(evaluate(UserRole::User, me, Action::Create, Resource::CustomMedia).is_allowed());
        assert!(!evaluate(UserRole::Admin, me, Action::Delete, Resource::CustomMedia).is_allowed());
        assert!(!evaluate(UserRole::User, me, Action::Create, Resource::Media).is_allowed());
    }
}
