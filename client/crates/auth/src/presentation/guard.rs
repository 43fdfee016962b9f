//! Route Guard
//!
//! Pure routing decisions: given a route and the current identity, either
//! grant access or name the route to redirect to. No I/O, no state.

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::role::Role;
use crate::presentation::routes::Route;

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(Route),
}

/// Check a role requirement against the current identity.
///
/// Anonymous visitors go to the login view. An authenticated member of
/// the wrong role is sent to their own dashboard, never back to login.
pub fn authorize(required: Option<Role>, identity: Option<&Identity>) -> Access {
    let Some(identity) = identity else {
        return Access::Redirect(Route::Login);
    };

    match required {
        None => Access::Granted,
        Some(role) if identity.role() == role => Access::Granted,
        Some(_) => Access::Redirect(Route::home_for(identity.role())),
    }
}

/// Full routing decision for a route.
///
/// Public routes are always reachable, signed in or not. The root path
/// forwards to login unconditionally.
pub fn guard_route(route: &Route, identity: Option<&Identity>) -> Access {
    if *route == Route::Root {
        return Access::Redirect(Route::Login);
    }

    if route.is_public() {
        return Access::Granted;
    }

    authorize(route.required_role(), identity)
}

/// Routing decision including verification-flow state.
///
/// The verification view only makes sense while a registration is
/// waiting for its code; opened without one, it bounces back to signup.
pub fn guard_view(route: &Route, identity: Option<&Identity>, has_pending: bool) -> Access {
    if *route == Route::Verification && !has_pending {
        return Access::Redirect(Route::Signup);
    }

    guard_route(route, identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::identity::RoleProfile;
    use crate::domain::value_object::{
        display_name::DisplayName, email::Email, library_ref::LibraryRef,
        registration_number::RegistrationNumber,
    };

    fn student() -> Identity {
        Identity::new(
            DisplayName::new("Alice").unwrap(),
            Email::new("alice@example.com").unwrap(),
            None,
            RoleProfile::Student {
                library_id: LibraryRef::new("lib-001"),
                registration_number: RegistrationNumber::new("REG-2024-001").unwrap(),
            },
        )
    }

    fn owner() -> Identity {
        Identity::new(
            DisplayName::new("Bob").unwrap(),
            Email::new("bob@example.com").unwrap(),
            None,
            RoleProfile::Owner,
        )
    }

    #[test]
    fn test_anonymous_redirects_to_login() {
        assert_eq!(
            guard_route(&Route::StudentDashboard, None),
            Access::Redirect(Route::Login)
        );
        assert_eq!(
            guard_route(&Route::Support, None),
            Access::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_wrong_role_redirects_home_not_login() {
        let alice = student();
        assert_eq!(
            guard_route(&Route::OwnerDashboard, Some(&alice)),
            Access::Redirect(Route::StudentDashboard)
        );

        let bob = owner();
        assert_eq!(
            guard_route(&Route::StudentBooks, Some(&bob)),
            Access::Redirect(Route::OwnerDashboard)
        );
    }

    #[test]
    fn test_matching_role_granted() {
        let alice = student();
        assert_eq!(
            guard_route(&Route::StudentDashboard, Some(&alice)),
            Access::Granted
        );

        let bob = owner();
        assert_eq!(
            guard_route(&Route::OwnerStudents, Some(&bob)),
            Access::Granted
        );
    }

    #[test]
    fn test_shared_routes_need_any_session() {
        let alice = student();
        let reader = Route::BookReader {
            book_id: "book-1".to_string(),
        };
        assert_eq!(guard_route(&Route::Support, Some(&alice)), Access::Granted);
        assert_eq!(guard_route(&reader, Some(&owner())), Access::Granted);
        assert_eq!(guard_route(&reader, None), Access::Redirect(Route::Login));
    }

    #[test]
    fn test_public_routes_always_reachable() {
        let alice = student();
        assert_eq!(guard_route(&Route::Login, None), Access::Granted);
        assert_eq!(guard_route(&Route::Signup, Some(&alice)), Access::Granted);
        assert_eq!(guard_route(&Route::Verification, None), Access::Granted);
    }

    #[test]
    fn test_verification_without_pending_redirects_to_signup() {
        assert_eq!(
            guard_view(&Route::Verification, None, false),
            Access::Redirect(Route::Signup)
        );
        assert_eq!(guard_view(&Route::Verification, None, true), Access::Granted);

        // Other routes ignore the pending flag
        assert_eq!(guard_view(&Route::Login, None, false), Access::Granted);
        assert_eq!(guard_view(&Route::Signup, None, false), Access::Granted);
        assert_eq!(
            guard_view(&Route::StudentDashboard, Some(&student()), false),
            Access::Granted
        );
    }

    #[test]
    fn test_root_forwards_to_login() {
        assert_eq!(
            guard_route(&Route::Root, None),
            Access::Redirect(Route::Login)
        );
        assert_eq!(
            guard_route(&Route::Root, Some(&student())),
            Access::Redirect(Route::Login)
        );
    }
}
