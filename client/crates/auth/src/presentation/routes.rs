//! Route Table
//!
//! Every navigable view of the application, with the role each one
//! requires. The guard consults this table; nothing else hardcodes paths.

use crate::domain::value_object::role::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    // Public
    Login,
    Signup,
    Verification,
    /// Root path, always forwarded to the login view
    Root,

    // Owner
    OwnerDashboard,
    OwnerAddStudent,
    OwnerStudents,
    OwnerLibraryInfo,
    OwnerNotifications,
    OwnerProfile,

    // Student
    StudentDashboard,
    StudentMyLibrary,
    StudentBooks,
    StudentPaymentHistory,
    StudentWishlist,
    StudentUpgradePlan,
    StudentUpdatePayment,
    StudentCompletedBooks,
    StudentCurrentlyReading,
    StudentProfile,

    // Any authenticated role
    Support,
    BookReader { book_id: String },
}

impl Route {
    /// Canonical path of the route
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Verification => "/otp-verification".to_string(),
            Route::Root => "/".to_string(),
            Route::OwnerDashboard => "/owner/dashboard".to_string(),
            Route::OwnerAddStudent => "/owner/add-student".to_string(),
            Route::OwnerStudents => "/owner/students".to_string(),
            Route::OwnerLibraryInfo => "/owner/library-info".to_string(),
            Route::OwnerNotifications => "/owner/notifications".to_string(),
            Route::OwnerProfile => "/owner/profile".to_string(),
            Route::StudentDashboard => "/student/dashboard".to_string(),
            Route::StudentMyLibrary => "/student/my-library".to_string(),
            Route::StudentBooks => "/student/books".to_string(),
            Route::StudentPaymentHistory => "/student/payment-history".to_string(),
            Route::StudentWishlist => "/student/wishlist".to_string(),
            Route::StudentUpgradePlan => "/student/upgrade-plan".to_string(),
            Route::StudentUpdatePayment => "/student/update-payment".to_string(),
            Route::StudentCompletedBooks => "/student/completed-books".to_string(),
            Route::StudentCurrentlyReading => "/student/currently-reading".to_string(),
            Route::StudentProfile => "/student/profile".to_string(),
            Route::Support => "/support".to_string(),
            Route::BookReader { book_id } => format!("/book-reader/{}", book_id),
        }
    }

    /// Parse a path into a route, or `None` for unknown paths
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };

        if let Some(book_id) = path.strip_prefix("/book-reader/") {
            if book_id.is_empty() || book_id.contains('/') {
                return None;
            }
            return Some(Route::BookReader {
                book_id: book_id.to_string(),
            });
        }

        match path {
            "/" => Some(Route::Root),
            "/login" => Some(Route::Login),
            "/signup" => Some(Route::Signup),
            "/otp-verification" => Some(Route::Verification),
            "/owner/dashboard" => Some(Route::OwnerDashboard),
            "/owner/add-student" => Some(Route::OwnerAddStudent),
            "/owner/students" => Some(Route::OwnerStudents),
            "/owner/library-info" => Some(Route::OwnerLibraryInfo),
            "/owner/notifications" => Some(Route::OwnerNotifications),
            "/owner/profile" => Some(Route::OwnerProfile),
            "/student/dashboard" => Some(Route::StudentDashboard),
            "/student/my-library" => Some(Route::StudentMyLibrary),
            "/student/books" => Some(Route::StudentBooks),
            "/student/payment-history" => Some(Route::StudentPaymentHistory),
            "/student/wishlist" => Some(Route::StudentWishlist),
            "/student/upgrade-plan" => Some(Route::StudentUpgradePlan),
            "/student/update-payment" => Some(Route::StudentUpdatePayment),
            "/student/completed-books" => Some(Route::StudentCompletedBooks),
            "/student/currently-reading" => Some(Route::StudentCurrentlyReading),
            "/student/profile" => Some(Route::StudentProfile),
            "/support" => Some(Route::Support),
            _ => None,
        }
    }

    /// Role required to view the route; `None` means no specific role
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::OwnerDashboard
            | Route::OwnerAddStudent
            | Route::OwnerStudents
            | Route::OwnerLibraryInfo
            | Route::OwnerNotifications
            | Route::OwnerProfile => Some(Role::Owner),
            Route::StudentDashboard
            | Route::StudentMyLibrary
            | Route::StudentBooks
            | Route::StudentPaymentHistory
            | Route::StudentWishlist
            | Route::StudentUpgradePlan
            | Route::StudentUpdatePayment
            | Route::StudentCompletedBooks
            | Route::StudentCurrentlyReading
            | Route::StudentProfile => Some(Role::Student),
            _ => None,
        }
    }

    /// Whether the route is reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Route::Login | Route::Signup | Route::Verification | Route::Root
        )
    }

    /// The landing view for a role
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Owner => Route::OwnerDashboard,
            Role::Student => Route::StudentDashboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trips() {
        let routes = [
            Route::Login,
            Route::Signup,
            Route::Verification,
            Route::Root,
            Route::OwnerDashboard,
            Route::OwnerStudents,
            Route::StudentDashboard,
            Route::StudentWishlist,
            Route::Support,
            Route::BookReader {
                book_id: "book-42".to_string(),
            },
        ];
        for route in routes {
            assert_eq!(Route::from_path(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::from_path("/admin"), None);
        assert_eq!(Route::from_path("/book-reader/"), None);
        assert_eq!(Route::from_path("/book-reader/a/b"), None);
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        assert_eq!(Route::from_path("/login/"), Some(Route::Login));
        assert_eq!(Route::from_path("/"), Some(Route::Root));
    }

    #[test]
    fn test_required_roles() {
        assert_eq!(Route::OwnerDashboard.required_role(), Some(Role::Owner));
        assert_eq!(Route::StudentBooks.required_role(), Some(Role::Student));
        assert_eq!(Route::Support.required_role(), None);
        assert_eq!(
            Route::BookReader {
                book_id: "b1".to_string()
            }
            .required_role(),
            None
        );
        assert_eq!(Route::Login.required_role(), None);
    }

    #[test]
    fn test_public_routes() {
        assert!(Route::Login.is_public());
        assert!(Route::Root.is_public());
        assert!(!Route::Support.is_public());
        assert!(!Route::StudentDashboard.is_public());
    }

    #[test]
    fn test_home_for_role() {
        assert_eq!(Route::home_for(Role::Owner), Route::OwnerDashboard);
        assert_eq!(Route::home_for(Role::Student), Route::StudentDashboard);
    }
}
