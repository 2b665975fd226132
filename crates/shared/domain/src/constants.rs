//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Role for teaching staff
pub const ROLE_TEACHER: &str = "TEACHER";

/// Role for enrolled students
pub const ROLE_STUDENT: &str = "STUDENT";

/// Administrator role
pub const ROLE_ADMIN: &str = "ADMIN";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_TEACHER, ROLE_STUDENT, ROLE_ADMIN];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Messages
// =============================================================================

/// Message carried by a lookup on a missing user id
pub const USER_NOT_FOUND_MESSAGE: &str = "user with that id not found";
