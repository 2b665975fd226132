//! User domain entity and related types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN, ROLE_STUDENT, ROLE_TEACHER, VALID_ROLES};
use crate::error::DomainError;

/// Store-assigned user identifier
pub type UserId = i64;

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Teacher,
    Student,
    Admin,
}

impl UserRole {
    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Teacher => ROLE_TEACHER,
            UserRole::Student => ROLE_STUDENT,
            UserRole::Admin => ROLE_ADMIN,
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_TEACHER => Ok(UserRole::Teacher),
            ROLE_STUDENT => Ok(UserRole::Student),
            ROLE_ADMIN => Ok(UserRole::Admin),
            other => Err(DomainError::validation(format!(
                "unknown role '{}', expected one of: {}",
                other,
                VALID_ROLES.join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique user identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: UserId,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Tyler"))]
    pub name: String,
    /// Age in years
    #[cfg_attr(feature = "openapi", schema(example = 26))]
    pub age: i64,
    /// User role
    pub role: UserRole,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, age: i64, role: UserRole) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            role,
        }
    }

    /// Build a record from creation input and a freshly assigned id
    pub fn from_input(id: UserId, input: CreateUser) -> Self {
        Self {
            id,
            name: input.name,
            age: input.age,
            role: input.role,
        }
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    ///
    /// The id is never part of a patch.
    pub fn apply(&mut self, patch: UpdateUser) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub age: i64,
    pub role: UserRole,
}

/// User update data transfer object; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub role: Option<UserRole>,
}

impl UpdateUser {
    /// True when the patch would not change anything
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.role.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tyler() -> User {
        User::new(1, "Tyler", 26, UserRole::Teacher)
    }

    #[test]
    fn test_role_serializes_uppercase() {
        let json = serde_json::to_string(&UserRole::Student).unwrap();
        assert_eq!(json, "\"STUDENT\"");

        let role: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_role_from_str_rejects_unknown() {
        assert_eq!("TEACHER".parse::<UserRole>().unwrap(), UserRole::Teacher);
        assert!(matches!(
            "teacher".parse::<UserRole>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_apply_changes_only_supplied_fields() {
        let mut user = tyler();
        user.apply(UpdateUser {
            age: Some(27),
            ..Default::default()
        });

        assert_eq!(user, User::new(1, "Tyler", 27, UserRole::Teacher));
    }

    #[test]
    fn test_apply_empty_patch_is_noop() {
        let mut user = tyler();
        let patch = UpdateUser::default();
        assert!(patch.is_empty());

        user.apply(patch);
        assert_eq!(user, tyler());
    }

    #[test]
    fn test_user_json_shape() {
        let value = serde_json::to_value(tyler()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Tyler", "age": 26, "role": "TEACHER"})
        );
    }
}
