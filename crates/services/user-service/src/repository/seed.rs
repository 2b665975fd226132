use domain::{User, UserRole};

/// Records every seeded store starts with.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Tyler", 26, UserRole::Teacher),
        User::new(2, "John", 33, UserRole::Student),
        User::new(3, "Stan", 50, UserRole::Admin),
    ]
}
