use crate::entities::User;

/// Exact, case-sensitive username match.
pub fn find_by_username<'a>(users: &'a [User], username: &str) -> Option<&'a User> {
    users.iter().find(|u| u.username == username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_sensitive() {
        let users = vec![User {
            username: "alice".into(),
            password_hash: "00".into(),
        }];
        assert!(find_by_username(&users, "alice").is_some());
        assert!(find_by_username(&users, "Alice").is_none());
    }
}
