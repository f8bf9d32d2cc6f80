use crate::accounts::Account;
use serde::Serialize;

/// What a presentation layer shows for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub name: String,
    pub initials: String,
}

impl From<&Account> for UserView {
    fn from(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            initials: initials(&account.name),
        }
    }
}

/// Avatar initials: two letters of a single word, otherwise first and last word.
#[must_use]
pub fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();

    match parts.as_slice() {
        [] => String::new(),
        [only] => only.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
    }
}
