use crate::domain::validation::Validator;
use crate::errors::ServerError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A registered user. The password hash never leaves the db layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl UserInput {
    pub fn validate(self) -> Result<NewUser, ServerError> {
        let mut v = Validator::new();
        let username = v.required_text("username", self.username);
        if let Some(name) = &username {
            v.check(
                (3..=64).contains(&name.chars().count()),
                "username",
                "Must be between 3 and 64 characters",
            );
        }
        let password = v.required("password", self.password);
        if let Some(pw) = &password {
            v.check(pw.len() >= 8, "password", "Must be at least 8 characters");
        }
        v.finish("user")?;

        Ok(NewUser {
            username: username.unwrap_or_default(),
            password: password.unwrap_or_default(),
        })
    }
}
