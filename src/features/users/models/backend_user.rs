use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Owner,
    Customer,
    #[serde(other)]
    Other,
}

/// User as listed by `GET /users`. Only owners need an id; role may be null.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct BackendUser {
    pub user_id: Option<i64>,
    #[serde(default)]
    pub role: Option<UserRole>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
}

impl BackendUser {
    pub fn is_owner(&self) -> bool {
        self.role == Some(UserRole::Owner)
    }
}
