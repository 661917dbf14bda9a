use std::sync::Arc;

use crate::core::error::Result;
use crate::features::users::clients::BackendUsersClient;

/// Resolves the pool of users eligible to own a warehouse
pub struct OwnerService {
    users_client: Arc<BackendUsersClient>,
}

impl OwnerService {
    pub fn new(users_client: Arc<BackendUsersClient>) -> Self {
        Self { users_client }
    }

    /// Ids of all users with the `owner` role, in listing order.
    /// Empty when the listing is unavailable.
    pub async fn resolve_owner_pool(&self) -> Result<Vec<i64>> {
        let Some(users) = self.users_client.list_users().await? else {
            return Ok(Vec::new());
        };

        let owners: Vec<i64> = users
            .iter()
            .filter(|user| user.is_owner())
            .filter_map(|user| {
                if user.user_id.is_none() {
                    tracing::warn!("Skipping owner without userId: {:?}", user.name);
                }
                user.user_id
            })
            .collect();

        tracing::debug!("{} of {} users are owners", owners.len(), users.len());

        Ok(owners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::backend_user;
    use serde_json::json;

    async fn resolve(server: &mockito::Server) -> Vec<i64> {
        let client = BackendUsersClient::new(reqwest::Client::new(), server.url());
        OwnerService::new(Arc::new(client))
            .resolve_owner_pool()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_only_owner_ids_are_returned() {
        let mut server = mockito::Server::new_async().await;
        let users = json!([
            backend_user(1, "admin"),
            backend_user(2, "owner"),
            backend_user(3, "customer"),
            backend_user(4, "owner"),
            backend_user(5, "auditor"),
        ]);
        let mock = server
            .mock("GET", "/users")
            .with_status(200)
            .with_body(users.to_string())
            .create_async()
            .await;

        assert_eq!(resolve(&server).await, vec![2, 4]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_null_role_and_missing_ids_are_tolerated() {
        let mut server = mockito::Server::new_async().await;
        let users = json!([
            { "userId": 1, "role": null },
            { "userId": 2, "role": "owner" },
            { "role": "customer" },
            { "userId": 3 },
            { "role": "owner", "name": "No Id" },
        ]);
        server
            .mock("GET", "/users")
            .with_status(200)
            .with_body(users.to_string())
            .create_async()
            .await;

        assert_eq!(resolve(&server).await, vec![2]);
    }

    #[tokio::test]
    async fn test_enveloped_user_list() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({ "success": true, "data": [backend_user(9, "owner")] });
        server
            .mock("GET", "/users")
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        assert_eq!(resolve(&server).await, vec![9]);
    }

    #[tokio::test]
    async fn test_empty_user_list_yields_empty_pool() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        assert!(resolve(&server).await.is_empty());
    }

    #[tokio::test]
    async fn test_non_ok_status_yields_empty_pool() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/users")
            .with_status(401)
            .with_body(r#"{"message": "unauthorized"}"#)
            .create_async()
            .await;

        assert!(resolve(&server).await.is_empty());
    }
}
