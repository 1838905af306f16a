use super::{ApiClient, ApiError};
use crate::types::AdminUser;

impl ApiClient {
    pub async fn get_all_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.get_data("/admin/users").await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/users/{user_id}")).await
    }
}
