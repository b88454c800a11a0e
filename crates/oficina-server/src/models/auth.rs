//! Auth DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Admin login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Admin login response
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: String,
}
