use serde::{Deserialize, Serialize};

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Error: Query execution failed.";

#[derive(Serialize, Deserialize)]
pub struct SuccessResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
