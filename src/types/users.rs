use serde::{Deserialize, Serialize};

/// The authenticated caller, inserted into request extensions by the
/// authentication middleware.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentUser {
    pub id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserRegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserLoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct UserRegistered {
    pub message: String,
    pub user_name: String,
}
