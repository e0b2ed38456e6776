//! Account handlers.
//!
//! ```text
//! POST /api/auth/signup {"email":"ada@example.com","password":"pw","name":"Ada"}
//! POST /api/auth/login  {"email":"ada@example.com","password":"pw"}
//! ```
//!
//! No session or token is issued; responses only describe the account.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CredentialsValidationError, Error, LoginCredentials, SignupCredentials};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::missing_fields_error;

const MISSING_CREDENTIALS_MESSAGE: &str = "Email and password are required";
const USER_CREATED_MESSAGE: &str = "User created successfully";

/// Signup request body.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Login email.
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    /// Plain-text password.
    pub password: Option<String>,
    /// Display name; the email is used when omitted.
    #[schema(example = "Ada")]
    pub name: Option<String>,
}

/// Login request body.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Login email.
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    /// Plain-text password.
    pub password: Option<String>,
}

/// Body returned after signup.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponseBody {
    /// Identifier of the new account.
    #[schema(example = "65f1a2b3c4d5e6f708091a2b")]
    pub user_id: String,
    /// Stored display name.
    pub name: String,
    /// Confirmation text.
    #[schema(example = "User created successfully")]
    pub message: String,
}

/// Identity returned after login.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseBody {
    /// Identifier of the account.
    #[schema(example = "65f1a2b3c4d5e6f708091a2b")]
    pub user_id: String,
    /// Stored display name.
    pub name: String,
    /// Stored email.
    pub email: String,
}

fn map_credentials_error(_: CredentialsValidationError) -> Error {
    missing_fields_error(MISSING_CREDENTIALS_MESSAGE, &["email", "password"])
}

/// Register a new account.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created", body = SignupResponseBody),
        (status = 400, description = "Missing fields or email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "signup"
)]
#[post("/auth/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<web::Json<SignupResponseBody>> {
    let SignupRequest {
        email,
        password,
        name,
    } = payload.into_inner();
    let credentials =
        SignupCredentials::try_from_parts(email.as_deref(), password.as_deref(), name.as_deref())
            .map_err(map_credentials_error)?;
    let created = state.auth.signup(credentials).await?;
    Ok(web::Json(SignupResponseBody {
        user_id: created.user_id.to_string(),
        name: created.name,
        message: USER_CREATED_MESSAGE.to_owned(),
    }))
}

/// Check credentials and return the account identity.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponseBody),
        (status = 400, description = "Missing fields", body = Error),
        (status = 401, description = "Invalid email or password", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponseBody>> {
    let LoginRequest { email, password } = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(email.as_deref(), password.as_deref())
        .map_err(map_credentials_error)?;
    let identity = state.auth.login(credentials).await?;
    Ok(web::Json(LoginResponseBody {
        user_id: identity.user_id.to_string(),
        name: identity.name,
        email: identity.email,
    }))
}
