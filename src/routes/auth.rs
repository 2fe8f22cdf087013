use crate::{
    auth::{AuthResponse, AuthenticatedUser},
    controllers,
    error::AppError,
    models::{LoginInput, UserInput, UserSummary},
    response::ApiResponse,
    state::AppState,
};
use actix_web::{get, post, web, HttpResponse};

/// Register a new user
///
/// Creates a new user account and returns an authentication token.
///
/// ## Responses:
/// - `201 Created`: token plus a summary of the new user.
/// - `400 Bad Request`: a field is missing or invalid, or the email is taken.
#[post("/sign-up")]
pub async fn sign_up(
    state: web::Data<AppState>,
    input: web::Json<UserInput>,
) -> Result<HttpResponse, AppError> {
    let (token, user) =
        controllers::auth::sign_up(state.store.as_ref(), &state.tokens, input.into_inner()).await?;

    Ok(HttpResponse::Created().json(AuthResponse {
        success: true,
        message: "User created successfully".into(),
        token,
        data: UserSummary::from(&user),
    }))
}

/// Login user
///
/// Authenticates a user and returns an authentication token.
///
/// ## Responses:
/// - `200 OK`: token plus a summary of the user.
/// - `400 Bad Request`: email or password missing.
/// - `401 Unauthorized`: unknown email or wrong password.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    input: web::Json<LoginInput>,
) -> Result<HttpResponse, AppError> {
    let (token, user) =
        controllers::auth::login(state.store.as_ref(), &state.tokens, input.into_inner()).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        success: true,
        message: "Login successful".into(),
        token,
        data: UserSummary::from(&user),
    }))
}

/// Returns the full record of the authenticated user, without the password.
#[get("/getMe")]
pub async fn get_me(AuthenticatedUser(user): AuthenticatedUser) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(user))
}
