use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, Error as ActixError, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::error::AppError;
use crate::models::User;
use crate::state::AppState;

pub const NO_TOKEN_MESSAGE: &str = "Not authorized, no token";
pub const USER_NOT_FOUND_MESSAGE: &str = "Not authorized, user not found";

/// Returns the token of an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header_value: Option<&str>) -> Option<&str> {
    let token = header_value?.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

/// Turns an `Authorization` header into a stored user.
///
/// The token is verified first and the user it names is then re-read from the
/// store, so a token outliving its user is rejected. Every failure is a 401 and
/// ends the request; nothing else is read or written before this returns.
pub async fn resolve_identity(
    state: &AppState,
    authorization: Option<&str>,
) -> Result<User, AppError> {
    let Some(token) = bearer_token(authorization) else {
        log::debug!("Rejected request without a bearer token");
        return Err(AppError::Unauthorized(NO_TOKEN_MESSAGE.into()));
    };

    let user_id = state.tokens.verify(token).map_err(|reason| {
        log::debug!("Rejected bearer token: {}", reason);
        AppError::from(reason)
    })?;

    match state.store.find_user_by_id(user_id).await? {
        Some(user) => Ok(user),
        None => {
            log::debug!("Rejected token for unknown user {}", user_id);
            Err(AppError::Unauthorized(USER_NOT_FOUND_MESSAGE.into()))
        }
    }
}

/// The caller's resolved identity.
///
/// Taking this as a handler argument makes the route require authentication:
/// actix runs [`resolve_identity`] before the handler body and answers 401 on
/// failure. The user is handed to the handler explicitly rather than stashed
/// on the request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let authorization = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                AppError::InternalServerError("AppState is not registered".into())
            })?;
            let user = resolve_identity(&state, authorization.as_deref()).await?;
            Ok(AuthenticatedUser(user))
        })
    }
}
