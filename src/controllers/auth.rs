use crate::auth::{verify_password, TokenKeys};
use crate::error::AppError;
use crate::models::{LoginInput, NewUser, User, UserInput};
use crate::store::Store;

pub const UNKNOWN_USER_MESSAGE: &str = "User does not exist or invalid credentials.";
pub const BAD_PASSWORD_MESSAGE: &str = "Invalid credentials.";

/// Registers an account and issues its first token.
///
/// The password is hashed before the store is touched; if hashing fails
/// nothing is written.
pub async fn sign_up(
    store: &dyn Store,
    tokens: &TokenKeys,
    input: UserInput,
) -> Result<(String, User), AppError> {
    let new_user = NewUser::new(input)?;
    let user = store.insert_user(new_user).await?;
    let token = tokens.issue(user.id)?;
    log::info!("Registered user {}", user.id);
    Ok((token, user))
}

/// Checks an email/password pair and issues a token.
pub async fn login(
    store: &dyn Store,
    tokens: &TokenKeys,
    input: LoginInput,
) -> Result<(String, User), AppError> {
    let (email, password) = input.into_credentials()?;

    let user = store
        .find_user_by_email(&email)
        .await?
        .ok_or_else(|| AppError::Unauthorized(UNKNOWN_USER_MESSAGE.into()))?;

    if !verify_password(&password, &user.password) {
        log::debug!("Wrong password for user {}", user.id);
        return Err(AppError::Unauthorized(BAD_PASSWORD_MESSAGE.into()));
    }

    let token = tokens.issue(user.id)?;
    Ok((token, user))
}
