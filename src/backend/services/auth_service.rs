// src/backend/services/auth_service.rs
//
// Signup, email verification and signin. Per-account state machine:
// Unverified --(verify_email)--> Verified, no other transitions.
use crate::{
    adapter::Mailer,
    config::AppConfig,
    error::ServiceError,
    models::{PublicUser, UserAccount},
    storage::{users as user_storage, Store},
    utils::crypto::{generate_random_hex_string, hash_password, verify_password},
    utils::jwt::issue_session_token,
    utils::time,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Verification tokens carry 32 bytes of entropy, hex-encoded.
const VERIFICATION_TOKEN_BYTES: usize = 32;

#[derive(Deserialize, Clone, Debug)]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub password: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct SigninOutcome {
    pub user: PublicUser,
    pub token: String,
}

/// Registers a new unverified account and emails its verification link.
///
/// The account is persisted before the email goes out, so a failed dispatch
/// surfaces as a server error while the row stays in place; the original
/// request cannot be replayed past the duplicate-email check.
pub fn signup(
    store: &Store,
    mailer: &dyn Mailer,
    config: &AppConfig,
    data: SignupData,
) -> Result<String, ServiceError> {
    // 1. Reject an already-registered email up front.
    if user_storage::find_by_email(store, &data.email)?.is_some() {
        return Err(ServiceError::DuplicateEmail(data.email));
    }

    // 2. Hash the password and mint the verification token.
    let password_hash = hash_password(&data.password)?;
    let verification_token = generate_random_hex_string(VERIFICATION_TOKEN_BYTES);

    // 3. Persist the unverified account. The store re-checks email
    //    uniqueness under its write lock.
    let user = UserAccount {
        id: uuid::Uuid::new_v4(),
        name: data.name.clone(),
        email: data.email.clone(),
        company: data.company,
        password_hash,
        verification_token: Some(verification_token.clone()),
        is_verified: false,
        created_at: time::now(),
    };
    user_storage::insert(store, user)?;

    // 4. Send the verification email. The token travels only inside the
    //    link, never in the response.
    let link = config.verification_link(&verification_token);
    let html = format!(
        "<p>Hello {},</p>\
         <p>Click the button below to verify your account:</p>\
         <a href=\"{}\" style=\"padding:10px 20px;background-color:blue;color:white;text-decoration:none;\">Verify Account</a>",
        data.name, link
    );
    if let Err(e) = mailer.send(&data.email, "Verify your Smart Inventory account", &html) {
        warn!(email = %data.email, error = %e, "verification email failed after account persist");
        return Err(e);
    }

    info!(email = %data.email, "signup complete, verification pending");
    Ok(format!("Verification email sent to {}.", data.email))
}

/// Consumes a verification token and returns the signin redirect location.
///
/// Tokens are single-use: success clears the token, so a replay finds no
/// match and fails the same way an unknown token does. No expiry is applied.
pub fn verify_email(
    store: &Store,
    config: &AppConfig,
    token: &str,
) -> Result<String, ServiceError> {
    let user = user_storage::find_by_token(store, token)?
        .ok_or_else(|| ServiceError::InvalidToken("no matching account".to_string()))?;

    user_storage::mark_verified(store, &user.id)?;
    info!(email = %user.email, "account verified");

    Ok(config.signin_redirect())
}

/// Password check and session-token issue.
///
/// An unknown email and a wrong password intentionally share the same
/// error. The unverified case is reported distinctly so the client can
/// prompt for re-verification.
pub fn signin(
    store: &Store,
    config: &AppConfig,
    email: &str,
    password: &str,
) -> Result<SigninOutcome, ServiceError> {
    let user =
        user_storage::find_by_email(store, email)?.ok_or(ServiceError::InvalidCredentials)?;

    if !user.is_verified {
        return Err(ServiceError::EmailNotVerified);
    }

    if !verify_password(password, &user.password_hash)? {
        return Err(ServiceError::InvalidCredentials);
    }

    let token = issue_session_token(user.id, &config.jwt_secret)?;
    info!(email = %user.email, "signin ok");

    Ok(SigninOutcome {
        user: user.public(),
        token,
    })
}
