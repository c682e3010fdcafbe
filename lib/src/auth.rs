// lib/src/auth.rs

//! Credential checks against the stored user collection.

use log::{info, warn};

use models::{Login, User, Viewer};

use crate::errors::{Result, StoreError};
use crate::repository::Repository;

/// Finds the user by email and checks the password.
///
/// Emails match case-insensitively after trimming. An unknown email and a
/// wrong password fail with the same `AuthenticationError`.
pub fn authenticate(users: &[User], login: &Login) -> Result<User> {
    let email = login.email.trim();
    let Some(user) = users.iter().find(|u| u.email.trim().eq_ignore_ascii_case(email)) else {
        info!("No user registered for {}", email);
        return Err(invalid_credentials());
    };

    if User::verify_password(&login.password, &user.password_hash)? {
        Ok(user.clone())
    } else {
        warn!("Rejected password for {}", user.email);
        Err(invalid_credentials())
    }
}

fn invalid_credentials() -> StoreError {
    StoreError::AuthenticationError("invalid email or password".to_string())
}

/// Authenticates against the store and resolves the viewer the dashboards
/// should be scoped to.
pub fn login<R: Repository + ?Sized>(repository: &R, login: &Login) -> Result<(User, Viewer)> {
    let users = repository.get_users()?;
    let user = authenticate(&users, login)?;
    let patients = repository.get_patients()?;
    let viewer = Viewer::for_user(&user, &patients)?;
    info!("User {} logged in as {}", user.email, viewer.role());
    Ok((user, viewer))
}
