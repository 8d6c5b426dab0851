//! Local account authentication: password hashing, signup/login forms and
//! the session key holding the logged-in user.

mod accounts;
mod password;
mod session;

pub use accounts::{
    authenticate, password_too_short, register, LoginForm, SignupForm, INVALID_LOGIN,
    INVALID_USERNAME, MIN_PASSWORD_LENGTH, PASSWORD_MISMATCH, USERNAME_TAKEN,
};
pub use password::{hash_password, verify_password};
pub use session::SESSION_USER_ID_KEY;
