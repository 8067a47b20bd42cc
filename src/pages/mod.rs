//! Route pages.

pub mod auth;
pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod reset_password;
pub mod setup_account;
pub mod signup;
pub mod studio;
pub mod verify_email;
pub mod verify_reset;
pub mod welcome;
