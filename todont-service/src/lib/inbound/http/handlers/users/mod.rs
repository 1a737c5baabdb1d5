pub mod get_user;
pub mod get_user_profile;
pub mod login;
pub mod register;
