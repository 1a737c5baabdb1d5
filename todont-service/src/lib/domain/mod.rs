pub mod todont;
pub mod user;
