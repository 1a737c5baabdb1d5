pub mod todont;
pub mod user;

pub use todont::PostgresTodontRepository;
pub use user::PostgresUserRepository;
