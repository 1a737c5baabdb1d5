//! Authentication primitives for the ToDon't API.
//!
//! Two independent pieces:
//! - Password hashing (Argon2id) for credential storage and verification
//! - JWT issuance and verification for stateless request identity
//!
//! Neither performs I/O; the service crate wires them into its own
//! registration/login flows and HTTP middleware.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     "todont-api".to_string(),
//!     "todont-client".to_string(),
//!     30,
//! );
//!
//! let token = issuer.issue(42, "alice").unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.subject_id().unwrap(), 42);
//! assert_eq!(claims.name, "alice");
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
