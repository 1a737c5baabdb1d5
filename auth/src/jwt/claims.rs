use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Claims carried by every token this API issues.
///
/// Fixed claim set rather than an open map: the subject id, the display
/// name, issuer, audience, and expiry are the whole contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user id, rendered as a string per RFC 7519
    pub sub: String,

    /// Subject display name (the username)
    pub name: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Parse the subject claim back into a numeric user id.
    ///
    /// # Errors
    /// * `InvalidClaim` - `sub` is not a valid integer
    pub fn subject_id(&self) -> Result<i64, JwtError> {
        self.sub
            .parse::<i64>()
            .map_err(|e| JwtError::InvalidClaim(format!("sub is not a user id: {}", e)))
    }

    /// Check whether the token is expired at the given instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            name: "alice".to_string(),
            iss: "todont-api".to_string(),
            aud: "todont-client".to_string(),
            exp: 2_000_000_000,
        }
    }

    #[test]
    fn test_subject_id_parses() {
        assert_eq!(claims("42").subject_id().unwrap(), 42);
    }

    #[test]
    fn test_subject_id_rejects_garbage() {
        let result = claims("not-a-number").subject_id();
        assert!(matches!(result, Err(JwtError::InvalidClaim(_))));
    }

    #[test]
    fn test_is_expired() {
        let c = Claims {
            exp: 1000,
            ..claims("1")
        };

        assert!(!c.is_expired(999));
        assert!(!c.is_expired(1000)); // Exactly at expiration
        assert!(c.is_expired(1001));
    }
}
