use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Issues and verifies signed, time-bounded identity tokens.
///
/// Configuration (key, issuer, audience, lifetime) is fixed at
/// construction; `issue` is then a pure function of the subject and the
/// current time. Uses HS256 (HMAC with SHA-256).
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
    audience: String,
    expiry_minutes: i64,
}

impl TokenIssuer {
    /// Create a token issuer.
    ///
    /// # Arguments
    /// * `secret` - HMAC signing key; at least 32 bytes for HS256
    /// * `issuer` - value of the `iss` claim, enforced on verification
    /// * `audience` - value of the `aud` claim, enforced on verification
    /// * `expiry_minutes` - token lifetime from the moment of issuance
    pub fn new(secret: &[u8], issuer: String, audience: String, expiry_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            issuer,
            audience,
            expiry_minutes,
        }
    }

    /// Mint a token for an authenticated user.
    ///
    /// Claims: `sub` = user id, `name` = username, plus the configured
    /// issuer, audience, and `exp = now + expiry_minutes`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, subject_id: i64, name: &str) -> Result<String, JwtError> {
        let expires_at = Utc::now() + Duration::minutes(self.expiry_minutes);

        let claims = Claims {
            sub: subject_id.to_string(),
            name: name.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            exp: expires_at.timestamp(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// Rejects a bad signature, a passed expiry, and any issuer or
    /// audience mismatch.
    ///
    /// # Errors
    /// * `TokenExpired` - `exp` is in the past
    /// * `InvalidToken` - signature, issuer, or audience check failed
    /// * `DecodingFailed` - token is malformed
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    ErrorKind::InvalidSignature
                    | ErrorKind::InvalidIssuer
                    | ErrorKind::InvalidAudience => JwtError::InvalidToken(e.to_string()),
                    _ => JwtError::DecodingFailed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
