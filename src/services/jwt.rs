//! # JWT Service
//!
//! This module provides JSON Web Token (JWT) functionality for user authentication.
//! Tokens are HS256-signed with the process-wide secret, carry the user's id and
//! email, and expire [`TOKEN_EXPIRY`] after issuance. There are no refresh tokens;
//! validation is purely cryptographic and never touches the database.

use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, get_current_timestamp,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, trace};
use uuid::Uuid;

use crate::utils::constant::TOKEN_EXPIRY;

/// Errors that can occur during JWT operations
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Token encoding failed: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as string)
    pub sub: String,
    /// Email the user registered with
    pub email: String,
    /// Expiration timestamp (Unix epoch)
    pub exp: u64,
    /// Issued at timestamp (Unix epoch)
    pub iat: u64,
}

/// Service for issuing and validating tokens
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Creates a new JWT service with the provided keys.
    ///
    /// # Arguments
    ///
    /// * `encoding_key` - Key used for signing JWT tokens
    /// * `decoding_key` - Key used for verifying JWT tokens
    pub fn new(encoding_key: EncodingKey, decoding_key: DecodingKey) -> Self {
        // Expired means expired: no clock slack past `exp`
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Creates a service that signs and verifies with the same HMAC secret.
    pub fn from_secret(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self::new(
            EncodingKey::from_secret(bytes),
            DecodingKey::from_secret(bytes),
        )
    }

    /// Issues a signed token for the user.
    ///
    /// # Errors
    ///
    /// Returns [`JwtError::Encoding`] if signing fails.
    #[instrument(skip(self, email))]
    pub fn issue_token(&self, user_id: Uuid, email: &str) -> Result<String, JwtError> {
        trace!("Issuing token");

        let now = get_current_timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: now + TOKEN_EXPIRY.as_secs(),
            iat: now,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        trace!("Token issued");
        Ok(token)
    }

    /// Validates a token and returns its claims.
    ///
    /// This method verifies the token signature and checks expiration.
    ///
    /// # Errors
    ///
    /// - [`JwtError::TokenExpired`] - Token has expired
    /// - [`JwtError::InvalidToken`] - Token is malformed or has invalid signature
    #[instrument(skip_all, fields(token_length = token.len()))]
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        trace!("Validating token");

        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(token_data) => {
                trace!(user_id = %token_data.claims.sub, "Token validated successfully");
                Ok(token_data.claims)
            }
            Err(e) if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                debug!("Token expired");
                Err(JwtError::TokenExpired)
            }
            Err(e) => {
                debug!(error = %e, "Invalid token");
                Err(JwtError::InvalidToken)
            }
        }
    }
}
