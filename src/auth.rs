/// JWT verification helpers
///
/// Callers authenticate with bearer tokens issued by the hosted identity
/// provider. Tokens are verified locally against the provider's published
/// RS256 public key; the `sub` claim carries the author identifier used
/// everywhere else in the service.
use jsonwebtoken::errors::{Error, ErrorKind};
use jsonwebtoken::{decode, Algorithm, DecodingKey, TokenData, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by identity-provider tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Author identifier (opaque provider-assigned id)
    pub sub: String,
    /// Expiry, seconds since epoch
    pub exp: usize,
}

/// Token verifier holding the provider's public key
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: Option<DecodingKey>,
    validation: Validation,
}

impl TokenVerifier {
    /// Build a verifier from a PEM-encoded RSA public key.
    pub fn from_pem(pem: &str) -> Result<Self, Error> {
        Ok(Self {
            decoding_key: Some(DecodingKey::from_rsa_pem(pem.as_bytes())?),
            validation: Validation::new(Algorithm::RS256),
        })
    }

    /// A verifier with no key configured. Every token fails verification;
    /// unauthenticated (read) endpoints keep working.
    pub fn disabled() -> Self {
        Self {
            decoding_key: None,
            validation: Validation::new(Algorithm::RS256),
        }
    }

    pub fn verify(&self, token: &str) -> Result<TokenData<Claims>, Error> {
        let key = self
            .decoding_key
            .as_ref()
            .ok_or_else(|| Error::from(ErrorKind::InvalidKeyFormat))?;

        decode::<Claims>(token, key, &self.validation)
    }
}
