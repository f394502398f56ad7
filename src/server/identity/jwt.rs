use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{model::auth::JwtAuthResultDto, server::config::JwtSettings};

pub const TOKEN_TYPE: &str = "Bearer";

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub name: String,
    pub email: String,
    pub roles: Vec<String>,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[derive(Debug, Clone)]
pub struct JwtAuthResult {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub user_name: String,
}

impl JwtAuthResult {
    pub fn into_dto(self) -> JwtAuthResultDto {
        JwtAuthResultDto {
            access_token: self.access_token,
            token_type: TOKEN_TYPE.to_string(),
            expires_at: self.expires_at,
            user_name: self.user_name,
        }
    }
}

/// Issues and verifies HS256 access tokens.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    lifetime: Duration,
}

impl JwtService {
    pub fn new(settings: &JwtSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            issuer: settings.issuer.clone(),
            audience: settings.audience.clone(),
            lifetime: Duration::minutes(settings.access_token_minutes),
        }
    }

    /// Signs an access token for a user.
    ///
    /// # Arguments
    /// - `user` - User the token is issued to
    /// - `roles` - Role names embedded in the token
    ///
    /// # Returns
    /// - `Ok(JwtAuthResult)` - Token, expiry and user name
    /// - `Err(Error)` - Signing failed
    pub fn issue_token(
        &self,
        user: &entity::user::Model,
        roles: Vec<String>,
    ) -> Result<JwtAuthResult, jsonwebtoken::errors::Error> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.lifetime;

        let claims = Claims {
            sub: user.id.to_string(),
            name: user.user_name.clone(),
            email: user.email.clone(),
            roles,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        Ok(JwtAuthResult {
            access_token,
            expires_at,
            user_name: user.user_name.clone(),
        })
    }

    /// Verifies signature, expiry, issuer and audience of a token.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        Ok(decode::<Claims>(token, &self.decoding_key, &validation)?.claims)
    }
}
