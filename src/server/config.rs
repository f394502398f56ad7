use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_JWT_ISSUER: &str = "school-api";
const DEFAULT_JWT_AUDIENCE: &str = "school-api-clients";
const DEFAULT_ACCESS_TOKEN_MINUTES: i64 = 60;

/// Token signing settings.
#[derive(Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub access_token_minutes: i64,
}

/// Credentials of the administrator created on first startup.
#[derive(Clone)]
pub struct AdminSeed {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub jwt: JwtSettings,
    /// Present only when all three `ADMIN_*` variables are set.
    pub admin: Option<AdminSeed>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let admin = match (
            optional("ADMIN_USER_NAME"),
            optional("ADMIN_EMAIL"),
            optional("ADMIN_PASSWORD"),
        ) {
            (Some(user_name), Some(email), Some(password)) => Some(AdminSeed {
                user_name,
                email,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            jwt: JwtSettings {
                secret: required("JWT_SECRET")?,
                issuer: optional("JWT_ISSUER").unwrap_or_else(|| DEFAULT_JWT_ISSUER.to_string()),
                audience: optional("JWT_AUDIENCE")
                    .unwrap_or_else(|| DEFAULT_JWT_AUDIENCE.to_string()),
                access_token_minutes: match optional("JWT_ACCESS_TOKEN_MINUTES") {
                    Some(value) => parse_minutes("JWT_ACCESS_TOKEN_MINUTES", &value)?,
                    None => DEFAULT_ACCESS_TOKEN_MINUTES,
                },
            },
            admin,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_minutes(name: &str, value: &str) -> Result<i64, ConfigError> {
    match value.trim().parse::<i64>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        Ok(_) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Err(err) => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_minutes() {
        assert_eq!(parse_minutes("X", " 15 ").unwrap(), 15);
    }

    #[test]
    fn rejects_invalid_minutes() {
        assert!(matches!(
            parse_minutes("X", "0"),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
        assert!(matches!(
            parse_minutes("X", "soon"),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
    }
}
