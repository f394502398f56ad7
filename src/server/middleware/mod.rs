//! Request extractors that run before the body is parsed.
//!
//! - [`auth`] resolves the bearer token into the calling user and enforces roles.
//! - [`locale`] picks the response culture from `Accept-Language`.

pub mod auth;
pub mod locale;

#[cfg(test)]
mod test;
