//! Application implementation with JWT-based authentication.
//!
//! Callers present an HS256-signed JWT as a bearer token; the standard `sub`
//! claim carries their numeric user id.

use headers::{Authorization, authorization::Bearer};
use jwt_simple::{
    claims::{JWTClaims, NoCustomClaims},
    prelude::{HS256Key, MACLike},
};
use tix_core::{
    models::{DateTime, UserId},
    ports::Application,
};
use tix_sqlite::Db;

/// Main application implementation combining the database and the token key.
#[derive(Clone)]
pub struct DemoApp {
    /// Database connection for persistent storage
    pub db: Db,
    /// HMAC key for JWT token verification
    pub key: HS256Key,
}

impl DemoApp {
    /// Extract and verify JWT claims from the authorization header.
    fn claims(&self, context: &Authorization<Bearer>) -> Option<JWTClaims<NoCustomClaims>> {
        let token = context.token();
        self.key.verify_token::<NoCustomClaims>(token, None).ok()
    }
}

impl Application for DemoApp {
    type Context = Authorization<Bearer>;
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.db
    }

    fn now(&self) -> DateTime {
        DateTime::now()
    }

    async fn authenticate(&self, context: &Self::Context) -> Option<UserId> {
        self.claims(context)?.subject?.parse().ok()
    }
}
