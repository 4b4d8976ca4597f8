// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use async_trait::async_trait;

/// Hashes admin passwords. `verify` fails with `Unauthorized` on mismatch.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Issues and checks the bearer tokens handed out by register and login.
#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    /// Rejects expired, forged or malformed tokens with `Unauthorized`.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
