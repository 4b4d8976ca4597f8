// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Issues and verifies Biscuit bearer tokens for admins. Capabilities are
/// carried as `right(resource, action)` facts.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn build_code_and_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (String, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("aid".to_string(), i64::from(subject.admin_id).into());
    params.insert("email".to_string(), subject.email.clone().into());
    params.insert("arole".to_string(), subject.role.as_str().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());

    let mut code = String::from(
        r#"
        admin({aid}, {email});
        role({arole});
        issued_at({issued});
        expires_at({exp});
        check if time($now), $now >= {issued};
        check if time($now), $now <= {exp};
        "#,
    );

    let mut capabilities: Vec<_> = subject.capabilities.iter().collect();
    capabilities.sort_by(|a, b| (&a.resource, &a.action).cmp(&(&b.resource, &b.action)));
    for cap in capabilities {
        code.push_str(&format!(
            "right(\"{}\", \"{}\");\n",
            escape_literal(&cap.resource),
            escape_literal(&cap.action)
        ));
    }

    (code, params)
}

fn build_and_serialize_biscuit(
    code: &str,
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> ApplicationResult<String> {
    let token = Biscuit::builder()
        .code_with_params(code, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    ChronoDuration::from_std(ttl)
        .map(|ttl| ttl.num_seconds().max(0))
        .unwrap_or(i64::MAX)
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let (code, params) = build_code_and_params(&subject, issued_at, expires_at);

        let token = build_and_serialize_biscuit(&code, params, self.root.as_ref())?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if true")
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let view = biscuit
            .authorizer()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        let (facts, _, _, _) = view.dump();

        super::claims::parse_claims(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::admin::{AdminId, Role};

    const TEST_KEY: &str = "0101010101010101010101010101010101010101010101010101010101010101";

    fn subject() -> TokenSubject {
        TokenSubject {
            admin_id: AdminId::new(7).unwrap(),
            email: "editor@vesturo.com".into(),
            role: Role::Admin,
            capabilities: Role::Admin.default_capabilities(),
        }
    }

    #[tokio::test]
    async fn issued_token_authenticates() {
        let manager = BiscuitTokenManager::new(TEST_KEY, Duration::from_secs(600)).unwrap();
        let token = manager.issue(subject()).await.unwrap();
        assert_eq!(token.expires_in, 600);

        let user = manager.authenticate(&token.token).await.unwrap();
        assert_eq!(i64::from(user.id), 7);
        assert_eq!(user.email, "editor@vesturo.com");
        assert_eq!(user.role, Role::Admin);
        assert!(user.has_capability("posts", "publish"));
        assert!(!user.has_capability("admins", "create"));
    }

    #[tokio::test]
    async fn garbage_token_is_unauthorized() {
        let manager = BiscuitTokenManager::new(TEST_KEY, Duration::from_secs(600)).unwrap();
        let err = manager.authenticate("not-a-token").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[test]
    fn every_capability_becomes_one_right_fact() {
        let now = SystemTime::now();
        let (code, params) = build_code_and_params(&subject(), now, now);

        let rights: Vec<&str> = code
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with("right("))
            .collect();
        assert_eq!(rights.len(), Role::Admin.default_capabilities().len());
        assert!(rights.contains(&r#"right("posts", "publish");"#));
        assert!(params.contains_key("aid"));
    }

    #[test]
    fn invalid_key_is_rejected() {
        assert!(BiscuitTokenManager::new("zz", Duration::from_secs(1)).is_err());
    }
}
