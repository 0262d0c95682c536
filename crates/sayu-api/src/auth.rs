use crate::{ApiError, AppState};
use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{header, request::Parts, Extensions, HeaderMap},
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sayu_core::ArchetypeCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use tracing::{info, warn};

pub const API_KEY_HEADER: &str = "x-api-key";
pub const MIN_API_KEY_LENGTH: usize = 20;
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    ManageCache,
    ReadCacheStats,
    RecordBehavior,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::ManageCache => "manage:cache",
            Permission::ReadCacheStats => "read:cache_stats",
            Permission::RecordBehavior => "write:behavior",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manage:cache" => Ok(Permission::ManageCache),
            "read:cache_stats" => Ok(Permission::ReadCacheStats),
            "write:behavior" => Ok(Permission::RecordBehavior),
            other => Err(ApiError::Validation(format!("Unknown permission: {other}"))),
        }
    }
}

/// Bearer token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apt_type: Option<ArchetypeCode>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: String,
    pub username: String,
    pub apt_type: Option<ArchetypeCode>,
    pub roles: Vec<String>,
    pub permissions: Vec<Permission>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthContext {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// HS256 token issuer and verifier.
pub struct JwtManager {
    secret: SecretString,
    ttl: Duration,
}

impl JwtManager {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            secret: SecretString::new(secret.to_owned().into_boxed_str()),
            ttl: Duration::seconds(ttl_secs.min(i64::MAX as u64) as i64),
        }
    }

    pub fn issue(
        &self,
        user_id: &str,
        name: &str,
        apt_type: Option<ArchetypeCode>,
        roles: &[&str],
        permissions: &[Permission],
    ) -> Result<String, ApiError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            name: name.to_string(),
            apt_type,
            roles: roles.iter().map(|r| r.to_string()).collect(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        let key = EncodingKey::from_secret(self.secret.expose_secret().as_bytes());
        encode(&Header::new(Algorithm::HS256), &claims, &key)
            .map_err(|e| ApiError::Internal(format!("Token generation failed: {e}")))
    }

    pub fn validate(&self, token: &str) -> Result<AuthContext, ApiError> {
        let key = DecodingKey::from_secret(self.secret.expose_secret().as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let claims = decode::<Claims>(token, &key, &validation)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {e}")))?
            .claims;

        Ok(AuthContext {
            // Unknown permission strings are ignored rather than rejected.
            permissions: claims
                .permissions
                .iter()
                .filter_map(|p| p.parse().ok())
                .collect(),
            user_id: claims.sub,
            username: claims.name,
            apt_type: claims.apt_type,
            roles: claims.roles,
            issued_at: DateTime::from_timestamp(claims.iat, 0).unwrap_or_default(),
            expires_at: DateTime::from_timestamp(claims.exp, 0).unwrap_or_default(),
        })
    }
}

/// Identity behind a validated `x-api-key`. Only the digest is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyIdentity {
    pub key_id: String,
}

impl ApiKeyIdentity {
    /// Short, log-safe form of the digest.
    pub fn fingerprint(&self) -> &str {
        &self.key_id[..self.key_id.len().min(12)]
    }
}

pub fn api_key_digest(key: &str) -> String {
    format!("{:x}", Sha256::digest(key.as_bytes()))
}

pub trait ApiKeyValidator: Send + Sync {
    fn validate(&self, key: &str) -> Option<ApiKeyIdentity>;
}

/// Accepts keys with the configured prefix and minimum length. When a key list
/// is configured, only those keys are accepted.
pub struct ConfiguredApiKeys {
    prefix: String,
    min_length: usize,
    digests: HashSet<String>,
}

impl ConfiguredApiKeys {
    pub fn new(prefix: &str, keys: &[String]) -> Self {
        Self {
            prefix: prefix.to_string(),
            min_length: MIN_API_KEY_LENGTH.max(prefix.len() + 1),
            digests: keys.iter().map(|k| api_key_digest(k.trim())).collect(),
        }
    }
}

impl ApiKeyValidator for ConfiguredApiKeys {
    fn validate(&self, key: &str) -> Option<ApiKeyIdentity> {
        if !key.starts_with(&self.prefix) || key.len() < self.min_length {
            return None;
        }
        let digest = api_key_digest(key);
        if !self.digests.is_empty() && !self.digests.contains(&digest) {
            return None;
        }
        Some(ApiKeyIdentity { key_id: digest })
    }
}

/// Decides whether a principal may perform a guarded action.
pub trait AuthorizationPort: Send + Sync {
    fn authorize(&self, context: &AuthContext, permission: Permission) -> bool;
}

/// Grants cache capabilities to the admin role or to an explicit permission.
/// Behaviour recording is open to every authenticated user.
#[derive(Debug, Default)]
pub struct PermissionAuthorization;

impl AuthorizationPort for PermissionAuthorization {
    fn authorize(&self, context: &AuthContext, permission: Permission) -> bool {
        match permission {
            Permission::RecordBehavior => true,
            Permission::ManageCache | Permission::ReadCacheStats => {
                context.has_role(ADMIN_ROLE) || context.permissions.contains(&permission)
            }
        }
    }
}

/// Security event logging
#[derive(Debug, Clone)]
pub enum SecurityEvent {
    AuthenticationFailure {
        principal: String,
        ip_address: String,
        reason: String,
    },
    AuthenticationSuccess {
        principal: String,
        ip_address: String,
        method: &'static str,
    },
    PermissionDenied {
        user_id: String,
        resource: String,
        required_permission: Permission,
    },
    AdminAccess {
        user_id: String,
        action: String,
        resource: String,
    },
    RateLimitExceeded {
        tier: &'static str,
        key: String,
    },
    QuotaExceeded {
        key_fingerprint: String,
        limit: u64,
    },
}

pub struct SecurityLogger;

impl SecurityLogger {
    pub fn log_event(event: SecurityEvent) {
        match event {
            SecurityEvent::AuthenticationFailure {
                principal,
                ip_address,
                reason,
            } => {
                warn!(
                    target: "security",
                    principal = %principal,
                    ip_address = %ip_address,
                    reason = %reason,
                    "Authentication failure"
                );
            }
            SecurityEvent::AuthenticationSuccess {
                principal,
                ip_address,
                method,
            } => {
                info!(
                    target: "security",
                    principal = %principal,
                    ip_address = %ip_address,
                    method,
                    "Authentication success"
                );
            }
            SecurityEvent::PermissionDenied {
                user_id,
                resource,
                required_permission,
            } => {
                warn!(
                    target: "security",
                    user_id = %user_id,
                    resource = %resource,
                    required_permission = %required_permission,
                    "Permission denied"
                );
            }
            SecurityEvent::AdminAccess {
                user_id,
                action,
                resource,
            } => {
                info!(
                    target: "security",
                    user_id = %user_id,
                    action = %action,
                    resource = %resource,
                    "Admin access"
                );
            }
            SecurityEvent::RateLimitExceeded { tier, key } => {
                warn!(target: "security", tier, key = %key, "Rate limit exceeded");
            }
            SecurityEvent::QuotaExceeded {
                key_fingerprint,
                limit,
            } => {
                warn!(
                    target: "security",
                    key = %key_fingerprint,
                    limit,
                    "Monthly quota exceeded"
                );
            }
        }
    }
}

/// Client address for rate limiting and audit logs. Forwarding headers are
/// only consulted when `trust_forwarded` is set; otherwise the socket peer is
/// used, then "anonymous".
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>, trust_forwarded: bool) -> String {
    if trust_forwarded {
        if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
            if let Some(ip) = forwarded.split(',').next().map(str::trim) {
                if !ip.is_empty() {
                    return ip.to_string();
                }
            }
        }

        if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
            let ip = real_ip.trim();
            if !ip.is_empty() {
                return ip.to_string();
            }
        }
    }

    match peer {
        Some(addr) => addr.ip().to_string(),
        None => "anonymous".to_string(),
    }
}

/// Socket peer recorded by `into_make_service_with_connect_info`.
pub fn peer_addr(extensions: &Extensions) -> Option<SocketAddr> {
    extensions.get::<ConnectInfo<SocketAddr>>().map(|info| info.0)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Extracts and verifies the bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthContext);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let ip_address = state.client_ip(&parts.headers, &parts.extensions);
        let Some(token) = bearer_token(&parts.headers) else {
            SecurityLogger::log_event(SecurityEvent::AuthenticationFailure {
                principal: "anonymous".to_string(),
                ip_address,
                reason: "No bearer token provided".to_string(),
            });
            return Err(ApiError::Unauthorized("Authentication required".to_string()));
        };

        match state.jwt.validate(token) {
            Ok(context) => {
                SecurityLogger::log_event(SecurityEvent::AuthenticationSuccess {
                    principal: context.user_id.clone(),
                    ip_address,
                    method: "JWT",
                });
                Ok(AuthUser(context))
            }
            Err(e) => {
                SecurityLogger::log_event(SecurityEvent::AuthenticationFailure {
                    principal: "unknown".to_string(),
                    ip_address,
                    reason: e.to_string(),
                });
                Err(ApiError::Unauthorized("Invalid or expired token".to_string()))
            }
        }
    }
}

/// Extracts and validates the `x-api-key` credential.
#[derive(Debug, Clone)]
pub struct ApiKeyAuth(pub ApiKeyIdentity);

impl FromRequestParts<AppState> for ApiKeyAuth {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let ip_address = state.client_ip(&parts.headers, &parts.extensions);
        let Some(key) = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
        else {
            SecurityLogger::log_event(SecurityEvent::AuthenticationFailure {
                principal: "api-key-missing".to_string(),
                ip_address,
                reason: "No API key provided".to_string(),
            });
            return Err(ApiError::Unauthorized("API key required".to_string()));
        };

        match state.api_keys.validate(key.trim()) {
            Some(identity) => {
                SecurityLogger::log_event(SecurityEvent::AuthenticationSuccess {
                    principal: format!("api-key-{}", identity.fingerprint()),
                    ip_address,
                    method: "API_KEY",
                });
                Ok(ApiKeyAuth(identity))
            }
            None => {
                SecurityLogger::log_event(SecurityEvent::AuthenticationFailure {
                    principal: "api-key-unknown".to_string(),
                    ip_address,
                    reason: "Invalid API key".to_string(),
                });
                Err(ApiError::Unauthorized("Invalid API key".to_string()))
            }
        }
    }
}

/// Runs the authorization port for a guarded action, logging the outcome.
pub fn require_permission(
    state: &AppState,
    context: &AuthContext,
    permission: Permission,
    action: &str,
    resource: &str,
) -> Result<(), ApiError> {
    if state.authorization.authorize(context, permission) {
        SecurityLogger::log_event(SecurityEvent::AdminAccess {
            user_id: context.user_id.clone(),
            action: action.to_string(),
            resource: resource.to_string(),
        });
        Ok(())
    } else {
        SecurityLogger::log_event(SecurityEvent::PermissionDenied {
            user_id: context.user_id.clone(),
            resource: resource.to_string(),
            required_permission: permission,
        });
        Err(ApiError::Forbidden(format!(
            "Missing required permission: {permission}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn context(roles: &[&str], permissions: &[Permission]) -> AuthContext {
        AuthContext {
            user_id: "user-1".into(),
            username: "tester".into(),
            apt_type: None,
            roles: roles.iter().map(|r| r.to_string()).collect(),
            permissions: permissions.to_vec(),
            issued_at: Utc::now(),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }

    #[test]
    fn token_round_trip_keeps_claims() {
        let jwt = JwtManager::new("test-secret", 3600);
        let token = jwt
            .issue(
                "user-42",
                "Mina",
                ArchetypeCode::parse("LAEF"),
                &["user"],
                &[Permission::ReadCacheStats],
            )
            .unwrap();
        let context = jwt.validate(&token).unwrap();
        assert_eq!(context.user_id, "user-42");
        assert_eq!(context.apt_type.map(|c| c.to_string()).as_deref(), Some("LAEF"));
        assert_eq!(context.permissions, vec![Permission::ReadCacheStats]);
        assert!(context.expires_at > context.issued_at);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = JwtManager::new("secret-a", 3600)
            .issue("u", "n", None, &[], &[])
            .unwrap();
        let err = JwtManager::new("secret-b", 3600).validate(&token).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn api_key_validator_checks_prefix_length_and_membership() {
        let open = ConfiguredApiKeys::new("sayu_", &[]);
        assert!(open.validate("sayu_0123456789abcdef").is_some());
        assert!(open.validate("sayu_short").is_none());
        assert!(open.validate("other_0123456789abcdef").is_none());

        let closed = ConfiguredApiKeys::new("sayu_", &["sayu_partner_key_0001".to_string()]);
        let identity = closed.validate("sayu_partner_key_0001").unwrap();
        assert_eq!(identity.key_id, api_key_digest("sayu_partner_key_0001"));
        assert!(closed.validate("sayu_partner_key_0002").is_none());
    }

    #[test]
    fn cache_permissions_need_admin_or_grant() {
        let port = PermissionAuthorization;
        assert!(port.authorize(&context(&["admin"], &[]), Permission::ManageCache));
        assert!(port.authorize(
            &context(&["user"], &[Permission::ReadCacheStats]),
            Permission::ReadCacheStats
        ));
        assert!(!port.authorize(
            &context(&["user"], &[Permission::ReadCacheStats]),
            Permission::ManageCache
        ));
        assert!(port.authorize(&context(&[], &[]), Permission::RecordBehavior));
    }

    #[test]
    fn forwarded_headers_need_a_trusted_proxy() {
        let peer: SocketAddr = "203.0.113.7:51000".parse().unwrap();
        let mut headers = HeaderMap::new();
        assert_eq!(client_ip(&headers, None, true), "anonymous");
        assert_eq!(client_ip(&headers, Some(peer), false), "203.0.113.7");

        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.9"));
        assert_eq!(client_ip(&headers, Some(peer), true), "10.0.0.9");

        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("192.168.1.1, 10.0.0.1"),
        );
        assert_eq!(client_ip(&headers, Some(peer), true), "192.168.1.1");

        // Spoofed headers from a direct client are ignored.
        assert_eq!(client_ip(&headers, Some(peer), false), "203.0.113.7");
        assert_eq!(client_ip(&headers, None, false), "anonymous");
    }

    #[test]
    fn peer_addr_reads_connect_info() {
        let mut extensions = Extensions::new();
        assert!(peer_addr(&extensions).is_none());
        let addr: SocketAddr = "198.51.100.2:4000".parse().unwrap();
        extensions.insert(ConnectInfo(addr));
        assert_eq!(peer_addr(&extensions), Some(addr));
    }
}
