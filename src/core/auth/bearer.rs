use thiserror::Error;
use tracing::debug;

use crate::core::config::Config;

/// First character every accepted token must start with.
pub const TOKEN_PREFIX: char = 'T';

/// Shortest token accepted.
pub const MIN_TOKEN_LENGTH: usize = 10;

/// Scope attached to every accepted token and required by the MCP endpoint.
pub const REQUIRED_SCOPE: &str = "fathom:read";

/// Client id reported for accepted tokens.
pub const CLIENT_ID: &str = "fathom-client";

/// Errors that can occur while authenticating a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No usable bearer token on the request.
    #[error("No authorization provided")]
    MissingToken,

    /// A token was supplied but failed the shape check.
    #[error("Invalid token")]
    InvalidToken,

    /// The credential does not carry a required scope.
    #[error("Insufficient scope: {0} required")]
    InsufficientScope(String),
}

impl AuthError {
    /// OAuth error code for the `WWW-Authenticate` challenge.
    pub fn oauth_code(&self) -> &'static str {
        match self {
            Self::MissingToken | Self::InvalidToken => "invalid_token",
            Self::InsufficientScope(_) => "insufficient_scope",
        }
    }
}

/// The per-request credential.
///
/// The token is the caller's Fathom API key and is passed through unverified
/// as the key for the single downstream call made on this request's behalf.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    scopes: Vec<String>,
    client_id: String,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"[REDACTED]")
            .field("scopes", &self.scopes)
            .field("client_id", &self.client_id)
            .finish()
    }
}

impl Credential {
    /// Wrap an API key with the standard scope.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            scopes: vec![REQUIRED_SCOPE.to_string()],
            client_id: CLIENT_ID.to_string(),
        }
    }

    /// Credential for standalone mode, taken from `FATHOM_API_KEY`.
    pub fn from_config(config: &Config) -> Option<Self> {
        config
            .fathom
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .map(Self::new)
    }

    /// Override the scope set.
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }
}

/// Extract the token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively; an empty token counts as absent.
pub fn extract_bearer(header: Option<&str>) -> Option<&str> {
    let (scheme, token) = header?.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Shape check applied to inbound tokens.
///
/// Accepts tokens starting with [`TOKEN_PREFIX`] that are at least
/// [`MIN_TOKEN_LENGTH`] characters long. This is not verification: Fathom
/// decides whether the key is actually valid when it is used downstream.
pub fn verify_token(token: &str) -> Option<Credential> {
    if !token.starts_with(TOKEN_PREFIX) || token.chars().count() < MIN_TOKEN_LENGTH {
        return None;
    }
    Some(Credential::new(token))
}

/// Access policy enforced before any tool is reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPolicy {
    /// Scopes an accepted credential must carry.
    pub required_scopes: Vec<String>,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self {
            required_scopes: vec![REQUIRED_SCOPE.to_string()],
        }
    }
}

impl AuthPolicy {
    /// Authenticate a request from its raw `Authorization` header.
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<Credential, AuthError> {
        let Some(token) = extract_bearer(authorization) else {
            debug!("Auth failed: missing or malformed Authorization header");
            return Err(AuthError::MissingToken);
        };

        let Some(credential) = verify_token(token) else {
            debug!("Auth failed: token rejected by shape check");
            return Err(AuthError::InvalidToken);
        };

        self.authorize(&credential)?;
        Ok(credential)
    }

    /// Check that `credential` carries every required scope.
    pub fn authorize(&self, credential: &Credential) -> Result<(), AuthError> {
        match self
            .required_scopes
            .iter()
            .find(|scope| !credential.has_scope(scope))
        {
            Some(missing) => {
                debug!("Auth failed: missing scope {}", missing);
                Err(AuthError::InsufficientScope(missing.clone()))
            }
            None => Ok(()),
        }
    }
}
