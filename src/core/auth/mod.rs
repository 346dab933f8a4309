// Auth gate for inbound MCP requests
//
// Turns an `Authorization: Bearer <token>` header into the per-request
// credential used for the downstream Fathom call, or rejects the request
// before any tool is reached.

pub mod bearer;

pub use bearer::{
    AuthError, AuthPolicy, Credential, REQUIRED_SCOPE, extract_bearer, verify_token,
};
