use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims carried by every session token.
///
/// Handlers rely on these fields instead of re-reading the user row, so a
/// renamed user keeps the old name until the token expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// Unique login name; enrollments and feedback reference users by it
    pub username: String,
    /// Display name
    pub name: String,
    /// `student`, `instructor` or `admin`
    pub role: String,
    /// Expiration (Unix timestamp)
    pub exp: usize,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
}
