use async_trait::async_trait;

use crate::domain::error::AuthError;

/// Credential checking collaborator injected into the login router.
///
/// `Ok(None)` (or an empty token) means the credentials were rejected;
/// `Err` means the check itself could not be carried out.
#[async_trait]
pub(crate) trait Authenticator: Send + Sync {
    async fn auth(&self, email: &str, password: &str) -> Result<Option<String>, AuthError>;
}
