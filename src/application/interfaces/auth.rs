use crate::error::AppError;
use async_trait::async_trait;

/// Interface for seller authentication
///
/// Successful login and registration store the issued token in the client's
/// token store; every later request carries it.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Logs a seller in
    ///
    /// Any previously stored token is cleared before the attempt. The call is
    /// bounded; when the backend does not answer in time the result is
    /// [`AppError::Timeout`].
    ///
    /// # Returns
    /// * The issued session token
    async fn login(&self, email: &str, password: &str) -> Result<String, AppError>;

    /// Registers a new seller and logs them in
    ///
    /// `confirmation` must equal `password`; a mismatch is rejected without
    /// contacting the backend.
    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<String, AppError>;

    /// Forgets the stored token
    async fn logout(&self) -> Result<(), AppError>;

    /// Asks the backend to e-mail a password recovery link
    async fn forgot_password(&self, email: &str) -> Result<(), AppError>;

    /// Sets a new password using the token and e-mail from a recovery link
    async fn reset_password(
        &self,
        token: &str,
        email: &str,
        new_password: &str,
    ) -> Result<(), AppError>;

    /// Whether a session token is currently stored
    fn is_authenticated(&self) -> bool;
}
