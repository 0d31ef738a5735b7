use crate::application::client::HttpClient;
use crate::application::config::Config;
use crate::application::services::AuthService;
use crate::error::AppError;
use crate::model::requests::{
    ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
};
use crate::model::responses::{AuthResponse, MessageResponse};
use crate::utils::with_timeout;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Implementation of the authentication service
pub struct AuthServiceImpl {
    client: Arc<HttpClient>,
    login_timeout: Duration,
}

impl AuthServiceImpl {
    /// Creates a new instance of the authentication service
    pub fn new(client: Arc<HttpClient>, config: &Config) -> Self {
        Self {
            client,
            login_timeout: config.login_timeout(),
        }
    }

    /// Overrides the bounded wait applied to login
    pub fn with_login_timeout(mut self, login_timeout: Duration) -> Self {
        self.login_timeout = login_timeout;
        self
    }

    fn store_token(&self, response: AuthResponse) -> Result<String, AppError> {
        if response.token.is_empty() {
            error!("Backend issued an empty session token");
            return Err(AppError::InvalidResponse(
                "authentication response carries an empty token".to_string(),
            ));
        }
        self.client.token_store().set_token(&response.token)?;
        Ok(response.token)
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let request = LoginRequest::new(email, password);
        request.validate()?;

        // a failed attempt must not leave the previous seller logged in
        self.client.token_store().clear_token()?;

        info!("Logging in as {}", email);
        let response: AuthResponse = with_timeout(
            self.login_timeout,
            self.client.post("/api/auth/login", &request),
        )
        .await?;

        let token = self.store_token(response)?;
        info!("✓ Login successful");
        Ok(token)
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<String, AppError> {
        let request = RegisterRequest::new(name, email, password);
        request.validate(confirmation)?;

        info!("Registering seller {}", email);
        let response: AuthResponse = self.client.post("/api/auth/register", &request).await?;

        let token = self.store_token(response)?;
        info!("✓ Registration successful");
        Ok(token)
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.client.token_store().clear_token()?;
        info!("Logged out");
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> Result<(), AppError> {
        let request = ForgotPasswordRequest {
            email: email.trim().to_string(),
        };
        crate::model::utils::require_email("email", &request.email)?;

        let response: MessageResponse = self
            .client
            .post("/api/auth/forgot-password", &request)
            .await?;
        debug!(
            "Recovery link requested for {}: {}",
            request.email,
            response.message.as_deref().unwrap_or("no message")
        );
        Ok(())
    }

    async fn reset_password(
        &self,
        token: &str,
        email: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let request = ResetPasswordRequest {
            token: token.to_string(),
            email: email.to_string(),
            new_password: new_password.to_string(),
        };
        request.validate()?;

        let response: MessageResponse = self
            .client
            .post("/api/auth/reset-password", &request)
            .await?;
        info!("Password reset for {}", email);
        if let Some(message) = response.message {
            debug!("Backend said: {}", message);
        }
        Ok(())
    }

    fn is_authenticated(&self) -> bool {
        self.client.token_store().has_token()
    }
}
