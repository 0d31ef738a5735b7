/******************************************************************************
   Author: Checkout Tech
   Email: dev@checkout.tech
   Date: 16/10/26
******************************************************************************/

//! Session token storage
//!
//! The client never owns the token: it asks a [`TokenStore`] on every call,
//! so a login or logout performed between two calls is seen by the second
//! one. Stores are shared as `Arc<dyn TokenStore>`.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

/// Holder of the seller's session token
pub trait TokenStore: Send + Sync {
    /// Current token, `None` when logged out
    fn token(&self) -> Option<String>;

    /// Replaces the stored token
    fn set_token(&self, token: &str) -> Result<(), AppError>;

    /// Removes the stored token; clearing an empty store is not an error
    fn clear_token(&self) -> Result<(), AppError>;

    /// Whether a token is stored
    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

/// Process local token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into()).filter(|t: &String| !t.is_empty())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn set_token(&self, token: &str) -> Result<(), AppError> {
        let mut guard = self.token.write().unwrap_or_else(|p| p.into_inner());
        *guard = Some(token.to_string()).filter(|t| !t.is_empty());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), AppError> {
        let mut guard = self.token.write().unwrap_or_else(|p| p.into_inner());
        *guard = None;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// Token store persisted as a small JSON file (`{"token": "..."}`)
///
/// The file survives restarts the way browser local storage does. A missing,
/// unreadable or malformed file reads as "no token".
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store backed by `path`; the file is created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Cannot read token file {}: {}", self.path.display(), e);
                return None;
            }
        };
        match serde_json::from_str::<StoredToken>(&raw) {
            Ok(stored) if !stored.token.is_empty() => Some(stored.token),
            Ok(_) => None,
            Err(e) => {
                warn!("Ignoring malformed token file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set_token(&self, token: &str) -> Result<(), AppError> {
        if token.is_empty() {
            return self.clear_token();
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string(&StoredToken {
            token: token.to_string(),
        })?;
        fs::write(&self.path, contents)?;
        debug!("Session token stored in {}", self.path.display());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Session token removed from {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
