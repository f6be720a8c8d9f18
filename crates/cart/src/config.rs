//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults match the production storefront.
//!
//! - `MAGMA_WHATSAPP_PHONE` - Order recipient in international format,
//!   digits only (default: the store's number)
//! - `MAGMA_CART_PATH` - Path of the durable cart slot file
//!   (default: `magmaCarrito.json`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// WhatsApp number orders are sent to when none is configured.
pub const DEFAULT_WHATSAPP_PHONE: &str = "5493624003295";

/// Slot file used when no path is configured. The name is carried over from
/// the storage key of earlier storefront releases.
pub const DEFAULT_SLOT_PATH: &str = "magmaCarrito.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, &'static str),
}

/// Cart application configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Order recipient phone number, digits only.
    pub whatsapp_phone: String,
    /// Path of the durable cart slot file.
    pub slot_path: PathBuf,
}

impl CartConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let whatsapp_phone =
            env::var("MAGMA_WHATSAPP_PHONE").unwrap_or_else(|_| DEFAULT_WHATSAPP_PHONE.to_owned());
        validate_phone(&whatsapp_phone)
            .map_err(|reason| ConfigError::InvalidEnvVar("MAGMA_WHATSAPP_PHONE".to_owned(), reason))?;

        let slot_path = env::var("MAGMA_CART_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_SLOT_PATH), PathBuf::from);

        Ok(Self {
            whatsapp_phone,
            slot_path,
        })
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            whatsapp_phone: DEFAULT_WHATSAPP_PHONE.to_owned(),
            slot_path: PathBuf::from(DEFAULT_SLOT_PATH),
        }
    }
}

/// A phone number is digits only, in international format without `+`.
fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if phone.is_empty() {
        return Err("must not be empty");
    }
    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err("must contain digits only");
    }
    Ok(())
}
