// Clippy allows for reasonable defaults
#![allow(clippy::new_without_default)] // Default not always appropriate for stateful types
#![allow(clippy::derivable_impls)] // Explicit Default impls can be clearer

// Module declarations
pub mod api;
pub mod config;
pub mod events;
pub mod models;
pub mod navigator;
pub mod session;
pub mod wizard;

// Re-export models for use in embedding applications
pub use models::*;

pub use api::{ApiError, DirectoryApi, HttpDirectoryClient};
pub use config::ApiConfig;
pub use navigator::{AppScreen, ViewNavigator};
pub use session::{DiscoverySession, SessionError};
pub use wizard::{WizardEngine, WizardError, WizardStep};
