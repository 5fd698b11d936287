//! Contract error types for the SendInBlue plugin

use uuid::Uuid;

/// Errors surfaced by install/uninstall
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    /// A host store could not be reached; the current step was aborted
    #[error("Store unavailable: {store}: {source}")]
    StoreUnavailable {
        /// Store name
        store: &'static str,
        /// Underlying store error
        #[source]
        source: anyhow::Error,
    },

    /// An operation would touch state outside the plugin's namespace
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// One or more tenants could not be cleaned up; global state is retained
    #[error("Cleanup failed for {} tenant(s)", .failures.len())]
    TenantCleanup {
        /// Failed tenants with their errors
        failures: Vec<TenantFailure>,
    },

    /// Invalid module configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Error details
        message: String,
    },
}

impl LifecycleError {
    /// Wrap a collaborator error
    pub fn store(store: &'static str, source: anyhow::Error) -> Self {
        Self::StoreUnavailable { store, source }
    }

    /// Whether re-invoking the same operation may succeed
    pub fn is_retriable(&self) -> bool {
        matches!(
            self,
            Self::StoreUnavailable { .. } | Self::TenantCleanup { .. }
        )
    }
}

/// Cleanup failure of a single tenant
#[derive(Debug)]
pub struct TenantFailure {
    /// Tenant that failed
    pub tenant_id: Uuid,
    /// Error raised while sweeping it
    pub error: LifecycleError,
}
