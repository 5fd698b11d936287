//! Synchronization task descriptor management

use crate::contract::{LifecycleError, ScheduledTaskDescriptor};
use super::repository::TaskScheduler;
use std::sync::Arc;

/// Registers and removes the contact synchronization task
///
/// Tasks are identified by type, never by display name.
#[derive(Clone)]
pub struct ScheduledSyncTaskManager {
    scheduler: Arc<dyn TaskScheduler>,
}

impl ScheduledSyncTaskManager {
    pub fn new(scheduler: Arc<dyn TaskScheduler>) -> Self {
        Self { scheduler }
    }

    /// Insert an enabled task unless one of the same type exists
    ///
    /// Returns `true` when a task was inserted.
    pub fn ensure_registered(
        &self,
        type_id: &str,
        name: &str,
        interval_seconds: u64,
    ) -> Result<bool, LifecycleError> {
        if let Some(existing) = self.find(type_id)? {
            tracing::debug!(
                type_id,
                name = %existing.name,
                "Synchronization task already registered"
            );
            return Ok(false);
        }

        let task = ScheduledTaskDescriptor {
            type_id: type_id.to_string(),
            name: name.to_string(),
            seconds: interval_seconds,
            enabled: true,
            stop_on_error: false,
        };
        self.scheduler
            .insert(&task)
            .map_err(|e| LifecycleError::store("scheduler", e))?;
        tracing::info!(type_id, seconds = interval_seconds, "Synchronization task registered");
        Ok(true)
    }

    /// Delete the task of this type if present
    ///
    /// Returns `true` when a task was deleted.
    pub fn ensure_removed(&self, type_id: &str) -> Result<bool, LifecycleError> {
        let Some(task) = self.find(type_id)? else {
            tracing::debug!(type_id, "No synchronization task to remove");
            return Ok(false);
        };
        self.scheduler
            .delete(&task)
            .map_err(|e| LifecycleError::store("scheduler", e))?;
        tracing::info!(type_id, "Synchronization task removed");
        Ok(true)
    }

    fn find(&self, type_id: &str) -> Result<Option<ScheduledTaskDescriptor>, LifecycleError> {
        self.scheduler
            .find_by_type(type_id)
            .map_err(|e| LifecycleError::store("scheduler", e))
    }
}
