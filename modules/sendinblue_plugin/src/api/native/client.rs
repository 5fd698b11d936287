//! Native client implementation - wraps the orchestrator for in-process calls

use crate::contract::{LifecycleError, SendInBlueApi, UninstallReport};
use crate::domain::LifecycleOrchestrator;
use std::sync::Arc;

/// Native client implementation that directly calls the orchestrator
///
/// This is the handle the host's extension manager keeps for the plugin.
#[derive(Clone)]
pub struct NativeClient {
    orchestrator: Arc<LifecycleOrchestrator>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(orchestrator: Arc<LifecycleOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

impl SendInBlueApi for NativeClient {
    fn configuration_page_url(&self) -> String {
        self.orchestrator.configuration_page_url()
    }

    fn widget_zones(&self) -> Vec<String> {
        self.orchestrator.widget_zones()
    }

    fn widget_view_component_name(&self, widget_zone: &str) -> String {
        self.orchestrator.widget_view_component_name(widget_zone)
    }

    fn install(&self) -> Result<(), LifecycleError> {
        self.orchestrator.install()
    }

    fn uninstall(&self) -> Result<UninstallReport, LifecycleError> {
        self.orchestrator.uninstall()
    }
}
