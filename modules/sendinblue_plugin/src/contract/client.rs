//! Native client trait for the host's extension manager
//!
//! The host enables, disables and renders the plugin through this trait.
//! NO HTTP - direct function calls.

use super::{error::LifecycleError, model::UninstallReport};

/// SendInBlue plugin API
pub trait SendInBlueApi: Send + Sync {
    /// Admin configuration page URL, relative to the tenant's store location
    fn configuration_page_url(&self) -> String;

    /// Render zones the plugin injects markup into
    fn widget_zones(&self) -> Vec<String>;

    /// View component rendered in a zone
    fn widget_view_component_name(&self, widget_zone: &str) -> String;

    /// Provision settings, the synchronization task and locale resources
    fn install(&self) -> Result<(), LifecycleError>;

    /// Remove everything the plugin created, for every tenant
    fn uninstall(&self) -> Result<UninstallReport, LifecycleError>;
}
