//! Configuration for the SendInBlue plugin module

use crate::contract::LifecycleError;
use serde::Deserialize;

/// Seconds in one hour; the sync period is configured in whole hours
const SECONDS_PER_HOUR: u64 = 60 * 60;

/// SendInBlue plugin configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SendInBlueConfig {
    /// Contact synchronization period (hours)
    #[serde(default = "default_synchronization_period_hours")]
    pub synchronization_period_hours: u64,

    /// Type identifier of the synchronization task; unique in the scheduler
    #[serde(default = "default_synchronization_task_type")]
    pub synchronization_task_type: String,

    /// Display name of the synchronization task
    #[serde(default = "default_synchronization_task_name")]
    pub synchronization_task_name: String,

    /// Admin configuration route, relative to the tenant's store location
    #[serde(default = "default_configuration_route")]
    pub configuration_route: String,

    /// Render zone the tracking script is injected into
    #[serde(default = "default_widget_zone")]
    pub widget_zone: String,

    /// View component rendered in the widget zone
    #[serde(default = "default_widget_view_component")]
    pub widget_view_component: String,
}

impl Default for SendInBlueConfig {
    fn default() -> Self {
        Self {
            synchronization_period_hours: default_synchronization_period_hours(),
            synchronization_task_type: default_synchronization_task_type(),
            synchronization_task_name: default_synchronization_task_name(),
            configuration_route: default_configuration_route(),
            widget_zone: default_widget_zone(),
            widget_view_component: default_widget_view_component(),
        }
    }
}

impl SendInBlueConfig {
    /// Parse the module section of the host's YAML configuration
    pub fn from_yaml(raw: &str) -> Result<Self, LifecycleError> {
        let cfg: Self = serde_yaml::from_str(raw).map_err(|e| LifecycleError::Config {
            message: e.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject configurations that would register a broken task descriptor
    pub fn validate(&self) -> Result<(), LifecycleError> {
        if self.synchronization_period_hours == 0 {
            return Err(LifecycleError::Config {
                message: "synchronization_period_hours must be at least 1".to_string(),
            });
        }
        if self.synchronization_task_type.trim().is_empty() {
            return Err(LifecycleError::Config {
                message: "synchronization_task_type cannot be empty".to_string(),
            });
        }
        if self.widget_zone.trim().is_empty() {
            return Err(LifecycleError::Config {
                message: "widget_zone cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Task interval in seconds
    pub fn synchronization_interval_seconds(&self) -> u64 {
        self.synchronization_period_hours.saturating_mul(SECONDS_PER_HOUR)
    }
}

fn default_synchronization_period_hours() -> u64 {
    12
}

fn default_synchronization_task_type() -> String {
    "SendInBlue.SynchronizationTask".to_string()
}

fn default_synchronization_task_name() -> String {
    "Synchronization (SendInBlue plugin)".to_string()
}

fn default_configuration_route() -> String {
    "Admin/SendInBlue/Configure".to_string()
}

fn default_widget_zone() -> String {
    "head_html_tag".to_string()
}

fn default_widget_view_component() -> String {
    "WidgetsSendInBlue".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_convert_hours_to_seconds() {
        let cfg = SendInBlueConfig::default();
        assert_eq!(cfg.synchronization_period_hours, 12);
        assert_eq!(cfg.synchronization_interval_seconds(), 43_200);
    }

    #[test]
    fn test_from_yaml_overrides_and_defaults() {
        let cfg = SendInBlueConfig::from_yaml("synchronization_period_hours: 2\n").unwrap();
        assert_eq!(cfg.synchronization_interval_seconds(), 7_200);
        assert_eq!(cfg.synchronization_task_type, "SendInBlue.SynchronizationTask");
        assert_eq!(cfg.widget_zone, "head_html_tag");
    }

    #[test]
    fn test_from_yaml_rejects_unknown_fields() {
        let result = SendInBlueConfig::from_yaml("retry_count: 3\n");
        assert!(matches!(result, Err(LifecycleError::Config { .. })));
    }

    #[test]
    fn test_zero_period_is_rejected() {
        let result = SendInBlueConfig::from_yaml("synchronization_period_hours: 0\n");
        assert!(matches!(result, Err(LifecycleError::Config { .. })));
    }
}
