//! Domain layer - lifecycle components and their orchestration

pub mod email_accounts;
pub mod events;
pub mod locales;
pub mod repository;
pub mod schedule;
pub mod service;
pub mod settings;
pub mod template_attributes;
pub mod validation;

pub use email_accounts::TenantEmailAccountSweeper;
pub use events::{EventPublisher, LifecycleEvent, NoOpEventPublisher};
pub use locales::{LocaleResourceCatalog, LOCALE_PREFIX, LOCALE_RESOURCES};
pub use repository::HostStores;
pub use schedule::ScheduledSyncTaskManager;
pub use service::LifecycleOrchestrator;
pub use settings::SettingsProvisioner;
pub use template_attributes::{TemplateAttributeCleaner, KNOWN_TEMPLATE_ATTRIBUTE_KEYS};
