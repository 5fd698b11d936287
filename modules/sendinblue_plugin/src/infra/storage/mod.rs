//! Storage layer - in-memory host stores

pub mod memory;

pub use memory::{
    InMemoryEmailAccountRegistry, InMemoryGenericAttributeStore, InMemoryHost,
    InMemoryLocalizationStore, InMemoryMessageTemplateRegistry, InMemorySettingsStore,
    InMemoryTaskScheduler, InMemoryTenantRegistry,
};
