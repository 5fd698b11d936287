//! Per-tenant removal of SendInBlue metadata on message templates

use crate::contract::{GenericAttribute, HostEntity, LifecycleError};
use super::repository::{GenericAttributeStore, MessageTemplateRegistry};
use std::sync::Arc;
use uuid::Uuid;

/// Remote SendInBlue template id
pub const TEMPLATE_ID_ATTRIBUTE: &str = "TemplateId";

/// Whether the template is sent as a SendInBlue template
pub const SENDINBLUE_TEMPLATE_ATTRIBUTE: &str = "SendInBlueTemplate";

/// Attribute keys owned by the plugin
pub const KNOWN_TEMPLATE_ATTRIBUTE_KEYS: [&str; 2] =
    [TEMPLATE_ID_ATTRIBUTE, SENDINBLUE_TEMPLATE_ATTRIBUTE];

/// Removes known-key attributes from every template of a tenant
#[derive(Clone)]
pub struct TemplateAttributeCleaner {
    templates: Arc<dyn MessageTemplateRegistry>,
    attributes: Arc<dyn GenericAttributeStore>,
}

impl TemplateAttributeCleaner {
    pub fn new(
        templates: Arc<dyn MessageTemplateRegistry>,
        attributes: Arc<dyn GenericAttributeStore>,
    ) -> Self {
        Self {
            templates,
            attributes,
        }
    }

    /// Clean every template of a tenant
    ///
    /// Returns the number of attributes deleted.
    pub fn remove_known_keys(&self, tenant_id: Uuid) -> Result<usize, LifecycleError> {
        let templates = self
            .templates
            .list_for_tenant(tenant_id)
            .map_err(|e| LifecycleError::store("message_templates", e))?;

        let mut deleted = 0;
        for template in &templates {
            deleted += self.clean_entity(template)?;
        }
        tracing::debug!(
            tenant_id = %tenant_id,
            templates = templates.len(),
            deleted,
            "Template attributes cleaned"
        );
        Ok(deleted)
    }

    /// Delete the known-key attributes of one entity in a single batch
    fn clean_entity<E: HostEntity>(&self, entity: &E) -> Result<usize, LifecycleError> {
        let owned: Vec<GenericAttribute> = self
            .attributes
            .get_for_entity(entity.entity_id(), E::ENTITY_TYPE)
            .map_err(|e| LifecycleError::store("generic_attributes", e))?
            .into_iter()
            .filter(|attribute| is_known_key(&attribute.key))
            .collect();

        if owned.is_empty() {
            return Ok(0);
        }
        self.attributes
            .delete_batch(&owned)
            .map_err(|e| LifecycleError::store("generic_attributes", e))?;
        Ok(owned.len())
    }
}

/// Exact, case-sensitive match against the plugin's keys
pub fn is_known_key(key: &str) -> bool {
    KNOWN_TEMPLATE_ATTRIBUTE_KEYS.contains(&key)
}
