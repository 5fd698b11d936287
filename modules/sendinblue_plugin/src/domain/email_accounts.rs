//! Per-tenant removal of the SendInBlue SMTP email account

use crate::contract::LifecycleError;
use super::repository::EmailAccountRegistry;
use super::settings::SettingsProvisioner;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Record field holding the SMTP account id
pub const EMAIL_ACCOUNT_ID_FIELD: &str = "EmailAccountId";

/// Deletes the email account a tenant's settings point at
#[derive(Clone)]
pub struct TenantEmailAccountSweeper {
    settings: SettingsProvisioner,
    accounts: Arc<dyn EmailAccountRegistry>,
}

impl TenantEmailAccountSweeper {
    pub fn new(settings: SettingsProvisioner, accounts: Arc<dyn EmailAccountRegistry>) -> Self {
        Self { settings, accounts }
    }

    /// Delete the tenant's account, inherited from shared settings if needed
    ///
    /// Returns the deleted account id, or `None` when nothing resolved.
    pub fn remove(&self, tenant_id: Uuid) -> Result<Option<i64>, LifecycleError> {
        let resolved = self.settings.resolve(tenant_id, EMAIL_ACCOUNT_ID_FIELD)?;
        let Some(account_id) = resolved.as_ref().and_then(account_id_from_value) else {
            tracing::debug!(tenant_id = %tenant_id, "No SendInBlue email account configured");
            return Ok(None);
        };
        self.delete_account(account_id, Some(tenant_id))
    }

    /// Delete the account referenced at shared scope
    ///
    /// Covers hosts with no tenants and shared accounts every tenant
    /// overrides. An account already deleted through a tenant is a no-op.
    pub fn remove_shared(&self) -> Result<Option<i64>, LifecycleError> {
        let stored = self.settings.shared(EMAIL_ACCOUNT_ID_FIELD)?;
        let Some(account_id) = stored.as_ref().and_then(account_id_from_value) else {
            return Ok(None);
        };
        self.delete_account(account_id, None)
    }

    fn delete_account(
        &self,
        account_id: i64,
        tenant_id: Option<Uuid>,
    ) -> Result<Option<i64>, LifecycleError> {
        let account = self
            .accounts
            .get_by_id(account_id)
            .map_err(|e| LifecycleError::store("email_accounts", e))?;
        let Some(account) = account else {
            tracing::debug!(
                tenant_id = ?tenant_id,
                account_id,
                "Configured email account no longer exists"
            );
            return Ok(None);
        };

        self.accounts
            .delete(&account)
            .map_err(|e| LifecycleError::store("email_accounts", e))?;
        tracing::info!(
            tenant_id = ?tenant_id,
            account_id,
            email = %account.email,
            "SendInBlue email account deleted"
        );
        Ok(Some(account_id))
    }
}

/// Positive integer ids only; numeric strings are accepted as well
fn account_id_from_value(value: &Value) -> Option<i64> {
    let id = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    (id > 0).then_some(id)
}
