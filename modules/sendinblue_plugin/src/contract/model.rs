//! Contract models for the SendInBlue plugin
//!
//! These models describe the host-owned entities the plugin touches and the
//! plugin's own configuration record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace prefix of every setting key owned by the plugin
pub const SETTINGS_NAMESPACE: &str = "SendInBlueSettings";

/// Placeholder replaced with the marketing-automation tracker id
pub const TRACKING_ID_PLACEHOLDER: &str = "{TRACKING_ID}";

/// Placeholder replaced with the current customer's email
pub const CUSTOMER_EMAIL_PLACEHOLDER: &str = "{CUSTOMER_EMAIL}";

/// One storefront managed by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    /// Tenant identifier
    pub id: Uuid,
    /// Display name, used for logging only
    pub name: String,
}

/// Scope a setting value is stored under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingScope {
    /// Value shared by every tenant without an override
    Shared,
    /// Tenant-specific override
    Tenant(Uuid),
}

/// Plugin configuration record
///
/// Persisted field by field, each under `SendInBlueSettings.<FieldName>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConfigurationRecord {
    /// SendInBlue account API key
    pub api_key: Option<String>,
    /// Contact list used for synchronization
    pub list_id: i64,
    /// SMTP key (password)
    pub smtp_key: Option<String>,
    /// Sender of transactional emails
    pub sender_id: Option<String>,
    /// Whether transactional emails go through SendInBlue SMTP
    pub use_smtp: bool,
    /// Host email account created for SendInBlue SMTP
    pub email_account_id: Option<i64>,
    /// Whether transactional SMS are sent
    pub use_sms_notifications: bool,
    /// SMS sender name (11 alphanumeric characters max)
    pub sms_sender_name: Option<String>,
    /// Store owner phone number for SMS notifications
    pub store_owner_phone_number: Option<String>,
    /// Whether marketing automation tracking is enabled
    pub use_marketing_automation: bool,
    /// Marketing automation tracker id
    pub marketing_automation_key: Option<String>,
    /// Tracking script template rendered into the page head
    pub tracking_script: String,
}

impl Default for ConfigurationRecord {
    fn default() -> Self {
        Self {
            api_key: None,
            list_id: 0,
            smtp_key: None,
            sender_id: None,
            use_smtp: false,
            email_account_id: None,
            use_sms_notifications: false,
            sms_sender_name: None,
            store_owner_phone_number: None,
            use_marketing_automation: false,
            marketing_automation_key: None,
            tracking_script: DEFAULT_TRACKING_SCRIPT.to_string(),
        }
    }
}

/// Tracking script written on install
pub const DEFAULT_TRACKING_SCRIPT: &str = r#"<!-- SendInBlue tracking code -->
<script>
    (function() {
        window.sib = { equeue: [], client_key: '{TRACKING_ID}' };
        window.sib.email_id = '{CUSTOMER_EMAIL}';
        window.sendinblue = {}; for (var j = ['track', 'identify', 'trackLink', 'page'], i = 0; i < j.length; i++) { (function(k) { window.sendinblue[k] = function() { var arg = Array.prototype.slice.call(arguments); (window.sib[k] || function() { var t = {}; t[k] = arg; window.sib.equeue.push(t);})(arg[0], arg[1], arg[2]);};})(j[i]);}var n = document.createElement('script'),i = document.getElementsByTagName('script')[0]; n.type = 'text/javascript', n.id = 'sendinblue-js', n.async = !0, n.src = 'https://sibautomation.com/sa.js?key=' + window.sib.client_key, i.parentNode.insertBefore(n, i), window.sendinblue.page();
    })();
</script>"#;

/// Enumerated key set of a settings namespace
///
/// Stores delete exactly these keys; nothing else under the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsNamespace {
    /// Namespace tag (e.g. `SendInBlueSettings`)
    pub tag: String,
    /// Fully qualified keys belonging to the namespace
    pub keys: Vec<String>,
}

impl SettingsNamespace {
    /// Whether a fully qualified key belongs to the namespace
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }
}

/// Recurring background job registered with the host scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTaskDescriptor {
    /// Type identifier; unique across the scheduler
    pub type_id: String,
    /// Display name
    pub name: String,
    /// Run interval in seconds
    pub seconds: u64,
    /// Whether the host runs the task
    pub enabled: bool,
    /// Whether the host stops the task after a failed run
    pub stop_on_error: bool,
}

/// Display text shipped with the plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleResource {
    /// Resource key
    pub key: &'static str,
    /// Default (English) text
    pub text: &'static str,
}

/// Host transactional email account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAccount {
    /// Account identifier
    pub id: i64,
    /// Sender address
    pub email: String,
    /// Sender display name
    pub display_name: String,
}

/// Host entity that generic attributes can be attached to
///
/// The type tag is a fixed constant so attribute lookups never depend on
/// how the host represents the entity at runtime.
pub trait HostEntity {
    /// Stable entity type tag used as the attribute key group
    const ENTITY_TYPE: &'static str;

    /// Entity identifier
    fn entity_id(&self) -> i64;
}

/// Host message template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    /// Template identifier
    pub id: i64,
    /// Owning tenant
    pub tenant_id: Uuid,
    /// System name of the template
    pub name: String,
}

impl HostEntity for MessageTemplate {
    const ENTITY_TYPE: &'static str = "MessageTemplate";

    fn entity_id(&self) -> i64 {
        self.id
    }
}

/// Key/value metadata attached to a host entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericAttribute {
    /// Attribute identifier
    pub id: i64,
    /// Identifier of the entity the attribute is attached to
    pub entity_id: i64,
    /// Entity type tag
    pub key_group: String,
    /// Attribute key
    pub key: String,
    /// Attribute value
    pub value: String,
}

/// Outcome of a successful uninstall
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UninstallReport {
    /// Tenants swept
    pub tenants_processed: usize,
    /// SMTP email accounts deleted
    pub email_accounts_deleted: usize,
    /// Template attributes deleted
    pub template_attributes_deleted: usize,
    /// Setting values deleted across all scopes
    pub settings_deleted: usize,
    /// Whether a synchronization task descriptor was removed
    pub task_removed: bool,
    /// Locale resource keys deleted
    pub locale_resources_deleted: usize,
}
