//! Locale resources shipped with the plugin
//!
//! The catalog is a fixed, ordered table. Install upserts every entry so a
//! newer table replaces text left by an older install; uninstall deletes
//! exactly the table's keys.

use crate::contract::{LifecycleError, LocaleResource};
use super::repository::LocalizationCatalogStore;
use super::validation::validate_locale_catalog;
use std::sync::Arc;

/// Prefix shared by every plugin resource key
pub const LOCALE_PREFIX: &str = "Plugins.Misc.SendInBlue.";

/// Resources written on install
pub static LOCALE_RESOURCES: &[LocaleResource] = &[
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.AccountInfo",
        text: "Account info",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.AccountInfo.Hint",
        text: "Display account information.",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.ActivateSMTP",
        text: "On your SendinBlue account, the SMTP has not been enabled yet. To request its activation, simply send an email to our support team at contact@sendinblue.com and mention that you will be using the SMTP with the nopCommerce plugin.",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.AddNewSMSNotification",
        text: "Add new SMS notification",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.BillingAddressPhone",
        text: "Billing address phone number",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.CustomerPhone",
        text: "Customer phone number",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.EditTemplate",
        text: "Edit template",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.AllowedTokens",
        text: "Allowed message tokens",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.AllowedTokens.Hint",
        text: "This is a list of the message tokens you can use in your SMS.",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.ApiKey",
        text: "API key",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.ApiKey.Hint",
        text: "Input your SendInBlue account API key.",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.CampaignList",
        text: "List",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.CampaignList.Hint",
        text: "Choose list of contacts to send SMS campaign.",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.CampaignSenderName",
        text: "Send SMS campaign from",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.CampaignSenderName.Hint",
        text: "Input the name of the sender. The number of characters is limited to 11 (alphanumeric format).",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.CampaignText",
        text: "Text",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.CampaignText.Hint",
        text: "Specify SMS campaign content. The number of characters is limited to 160 for one message.",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.List",
        text: "List",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.List.Hint",
        text: "Choose list of contacts to synchronize.",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.MaKey",
        text: "Tracker ID",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.MaKey.Hint",
        text: "Input your Tracker ID.",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.Sender",
        text: "Send emails from",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.Sender.Hint",
        text: "Choose sender of your transactional emails.",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.SmsSenderName",
        text: "Send SMS from",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.SmsSenderName.Hint",
        text: "Input the name of the sender. The number of characters is limited to 11 (alphanumeric format).",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.SmtpKey",
        text: "SMTP key",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.SmtpKey.Hint",
        text: "Specify SMTP key (password).",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.StoreOwnerPhoneNumber",
        text: "Store owner phone number",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.StoreOwnerPhoneNumber.Hint",
        text: "Input store owner phone number for SMS notifications.",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.TrackingScript",
        text: "Tracking script",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.TrackingScript.Hint",
        text: "Paste the tracking script generated by SendInBlue here. {TRACKING_ID} and {CUSTOMER_EMAIL} will be dynamically replaced.",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.UseMarketingAutomation",
        text: "Use Marketing Automation",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.UseMarketingAutomation.Hint",
        text: "Check for enable SendinBlue Automation.",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.UseSmsNotifications",
        text: "Use SMS notifications",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.UseSmsNotifications.Hint",
        text: "Check for sending transactional SMS.",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.UseSmtp",
        text: "Use SendInBlue SMTP",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Fields.UseSmtp.Hint",
        text: "Check for using SendInBlue SMTP for sending transactional emails.",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.General",
        text: "General",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.ImportProcess",
        text: "Your import is in process",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.ManualSync",
        text: "Manual synchronization",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.MarketingAutomation",
        text: "Marketing Automation",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.MyPhone",
        text: "Store owner phone number",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.PhoneType",
        text: "Type of phone number",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.SendInBlueTemplate",
        text: "SendInBlue email template",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.SMS",
        text: "SMS",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.SMS.Campaigns",
        text: "SMS campaigns",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.SMS.Campaigns.Sent",
        text: "Campaign successfully sent",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.SMS.Campaigns.Submit",
        text: "Send campaign",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.SMSText",
        text: "Text",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.StandardTemplate",
        text: "Standard message template",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Synchronization",
        text: "Synchronization",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.TemplateType",
        text: "Template type",
    },
    LocaleResource {
        key: "Plugins.Misc.SendInBlue.Transactional",
        text: "Transactional emails",
    },
];

/// Upserts and deletes the plugin's locale resources
#[derive(Clone)]
pub struct LocaleResourceCatalog {
    store: Arc<dyn LocalizationCatalogStore>,
    resources: &'static [LocaleResource],
}

impl LocaleResourceCatalog {
    pub fn new(store: Arc<dyn LocalizationCatalogStore>) -> Self {
        Self::with_resources(store, LOCALE_RESOURCES)
    }

    /// Catalog over a custom table
    pub fn with_resources(
        store: Arc<dyn LocalizationCatalogStore>,
        resources: &'static [LocaleResource],
    ) -> Self {
        Self { store, resources }
    }

    /// Write every resource, overwriting existing text
    pub fn upsert_all(&self) -> Result<usize, LifecycleError> {
        validate_locale_catalog(self.resources, LOCALE_PREFIX)?;
        for resource in self.resources {
            self.store
                .upsert(resource.key, resource.text)
                .map_err(|e| LifecycleError::store("localization", e))?;
        }
        tracing::debug!(count = self.resources.len(), "Locale resources upserted");
        Ok(self.resources.len())
    }

    /// Delete every key of the table
    pub fn delete_all(&self) -> Result<usize, LifecycleError> {
        validate_locale_catalog(self.resources, LOCALE_PREFIX)?;
        for resource in self.resources {
            self.store
                .delete(resource.key)
                .map_err(|e| LifecycleError::store("localization", e))?;
        }
        tracing::debug!(count = self.resources.len(), "Locale resources deleted");
        Ok(self.resources.len())
    }
}
