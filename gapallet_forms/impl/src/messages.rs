use gapallet_models::{
    contact::{ContactDraft, ContactField},
    lead::{LeadDraft, LeadField},
    quote::{QuoteDraft, QuoteField},
};

/// User facing texts of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormMessages {
    pub submit_label: &'static str,
    pub pending_label: &'static str,
    pub submitted: &'static str,
    pub failed: &'static str,
    pub missing_fields: &'static str,
}

/// A draft that can be driven by a [`LeadForm`](crate::LeadForm).
pub trait FormKind: LeadDraft {
    /// Used in logs.
    const NAME: &'static str;
    const MESSAGES: FormMessages;
}

const MISSING_FIELDS: &str = "Please fill in all required fields";

impl FormKind for ContactDraft {
    const NAME: &'static str = "contact";
    const MESSAGES: FormMessages = FormMessages {
        submit_label: "Send Message",
        pending_label: "Sending...",
        submitted: "Message sent successfully! We'll get back to you soon.",
        failed: "Failed to send message. Please try again.",
        missing_fields: MISSING_FIELDS,
    };
}

impl FormKind for QuoteDraft {
    const NAME: &'static str = "quote";
    const MESSAGES: FormMessages = FormMessages {
        submit_label: "Request Quote",
        pending_label: "Requesting...",
        submitted: "Quote request sent successfully! Our team responds within 24 hours.",
        failed: "Failed to send quote request. Please try again.",
        missing_fields: MISSING_FIELDS,
    };
}

pub(crate) fn invalid_field(field: &str) -> &'static str {
    if field == ContactField::Email.as_str() {
        "Please enter a valid email address"
    } else if field == QuoteField::PalletType.as_str() {
        "Please select a pallet type from our catalog"
    } else {
        "Please check the entered values"
    }
}
