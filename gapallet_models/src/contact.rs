use serde::Serialize;

use crate::{
    lead::{LeadDraft, LeadField},
    macros::lead_fields,
    validation::{optional, ValidationError, Validator},
    CompanyName, EmailAddress, LeadName, MessageContent, PhoneNumber,
};

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: LeadName,
    pub email: EmailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyName>,
    pub message: MessageContent,
}

lead_fields!(ContactField {
    Name => "name",
    Email => "email",
    Phone => "phone",
    Company => "company",
    Message => "message",
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl LeadDraft for ContactDraft {
    type Field = ContactField;
    type Record = ContactMessage;

    fn set(&mut self, field: ContactField, value: String) {
        *match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Company => &mut self.company,
            ContactField::Message => &mut self.message,
        } = value;
    }

    fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }

    fn validate(&self) -> Result<ContactMessage, ValidationError> {
        let mut validator = Validator::default();
        let name = validator.required(ContactField::Name.as_str(), &self.name);
        let email = validator.required(ContactField::Email.as_str(), &self.email);
        let message = validator.required(ContactField::Message.as_str(), &self.message);

        validator.finish(|| {
            Some(ContactMessage {
                name: name?,
                email: email?,
                phone: optional(&self.phone),
                company: optional(&self.company),
                message: message?,
            })
        })
    }
}
