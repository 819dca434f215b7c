use serde::Serialize;

use crate::{
    lead::{LeadDraft, LeadField},
    macros::lead_fields,
    pallet::PalletType,
    validation::{optional, ValidationError, Validator},
    AdditionalInfo, CompanyName, LeadEmail, LeadName, PalletDimensions, PhoneNumber, Quantity,
};

/// Body of `POST /api/quote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteRequest {
    pub name: LeadName,
    pub email: LeadEmail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyName>,
    pub pallet_type: PalletType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<PalletDimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<AdditionalInfo>,
}

lead_fields!(QuoteField {
    Name => "name",
    Email => "email",
    Phone => "phone",
    Company => "company",
    PalletType => "pallet_type",
    Quantity => "quantity",
    Dimensions => "dimensions",
    AdditionalInfo => "additional_info",
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub pallet_type: String,
    /// Raw text of the quantity input, parsed on validation.
    pub quantity: String,
    pub dimensions: String,
    pub additional_info: String,
}

impl LeadDraft for QuoteDraft {
    type Field = QuoteField;
    type Record = QuoteRequest;

    fn set(&mut self, field: QuoteField, value: String) {
        *match field {
            QuoteField::Name => &mut self.name,
            QuoteField::Email => &mut self.email,
            QuoteField::Phone => &mut self.phone,
            QuoteField::Company => &mut self.company,
            QuoteField::PalletType => &mut self.pallet_type,
            QuoteField::Quantity => &mut self.quantity,
            QuoteField::Dimensions => &mut self.dimensions,
            QuoteField::AdditionalInfo => &mut self.additional_info,
        } = value;
    }

    fn get(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::Name => &self.name,
            QuoteField::Email => &self.email,
            QuoteField::Phone => &self.phone,
            QuoteField::Company => &self.company,
            QuoteField::PalletType => &self.pallet_type,
            QuoteField::Quantity => &self.quantity,
            QuoteField::Dimensions => &self.dimensions,
            QuoteField::AdditionalInfo => &self.additional_info,
        }
    }

    fn validate(&self) -> Result<QuoteRequest, ValidationError> {
        let mut validator = Validator::default();
        let name = validator.required(QuoteField::Name.as_str(), &self.name);
        let email = validator.required(QuoteField::Email.as_str(), &self.email);
        let pallet_type =
            validator.required_parsed(QuoteField::PalletType.as_str(), &self.pallet_type);

        validator.finish(|| {
            Some(QuoteRequest {
                name: name?,
                email: email?,
                phone: optional(&self.phone),
                company: optional(&self.company),
                pallet_type: pallet_type?,
                quantity: Quantity::parse_input(&self.quantity),
                dimensions: optional(&self.dimensions),
                additional_info: optional(&self.additional_info),
            })
        })
    }
}
