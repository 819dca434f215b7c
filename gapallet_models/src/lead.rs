use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

use crate::{contact::ContactMessage, quote::QuoteRequest, validation::ValidationError};

/// A validated record, ready to be sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Lead {
    Contact(ContactMessage),
    Quote(QuoteRequest),
}

impl Lead {
    /// The backend resource this record is posted to.
    pub fn resource(&self) -> LeadResource {
        match self {
            Self::Contact(_) => LeadResource::Contact,
            Self::Quote(_) => LeadResource::Quote,
        }
    }
}

impl From<ContactMessage> for Lead {
    fn from(value: ContactMessage) -> Self {
        Self::Contact(value)
    }
}

impl From<QuoteRequest> for Lead {
    fn from(value: QuoteRequest) -> Self {
        Self::Quote(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadResource {
    Contact,
    Quote,
}

impl LeadResource {
    pub const ALL: [Self; 2] = [Self::Contact, Self::Quote];

    /// Resource path below the `/api` prefix, e.g. `/contact`.
    pub fn path(self) -> &'static str {
        match self {
            Self::Contact => "/contact",
            Self::Quote => "/quote",
        }
    }

    pub fn segment(self) -> &'static str {
        &self.path()[1..]
    }
}

impl fmt::Display for LeadResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Field state of one form, held as the raw text the user typed.
///
/// Blank strings mean "not filled". Nothing is checked until
/// [`validate`](LeadDraft::validate) turns the draft into a record.
pub trait LeadDraft: fmt::Debug + Clone + Default + PartialEq + Send + 'static {
    type Field: LeadField;
    type Record: Into<Lead> + fmt::Debug + Clone + Send + 'static;

    fn set(&mut self, field: Self::Field, value: String);

    fn get(&self, field: Self::Field) -> &str;

    fn validate(&self) -> Result<Self::Record, ValidationError>;

    fn is_blank(&self) -> bool {
        Self::Field::ALL
            .iter()
            .all(|&field| self.get(field).trim().is_empty())
    }
}

pub trait LeadField:
    fmt::Debug
    + fmt::Display
    + FromStr<Err = UnknownFieldError>
    + Copy
    + PartialEq
    + Send
    + Sync
    + 'static
{
    const ALL: &'static [Self];

    /// Wire name of the field, as used in the JSON payload.
    fn as_str(self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field {0:?}")]
pub struct UnknownFieldError(pub String);
