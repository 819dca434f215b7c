use std::sync::LazyLock;

use macros::nutype_string;
use regex::Regex;

pub mod contact;
pub mod lead;
mod macros;
pub mod pallet;
pub mod quote;
pub mod validation;

nutype_string!(LeadName(validate(not_empty)));

nutype_string!(
    /// Email address as required by the contact form.
    EmailAddress(validate(regex = EMAIL_ADDRESS_REGEX))
);

/// Basic `local@domain.tld` shape, the same check a browser applies to
/// `<input type="email">` fields.
pub static EMAIL_ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

nutype_string!(
    /// Email address as required by the quote form, which only checks for
    /// presence.
    LeadEmail(validate(not_empty))
);

nutype_string!(PhoneNumber(validate(not_empty)));
nutype_string!(CompanyName(validate(not_empty)));
nutype_string!(MessageContent(validate(not_empty)));
nutype_string!(PalletDimensions(validate(not_empty)));
nutype_string!(AdditionalInfo(validate(not_empty)));

#[nutype::nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Deref,
    From,
    Serialize,
    Deserialize,
))]
pub struct Quantity(u64);

impl Quantity {
    /// Parses the raw text of a quantity input.
    ///
    /// Blank, non-numeric, negative, fractional and out of range input all
    /// yield `None`, so an unparsed string never ends up in the payload.
    pub fn parse_input(input: &str) -> Option<Self> {
        input.trim().parse::<u64>().ok().map(Self::new)
    }
}
