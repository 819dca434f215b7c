use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

/// The pallet catalog offered on the quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PalletType {
    #[serde(rename = "GMA Stringer Pallet")]
    GmaStringer,
    #[serde(rename = "Block Pallet (4-Way)")]
    Block,
    #[serde(rename = "Euro Pallet (EPAL)")]
    Euro,
    #[serde(rename = "Half Pallet")]
    Half,
    #[serde(rename = "Beverage Pallet")]
    Beverage,
    #[serde(rename = "Automotive Pallet")]
    Automotive,
    #[serde(rename = "Drum Pallet")]
    Drum,
    #[serde(rename = "Recycled/Reconditioned Pallet")]
    Recycled,
    #[serde(rename = "Heat Treated Pallet (ISPM-15)")]
    HeatTreated,
    #[serde(rename = "Custom Pallet")]
    Custom,
}

impl PalletType {
    pub const ALL: [Self; 10] = [
        Self::GmaStringer,
        Self::Block,
        Self::Euro,
        Self::Half,
        Self::Beverage,
        Self::Automotive,
        Self::Drum,
        Self::Recycled,
        Self::HeatTreated,
        Self::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::GmaStringer => "GMA Stringer Pallet",
            Self::Block => "Block Pallet (4-Way)",
            Self::Euro => "Euro Pallet (EPAL)",
            Self::Half => "Half Pallet",
            Self::Beverage => "Beverage Pallet",
            Self::Automotive => "Automotive Pallet",
            Self::Drum => "Drum Pallet",
            Self::Recycled => "Recycled/Reconditioned Pallet",
            Self::HeatTreated => "Heat Treated Pallet (ISPM-15)",
            Self::Custom => "Custom Pallet",
        }
    }

    /// Length x width x height as listed in the catalog. `None` for custom
    /// pallets, which are built to the dimensions given in the request.
    pub fn standard_dimensions(self) -> Option<&'static str> {
        match self {
            Self::GmaStringer | Self::Block | Self::Recycled | Self::HeatTreated => {
                Some(r#"48" x 40" x 6""#)
            }
            Self::Euro => Some(r#"47.24" x 31.50" x 5.7" (1200x800mm)"#),
            Self::Half => Some(r#"48" x 20" x 6""#),
            Self::Beverage => Some(r#"48" x 36" x 6""#),
            Self::Automotive => Some(r#"48" x 45" x 6""#),
            Self::Drum => Some(r#"48" x 48" x 6""#),
            Self::Custom => None,
        }
    }
}

impl fmt::Display for PalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown pallet type {0:?}")]
pub struct UnknownPalletTypeError(pub String);

impl FromStr for PalletType {
    type Err = UnknownPalletTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|pallet_type| pallet_type.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPalletTypeError(s.into()))
    }
}
