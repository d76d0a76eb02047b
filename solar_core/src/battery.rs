//! # Battery Chemistry Profiles
//!
//! The two supported battery chemistries and their fixed sizing defaults.
//! Depth of discharge bounds the usable fraction of the bank's rated Ah, so
//! it feeds directly into the capacity formula; the default cost per Ah
//! seeds the cost settings when the user doesn't override it.
//!
//! This table is the only code path that may set these values.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::SolarError;

/// Supported battery chemistries.
///
/// A closed enum: anything outside it is rejected at the parse boundary
/// with [`SolarError::UnsupportedBatteryType`], before any computation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatteryType {
    /// Flooded or sealed lead-acid
    #[serde(rename = "Lead-acid")]
    LeadAcid,
    /// Lithium-ion (LiFePO4 and similar)
    #[serde(rename = "Lithium-ion")]
    Lithium,
}

/// Sizing defaults for a battery chemistry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatteryProfile {
    /// Usable fraction of rated capacity before recharge is required
    pub depth_of_discharge: f64,
    /// Default cost per amp-hour in rupees
    pub default_cost_per_ah: i64,
}

impl BatteryType {
    /// All battery types for UI selection
    pub const ALL: [BatteryType; 2] = [BatteryType::LeadAcid, BatteryType::Lithium];

    /// Get the fixed profile for this chemistry.
    pub fn profile(&self) -> BatteryProfile {
        match self {
            BatteryType::LeadAcid => BatteryProfile {
                depth_of_discharge: 0.80,
                default_cost_per_ah: 15,
            },
            BatteryType::Lithium => BatteryProfile {
                depth_of_discharge: 0.90,
                default_cost_per_ah: 22,
            },
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BatteryType::LeadAcid => "Lead-acid",
            BatteryType::Lithium => "Lithium-ion",
        }
    }

    /// One-line caption shown next to the battery type selector.
    pub fn dod_note(&self) -> String {
        format!(
            "Depth of Discharge (DOD) for {} battery is {:.0}%.",
            self.display_name(),
            self.profile().depth_of_discharge * 100.0
        )
    }
}

impl FromStr for BatteryType {
    type Err = SolarError;

    /// Parse from common string representations
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '_'], "-").as_str() {
            "lead-acid" | "leadacid" | "lead" => Ok(BatteryType::LeadAcid),
            "lithium-ion" | "lithium" | "li-ion" | "liion" => Ok(BatteryType::Lithium),
            _ => Err(SolarError::unsupported_battery_type(s)),
        }
    }
}

impl std::fmt::Display for BatteryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_acid_profile() {
        let profile = BatteryType::LeadAcid.profile();
        assert_eq!(profile.depth_of_discharge, 0.80);
        assert_eq!(profile.default_cost_per_ah, 15);
    }

    #[test]
    fn test_lithium_profile() {
        let profile = BatteryType::Lithium.profile();
        assert_eq!(profile.depth_of_discharge, 0.90);
        assert_eq!(profile.default_cost_per_ah, 22);
    }

    #[test]
    fn test_from_str_variants() {
        assert_eq!("Lead-acid".parse::<BatteryType>().unwrap(), BatteryType::LeadAcid);
        assert_eq!("lead acid".parse::<BatteryType>().unwrap(), BatteryType::LeadAcid);
        assert_eq!("Lithium-ion".parse::<BatteryType>().unwrap(), BatteryType::Lithium);
        assert_eq!("li-ion".parse::<BatteryType>().unwrap(), BatteryType::Lithium);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "NiCd".parse::<BatteryType>().unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_BATTERY_TYPE");
    }

    #[test]
    fn test_serde_rename() {
        let json = serde_json::to_string(&BatteryType::LeadAcid).unwrap();
        assert_eq!(json, "\"Lead-acid\"");
        let roundtrip: BatteryType = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, BatteryType::LeadAcid);
    }

    #[test]
    fn test_dod_note() {
        assert_eq!(
            BatteryType::Lithium.dod_note(),
            "Depth of Discharge (DOD) for Lithium-ion battery is 90%."
        );
    }
}
