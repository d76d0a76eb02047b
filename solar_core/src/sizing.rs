//! # Solar + Battery Sizing Calculation
//!
//! Sizes a panel array and battery bank for a daily energy load with a given
//! number of backup days, and prices the system.
//!
//! ## Assumptions
//!
//! - Panel output derated by panel and inverter efficiency only
//! - Battery bank sized on nameplate Ah at the chosen bus voltage, limited
//!   by the chemistry's depth of discharge
//! - Inverter rated exactly at peak load, no added margin
//! - Panel count and battery Ah always round up: under-provisioning is
//!   never acceptable
//!
//! ## Example
//!
//! ```rust
//! use solar_core::sizing::{compute, SizingInput};
//! use solar_core::battery::BatteryType;
//!
//! let input = SizingInput {
//!     daily_load_kwh: 6.0,
//!     backup_days: 2,
//!     battery_voltage: 48,
//!     battery_type: BatteryType::LeadAcid,
//!     sun_hours: 6.0,
//!     panel_wattage: 330,
//!     peak_load_kw: 2.0,
//!     panel_efficiency: 0.8,
//!     inverter_efficiency: 0.9,
//!     cost_per_panel: 13000,
//!     cost_per_ah: 15,
//! };
//!
//! let result = compute(&input).unwrap();
//! assert_eq!(result.panel_count, 5);
//! assert_eq!(result.battery_capacity_ah, 313);
//! assert_eq!(result.total_cost, 69695);
//! ```

use serde::{Deserialize, Serialize};

use crate::battery::BatteryType;
use crate::errors::{SolarError, SolarResult};

/// Battery bus voltages supported by the selector (V)
pub const SUPPORTED_VOLTAGES: [u32; 6] = [12, 24, 48, 60, 72, 96];

/// Panel wattages supported by the selector (W)
pub const SUPPORTED_PANEL_WATTAGES: [u32; 4] = [250, 300, 330, 400];

/// Input parameters for a sizing calculation.
///
/// All money values are whole rupees. One instance is built per form
/// submission; results are derived fresh on every change, never cached.
///
/// ## JSON Example
///
/// ```json
/// {
///   "daily_load_kwh": 6.0,
///   "backup_days": 2,
///   "battery_voltage": 48,
///   "battery_type": "Lead-acid",
///   "sun_hours": 6.0,
///   "panel_wattage": 330,
///   "peak_load_kw": 2.0,
///   "panel_efficiency": 0.8,
///   "inverter_efficiency": 0.9,
///   "cost_per_panel": 13000,
///   "cost_per_ah": 15
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingInput {
    /// Daily energy use in kWh, must be positive
    pub daily_load_kwh: f64,

    /// Days of autonomy the battery bank must cover, at least 1
    pub backup_days: u32,

    /// Battery bus voltage (V), one of [`SUPPORTED_VOLTAGES`]
    pub battery_voltage: u32,

    /// Battery chemistry; fixes depth of discharge via its profile
    pub battery_type: BatteryType,

    /// Equivalent full-intensity sunlight hours per day, 1.0 to 24.0
    pub sun_hours: f64,

    /// Rated wattage per panel (W), one of [`SUPPORTED_PANEL_WATTAGES`]
    pub panel_wattage: u32,

    /// Peak simultaneous load in kW, at least 0.5
    pub peak_load_kw: f64,

    /// Panel derating factor in (0, 1]
    pub panel_efficiency: f64,

    /// Inverter conversion efficiency in (0, 1]
    pub inverter_efficiency: f64,

    /// Cost per panel in rupees, must be positive
    pub cost_per_panel: i64,

    /// Cost per amp-hour of battery capacity in rupees, must be positive
    pub cost_per_ah: i64,
}

impl Default for SizingInput {
    /// Form defaults from the original tool: a 6 kWh/day household on a
    /// 48 V lead-acid bank with 2 days of backup.
    fn default() -> Self {
        SizingInput {
            daily_load_kwh: 6.0,
            backup_days: 2,
            battery_voltage: 48,
            battery_type: BatteryType::LeadAcid,
            sun_hours: 6.0,
            panel_wattage: 330,
            peak_load_kw: 2.0,
            panel_efficiency: 0.8,
            inverter_efficiency: 0.9,
            cost_per_panel: 13000,
            cost_per_ah: BatteryType::LeadAcid.profile().default_cost_per_ah,
        }
    }
}

impl SizingInput {
    /// Validate input parameters.
    ///
    /// The interactive form constrains each field already, but the engine
    /// defends at its own boundary: a zero efficiency or sun-hours value
    /// must surface as `InvalidInput` here, never as a division inside
    /// the formula.
    pub fn validate(&self) -> SolarResult<()> {
        if !self.daily_load_kwh.is_finite() || self.daily_load_kwh <= 0.0 {
            return Err(SolarError::invalid_input(
                "daily_load_kwh",
                self.daily_load_kwh.to_string(),
                "Daily load must be positive",
            ));
        }
        if self.backup_days < 1 {
            return Err(SolarError::invalid_input(
                "backup_days",
                self.backup_days.to_string(),
                "At least 1 backup day is required",
            ));
        }
        if !SUPPORTED_VOLTAGES.contains(&self.battery_voltage) {
            return Err(SolarError::invalid_input(
                "battery_voltage",
                self.battery_voltage.to_string(),
                "Voltage must be one of 12, 24, 48, 60, 72, 96",
            ));
        }
        if !self.sun_hours.is_finite() || !(1.0..=24.0).contains(&self.sun_hours) {
            return Err(SolarError::invalid_input(
                "sun_hours",
                self.sun_hours.to_string(),
                "Sun hours must be between 1.0 and 24.0",
            ));
        }
        if !SUPPORTED_PANEL_WATTAGES.contains(&self.panel_wattage) {
            return Err(SolarError::invalid_input(
                "panel_wattage",
                self.panel_wattage.to_string(),
                "Panel wattage must be one of 250, 300, 330, 400",
            ));
        }
        if !self.peak_load_kw.is_finite() || self.peak_load_kw < 0.5 {
            return Err(SolarError::invalid_input(
                "peak_load_kw",
                self.peak_load_kw.to_string(),
                "Peak load must be at least 0.5 kW",
            ));
        }
        if !self.panel_efficiency.is_finite()
            || self.panel_efficiency <= 0.0
            || self.panel_efficiency > 1.0
        {
            return Err(SolarError::invalid_input(
                "panel_efficiency",
                self.panel_efficiency.to_string(),
                "Panel efficiency must be in (0, 1]",
            ));
        }
        if !self.inverter_efficiency.is_finite()
            || self.inverter_efficiency <= 0.0
            || self.inverter_efficiency > 1.0
        {
            return Err(SolarError::invalid_input(
                "inverter_efficiency",
                self.inverter_efficiency.to_string(),
                "Inverter efficiency must be in (0, 1]",
            ));
        }
        if self.cost_per_panel <= 0 {
            return Err(SolarError::invalid_input(
                "cost_per_panel",
                self.cost_per_panel.to_string(),
                "Cost per panel must be positive",
            ));
        }
        if self.cost_per_ah <= 0 {
            return Err(SolarError::invalid_input(
                "cost_per_ah",
                self.cost_per_ah.to_string(),
                "Cost per Ah must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from a sizing calculation.
///
/// Immutable once produced. Cost fields satisfy
/// `total_cost == panel_cost + battery_cost` exactly.
///
/// ## JSON Example
///
/// ```json
/// {
///   "panel_array_kw": 1.3888888888888888,
///   "panel_count": 5,
///   "battery_capacity_ah": 313,
///   "inverter_kw": 2.0,
///   "panel_cost": 65000,
///   "battery_cost": 4695,
///   "total_cost": 69695
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    /// Required panel array rating in kW (fractional; display to 2 dp)
    pub panel_array_kw: f64,

    /// Number of panels, rounded up from the exact requirement
    pub panel_count: u32,

    /// Battery bank capacity in Ah at the bus voltage, rounded up
    pub battery_capacity_ah: u32,

    /// Inverter rating in kW
    ///
    /// Equals `peak_load_kw` exactly; the tool applies no safety margin
    /// or derating here.
    pub inverter_kw: f64,

    /// Panel subtotal in rupees: `panel_count * cost_per_panel`
    pub panel_cost: i64,

    /// Battery subtotal in rupees: `battery_capacity_ah * cost_per_ah`
    pub battery_cost: i64,

    /// Total system cost in rupees
    pub total_cost: i64,
}

/// Size the system for the given inputs.
///
/// Pure function: no side effects, no state, same output for the same
/// input. Rejects out-of-range inputs with [`SolarError::InvalidInput`];
/// for all valid inputs it returns a result.
///
/// # Example
///
/// ```rust
/// use solar_core::sizing::{compute, SizingInput};
///
/// let result = compute(&SizingInput::default()).unwrap();
/// assert_eq!(result.total_cost, result.panel_cost + result.battery_cost);
/// ```
pub fn compute(input: &SizingInput) -> SolarResult<SizingResult> {
    input.validate()?;

    let dod = input.battery_type.profile().depth_of_discharge;

    // Array rating needed to replace one day's load in the available sun
    // hours, derated by panel and inverter efficiency
    let panel_array_kw =
        input.daily_load_kwh / (input.sun_hours * input.panel_efficiency * input.inverter_efficiency);

    // Round up: N panels must supply at least the required array rating
    let panel_count = (panel_array_kw * 1000.0 / f64::from(input.panel_wattage)).ceil() as u32;

    // Bank must hold backup_days of load within the usable (DOD-limited)
    // fraction of its rated capacity
    let battery_capacity_ah = (input.daily_load_kwh * f64::from(input.backup_days) * 1000.0
        / (f64::from(input.battery_voltage) * dod))
        .ceil() as u32;

    // Inverter covers peak load exactly, no margin
    let inverter_kw = input.peak_load_kw;

    let panel_cost = i64::from(panel_count) * input.cost_per_panel;
    let battery_cost = i64::from(battery_capacity_ah) * input.cost_per_ah;
    let total_cost = panel_cost + battery_cost;

    Ok(SizingResult {
        panel_array_kw,
        panel_count,
        battery_capacity_ah,
        inverter_kw,
        panel_cost,
        battery_cost,
        total_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_input() -> SizingInput {
        SizingInput::default()
    }

    #[test]
    fn test_reference_scenario() {
        // 6 kWh/day, 2 backup days, 48 V lead-acid, 6 sun hours, 330 W
        // panels, 0.8/0.9 efficiencies, Rs. 13000/panel, Rs. 15/Ah
        let result = compute(&reference_input()).unwrap();

        // panel_array_kw = 6.0 / (6.0 * 0.8 * 0.9) = 1.3889
        assert!((result.panel_array_kw - 1.3889).abs() < 1e-4);
        // ceil(1388.9 / 330) = ceil(4.2088) = 5
        assert_eq!(result.panel_count, 5);
        // ceil(12000 / (48 * 0.8)) = ceil(312.5) = 313
        assert_eq!(result.battery_capacity_ah, 313);
        assert_eq!(result.inverter_kw, 2.0);
        assert_eq!(result.panel_cost, 65_000);
        assert_eq!(result.battery_cost, 4_695);
        assert_eq!(result.total_cost, 69_695);
    }

    #[test]
    fn test_panel_count_ceiling_bounds() {
        let input = reference_input();
        let result = compute(&input).unwrap();

        let exact = result.panel_array_kw * 1000.0 / f64::from(input.panel_wattage);
        let count = f64::from(result.panel_count);
        assert!(exact <= count);
        assert!(count < exact + 1.0);
    }

    #[test]
    fn test_battery_monotonic_in_backup_days() {
        let mut input = reference_input();
        let mut previous = 0;
        for days in 1..=10 {
            input.backup_days = days;
            let result = compute(&input).unwrap();
            assert!(result.battery_capacity_ah >= previous);
            previous = result.battery_capacity_ah;
        }
    }

    #[test]
    fn test_panels_monotonic_in_daily_load() {
        let mut input = reference_input();
        let mut previous = 0;
        for step in 1..=20 {
            input.daily_load_kwh = f64::from(step) * 1.5;
            let result = compute(&input).unwrap();
            assert!(result.panel_count >= previous);
            previous = result.panel_count;
        }
    }

    #[test]
    fn test_total_cost_identity() {
        let mut input = reference_input();
        for load in [0.5, 3.0, 6.0, 11.5, 42.0] {
            input.daily_load_kwh = load;
            let result = compute(&input).unwrap();
            assert_eq!(result.total_cost, result.panel_cost + result.battery_cost);
        }
    }

    #[test]
    fn test_lithium_needs_less_capacity() {
        let lead = compute(&reference_input()).unwrap();

        let mut input = reference_input();
        input.battery_type = BatteryType::Lithium;
        let lithium = compute(&input).unwrap();

        // DOD 0.90 vs 0.80: strictly fewer Ah for the same load
        assert!(lithium.battery_capacity_ah < lead.battery_capacity_ah);
        // Panel sizing is unaffected by chemistry
        assert_eq!(lithium.panel_count, lead.panel_count);
    }

    #[test]
    fn test_inverter_passthrough() {
        let mut input = reference_input();
        input.peak_load_kw = 3.7;
        let result = compute(&input).unwrap();
        assert_eq!(result.inverter_kw, 3.7);
    }

    #[test]
    fn test_zero_sun_hours_rejected() {
        // Bypasses the form's slider bounds; must still fail cleanly
        let mut input = reference_input();
        input.sun_hours = 0.0;
        let err = compute(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_zero_efficiency_rejected() {
        let mut input = reference_input();
        input.panel_efficiency = 0.0;
        assert!(compute(&input).is_err());

        let mut input = reference_input();
        input.inverter_efficiency = 0.0;
        assert!(compute(&input).is_err());
    }

    #[test]
    fn test_unsupported_voltage_rejected() {
        let mut input = reference_input();
        input.battery_voltage = 36;
        let err = compute(&input).unwrap_err();
        assert!(matches!(err, SolarError::InvalidInput { ref field, .. } if field == "battery_voltage"));
    }

    #[test]
    fn test_unsupported_wattage_rejected() {
        let mut input = reference_input();
        input.panel_wattage = 375;
        assert!(compute(&input).is_err());
    }

    #[test]
    fn test_negative_cost_rejected() {
        let mut input = reference_input();
        input.cost_per_panel = -1;
        assert!(compute(&input).is_err());

        let mut input = reference_input();
        input.cost_per_ah = 0;
        assert!(compute(&input).is_err());
    }

    #[test]
    fn test_peak_load_below_minimum_rejected() {
        let mut input = reference_input();
        input.peak_load_kw = 0.4;
        assert!(compute(&input).is_err());
    }

    #[test]
    fn test_tiny_load_still_one_panel() {
        let mut input = reference_input();
        input.daily_load_kwh = 0.01;
        let result = compute(&input).unwrap();
        assert!(result.panel_count >= 1);
        assert!(result.battery_capacity_ah >= 1);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let input = reference_input();
        let first = compute(&input).unwrap();
        let second = compute(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = reference_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: SizingInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.daily_load_kwh, roundtrip.daily_load_kwh);
        assert_eq!(input.battery_type, roundtrip.battery_type);
        assert_eq!(input.cost_per_ah, roundtrip.cost_per_ah);
    }

    #[test]
    fn test_result_serialization() {
        let result = compute(&reference_input()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();

        assert!(json.contains("panel_array_kw"));
        assert!(json.contains("battery_capacity_ah"));
        assert!(json.contains("total_cost"));

        let roundtrip: SizingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
