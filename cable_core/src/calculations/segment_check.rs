//! # Per-Segment Ampacity Verification
//!
//! Verifies one cable segment per IEC 60502-2 Annex B:
//!
//! 1. Design current `Ib` from the segment's accumulated load,
//! 2. Correction factors K1-K4 from the site and trench parameters,
//! 3. Base ampacity `Iz` from the composite-key store,
//! 4. Corrected ampacity `Iz' = Iz x K1 x K2 x K3 x K4`,
//! 5. Verdict: the segment passes iff `Ib <= Iz'`.
//!
//! The check is a total function: a composite key with no published data
//! yields the zero-ampacity sentinel (the segment then fails for any
//! non-zero load and [`SegmentCheckResult::has_data_gap`] reports why),
//! never an error.
//!
//! ## Example
//!
//! ```rust
//! use cable_core::calculations::segment_check::{calculate, SegmentCheckInput};
//! use cable_core::tables::ReferenceData;
//!
//! let input = SegmentCheckInput::default();
//! input.validate().unwrap();
//!
//! let result = calculate(ReferenceData::standard(), &input);
//! println!("Ib = {:.2} A", result.design_current_a);
//! println!("Iz' = {:.2} A ({})", result.corrected_ampacity_a, result.base_source);
//! println!("Pass: {}", result.passes);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::design_current_amps;
use crate::errors::{CableError, CableResult};
use crate::factors::{
    burial_depth_factor, grouping_factor, soil_temperature_factor, thermal_resistivity_factor,
    Factor,
};
use crate::project::{Segment, SiteConditions};
use crate::tables::{AmpacityKey, ReferenceData};

/// Input parameters for one segment check.
///
/// `design_power_kva` is the already-accumulated load the segment carries;
/// accumulation along a feeder is the caller's concern (see
/// [`crate::project::Circuit::design_power_at`]), which keeps the check free
/// of any ordering dependency on a surrounding collection.
///
/// ## JSON Example
///
/// ```json
/// {
///   "site": {
///     "ground_temp_c": 20.0,
///     "soil_resistivity_km_w": 1.5,
///     "system_voltage_kv": 30.0,
///     "frequency_hz": 50.0,
///     "power_factor": 0.9,
///     "oversizing_pct": 0.0
///   },
///   "segment": {
///     "id": "b4b3c2a1-0000-0000-0000-000000000000",
///     "pb_power_kva": 10120.0,
///     "installation": "DirectBuried",
///     "insulation": "XLPE",
///     "section_mm2": 400.0,
///     "conductor": "Al",
///     "voltage_rating": "18/30 (36) kV",
///     "layout": "Trefoil",
///     "armoured": false,
///     "core": "SingleCore",
///     "length_m": 10061.0,
///     "parallel_circuits": 4,
///     "spacing_mm": 200.0,
///     "depth_m": 0.8
///   },
///   "design_power_kva": 10120.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentCheckInput {
    /// Site-wide soil, network and load parameters
    pub site: SiteConditions,

    /// The segment under verification
    pub segment: Segment,

    /// Accumulated design power carried by this segment, kVA
    pub design_power_kva: f64,
}

impl SegmentCheckInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CableResult<()> {
        if self.segment.section_mm2 <= 0.0 {
            return Err(CableError::invalid_input(
                "section_mm2",
                self.segment.section_mm2.to_string(),
                "Cross-section must be positive",
            ));
        }
        if self.site.system_voltage_kv <= 0.0 {
            return Err(CableError::invalid_input(
                "system_voltage_kv",
                self.site.system_voltage_kv.to_string(),
                "System voltage must be positive",
            ));
        }
        if self.site.power_factor <= 0.0 || self.site.power_factor > 1.0 {
            return Err(CableError::invalid_input(
                "power_factor",
                self.site.power_factor.to_string(),
                "Power factor must be in (0, 1]",
            ));
        }
        if self.site.oversizing_pct < 0.0 {
            return Err(CableError::invalid_input(
                "oversizing_pct",
                self.site.oversizing_pct.to_string(),
                "Oversizing cannot be negative",
            ));
        }
        if self.design_power_kva < 0.0 {
            return Err(CableError::invalid_input(
                "design_power_kva",
                self.design_power_kva.to_string(),
                "Design power cannot be negative",
            ));
        }
        if self.segment.depth_m <= 0.0 {
            return Err(CableError::invalid_input(
                "depth_m",
                self.segment.depth_m.to_string(),
                "Burial depth must be positive",
            ));
        }
        if self.segment.spacing_mm < 0.0 {
            return Err(CableError::invalid_input(
                "spacing_mm",
                self.segment.spacing_mm.to_string(),
                "Circuit spacing cannot be negative",
            ));
        }
        if self.segment.parallel_circuits == 0 {
            return Err(CableError::invalid_input(
                "parallel_circuits",
                self.segment.parallel_circuits.to_string(),
                "At least one circuit is required",
            ));
        }
        Ok(())
    }
}

impl Default for SegmentCheckInput {
    fn default() -> Self {
        let segment = Segment::default();
        SegmentCheckInput {
            site: SiteConditions::default(),
            design_power_kva: segment.pb_power_kva,
            segment,
        }
    }
}

/// Results from a segment check.
///
/// Every numeric value carries its provenance so reports can cite the
/// governing tables.
///
/// ## JSON Example
///
/// ```json
/// {
///   "design_power_kva": 10120.0,
///   "design_current_a": 216.4,
///   "base_ampacity_a": 454.0,
///   "base_source": "Table B.2",
///   "k1": { "value": 1.0, "source": "Table B.11" },
///   "k2": { "value": 1.0, "source": "Table B.12" },
///   "k3": { "value": 1.0, "source": "Table B.14" },
///   "k4": { "value": 0.68, "source": "Table B.19" },
///   "corrected_ampacity_a": 308.72,
///   "passes": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentCheckResult {
    /// Accumulated design power the check was run with (kVA)
    pub design_power_kva: f64,

    /// Design current Ib (A)
    pub design_current_a: f64,

    /// Base ampacity Iz before corrections (A); 0 when unknown
    pub base_ampacity_a: f64,

    /// Table that supplied the base ampacity, or "unknown"
    pub base_source: String,

    /// K1 - ground temperature
    pub k1: Factor,

    /// K2 - burial depth
    pub k2: Factor,

    /// K3 - soil thermal resistivity
    pub k3: Factor,

    /// K4 - circuit grouping
    pub k4: Factor,

    /// Corrected ampacity Iz' = Iz x K1 x K2 x K3 x K4 (A)
    pub corrected_ampacity_a: f64,

    /// Verdict: Ib <= Iz'
    pub passes: bool,
}

impl SegmentCheckResult {
    /// Whether any value rests on missing published data: the base ampacity
    /// sentinel or an estimated grouping factor. Reports must surface this
    /// as a data-completeness warning.
    pub fn has_data_gap(&self) -> bool {
        self.base_source == crate::tables::source::UNKNOWN || self.k4.source.contains("estimated")
    }

    /// Current headroom Iz' - Ib (A); negative when failing
    pub fn margin_a(&self) -> f64 {
        self.corrected_ampacity_a - self.design_current_a
    }

    /// Utilization Ib / Iz'. Infinite for a loaded segment with zero
    /// corrected ampacity, 0 for an unloaded one.
    pub fn utilization(&self) -> f64 {
        if self.corrected_ampacity_a > 0.0 {
            self.design_current_a / self.corrected_ampacity_a
        } else if self.design_current_a == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    }
}

/// Run the ampacity verification for one segment.
///
/// Pure and total: the result is fully determined by `data` and `input`,
/// and missing reference data degrades to sentinels instead of failing.
pub fn calculate(data: &ReferenceData, input: &SegmentCheckInput) -> SegmentCheckResult {
    let site = &input.site;
    let segment = &input.segment;

    let design_current_a = design_current_amps(
        input.design_power_kva,
        site.system_voltage_kv,
        site.power_factor,
        site.oversizing_pct,
    );

    let key = AmpacityKey::normalized(
        segment.insulation,
        segment.conductor,
        segment.core,
        segment.installation,
        segment.armoured,
        segment.layout,
    );
    let base = data.base_ampacity(&key, segment.section_mm2);

    let k1 = soil_temperature_factor(data, site.ground_temp_c, segment.insulation);
    let k2 = burial_depth_factor(data, segment.depth_m, segment.section_mm2, segment.installation);
    let k3 = thermal_resistivity_factor(
        data,
        site.soil_resistivity_km_w,
        segment.installation,
        segment.core,
        segment.section_mm2,
    );
    let k4 = grouping_factor(
        data,
        segment.parallel_circuits,
        segment.spacing_mm,
        segment.installation,
        segment.core,
    );

    let corrected_ampacity_a = base.amps * k1.value * k2.value * k3.value * k4.value;
    let passes = design_current_a <= corrected_ampacity_a;

    SegmentCheckResult {
        design_power_kva: input.design_power_kva,
        design_current_a,
        base_ampacity_a: base.amps,
        base_source: base.source,
        k1,
        k2,
        k3,
        k4,
        corrected_ampacity_a,
        passes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cable::{Insulation, Layout};
    use crate::tables::source;

    fn data() -> &'static ReferenceData {
        ReferenceData::standard()
    }

    #[test]
    fn test_default_segment_passes() {
        // 400 mm2 Al XLPE single-core trefoil, direct buried at reference
        // conditions, 4 circuits at 200 mm carrying 10 120 kVA
        let input = SegmentCheckInput::default();
        input.validate().unwrap();
        let result = calculate(data(), &input);

        assert!((result.design_current_a - 216.40).abs() < 0.05);
        assert_eq!(result.base_ampacity_a, 454.0);
        assert_eq!(result.base_source, source::TABLE_B2);
        assert_eq!(result.k1.value, 1.0);
        assert_eq!(result.k2.value, 1.0);
        assert!((result.k3.value - 1.0).abs() < 1e-9);
        assert_eq!(result.k4.value, 0.68);
        assert!((result.corrected_ampacity_a - 308.72).abs() < 1e-6);
        assert!(result.passes);
        assert!(!result.has_data_gap());
        assert!(result.margin_a() > 0.0);
    }

    #[test]
    fn test_unknown_key_fails_loaded_segment() {
        let mut input = SegmentCheckInput::default();
        input.segment.layout = Layout::FlatTouching;
        let result = calculate(data(), &input);

        assert_eq!(result.base_ampacity_a, 0.0);
        assert_eq!(result.base_source, source::UNKNOWN);
        assert_eq!(result.corrected_ampacity_a, 0.0);
        assert!(!result.passes);
        assert!(result.has_data_gap());
        assert!(result.utilization().is_infinite());
    }

    #[test]
    fn test_unknown_key_unloaded_segment_passes() {
        let mut input = SegmentCheckInput::default();
        input.segment.layout = Layout::FlatTouching;
        input.design_power_kva = 0.0;
        let result = calculate(data(), &input);

        assert_eq!(result.design_current_a, 0.0);
        assert!(result.passes);
        assert!(result.has_data_gap());
        assert_eq!(result.utilization(), 0.0);
    }

    #[test]
    fn test_hotter_soil_reduces_ampacity() {
        let reference = calculate(data(), &SegmentCheckInput::default());

        let mut hot = SegmentCheckInput::default();
        hot.site.ground_temp_c = 35.0;
        let hot = calculate(data(), &hot);

        assert!(hot.corrected_ampacity_a < reference.corrected_ampacity_a);
        assert_eq!(hot.k1.value, 0.89);
    }

    #[test]
    fn test_single_circuit_needs_no_grouping_table() {
        let mut input = SegmentCheckInput::default();
        input.segment.parallel_circuits = 1;
        let result = calculate(data(), &input);

        assert_eq!(result.k4.value, 1.0);
        assert_eq!(result.k4.source, source::NO_GROUPING);
        assert_eq!(result.corrected_ampacity_a, 454.0);
    }

    #[test]
    fn test_hepr_matches_epr() {
        let mut hepr = SegmentCheckInput::default();
        hepr.segment.insulation = Insulation::Hepr;
        let mut epr = SegmentCheckInput::default();
        epr.segment.insulation = Insulation::Epr;

        let hepr = calculate(data(), &hepr);
        let epr = calculate(data(), &epr);
        assert_eq!(hepr.base_ampacity_a, epr.base_ampacity_a);
        assert_eq!(hepr.base_source, epr.base_source);
    }

    #[test]
    fn test_determinism() {
        let input = SegmentCheckInput::default();
        let first = calculate(data(), &input);
        let second = calculate(data(), &input);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_validation_rejects_bad_inputs() {
        let mut input = SegmentCheckInput::default();
        input.segment.section_mm2 = 0.0;
        assert!(input.validate().is_err());

        let mut input = SegmentCheckInput::default();
        input.site.power_factor = 1.2;
        assert!(input.validate().is_err());

        let mut input = SegmentCheckInput::default();
        input.segment.parallel_circuits = 0;
        assert!(input.validate().is_err());
    }
}
