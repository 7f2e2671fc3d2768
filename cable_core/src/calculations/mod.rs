//! # Ampacity Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(data, input) -> *Result` - Pure calculation function
//!
//! The reference tables are passed in explicitly as [`ReferenceData`], so a
//! result is fully determined by its arguments: same inputs, bit-identical
//! outputs.
//!
//! ## Available Calculations
//!
//! - [`segment_check`] - Per-segment ampacity verification (Ib vs Iz')
//!
//! [`ReferenceData`]: crate::tables::ReferenceData

pub mod segment_check;

pub use segment_check::{calculate, SegmentCheckInput, SegmentCheckResult};

/// Design current Ib in amps for a balanced three-phase load.
///
/// ```text
/// Ib = P / (sqrt(3) x U x pf) x (1 + oversizing/100)
/// ```
///
/// with P in kVA and U in kV (line-to-line). Returns 0 when voltage or
/// power factor is zero; a segment carrying no current trivially passes and
/// the caller's validation surfaces the nonsensical input separately.
pub fn design_current_amps(
    power_kva: f64,
    voltage_kv: f64,
    power_factor: f64,
    oversizing_pct: f64,
) -> f64 {
    if voltage_kv == 0.0 || power_factor == 0.0 {
        return 0.0;
    }
    let base = power_kva / (3.0_f64.sqrt() * voltage_kv * power_factor);
    base * (1.0 + oversizing_pct / 100.0)
}
