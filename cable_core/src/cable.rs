//! # Cable Attributes
//!
//! Categorical attributes of an MV cable construction and its installation,
//! per IEC 60502-2. These enums drive table selection in the reference data
//! store: the base-ampacity table is keyed by a normalized 6-tuple of them,
//! and the K-factor tables are keyed by (core construction x installation
//! method).
//!
//! Normalization rules (applied when building an ampacity key):
//! - HEPR shares ampacity data with EPR and is remapped to it
//! - single-core lookups ignore armouring (forced to unarmoured)
//! - three-core lookups ignore layout (forced to not-applicable)

use serde::{Deserialize, Serialize};

use crate::errors::{CableError, CableResult};

/// Insulation material family.
///
/// All three families run at a 90 degC maximum conductor temperature, so they
/// share the soil-temperature correction curve; they differ only in which
/// base-ampacity table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Insulation {
    /// Ethylene propylene rubber
    #[serde(rename = "EPR")]
    Epr,
    /// Hard-grade EPR; shares ampacity tables with EPR
    #[serde(rename = "HEPR")]
    Hepr,
    /// Cross-linked polyethylene
    #[serde(rename = "XLPE")]
    #[default]
    Xlpe,
}

impl Insulation {
    /// All insulation variants for UI selection
    pub const ALL: [Insulation; 3] = [Insulation::Epr, Insulation::Hepr, Insulation::Xlpe];

    /// Maximum continuous conductor temperature (degC)
    pub fn max_conductor_temp_c(&self) -> f64 {
        match self {
            Insulation::Epr | Insulation::Hepr | Insulation::Xlpe => 90.0,
        }
    }

    /// The insulation family whose ampacity tables apply.
    ///
    /// HEPR has no tables of its own; it uses the EPR data.
    pub fn ampacity_family(&self) -> Insulation {
        match self {
            Insulation::Hepr => Insulation::Epr,
            other => *other,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CableResult<Self> {
        match s.to_uppercase().as_str() {
            "EPR" => Ok(Insulation::Epr),
            "HEPR" => Ok(Insulation::Hepr),
            "XLPE" | "PEX" => Ok(Insulation::Xlpe),
            _ => Err(CableError::invalid_input(
                "insulation",
                s,
                "Expected EPR, HEPR or XLPE",
            )),
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Insulation::Epr => "EPR",
            Insulation::Hepr => "HEPR",
            Insulation::Xlpe => "XLPE",
        }
    }
}

impl std::fmt::Display for Insulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Conductor material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Conductor {
    /// Aluminium
    #[serde(rename = "Al")]
    #[default]
    Aluminium,
    /// Copper
    #[serde(rename = "Cu")]
    Copper,
}

impl Conductor {
    /// All conductor variants for UI selection
    pub const ALL: [Conductor; 2] = [Conductor::Aluminium, Conductor::Copper];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CableResult<Self> {
        match s.to_uppercase().as_str() {
            "AL" | "ALUMINIUM" | "ALUMINUM" => Ok(Conductor::Aluminium),
            "CU" | "COPPER" => Ok(Conductor::Copper),
            _ => Err(CableError::invalid_input(
                "conductor",
                s,
                "Expected Al or Cu",
            )),
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Conductor::Aluminium => "Aluminium",
            Conductor::Copper => "Copper",
        }
    }
}

impl std::fmt::Display for Conductor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Core construction: three single-core cables vs one three-core cable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CoreConstruction {
    /// Three single-core cables forming a three-phase circuit
    #[default]
    SingleCore,
    /// One three-core cable
    ThreeCore,
}

impl CoreConstruction {
    /// All core construction variants for UI selection
    pub const ALL: [CoreConstruction; 2] =
        [CoreConstruction::SingleCore, CoreConstruction::ThreeCore];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CableResult<Self> {
        match s.to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "SINGLECORE" | "SINGLE" | "1C" => Ok(CoreConstruction::SingleCore),
            "THREECORE" | "THREE" | "3C" => Ok(CoreConstruction::ThreeCore),
            _ => Err(CableError::invalid_input(
                "core_construction",
                s,
                "Expected Single Core or Three Core",
            )),
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            CoreConstruction::SingleCore => "Single Core",
            CoreConstruction::ThreeCore => "Three Core",
        }
    }
}

impl std::fmt::Display for CoreConstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Installation method for buried cable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InstallationMethod {
    /// Laid direct in the ground
    #[default]
    DirectBuried,
    /// Laid in single-way buried ducts
    Ducts,
}

impl InstallationMethod {
    /// All installation method variants for UI selection
    pub const ALL: [InstallationMethod; 2] =
        [InstallationMethod::DirectBuried, InstallationMethod::Ducts];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CableResult<Self> {
        match s.to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "DIRECT" | "DIRECTBURIED" | "BURIED" => Ok(InstallationMethod::DirectBuried),
            "DUCT" | "DUCTS" | "DUCTED" => Ok(InstallationMethod::Ducts),
            _ => Err(CableError::invalid_input(
                "installation_method",
                s,
                "Expected Direct Buried or Ducts",
            )),
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            InstallationMethod::DirectBuried => "Direct Buried",
            InstallationMethod::Ducts => "In Ducts",
        }
    }
}

impl std::fmt::Display for InstallationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Armouring presence.
///
/// The IEC ampacity tables distinguish armouring only for three-core
/// constructions; single-core lookups always use [`Armouring::Unarmoured`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Armouring {
    #[default]
    Unarmoured,
    Armoured,
}

impl Armouring {
    /// All armouring variants for UI selection
    pub const ALL: [Armouring; 2] = [Armouring::Unarmoured, Armouring::Armoured];

    /// Build from the user's checkbox-style flag
    pub fn from_flag(armoured: bool) -> Self {
        if armoured {
            Armouring::Armoured
        } else {
            Armouring::Unarmoured
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Armouring::Unarmoured => "Unarmoured",
            Armouring::Armoured => "Armoured",
        }
    }
}

impl std::fmt::Display for Armouring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Phase layout for single-core circuits.
///
/// Three-core cables have no layout distinction in the IEC tables; their
/// ampacity keys always carry [`Layout::NotApplicable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Layout {
    /// Three cables in trefoil, touching
    #[default]
    Trefoil,
    /// Flat formation, spaced one cable diameter apart
    FlatSpaced,
    /// Flat formation, ducts touching
    FlatTouching,
    /// Layout has no effect (three-core cable)
    NotApplicable,
}

impl Layout {
    /// Layouts a user can select for single-core cable
    pub const SELECTABLE: [Layout; 3] = [Layout::Trefoil, Layout::FlatSpaced, Layout::FlatTouching];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CableResult<Self> {
        match s.to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "TREFOIL" => Ok(Layout::Trefoil),
            "FLATSPACED" | "FLAT" => Ok(Layout::FlatSpaced),
            "FLATTOUCHING" | "FLATTOUCHINGDUCTS" | "TOUCHING" => Ok(Layout::FlatTouching),
            "NA" | "N/A" | "NOTAPPLICABLE" => Ok(Layout::NotApplicable),
            _ => Err(CableError::invalid_input(
                "layout",
                s,
                "Expected Trefoil, Flat Spaced or Flat Touching",
            )),
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Layout::Trefoil => "Trefoil",
            Layout::FlatSpaced => "Flat Spaced",
            Layout::FlatTouching => "Flat Touching",
            Layout::NotApplicable => "N/A",
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Rated insulation voltage U0/U (Um), carried on the segment for reporting.
///
/// Not an input to the ampacity math; the reference tables shipped here are
/// the 18/30 kV set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VoltageRating {
    #[serde(rename = "3.6/6 (7.2) kV")]
    U3_6kV,
    #[serde(rename = "6/10 (12) kV")]
    U6_10kV,
    #[serde(rename = "8.7/15 (17.5) kV")]
    U8_7kV,
    #[serde(rename = "12/20 (24) kV")]
    U12_20kV,
    #[serde(rename = "18/30 (36) kV")]
    #[default]
    U18_30kV,
}

impl VoltageRating {
    /// All voltage rating variants for UI selection
    pub const ALL: [VoltageRating; 5] = [
        VoltageRating::U3_6kV,
        VoltageRating::U6_10kV,
        VoltageRating::U8_7kV,
        VoltageRating::U12_20kV,
        VoltageRating::U18_30kV,
    ];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            VoltageRating::U3_6kV => "3.6/6 (7.2) kV",
            VoltageRating::U6_10kV => "6/10 (12) kV",
            VoltageRating::U8_7kV => "8.7/15 (17.5) kV",
            VoltageRating::U12_20kV => "12/20 (24) kV",
            VoltageRating::U18_30kV => "18/30 (36) kV",
        }
    }
}

impl std::fmt::Display for VoltageRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Standard conductor cross-sections (mm2) offered for selection.
pub const STANDARD_SECTIONS_MM2: &[f64] = &[
    25.0, 35.0, 50.0, 70.0, 95.0, 120.0, 150.0, 185.0, 240.0, 300.0, 400.0, 500.0, 630.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insulation_family_remap() {
        assert_eq!(Insulation::Hepr.ampacity_family(), Insulation::Epr);
        assert_eq!(Insulation::Epr.ampacity_family(), Insulation::Epr);
        assert_eq!(Insulation::Xlpe.ampacity_family(), Insulation::Xlpe);
    }

    #[test]
    fn test_all_insulations_run_at_90c() {
        for ins in Insulation::ALL {
            assert_eq!(ins.max_conductor_temp_c(), 90.0);
        }
    }

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(
            Insulation::from_str_flexible("xlpe").unwrap(),
            Insulation::Xlpe
        );
        assert_eq!(
            Conductor::from_str_flexible("aluminium").unwrap(),
            Conductor::Aluminium
        );
        assert_eq!(
            CoreConstruction::from_str_flexible("single core").unwrap(),
            CoreConstruction::SingleCore
        );
        assert_eq!(
            InstallationMethod::from_str_flexible("ducts").unwrap(),
            InstallationMethod::Ducts
        );
        assert_eq!(
            Layout::from_str_flexible("flat spaced").unwrap(),
            Layout::FlatSpaced
        );
        assert!(Insulation::from_str_flexible("PVC").is_err());
    }

    #[test]
    fn test_armouring_from_flag() {
        assert_eq!(Armouring::from_flag(true), Armouring::Armoured);
        assert_eq!(Armouring::from_flag(false), Armouring::Unarmoured);
    }

    #[test]
    fn test_serde_renames() {
        let json = serde_json::to_string(&Insulation::Xlpe).unwrap();
        assert_eq!(json, "\"XLPE\"");
        let json = serde_json::to_string(&Conductor::Aluminium).unwrap();
        assert_eq!(json, "\"Al\"");
        let roundtrip: Conductor = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Conductor::Aluminium);
    }

    #[test]
    fn test_standard_sections_sorted() {
        for pair in STANDARD_SECTIONS_MM2.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
