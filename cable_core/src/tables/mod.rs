//! # Reference Data Store
//!
//! The immutable lookup tables of IEC 60502-2 Annex B and the composite-key
//! resolver for base ampacity.
//!
//! ## Structure
//!
//! ```text
//! ReferenceData
//! ├── soil_temperature_90c   Table B.11 (K1 curve, 90 degC insulations)
//! ├── depth_direct/ducts     Tables B.12/B.13 (K2, split at 185 mm2)
//! ├── resistivity tables     Tables B.14-B.17 (K3, section -> resistivity curve)
//! ├── grouping tables        Tables B.18-B.21 (K4, cells may be unpublished)
//! └── ampacity               Tables B.2-B.9, HashMap keyed by AmpacityKey
//! ```
//!
//! The store is a build-time constant: the slices live in [`correction_data`]
//! and [`ampacity_data`], and `ReferenceData::standard()` materializes the
//! ampacity map once behind a `Lazy`. Resolvers take `&ReferenceData` rather
//! than reaching for a global, so tests can inject synthetic tables.
//!
//! A lookup that misses the sparse ampacity key space is not an error: it
//! yields [`BaseAmpacity::unknown`] (0 A, source [`source::UNKNOWN`]), which
//! callers surface as a data-completeness warning.

pub(crate) mod ampacity_data;
pub(crate) mod correction_data;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::cable::{
    Armouring, Conductor, CoreConstruction, Insulation, InstallationMethod, Layout,
};

/// Provenance labels for values produced from the reference data.
///
/// Every factor and every base ampacity carries one of these (possibly with a
/// qualifying note appended), so a report can cite the governing table.
pub mod source {
    pub const TABLE_B2: &str = "Table B.2";
    pub const TABLE_B3: &str = "Table B.3";
    pub const TABLE_B4: &str = "Table B.4";
    pub const TABLE_B5: &str = "Table B.5";
    pub const TABLE_B6: &str = "Table B.6";
    pub const TABLE_B7: &str = "Table B.7";
    pub const TABLE_B8: &str = "Table B.8";
    pub const TABLE_B9: &str = "Table B.9";
    pub const TABLE_B11: &str = "Table B.11";
    pub const TABLE_B12: &str = "Table B.12";
    pub const TABLE_B13: &str = "Table B.13";
    pub const TABLE_B14: &str = "Table B.14";
    pub const TABLE_B15: &str = "Table B.15";
    pub const TABLE_B16: &str = "Table B.16";
    pub const TABLE_B17: &str = "Table B.17";
    pub const TABLE_B18: &str = "Table B.18";
    pub const TABLE_B19: &str = "Table B.19";
    pub const TABLE_B20: &str = "Table B.20";
    pub const TABLE_B21: &str = "Table B.21";

    /// Composite ampacity key or cross-section absent from the store
    pub const UNKNOWN: &str = "unknown";
    /// K4 short-circuit for a single circuit; no table consulted
    pub const NO_GROUPING: &str = "no grouping applies";
}

/// Cross-section threshold splitting the burial-depth tables into two columns
pub const DEPTH_SECTION_SPLIT_MM2: f64 = 185.0;

/// Burial-depth correction table (K2): depth breakpoints against two
/// cross-section columns.
#[derive(Debug)]
pub struct BurialDepthTable {
    pub source: &'static str,
    /// (depth m, factor) for sections up to 185 mm2
    pub up_to_185: &'static [(f64, f64)],
    /// (depth m, factor) for sections above 185 mm2
    pub above_185: &'static [(f64, f64)],
}

impl BurialDepthTable {
    /// Column applicable to a cross-section
    pub fn column(&self, section_mm2: f64) -> &'static [(f64, f64)] {
        if section_mm2 <= DEPTH_SECTION_SPLIT_MM2 {
            self.up_to_185
        } else {
            self.above_185
        }
    }
}

/// One cross-section row of a soil-resistivity table: a resistivity curve.
#[derive(Debug)]
pub struct SectionCurve {
    pub section_mm2: f64,
    /// (soil thermal resistivity K.m/W, factor)
    pub points: &'static [(f64, f64)],
}

/// Soil-thermal-resistivity correction table (K3), two-level:
/// cross-section rows, each holding a resistivity curve.
#[derive(Debug)]
pub struct ResistivityTable {
    pub source: &'static str,
    /// Rows sorted by cross-section
    pub sections: &'static [SectionCurve],
}

/// One circuit-count row of a grouping table.
///
/// `None` cells mean the standard publishes no factor for that
/// (circuit count, spacing) combination; they are excluded from
/// interpolation rather than treated as zero.
#[derive(Debug)]
pub struct GroupingRow {
    pub circuits: f64,
    /// (spacing mm, factor or unpublished)
    pub entries: &'static [(f64, Option<f64>)],
}

/// Grouping/proximity correction table (K4)
#[derive(Debug)]
pub struct GroupingTable {
    pub source: &'static str,
    /// Rows sorted by circuit count
    pub rows: &'static [GroupingRow],
}

/// One base-ampacity record: a cross-section -> amps mapping with provenance.
#[derive(Debug)]
pub struct AmpacityRecord {
    pub source: &'static str,
    /// (cross-section mm2, ampacity A), sorted by cross-section
    pub amps: &'static [(f64, f64)],
}

/// Normalized composite key into the base-ampacity store.
///
/// Built via [`AmpacityKey::normalized`], which applies the standard's
/// equivalences before lookup. The key space is sparse: not every combination
/// has a published record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmpacityKey {
    pub insulation: Insulation,
    pub conductor: Conductor,
    pub core: CoreConstruction,
    pub installation: InstallationMethod,
    pub armouring: Armouring,
    pub layout: Layout,
}

impl AmpacityKey {
    /// Build a lookup key from user-facing attributes, applying the
    /// normalization rules of the standard:
    ///
    /// - HEPR is remapped to the EPR tables
    /// - single-core: armouring is ignored (tables do not distinguish it),
    ///   layout kept as selected
    /// - three-core: armouring kept as selected, layout forced to
    ///   [`Layout::NotApplicable`]
    pub fn normalized(
        insulation: Insulation,
        conductor: Conductor,
        core: CoreConstruction,
        installation: InstallationMethod,
        armoured: bool,
        layout: Layout,
    ) -> Self {
        let (armouring, layout) = match core {
            CoreConstruction::SingleCore => (Armouring::Unarmoured, layout),
            CoreConstruction::ThreeCore => (Armouring::from_flag(armoured), Layout::NotApplicable),
        };
        AmpacityKey {
            insulation: insulation.ampacity_family(),
            conductor,
            core,
            installation,
            armouring,
            layout,
        }
    }
}

/// A resolved base ampacity with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAmpacity {
    /// Uncorrected ampacity (A); 0 when the store has no data
    pub amps: f64,
    /// Table that supplied the value, or [`source::UNKNOWN`]
    pub source: String,
}

impl BaseAmpacity {
    /// Sentinel for a key or cross-section absent from the store.
    ///
    /// Callers must treat this as a reportable data gap, not a crash.
    pub fn unknown() -> Self {
        BaseAmpacity {
            amps: 0.0,
            source: source::UNKNOWN.to_string(),
        }
    }

    /// Whether this value is the missing-data sentinel
    pub fn is_unknown(&self) -> bool {
        self.source == source::UNKNOWN
    }
}

/// The immutable reference data store.
///
/// Constructed once per process (see [`ReferenceData::standard`]) and passed
/// by reference into every resolver.
#[derive(Debug)]
pub struct ReferenceData {
    pub soil_temperature_90c: &'static [(f64, f64)],
    pub depth_direct: &'static BurialDepthTable,
    pub depth_ducts: &'static BurialDepthTable,
    resistivity_single_direct: &'static ResistivityTable,
    resistivity_single_ducts: &'static ResistivityTable,
    resistivity_three_direct: &'static ResistivityTable,
    resistivity_three_ducts: &'static ResistivityTable,
    grouping_single_direct: &'static GroupingTable,
    grouping_single_ducts: &'static GroupingTable,
    grouping_three_direct: &'static GroupingTable,
    grouping_three_ducts: &'static GroupingTable,
    ampacity: HashMap<AmpacityKey, &'static AmpacityRecord>,
}

static STANDARD: Lazy<ReferenceData> = Lazy::new(ReferenceData::new);

impl ReferenceData {
    fn new() -> Self {
        let mut ampacity = HashMap::new();
        for (key, record) in ampacity_data::RECORDS {
            let replaced = ampacity.insert(*key, record);
            debug_assert!(replaced.is_none(), "duplicate ampacity key {key:?}");
        }
        ReferenceData {
            soil_temperature_90c: correction_data::SOIL_TEMPERATURE_90C,
            depth_direct: &correction_data::DEPTH_DIRECT,
            depth_ducts: &correction_data::DEPTH_DUCTS,
            resistivity_single_direct: &correction_data::RESISTIVITY_SINGLE_DIRECT,
            resistivity_single_ducts: &correction_data::RESISTIVITY_SINGLE_DUCTS,
            resistivity_three_direct: &correction_data::RESISTIVITY_THREE_DIRECT,
            resistivity_three_ducts: &correction_data::RESISTIVITY_THREE_DUCTS,
            grouping_single_direct: &correction_data::GROUPING_SINGLE_DIRECT,
            grouping_single_ducts: &correction_data::GROUPING_SINGLE_DUCTS,
            grouping_three_direct: &correction_data::GROUPING_THREE_DIRECT,
            grouping_three_ducts: &correction_data::GROUPING_THREE_DUCTS,
            ampacity,
        }
    }

    /// The IEC 60502-2 18/30 kV data set, built once per process.
    pub fn standard() -> &'static ReferenceData {
        &STANDARD
    }

    /// K1 curve for an insulation family.
    ///
    /// EPR, HEPR and XLPE all run at 90 degC, so a single curve applies;
    /// insulation affects only the base-ampacity table selection.
    pub fn soil_temperature_curve(&self, insulation: Insulation) -> &'static [(f64, f64)] {
        match insulation {
            Insulation::Epr | Insulation::Hepr | Insulation::Xlpe => self.soil_temperature_90c,
        }
    }

    /// K2 table for an installation method
    pub fn depth_table(&self, installation: InstallationMethod) -> &'static BurialDepthTable {
        match installation {
            InstallationMethod::DirectBuried => self.depth_direct,
            InstallationMethod::Ducts => self.depth_ducts,
        }
    }

    /// K3 table for a (core construction, installation method) pair
    pub fn resistivity_table(
        &self,
        core: CoreConstruction,
        installation: InstallationMethod,
    ) -> &'static ResistivityTable {
        match (core, installation) {
            (CoreConstruction::SingleCore, InstallationMethod::DirectBuried) => {
                self.resistivity_single_direct
            }
            (CoreConstruction::SingleCore, InstallationMethod::Ducts) => {
                self.resistivity_single_ducts
            }
            (CoreConstruction::ThreeCore, InstallationMethod::DirectBuried) => {
                self.resistivity_three_direct
            }
            (CoreConstruction::ThreeCore, InstallationMethod::Ducts) => self.resistivity_three_ducts,
        }
    }

    /// K4 table for a (core construction, installation method) pair
    pub fn grouping_table(
        &self,
        core: CoreConstruction,
        installation: InstallationMethod,
    ) -> &'static GroupingTable {
        match (core, installation) {
            (CoreConstruction::SingleCore, InstallationMethod::DirectBuried) => {
                self.grouping_single_direct
            }
            (CoreConstruction::SingleCore, InstallationMethod::Ducts) => self.grouping_single_ducts,
            (CoreConstruction::ThreeCore, InstallationMethod::DirectBuried) => {
                self.grouping_three_direct
            }
            (CoreConstruction::ThreeCore, InstallationMethod::Ducts) => self.grouping_three_ducts,
        }
    }

    /// Look up the base (uncorrected) ampacity for a normalized key and
    /// cross-section.
    ///
    /// Cross-section matching is exact, as in the standard's tables; a miss at
    /// either stage yields the [`BaseAmpacity::unknown`] sentinel.
    pub fn base_ampacity(&self, key: &AmpacityKey, section_mm2: f64) -> BaseAmpacity {
        let Some(record) = self.ampacity.get(key) else {
            return BaseAmpacity::unknown();
        };
        match record.amps.iter().find(|(s, _)| *s == section_mm2) {
            Some(&(_, amps)) => BaseAmpacity {
                amps,
                source: record.source.to_string(),
            },
            None => BaseAmpacity::unknown(),
        }
    }

    /// Number of populated ampacity records (for audits)
    pub fn ampacity_record_count(&self) -> usize {
        self.ampacity.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_strictly_increasing(breakpoints: impl Iterator<Item = f64>, context: &str) {
        let points: Vec<f64> = breakpoints.collect();
        for pair in points.windows(2) {
            assert!(
                pair[0] < pair[1],
                "breakpoints not strictly increasing in {context}: {pair:?}"
            );
        }
    }

    #[test]
    fn test_all_breakpoints_strictly_increasing() {
        let data = ReferenceData::standard();

        assert_strictly_increasing(
            data.soil_temperature_90c.iter().map(|p| p.0),
            source::TABLE_B11,
        );
        for table in [data.depth_direct, data.depth_ducts] {
            assert_strictly_increasing(table.up_to_185.iter().map(|p| p.0), table.source);
            assert_strictly_increasing(table.above_185.iter().map(|p| p.0), table.source);
        }
        for core in CoreConstruction::ALL {
            for install in InstallationMethod::ALL {
                let res = data.resistivity_table(core, install);
                assert_strictly_increasing(res.sections.iter().map(|s| s.section_mm2), res.source);
                for curve in res.sections {
                    assert_strictly_increasing(curve.points.iter().map(|p| p.0), res.source);
                }
                let group = data.grouping_table(core, install);
                assert_strictly_increasing(group.rows.iter().map(|r| r.circuits), group.source);
                for row in group.rows {
                    assert_strictly_increasing(row.entries.iter().map(|e| e.0), group.source);
                }
            }
        }
    }

    #[test]
    fn test_resistivity_rows_share_breakpoints() {
        // The two-stage K3 interpolation assumes every section row of a table
        // tabulates the same resistivity breakpoints.
        let data = ReferenceData::standard();
        for core in CoreConstruction::ALL {
            for install in InstallationMethod::ALL {
                let table = data.resistivity_table(core, install);
                let reference: Vec<f64> =
                    table.sections[0].points.iter().map(|p| p.0).collect();
                for curve in &table.sections[1..] {
                    let breakpoints: Vec<f64> = curve.points.iter().map(|p| p.0).collect();
                    assert_eq!(breakpoints, reference, "{}", table.source);
                }
            }
        }
    }

    #[test]
    fn test_base_ampacity_known_value() {
        let data = ReferenceData::standard();
        let key = AmpacityKey::normalized(
            Insulation::Xlpe,
            Conductor::Aluminium,
            CoreConstruction::SingleCore,
            InstallationMethod::DirectBuried,
            false,
            Layout::Trefoil,
        );
        let base = data.base_ampacity(&key, 400.0);
        assert_eq!(base.amps, 454.0);
        assert_eq!(base.source, source::TABLE_B2);
    }

    #[test]
    fn test_single_core_armouring_ignored() {
        let data = ReferenceData::standard();
        let unarmoured = AmpacityKey::normalized(
            Insulation::Xlpe,
            Conductor::Copper,
            CoreConstruction::SingleCore,
            InstallationMethod::Ducts,
            false,
            Layout::Trefoil,
        );
        let armoured = AmpacityKey::normalized(
            Insulation::Xlpe,
            Conductor::Copper,
            CoreConstruction::SingleCore,
            InstallationMethod::Ducts,
            true,
            Layout::Trefoil,
        );
        assert_eq!(unarmoured, armoured);
        assert_eq!(
            data.base_ampacity(&unarmoured, 240.0),
            data.base_ampacity(&armoured, 240.0)
        );
    }

    #[test]
    fn test_three_core_layout_ignored() {
        for layout in Layout::SELECTABLE {
            let key = AmpacityKey::normalized(
                Insulation::Epr,
                Conductor::Aluminium,
                CoreConstruction::ThreeCore,
                InstallationMethod::DirectBuried,
                true,
                layout,
            );
            assert_eq!(key.layout, Layout::NotApplicable);
        }
    }

    #[test]
    fn test_three_core_armouring_respected() {
        let data = ReferenceData::standard();
        let make = |armoured| {
            AmpacityKey::normalized(
                Insulation::Xlpe,
                Conductor::Copper,
                CoreConstruction::ThreeCore,
                InstallationMethod::DirectBuried,
                armoured,
                Layout::Trefoil,
            )
        };
        let plain = data.base_ampacity(&make(false), 150.0);
        let armoured = data.base_ampacity(&make(true), 150.0);
        assert!(armoured.amps < plain.amps);
    }

    #[test]
    fn test_hepr_uses_epr_tables() {
        let data = ReferenceData::standard();
        let make = |insulation| {
            AmpacityKey::normalized(
                insulation,
                Conductor::Aluminium,
                CoreConstruction::SingleCore,
                InstallationMethod::DirectBuried,
                false,
                Layout::Trefoil,
            )
        };
        assert_eq!(
            data.base_ampacity(&make(Insulation::Hepr), 185.0),
            data.base_ampacity(&make(Insulation::Epr), 185.0)
        );
    }

    #[test]
    fn test_missing_key_yields_unknown() {
        let data = ReferenceData::standard();
        // Flat-touching direct-buried single core has no published table here
        let key = AmpacityKey::normalized(
            Insulation::Xlpe,
            Conductor::Aluminium,
            CoreConstruction::SingleCore,
            InstallationMethod::DirectBuried,
            false,
            Layout::FlatTouching,
        );
        let base = data.base_ampacity(&key, 400.0);
        assert!(base.is_unknown());
        assert_eq!(base.amps, 0.0);
    }

    #[test]
    fn test_missing_section_yields_unknown() {
        let data = ReferenceData::standard();
        let key = AmpacityKey::normalized(
            Insulation::Xlpe,
            Conductor::Aluminium,
            CoreConstruction::ThreeCore,
            InstallationMethod::DirectBuried,
            false,
            Layout::Trefoil,
        );
        // Three-core tables stop at 300 mm2
        assert!(data.base_ampacity(&key, 630.0).is_unknown());
    }

    #[test]
    fn test_store_is_populated() {
        assert!(ReferenceData::standard().ampacity_record_count() >= 30);
    }
}
