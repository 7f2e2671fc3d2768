//! # Correction Factors K1-K4
//!
//! The four factor resolvers of IEC 60502-2 Annex B. Each selects the
//! applicable table from the [`ReferenceData`] store based on categorical
//! inputs, interpolates via [`crate::interpolation`], and returns a
//! [`Factor`] carrying a provenance label so reports can cite the governing
//! table (or the fallback path that produced the value).
//!
//! ```text
//! Iz' = Iz x K1 x K2 x K3 x K4
//! ```
//!
//! | Factor | Accounts for            | Tables      |
//! |--------|-------------------------|-------------|
//! | K1     | Ground temperature      | B.11        |
//! | K2     | Burial depth            | B.12, B.13  |
//! | K3     | Soil thermal resistivity| B.14 - B.17 |
//! | K4     | Circuit grouping        | B.18 - B.21 |
//!
//! The resolvers are independent of each other and total: missing grouping
//! data degrades to documented fallbacks instead of failing.

use serde::{Deserialize, Serialize};

use crate::cable::{CoreConstruction, Insulation, InstallationMethod};
use crate::interpolation::{interpolate, lerp};
use crate::tables::{source, GroupingRow, GroupingTable, ReferenceData};

/// Conservative K4 estimate when no bracketing row has published data.
///
/// Heuristic (assumes circuits touching, worst case), not a normative table
/// value; results carry an "estimated" provenance note when it is used.
pub const GROUPING_NO_DATA_FALLBACK: f64 = 0.50;

/// A resolved correction factor with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    /// Multiplicative correction applied to the base ampacity
    pub value: f64,
    /// Table (or fallback path) that produced the value
    pub source: String,
}

impl Factor {
    fn from_table(value: f64, source: &str) -> Self {
        Factor {
            value,
            source: source.to_string(),
        }
    }
}

/// K1 - ground temperature factor (Table B.11).
///
/// EPR, HEPR and XLPE all run at 90 degC, so a single curve covers every
/// supported insulation; the parameter exists because the factor is defined
/// per insulation family in the standard.
pub fn soil_temperature_factor(
    data: &ReferenceData,
    ground_temp_c: f64,
    insulation: Insulation,
) -> Factor {
    let curve = data.soil_temperature_curve(insulation);
    Factor::from_table(interpolate(curve, ground_temp_c), source::TABLE_B11)
}

/// K2 - burial depth factor (Table B.12 direct / B.13 ducts).
///
/// The selected table has two columns split at 185 mm2; the factor is
/// interpolated over depth within the applicable column.
pub fn burial_depth_factor(
    data: &ReferenceData,
    depth_m: f64,
    section_mm2: f64,
    installation: InstallationMethod,
) -> Factor {
    let table = data.depth_table(installation);
    Factor::from_table(interpolate(table.column(section_mm2), depth_m), table.source)
}

/// K3 - soil thermal resistivity factor (Tables B.14-B.17).
///
/// Two-stage interpolation: a cross-section strictly between two tabulated
/// rows first synthesizes a resistivity curve by interpolating the bracketing
/// rows at every resistivity breakpoint; the (selected or synthesized) curve
/// is then interpolated over resistivity. Sections at or beyond the tabulated
/// range use the edge row's curve directly.
pub fn thermal_resistivity_factor(
    data: &ReferenceData,
    resistivity_km_w: f64,
    installation: InstallationMethod,
    core: CoreConstruction,
    section_mm2: f64,
) -> Factor {
    let table = data.resistivity_table(core, installation);
    let sections = table.sections;
    let first = &sections[0];
    let last = &sections[sections.len() - 1];

    let value = if section_mm2 <= first.section_mm2 {
        interpolate(first.points, resistivity_km_w)
    } else if section_mm2 >= last.section_mm2 {
        interpolate(last.points, resistivity_km_w)
    } else if let Some(exact) = sections.iter().find(|c| c.section_mm2 == section_mm2) {
        interpolate(exact.points, resistivity_km_w)
    } else {
        let (lo, hi) = {
            let mut pair = (&sections[0], &sections[1]);
            for w in sections.windows(2) {
                if w[0].section_mm2 < section_mm2 && section_mm2 < w[1].section_mm2 {
                    pair = (&w[0], &w[1]);
                    break;
                }
            }
            pair
        };
        // Rows of one table share resistivity breakpoints, so the curves can
        // be blended pointwise.
        let synthesized: Vec<(f64, f64)> = lo
            .points
            .iter()
            .zip(hi.points)
            .map(|(&(r, f_lo), &(_, f_hi))| {
                (r, lerp(section_mm2, lo.section_mm2, f_lo, hi.section_mm2, f_hi))
            })
            .collect();
        interpolate(&synthesized, resistivity_km_w)
    };

    Factor::from_table(value, table.source)
}

/// K4 - grouping (proximity) factor (Tables B.18-B.21).
///
/// A single circuit needs no derating: the factor is exactly 1.0 with the
/// [`source::NO_GROUPING`] provenance and no table is consulted. Otherwise
/// the (core construction x installation method) table applies; see
/// [`grouping_from_table`] for the row handling.
pub fn grouping_factor(
    data: &ReferenceData,
    num_circuits: u32,
    spacing_mm: f64,
    installation: InstallationMethod,
    core: CoreConstruction,
) -> Factor {
    if num_circuits <= 1 {
        return Factor::from_table(1.0, source::NO_GROUPING);
    }
    grouping_from_table(
        data.grouping_table(core, installation),
        num_circuits,
        spacing_mm,
    )
}

/// Resolve a grouping factor from one table.
///
/// Spacing interpolation within a row runs over published entries only; a row
/// whose cells are all unpublished contributes nothing. Circuit-count
/// handling:
///
/// - exact breakpoint: that row's spacing-interpolated value, unless the row
///   is empty (then the conservative estimate applies),
/// - between breakpoints: interpolate the two bracketing rows' values,
/// - one bracketing row empty: the other row's value, un-interpolated, with a
///   provenance note flagging the approximation,
/// - both empty: [`GROUPING_NO_DATA_FALLBACK`] with an "estimated" note.
pub(crate) fn grouping_from_table(
    table: &GroupingTable,
    num_circuits: u32,
    spacing_mm: f64,
) -> Factor {
    let rows = table.rows;
    debug_assert!(rows.len() >= 2);
    let n = num_circuits as f64;
    let last = rows.len() - 1;

    let (lo, hi) = if n <= rows[0].circuits {
        (0, 1)
    } else if n >= rows[last].circuits {
        (last - 1, last)
    } else if let Some(idx) = rows.iter().position(|r| r.circuits == n) {
        return match row_value(&rows[idx], spacing_mm) {
            Some(value) => Factor::from_table(value, table.source),
            None => estimated(table),
        };
    } else {
        let mut pair = (0, 1);
        for i in 0..last {
            if rows[i].circuits <= n && n <= rows[i + 1].circuits {
                pair = (i, i + 1);
                break;
            }
        }
        pair
    };

    match (row_value(&rows[lo], spacing_mm), row_value(&rows[hi], spacing_mm)) {
        (Some(f_lo), Some(f_hi)) => Factor::from_table(
            lerp(n, rows[lo].circuits, f_lo, rows[hi].circuits, f_hi),
            table.source,
        ),
        (Some(f), None) | (None, Some(f)) => Factor {
            value: f,
            source: format!("{} (single row, not interpolated)", table.source),
        },
        (None, None) => estimated(table),
    }
}

fn estimated(table: &GroupingTable) -> Factor {
    Factor {
        value: GROUPING_NO_DATA_FALLBACK,
        source: format!("{} (estimated - data not available)", table.source),
    }
}

/// Spacing-interpolated value of one circuit-count row, over published
/// entries only. `None` when the row has no published data.
fn row_value(row: &GroupingRow, spacing_mm: f64) -> Option<f64> {
    let published: Vec<(f64, f64)> = row
        .entries
        .iter()
        .filter_map(|&(spacing, factor)| factor.map(|f| (spacing, f)))
        .collect();
    if published.is_empty() {
        None
    } else {
        Some(interpolate(&published, spacing_mm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cable::Insulation;
    use crate::tables::ReferenceData;

    fn data() -> &'static ReferenceData {
        ReferenceData::standard()
    }

    #[test]
    fn test_k1_reference_conditions() {
        let k1 = soil_temperature_factor(data(), 20.0, Insulation::Xlpe);
        assert_eq!(k1.value, 1.0);
        assert_eq!(k1.source, source::TABLE_B11);
    }

    #[test]
    fn test_k1_same_curve_for_all_insulations() {
        for ins in Insulation::ALL {
            let k1 = soil_temperature_factor(data(), 32.5, ins);
            assert!((k1.value - 0.91).abs() < 1e-9);
        }
    }

    #[test]
    fn test_k1_below_range_follows_edge_segment() {
        // Segment (10, 1.07)-(15, 1.04) evaluated at 5 degC
        let k1 = soil_temperature_factor(data(), 5.0, Insulation::Xlpe);
        assert!((k1.value - 1.10).abs() < 1e-9);
    }

    #[test]
    fn test_k2_reference_depth() {
        let k2 = burial_depth_factor(data(), 0.8, 400.0, InstallationMethod::DirectBuried);
        assert_eq!(k2.value, 1.0);
        assert_eq!(k2.source, source::TABLE_B12);
    }

    #[test]
    fn test_k2_section_threshold_selects_column() {
        let small = burial_depth_factor(data(), 2.0, 185.0, InstallationMethod::DirectBuried);
        let large = burial_depth_factor(data(), 2.0, 240.0, InstallationMethod::DirectBuried);
        assert_eq!(small.value, 0.93);
        assert_eq!(large.value, 0.89);
    }

    #[test]
    fn test_k2_ducted_table_selected() {
        let k2 = burial_depth_factor(data(), 0.5, 95.0, InstallationMethod::Ducts);
        assert_eq!(k2.value, 1.03);
        assert_eq!(k2.source, source::TABLE_B13);
    }

    #[test]
    fn test_k3_exact_section_at_knot() {
        let k3 = thermal_resistivity_factor(
            data(),
            2.0,
            InstallationMethod::DirectBuried,
            CoreConstruction::SingleCore,
            95.0,
        );
        assert_eq!(k3.value, 0.89);
        assert_eq!(k3.source, source::TABLE_B14);
    }

    #[test]
    fn test_k3_exact_section_skips_synthesis() {
        // An exact tabulated section must match interpolating "between"
        // itself, i.e. the direct row lookup.
        let exact = thermal_resistivity_factor(
            data(),
            1.1,
            InstallationMethod::Ducts,
            CoreConstruction::ThreeCore,
            95.0,
        );
        let direct_row = crate::interpolation::interpolate(
            data()
                .resistivity_table(CoreConstruction::ThreeCore, InstallationMethod::Ducts)
                .sections
                .iter()
                .find(|c| c.section_mm2 == 95.0)
                .unwrap()
                .points,
            1.1,
        );
        assert_eq!(exact.value, direct_row);
    }

    #[test]
    fn test_k3_synthesizes_between_sections() {
        // Midway between the 95 and 300 mm2 rows at a tabulated resistivity:
        // the factor is the midpoint of the two rows' factors.
        let k3 = thermal_resistivity_factor(
            data(),
            0.7,
            InstallationMethod::DirectBuried,
            CoreConstruction::SingleCore,
            197.5,
        );
        assert!((k3.value - 1.305).abs() < 1e-9);
    }

    #[test]
    fn test_k3_section_clamps_to_edge_rows() {
        let tiny = thermal_resistivity_factor(
            data(),
            3.0,
            InstallationMethod::DirectBuried,
            CoreConstruction::SingleCore,
            10.0,
        );
        let smallest = thermal_resistivity_factor(
            data(),
            3.0,
            InstallationMethod::DirectBuried,
            CoreConstruction::SingleCore,
            25.0,
        );
        assert_eq!(tiny.value, smallest.value);

        let huge = thermal_resistivity_factor(
            data(),
            3.0,
            InstallationMethod::DirectBuried,
            CoreConstruction::SingleCore,
            2000.0,
        );
        assert_eq!(huge.value, 0.71);
    }

    #[test]
    fn test_k3_reference_resistivity_is_unity() {
        for core in CoreConstruction::ALL {
            for install in InstallationMethod::ALL {
                let k3 = thermal_resistivity_factor(data(), 1.5, install, core, 150.0);
                assert!((k3.value - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_k4_single_circuit_short_circuits() {
        for core in CoreConstruction::ALL {
            for install in InstallationMethod::ALL {
                for spacing in [0.0, 200.0, 5000.0] {
                    let k4 = grouping_factor(data(), 1, spacing, install, core);
                    assert_eq!(k4.value, 1.0);
                    assert_eq!(k4.source, source::NO_GROUPING);
                }
            }
        }
    }

    #[test]
    fn test_k4_exact_row_and_spacing() {
        let k4 = grouping_factor(
            data(),
            4,
            200.0,
            InstallationMethod::DirectBuried,
            CoreConstruction::SingleCore,
        );
        assert_eq!(k4.value, 0.68);
        assert_eq!(k4.source, source::TABLE_B19);
    }

    #[test]
    fn test_k4_spacing_interpolation() {
        // 2 circuits at 300 mm: midpoint of the 200 and 400 mm cells
        let k4 = grouping_factor(
            data(),
            2,
            300.0,
            InstallationMethod::DirectBuried,
            CoreConstruction::SingleCore,
        );
        assert!((k4.value - 0.84).abs() < 1e-9);
    }

    #[test]
    fn test_k4_unpublished_touching_cells_skipped() {
        // Duct tables publish nothing for touching circuits; the 200/400 mm
        // segment is evaluated at 0 mm instead.
        let k4 = grouping_factor(
            data(),
            2,
            0.0,
            InstallationMethod::Ducts,
            CoreConstruction::SingleCore,
        );
        assert!((k4.value - 0.82).abs() < 1e-9);
        assert_eq!(k4.source, source::TABLE_B21);
    }

    #[test]
    fn test_k4_beyond_last_row_follows_edge_segment() {
        // 8 circuits at 200 mm: segment through rows 5 and 6 evaluated at 8
        let k4 = grouping_factor(
            data(),
            8,
            200.0,
            InstallationMethod::DirectBuried,
            CoreConstruction::ThreeCore,
        );
        assert!((k4.value - 0.60).abs() < 1e-9);
    }

    static SPARSE_TABLE: GroupingTable = GroupingTable {
        source: "Test Grouping",
        rows: &[
            GroupingRow {
                circuits: 2.0,
                entries: &[(200.0, Some(0.80)), (400.0, None)],
            },
            GroupingRow {
                circuits: 3.0,
                entries: &[(200.0, None), (400.0, None)],
            },
            GroupingRow {
                circuits: 4.0,
                entries: &[(200.0, None), (400.0, None)],
            },
        ],
    };

    #[test]
    fn test_k4_single_published_entry_used_directly() {
        // Row 2 has one published cell; spacing plays no role.
        let k4 = grouping_from_table(&SPARSE_TABLE, 2, 999.0);
        assert_eq!(k4.value, 0.80);
        assert_eq!(k4.source, "Test Grouping (single row, not interpolated)");
    }

    #[test]
    fn test_k4_exact_empty_row_falls_back_to_estimate() {
        let k4 = grouping_from_table(&SPARSE_TABLE, 3, 200.0);
        assert_eq!(k4.value, GROUPING_NO_DATA_FALLBACK);
        assert_eq!(k4.source, "Test Grouping (estimated - data not available)");
    }

    #[test]
    fn test_k4_both_rows_empty_falls_back_to_estimate() {
        let k4 = grouping_from_table(&SPARSE_TABLE, 4, 200.0);
        assert_eq!(k4.value, GROUPING_NO_DATA_FALLBACK);
        assert!(k4.source.contains("estimated"));
    }
}
