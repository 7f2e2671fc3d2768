//! Correction-factor table data, IEC 60502-2 Annex B (18/30 kV set).
//!
//! Reference conditions are 20 degC soil, 0.8 m depth, 1.5 K.m/W soil thermal
//! resistivity and a single circuit; every curve passes through 1.00 there.

use super::{source, BurialDepthTable, GroupingRow, GroupingTable, ResistivityTable, SectionCurve};

/// Table B.11 - soil temperature correction for 90 degC insulations
/// (degC, factor)
pub(crate) const SOIL_TEMPERATURE_90C: &[(f64, f64)] = &[
    (10.0, 1.07),
    (15.0, 1.04),
    (20.0, 1.00),
    (25.0, 0.96),
    (30.0, 0.93),
    (35.0, 0.89),
    (40.0, 0.85),
    (45.0, 0.80),
    (50.0, 0.76),
];

/// Table B.12 - burial depth correction, cables laid direct in ground
pub(crate) static DEPTH_DIRECT: BurialDepthTable = BurialDepthTable {
    source: source::TABLE_B12,
    up_to_185: &[
        (0.50, 1.04),
        (0.60, 1.02),
        (0.80, 1.00),
        (1.00, 0.98),
        (1.25, 0.96),
        (1.50, 0.95),
        (1.75, 0.94),
        (2.00, 0.93),
        (2.50, 0.91),
        (3.00, 0.90),
    ],
    above_185: &[
        (0.50, 1.06),
        (0.60, 1.04),
        (0.80, 1.00),
        (1.00, 0.97),
        (1.25, 0.95),
        (1.50, 0.93),
        (1.75, 0.91),
        (2.00, 0.89),
        (2.50, 0.86),
        (3.00, 0.84),
    ],
};

/// Table B.13 - burial depth correction, cables in buried ducts
pub(crate) static DEPTH_DUCTS: BurialDepthTable = BurialDepthTable {
    source: source::TABLE_B13,
    up_to_185: &[
        (0.50, 1.03),
        (0.60, 1.02),
        (0.80, 1.00),
        (1.00, 0.99),
        (1.25, 0.97),
        (1.50, 0.96),
        (1.75, 0.95),
        (2.00, 0.94),
        (2.50, 0.93),
        (3.00, 0.92),
    ],
    above_185: &[
        (0.50, 1.04),
        (0.60, 1.02),
        (0.80, 1.00),
        (1.00, 0.98),
        (1.25, 0.96),
        (1.50, 0.95),
        (1.75, 0.94),
        (2.00, 0.93),
        (2.50, 0.91),
        (3.00, 0.90),
    ],
};

/// Table B.14 - soil thermal resistivity correction, single-core direct
pub(crate) static RESISTIVITY_SINGLE_DIRECT: ResistivityTable = ResistivityTable {
    source: source::TABLE_B14,
    sections: &[
        SectionCurve {
            section_mm2: 25.0,
            points: &[
                (0.7, 1.25),
                (0.8, 1.20),
                (1.0, 1.12),
                (1.2, 1.06),
                (1.5, 1.00),
                (2.0, 0.90),
                (2.5, 0.82),
                (3.0, 0.77),
            ],
        },
        SectionCurve {
            section_mm2: 95.0,
            points: &[
                (0.7, 1.29),
                (0.8, 1.23),
                (1.0, 1.14),
                (1.2, 1.07),
                (1.5, 1.00),
                (2.0, 0.89),
                (2.5, 0.81),
                (3.0, 0.75),
            ],
        },
        SectionCurve {
            section_mm2: 300.0,
            points: &[
                (0.7, 1.32),
                (0.8, 1.26),
                (1.0, 1.16),
                (1.2, 1.08),
                (1.5, 1.00),
                (2.0, 0.88),
                (2.5, 0.79),
                (3.0, 0.73),
            ],
        },
        SectionCurve {
            section_mm2: 630.0,
            points: &[
                (0.7, 1.35),
                (0.8, 1.28),
                (1.0, 1.17),
                (1.2, 1.09),
                (1.5, 1.00),
                (2.0, 0.87),
                (2.5, 0.78),
                (3.0, 0.71),
            ],
        },
    ],
};

/// Table B.15 - soil thermal resistivity correction, single-core in ducts
pub(crate) static RESISTIVITY_SINGLE_DUCTS: ResistivityTable = ResistivityTable {
    source: source::TABLE_B15,
    sections: &[
        SectionCurve {
            section_mm2: 25.0,
            points: &[
                (0.7, 1.20),
                (0.8, 1.16),
                (1.0, 1.09),
                (1.2, 1.05),
                (1.5, 1.00),
                (2.0, 0.92),
                (2.5, 0.85),
                (3.0, 0.80),
            ],
        },
        SectionCurve {
            section_mm2: 95.0,
            points: &[
                (0.7, 1.23),
                (0.8, 1.18),
                (1.0, 1.11),
                (1.2, 1.05),
                (1.5, 1.00),
                (2.0, 0.91),
                (2.5, 0.84),
                (3.0, 0.78),
            ],
        },
        SectionCurve {
            section_mm2: 300.0,
            points: &[
                (0.7, 1.26),
                (0.8, 1.21),
                (1.0, 1.12),
                (1.2, 1.06),
                (1.5, 1.00),
                (2.0, 0.90),
                (2.5, 0.82),
                (3.0, 0.76),
            ],
        },
        SectionCurve {
            section_mm2: 630.0,
            points: &[
                (0.7, 1.28),
                (0.8, 1.22),
                (1.0, 1.13),
                (1.2, 1.07),
                (1.5, 1.00),
                (2.0, 0.89),
                (2.5, 0.81),
                (3.0, 0.75),
            ],
        },
    ],
};

/// Table B.16 - soil thermal resistivity correction, three-core direct
pub(crate) static RESISTIVITY_THREE_DIRECT: ResistivityTable = ResistivityTable {
    source: source::TABLE_B16,
    sections: &[
        SectionCurve {
            section_mm2: 25.0,
            points: &[
                (0.7, 1.22),
                (0.8, 1.18),
                (1.0, 1.10),
                (1.2, 1.05),
                (1.5, 1.00),
                (2.0, 0.91),
                (2.5, 0.84),
                (3.0, 0.78),
            ],
        },
        SectionCurve {
            section_mm2: 95.0,
            points: &[
                (0.7, 1.26),
                (0.8, 1.21),
                (1.0, 1.13),
                (1.2, 1.06),
                (1.5, 1.00),
                (2.0, 0.90),
                (2.5, 0.82),
                (3.0, 0.76),
            ],
        },
        SectionCurve {
            section_mm2: 240.0,
            points: &[
                (0.7, 1.30),
                (0.8, 1.24),
                (1.0, 1.15),
                (1.2, 1.07),
                (1.5, 1.00),
                (2.0, 0.89),
                (2.5, 0.80),
                (3.0, 0.74),
            ],
        },
    ],
};

/// Table B.17 - soil thermal resistivity correction, three-core in ducts
pub(crate) static RESISTIVITY_THREE_DUCTS: ResistivityTable = ResistivityTable {
    source: source::TABLE_B17,
    sections: &[
        SectionCurve {
            section_mm2: 25.0,
            points: &[
                (0.7, 1.18),
                (0.8, 1.14),
                (1.0, 1.08),
                (1.2, 1.04),
                (1.5, 1.00),
                (2.0, 0.93),
                (2.5, 0.87),
                (3.0, 0.81),
            ],
        },
        SectionCurve {
            section_mm2: 95.0,
            points: &[
                (0.7, 1.21),
                (0.8, 1.17),
                (1.0, 1.10),
                (1.2, 1.05),
                (1.5, 1.00),
                (2.0, 0.92),
                (2.5, 0.85),
                (3.0, 0.79),
            ],
        },
        SectionCurve {
            section_mm2: 240.0,
            points: &[
                (0.7, 1.24),
                (0.8, 1.19),
                (1.0, 1.11),
                (1.2, 1.05),
                (1.5, 1.00),
                (2.0, 0.91),
                (2.5, 0.83),
                (3.0, 0.77),
            ],
        },
    ],
};

// Grouping tables. Spacing 0 mm means circuits touching; None cells have no
// published factor and are skipped by the resolver.

/// Table B.18 - grouping, three-core cables laid direct in ground
pub(crate) static GROUPING_THREE_DIRECT: GroupingTable = GroupingTable {
    source: source::TABLE_B18,
    rows: &[
        GroupingRow {
            circuits: 2.0,
            entries: &[
                (0.0, Some(0.79)),
                (200.0, Some(0.84)),
                (400.0, Some(0.88)),
                (600.0, Some(0.90)),
                (800.0, Some(0.92)),
            ],
        },
        GroupingRow {
            circuits: 3.0,
            entries: &[
                (0.0, Some(0.69)),
                (200.0, Some(0.75)),
                (400.0, Some(0.81)),
                (600.0, Some(0.85)),
                (800.0, Some(0.88)),
            ],
        },
        GroupingRow {
            circuits: 4.0,
            entries: &[
                (0.0, Some(0.63)),
                (200.0, Some(0.70)),
                (400.0, Some(0.77)),
                (600.0, Some(0.82)),
                (800.0, Some(0.86)),
            ],
        },
        GroupingRow {
            circuits: 5.0,
            entries: &[
                (0.0, Some(0.58)),
                (200.0, Some(0.66)),
                (400.0, Some(0.74)),
                (600.0, Some(0.80)),
                (800.0, None),
            ],
        },
        GroupingRow {
            circuits: 6.0,
            entries: &[
                (0.0, Some(0.55)),
                (200.0, Some(0.64)),
                (400.0, Some(0.72)),
                (600.0, Some(0.78)),
                (800.0, None),
            ],
        },
    ],
};

/// Table B.19 - grouping, single-core three-phase circuits laid direct
pub(crate) static GROUPING_SINGLE_DIRECT: GroupingTable = GroupingTable {
    source: source::TABLE_B19,
    rows: &[
        GroupingRow {
            circuits: 2.0,
            entries: &[
                (0.0, Some(0.76)),
                (200.0, Some(0.82)),
                (400.0, Some(0.86)),
                (600.0, Some(0.89)),
                (800.0, Some(0.91)),
            ],
        },
        GroupingRow {
            circuits: 3.0,
            entries: &[
                (0.0, Some(0.65)),
                (200.0, Some(0.73)),
                (400.0, Some(0.79)),
                (600.0, Some(0.83)),
                (800.0, Some(0.87)),
            ],
        },
        GroupingRow {
            circuits: 4.0,
            entries: &[
                (0.0, Some(0.60)),
                (200.0, Some(0.68)),
                (400.0, Some(0.75)),
                (600.0, Some(0.80)),
                (800.0, Some(0.85)),
            ],
        },
        GroupingRow {
            circuits: 5.0,
            entries: &[
                (0.0, Some(0.55)),
                (200.0, Some(0.64)),
                (400.0, Some(0.72)),
                (600.0, Some(0.78)),
                (800.0, None),
            ],
        },
        GroupingRow {
            circuits: 6.0,
            entries: &[
                (0.0, Some(0.52)),
                (200.0, Some(0.61)),
                (400.0, Some(0.70)),
                (600.0, Some(0.76)),
                (800.0, None),
            ],
        },
    ],
};

/// Table B.20 - grouping, three-core cables in single-way ducts
pub(crate) static GROUPING_THREE_DUCTS: GroupingTable = GroupingTable {
    source: source::TABLE_B20,
    rows: &[
        GroupingRow {
            circuits: 2.0,
            entries: &[
                (0.0, None),
                (200.0, Some(0.87)),
                (400.0, Some(0.90)),
                (600.0, Some(0.92)),
                (800.0, Some(0.94)),
            ],
        },
        GroupingRow {
            circuits: 3.0,
            entries: &[
                (0.0, None),
                (200.0, Some(0.79)),
                (400.0, Some(0.84)),
                (600.0, Some(0.87)),
                (800.0, Some(0.90)),
            ],
        },
        GroupingRow {
            circuits: 4.0,
            entries: &[
                (0.0, None),
                (200.0, Some(0.74)),
                (400.0, Some(0.80)),
                (600.0, Some(0.84)),
                (800.0, Some(0.88)),
            ],
        },
        GroupingRow {
            circuits: 5.0,
            entries: &[
                (0.0, None),
                (200.0, Some(0.70)),
                (400.0, Some(0.77)),
                (600.0, Some(0.82)),
                (800.0, None),
            ],
        },
        GroupingRow {
            circuits: 6.0,
            entries: &[
                (0.0, None),
                (200.0, Some(0.68)),
                (400.0, Some(0.75)),
                (600.0, Some(0.80)),
                (800.0, None),
            ],
        },
    ],
};

/// Table B.21 - grouping, single-core three-phase circuits in ducts
pub(crate) static GROUPING_SINGLE_DUCTS: GroupingTable = GroupingTable {
    source: source::TABLE_B21,
    rows: &[
        GroupingRow {
            circuits: 2.0,
            entries: &[
                (0.0, None),
                (200.0, Some(0.85)),
                (400.0, Some(0.88)),
                (600.0, Some(0.90)),
                (800.0, Some(0.92)),
            ],
        },
        GroupingRow {
            circuits: 3.0,
            entries: &[
                (0.0, None),
                (200.0, Some(0.76)),
                (400.0, Some(0.81)),
                (600.0, Some(0.85)),
                (800.0, Some(0.88)),
            ],
        },
        GroupingRow {
            circuits: 4.0,
            entries: &[
                (0.0, None),
                (200.0, Some(0.71)),
                (400.0, Some(0.77)),
                (600.0, Some(0.82)),
                (800.0, Some(0.86)),
            ],
        },
        GroupingRow {
            circuits: 5.0,
            entries: &[
                (0.0, None),
                (200.0, Some(0.67)),
                (400.0, Some(0.74)),
                (600.0, Some(0.79)),
                (800.0, None),
            ],
        },
        GroupingRow {
            circuits: 6.0,
            entries: &[
                (0.0, None),
                (200.0, Some(0.64)),
                (400.0, Some(0.72)),
                (600.0, Some(0.77)),
                (800.0, None),
            ],
        },
    ],
};
