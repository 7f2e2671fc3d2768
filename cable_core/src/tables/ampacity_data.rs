//! Base-ampacity records, IEC 60502-2 Annex B Tables B.2-B.9 (18/30 kV set).
//!
//! The composite key space is sparse on purpose: only combinations the
//! standard tabulates appear here. Single-core records carry no armoured
//! variants (the tables do not distinguish armouring for single-core), and
//! the flat-touching layout is published for duct installations only.
//! Three-core records always use the not-applicable layout.

use crate::cable::Armouring::*;
use crate::cable::Conductor::*;
use crate::cable::CoreConstruction::*;
use crate::cable::Insulation::*;
use crate::cable::InstallationMethod::*;
use crate::cable::Layout::*;
use crate::cable::{Armouring, Conductor, CoreConstruction, Insulation, InstallationMethod, Layout};

use super::{source, AmpacityKey, AmpacityRecord};

const fn rec(
    insulation: Insulation,
    conductor: Conductor,
    core: CoreConstruction,
    installation: InstallationMethod,
    armouring: Armouring,
    layout: Layout,
    source: &'static str,
    amps: &'static [(f64, f64)],
) -> (AmpacityKey, AmpacityRecord) {
    (
        AmpacityKey {
            insulation,
            conductor,
            core,
            installation,
            armouring,
            layout,
        },
        AmpacityRecord { source, amps },
    )
}

pub(crate) const RECORDS: &[(AmpacityKey, AmpacityRecord)] = &[
    // Single-core XLPE laid direct (Table B.2)
    rec(Xlpe, Aluminium, SingleCore, DirectBuried, Unarmoured, Trefoil, source::TABLE_B2, &[(35.0, 122.0), (50.0, 144.0), (70.0, 178.0), (95.0, 213.0), (120.0, 242.0), (150.0, 271.0), (185.0, 307.0), (240.0, 355.0), (300.0, 400.0), (400.0, 454.0), (500.0, 512.0), (630.0, 581.0)]),
    rec(Xlpe, Copper, SingleCore, DirectBuried, Unarmoured, Trefoil, source::TABLE_B2, &[(35.0, 156.0), (50.0, 184.0), (70.0, 228.0), (95.0, 273.0), (120.0, 310.0), (150.0, 347.0), (185.0, 393.0), (240.0, 454.0), (300.0, 512.0), (400.0, 581.0), (500.0, 655.0), (630.0, 744.0)]),
    rec(Xlpe, Aluminium, SingleCore, DirectBuried, Unarmoured, FlatSpaced, source::TABLE_B2, &[(35.0, 129.0), (50.0, 153.0), (70.0, 189.0), (95.0, 226.0), (120.0, 257.0), (150.0, 287.0), (185.0, 325.0), (240.0, 376.0), (300.0, 424.0), (400.0, 481.0), (500.0, 543.0), (630.0, 616.0)]),
    rec(Xlpe, Copper, SingleCore, DirectBuried, Unarmoured, FlatSpaced, source::TABLE_B2, &[(35.0, 166.0), (50.0, 195.0), (70.0, 242.0), (95.0, 289.0), (120.0, 328.0), (150.0, 368.0), (185.0, 417.0), (240.0, 482.0), (300.0, 543.0), (400.0, 616.0), (500.0, 695.0), (630.0, 788.0)]),
    // Single-core XLPE in ducts (Table B.3)
    rec(Xlpe, Aluminium, SingleCore, Ducts, Unarmoured, Trefoil, source::TABLE_B3, &[(35.0, 107.0), (50.0, 127.0), (70.0, 157.0), (95.0, 187.0), (120.0, 213.0), (150.0, 238.0), (185.0, 270.0), (240.0, 312.0), (300.0, 352.0), (400.0, 400.0), (500.0, 451.0), (630.0, 511.0)]),
    rec(Xlpe, Copper, SingleCore, Ducts, Unarmoured, Trefoil, source::TABLE_B3, &[(35.0, 137.0), (50.0, 162.0), (70.0, 200.0), (95.0, 240.0), (120.0, 273.0), (150.0, 305.0), (185.0, 346.0), (240.0, 400.0), (300.0, 451.0), (400.0, 511.0), (500.0, 577.0), (630.0, 654.0)]),
    rec(Xlpe, Aluminium, SingleCore, Ducts, Unarmoured, FlatSpaced, source::TABLE_B3, &[(35.0, 113.0), (50.0, 133.0), (70.0, 164.0), (95.0, 197.0), (120.0, 224.0), (150.0, 250.0), (185.0, 284.0), (240.0, 328.0), (300.0, 370.0), (400.0, 419.0), (500.0, 473.0), (630.0, 537.0)]),
    rec(Xlpe, Copper, SingleCore, Ducts, Unarmoured, FlatSpaced, source::TABLE_B3, &[(35.0, 144.0), (50.0, 170.0), (70.0, 211.0), (95.0, 252.0), (120.0, 286.0), (150.0, 321.0), (185.0, 363.0), (240.0, 420.0), (300.0, 473.0), (400.0, 537.0), (500.0, 606.0), (630.0, 687.0)]),
    rec(Xlpe, Aluminium, SingleCore, Ducts, Unarmoured, FlatTouching, source::TABLE_B3, &[(35.0, 104.0), (50.0, 123.0), (70.0, 152.0), (95.0, 182.0), (120.0, 207.0), (150.0, 231.0), (185.0, 262.0), (240.0, 303.0), (300.0, 341.0), (400.0, 388.0), (500.0, 437.0), (630.0, 496.0)]),
    rec(Xlpe, Copper, SingleCore, Ducts, Unarmoured, FlatTouching, source::TABLE_B3, &[(35.0, 133.0), (50.0, 157.0), (70.0, 194.0), (95.0, 233.0), (120.0, 264.0), (150.0, 296.0), (185.0, 335.0), (240.0, 388.0), (300.0, 437.0), (400.0, 496.0), (500.0, 559.0), (630.0, 635.0)]),
    // Single-core EPR laid direct (Table B.4)
    rec(Epr, Aluminium, SingleCore, DirectBuried, Unarmoured, Trefoil, source::TABLE_B4, &[(35.0, 118.0), (50.0, 140.0), (70.0, 173.0), (95.0, 207.0), (120.0, 235.0), (150.0, 263.0), (185.0, 298.0), (240.0, 344.0), (300.0, 388.0), (400.0, 440.0), (500.0, 497.0), (630.0, 564.0)]),
    rec(Epr, Copper, SingleCore, DirectBuried, Unarmoured, Trefoil, source::TABLE_B4, &[(35.0, 151.0), (50.0, 179.0), (70.0, 221.0), (95.0, 264.0), (120.0, 300.0), (150.0, 336.0), (185.0, 381.0), (240.0, 441.0), (300.0, 497.0), (400.0, 564.0), (500.0, 636.0), (630.0, 721.0)]),
    rec(Epr, Aluminium, SingleCore, DirectBuried, Unarmoured, FlatSpaced, source::TABLE_B4, &[(35.0, 125.0), (50.0, 148.0), (70.0, 183.0), (95.0, 219.0), (120.0, 249.0), (150.0, 279.0), (185.0, 316.0), (240.0, 365.0), (300.0, 411.0), (400.0, 467.0), (500.0, 526.0), (630.0, 597.0)]),
    rec(Epr, Copper, SingleCore, DirectBuried, Unarmoured, FlatSpaced, source::TABLE_B4, &[(35.0, 161.0), (50.0, 190.0), (70.0, 234.0), (95.0, 280.0), (120.0, 318.0), (150.0, 357.0), (185.0, 404.0), (240.0, 467.0), (300.0, 526.0), (400.0, 598.0), (500.0, 674.0), (630.0, 765.0)]),
    // Single-core EPR in ducts (Table B.5)
    rec(Epr, Aluminium, SingleCore, Ducts, Unarmoured, Trefoil, source::TABLE_B5, &[(35.0, 104.0), (50.0, 123.0), (70.0, 152.0), (95.0, 182.0), (120.0, 207.0), (150.0, 231.0), (185.0, 262.0), (240.0, 303.0), (300.0, 341.0), (400.0, 388.0), (500.0, 437.0), (630.0, 496.0)]),
    rec(Epr, Copper, SingleCore, Ducts, Unarmoured, Trefoil, source::TABLE_B5, &[(35.0, 133.0), (50.0, 157.0), (70.0, 194.0), (95.0, 233.0), (120.0, 264.0), (150.0, 296.0), (185.0, 335.0), (240.0, 388.0), (300.0, 437.0), (400.0, 496.0), (500.0, 559.0), (630.0, 635.0)]),
    rec(Epr, Aluminium, SingleCore, Ducts, Unarmoured, FlatSpaced, source::TABLE_B5, &[(35.0, 109.0), (50.0, 129.0), (70.0, 160.0), (95.0, 191.0), (120.0, 217.0), (150.0, 243.0), (185.0, 275.0), (240.0, 318.0), (300.0, 359.0), (400.0, 407.0), (500.0, 459.0), (630.0, 521.0)]),
    rec(Epr, Copper, SingleCore, Ducts, Unarmoured, FlatSpaced, source::TABLE_B5, &[(35.0, 140.0), (50.0, 165.0), (70.0, 204.0), (95.0, 244.0), (120.0, 278.0), (150.0, 311.0), (185.0, 352.0), (240.0, 407.0), (300.0, 459.0), (400.0, 521.0), (500.0, 587.0), (630.0, 667.0)]),
    rec(Epr, Aluminium, SingleCore, Ducts, Unarmoured, FlatTouching, source::TABLE_B5, &[(35.0, 101.0), (50.0, 119.0), (70.0, 147.0), (95.0, 176.0), (120.0, 200.0), (150.0, 224.0), (185.0, 254.0), (240.0, 294.0), (300.0, 331.0), (400.0, 376.0), (500.0, 424.0), (630.0, 481.0)]),
    rec(Epr, Copper, SingleCore, Ducts, Unarmoured, FlatTouching, source::TABLE_B5, &[(35.0, 129.0), (50.0, 153.0), (70.0, 189.0), (95.0, 226.0), (120.0, 256.0), (150.0, 287.0), (185.0, 325.0), (240.0, 376.0), (300.0, 424.0), (400.0, 481.0), (500.0, 543.0), (630.0, 616.0)]),
    // Three-core XLPE laid direct (Table B.6)
    rec(Xlpe, Aluminium, ThreeCore, DirectBuried, Unarmoured, NotApplicable, source::TABLE_B6, &[(25.0, 95.0), (35.0, 113.0), (50.0, 134.0), (70.0, 165.0), (95.0, 197.0), (120.0, 223.0), (150.0, 250.0), (185.0, 283.0), (240.0, 326.0), (300.0, 368.0)]),
    rec(Xlpe, Copper, ThreeCore, DirectBuried, Unarmoured, NotApplicable, source::TABLE_B6, &[(25.0, 123.0), (35.0, 146.0), (50.0, 173.0), (70.0, 213.0), (95.0, 254.0), (120.0, 288.0), (150.0, 322.0), (185.0, 365.0), (240.0, 421.0), (300.0, 475.0)]),
    rec(Xlpe, Aluminium, ThreeCore, DirectBuried, Armoured, NotApplicable, source::TABLE_B6, &[(25.0, 91.0), (35.0, 108.0), (50.0, 129.0), (70.0, 158.0), (95.0, 189.0), (120.0, 214.0), (150.0, 240.0), (185.0, 272.0), (240.0, 313.0), (300.0, 353.0)]),
    rec(Xlpe, Copper, ThreeCore, DirectBuried, Armoured, NotApplicable, source::TABLE_B6, &[(25.0, 118.0), (35.0, 140.0), (50.0, 166.0), (70.0, 204.0), (95.0, 244.0), (120.0, 276.0), (150.0, 310.0), (185.0, 350.0), (240.0, 404.0), (300.0, 456.0)]),
    // Three-core XLPE in ducts (Table B.7)
    rec(Xlpe, Aluminium, ThreeCore, Ducts, Unarmoured, NotApplicable, source::TABLE_B7, &[(25.0, 86.0), (35.0, 102.0), (50.0, 121.0), (70.0, 148.0), (95.0, 177.0), (120.0, 201.0), (150.0, 225.0), (185.0, 255.0), (240.0, 293.0), (300.0, 331.0)]),
    rec(Xlpe, Copper, ThreeCore, Ducts, Unarmoured, NotApplicable, source::TABLE_B7, &[(25.0, 110.0), (35.0, 131.0), (50.0, 156.0), (70.0, 192.0), (95.0, 229.0), (120.0, 259.0), (150.0, 290.0), (185.0, 329.0), (240.0, 378.0), (300.0, 427.0)]),
    rec(Xlpe, Aluminium, ThreeCore, Ducts, Armoured, NotApplicable, source::TABLE_B7, &[(25.0, 82.0), (35.0, 98.0), (50.0, 116.0), (70.0, 143.0), (95.0, 170.0), (120.0, 193.0), (150.0, 216.0), (185.0, 245.0), (240.0, 282.0), (300.0, 318.0)]),
    rec(Xlpe, Copper, ThreeCore, Ducts, Armoured, NotApplicable, source::TABLE_B7, &[(25.0, 106.0), (35.0, 126.0), (50.0, 149.0), (70.0, 184.0), (95.0, 220.0), (120.0, 249.0), (150.0, 279.0), (185.0, 315.0), (240.0, 363.0), (300.0, 410.0)]),
    // Three-core EPR laid direct (Table B.8)
    rec(Epr, Aluminium, ThreeCore, DirectBuried, Unarmoured, NotApplicable, source::TABLE_B8, &[(25.0, 92.0), (35.0, 110.0), (50.0, 130.0), (70.0, 160.0), (95.0, 191.0), (120.0, 216.0), (150.0, 242.0), (185.0, 275.0), (240.0, 316.0), (300.0, 357.0)]),
    rec(Epr, Copper, ThreeCore, DirectBuried, Unarmoured, NotApplicable, source::TABLE_B8, &[(25.0, 119.0), (35.0, 141.0), (50.0, 168.0), (70.0, 206.0), (95.0, 247.0), (120.0, 279.0), (150.0, 313.0), (185.0, 354.0), (240.0, 408.0), (300.0, 460.0)]),
    rec(Epr, Aluminium, ThreeCore, DirectBuried, Armoured, NotApplicable, source::TABLE_B8, &[(25.0, 88.0), (35.0, 105.0), (50.0, 125.0), (70.0, 154.0), (95.0, 183.0), (120.0, 208.0), (150.0, 233.0), (185.0, 264.0), (240.0, 304.0), (300.0, 343.0)]),
    rec(Epr, Copper, ThreeCore, DirectBuried, Armoured, NotApplicable, source::TABLE_B8, &[(25.0, 114.0), (35.0, 136.0), (50.0, 161.0), (70.0, 198.0), (95.0, 237.0), (120.0, 268.0), (150.0, 300.0), (185.0, 340.0), (240.0, 392.0), (300.0, 442.0)]),
    // Three-core EPR in ducts (Table B.9)
    rec(Epr, Aluminium, ThreeCore, Ducts, Unarmoured, NotApplicable, source::TABLE_B9, &[(25.0, 83.0), (35.0, 99.0), (50.0, 117.0), (70.0, 144.0), (95.0, 172.0), (120.0, 195.0), (150.0, 218.0), (185.0, 247.0), (240.0, 285.0), (300.0, 321.0)]),
    rec(Epr, Copper, ThreeCore, Ducts, Unarmoured, NotApplicable, source::TABLE_B9, &[(25.0, 107.0), (35.0, 127.0), (50.0, 151.0), (70.0, 186.0), (95.0, 222.0), (120.0, 251.0), (150.0, 282.0), (185.0, 319.0), (240.0, 367.0), (300.0, 414.0)]),
    rec(Epr, Aluminium, ThreeCore, Ducts, Armoured, NotApplicable, source::TABLE_B9, &[(25.0, 80.0), (35.0, 95.0), (50.0, 112.0), (70.0, 138.0), (95.0, 165.0), (120.0, 187.0), (150.0, 210.0), (185.0, 237.0), (240.0, 273.0), (300.0, 308.0)]),
    rec(Epr, Copper, ThreeCore, Ducts, Armoured, NotApplicable, source::TABLE_B9, &[(25.0, 103.0), (35.0, 122.0), (50.0, 145.0), (70.0, 178.0), (95.0, 213.0), (120.0, 241.0), (150.0, 270.0), (185.0, 306.0), (240.0, 352.0), (300.0, 398.0)]),
];
