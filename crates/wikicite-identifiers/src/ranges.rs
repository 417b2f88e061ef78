//! ISBN registration range table
//!
//! Mirrors the layout of the ISBN agency's range message: for each EAN prefix
//! a set of rules giving the registration group length, and for each
//! registration group a set of rules giving the registrant (publisher) length.
//!
//! Every rule is keyed on a seven digit window taken right after the part
//! already consumed, padded on the right with zeros. A length of zero marks a
//! range that is defined but not yet assigned; gaps between published
//! ranges are stored that way too.
//!
//! Groups with no registrant rules here are not known to be unassigned, so
//! hyphenation leaves such identifiers as they are.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// A single `start..=end -> length` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeRule {
    pub start: u32,
    pub end: u32,
    pub length: usize,
}

const fn r(start: u32, end: u32, length: usize) -> RangeRule {
    RangeRule { start, end, length }
}

/// Find the length assigned to `window`, if any rule covers it.
pub fn lookup(rules: &[RangeRule], window: u32) -> Option<usize> {
    rules
        .iter()
        .find(|rule| rule.start <= window && window <= rule.end)
        .map(|rule| rule.length)
}

const EAN_978: &[RangeRule] = &[
    r(0, 5999999, 1),
    r(6000000, 6499999, 3),
    r(6500000, 6599999, 2),
    r(6600000, 6999999, 0),
    r(7000000, 7999999, 1),
    r(8000000, 9499999, 2),
    r(9500000, 9899999, 3),
    r(9900000, 9989999, 4),
    r(9990000, 9999999, 5),
];

const EAN_979: &[RangeRule] = &[
    r(0, 999999, 0),
    r(1000000, 1299999, 2),
    r(1300000, 7999999, 0),
    r(8000000, 8999999, 1),
    r(9000000, 9999999, 0),
];

// English language area
const G_978_0: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 2279999, 3),
    r(2280000, 2289999, 4),
    r(2290000, 3689999, 3),
    r(3690000, 3699999, 4),
    r(3700000, 6389999, 3),
    r(6390000, 6397999, 4),
    r(6398000, 6399999, 7),
    r(6400000, 6449999, 3),
    r(6450000, 6459999, 7),
    r(6460000, 6479999, 3),
    r(6480000, 6489999, 7),
    r(6490000, 6549999, 3),
    r(6550000, 6559999, 4),
    r(6560000, 6999999, 3),
    r(7000000, 8499999, 4),
    r(8500000, 8999999, 5),
    r(9000000, 9499999, 6),
    r(9500000, 9999999, 7),
];

const G_978_1: &[RangeRule] = &[
    r(0, 999999, 2),
    r(1000000, 3999999, 3),
    r(4000000, 5499999, 4),
    r(5500000, 7319999, 5),
    r(7320000, 7399999, 7),
    r(7400000, 7749999, 5),
    r(7750000, 7753999, 7),
    r(7754000, 7763999, 5),
    r(7764000, 7764999, 7),
    r(7765000, 7769999, 5),
    r(7770000, 7782999, 7),
    r(7783000, 7899999, 5),
    r(7900000, 7999999, 4),
    r(8000000, 8671999, 5),
    r(8672000, 8675999, 4),
    r(8676000, 8697999, 5),
    r(8698000, 9159999, 6),
    r(9160000, 9165059, 7),
    r(9165060, 9168699, 6),
    r(9168700, 9169079, 7),
    r(9169080, 9195999, 6),
    r(9196000, 9196549, 7),
    r(9196550, 9729999, 6),
    r(9730000, 9877999, 4),
    r(9878000, 9989999, 6),
    r(9990000, 9999999, 7),
];

// French language area
const G_978_2: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 3499999, 3),
    r(3500000, 3999999, 5),
    r(4000000, 4899999, 3),
    r(4900000, 4949999, 6),
    r(4950000, 4959999, 3),
    r(4960000, 4966999, 4),
    r(4967000, 4969999, 5),
    r(4970000, 5279999, 3),
    r(5280000, 5299999, 4),
    r(5300000, 6999999, 3),
    r(7000000, 8399999, 4),
    r(8400000, 8999999, 5),
    r(9000000, 9197999, 6),
    r(9198000, 9198099, 5),
    r(9198100, 9199429, 6),
    r(9199430, 9199689, 7),
    r(9199690, 9499999, 6),
    r(9500000, 9999999, 7),
];

// German language area
const G_978_3: &[RangeRule] = &[
    r(0, 299999, 2),
    r(300000, 339999, 3),
    r(340000, 369999, 4),
    r(370000, 399999, 5),
    r(400000, 1999999, 2),
    r(2000000, 6999999, 3),
    r(7000000, 8499999, 4),
    r(8500000, 8999999, 5),
    r(9000000, 9499999, 6),
    r(9500000, 9539999, 7),
    r(9540000, 9699999, 5),
    r(9700000, 9849999, 7),
    r(9850000, 9999999, 5),
];

// Japan
const G_978_4: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 6999999, 3),
    r(7000000, 8499999, 4),
    r(8500000, 8999999, 5),
    r(9000000, 9499999, 6),
    r(9500000, 9999999, 7),
];

// Former USSR
const G_978_5: &[RangeRule] = &[
    r(0, 49999, 5),
    r(50000, 99999, 4),
    r(100000, 1999999, 2),
    r(2000000, 3619999, 3),
    r(3620000, 3623999, 4),
    r(3624000, 3629999, 7),
    r(3630000, 4209999, 3),
    r(4210000, 4299999, 4),
    r(4300000, 4309999, 3),
    r(4310000, 4399999, 4),
    r(4400000, 4409999, 3),
    r(4410000, 4499999, 4),
    r(4500000, 6039999, 3),
    r(6040000, 6049999, 7),
    r(6050000, 6999999, 3),
    r(7000000, 8499999, 4),
    r(8500000, 9099999, 5),
    r(9100000, 9199999, 3),
    r(9200000, 9299999, 4),
    r(9300000, 9499999, 5),
    r(9500000, 9500999, 7),
    r(9501000, 9799999, 4),
    r(9800000, 9899999, 5),
    r(9900000, 9909999, 7),
    r(9910000, 9999999, 4),
];

// Iran
const G_978_600: &[RangeRule] = &[
    r(0, 999999, 2),
    r(1000000, 4999999, 3),
    r(5000000, 8999999, 4),
    r(9000000, 9867999, 5),
    r(9868000, 9929999, 4),
    r(9930000, 9959999, 3),
    r(9960000, 9999999, 5),
];

// Kazakhstan
const G_978_601: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 6999999, 3),
    r(7000000, 7999999, 4),
    r(8000000, 8499999, 5),
    r(8500000, 9999999, 2),
];

// Indonesia
const G_978_602: &[RangeRule] = &[
    r(0, 699999, 2),
    r(700000, 1399999, 4),
    r(1400000, 1499999, 5),
    r(1500000, 1699999, 4),
    r(1700000, 1999999, 5),
    r(2000000, 4999999, 3),
    r(5000000, 5399999, 5),
    r(5400000, 5999999, 4),
    r(6000000, 6199999, 5),
    r(6200000, 6999999, 4),
    r(7000000, 7499999, 5),
    r(7500000, 9499999, 4),
    r(9500000, 9999999, 5),
];

// Saudi Arabia
const G_978_603: &[RangeRule] = &[
    r(0, 4999999, 2),
    r(5000000, 7999999, 3),
    r(8000000, 8999999, 4),
    r(9000000, 9999999, 5),
];

// Vietnam
const G_978_604: &[RangeRule] = &[
    r(0, 2999999, 1),
    r(3000000, 3999999, 3),
    r(4000000, 4699999, 2),
    r(4700000, 4979999, 3),
    r(4980000, 4999999, 4),
    r(5000000, 8999999, 2),
    r(9000000, 9799999, 3),
    r(9800000, 9999999, 4),
];

// Turkey
const G_978_605: &[RangeRule] = &[
    r(0, 299999, 2),
    r(300000, 399999, 3),
    r(400000, 599999, 2),
    r(600000, 699999, 5),
    r(700000, 999999, 2),
    r(1000000, 1999999, 3),
    r(2000000, 2399999, 4),
    r(2400000, 3999999, 3),
    r(4000000, 5999999, 4),
    r(6000000, 7499999, 5),
    r(7500000, 7999999, 4),
    r(8000000, 8999999, 5),
    r(9000000, 9999999, 4),
];

// Romania
const G_978_606: &[RangeRule] = &[
    r(0, 999999, 3),
    r(1000000, 4999999, 2),
    r(5000000, 7999999, 3),
    r(8000000, 9099999, 4),
    r(9100000, 9199999, 3),
    r(9200000, 9599999, 5),
    r(9600000, 9749999, 4),
    r(9750000, 9999999, 3),
];

// Mexico
const G_978_607: &[RangeRule] = &[
    r(0, 3999999, 2),
    r(4000000, 7499999, 3),
    r(7500000, 9499999, 4),
    r(9500000, 9999999, 5),
];

// North Macedonia
const G_978_608: &[RangeRule] = &[
    r(0, 999999, 1),
    r(1000000, 1999999, 2),
    r(2000000, 4499999, 3),
    r(4500000, 6499999, 4),
    r(6500000, 6999999, 5),
    r(7000000, 9999999, 1),
];

// Lithuania
const G_978_609: &[RangeRule] = &[
    r(0, 3999999, 2),
    r(4000000, 7999999, 3),
    r(8000000, 9499999, 4),
    r(9500000, 9999999, 5),
];

// Thailand
const G_978_611: &[RangeRule] = &[
    r(0, 9999999, 0),
];

// Peru
const G_978_612: &[RangeRule] = &[
    r(0, 2999999, 2),
    r(3000000, 3999999, 3),
    r(4000000, 4499999, 4),
    r(4500000, 4999999, 5),
    r(5000000, 9999999, 2),
];

// Mauritius
const G_978_613: &[RangeRule] = &[
    r(0, 9999999, 1),
];

// Lebanon
const G_978_614: &[RangeRule] = &[
    r(0, 3999999, 2),
    r(4000000, 7999999, 3),
    r(8000000, 9499999, 4),
    r(9500000, 9999999, 5),
];

// Hungary
const G_978_615: &[RangeRule] = &[
    r(0, 999999, 2),
    r(1000000, 4999999, 3),
    r(5000000, 7999999, 4),
    r(8000000, 8999999, 5),
    r(9000000, 9999999, 0),
];

// Thailand
const G_978_616: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 6999999, 3),
    r(7000000, 8999999, 4),
    r(9000000, 9999999, 5),
];

// Ukraine
const G_978_617: &[RangeRule] = &[
    r(0, 4999999, 2),
    r(5000000, 6999999, 3),
    r(7000000, 8999999, 4),
    r(9000000, 9999999, 5),
];

// Greece
const G_978_618: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 4999999, 3),
    r(5000000, 7999999, 4),
    r(8000000, 9999999, 5),
];

// Bulgaria
const G_978_619: &[RangeRule] = &[
    r(0, 1499999, 2),
    r(1500000, 6999999, 3),
    r(7000000, 8999999, 4),
    r(9000000, 9999999, 5),
];

// Mauritius
const G_978_620: &[RangeRule] = &[
    r(0, 9999999, 1),
];

// Philippines
const G_978_621: &[RangeRule] = &[
    r(0, 2999999, 2),
    r(3000000, 3999999, 0),
    r(4000000, 5999999, 3),
    r(6000000, 7999999, 0),
    r(8000000, 8999999, 4),
    r(9000000, 9499999, 0),
    r(9500000, 9999999, 5),
];

// Iran
const G_978_622: &[RangeRule] = &[
    r(0, 1099999, 2),
    r(1100000, 1999999, 0),
    r(2000000, 4599999, 3),
    r(4600000, 8749999, 4),
    r(8750000, 9999999, 5),
];

// Indonesia
const G_978_623: &[RangeRule] = &[
    r(0, 1099999, 2),
    r(1100000, 5249999, 3),
    r(5250000, 8799999, 4),
    r(8800000, 9999999, 5),
];

// Sri Lanka
const G_978_624: &[RangeRule] = &[
    r(0, 499999, 2),
    r(500000, 1999999, 0),
    r(2000000, 2499999, 3),
    r(2500000, 4999999, 0),
    r(5000000, 6449999, 4),
    r(6450000, 9449999, 0),
    r(9450000, 9999999, 5),
];

// Turkey
const G_978_625: &[RangeRule] = &[
    r(0, 199999, 2),
    r(200000, 3649999, 0),
    r(3650000, 4429999, 3),
    r(4430000, 4449999, 5),
    r(4450000, 4499999, 3),
    r(4500000, 5999999, 0),
    r(6000000, 7793999, 4),
    r(7794000, 7794999, 5),
    r(7795000, 8499999, 4),
    r(8500000, 9399999, 0),
    r(9400000, 9999999, 5),
];

// Taiwan
const G_978_626: &[RangeRule] = &[
    r(0, 499999, 2),
    r(500000, 2999999, 0),
    r(3000000, 4999999, 3),
    r(5000000, 6999999, 0),
    r(7000000, 7999999, 4),
    r(8000000, 9499999, 0),
    r(9500000, 9999999, 5),
];

// Pakistan
const G_978_627: &[RangeRule] = &[
    r(0, 2999999, 0),
    r(3000000, 3199999, 2),
    r(3200000, 4999999, 0),
    r(5000000, 5249999, 3),
    r(5250000, 7499999, 0),
    r(7500000, 7999999, 4),
    r(8000000, 9449999, 0),
    r(9450000, 9464999, 5),
    r(9465000, 9999999, 0),
];

// Colombia
const G_978_628: &[RangeRule] = &[
    r(0, 999999, 2),
    r(1000000, 4999999, 0),
    r(5000000, 5499999, 3),
    r(5500000, 7499999, 0),
    r(7500000, 8499999, 4),
    r(8500000, 9499999, 0),
    r(9500000, 9999999, 5),
];

// Malaysia
const G_978_629: &[RangeRule] = &[
    r(0, 299999, 2),
    r(300000, 4599999, 0),
    r(4600000, 4999999, 3),
    r(5000000, 7499999, 0),
    r(7500000, 7999999, 4),
    r(8000000, 9499999, 0),
    r(9500000, 9999999, 5),
];

// Romania
const G_978_630: &[RangeRule] = &[
    r(0, 2999999, 0),
    r(3000000, 3499999, 3),
    r(3500000, 6499999, 0),
    r(6500000, 6849999, 4),
    r(6850000, 9999999, 0),
];

// Argentina
const G_978_631: &[RangeRule] = &[
    r(0, 999999, 2),
    r(1000000, 2999999, 0),
    r(3000000, 3999999, 3),
    r(4000000, 6499999, 0),
    r(6500000, 7499999, 4),
    r(7500000, 8999999, 0),
    r(9000000, 9999999, 5),
];

// Brazil
const G_978_65: &[RangeRule] = &[
    r(0, 199999, 2),
    r(200000, 2499999, 0),
    r(2500000, 3029999, 3),
    r(3030000, 4999999, 0),
    r(5000000, 5129999, 4),
    r(5130000, 5349999, 0),
    r(5350000, 6149999, 4),
    r(6150000, 7999999, 0),
    r(8000000, 8182499, 5),
    r(8182500, 8299999, 0),
    r(8300000, 8999999, 5),
    r(9000000, 9024499, 6),
    r(9024500, 9799999, 0),
    r(9800000, 9999999, 6),
];

// China
const G_978_7: &[RangeRule] = &[
    r(0, 999999, 2),
    r(1000000, 4999999, 3),
    r(5000000, 7999999, 4),
    r(8000000, 8999999, 5),
    r(9000000, 9999999, 6),
];

// Czech Republic and Slovakia
const G_978_80: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 5299999, 3),
    r(5300000, 5499999, 5),
    r(5500000, 6899999, 3),
    r(6900000, 6999999, 5),
    r(7000000, 8499999, 4),
    r(8500000, 8999999, 5),
    r(9000000, 9989999, 6),
    r(9990000, 9999999, 5),
];

// India
const G_978_81: &[RangeRule] = &[
    r(0, 1899999, 2),
    r(1900000, 1999999, 5),
    r(2000000, 6999999, 3),
    r(7000000, 8499999, 4),
    r(8500000, 8999999, 5),
    r(9000000, 9999999, 6),
];

// Norway
const G_978_82: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 6899999, 3),
    r(6900000, 6999999, 6),
    r(7000000, 8999999, 4),
    r(9000000, 9899999, 5),
    r(9900000, 9999999, 6),
];

// Poland
const G_978_83: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 5999999, 3),
    r(6000000, 6999999, 5),
    r(7000000, 8499999, 4),
    r(8500000, 8999999, 5),
    r(9000000, 9999999, 6),
];

// Spain
const G_978_84: &[RangeRule] = &[
    r(0, 999999, 2),
    r(1000000, 1049999, 5),
    r(1050000, 1199999, 4),
    r(1200000, 1299999, 6),
    r(1300000, 1399999, 4),
    r(1400000, 1499999, 3),
    r(1500000, 1999999, 5),
    r(2000000, 6999999, 3),
    r(7000000, 8499999, 4),
    r(8500000, 8999999, 5),
    r(9000000, 9199999, 4),
    r(9200000, 9239999, 6),
    r(9240000, 9299999, 5),
    r(9300000, 9499999, 6),
    r(9500000, 9699999, 5),
    r(9700000, 9999999, 4),
];

// Brazil
const G_978_85: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 4549999, 3),
    r(4550000, 4552999, 6),
    r(4553000, 4559999, 5),
    r(4560000, 5289999, 3),
    r(5290000, 5319999, 5),
    r(5320000, 5339999, 4),
    r(5340000, 5399999, 3),
    r(5400000, 5403999, 5),
    r(5404000, 5404999, 6),
    r(5405000, 5408999, 5),
    r(5409000, 5409999, 6),
    r(5410000, 5439999, 5),
    r(5440000, 5479999, 4),
    r(5480000, 5499999, 5),
    r(5500000, 5999999, 4),
    r(6000000, 6999999, 5),
    r(7000000, 8499999, 4),
    r(8500000, 8999999, 5),
    r(9000000, 9249999, 6),
    r(9250000, 9449999, 5),
    r(9450000, 9599999, 4),
    r(9600000, 9799999, 2),
    r(9800000, 9999999, 5),
];

// Former Yugoslavia
const G_978_86: &[RangeRule] = &[
    r(0, 2999999, 2),
    r(3000000, 5999999, 3),
    r(6000000, 7999999, 4),
    r(8000000, 8999999, 5),
    r(9000000, 9999999, 6),
];

// Denmark
const G_978_87: &[RangeRule] = &[
    r(0, 2999999, 2),
    r(3000000, 3999999, 0),
    r(4000000, 6499999, 3),
    r(6500000, 6999999, 0),
    r(7000000, 7999999, 4),
    r(8000000, 8499999, 0),
    r(8500000, 9499999, 5),
    r(9500000, 9699999, 0),
    r(9700000, 9999999, 6),
];

// Italy
const G_978_88: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 3119999, 3),
    r(3120000, 3149999, 5),
    r(3150000, 3184999, 6),
    r(3185000, 3269999, 5),
    r(3270000, 3389999, 3),
    r(3390000, 3609999, 4),
    r(3610000, 3629999, 6),
    r(3630000, 5489999, 3),
    r(5490000, 5549999, 4),
    r(5550000, 5999999, 3),
    r(6000000, 8499999, 4),
    r(8500000, 8999999, 5),
    r(9000000, 9099999, 6),
    r(9100000, 9269999, 3),
    r(9270000, 9399999, 4),
    r(9400000, 9479999, 6),
    r(9480000, 9999999, 5),
];

// Korea
const G_978_89: &[RangeRule] = &[
    r(0, 2499999, 2),
    r(2500000, 5499999, 3),
    r(5500000, 8499999, 4),
    r(8500000, 9499999, 5),
    r(9500000, 9699999, 6),
    r(9700000, 9899999, 5),
    r(9900000, 9999999, 3),
];

// Netherlands, Belgium (Flemish)
const G_978_90: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 4999999, 3),
    r(5000000, 6999999, 4),
    r(7000000, 7999999, 5),
    r(8000000, 8499999, 6),
    r(8500000, 8999999, 4),
    r(9000000, 9099999, 2),
    r(9100000, 9399999, 0),
    r(9400000, 9499999, 2),
    r(9500000, 9999999, 0),
];

// Sweden
const G_978_91: &[RangeRule] = &[
    r(0, 999999, 1),
    r(1000000, 1999999, 0),
    r(2000000, 4999999, 2),
    r(5000000, 6499999, 3),
    r(6500000, 6999999, 0),
    r(7000000, 8199999, 4),
    r(8200000, 8499999, 0),
    r(8500000, 9499999, 5),
    r(9500000, 9699999, 0),
    r(9700000, 9999999, 6),
];

// International NGO publishers and EU organizations
const G_978_92: &[RangeRule] = &[
    r(0, 5999999, 1),
    r(6000000, 7999999, 2),
    r(8000000, 8999999, 3),
    r(9000000, 9499999, 4),
    r(9500000, 9899999, 5),
    r(9900000, 9999999, 6),
];

// India
const G_978_93: &[RangeRule] = &[
    r(0, 999999, 2),
    r(1000000, 4999999, 3),
    r(5000000, 7999999, 4),
    r(8000000, 9599999, 5),
    r(9600000, 9999999, 6),
];

// Netherlands
const G_978_94: &[RangeRule] = &[
    r(0, 5999999, 3),
    r(6000000, 8999999, 4),
    r(9000000, 9999999, 5),
];

// Argentina
const G_978_950: &[RangeRule] = &[
    r(0, 4999999, 2),
    r(5000000, 8999999, 3),
    r(9000000, 9899999, 4),
    r(9900000, 9999999, 5),
];

// Finland
const G_978_951: &[RangeRule] = &[
    r(0, 1999999, 1),
    r(2000000, 5499999, 2),
    r(5500000, 8899999, 3),
    r(8900000, 9499999, 4),
    r(9500000, 9999999, 5),
];

// Finland
const G_978_952: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 4999999, 3),
    r(5000000, 5999999, 4),
    r(6000000, 6599999, 2),
    r(6600000, 6699999, 4),
    r(6700000, 6999999, 5),
    r(7000000, 7999999, 4),
    r(8000000, 9499999, 2),
    r(9500000, 9899999, 4),
    r(9900000, 9999999, 5),
];

// Croatia
const G_978_953: &[RangeRule] = &[
    r(0, 999999, 1),
    r(1000000, 1499999, 2),
    r(1500000, 4799999, 3),
    r(4800000, 4999999, 5),
    r(5000000, 5009999, 3),
    r(5010000, 5099999, 5),
    r(5100000, 5499999, 2),
    r(5500000, 5999999, 5),
    r(6000000, 9499999, 4),
    r(9500000, 9999999, 5),
];

// Bulgaria
const G_978_954: &[RangeRule] = &[
    r(0, 2899999, 2),
    r(2900000, 2999999, 4),
    r(3000000, 7999999, 3),
    r(8000000, 8999999, 4),
    r(9000000, 9299999, 5),
    r(9300000, 9999999, 4),
];

// Sri Lanka
const G_978_955: &[RangeRule] = &[
    r(0, 1999999, 4),
    r(2000000, 3399999, 2),
    r(3400000, 3549999, 4),
    r(3550000, 3599999, 5),
    r(3600000, 3799999, 4),
    r(3800000, 3899999, 5),
    r(3900000, 4099999, 4),
    r(4100000, 4499999, 5),
    r(4500000, 4999999, 4),
    r(5000000, 5499999, 5),
    r(5500000, 7109999, 3),
    r(7110000, 7149999, 5),
    r(7150000, 9499999, 4),
    r(9500000, 9999999, 5),
];

// Chile
const G_978_956: &[RangeRule] = &[
    r(0, 899999, 2),
    r(900000, 999999, 5),
    r(1000000, 1999999, 2),
    r(2000000, 5999999, 3),
    r(6000000, 9999999, 4),
];

// Taiwan
const G_978_957: &[RangeRule] = &[
    r(0, 299999, 2),
    r(300000, 499999, 4),
    r(500000, 1999999, 2),
    r(2000000, 2099999, 4),
    r(2100000, 2799999, 2),
    r(2800000, 3099999, 5),
    r(3100000, 4399999, 2),
    r(4400000, 8199999, 3),
    r(8200000, 9699999, 4),
    r(9700000, 9999999, 5),
];

// Colombia
const G_978_958: &[RangeRule] = &[
    r(0, 4999999, 2),
    r(5000000, 5099999, 3),
    r(5100000, 5199999, 4),
    r(5200000, 5399999, 5),
    r(5400000, 5599999, 4),
    r(5600000, 5999999, 5),
    r(6000000, 7999999, 3),
    r(8000000, 9499999, 4),
    r(9500000, 9999999, 5),
];

// Cuba
const G_978_959: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 6999999, 3),
    r(7000000, 8499999, 4),
    r(8500000, 9999999, 5),
];

// Greece
const G_978_960: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 6599999, 3),
    r(6600000, 6899999, 4),
    r(6900000, 6999999, 3),
    r(7000000, 8499999, 4),
    r(8500000, 9299999, 5),
    r(9300000, 9399999, 2),
    r(9400000, 9799999, 4),
    r(9800000, 9999999, 5),
];

// Slovenia
const G_978_961: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 5999999, 3),
    r(6000000, 8999999, 4),
    r(9000000, 9799999, 5),
    r(9800000, 9999999, 0),
];

// Hong Kong
const G_978_962: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 6999999, 3),
    r(7000000, 8499999, 4),
    r(8500000, 8699999, 5),
    r(8700000, 8999999, 4),
    r(9000000, 9999999, 3),
];

// Hungary
const G_978_963: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 6999999, 3),
    r(7000000, 8499999, 4),
    r(8500000, 8999999, 5),
    r(9000000, 9999999, 4),
];

// Iran
const G_978_964: &[RangeRule] = &[
    r(0, 1499999, 2),
    r(1500000, 2499999, 3),
    r(2500000, 2999999, 4),
    r(3000000, 5499999, 3),
    r(5500000, 8999999, 4),
    r(9000000, 9699999, 5),
    r(9700000, 9899999, 3),
    r(9900000, 9999999, 4),
];

// Israel
const G_978_965: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 5999999, 3),
    r(6000000, 6999999, 0),
    r(7000000, 7999999, 4),
    r(8000000, 8999999, 0),
    r(9000000, 9999999, 5),
];

// Ukraine
const G_978_966: &[RangeRule] = &[
    r(0, 1299999, 2),
    r(1300000, 1399999, 3),
    r(1400000, 1499999, 2),
    r(1500000, 1699999, 4),
    r(1700000, 1999999, 3),
    r(2000000, 2789999, 4),
    r(2790000, 2899999, 3),
    r(2900000, 2999999, 4),
    r(3000000, 6999999, 3),
    r(7000000, 8999999, 4),
    r(9000000, 9099999, 5),
    r(9100000, 9499999, 3),
    r(9500000, 9799999, 5),
    r(9800000, 9999999, 3),
];

// Malaysia
const G_978_967: &[RangeRule] = &[
    r(0, 99999, 2),
    r(100000, 999999, 4),
    r(1000000, 1999999, 5),
    r(2000000, 2499999, 4),
    r(2500000, 2549999, 3),
    r(2550000, 2999999, 4),
    r(3000000, 4999999, 3),
    r(5000000, 5999999, 4),
    r(6000000, 8999999, 2),
    r(9000000, 9899999, 3),
    r(9900000, 9989999, 4),
    r(9990000, 9999999, 5),
];

// Mexico
const G_978_968: &[RangeRule] = &[
    r(0, 99999, 0),
    r(100000, 3999999, 2),
    r(4000000, 4999999, 3),
    r(5000000, 7999999, 4),
    r(8000000, 8999999, 3),
    r(9000000, 9999999, 4),
];

// Pakistan
const G_978_969: &[RangeRule] = &[
    r(0, 1999999, 1),
    r(2000000, 2099999, 2),
    r(2100000, 2199999, 5),
    r(2200000, 3999999, 2),
    r(4000000, 7499999, 3),
    r(7500000, 9999999, 4),
];

// Mexico
const G_978_970: &[RangeRule] = &[
    r(0, 99999, 0),
    r(100000, 5999999, 2),
    r(6000000, 8999999, 3),
    r(9000000, 9099999, 4),
    r(9100000, 9699999, 5),
    r(9700000, 9999999, 4),
];

// Philippines
const G_978_971: &[RangeRule] = &[
    r(0, 159999, 3),
    r(160000, 199999, 4),
    r(200000, 299999, 2),
    r(300000, 599999, 4),
    r(600000, 4999999, 2),
    r(5000000, 8499999, 3),
    r(8500000, 9099999, 4),
    r(9100000, 9599999, 5),
    r(9600000, 9699999, 4),
    r(9700000, 9899999, 2),
    r(9900000, 9999999, 4),
];

// Portugal
const G_978_972: &[RangeRule] = &[
    r(0, 1999999, 1),
    r(2000000, 5499999, 2),
    r(5500000, 7999999, 3),
    r(8000000, 9499999, 4),
    r(9500000, 9999999, 5),
];

// Romania
const G_978_973: &[RangeRule] = &[
    r(0, 999999, 1),
    r(1000000, 1699999, 3),
    r(1700000, 1999999, 4),
    r(2000000, 5499999, 2),
    r(5500000, 7599999, 3),
    r(7600000, 8499999, 4),
    r(8500000, 8899999, 5),
    r(8900000, 9499999, 4),
    r(9500000, 9999999, 5),
];

// Thailand
const G_978_974: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 6999999, 3),
    r(7000000, 8499999, 4),
    r(8500000, 9499999, 5),
    r(9500000, 9999999, 4),
];

// Turkey
const G_978_975: &[RangeRule] = &[
    r(0, 199999, 5),
    r(200000, 2499999, 2),
    r(2500000, 5999999, 3),
    r(6000000, 9199999, 4),
    r(9200000, 9899999, 5),
    r(9900000, 9999999, 3),
];

// Caribbean Community
const G_978_976: &[RangeRule] = &[
    r(0, 3999999, 1),
    r(4000000, 5999999, 2),
    r(6000000, 7999999, 3),
    r(8000000, 9499999, 4),
    r(9500000, 9999999, 5),
];

// Egypt
const G_978_977: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 4999999, 3),
    r(5000000, 6999999, 4),
    r(7000000, 8499999, 3),
    r(8500000, 8899999, 5),
    r(8900000, 9899999, 2),
    r(9900000, 9999999, 3),
];

// Nigeria
const G_978_978: &[RangeRule] = &[
    r(0, 1999999, 3),
    r(2000000, 2999999, 4),
    r(3000000, 7999999, 5),
    r(8000000, 8999999, 4),
    r(9000000, 9999999, 3),
];

// Indonesia
const G_978_979: &[RangeRule] = &[
    r(0, 999999, 3),
    r(1000000, 1499999, 4),
    r(1500000, 1999999, 5),
    r(2000000, 2999999, 2),
    r(3000000, 3999999, 4),
    r(4000000, 7999999, 3),
    r(8000000, 9499999, 4),
    r(9500000, 9999999, 5),
];

// Venezuela
const G_978_980: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 5999999, 3),
    r(6000000, 9999999, 4),
];

// Singapore
const G_978_981: &[RangeRule] = &[
    r(0, 1699999, 2),
    r(1700000, 1799999, 5),
    r(1800000, 1999999, 2),
    r(2000000, 2999999, 3),
    r(3000000, 3099999, 4),
    r(3100000, 3999999, 3),
    r(4000000, 9999999, 4),
];

// South Pacific
const G_978_982: &[RangeRule] = &[
    r(0, 999999, 2),
    r(1000000, 6999999, 3),
    r(7000000, 8999999, 2),
    r(9000000, 9799999, 4),
    r(9800000, 9999999, 5),
];

// Malaysia
const G_978_983: &[RangeRule] = &[
    r(0, 199999, 2),
    r(200000, 1999999, 3),
    r(2000000, 3999999, 4),
    r(4000000, 4499999, 5),
    r(4500000, 7999999, 2),
    r(8000000, 8999999, 3),
    r(9000000, 9899999, 4),
    r(9900000, 9999999, 5),
];

// Bangladesh
const G_978_984: &[RangeRule] = &[
    r(0, 3999999, 2),
    r(4000000, 7999999, 3),
    r(8000000, 8999999, 4),
    r(9000000, 9999999, 5),
];

// Belarus
const G_978_985: &[RangeRule] = &[
    r(0, 3999999, 2),
    r(4000000, 5999999, 3),
    r(6000000, 8799999, 4),
    r(8800000, 8999999, 3),
    r(9000000, 9999999, 5),
];

// Taiwan
const G_978_986: &[RangeRule] = &[
    r(0, 599999, 2),
    r(600000, 699999, 5),
    r(700000, 799999, 4),
    r(800000, 1199999, 2),
    r(1200000, 5399999, 3),
    r(5400000, 7999999, 4),
    r(8000000, 9999999, 5),
];

// Argentina
const G_978_987: &[RangeRule] = &[
    r(0, 999999, 2),
    r(1000000, 1999999, 4),
    r(2000000, 2999999, 5),
    r(3000000, 3599999, 2),
    r(3600000, 4199999, 4),
    r(4200000, 4399999, 2),
    r(4400000, 4499999, 4),
    r(4500000, 4899999, 5),
    r(4900000, 4999999, 4),
    r(5000000, 8299999, 3),
    r(8300000, 8499999, 4),
    r(8500000, 8899999, 2),
    r(8900000, 9499999, 4),
    r(9500000, 9999999, 5),
];

// Hong Kong
const G_978_988: &[RangeRule] = &[
    r(0, 1199999, 2),
    r(1200000, 1999999, 5),
    r(2000000, 6999999, 3),
    r(7000000, 7999999, 5),
    r(8000000, 9699999, 4),
    r(9700000, 9999999, 5),
];

// Portugal
const G_978_989: &[RangeRule] = &[
    r(0, 1999999, 1),
    r(2000000, 3499999, 2),
    r(3500000, 3699999, 5),
    r(3700000, 5299999, 2),
    r(5300000, 5499999, 5),
    r(5500000, 7999999, 3),
    r(8000000, 9499999, 4),
    r(9500000, 9999999, 5),
];

// Lebanon
const G_978_9953: &[RangeRule] = &[
    r(0, 999999, 1),
    r(1000000, 3999999, 2),
    r(4000000, 5999999, 3),
    r(6000000, 8999999, 2),
    r(9000000, 9999999, 4),
];

// Lithuania
const G_978_9955: &[RangeRule] = &[
    r(0, 3999999, 2),
    r(4000000, 9299999, 3),
    r(9300000, 9999999, 4),
];

// Jordan
const G_978_9957: &[RangeRule] = &[
    r(0, 3999999, 2),
    r(4000000, 6499999, 3),
    r(6500000, 6799999, 2),
    r(6800000, 6999999, 3),
    r(7000000, 8499999, 2),
    r(8500000, 8799999, 4),
    r(8800000, 9999999, 2),
];

// Algeria
const G_978_9961: &[RangeRule] = &[
    r(0, 2999999, 1),
    r(3000000, 6999999, 2),
    r(7000000, 9499999, 3),
    r(9500000, 9999999, 4),
];

// Cyprus
const G_978_9963: &[RangeRule] = &[
    r(0, 1999999, 1),
    r(2000000, 2499999, 4),
    r(2500000, 2799999, 3),
    r(2800000, 2999999, 4),
    r(3000000, 5499999, 2),
    r(5500000, 7349999, 3),
    r(7350000, 9999999, 4),
];

// Kazakhstan
const G_978_9965: &[RangeRule] = &[
    r(0, 3999999, 2),
    r(4000000, 8999999, 3),
    r(9000000, 9999999, 4),
];

// Kenya
const G_978_9966: &[RangeRule] = &[
    r(0, 1399999, 3),
    r(1400000, 1499999, 2),
    r(1500000, 1999999, 4),
    r(2000000, 6999999, 2),
    r(7000000, 7499999, 4),
    r(7500000, 8209999, 3),
    r(8210000, 8249999, 4),
    r(8250000, 8259999, 3),
    r(8260000, 8289999, 4),
    r(8290000, 9599999, 3),
    r(9600000, 9999999, 4),
];

// Kyrgyz Republic
const G_978_9967: &[RangeRule] = &[
    r(0, 3999999, 2),
    r(4000000, 8999999, 3),
    r(9000000, 9999999, 4),
];

// Singapore
const G_978_9971: &[RangeRule] = &[
    r(0, 5999999, 1),
    r(6000000, 8999999, 2),
    r(9000000, 9899999, 3),
    r(9900000, 9999999, 4),
];

// Peru
const G_978_9972: &[RangeRule] = &[
    r(0, 999999, 2),
    r(1000000, 1999999, 1),
    r(2000000, 2499999, 3),
    r(2500000, 2999999, 4),
    r(3000000, 5999999, 2),
    r(6000000, 8999999, 3),
    r(9000000, 9999999, 4),
];

// Tunisia
const G_978_9973: &[RangeRule] = &[
    r(0, 599999, 2),
    r(600000, 899999, 3),
    r(900000, 999999, 4),
    r(1000000, 6999999, 2),
    r(7000000, 9699999, 3),
    r(9700000, 9999999, 4),
];

// Uruguay
const G_978_9974: &[RangeRule] = &[
    r(0, 2999999, 1),
    r(3000000, 5499999, 2),
    r(5500000, 7499999, 3),
    r(7500000, 9499999, 4),
    r(9500000, 9999999, 2),
];

// Tanzania
const G_978_9976: &[RangeRule] = &[
    r(0, 4999999, 1),
    r(5000000, 5899999, 4),
    r(5900000, 8999999, 2),
    r(9000000, 9899999, 3),
    r(9900000, 9989999, 0),
    r(9990000, 9999999, 4),
];

// Costa Rica
const G_978_9977: &[RangeRule] = &[
    r(0, 8999999, 2),
    r(9000000, 9899999, 3),
    r(9900000, 9999999, 4),
];

// Ecuador
const G_978_9978: &[RangeRule] = &[
    r(0, 2999999, 2),
    r(3000000, 3999999, 3),
    r(4000000, 9499999, 2),
    r(9500000, 9899999, 3),
    r(9900000, 9999999, 4),
];

// Iceland
const G_978_9979: &[RangeRule] = &[
    r(0, 4999999, 1),
    r(5000000, 6499999, 2),
    r(6500000, 6599999, 3),
    r(6600000, 7599999, 2),
    r(7600000, 8999999, 3),
    r(9000000, 9999999, 4),
];

// Papua New Guinea
const G_978_9980: &[RangeRule] = &[
    r(0, 3999999, 1),
    r(4000000, 8999999, 2),
    r(9000000, 9899999, 3),
    r(9900000, 9999999, 4),
];

// Morocco
const G_978_9981: &[RangeRule] = &[
    r(0, 999999, 2),
    r(1000000, 1599999, 3),
    r(1600000, 1999999, 4),
    r(2000000, 7999999, 2),
    r(8000000, 9499999, 3),
    r(9500000, 9999999, 4),
];

// Zambia
const G_978_9982: &[RangeRule] = &[
    r(0, 7999999, 2),
    r(8000000, 9889999, 3),
    r(9890000, 9999999, 4),
];

// Gambia
const G_978_9983: &[RangeRule] = &[
    r(0, 7999999, 0),
    r(8000000, 9499999, 2),
    r(9500000, 9899999, 3),
    r(9900000, 9999999, 4),
];

// Latvia
const G_978_9984: &[RangeRule] = &[
    r(0, 4999999, 2),
    r(5000000, 8999999, 3),
    r(9000000, 9999999, 4),
];

// Estonia
const G_978_9985: &[RangeRule] = &[
    r(0, 4999999, 1),
    r(5000000, 7999999, 2),
    r(8000000, 8999999, 3),
    r(9000000, 9999999, 4),
];

// Lithuania
const G_978_9986: &[RangeRule] = &[
    r(0, 3999999, 2),
    r(4000000, 8999999, 3),
    r(9000000, 9399999, 4),
    r(9400000, 9699999, 3),
    r(9700000, 9999999, 2),
];

// Tanzania
const G_978_9987: &[RangeRule] = &[
    r(0, 3999999, 2),
    r(4000000, 8799999, 3),
    r(8800000, 9999999, 4),
];

// Ghana
const G_978_9988: &[RangeRule] = &[
    r(0, 3999999, 1),
    r(4000000, 5499999, 2),
    r(5500000, 7499999, 3),
    r(7500000, 9999999, 4),
];

// North Macedonia
const G_978_9989: &[RangeRule] = &[
    r(0, 999999, 1),
    r(1000000, 1999999, 3),
    r(2000000, 2999999, 4),
    r(3000000, 5999999, 2),
    r(6000000, 9499999, 3),
    r(9500000, 9999999, 4),
];

// France
const G_979_10: &[RangeRule] = &[
    r(0, 1999999, 2),
    r(2000000, 6999999, 3),
    r(7000000, 8999999, 4),
    r(9000000, 9759999, 5),
    r(9760000, 9999999, 6),
];

// Korea
const G_979_11: &[RangeRule] = &[
    r(0, 2499999, 2),
    r(2500000, 5499999, 3),
    r(5500000, 8499999, 4),
    r(8500000, 9499999, 5),
    r(9500000, 9999999, 6),
];

// Italy
const G_979_12: &[RangeRule] = &[
    r(0, 1999999, 0),
    r(2000000, 2999999, 3),
    r(3000000, 5449999, 0),
    r(5450000, 5999999, 4),
    r(6000000, 7999999, 0),
    r(8000000, 8499999, 5),
    r(8500000, 9849999, 0),
    r(9850000, 9999999, 6),
];

// United States
const G_979_8: &[RangeRule] = &[
    r(0, 1999999, 0),
    r(2000000, 2299999, 3),
    r(2300000, 3499999, 0),
    r(3500000, 8499999, 4),
    r(8500000, 8849999, 5),
    r(8850000, 8999999, 6),
    r(9000000, 9849999, 0),
    r(9850000, 9899999, 7),
    r(9900000, 9999999, 0),
];

lazy_static! {
    /// Registration group length rules keyed by EAN prefix.
    static ref PREFIXES: HashMap<&'static str, &'static [RangeRule]> = {
        let mut m = HashMap::new();
        m.insert("978", EAN_978);
        m.insert("979", EAN_979);
        m
    };

    /// Registrant length rules keyed by `<prefix>-<group>`.
    static ref GROUPS: HashMap<&'static str, &'static [RangeRule]> = {
        let mut m = HashMap::new();
        m.insert("978-0", G_978_0);
        m.insert("978-1", G_978_1);
        m.insert("978-2", G_978_2);
        m.insert("978-3", G_978_3);
        m.insert("978-4", G_978_4);
        m.insert("978-5", G_978_5);
        m.insert("978-600", G_978_600);
        m.insert("978-601", G_978_601);
        m.insert("978-602", G_978_602);
        m.insert("978-603", G_978_603);
        m.insert("978-604", G_978_604);
        m.insert("978-605", G_978_605);
        m.insert("978-606", G_978_606);
        m.insert("978-607", G_978_607);
        m.insert("978-608", G_978_608);
        m.insert("978-609", G_978_609);
        m.insert("978-611", G_978_611);
        m.insert("978-612", G_978_612);
        m.insert("978-613", G_978_613);
        m.insert("978-614", G_978_614);
        m.insert("978-615", G_978_615);
        m.insert("978-616", G_978_616);
        m.insert("978-617", G_978_617);
        m.insert("978-618", G_978_618);
        m.insert("978-619", G_978_619);
        m.insert("978-620", G_978_620);
        m.insert("978-621", G_978_621);
        m.insert("978-622", G_978_622);
        m.insert("978-623", G_978_623);
        m.insert("978-624", G_978_624);
        m.insert("978-625", G_978_625);
        m.insert("978-626", G_978_626);
        m.insert("978-627", G_978_627);
        m.insert("978-628", G_978_628);
        m.insert("978-629", G_978_629);
        m.insert("978-630", G_978_630);
        m.insert("978-631", G_978_631);
        m.insert("978-65", G_978_65);
        m.insert("978-7", G_978_7);
        m.insert("978-80", G_978_80);
        m.insert("978-81", G_978_81);
        m.insert("978-82", G_978_82);
        m.insert("978-83", G_978_83);
        m.insert("978-84", G_978_84);
        m.insert("978-85", G_978_85);
        m.insert("978-86", G_978_86);
        m.insert("978-87", G_978_87);
        m.insert("978-88", G_978_88);
        m.insert("978-89", G_978_89);
        m.insert("978-90", G_978_90);
        m.insert("978-91", G_978_91);
        m.insert("978-92", G_978_92);
        m.insert("978-93", G_978_93);
        m.insert("978-94", G_978_94);
        m.insert("978-950", G_978_950);
        m.insert("978-951", G_978_951);
        m.insert("978-952", G_978_952);
        m.insert("978-953", G_978_953);
        m.insert("978-954", G_978_954);
        m.insert("978-955", G_978_955);
        m.insert("978-956", G_978_956);
        m.insert("978-957", G_978_957);
        m.insert("978-958", G_978_958);
        m.insert("978-959", G_978_959);
        m.insert("978-960", G_978_960);
        m.insert("978-961", G_978_961);
        m.insert("978-962", G_978_962);
        m.insert("978-963", G_978_963);
        m.insert("978-964", G_978_964);
        m.insert("978-965", G_978_965);
        m.insert("978-966", G_978_966);
        m.insert("978-967", G_978_967);
        m.insert("978-968", G_978_968);
        m.insert("978-969", G_978_969);
        m.insert("978-970", G_978_970);
        m.insert("978-971", G_978_971);
        m.insert("978-972", G_978_972);
        m.insert("978-973", G_978_973);
        m.insert("978-974", G_978_974);
        m.insert("978-975", G_978_975);
        m.insert("978-976", G_978_976);
        m.insert("978-977", G_978_977);
        m.insert("978-978", G_978_978);
        m.insert("978-979", G_978_979);
        m.insert("978-980", G_978_980);
        m.insert("978-981", G_978_981);
        m.insert("978-982", G_978_982);
        m.insert("978-983", G_978_983);
        m.insert("978-984", G_978_984);
        m.insert("978-985", G_978_985);
        m.insert("978-986", G_978_986);
        m.insert("978-987", G_978_987);
        m.insert("978-988", G_978_988);
        m.insert("978-989", G_978_989);
        m.insert("978-9953", G_978_9953);
        m.insert("978-9955", G_978_9955);
        m.insert("978-9957", G_978_9957);
        m.insert("978-9961", G_978_9961);
        m.insert("978-9963", G_978_9963);
        m.insert("978-9965", G_978_9965);
        m.insert("978-9966", G_978_9966);
        m.insert("978-9967", G_978_9967);
        m.insert("978-9971", G_978_9971);
        m.insert("978-9972", G_978_9972);
        m.insert("978-9973", G_978_9973);
        m.insert("978-9974", G_978_9974);
        m.insert("978-9976", G_978_9976);
        m.insert("978-9977", G_978_9977);
        m.insert("978-9978", G_978_9978);
        m.insert("978-9979", G_978_9979);
        m.insert("978-9980", G_978_9980);
        m.insert("978-9981", G_978_9981);
        m.insert("978-9982", G_978_9982);
        m.insert("978-9983", G_978_9983);
        m.insert("978-9984", G_978_9984);
        m.insert("978-9985", G_978_9985);
        m.insert("978-9986", G_978_9986);
        m.insert("978-9987", G_978_9987);
        m.insert("978-9988", G_978_9988);
        m.insert("978-9989", G_978_9989);
        m.insert("979-10", G_979_10);
        m.insert("979-11", G_979_11);
        m.insert("979-12", G_979_12);
        m.insert("979-8", G_979_8);
        m
    };
}

/// Registration group rules for an EAN prefix (`"978"` or `"979"`).
pub fn prefix_rules(prefix: &str) -> Option<&'static [RangeRule]> {
    PREFIXES.get(prefix).copied()
}

/// Registrant rules for a registration group such as `"978-0"`.
pub fn group_rules(group: &str) -> Option<&'static [RangeRule]> {
    GROUPS.get(group).copied()
}

/// Every registration group with registrant rules, unordered.
pub fn groups() -> impl Iterator<Item = &'static str> {
    GROUPS.keys().copied()
}
