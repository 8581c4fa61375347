// src/specs/dreisat.rs

use super::SourceSpec;

/// German umlauts, sharp s, degree and section signs at their Latin-1
/// codepoints.
static G0_DE: &[(u32, char)] = &[
    (0xdf, 'ß'),
    (0xd6, 'Ö'),
    (0xf6, 'ö'),
    (0xdc, 'Ü'),
    (0xfc, 'ü'),
    (0xc4, 'Ä'),
    (0xe4, 'ä'),
    (0xb0, '°'),
    (0xa7, '§'),
];

pub static DREISAT: SourceSpec = SourceSpec {
    name: "3sat",
    stream: "3sat",
    page_categories: &[
        (100, "index"),
        (111, "news"),
        (160, "stocks"),
        (180, "undefined"),
        (200, "sport"),
        (280, "lotto"),
        (300, "program"),
        (400, "index"),
        (401, "weather"),
        (450, "traffic"),
        (500, "culture"),
        (600, "index"),
        (601, "internal"),
    ],
    g0_overrides: G0_DE,
};
