use crate::ircode::types::models::CodeRecord;

const CODE_EU000_TIMES: &[u16] = &[
    100, 100,
    100, 300,
    100, 5000,
];

const CODE_EU001_TIMES: &[u16] = &[
    56, 56,
    56, 169,
    900, 450,
    56, 4000,
];

const CODE_EU002_TIMES: &[u16] = &[
    89, 89,
    89, 178,
    178, 89,
    178, 178,
    89, 8900,
];

pub const EU_CODES: &[CodeRecord<'static>] = &[
    // Sent by keying the LED directly; skipped on export.
    CodeRecord::new(
        "code_eu000",
        0,
        6,
        2,
        CODE_EU000_TIMES,
        &[0x14, 0x60],
    ),
    CodeRecord::new(
        "code_eu001",
        38_000,
        34,
        2,
        CODE_EU001_TIMES,
        &[0x81, 0x00, 0x14, 0x55, 0x40, 0x40, 0x15, 0x15, 0x70],
    ),
    CodeRecord::new(
        "code_eu002",
        36_000,
        13,
        3,
        CODE_EU002_TIMES,
        &[0x08, 0xB0, 0x0A, 0x01, 0x98],
    ),
];
