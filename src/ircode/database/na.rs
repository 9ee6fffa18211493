use crate::ircode::types::models::CodeRecord;

const CODE_NA000_TIMES: &[u16] = &[
    60, 60,
    60, 2700,
    120, 60,
    240, 60,
];

const CODE_NA001_TIMES: &[u16] = &[
    50, 100,
    50, 200,
    50, 800,
    400, 400,
];

const CODE_NA002_TIMES: &[u16] = &[
    50, 50,
    50, 150,
    300, 300,
    50, 2000,
];

pub const NA_CODES: &[CodeRecord<'static>] = &[
    CodeRecord::new(
        "code_na000",
        38_400,
        26,
        2,
        CODE_NA000_TIMES,
        &[0xE2, 0x20, 0x80, 0x78, 0x88, 0x20, 0x10],
    ),
    CodeRecord::new(
        "code_na001",
        57_143,
        52,
        2,
        CODE_NA001_TIMES,
        &[0xD5, 0x41, 0x11, 0x00, 0x14, 0x44, 0x6D, 0x54, 0x11, 0x10, 0x01, 0x44, 0x45],
    ),
    // Sent by keying the LED directly; skipped on export.
    CodeRecord::new(
        "code_na002",
        0,
        8,
        2,
        CODE_NA002_TIMES,
        &[0x84, 0x53],
    ),
];
