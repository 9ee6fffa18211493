use ircode_export::ircode::database::{COLLECTIONS, EU_CODES, NA_CODES};
use ircode_export::{
    render, CodeRecord, Collection, Decoder, ExportError, ExportOptions, Exporter,
    MUTE_PLACEHOLDER, NO_CARRIER,
};

const SONY_TIMES: &[u16] = &[60, 60, 60, 2700, 120, 60, 240, 60];
const SONY_PACKED: &[u8] = &[0xE2, 0x20, 0x80, 0x78, 0x88, 0x20, 0x10];

const SONY_PATTERN: &str = "Pattern(38400 /*T=26.041667us*/, intArrayOf(\
92,23,46,23,23,23,46,23,23,23,46,23,23,23,23,23,46,23,23,23,23,23,23,23,23,1037,\
92,23,46,23,23,23,46,23,23,23,46,23,23,23,23,23,46,23,23,23,23,23,23,23,23,1037))";

fn render_with(collections: &[Collection<'_>], options: ExportOptions) -> String {
    let mut exporter = Exporter::with_options(Vec::new(), options);
    exporter.export_all(collections).expect("export ok");
    String::from_utf8(exporter.into_inner()).expect("utf-8 output")
}

fn plain_options() -> ExportOptions {
    ExportOptions {
        banner: false,
        ..ExportOptions::default()
    }
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn two_record_database_end_to_end() {
    let records = [
        CodeRecord::new("silent", NO_CARRIER, 3, 2, &[10, 10, 20, 20], &[0x12]),
        CodeRecord::new("real", 38_000, 1, 2, &[96, 24], &[0x00]),
    ];
    let collections = [Collection::new("synthetic", &records)];

    let output = render_with(&collections, plain_options());
    let expected = "    private val synthetic = Brand(
        \"synthetic\",
        arrayOf(
            Pattern(38000 /*T=26.315789us*/, intArrayOf(36,9))
        ),
        //Mute-pattern
        Pattern(0, intArrayOf(0,0))
    )

    val allBrands = arrayOf(samsung, sony, lg, panasonic, philips, nec, sharp, jvc, toshiba, mitsubishi, vizio, rca, pioneer, hisense, akai, aoc, tvBgoneEU, tvBgoneNA)

";
    assert_eq!(output, expected);
    assert_eq!(count(&output, "Pattern("), 2);
}

#[test]
fn unmodulated_records_never_appear() {
    // Same timings as the exported record, so any leak would be visible.
    let records = [
        CodeRecord::new("first", 0, 26, 2, SONY_TIMES, SONY_PACKED),
        CodeRecord::new("second", 38_400, 26, 2, SONY_TIMES, SONY_PACKED),
        CodeRecord::new("third", 0, 26, 2, SONY_TIMES, SONY_PACKED),
    ];
    let collections = [Collection::new("mixed", &records)];

    let mut exporter = Exporter::with_options(Vec::new(), plain_options());
    let summary = exporter.export_all(&collections).unwrap();
    let output = String::from_utf8(exporter.into_inner()).unwrap();

    assert_eq!(summary.exported(), 1);
    assert_eq!(summary.skipped(), 2);
    assert_eq!(count(&output, "intArrayOf(92,"), 1);
    assert!(output.contains(&format!("arrayOf(\n            {}\n        ),", SONY_PATTERN)));
    // Separator only between written records: no leading comma.
    assert!(!output.contains("arrayOf(\n,"));
}

#[test]
fn separators_only_between_written_patterns() {
    let records = [
        CodeRecord::new("a", 40_000, 1, 1, &[96, 24, 48, 24], &[0b0000_0000]),
        CodeRecord::new("skip", 0, 1, 1, &[1, 1], &[0x00]),
        CodeRecord::new("b", 40_000, 2, 1, &[96, 24, 48, 24], &[0b1000_0000]),
    ];
    let output = render_with(&[Collection::new("sep", &records)], plain_options());
    assert!(output.contains(
        "            Pattern(40000 /*T=25.000000us*/, intArrayOf(38,10)),\n            \
         Pattern(40000 /*T=25.000000us*/, intArrayOf(19,10,38,10))\n        ),"
    ));
}

#[test]
fn every_block_ends_with_one_placeholder() {
    let real = [CodeRecord::new("real", 38_400, 26, 2, SONY_TIMES, SONY_PACKED)];
    let silent = [CodeRecord::new("silent", 0, 1, 2, &[1, 1], &[0x00])];
    let collections = [
        Collection::new("none", &[]),
        Collection::new("one", &real),
        Collection::new("onlySilent", &silent),
    ];

    let output = render_with(&collections, plain_options());
    assert_eq!(count(&output, MUTE_PLACEHOLDER), collections.len());
    for block in output.split("private val ").skip(1) {
        assert_eq!(count(block, MUTE_PLACEHOLDER), 1, "block: {}", block);
        assert!(block.contains("        //Mute-pattern\n        Pattern(0, intArrayOf(0,0))\n    )\n"));
    }
}

#[test]
fn empty_record_renders_empty_pattern() {
    let records = [CodeRecord::new("empty", 38_000, 0, 2, &[96, 24], &[])];
    let mut decoder = Decoder::new();
    assert!(decoder.decode_all(&records[0]).unwrap().is_empty());

    let output = render_with(&[Collection::new("hollow", &records)], plain_options());
    assert!(output.contains("Pattern(38000 /*T=26.315789us*/, intArrayOf())\n        ),"));
    assert_eq!(count(&output, MUTE_PLACEHOLDER), 1);
}

#[test]
fn malformed_record_aborts_export() {
    let records = [CodeRecord::new("code_bad", 38_000, 1, 2, &[96, 24], &[0b1100_0000])];
    let mut exporter = Exporter::new(Vec::new());
    match exporter.export_all(&[Collection::new("broken", &records)]) {
        Err(ExportError::MalformedRecord { record, index, table_len }) => {
            assert_eq!(record, "code_bad");
            assert_eq!(index, 3);
            assert_eq!(table_len, 2);
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn short_record_aborts_export() {
    let records = [CodeRecord::new("code_short", 38_000, 9, 2, &[96, 24], &[0x00, 0x00])];
    assert!(records[0].validate().is_err());

    let err = render(&[Collection::new("broken", &records)]).unwrap_err();
    assert!(matches!(
        err,
        ExportError::UnreadableInput { record: "code_short", needed_bits: 18, available_bits: 16 }
    ));
    assert!(err.to_string().contains("code_short"));
}

#[test]
fn failed_export_writes_nothing() {
    let good = [CodeRecord::new("code_good", 38_000, 1, 2, &[96, 24], &[0x00])];
    // Second index is 3, past the single timing pair.
    let bad = [CodeRecord::new("code_bad", 38_000, 2, 2, &[96, 24], &[0b0011_0000])];
    let collections = [Collection::new("first", &good), Collection::new("second", &bad)];

    let mut out = Vec::new();
    let mut exporter = Exporter::new(&mut out);
    let err = exporter.export_all(&collections).unwrap_err();
    assert!(matches!(err, ExportError::MalformedRecord { record: "code_bad", index: 3, .. }));
    drop(exporter);

    assert!(out.is_empty(), "partial output: {}", String::from_utf8_lossy(&out));
}

#[test]
fn failed_collection_writes_nothing() {
    let records = [
        CodeRecord::new("code_good", 38_000, 1, 2, &[96, 24], &[0x00]),
        CodeRecord::new("code_short", 38_000, 9, 2, &[96, 24], &[0x00, 0x00]),
    ];
    let mut out = Vec::new();
    let mut exporter = Exporter::with_options(&mut out, plain_options());
    assert!(matches!(
        exporter.export_collection(&Collection::new("broken", &records)),
        Err(ExportError::UnreadableInput { record: "code_short", .. })
    ));
    drop(exporter);

    assert!(!String::from_utf8_lossy(&out).contains("Pattern("));
    assert!(out.is_empty());
}

#[test]
fn invalid_width_is_reported() {
    let record = CodeRecord::new("code_wide", 38_000, 1, 9, &[96, 24], &[0x00, 0x00]);
    assert!(matches!(
        record.validate(),
        Err(ExportError::InvalidFieldWidth { record: "code_wide", width: 9 })
    ));
    assert!(matches!(
        Decoder::new().decode_all(&record),
        Err(ExportError::InvalidFieldWidth { width: 9, .. })
    ));
}

#[test]
fn banner_precedes_every_block() {
    let output = render(&[Collection::new("a", &[]), Collection::new("b", &[])]).unwrap();
    assert_eq!(count(&output, "The constructor of the Pattern class requires two parameters:"), 2);
    assert!(output.starts_with("    /*\n"));
    assert!(output.contains("    */\n    private val a = Brand(\n"));
}

#[test]
fn custom_brand_index() {
    let options = ExportOptions {
        banner: false,
        brand_index: vec!["tvBgoneNA".to_string(), "tvBgoneEU".to_string()],
    };
    let output = render_with(&[], options);
    assert_eq!(output, "\n    val allBrands = arrayOf(tvBgoneNA, tvBgoneEU)\n\n");
}

#[test]
fn bundled_database_is_consistent() {
    let mut decoder = Decoder::new();
    for record in NA_CODES.iter().chain(EU_CODES) {
        record
            .validate()
            .unwrap_or_else(|e| panic!("{} invalid: {}", record.label, e));
        assert_eq!(
            record.packed_indices.len(),
            record.packed_bit_len().div_ceil(8),
            "{} has trailing bytes",
            record.label
        );
        let pairs = decoder
            .decode_all(record)
            .unwrap_or_else(|e| panic!("{} failed to decode: {}", record.label, e));
        assert_eq!(pairs.len(), record.pair_count as usize);
    }
}

#[test]
fn bundled_database_export() {
    let mut out = Vec::new();
    let summary = ircode_export::export_database(&mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    let names: Vec<&str> = summary.collections.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["tvBgoneNA", "tvBgoneEU"]);
    assert_eq!(summary.exported(), 4);
    assert_eq!(summary.skipped(), 2);

    assert_eq!(count(&output, "Pattern("), 4 + COLLECTIONS.len());
    assert_eq!(count(&output, "Pattern(0 /*"), 0);
    assert!(output.contains(SONY_PATTERN));
    assert!(output.find("private val tvBgoneNA").unwrap() < output.find("private val tvBgoneEU").unwrap());
    assert!(output.ends_with("tvBgoneEU, tvBgoneNA)\n\n"));
}
