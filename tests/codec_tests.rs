/// Grammar tests for the DWGSIM read-name codec.
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use dwgeval::dwgsim::DwgsimRead;
use dwgeval::errors::EvalError;

#[test]
fn decode_rejects_a_name_missing_the_pair_id() {
    let result = DwgsimRead::from_qname("chr1_100_300_0_1_0_0_1:0:0_2:1:1");
    assert!(matches!(result, Err(EvalError::MalformedReadName { .. })));
}

#[test]
fn decode_rejects_wrong_delimiters() {
    // Commas instead of colons in the mutation counts.
    let result = DwgsimRead::from_qname("chr1_100_300_0_1_0_0_1,0,0_2,1,1_abc");
    assert!(matches!(result, Err(EvalError::MalformedReadName { .. })));
}

#[test]
fn decode_rejects_non_numeric_positions() {
    let result = DwgsimRead::from_qname("chr1_abc_300_0_1_0_0_1:0:0_2:1:1_xyz");
    assert!(matches!(result, Err(EvalError::MalformedReadName { .. })));
}

#[test]
fn decode_rejects_the_empty_string_and_plain_names() {
    assert!(DwgsimRead::from_qname("").is_err());
    assert!(DwgsimRead::from_qname("read1").is_err());
    assert!(DwgsimRead::from_qname("HWI-ST1276:71:C1162ACXX:1:1101").is_err());
}

#[test]
fn decode_rejects_trailing_garbage() {
    assert!(DwgsimRead::from_qname("chr1_100_300_0_1_0_0_1:0:0_2:1:1_abc/extra").is_err());
}

#[test]
fn encode_then_decode_reproduces_a_known_read() {
    let read = DwgsimRead {
        seqname: "scaffold_12-b".to_string(),
        start_1: 48_213,
        start_2: 48_611,
        strand_1: 1,
        strand_2: 0,
        random_read_1: 3,
        random_read_2: 99,
        nerrors_1: 1,
        nsnps_1: 0,
        nindels_1: 0,
        nerrors_2: 2,
        nsnps_2: 1,
        nindels_2: 1,
        pair_id: "f3a".to_string(),
    };
    let encoded = read.to_string();
    assert_eq!(
        encoded,
        "scaffold_12-b_48213_48611_1_0_3_99_1:0:0_2:1:1_f3a"
    );
    assert_eq!(DwgsimRead::from_qname(&encoded).unwrap(), read);
}

#[test]
fn round_trip_holds_for_arbitrary_field_values() {
    proptest!(|(
        seqname in "[A-Za-z][A-Za-z0-9_-]{0,20}",
        start_1 in 0u64..1_000_000_000,
        start_2 in 0u64..1_000_000_000,
        strand_1 in 0u8..=1,
        strand_2 in 0u8..=1,
        random_read_1 in 0u64..1_000_000,
        random_read_2 in 0u64..1_000_000,
        counts in prop::array::uniform6(0u32..100),
        pair_id in "[A-Za-z0-9]{1,8}",
    )| {
        let read = DwgsimRead {
            seqname,
            start_1,
            start_2,
            strand_1,
            strand_2,
            random_read_1,
            random_read_2,
            nerrors_1: counts[0],
            nsnps_1: counts[1],
            nindels_1: counts[2],
            nerrors_2: counts[3],
            nsnps_2: counts[4],
            nindels_2: counts[5],
            pair_id,
        };
        let decoded = DwgsimRead::from_qname(&read.to_string()).unwrap();
        prop_assert_eq!(decoded, read);
    });
}
