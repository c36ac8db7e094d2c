/// Tolerance-predicate tests, including the one-sided wiggle property.
use dwgeval::accuracy::{is_correct_aln, validate_wiggle, MAX_WIGGLE};
use dwgeval::dwgsim::DwgsimRead;
use dwgeval::errors::EvalError;

fn truth_on(seqname: &str) -> DwgsimRead {
    DwgsimRead::from_qname(&format!("{seqname}_1000_100000_0_1_0_0_0:0:0_0:0:0_1")).unwrap()
}

#[test]
fn reference_mismatch_is_false_for_every_position_and_wiggle() {
    let truth = truth_on("chr1");
    for pos in [0i64, 995, 1000, 1005, 100_000] {
        for wiggle in [0i64, 5, 19] {
            assert!(
                !is_correct_aln("chr2", pos, &truth, wiggle),
                "pos {pos} wiggle {wiggle} judged correct on the wrong sequence"
            );
        }
    }
}

#[test]
fn wiggle_boundary_is_exact() {
    let truth = truth_on("chr1");
    // start_1 = 1000, wiggle = 5: 995 is the last upstream position
    // that passes (1000 - 995 = 5), 994 the first that fails.
    assert!(is_correct_aln("chr1", 995, &truth, 5));
    assert!(is_correct_aln("chr1", 996, &truth, 5));
    assert!(!is_correct_aln("chr1", 994, &truth, 5));
}

#[test]
fn one_sided_wiggle_accepts_downstream_alignments() {
    // The offset test is signed: 1000 - 1006 = -6 <= 5, so a position
    // past the true start passes however far downstream it lies. This
    // is long-standing behavior that callers depend on; do not
    // symmetrize it without changing the reported numbers everywhere.
    let truth = truth_on("chr1");
    assert!(is_correct_aln("chr1", 1006, &truth, 5));
    assert!(is_correct_aln("chr1", 50_000, &truth, 5));
}

#[test]
fn both_mate_starts_are_consulted() {
    // Mate 2 upstream of mate 1: a position within wiggle of start_2
    // alone still passes, even though it is far upstream of start_1.
    let truth =
        DwgsimRead::from_qname("chr1_100000_1000_1_0_0_0_0:0:0_0:0:0_1").unwrap();
    assert!(is_correct_aln("chr1", 996, &truth, 5));
    assert!(!is_correct_aln("chr1", 994, &truth, 5));
}

#[test]
fn wiggle_cap_is_exclusive() {
    assert!(validate_wiggle(MAX_WIGGLE - 1).is_ok());
    assert!(matches!(
        validate_wiggle(MAX_WIGGLE),
        Err(EvalError::WiggleTooLarge { .. })
    ));
}
