//! Property-based tests for the conformance harness
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;

use tandem::harness::Verdict;
use tandem::harness::compare::rc_text_matches;
use tandem::harness::results::{FolderResult, ResultTree, TestResult};

// =============================================================================
// Exit Code Text Properties
// =============================================================================

proptest! {
    /// Property: the decimal rendering of a code always matches itself
    #[test]
    fn rc_text_accepts_own_rendering(code in -1000i32..1000) {
        prop_assert!(rc_text_matches(code, code.to_string().as_bytes()));
    }

    /// Property: decorated renderings (whitespace, leading zeros) never match
    #[test]
    fn rc_text_rejects_decorated_renderings(code in 0i32..256) {
        let text = code.to_string();
        // Bound outside prop_assert!: the macro stringifies its condition into
        // a format string, so inline `{text}` captures fail to compile.
        let trailing_newline = format!("{text}\n");
        let leading_space = format!(" {text}");
        let trailing_space = format!("{text} ");
        let leading_zero = format!("0{text}");
        prop_assert!(!rc_text_matches(code, trailing_newline.as_bytes()));
        prop_assert!(!rc_text_matches(code, leading_space.as_bytes()));
        prop_assert!(!rc_text_matches(code, trailing_space.as_bytes()));
        prop_assert!(!rc_text_matches(code, leading_zero.as_bytes()));
    }

    /// Property: distinct codes never share a rendering
    #[test]
    fn rc_text_distinguishes_codes(a in -300i32..300, b in -300i32..300) {
        prop_assume!(a != b);
        prop_assert!(!rc_text_matches(a, b.to_string().as_bytes()));
    }
}

// =============================================================================
// Aggregation Properties
// =============================================================================

fn verdict_strategy() -> impl Strategy<Value = Verdict> {
    prop_oneof![Just(Verdict::Ok), Just(Verdict::Nok)]
}

fn result_strategy() -> impl Strategy<Value = TestResult> {
    (
        "[a-z][a-z0-9_]{0,11}",
        verdict_strategy(),
        verdict_strategy(),
        verdict_strategy(),
    )
        .prop_map(|(name, i, o, r)| TestResult::new(name, i, o, r))
}

proptest! {
    /// Property: folder counters always agree with the recorded results
    #[test]
    fn folder_counters_track_results(
        results in proptest::collection::vec(result_strategy(), 0..32)
    ) {
        let mut folder = FolderResult::new("./t/");
        for result in results.clone() {
            folder.record(result);
        }

        prop_assert_eq!(folder.total, results.len());
        let expected_passed = results.iter().filter(|r| r.passed()).count();
        prop_assert_eq!(folder.passed, expected_passed);
        prop_assert!(folder.passed <= folder.total);
    }

    /// Property: a case passes exactly when no channel is NOK
    #[test]
    fn passed_means_no_nok_channel(
        i in verdict_strategy(),
        o in verdict_strategy(),
        r in verdict_strategy()
    ) {
        let result = TestResult::new("t", i, o, r);
        let any_nok = [i, o, r].iter().any(|v| !v.is_ok());
        prop_assert_eq!(result.passed(), !any_nok);
    }

    /// Property: tree totals are the sums over folders
    #[test]
    fn tree_totals_sum_folders(
        counts in proptest::collection::vec((0usize..10, 0usize..10), 0..8)
    ) {
        let folders: Vec<FolderResult> = counts
            .iter()
            .map(|&(passed, extra)| FolderResult {
                path: "./x/".to_string(),
                total: passed + extra,
                passed,
                results: Vec::new(),
            })
            .collect();
        let tree = ResultTree { folders };

        let (passed, total) = tree.totals();
        prop_assert_eq!(passed, counts.iter().map(|c| c.0).sum::<usize>());
        prop_assert_eq!(total, counts.iter().map(|c| c.0 + c.1).sum::<usize>());
    }
}

// =============================================================================
// Report Properties
// =============================================================================

proptest! {
    /// Property: the JSON report parses for any recorded results, including
    /// names that need escaping
    #[test]
    fn json_report_always_parses(
        results in proptest::collection::vec(result_strategy(), 0..16),
        hostile in "[a-z<>&\"]{0,12}"
    ) {
        let mut folder = FolderResult::new("./suite/");
        for result in results {
            folder.record(result);
        }
        folder.record(TestResult::new(hostile, Verdict::Ok, Verdict::Ok, Verdict::Nok));
        let total = folder.total;
        let tree = ResultTree { folders: vec![folder] };

        let rendered = tandem::report::json::render(&tree);
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        prop_assert_eq!(parsed["folders"][0]["total"].as_u64().unwrap() as usize, total);
    }
}
