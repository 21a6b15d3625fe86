// rangecut-core/tests/scanner_properties.rs
//! Behavioural properties of the range scanner, exercised through the public API.

use rangecut_core::{
    count_words, MarkerSpec, RangeEngine, RemovalEngine, RemovalRange, ScanConfig, ScanResult,
};
use test_log::test;

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn scan(config: ScanConfig, input: &[String]) -> ScanResult {
    RangeEngine::new(config).expect("engine builds").scan(input)
}

/// Word count of the text that disappeared from the document.
///
/// Valid when every removal is a prefix, a suffix or a contiguous middle
/// slice of a line, which holds for all inputs below.
fn words_of(input: &[String]) -> usize {
    input.iter().map(|l| count_words(l)).sum()
}

#[test]
fn documents_without_start_marker_pass_through() {
    let input = lines(&["alpha", "beta Answers: gamma", "", "  delta  "]);
    let result = scan(ScanConfig::for_markers("Selected Answer:", "Answers:"), &input);
    assert_eq!(result.cleaned_lines, input);
    assert!(result.removed_ranges.is_empty());
    assert_eq!(result.total_removed_words, 0);
    assert_eq!(result.total_lines, 4);
}

#[test]
fn same_line_range_reports_exact_substring() {
    let input = lines(&["before START middle words END after"]);
    let result = scan(ScanConfig::for_markers("START", "END"), &input);
    assert_eq!(result.cleaned_lines, lines(&["before  after"]));
    assert_eq!(
        result.removed_ranges,
        vec![RemovalRange {
            start_line: 1,
            end_line: 1,
            content: "START middle words END".to_string(),
        }]
    );
    assert_eq!(result.total_removed_words, 4);
}

#[test]
fn study_guide_scenario() {
    let input = lines(&[
        "Q1: What is 2+2?",
        "Selected Answer: 4",
        "Answers: 3, 4, 5",
        "Q2: next",
    ]);
    let result = scan(ScanConfig::for_markers("Selected Answer:", "Answers:"), &input);

    assert_eq!(
        result.cleaned_lines,
        lines(&["Q1: What is 2+2?", "", " 3, 4, 5", "Q2: next"])
    );
    assert_eq!(result.removed_ranges.len(), 1);
    assert_eq!(result.removed_ranges[0].start_line, 2);
    assert_eq!(result.removed_ranges[0].end_line, 3);
    assert_eq!(result.removed_ranges[0].content, "[Content from line 2 to 3]");
    // "Selected Answer: 4" on line 2 plus "Answers:" on line 3.
    assert_eq!(result.total_removed_words, 4);
    assert_eq!(
        result.total_removed_words,
        words_of(&input) - words_of(&result.cleaned_lines)
    );
}

#[test]
fn unterminated_range_consumes_rest_of_document() {
    let input = lines(&["keep me", "Selected Answer: B", "explanation", "more text"]);
    let result = scan(ScanConfig::for_markers("Selected Answer:", "Answers:"), &input);

    assert_eq!(result.cleaned_lines, lines(&["keep me", ""]));
    assert_eq!(result.removed_ranges.len(), 1);
    assert_eq!(result.removed_ranges[0].start_line, 2);
    assert_eq!(result.removed_ranges[0].end_line, result.total_lines);
    assert!(result
        .cleaned_lines
        .iter()
        .all(|l| !l.contains("Selected Answer:") && !l.contains("explanation")));
    assert_eq!(result.total_removed_words, 6);
}

#[test]
fn removed_word_count_matches_excised_text() {
    let input = lines(&[
        "intro text",
        "keep START drop one",
        "drop two three",
        "drop END keep after",
        "x START y END z",
        "tail START never closed",
        "gone too",
    ]);
    let result = scan(ScanConfig::for_markers("START", "END"), &input);
    assert_eq!(
        result.total_removed_words,
        words_of(&input) - words_of(&result.cleaned_lines)
    );
    assert_eq!(result.removed_ranges.len(), 3);
    assert_eq!(result.removed_ranges[2].end_line, 7);
}

#[test]
fn retained_start_marker_survives_a_multi_line_range() {
    let input = lines(&["a Note: x y", "z", "q END tail"]);
    let config = ScanConfig::for_markers("Note:", "END").with_retain_start_marker(true);
    let result = scan(config, &input);

    assert_eq!(result.cleaned_lines, lines(&["a Note:", " tail"]));
    assert_eq!(result.removed_ranges.len(), 1);
    assert_eq!(result.removed_ranges[0].content, "[Content from line 1 to 3]");
    assert_eq!(
        result.total_removed_words,
        words_of(&input) - words_of(&result.cleaned_lines)
    );
}

#[test]
fn retained_end_marker_survives_a_multi_line_range() {
    let input = lines(&["a Note: x y", "z", "q END tail"]);
    let config = ScanConfig::for_markers("Note:", "END").with_retain_end_marker(true);
    let result = scan(config, &input);

    assert_eq!(result.cleaned_lines, lines(&["a ", "END tail"]));
    assert_eq!(result.removed_ranges[0].content, "[Content from line 1 to 3]");
    assert_eq!(
        result.total_removed_words,
        words_of(&input) - words_of(&result.cleaned_lines)
    );
}

#[test]
fn whole_word_does_not_match_inside_tokens() {
    let input = lines(&["the category list", "a cat sat; dog ran"]);
    let config = ScanConfig::for_markers("cat", "dog").with_whole_word(true);
    let result = scan(config, &input);
    assert_eq!(result.cleaned_lines, lines(&["the category list", "a  ran"]));
    assert_eq!(result.removed_ranges.len(), 1);
    assert_eq!(result.removed_ranges[0].start_line, 2);
}

#[test]
fn substring_matching_without_whole_word() {
    let input = lines(&["the category dog list"]);
    let result = scan(ScanConfig::for_markers("cat", "dog"), &input);
    assert_eq!(result.cleaned_lines, lines(&["the  list"]));
}

#[test]
fn case_sensitivity_is_honoured() {
    let input = lines(&["x selected answer: y ANSWERS: z"]);

    let insensitive = scan(
        ScanConfig::for_markers("Selected Answer:", "Answers:").with_case_sensitive(false),
        &input,
    );
    assert_eq!(insensitive.cleaned_lines, lines(&["x  z"]));
    assert_eq!(insensitive.removed_ranges[0].content, "selected answer: y ANSWERS:");

    let sensitive = scan(ScanConfig::for_markers("Selected Answer:", "Answers:"), &input);
    assert_eq!(sensitive.cleaned_lines, input);
}

#[test]
fn per_marker_options_are_independent() {
    let config = ScanConfig {
        start: MarkerSpec::new("begin").case_sensitive(false),
        end: MarkerSpec::new("end").whole_word(true),
        ..ScanConfig::default()
    };
    let input = lines(&["BEGIN x ending y end z"]);
    let result = scan(config, &input);
    assert_eq!(result.cleaned_lines, lines(&[" z"]));
}

#[test]
fn scanning_cleaned_output_again_is_a_no_op() {
    let input = lines(&[
        "Q1: What is 2+2?",
        "Selected Answer: 4",
        "Answers: 3, 4, 5",
        "Q2: capital? Selected Answer: Paris Answers: Paris, Rome",
        "Q3: done",
    ]);
    let config = ScanConfig::for_markers("Selected Answer:", "Answers:");
    let first = scan(config.clone(), &input);
    assert_eq!(first.removed_ranges.len(), 2);

    let second = scan(config, &first.cleaned_lines);
    assert!(second.removed_ranges.is_empty());
    assert_eq!(second.cleaned_lines, first.cleaned_lines);
    assert_eq!(second.total_removed_words, 0);
}

#[test]
fn ranges_are_recorded_in_closing_order() {
    let input = lines(&["a <1> b", "<2", "2>", "<3>", "<4"]);
    let result = scan(ScanConfig::for_markers("<", ">"), &input);
    let spans: Vec<(usize, usize)> = result
        .removed_ranges
        .iter()
        .map(|r| (r.start_line, r.end_line))
        .collect();
    assert_eq!(spans, vec![(1, 1), (2, 3), (4, 4), (5, 5)]);
    assert!(result.removed_ranges.iter().all(|r| r.start_line <= r.end_line));
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(
        RangeEngine::new(ScanConfig::for_markers("[", "]")).expect("engine builds"),
    );
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = std::sync::Arc::clone(&engine);
            std::thread::spawn(move || {
                let doc = vec![format!("doc {} [hidden] shown", i)];
                engine.scan(&doc).cleaned_lines
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), vec![format!("doc {}  shown", i)]);
    }
}
