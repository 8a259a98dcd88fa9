use std::collections::HashSet;
use std::fs;

use wordfreq::{analyze, read_document, top_k, FrequencyEntry, FrequencyTable, WordFreqError};

fn table(pairs: &[(&str, usize)]) -> Vec<FrequencyEntry> {
    pairs
        .iter()
        .map(|&(word, count)| FrequencyEntry::new(word, count))
        .collect()
}

// Deterministic spread of counts with plenty of ties.
fn vocabulary(n: usize) -> Vec<FrequencyEntry> {
    (0..n)
        .map(|i| FrequencyEntry::new(format!("word{i}"), 1 + (i * 37 + 11) % 29))
        .collect()
}

#[test]
fn test_scenario_table_with_tie() {
    let input = table(&[("the", 5), ("a", 3), ("of", 3), ("and", 1)]);

    let result = top_k(input, 2);

    assert_eq!(result.len(), 2);
    assert_eq!(result[0], FrequencyEntry::new("the", 5));
    assert_eq!(result[1].count, 3);
    assert!(["a", "of"].contains(&result[1].word.as_str()));
}

#[test]
fn test_scenario_text_min_length() {
    let text = "a bb bb ccc ccc ccc";

    let counts = FrequencyTable::from_text(text, 2);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.count("bb"), 2);
    assert_eq!(counts.count("ccc"), 3);

    assert_eq!(analyze(text, 2, 1), vec![FrequencyEntry::new("ccc", 3)]);
}

#[test]
fn test_scenario_empty_text() {
    for min_len in [0, 1, 5] {
        assert!(analyze("", min_len, 5).is_empty());
    }
}

#[test]
fn test_k_at_least_n_covers_every_entry() {
    for n in [1, 2, 17, 40] {
        let input = vocabulary(n);
        let words: HashSet<String> = input.iter().map(|e| e.word.clone()).collect();

        for k in [n, n + 1, n * 3] {
            let result = top_k(input.clone(), k);
            assert_eq!(result.len(), n);
            let got: HashSet<String> = result.into_iter().map(|e| e.word).collect();
            assert_eq!(got, words);
        }
    }
}

#[test]
fn test_bounded_selection_invariant() {
    let input = vocabulary(300);

    for k in [1, 2, 7, 29, 150, 299] {
        let result = top_k(input.clone(), k);
        assert_eq!(result.len(), k);

        let kept: HashSet<&str> = result.iter().map(|e| e.word.as_str()).collect();
        let min_kept = result.iter().map(|e| e.count).min().unwrap();
        for outside in input.iter().filter(|e| !kept.contains(e.word.as_str())) {
            assert!(outside.count <= min_kept, "k = {k}, {outside:?}");
        }
    }
}

#[test]
fn test_result_is_descending() {
    let result = top_k(vocabulary(500), 60);
    assert!(result.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn test_zero_k_on_non_empty_table() {
    assert!(top_k(vocabulary(10), 0).is_empty());
    assert!(analyze("some words here", 1, 0).is_empty());
}

#[test]
fn test_empty_table_any_k() {
    for k in [0, 1, 10, 1000] {
        assert!(FrequencyTable::new().top_k(k).is_empty());
    }
}

#[test]
fn test_read_document_and_analyze() {
    let path = std::env::temp_dir().join(format!("wordfreq-{}-doc.txt", std::process::id()));
    fs::write(&path, "It was the best of times,\nit was the worst of times").unwrap();

    let text = read_document(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let result = analyze(&text, 3, 2);
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|e| e.count == 2));
    for entry in &result {
        assert!(["was", "the"].contains(&entry.word.as_str()));
    }
}

#[test]
fn test_read_document_missing_file() {
    let path = std::env::temp_dir().join("wordfreq-definitely-missing.txt");

    let err = read_document(&path).unwrap_err();

    assert!(matches!(err, WordFreqError::Read { .. }));
    assert!(err.to_string().starts_with("cannot read "));
}
