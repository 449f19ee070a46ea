extern crate pamscan;

use std::collections::HashMap;

use pamscan::aggregate::AggregateState;
use pamscan::fasta::Sequence;
use pamscan::guides::scan;

const GUIDE: &str = "AAAAAAAAAAAAAAAAAAAAAGG";

fn counts(values: &[(&str, usize)]) -> HashMap<String, usize> {
    values.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_fold_guide() {
    let mut state = AggregateState::new();
    state.fold_guide("A".into());
    state.fold_guide("B".into());

    assert_eq!(state.candidate_count(), 2);
    assert_eq!(state.duplicate_count(), 0);

    state.fold_guide("A".into());
    state.fold_guide("A".into());

    assert_eq!(state.candidate_count(), 2);
    assert_eq!(state.duplicate_count(), 1);
    assert!(state.duplicates().contains("A"));
}

#[test]
fn test_fold_repeated_window() {
    // The same 23-mer occurs twice within a single sequence
    let bases = format!("{}T{}", GUIDE, GUIDE);
    let mut state = AggregateState::new();
    state.fold(scan("seq", &bases));

    let record = state.into_record();
    assert_eq!(record.duplicate_guides, vec![GUIDE.to_string()]);
    assert!(record.candidate_guides.contains(&GUIDE.to_string()));
}

#[test]
fn test_merge_counts() {
    let mut state = AggregateState::new();
    state.merge_counts(counts(&[("A", 1), ("B", 2)]));

    assert_eq!(state.candidate_count(), 2);
    assert_eq!(state.duplicate_count(), 1);
    assert!(state.duplicates().contains("B"));

    state.merge_counts(counts(&[("A", 1), ("C", 1)]));

    assert_eq!(state.candidate_count(), 3);
    assert_eq!(state.duplicate_count(), 2);
    assert!(state.duplicates().contains("A"));
    assert!(!state.duplicates().contains("C"));
}

#[test]
fn test_fold_and_merge_agree() {
    let sequences = [
        Sequence::new("a", &format!("{}CC{}", GUIDE, "TTTTTTTTTTTTTTTTTTTTT")),
        Sequence::new("b", "ACGTACGTACGTACGTACGTAGGTTACGTACGTACGTACGTACGTAGG"),
        Sequence::new("c", GUIDE),
    ];

    let mut folded = AggregateState::new();
    let mut merged = AggregateState::new();
    for sequence in sequences.iter() {
        folded.fold(scan(&sequence.header, &sequence.bases));
        merged.merge_counts(pamscan::guides::count_guides(sequence).counts);
    }

    assert_eq!(folded.candidates(), merged.candidates());
    assert_eq!(folded.duplicates(), merged.duplicates());
    assert!(folded.duplicates().contains(GUIDE));
}

#[test]
fn test_admit_new_headers() {
    let mut state = AggregateState::new();

    assert!(state.admit(&Sequence::new("H1", "ACGT")));
    assert!(state.admit(&Sequence::new("H2", "")));
    assert!(!state.admit(&Sequence::new("H1", "ACGT")));
    assert_eq!(state.recorded(), &["H1".to_string(), "H2".to_string()][..]);
}

#[test]
fn test_admit_empty_header() {
    let mut state = AggregateState::new();

    assert!(state.admit(&Sequence::new("", "")));
    assert!(state.admit(&Sequence::new("", "ACGT")));
    assert!(!state.admit(&Sequence::new("", "")));
    assert!(state.admit(&Sequence::new("", "ACGT")));
    assert_eq!(state.recorded(), &["".to_string()][..]);
}

#[test]
fn test_recorded_sequences_quirk() {
    let mut state = AggregateState::new();
    for header in &["H1", "H2", "H3"] {
        state.record_header(header);
    }

    state.finish();
    assert!(state.is_finished());
    assert_eq!(
        state.recorded(),
        &["".to_string(), "H1".to_string(), "H2".to_string()][..]
    );

    // Only applied once
    state.finish();
    assert_eq!(state.recorded().len(), 3);
}

#[test]
fn test_recorded_sequences_quirk_without_sequences() {
    let mut state = AggregateState::new();
    state.finish();

    assert_eq!(state.recorded(), &["".to_string()][..]);
}

#[test]
fn test_duplicate_percentage() {
    let mut state = AggregateState::new();
    assert_eq!(state.duplicate_percentage(), None);

    state.merge_counts(counts(&[("A", 2), ("B", 1), ("C", 1), ("D", 1)]));
    assert_eq!(state.duplicate_percentage(), Some(25.0));
}

#[test]
fn test_summarize() {
    let mut state = AggregateState::new();
    assert_eq!(
        state.summarize(),
        "0 candidate guides, 0 duplicate guides (no candidates), 0 recorded sequences"
    );

    state.record_header("H1");
    state.merge_counts(counts(&[("A", 2), ("B", 1)]));
    assert_eq!(
        state.summarize(),
        "2 candidate guides, 1 duplicate guides (50.00 %), 1 recorded sequences"
    );
}

#[test]
fn test_into_record_is_sorted() {
    let mut state = AggregateState::new();
    for header in &["Z", "B", "M"] {
        state.record_header(header);
    }
    for guide in &["T", "C", "G", "C", "A", "T"] {
        state.fold_guide(guide.to_string());
    }
    state.finish();

    let record = state.into_record();
    assert_eq!(record.candidate_guides, vec!["A", "C", "G", "T"]);
    assert_eq!(record.duplicate_guides, vec!["C", "T"]);
    assert_eq!(record.recorded_sequences, vec!["", "B", "Z"]);
}
