use std::collections::{HashMap, HashSet};

use crate::fasta::Sequence;
use crate::guides::CandidateGuide;
use crate::record::ResultRecord;

/// Run-wide collection of candidate guides, guides seen more than once, and
/// the headers of the sequences that were scanned.
#[derive(Debug, Default)]
pub struct AggregateState {
    candidates: HashSet<String>,
    duplicates: HashSet<String>,
    recorded: Vec<String>,
    headers: HashSet<String>,
    finished: bool,
}

impl AggregateState {
    pub fn new() -> AggregateState {
        AggregateState::default()
    }

    /// Records the header of `sequence` and returns true if its guides should
    /// be folded into the state. Previously seen headers are skipped, except
    /// for the empty header, which is accepted again if it has any bases.
    pub fn admit(&mut self, sequence: &Sequence) -> bool {
        if self.record_header(&sequence.header) {
            true
        } else {
            sequence.header.is_empty() && !sequence.bases.is_empty()
        }
    }

    /// Returns true if the header had not been recorded before.
    pub fn record_header(&mut self, header: &str) -> bool {
        if self.headers.insert(header.to_owned()) {
            self.recorded.push(header.to_owned());
            true
        } else {
            false
        }
    }

    pub fn fold_guide(&mut self, guide: String) {
        if self.candidates.contains(&guide) {
            self.duplicates.insert(guide);
        } else {
            self.candidates.insert(guide);
        }
    }

    pub fn fold<'a, I>(&mut self, guides: I)
    where
        I: IntoIterator<Item = CandidateGuide<'a>>,
    {
        for guide in guides {
            self.fold_guide(guide.sequence);
        }
    }

    /// Merges guide counts collected from a single sequence. The result does
    /// not depend on the order in which sequences are merged.
    pub fn merge_counts(&mut self, counts: HashMap<String, usize>) {
        for (guide, count) in counts {
            if count > 1 || self.candidates.contains(&guide) {
                self.duplicates.insert(guide.clone());
            }

            self.candidates.insert(guide);
        }
    }

    /// Applies the recorded-sequence convention of the reference output: the
    /// last recorded header is dropped and an empty header is prepended.
    /// Subsequent calls have no effect.
    pub fn finish(&mut self) {
        if !self.finished {
            self.recorded.pop();
            self.recorded.insert(0, String::new());
            self.finished = true;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn candidates(&self) -> &HashSet<String> {
        &self.candidates
    }

    pub fn duplicates(&self) -> &HashSet<String> {
        &self.duplicates
    }

    pub fn recorded(&self) -> &[String] {
        &self.recorded
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn duplicate_count(&self) -> usize {
        self.duplicates.len()
    }

    /// Percentage of candidates seen more than once; undefined without candidates.
    pub fn duplicate_percentage(&self) -> Option<f64> {
        if self.candidates.is_empty() {
            None
        } else {
            Some(self.duplicates.len() as f64 * 100.0 / self.candidates.len() as f64)
        }
    }

    pub fn summarize(&self) -> String {
        let percentage = match self.duplicate_percentage() {
            Some(pct) => format!("{:.2} %", pct),
            None => "no candidates".to_owned(),
        };

        format!(
            "{} candidate guides, {} duplicate guides ({}), {} recorded sequences",
            self.candidate_count(),
            self.duplicate_count(),
            percentage,
            self.recorded.len()
        )
    }

    pub fn into_record(self) -> ResultRecord {
        ResultRecord::new(self.candidates, self.duplicates, self.recorded)
    }
}
