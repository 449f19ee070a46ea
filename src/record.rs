use std::collections::BTreeSet;
use std::fmt::Debug;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::*;

pub const FIELDS: [&str; 3] = ["candidate_guides", "duplicate_guides", "recorded_sequences"];

/// Order-normalized summary of a scan, as written to disk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub candidate_guides: Vec<String>,
    pub duplicate_guides: Vec<String>,
    pub recorded_sequences: Vec<String>,
}

fn sorted<I: IntoIterator<Item = String>>(values: I) -> Vec<String> {
    let mut values: Vec<String> = values.into_iter().collect();
    values.sort_unstable();
    values
}

impl ResultRecord {
    pub fn new<C, D, R>(candidates: C, duplicates: D, recorded: R) -> ResultRecord
    where
        C: IntoIterator<Item = String>,
        D: IntoIterator<Item = String>,
        R: IntoIterator<Item = String>,
    {
        ResultRecord {
            candidate_guides: sorted(candidates),
            duplicate_guides: sorted(duplicates),
            recorded_sequences: sorted(recorded),
        }
    }

    pub fn read<P: AsRef<Path> + Debug>(filename: &P) -> Result<ResultRecord> {
        let file = File::open(filename)
            .chain_err(|| format!("failed to open result file {:?}", filename))?;

        serde_json::from_reader(BufReader::new(file))
            .chain_err(|| format!("failed to parse result file {:?}", filename))
    }

    pub fn write<P: AsRef<Path> + Debug>(&self, filename: &P) -> Result<()> {
        let file = File::create(filename)
            .chain_err(|| format!("failed to create result file {:?}", filename))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer(&mut writer, self).chain_err(|| "failed to write results")?;
        writer.flush().chain_err(|| "failed to write results")
    }
}

/// Differences between one field of two result records.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDiff {
    pub field: &'static str,
    pub first_count: usize,
    pub second_count: usize,
    pub only_in_first: Vec<String>,
    pub only_in_second: Vec<String>,
    same: bool,
}

impl FieldDiff {
    fn new(field: &'static str, first: &[String], second: &[String]) -> FieldDiff {
        let first_set: BTreeSet<&String> = first.iter().collect();
        let second_set: BTreeSet<&String> = second.iter().collect();

        FieldDiff {
            field,
            first_count: first.len(),
            second_count: second.len(),
            only_in_first: first_set
                .difference(&second_set)
                .map(|v| (*v).clone())
                .collect(),
            only_in_second: second_set
                .difference(&first_set)
                .map(|v| (*v).clone())
                .collect(),
            same: first_set == second_set,
        }
    }

    /// True if both fields contain the same set of values.
    pub fn is_same(&self) -> bool {
        self.same
    }
}

pub fn compare(first: &ResultRecord, second: &ResultRecord) -> Vec<FieldDiff> {
    vec![
        FieldDiff::new(
            FIELDS[0],
            &first.candidate_guides,
            &second.candidate_guides,
        ),
        FieldDiff::new(
            FIELDS[1],
            &first.duplicate_guides,
            &second.duplicate_guides,
        ),
        FieldDiff::new(
            FIELDS[2],
            &first.recorded_sequences,
            &second.recorded_sequences,
        ),
    ]
}
