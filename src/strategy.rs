use std::path::{Path, PathBuf};
use std::sync::mpsc;

use rayon::prelude::*;

use crate::aggregate::AggregateState;
use crate::errors::*;
use crate::fasta::FastaSource;
use crate::guides;
use crate::progress;

/// How sequences are fed from the source through the scanner into the
/// aggregate. All strategies produce the same candidate and duplicate sets for
/// inputs without repeated headers.
#[derive(Clone, Debug, PartialEq)]
pub enum Strategy {
    /// Single thread; guides are folded as soon as a sequence is read.
    Sequential,
    /// Sequences are first written to an on-disk key-value store keyed by
    /// header, then scanned one at a time from the store.
    Cache { path: PathBuf },
    /// Sequences are scanned by a pool of workers (0 threads for automatic)
    /// and the per-sequence counts merged once all workers are done.
    Parallel { threads: usize },
}

impl Strategy {
    pub fn get(name: &str, cache: &Path, threads: usize) -> Option<Strategy> {
        match name.to_ascii_lowercase().as_ref() {
            "sequential" | "memory" => Some(Strategy::Sequential),
            "cache" => Some(Strategy::Cache {
                path: cache.to_owned(),
            }),
            "parallel" => Some(Strategy::Parallel { threads }),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Cache { .. } => "cache",
            Strategy::Parallel { .. } => "parallel",
        }
    }

    pub fn scan(&self, source: &FastaSource) -> Result<AggregateState> {
        match self {
            Strategy::Sequential => scan_sequential(source),
            Strategy::Cache { path } => scan_cached(source, path),
            Strategy::Parallel { threads } => scan_parallel(source, *threads),
        }
    }
}

fn scan_sequential(source: &FastaSource) -> Result<AggregateState> {
    let mut state = AggregateState::new();

    for sequence in source.sequences()? {
        let sequence = sequence?;

        if state.admit(&sequence) {
            state.fold(guides::scan(&sequence.header, &sequence.bases));
        } else {
            debug!("Skipping previously seen sequence {:?}", sequence.header);
        }
    }

    state.finish();

    Ok(state)
}

fn scan_cached(source: &FastaSource, path: &Path) -> Result<AggregateState> {
    let cache =
        sled::open(path).chain_err(|| format!("failed to open sequence cache {:?}", path))?;
    cache
        .clear()
        .chain_err(|| format!("failed to clear sequence cache {:?}", path))?;

    let mut state = AggregateState::new();
    for sequence in source.sequences()? {
        let sequence = sequence?;

        state.record_header(&sequence.header);
        cache
            .insert(sequence.header.as_bytes(), sequence.bases.as_bytes())
            .chain_err(|| format!("failed to cache sequence {:?}", sequence.header))?;
    }

    cache
        .flush()
        .chain_err(|| format!("failed to flush sequence cache {:?}", path))?;

    let count = cache.len();
    info!("Found {} sequences in {:?}", count, source.path());

    let progress = progress::sequences(count);
    for entry in cache.iter() {
        let (header, bases) = entry.chain_err(|| "failed to read from sequence cache")?;
        let header =
            std::str::from_utf8(&header).chain_err(|| "invalid header in sequence cache")?;
        let bases =
            std::str::from_utf8(&bases).chain_err(|| "invalid sequence in sequence cache")?;

        state.fold(guides::scan(header, bases));
        progress.inc(1);
    }

    progress.finish_and_clear();
    state.finish();

    Ok(state)
}

fn scan_parallel(source: &FastaSource, threads: usize) -> Result<AggregateState> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .chain_err(|| "failed to build thread pool")?;

    let mut state = AggregateState::new();
    let mut sequences = Vec::new();
    for sequence in source.sequences()? {
        let sequence = sequence?;

        if state.admit(&sequence) {
            sequences.push(sequence);
        } else {
            debug!("Skipping previously seen sequence {:?}", sequence.header);
        }
    }

    info!(
        "Scanning {} sequences using {} threads",
        sequences.len(),
        pool.current_num_threads()
    );

    let progress = progress::sequences(sequences.len());
    let (sender, receiver) = mpsc::channel();
    pool.install(|| {
        sequences.par_iter().for_each_with(sender, |sender, sequence| {
            // The receiver outlives the pool, so sending cannot fail
            sender.send(guides::count_guides(sequence)).ok();
            progress.inc(1);
        });
    });
    progress.finish_and_clear();

    info!("Combining results from {} sequences", sequences.len());
    for counts in receiver.iter() {
        debug!(
            "Merging {} guides from {:?}",
            counts.counts.len(),
            counts.header
        );
        state.merge_counts(counts.counts);
    }

    state.finish();

    Ok(state)
}
