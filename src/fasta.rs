use std::fmt::Debug;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter, Lines};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::errors::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    pub header: String,
    pub bases: String,
}

impl Sequence {
    pub fn new(header: &str, bases: &str) -> Sequence {
        Sequence {
            header: header.into(),
            bases: bases.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceMode {
    /// Sequences are accumulated directly from the raw file.
    Streaming,
    /// The file is first rewritten with one line per header and per sequence.
    TwoPass,
}

impl SourceMode {
    pub fn get(name: &str) -> Option<SourceMode> {
        match name.to_ascii_lowercase().as_ref() {
            "streaming" => Some(SourceMode::Streaming),
            "two-pass" | "twopass" => Some(SourceMode::TwoPass),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SourceMode::Streaming => "streaming",
            SourceMode::TwoPass => "two-pass",
        }
    }
}

/// Lazily splits FASTA-like text into one `Sequence` per header block.
///
/// Lines are trimmed and blank lines ignored. Bases found before the first
/// header form a block with an empty header, which is only emitted if it
/// contains any bases.
pub struct SequenceReader<R> {
    lines: Lines<R>,
    header: Option<String>,
    bases: String,
    done: bool,
}

impl<R: BufRead> SequenceReader<R> {
    pub fn new(reader: R) -> SequenceReader<R> {
        SequenceReader {
            lines: reader.lines(),
            header: None,
            bases: String::new(),
            done: false,
        }
    }

    fn take_block(&mut self, next_header: Option<String>) -> Option<Sequence> {
        let bases = std::mem::take(&mut self.bases);

        match std::mem::replace(&mut self.header, next_header) {
            Some(header) => Some(Sequence { header, bases }),
            None if !bases.is_empty() => Some(Sequence {
                header: String::new(),
                bases,
            }),
            None => None,
        }
    }
}

impl<R: BufRead> Iterator for SequenceReader<R> {
    type Item = Result<Sequence>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while let Some(line) = self.lines.next() {
            let raw = match line.chain_err(|| "failed to read line from FASTA file") {
                Ok(raw) => raw,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            };

            let line = raw.trim();
            if line.is_empty() {
                continue;
            } else if let Some(header) = line.strip_prefix('>') {
                if let Some(sequence) = self.take_block(Some(header.to_string())) {
                    return Some(Ok(sequence));
                }
            } else {
                self.bases.push_str(line);
            }
        }

        self.done = true;
        self.take_block(None).map(Ok)
    }
}

/// Rewrites a FASTA file so that every header is on a line of its own and the
/// bases of each record are joined into a single line.
pub fn normalize<P: AsRef<Path> + Debug>(filename: &P) -> Result<NamedTempFile> {
    let file = File::open(filename)
        .chain_err(|| format!("failed to open FASTA file {:?}", filename))?;
    let reader = BufReader::new(file);

    let normalized =
        NamedTempFile::new().chain_err(|| "failed to create temporary FASTA file")?;
    {
        let mut writer = BufWriter::new(normalized.as_file());
        for line in reader.lines() {
            let line = line.chain_err(|| "failed to read line from FASTA file")?;
            let line = line.trim();

            let written = if line.starts_with('>') {
                write!(writer, "\n{}\n", line)
            } else {
                write!(writer, "{}", line)
            };

            written.chain_err(|| "failed to write temporary FASTA file")?;
        }

        writer
            .flush()
            .chain_err(|| "failed to write temporary FASTA file")?;
    }

    Ok(normalized)
}

/// Sequences read from a `FastaSource`. Owns the normalized temporary file
/// in two-pass mode, which is removed once the iterator is dropped.
pub struct Sequences {
    reader: SequenceReader<BufReader<File>>,
    _normalized: Option<NamedTempFile>,
}

impl Iterator for Sequences {
    type Item = Result<Sequence>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.next()
    }
}

#[derive(Clone, Debug)]
pub struct FastaSource {
    path: PathBuf,
    mode: SourceMode,
}

impl FastaSource {
    pub fn new<P: AsRef<Path>>(path: P, mode: SourceMode) -> Result<FastaSource> {
        let path = path.as_ref();
        if !path.is_file() {
            bail!(ErrorKind::MissingInput(path.display().to_string()));
        }

        Ok(FastaSource {
            path: path.to_owned(),
            mode,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sequences(&self) -> Result<Sequences> {
        match self.mode {
            SourceMode::Streaming => {
                let file = File::open(&self.path)
                    .chain_err(|| format!("failed to open FASTA file {:?}", self.path))?;

                Ok(Sequences {
                    reader: SequenceReader::new(BufReader::new(file)),
                    _normalized: None,
                })
            }
            SourceMode::TwoPass => {
                let normalized = normalize(&self.path)?;
                let file = normalized
                    .reopen()
                    .chain_err(|| "failed to reopen temporary FASTA file")?;

                Ok(Sequences {
                    reader: SequenceReader::new(BufReader::new(file)),
                    _normalized: Some(normalized),
                })
            }
        }
    }
}
