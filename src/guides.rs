use std::collections::HashMap;

use bio::alphabets::Alphabet;
use bio_types::strand::Strand;

use crate::constants::*;
use crate::fasta::Sequence;

pub use crate::iupac::reverse_complement;

lazy_static! {
    // Case sensitive; soft-masked (lowercase) bases never form a candidate
    static ref NUCLEOTIDES: Alphabet = Alphabet::new(b"ACGT");
}

#[derive(Clone, Debug, PartialEq)]
pub struct CandidateGuide<'a> {
    /// Site in forward orientation, i.e. always ending with the PAM
    pub sequence: String,
    pub header: &'a str,
    /// Byte offsets of the site in the sequence, not character offsets
    pub start: usize,
    pub end: usize,
    pub strand: Strand,
}

/// Occurrences of each candidate guide found in a single sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GuideCounts {
    pub header: String,
    pub counts: HashMap<String, usize>,
}

fn is_forward_site(window: &[u8]) -> bool {
    window[PROTOSPACER_LEN..] == *FORWARD_PAM && NUCLEOTIDES.is_word(&window[..PROTOSPACER_LEN])
}

fn is_reverse_site(window: &[u8]) -> bool {
    window[..REVERSE_PAM.len()] == *REVERSE_PAM
        && NUCLEOTIDES.is_word(&window[REVERSE_PAM.len()..])
}

fn collect_sites<'a, F>(
    header: &'a str,
    bases: &'a str,
    strand: Strand,
    is_site: F,
) -> impl Iterator<Item = CandidateGuide<'a>> + 'a
where
    F: Fn(&[u8]) -> bool + 'a,
{
    bases
        .as_bytes()
        .windows(GUIDE_LEN)
        .enumerate()
        .filter(move |(_, window)| is_site(*window))
        .map(move |(start, window)| {
            let window = String::from_utf8_lossy(window);
            let sequence = match strand {
                Strand::Reverse => reverse_complement(&window),
                _ => window.into_owned(),
            };

            CandidateGuide {
                sequence,
                header,
                start,
                end: start + GUIDE_LEN,
                strand,
            }
        })
}

/// Every candidate site in `bases`; forward strand sites first, followed by
/// reverse strand sites, each in order of position. Overlapping sites are
/// all reported.
pub fn scan<'a>(header: &'a str, bases: &'a str) -> impl Iterator<Item = CandidateGuide<'a>> + 'a {
    collect_sites(header, bases, Strand::Forward, is_forward_site).chain(collect_sites(
        header,
        bases,
        Strand::Reverse,
        is_reverse_site,
    ))
}

pub fn count_guides(sequence: &Sequence) -> GuideCounts {
    let mut counts = HashMap::new();
    for guide in scan(&sequence.header, &sequence.bases) {
        *counts.entry(guide.sequence).or_insert(0) += 1;
    }

    GuideCounts {
        header: sequence.header.clone(),
        counts,
    }
}
