use bio::alphabets::dna;

/// Complement of a (possibly ambiguous) nucleotide, preserving case; symbols
/// without a complement, including all non-ASCII characters, are returned as is.
pub fn complement(nuc: char) -> char {
    if nuc.is_ascii() {
        dna::complement(nuc as u8) as char
    } else {
        nuc
    }
}

pub fn reverse_complement(sequence: &str) -> String {
    sequence.chars().rev().map(complement).collect()
}
