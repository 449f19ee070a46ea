// Length of a candidate site, protospacer plus PAM
pub const GUIDE_LEN: usize = 23;
pub const PROTOSPACER_LEN: usize = 21;

pub const FORWARD_PAM: &[u8] = b"GG";
pub const REVERSE_PAM: &[u8] = b"CC";

pub const DEFAULT_CACHE: &str = "exon_cache.db";
