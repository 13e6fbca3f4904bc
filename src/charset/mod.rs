//! # Character sets
//!
//! A [`CharSet`] is a finite subset of the 256 possible byte values,
//! represented as a 256-bit bitmap (four `u64` words). This is the
//! representation §3.2 of the spec calls "natural."

use std::fmt;

/// A set of byte values in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CharSet {
    words: [u64; 4],
}

impl CharSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The set containing every byte value.
    pub fn full() -> Self {
        Self {
            words: [u64::MAX; 4],
        }
    }

    /// The set containing only `b`.
    pub fn singleton(b: u8) -> Self {
        let mut cs = Self::new();
        cs.insert(b);
        cs
    }

    /// The set containing every byte in the inclusive range `lo..=hi`.
    pub fn range(lo: u8, hi: u8) -> Self {
        let mut cs = Self::new();
        cs.insert_range(lo, hi);
        cs
    }

    #[inline]
    fn word_bit(b: u8) -> (usize, u64) {
        ((b >> 6) as usize, 1u64 << (b & 0x3f))
    }

    /// Insert a single byte.
    pub fn insert(&mut self, b: u8) {
        let (w, bit) = Self::word_bit(b);
        self.words[w] |= bit;
    }

    /// Insert every byte in the inclusive range `lo..=hi`.
    ///
    /// Swaps the bounds if `lo > hi` rather than producing an empty set —
    /// character-class ranges in the surface syntax are written low-to-high,
    /// but a translator error upstream shouldn't silently drop bytes.
    pub fn insert_range(&mut self, lo: u8, hi: u8) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        for b in lo..=hi {
            self.insert(b);
        }
    }

    /// True if `b` is a member.
    pub fn contains(&self, b: u8) -> bool {
        let (w, bit) = Self::word_bit(b);
        self.words[w] & bit != 0
    }

    /// Number of member bytes.
    pub fn len(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Union of `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        let mut words = [0u64; 4];
        for i in 0..4 {
            words[i] = self.words[i] | other.words[i];
        }
        Self { words }
    }

    /// Set difference `self \ other`.
    pub fn difference(&self, other: &Self) -> Self {
        let mut words = [0u64; 4];
        for i in 0..4 {
            words[i] = self.words[i] & !other.words[i];
        }
        Self { words }
    }

    /// Iterate member bytes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0u16..=255).map(|b| b as u8).filter(move |b| self.contains(*b))
    }
}

/// Render a single byte the way [`dump_set`] renders set members:
/// printable ASCII verbatim, `\n \r \t` escaped, everything else as `\xHH`.
fn format_byte(b: u8) -> String {
    match b {
        b'\n' => "\\n".to_string(),
        b'\r' => "\\r".to_string(),
        b'\t' => "\\t".to_string(),
        b'\\' => "\\\\".to_string(),
        b'\'' => "\\'".to_string(),
        0x20..=0x7e => (b as char).to_string(),
        _ => format!("\\x{b:02X}"),
    }
}

/// Compact textual rendering of a char set: contiguous runs as `'a'..'z'`,
/// singletons as `'c'`, the whole thing wrapped in `{…}`. See §4.A.
pub fn dump_set(cs: &CharSet) -> String {
    let mut groups = Vec::new();
    let mut run_start: Option<u8> = None;
    let mut prev: Option<u8> = None;

    for b in cs.iter() {
        match (run_start, prev) {
            (Some(_), Some(p)) if b == p.wrapping_add(1) && b > p => {
                prev = Some(b);
            }
            _ => {
                if let (Some(s), Some(p)) = (run_start, prev) {
                    groups.push((s, p));
                }
                run_start = Some(b);
                prev = Some(b);
            }
        }
    }
    if let (Some(s), Some(p)) = (run_start, prev) {
        groups.push((s, p));
    }

    let rendered: Vec<String> = groups
        .into_iter()
        .map(|(lo, hi)| {
            if lo == hi {
                format!("'{}'", format_byte(lo))
            } else {
                format!("'{}'..'{}'", format_byte(lo), format_byte(hi))
            }
        })
        .collect();

    format!("{{{}}}", rendered.join(","))
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", dump_set(self))
    }
}

#[cfg(test)]
mod tests;
