#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::options::TrailingLine;

pub const PATH_PREFIX: &str = "path\t";
pub const MOD_PREFIX: &str = "mod\t";
pub const DEP_PREFIX: &str = "dep\t";
pub const REPLACE_PREFIX: &str = "=>\t";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    /// 1-based position in the whole input, counting ignored lines.
    pub number: usize,
    pub kind: LineKind<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Path(&'a str),
    Mod(Columns<'a>),
    Dep(Columns<'a>),
    Replace(Columns<'a>),
    Other(&'a str),
}

/// Tab-separated fields after a line's keyword. Only the first three are
/// kept, since no line kind accepts more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns<'a> {
    count: usize,
    fields: [&'a str; 3],
}

impl<'a> Columns<'a> {
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Field `idx`, or `""` when the line has fewer columns.
    pub fn get(&self, idx: usize) -> &'a str {
        self.fields.get(idx).copied().unwrap_or("")
    }
}

#[inline]
#[cfg(feature = "perf_memchr")]
fn find_newline(s: &[u8]) -> Option<usize> {
    memchr::memchr(b'\n', s)
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn find_newline(s: &[u8]) -> Option<usize> {
    s.iter().position(|&b| b == b'\n')
}

#[cfg(feature = "perf_memchr")]
fn split_columns(rest: &str) -> Columns<'_> {
    let mut fields = [""; 3];
    let mut count = 0usize;
    let mut start = 0usize;
    for pos in memchr::memchr_iter(b'\t', rest.as_bytes()) {
        if count < 3 {
            fields[count] = &rest[start..pos];
        }
        count += 1;
        start = pos + 1;
    }
    if count < 3 {
        fields[count] = &rest[start..];
    }
    Columns {
        count: count + 1,
        fields,
    }
}

#[cfg(not(feature = "perf_memchr"))]
fn split_columns(rest: &str) -> Columns<'_> {
    let mut fields = [""; 3];
    let mut count = 0usize;
    for col in rest.split('\t') {
        if let Some(slot) = fields.get_mut(count) {
            *slot = col;
        }
        count += 1;
    }
    Columns { count, fields }
}

pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(rest) = line.strip_prefix(PATH_PREFIX) {
        return LineKind::Path(rest);
    }
    if let Some(rest) = line.strip_prefix(MOD_PREFIX) {
        return LineKind::Mod(split_columns(rest));
    }
    if let Some(rest) = line.strip_prefix(DEP_PREFIX) {
        return LineKind::Dep(split_columns(rest));
    }
    if let Some(rest) = line.strip_prefix(REPLACE_PREFIX) {
        return LineKind::Replace(split_columns(rest));
    }
    LineKind::Other(line)
}

/// Whether a raw line starts with one of the four keyword prefixes. The
/// prefixes are ASCII, so this needs no UTF-8 decoding.
pub fn has_keyword(line: &[u8]) -> bool {
    [PATH_PREFIX, MOD_PREFIX, DEP_PREFIX, REPLACE_PREFIX]
        .iter()
        .any(|prefix| line.starts_with(prefix.as_bytes()))
}

pub fn scan<'a>(input: &'a str, trailing: TrailingLine) -> Vec<ScannedLine<'a>> {
    iter(input, trailing).collect()
}

pub struct LineIter<'a> {
    rest: &'a str,
    number: usize,
    trailing: TrailingLine,
}

pub fn iter(input: &str, trailing: TrailingLine) -> LineIter<'_> {
    LineIter {
        rest: input,
        number: 0,
        trailing,
    }
}

impl<'a> Iterator for LineIter<'a> {
    type Item = ScannedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let line = match find_newline(self.rest.as_bytes()) {
            Some(pos) => {
                let (line, remaining) = self.rest.split_at(pos);
                self.rest = &remaining[1..];
                line
            }
            None => {
                let line = self.rest;
                self.rest = "";
                match self.trailing {
                    TrailingLine::Ignore => return None,
                    TrailingLine::Accept => line,
                }
            }
        };
        self.number += 1;
        Some(ScannedLine {
            number: self.number,
            kind: classify(line),
        })
    }
}

/// Undecoded lines with their 1-based numbers, split like [`LineIter`].
pub struct ByteLineIter<'a> {
    rest: &'a [u8],
    number: usize,
    trailing: TrailingLine,
}

pub fn byte_lines(input: &[u8], trailing: TrailingLine) -> ByteLineIter<'_> {
    ByteLineIter {
        rest: input,
        number: 0,
        trailing,
    }
}

impl<'a> Iterator for ByteLineIter<'a> {
    type Item = (usize, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let line = match find_newline(self.rest) {
            Some(pos) => {
                let (line, remaining) = self.rest.split_at(pos);
                self.rest = &remaining[1..];
                line
            }
            None => {
                let line = self.rest;
                self.rest = &[];
                match self.trailing {
                    TrailingLine::Ignore => return None,
                    TrailingLine::Accept => line,
                }
            }
        };
        self.number += 1;
        Some((self.number, line))
    }
}
