/// What to do with a final line that has no terminating newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingLine {
    /// Drop it silently
    #[default]
    Ignore,
    /// Classify it like any other line
    Accept,
}

/// Width in bytes of each framing marker around an embedded blob.
pub const DEFAULT_MARKER_LEN: usize = 16;

#[derive(Debug, Clone)]
pub struct Options {
    /// Bytes stripped from each end of a located blob (default: 16)
    pub marker_len: usize,
    pub trailing_line: TrailingLine,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            marker_len: DEFAULT_MARKER_LEN,
            trailing_line: TrailingLine::Ignore,
        }
    }
}
