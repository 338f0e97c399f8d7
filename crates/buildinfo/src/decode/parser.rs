use crate::decode::scanner::{Columns, LineKind, byte_lines, classify, has_keyword, iter};

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::ToString};

use crate::error::{Error, FormatCause, Result};
use crate::model::{BuildInfo, Module};
use crate::options::Options;

/// The module most recently introduced by a `mod` or `dep` line that has
/// not yet received its `=>` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    None,
    Main,
    Dep(usize),
}

pub struct Parser {
    info: BuildInfo,
    target: Target,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            info: BuildInfo::default(),
            target: Target::None,
        }
    }

    fn read_module(cols: &Columns<'_>, line: usize) -> Result<Module> {
        if cols.len() != 2 && cols.len() != 3 {
            return Err(Error::format(
                line,
                FormatCause::ModuleColumns { got: cols.len() },
            ));
        }
        Ok(Module::new(cols.get(0), cols.get(1)).with_checksum(cols.get(2)))
    }

    fn attach_replacement(&mut self, cols: &Columns<'_>, line: usize) -> Result<()> {
        if cols.len() != 3 {
            return Err(Error::format(
                line,
                FormatCause::ReplaceColumns { got: cols.len() },
            ));
        }
        let replacement = Module::new(cols.get(0), cols.get(1)).with_checksum(cols.get(2));
        let owner = match self.target {
            Target::None => return Err(Error::format(line, FormatCause::OrphanReplace)),
            Target::Main => &mut self.info.main,
            Target::Dep(idx) => &mut self.info.deps[idx],
        };
        owner.replace = Some(Box::new(replacement));
        self.target = Target::None;
        Ok(())
    }

    /// Feed one classified line. Errors are terminal for the whole input.
    pub fn feed(&mut self, number: usize, kind: &LineKind<'_>) -> Result<()> {
        match kind {
            LineKind::Path(rest) => {
                self.info.path = rest.to_string();
            }
            LineKind::Mod(cols) => {
                self.info.main = Self::read_module(cols, number)?;
                self.target = Target::Main;
            }
            LineKind::Dep(cols) => {
                let dep = Self::read_module(cols, number)?;
                self.info.deps.push(dep);
                self.target = Target::Dep(self.info.deps.len() - 1);
            }
            LineKind::Replace(cols) => self.attach_replacement(cols, number)?,
            LineKind::Other(_line) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(line = number, content = %_line, "ignoring unrecognized line");
            }
        }
        Ok(())
    }

    pub fn finish(self) -> BuildInfo {
        self.info
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_build_info(input: &str, options: &Options) -> Result<BuildInfo> {
    let mut parser = Parser::new();
    for line in iter(input, options.trailing_line) {
        parser.feed(line.number, &line.kind)?;
    }
    Ok(parser.finish())
}

/// Like [`parse_build_info`], but over raw bytes. Only lines starting with a
/// keyword must be UTF-8; other lines are skipped undecoded.
pub fn parse_build_info_slice(input: &[u8], options: &Options) -> Result<BuildInfo> {
    let mut parser = Parser::new();
    for (number, raw) in byte_lines(input, options.trailing_line) {
        let kind = if has_keyword(raw) {
            let line = core::str::from_utf8(raw)
                .map_err(|_| Error::format(number, FormatCause::InvalidUtf8))?;
            classify(line)
        } else {
            LineKind::Other(core::str::from_utf8(raw).unwrap_or_default())
        };
        parser.feed(number, &kind)?;
    }
    Ok(parser.finish())
}
