#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::model::Module;

pub const PATH_KEYWORD: &str = "path";
pub const MOD_KEYWORD: &str = "mod";
pub const DEP_KEYWORD: &str = "dep";
pub const REPLACE_KEYWORD: &str = "=>";

pub struct LineWriter {
    out: String,
}

impl LineWriter {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    fn write_head(&mut self, keyword: &str, m: &Module) {
        self.out.push_str(keyword);
        self.out.push('\t');
        self.out.push_str(&m.path);
        self.out.push('\t');
        self.out.push_str(m.effective_version());
    }

    pub fn line_path(&mut self, path: &str) {
        self.out.push_str(PATH_KEYWORD);
        self.out.push('\t');
        self.out.push_str(path);
        self.out.push('\n');
    }

    /// Three-column line; any nested replacement is not representable.
    pub fn line_replacement(&mut self, m: &Module) {
        self.write_head(REPLACE_KEYWORD, m);
        self.out.push('\t');
        self.out.push_str(&m.checksum);
        self.out.push('\n');
    }

    /// A replaced module drops its checksum column and is followed by its
    /// `=>` line and then the entry's own terminator, leaving an empty line.
    pub fn line_module(&mut self, keyword: &str, m: &Module) {
        self.write_head(keyword, m);
        match &m.replace {
            None => {
                self.out.push('\t');
                self.out.push_str(&m.checksum);
            }
            Some(rep) => {
                self.out.push('\n');
                self.line_replacement(rep);
            }
        }
        self.out.push('\n');
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for LineWriter {
    fn default() -> Self {
        Self::new()
    }
}
