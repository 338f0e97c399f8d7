#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placeholder written in place of an empty module version.
pub const DEVEL_VERSION: &str = "(devel)";

/// A versioned module, optionally redirected by a `=>` directive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Module {
    pub path: String,
    /// May be empty; rendered as `(devel)` when encoded.
    pub version: String,
    /// Opaque integrity token, empty when not applicable.
    pub checksum: String,
    /// The text format carries a single level of replacement. A replacement's
    /// own `replace` is never written and never produced by the decoder.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub replace: Option<Box<Module>>,
}

impl Module {
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
            checksum: String::new(),
            replace: None,
        }
    }

    pub fn with_checksum(mut self, checksum: impl Into<String>) -> Self {
        self.checksum = checksum.into();
        self
    }

    pub fn with_replace(mut self, replacement: Module) -> Self {
        self.replace = Some(Box::new(replacement));
        self
    }

    /// The version as it appears on the wire.
    pub fn effective_version(&self) -> &str {
        if self.version.is_empty() {
            DEVEL_VERSION
        } else {
            &self.version
        }
    }
}

/// Module graph recorded in a compiled program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BuildInfo {
    /// Import path of the main program; empty when unknown.
    pub path: String,
    /// Module containing the main program; zero value when absent.
    pub main: Module,
    /// Dependencies in order of appearance. Duplicates are kept.
    pub deps: Vec<Module>,
}

impl BuildInfo {
    pub fn new(path: impl Into<String>, main: Module) -> Self {
        Self {
            path: path.into(),
            main,
            deps: Vec::new(),
        }
    }

    pub fn with_dep(mut self, dep: Module) -> Self {
        self.deps.push(dep);
        self
    }
}

impl core::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&crate::encode::encode_build_info(self))
    }
}

impl core::str::FromStr for BuildInfo {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::decode::parser::parse_build_info(s, &crate::options::Options::default())
    }
}
