//! Encoding pipeline: canonical text for a [`BuildInfo`]

pub mod writer;

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::model::BuildInfo;
use writer::{DEP_KEYWORD, LineWriter, MOD_KEYWORD};

fn estimate_len(info: &BuildInfo) -> usize {
    let per_module = |m: &crate::model::Module| {
        let own = m.path.len() + m.version.len() + m.checksum.len() + 16;
        own + m
            .replace
            .as_ref()
            .map_or(0, |r| r.path.len() + r.version.len() + r.checksum.len() + 16)
    };
    info.path.len() + 8 + per_module(&info.main) + info.deps.iter().map(per_module).sum::<usize>()
}

pub fn encode_build_info(info: &BuildInfo) -> String {
    let mut w = LineWriter::with_capacity(estimate_len(info));
    if !info.path.is_empty() {
        w.line_path(&info.path);
    }
    if !info.main.path.is_empty() {
        w.line_module(MOD_KEYWORD, &info.main);
    }
    for dep in &info.deps {
        w.line_module(DEP_KEYWORD, dep);
    }
    w.into_string()
}
