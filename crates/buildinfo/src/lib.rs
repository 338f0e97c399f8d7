#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod blob;
pub mod decode;
pub mod encode;
pub mod error;
pub mod model;
pub mod options;

pub use crate::blob::{BlobSource, EmbeddedBlob, read_build_info, try_read_build_info};
pub use crate::error::{Error, FormatCause, Result};
pub use crate::model::{BuildInfo, DEVEL_VERSION, Module};
pub use crate::options::{Options, TrailingLine};

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

#[cfg(feature = "std")]
use std::io::{Read, Write};

pub fn decode_from_str(s: &str, options: &Options) -> Result<BuildInfo> {
    crate::decode::parser::parse_build_info(s, options)
}

pub fn decode_from_slice(bytes: &[u8], options: &Options) -> Result<BuildInfo> {
    crate::decode::parser::parse_build_info_slice(bytes, options)
}

#[cfg(feature = "std")]
pub fn decode_from_reader<R: Read>(mut reader: R, options: &Options) -> Result<BuildInfo> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    decode_from_slice(&buf, options)
}

pub fn encode_to_string(info: &BuildInfo) -> String {
    crate::encode::encode_build_info(info)
}

pub fn encode_to_vec(info: &BuildInfo) -> Vec<u8> {
    encode_to_string(info).into_bytes()
}

#[cfg(feature = "std")]
pub fn encode_to_writer<W: Write>(mut writer: W, info: &BuildInfo) -> Result<()> {
    writer.write_all(encode_to_string(info).as_bytes())?;
    Ok(())
}
