//! Access to build info embedded in a host binary.
//!
//! The host environment owns the raw blob: a string whose payload is
//! surrounded by fixed-width marker bytes. This module only trims the
//! framing and hands the payload to the decoder; locating the blob is
//! delegated to a [`BlobSource`].

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::decode::parser::parse_build_info_slice;
use crate::error::Result;
use crate::model::BuildInfo;
use crate::options::Options;

/// Supplies the raw embedded blob, or `None` when the host has none.
pub trait BlobSource {
    fn blob(&self) -> Option<Vec<u8>>;
}

impl<F> BlobSource for F
where
    F: Fn() -> Option<Vec<u8>>,
{
    fn blob(&self) -> Option<Vec<u8>> {
        self()
    }
}

/// A blob that has already been pulled out of the binary.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedBlob<'a>(pub &'a [u8]);

impl BlobSource for EmbeddedBlob<'_> {
    fn blob(&self) -> Option<Vec<u8>> {
        Some(self.0.to_vec())
    }
}

/// Payload between the leading and trailing markers. `None` when the blob is
/// too short to hold both markers.
pub fn strip_framing(blob: &[u8], marker_len: usize) -> Option<&[u8]> {
    let framing = marker_len.checked_mul(2)?;
    if blob.len() < framing {
        return None;
    }
    Some(&blob[marker_len..blob.len() - marker_len])
}

/// Absence (`Ok(None)`) is distinct from a malformed payload (`Err`).
pub fn try_read_build_info<S: BlobSource + ?Sized>(
    source: &S,
    options: &Options,
) -> Result<Option<BuildInfo>> {
    let Some(blob) = source.blob() else {
        #[cfg(feature = "tracing")]
        tracing::debug!("no build info blob present");
        return Ok(None);
    };
    let Some(payload) = strip_framing(&blob, options.marker_len) else {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            len = blob.len(),
            marker_len = options.marker_len,
            "build info blob shorter than its framing"
        );
        return Ok(None);
    };
    parse_build_info_slice(payload, options).map(Some)
}

/// Build info of the host binary, or `None` if it is absent or unreadable.
pub fn read_build_info<S: BlobSource + ?Sized>(source: &S, options: &Options) -> Option<BuildInfo> {
    match try_read_build_info(source, options) {
        Ok(info) => info,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_err, "discarding malformed build info");
            None
        }
    }
}
