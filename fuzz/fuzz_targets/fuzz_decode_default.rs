#![no_main]
use buildinfo::{EmbeddedBlob, Options, decode_from_slice, read_build_info};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let opts = Options::default();
    let _ = decode_from_slice(data, &opts);
    let _ = read_build_info(&EmbeddedBlob(data), &opts);
});
