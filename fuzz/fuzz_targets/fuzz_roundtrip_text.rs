#![no_main]
use buildinfo::{Options, decode_from_slice, decode_from_str, encode_to_string};
use libfuzzer_sys::fuzz_target;

// Decoding arbitrary text is lossy (replaced checksums, empty versions,
// unnamed main module), but one encode/decode cycle reaches a fixed point.
fuzz_target!(|data: &[u8]| {
    let opts = Options::default();
    if let Ok(first) = decode_from_slice(data, &opts) {
        let encoded = encode_to_string(&first);
        match decode_from_str(&encoded, &opts) {
            Ok(second) => {
                let reencoded = encode_to_string(&second);
                if encoded != reencoded {
                    panic!(
                        "Text roundtrip mismatch!\nFirst encode:\n{}\nSecond encode:\n{}",
                        encoded, reencoded
                    );
                }
            }
            Err(e) => {
                panic!(
                    "Failed to decode re-encoded build info!\nEncoded:\n{}\nError: {}",
                    encoded, e
                );
            }
        }
    }
});
