#![no_main]
use buildinfo::{BuildInfo, Module, Options, decode_from_str, encode_to_string};
use libfuzzer_sys::{arbitrary, fuzz_target};
use arbitrary::Arbitrary;

const MAX_DEPS: usize = 32;

#[derive(Arbitrary, Debug)]
struct FuzzModule {
    path: String,
    version: String,
    checksum: String,
    replace: Option<(String, String, String)>,
}

fn clean(s: &str) -> String {
    s.chars().filter(|c| *c != '\t' && *c != '\n').collect()
}

/// Path and version must be non-empty to survive a round trip.
fn field(s: &str, fallback: &str) -> String {
    let cleaned = clean(s);
    if cleaned.is_empty() { fallback.to_string() } else { cleaned }
}

impl FuzzModule {
    fn to_module(&self) -> Module {
        let m = Module::new(field(&self.path, "p"), field(&self.version, "v"));
        match &self.replace {
            Some((path, version, sum)) => {
                m.with_replace(Module::new(field(path, "r"), field(version, "v")).with_checksum(clean(sum)))
            }
            None => m.with_checksum(clean(&self.checksum)),
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);
    let Ok(path) = u.arbitrary::<String>() else { return };
    let Ok(main) = u.arbitrary::<FuzzModule>() else { return };
    let Ok(n) = u.int_in_range(0..=MAX_DEPS) else { return };

    let mut info = BuildInfo::new(path.replace('\n', ""), main.to_module());
    for _ in 0..n {
        match u.arbitrary::<FuzzModule>() {
            Ok(dep) => info.deps.push(dep.to_module()),
            Err(_) => break,
        }
    }

    let encoded = encode_to_string(&info);
    match decode_from_str(&encoded, &Options::default()) {
        Ok(decoded) => {
            if decoded != info {
                panic!(
                    "Structured roundtrip mismatch!\nOriginal: {:?}\nEncoded:\n{}\nDecoded: {:?}",
                    info, encoded, decoded
                );
            }
        }
        Err(e) => {
            panic!("Failed to decode structured input!\nEncoded:\n{}\nError: {}", encoded, e);
        }
    }
});
