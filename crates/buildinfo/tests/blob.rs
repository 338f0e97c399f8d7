use buildinfo::blob::strip_framing;
use buildinfo::{BuildInfo, EmbeddedBlob, FormatCause, Module, Options, read_build_info, try_read_build_info};

const MARKER: [u8; 16] = *b"\x30\x77\xaf\x0c\x92\x74\x08\x02\x41\xe1\xc1\x07\xe6\xd6\x18\xe6";

fn framed(payload: &[u8]) -> Vec<u8> {
    let mut blob = MARKER.to_vec();
    blob.extend_from_slice(payload);
    blob.extend_from_slice(&MARKER);
    blob
}

#[test]
fn blob_shorter_than_framing_is_absent() -> Result<(), Box<dyn std::error::Error>> {
    let blob = vec![0u8; 31];
    assert_eq!(strip_framing(&blob, 16), None);
    assert_eq!(try_read_build_info(&EmbeddedBlob(&blob), &Options::default())?, None);
    assert_eq!(read_build_info(&EmbeddedBlob(&blob), &Options::default()), None);
    Ok(())
}

#[test]
fn bare_framing_is_empty_info() -> Result<(), Box<dyn std::error::Error>> {
    let blob = framed(b"");
    assert_eq!(blob.len(), 32);
    assert_eq!(strip_framing(&blob, 16), Some(&b""[..]));
    let info = try_read_build_info(&EmbeddedBlob(&blob), &Options::default())?;
    assert_eq!(info, Some(BuildInfo::default()));
    Ok(())
}

#[test]
fn framed_payload_is_decoded() -> Result<(), Box<dyn std::error::Error>> {
    let blob = framed(b"path\tex.com/cmd\nmod\tex.com\tv1\th1:m=\ndep\tex.com/a\tv2\t\n");
    let info = read_build_info(&EmbeddedBlob(&blob), &Options::default()).ok_or("no build info")?;
    assert_eq!(info.path, "ex.com/cmd");
    assert_eq!(info.main, Module::new("ex.com", "v1").with_checksum("h1:m="));
    assert_eq!(info.deps, vec![Module::new("ex.com/a", "v2")]);
    Ok(())
}

#[test]
fn missing_blob_is_absent() -> Result<(), Box<dyn std::error::Error>> {
    let source = || None::<Vec<u8>>;
    assert_eq!(try_read_build_info(&source, &Options::default())?, None);
    assert_eq!(read_build_info(&source, &Options::default()), None);
    Ok(())
}

#[test]
fn closure_source_is_called() -> Result<(), Box<dyn std::error::Error>> {
    let source = || Some(framed(b"dep\tA\tv1\t\n"));
    let info = try_read_build_info(&source, &Options::default())?.ok_or("no build info")?;
    assert_eq!(info.deps.len(), 1);
    Ok(())
}

#[test]
fn malformed_payload_is_an_error_but_reads_as_absent() {
    let blob = framed(b"=>\tA\tv1\tsum\n");
    let err = try_read_build_info(&EmbeddedBlob(&blob), &Options::default()).unwrap_err();
    assert_eq!(err.line(), Some(1));
    assert_eq!(err.cause(), Some(FormatCause::OrphanReplace));
    assert_eq!(read_build_info(&EmbeddedBlob(&blob), &Options::default()), None);
}

#[test]
fn non_utf8_comment_in_payload_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let blob = framed(b"# \xfe\nmod\tA\tv1\t\n");
    let info = read_build_info(&EmbeddedBlob(&blob), &Options::default()).ok_or("no build info")?;
    assert_eq!(info.main, Module::new("A", "v1"));
    Ok(())
}

#[test]
fn marker_len_is_configurable() -> Result<(), Box<dyn std::error::Error>> {
    let blob = b"[[path\tx\n]]";
    let opts = Options {
        marker_len: 2,
        ..Options::default()
    };
    let info = try_read_build_info(&EmbeddedBlob(blob), &opts)?.ok_or("no build info")?;
    assert_eq!(info.path, "x");
    assert_eq!(strip_framing(b"abc", 2), None);
    assert_eq!(strip_framing(b"abcd", 2), Some(&b""[..]));
    Ok(())
}
