//! Integration tests for console sinks backed by real files.

use std::fs;
use std::io::{Seek, SeekFrom};

use logging_sink::{ConsoleSink, LineMode, LineSink};

/// Lines are flushed to disk on every append, so a reader sees them
/// immediately without dropping the sink.
#[test]
fn appended_lines_are_visible_before_drop() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    let sink = ConsoleSink::new(file.reopen().expect("reopen"));

    sink.append("DLOG [main.rs:1] main - one").expect("append");
    sink.append("DLOG [main.rs:2] main - two").expect("append");

    let contents = fs::read_to_string(file.path()).expect("read back");
    assert_eq!(
        contents,
        "DLOG [main.rs:1] main - one\nDLOG [main.rs:2] main - two\n"
    );
}

/// `LineMode::WithoutNewline` writes bytes exactly as given.
#[test]
fn without_newline_writes_raw_bytes() {
    let file = tempfile::tempfile().expect("temp file");
    let sink = ConsoleSink::with_line_mode(file, LineMode::WithoutNewline);
    sink.append("abc").expect("append");
    sink.append("def").expect("append");

    let mut file = sink.into_inner();
    file.seek(SeekFrom::Start(0)).expect("rewind");
    let contents = std::io::read_to_string(file).expect("read back");
    assert_eq!(contents, "abcdef");
}

/// Unicode glyphs survive the round trip through the writer untouched.
#[test]
fn unicode_lines_are_written_verbatim() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    let sink = ConsoleSink::new(file.reopen().expect("reopen"));
    sink.append("DLOG 🔴 [a.rs:3] f - ünïcödé").expect("append");

    let contents = fs::read_to_string(file.path()).expect("read back");
    assert_eq!(contents.trim_end(), "DLOG 🔴 [a.rs:3] f - ünïcödé");
}
