use super::*;
use crate::ErrorKind;

/// Writer that refuses every write.
struct Closed;

impl io::Write for Closed {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Write for Closed {
    fn write_str(&mut self, _s: &str) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[test]
fn string_sink_appends() {
    let mut out = String::from("a");
    assert!(out.append("b").is_ok());
    assert!(out.append("").is_ok());
    assert_eq!(out, "ab");
}

#[test]
fn mut_ref_forwards() {
    fn append_twice<S: Sink>(mut sink: S, text: &str) -> Result<(), IndentError> {
        sink.append(text)?;
        sink.append(text)
    }

    let mut out = String::new();
    assert!(append_twice(&mut out, "x").is_ok());
    assert_eq!(out, "xx");
}

#[test]
fn fmt_sink_appends() {
    let mut sink = FmtSink::new(String::new());
    assert!(sink.append("\t").is_ok());
    assert!(sink.append("\t").is_ok());
    assert_eq!(sink.get_ref(), "\t\t");
    assert_eq!(sink.into_inner(), "\t\t");
}

#[test]
fn io_sink_appends_utf8() {
    let mut sink = IoSink::new(Vec::new());
    assert!(sink.append("\r\n").is_ok());
    assert!(sink.append("\u{3000}").is_ok());
    assert_eq!(sink.get_ref().len(), 5);
    assert_eq!(sink.into_inner(), "\r\n\u{3000}".as_bytes());
}

#[test]
fn io_failure_is_propagated() {
    let mut sink = IoSink::new(Closed);
    let err = sink.append("  ").err();
    assert!(matches!(
        err,
        Some(IndentError::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe
    ));
}

#[test]
fn fmt_failure_is_propagated() {
    let mut sink = FmtSink::new(Closed);
    let err = sink.append("  ").err();
    assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::IoFailure));
}
