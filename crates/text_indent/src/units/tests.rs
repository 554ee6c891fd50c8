use super::*;

// === Whitespace ===

#[test]
fn whitespace_literals() {
    assert_eq!(Whitespace::Space.as_str(), " ");
    assert_eq!(Whitespace::Tab.as_str(), "\t");
}

#[test]
fn whitespace_repeat() {
    assert_eq!(Whitespace::Space.repeat(4), "    ");
    assert_eq!(Whitespace::Tab.repeat(2), "\t\t");
    assert_eq!(Whitespace::Tab.repeat(0), "");
}

#[test]
fn whitespace_parse() {
    assert_eq!("space".parse::<Whitespace>().ok(), Some(Whitespace::Space));
    assert_eq!("TAB".parse::<Whitespace>().ok(), Some(Whitespace::Tab));
    assert_eq!("tabs".parse::<Whitespace>().ok(), Some(Whitespace::Tab));
}

#[test]
fn whitespace_parse_unknown() {
    let err = "nbsp".parse::<Whitespace>().err();
    assert!(matches!(
        err,
        Some(IndentError::UnknownUnit { kind: "whitespace", ref name }) if name == "nbsp"
    ));
}

#[test]
fn whitespace_display_parses_back() {
    for ws in [Whitespace::Space, Whitespace::Tab] {
        assert_eq!(ws.to_string().parse::<Whitespace>().ok(), Some(ws));
    }
}

// === LineBreak ===

#[test]
fn line_break_literals() {
    assert_eq!(LineBreak::Unix.as_str(), "\n");
    assert_eq!(LineBreak::Windows.as_str(), "\r\n");
}

#[test]
fn system_line_break_matches_host() {
    let expected = if cfg!(windows) { "\r\n" } else { "\n" };
    assert_eq!(LineBreak::System.as_str(), expected);
    assert_eq!(LineBreak::default(), LineBreak::System);
}

#[test]
fn line_break_parse_aliases() {
    assert_eq!("lf".parse::<LineBreak>().ok(), Some(LineBreak::Unix));
    assert_eq!("CRLF".parse::<LineBreak>().ok(), Some(LineBreak::Windows));
    assert_eq!("native".parse::<LineBreak>().ok(), Some(LineBreak::System));
}

#[test]
fn line_break_parse_unknown() {
    let err = "mac".parse::<LineBreak>().err();
    assert!(err.is_some_and(|e| e.is_invalid_argument()));
}
