use musigraph::{ConsoleAuthorizer, colors::ColorScheme};
use musigraph_core::{Authorizer, MusigraphError};
use std::io::Cursor;

#[test]
fn test_confirmation_line_completes_authorization() {
    let colors = ColorScheme::new(false);
    let mut authorizer = ConsoleAuthorizer::new(Cursor::new(b"\n".to_vec()), &colors).without_browser();

    assert!(authorizer
        .authorize("http://www.last.fm/api/auth/?api_key=k&token=t")
        .is_ok());
}

#[test]
fn test_closed_input_fails_authorization() {
    let colors = ColorScheme::new(false);
    let mut authorizer = ConsoleAuthorizer::new(Cursor::new(Vec::new()), &colors).without_browser();

    let err = authorizer
        .authorize("http://www.last.fm/api/auth/?api_key=k&token=t")
        .unwrap_err();
    assert!(matches!(err, MusigraphError::Authorization(_)));
}
