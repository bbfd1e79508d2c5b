use super::{ParseError, ParserState, Request};

macro_rules! ready {
    ($request:ident, $input:expr) => {
        match $request.advance(&$input[..]) {
            Ok(0) => panic!("unexpected pending for {:?}", $input),
            Ok(consumed) => consumed,
            Err(err) => panic!("unexpected `Err`: {err:?}"),
        }
    };
}

#[test]
fn test_parse_reqline() {
    macro_rules! test {
        (#[pending] $input:literal) => {
            let mut request = Request::new();
            assert_eq!(request.advance(&$input[..]), Ok(0));
            assert_eq!(request.state(), &ParserState::Initialized);
        };
        (#[error($err:pat)] $input:literal) => {
            let mut request = Request::new();
            match request.advance(&$input[..]) {
                Err($err) => {}
                other => panic!("expected `{}` for {:?}, but got {other:?}", stringify!($err), $input),
            }
            assert!(request.request_line().is_none());
        };
        {
            $input:literal;
            $m:literal, $t:literal, $v:literal;
            $consumed:literal
        } => {
            let mut request = Request::new();
            let consumed = ready!(request, $input);
            let reqline = request.request_line().expect("request line is parsed");
            assert_eq!(reqline.method(), &$m[..]);
            assert_eq!(reqline.request_target(), &$t[..]);
            assert_eq!(reqline.http_version(), &$v[..]);
            assert_eq!(consumed, $consumed, "invalid consumed count");
        };
    }

    test! {
        b"GET /coffee HTTP/1.1\r\n";
        b"GET", b"/coffee", b"1.1";
        20
    };
    test! {
        b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
        b"GET", b"/", b"1.1";
        14
    };
    test! {
        b"POST /api/tasks?sort=desc HTTP/1.1\r\n";
        b"POST", b"/api/tasks?sort=desc", b"1.1";
        34
    };
    test! {
        b"OPTIONS * HTTP/1.1\r\n";
        b"OPTIONS", b"*", b"1.1";
        18
    };
    test! {
        b"CONNECT example.com:443 HTTP/1.1\r\n";
        b"CONNECT", b"example.com:443", b"1.1";
        32
    };

    // method check only rejects lowercase letters
    test! {
        b"M-SEARCH * HTTP/1.1\r\n";
        b"M-SEARCH", b"*", b"1.1";
        19
    };
    test! {
        b" / HTTP/1.1\r\n";
        b"", b"/", b"1.1";
        11
    };

    // fields are taken verbatim, no text encoding is assumed
    test! {
        b"GET /caf\xe9 HTTP/1.1\r\n";
        b"GET", b"/caf\xe9", b"1.1";
        18
    };
    test! {
        b"\xffGET / HTTP/1.1\r\n";
        b"\xffGET", b"/", b"1.1";
        15
    };

    // only the part after `/` is checked
    test! {
        b"GET / FOO/1.1\r\n";
        b"GET", b"/", b"1.1";
        13
    };

    test! { #[pending] b"" }
    test! { #[pending] b"GET" }
    test! { #[pending] b"GET / HTTP/1.1" }
    test! { #[pending] b"GET / HTTP/1.1\r" }
    test! { #[pending] b"GET / HTTP/1.1\n" }
    test! { #[pending] b"get / HTTP/1.1\n" }

    test! { #[error(ParseError::LowercaseMethod)] b"get / HTTP/1.1\r\n" }
    test! { #[error(ParseError::LowercaseMethod)] b"Get / HTTP/1.1\r\n" }
    test! { #[error(ParseError::UnsupportedVersion)] b"GET / HTTP/2\r\n" }
    test! { #[error(ParseError::UnsupportedVersion)] b"GET / HTTP/1.0\r\n" }
    test! { #[error(ParseError::UnsupportedVersion)] b"GET / HTTP/\r\n" }
    test! { #[error(ParseError::InvalidVersionFormat)] b"GET / HTTP1.1\r\n" }
    test! { #[error(ParseError::InvalidVersionFormat)] b"GET / HTTP/1/1\r\n" }
    test! { #[error(ParseError::FieldCount(2))] b"GET /\r\n" }
    test! { #[error(ParseError::FieldCount(1))] b"\r\n" }
    test! { #[error(ParseError::FieldCount(4))] b"GET  / HTTP/1.1\r\n" }
    test! { #[error(ParseError::FieldCount(4))] b"GET / HTTP/1.1 \r\n" }
}

#[test]
fn test_pending_then_complete() {
    let mut request = Request::new();
    assert_eq!(request.advance(b"GET / HTTP/1.1"), Ok(0));
    assert!(!request.is_done());
    assert_eq!(request.advance(b"GET / HTTP/1.1\r\n"), Ok(14));
    assert!(request.is_done());
}

#[test]
fn test_advance_after_done() {
    let mut request = Request::new();
    ready!(request, b"GET / HTTP/1.1\r\n");

    let inputs: [&[u8]; 3] = [b"", b"GET / HTTP/1.1\r\n", b"garbage"];
    for input in inputs {
        let err = request.advance(input).unwrap_err();
        assert_eq!(err, ParseError::Completed);
        assert!(!err.is_malformed());
    }

    // still holds the first request line
    let reqline = request.into_request_line().unwrap();
    assert_eq!(reqline.to_string(), "GET / HTTP/1.1");
}

#[test]
fn test_fragmented_input() {
    const INPUT: &[u8] = b"GET /coffee HTTP/1.1\r\n";

    let mut whole = Request::new();
    ready!(whole, INPUT);
    let expected = whole.into_request_line().unwrap();

    // grow the offered prefix one byte at a time, as a driver would
    let mut request = Request::new();
    for end in 1..INPUT.len() {
        assert_eq!(request.advance(&INPUT[..end]), Ok(0), "pending at {end}");
    }
    assert_eq!(request.advance(INPUT), Ok(20));
    assert_eq!(request.request_line(), Some(&expected));
}

#[test]
fn test_non_utf8_fields() {
    let mut request = Request::new();
    assert_eq!(request.advance(b"GET /caf\xe9 HTTP/1.1\r\n"), Ok(18));

    let reqline = request.into_request_line().unwrap();
    assert_eq!(reqline.request_target(), b"/caf\xe9");
    assert!(reqline.request_target_str().is_err());
    assert_eq!(reqline.method_str(), Ok("GET"));
    assert_eq!(reqline.http_version_str(), "1.1");
    assert_eq!(reqline.to_string(), "GET /caf\u{fffd} HTTP/1.1");
}

#[test]
fn test_malformed_classification() {
    for err in [
        ParseError::FieldCount(2),
        ParseError::LowercaseMethod,
        ParseError::InvalidVersionFormat,
        ParseError::UnsupportedVersion,
    ] {
        assert!(err.is_malformed());
        assert!(err.to_string().starts_with("malformed request line"));
    }
}
