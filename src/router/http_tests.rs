//! Tests for HTTP request/response types.

use super::{HttpRequest, HttpResponse};

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let url = url::Url::parse("http://192.168.1.1:5000/soap/server_sa").unwrap();
        let req = HttpRequest::new(http::Method::PUT, url.clone());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, url);
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn post_creates_post_request() {
        let url = url::Url::parse("http://192.168.1.1:5000/").unwrap();
        let req = HttpRequest::post(url);

        assert_eq!(req.method, http::Method::POST);
    }

    #[test]
    fn builder_sets_body_and_headers() {
        let url = url::Url::parse("http://192.168.1.1:5000/").unwrap();
        let req = HttpRequest::post(url)
            .with_body(b"<x/>".to_vec())
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("text/xml"),
            );

        assert_eq!(req.body.as_deref(), Some(&b"<x/>"[..]));
        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "text/xml"
        );
    }

    #[test]
    fn with_header_appends_multiple_values_for_same_name() {
        let url = url::Url::parse("http://192.168.1.1:5000/").unwrap();
        let req = HttpRequest::post(url)
            .with_header(http::header::ACCEPT, http::HeaderValue::from_static("text/xml"))
            .with_header(http::header::ACCEPT, http::HeaderValue::from_static("*/*"));

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }
}

mod http_response {
    use super::*;

    #[test]
    fn ok_is_success() {
        let resp = HttpResponse::ok("<Envelope/>");

        assert!(resp.is_success());
        assert_eq!(resp.body_text(), "<Envelope/>");
    }

    #[test]
    fn server_error_is_not_success() {
        let resp = HttpResponse::new(http::StatusCode::INTERNAL_SERVER_ERROR, vec![]);

        assert!(!resp.is_success());
    }

    #[test]
    fn body_text_replaces_invalid_utf8() {
        let resp = HttpResponse::ok(vec![b'a', 0xff, b'b']);

        assert_eq!(resp.body_text(), "a\u{fffd}b");
    }
}
