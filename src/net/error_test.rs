use super::*;

#[test]
fn status_401_maps_to_unauthorized() {
    let err = ApiError::from_response(401, r#"{"detail": "Could not validate credentials"}"#);
    assert_eq!(err, ApiError::Unauthorized);
}

#[test]
fn rejection_extracts_backend_detail() {
    let err = ApiError::from_response(400, r#"{"detail": "Sweet is out of stock"}"#);
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 400,
            detail: "Sweet is out of stock".to_owned()
        }
    );
}

#[test]
fn rejection_without_detail_body_falls_back_to_status_message() {
    let err = ApiError::from_response(500, "<html>oops</html>");
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 500,
            detail: "request failed: 500".to_owned()
        }
    );
}

#[test]
fn rejected_display_is_the_detail_message() {
    let err = ApiError::Rejected {
        status: 404,
        detail: "Sweet not found".to_owned(),
    };
    assert_eq!(err.to_string(), "Sweet not found");
}

#[test]
fn network_display_includes_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}
