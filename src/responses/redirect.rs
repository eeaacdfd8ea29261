use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

/// 303 back to `location`, optionally rewriting a cookie on the way.
pub fn see_other(location: &str, set_cookie: Option<&str>) -> ResultResp {
    let mut builder = ResponseBuilder::new()
        .status(303)
        .header("Location", location);

    if let Some(cookie) = set_cookie {
        builder = builder.header("Set-Cookie", cookie);
    }

    builder
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
