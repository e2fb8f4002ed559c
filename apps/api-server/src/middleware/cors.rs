//! Cross-origin policy.

use actix_cors::Cors;

/// Accept requests from any origin with any method and header.
pub fn permissive() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
