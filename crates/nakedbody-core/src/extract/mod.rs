//! Body extraction from captured messages.
//!
//! Bodies are taken as-is from the body offset onwards. Url-encoded form
//! requests are form-decoded; no other transfer or content coding is undone.

mod form;

pub use form::form_urldecode;

use std::borrow::Cow;

use crate::message::{Direction, HttpMessage};

/// Returns the body of `message`, or `None` when it has no body bytes.
///
/// With `decode_form` the body is form URL-decoded before being returned.
pub fn extract_body(message: &HttpMessage, decode_form: bool) -> Option<Cow<'_, [u8]>> {
    if !message.has_body() {
        return None;
    }
    let body = &message.raw()[message.body_offset()..];
    if decode_form {
        Some(Cow::Owned(form_urldecode(body)))
    } else {
        Some(Cow::Borrowed(body))
    }
}

/// Whether a message on `direction` gets form-decoded on extraction.
/// Only requests declaring url-encoded form data qualify.
pub fn needs_form_decoding(message: &HttpMessage, direction: Direction) -> bool {
    direction == Direction::Request && message.is_form_urlencoded()
}

/// Extracts the body the way the saver writes it for `direction`.
pub fn extract_for(message: &HttpMessage, direction: Direction) -> Option<Cow<'_, [u8]>> {
    extract_body(message, needs_form_decoding(message, direction))
}
