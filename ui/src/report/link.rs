//! Export link derivation.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::selection::{self, Selection};

/// Characters `encodeURIComponent` leaves untouched, besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const FILTER_PARAM: &str = "filter";

pub fn encode_uri_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Adds `?filter=` only for a proper, non-empty subset. An empty selection
/// falls through to the unfiltered link exactly like a full one.
pub fn build_export_url(base_url: &str, selection: &Selection, person_list: &[String]) -> String {
    let people = selection::distinct_people(person_list);
    if !selection.is_empty() && selection.len() < people {
        let joined = selection.as_slice().join(",");
        format!("{base_url}?{FILTER_PARAM}={}", encode_uri_component(&joined))
    } else {
        base_url.to_string()
    }
}
