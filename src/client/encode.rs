// Percent-encoding for the `term` query parameter (RFC 3986, section 2.3)

/// Percent-encode every byte of the UTF-8 representation of `input` that is
/// outside the unreserved set `A-Z a-z 0-9 - _ . ~`, using uppercase hex.
pub fn percent_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}
