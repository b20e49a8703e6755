/// Opening marker up to the embedded language code
const START_PREFIX: &str = "<? START-LANG [";
/// Closes the opening marker after the language code
const START_SUFFIX: &str = "] ?>";
/// End-of-region marker
const END_MARKER: &str = "<? END-LANG ?>";

/// Length of the embedded language code
const LANG_LEN: usize = 2;

/// Resolve inline language regions inside file content.
///
/// A region looks like `<? START-LANG [en] ?>text<? END-LANG ?>`. A
/// region whose code equals `lang_id` collapses to its inner text; any
/// other region is removed entirely. Text outside regions passes through
/// unchanged. Regions do not nest: a start marker pairs with the nearest
/// following end marker. Malformed or unterminated markers are left in
/// place verbatim.
pub fn resolve_inline(source: &str, lang_id: &str) -> String {
    let mut output = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find(START_PREFIX) {
        output.push_str(&rest[..start]);
        let after_prefix = &rest[start + START_PREFIX.len()..];

        let Some(code) = lang_code(after_prefix) else {
            // Bad code slot: emit the prefix verbatim and keep scanning
            output.push_str(START_PREFIX);
            rest = after_prefix;
            continue;
        };

        let region = &after_prefix[LANG_LEN + START_SUFFIX.len()..];
        let Some(end) = region.find(END_MARKER) else {
            // Unterminated region: leave the marker text in place
            output.push_str(&rest[start..]);
            return output;
        };

        if code == lang_id {
            output.push_str(&region[..end]);
        }
        rest = &region[end + END_MARKER.len()..];
    }

    output.push_str(rest);
    output
}

/// Extract the two-letter code if the marker head is well-formed
fn lang_code(after_prefix: &str) -> Option<&str> {
    let code = after_prefix.get(..LANG_LEN)?;
    if !code.bytes().all(|b| b.is_ascii_lowercase()) {
        return None;
    }
    if !after_prefix[LANG_LEN..].starts_with(START_SUFFIX) {
        return None;
    }
    Some(code)
}
