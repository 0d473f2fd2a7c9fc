/// Characters dropped from a token while building its key.
pub const IGNORED: [char; 11] = ['\'', '"', ',', '.', ';', '?', '!', '(', ')', '/', '\u{2019}'];

fn is_ignored(c: char) -> bool {
    IGNORED.contains(&c)
}

/// Turns a raw token into the key it is indexed under.
///
/// Every character is lowercased and the characters in [`IGNORED`] are
/// dropped, except for an ASCII apostrophe that has a kept character on
/// both sides of it somewhere in the token (`don't` stays `don't`, `'tis`
/// becomes `tis`). The result may be empty.
///
/// Applying it to its own output changes nothing.
pub fn normalize(raw: &str) -> String {
    let first_kept = raw.find(|c| !is_ignored(c));
    let last_kept = raw.rfind(|c| !is_ignored(c));

    let mut key = String::with_capacity(raw.len());
    for (i, c) in raw.char_indices() {
        let inside = first_kept.is_some_and(|f| f < i) && last_kept.is_some_and(|l| i < l);
        if !is_ignored(c) || (c == '\'' && inside) {
            key.extend(c.to_lowercase());
        }
    }
    key
}
