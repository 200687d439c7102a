/// Pictographic code points dropped from generated answers before they are
/// displayed or spoken.
#[inline]
fn is_emoji(c: char) -> bool {
    matches!(c,
        '\u{1F000}'..='\u{1FAFF}'   // emoticons, pictographs, transport, extended symbols
        | '\u{2600}'..='\u{27BF}'   // misc symbols and dingbats
        | '\u{FE0F}'                // emoji presentation selector
        | '\u{200D}'                // zero width joiner
    )
}

/// Remove emoji from `text`, leaving every other character untouched.
pub fn strip_emoji(text: &str) -> String {
    text.chars().filter(|&c| !is_emoji(c)).collect()
}
