/// Canonical form of a county name, used as the key of the county -> region map.
///
/// Lower-cases, collapses whitespace and drops a trailing `county` word, so
/// `"Travis County"`, `"travis"` and `"  TRAVIS   county "` all become `"travis"`.
/// A name consisting only of the word `county` is kept as is.
pub fn normalize_county(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut words: Vec<&str> = lowered.split_whitespace().collect();

    if words.len() > 1 && words.last() == Some(&"county") {
        words.pop();
    }

    words.join(" ")
}
