//! Shapes raw journal prose into provider-ready input.
//!
//! Two modes exist: narrative prose behind a persona preamble for
//! instruction-following voices, and speech markup with inserted pause
//! directives for providers that accept SSML. Both are pure functions
//! of their input.

/// Pause inserted after sentence-terminal punctuation
const LONG_PAUSE: &str = "<break time=\"2000ms\"/>";

/// Pause inserted after commas and semicolons
const SHORT_PAUSE: &str = "<break time=\"1000ms\"/>";

/// Delivery directive for generative voices. The literal entry follows
/// after a blank line.
const NARRATIVE_STYLE: &str = "Read the following journal entry aloud at a slow, unhurried pace, \
in a warm and steady voice. Leave a natural pause at the end of every sentence. \
Read quoted passages in your own voice rather than acting them out. \
Skip over emoji and other symbols as if they were not there.";

/// Wrap text in the persona preamble for instruction-following providers
pub fn narrative(text: &str) -> String {
    format!("{}\n\n{}", NARRATIVE_STYLE, text)
}

/// Insert pause directives after sentence and clause boundaries and wrap
/// the result in a single `<speak>` root element.
///
/// Sentence-terminal punctuation (`.`, `?`, `!`) gets a long pause,
/// commas and semicolons a short one, in both cases when followed by
/// whitespace or the end of the input. Re-running on text that already
/// contains pause markers is out of contract.
pub fn meditation_markup(text: &str) -> String {
    let sentence_pattern = regex::Regex::new(r"([.?!])(\s+|$)").unwrap();
    let with_long_pauses =
        sentence_pattern.replace_all(text, format!("${{1}}{}{}", LONG_PAUSE, "${2}"));

    let clause_pattern = regex::Regex::new(r"([,;])(\s+|$)").unwrap();
    let with_short_pauses =
        clause_pattern.replace_all(&with_long_pauses, format!("${{1}}{}{}", SHORT_PAUSE, "${2}"));

    format!("<speak>{}</speak>", with_short_pauses)
}
