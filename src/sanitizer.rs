// Post-processing applied to every model response before it is shown.
//
// Keyword matching is a plain case-insensitive substring test, so words like
// "treatments" or "immediately" inside longer phrases also trigger the
// disclaimer. Over-triggering is acceptable here; missing a match is not.

/// Emphasis markup stripped from responses. Longest token first.
const MARKUP_TOKENS: &[&str] = &["**", "*", "`"];

/// Lowercase phrases that flag a response as advice-like.
pub const SAFETY_KEYWORDS: &[&str] = &[
    "prescribe",
    "diagnose",
    "treatment",
    "take this",
    "you should take",
    "medical advice",
    "you need",
    "you must",
    "emergency",
    "immediately",
];

pub const DISCLAIMER: &str = "\n\nDisclaimer: I am an AI assistant providing general health information. \
My responses are not medical advice. Please consult a qualified healthcare \
professional for personal medical concerns.";

/// True when `text` contains any safety keyword, ignoring case.
pub fn contains_unsafe_content(text: &str) -> bool {
    let lowercase = text.to_lowercase();
    SAFETY_KEYWORDS
        .iter()
        .any(|keyword| lowercase.contains(keyword))
}

fn strip_markup(text: &str) -> String {
    MARKUP_TOKENS
        .iter()
        .fold(text.to_string(), |acc, token| acc.replace(token, ""))
}

/// Strip markup, append the disclaimer when a keyword matches, and trim.
///
/// The disclaimer itself mentions "medical advice", so it is not appended a
/// second time when the text already ends with it. This keeps the function
/// idempotent.
pub fn sanitize(raw: &str) -> String {
    let mut response = strip_markup(raw);

    let already_disclaimed = response.trim_end().ends_with(DISCLAIMER);
    if contains_unsafe_content(&response) && !already_disclaimed {
        response.push_str(DISCLAIMER);
    }

    response.trim().to_string()
}
