/*!
 * Language display helpers for ISO language codes
 *
 * String catalogs identify locales with BCP 47 tags ("es", "pt-BR",
 * "zh-Hans"). These helpers resolve the primary subtag to an English
 * language name for friendlier log output. They are display-only: a code
 * that cannot be resolved is simply shown as-is, never rejected.
 */

use isolang::Language;

/// Look up the English name for a language code
///
/// Falls back to the primary subtag for regional or script variants, so
/// "zh-Hans" resolves the same as "zh". Returns `None` when the code is not
/// a known ISO 639-1 or ISO 639-3 code.
pub fn get_language_name(code: &str) -> Option<String> {
    let normalized = code.trim();
    let primary = normalized
        .split(['-', '_'])
        .next()
        .unwrap_or(normalized)
        .to_lowercase();

    let language = match primary.len() {
        2 => Language::from_639_1(&primary),
        3 => Language::from_639_3(&primary),
        _ => None,
    };

    language.map(|lang| lang.to_name().to_string())
}

/// Format a language code for log output
///
/// Produces "Spanish (es)" when the name is known and the bare code
/// otherwise.
pub fn display_label(code: &str) -> String {
    match get_language_name(code) {
        Some(name) => format!("{} ({})", name, code),
        None => code.to_string(),
    }
}
