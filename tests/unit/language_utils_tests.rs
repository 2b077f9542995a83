/*!
 * Tests for language code handling
 */

use xctranslate::language_utils::{display_label, get_language_name};

/// Test resolving two-letter codes
#[test]
fn test_get_language_name_withTwoLetterCode_shouldReturnName() {
    assert_eq!(get_language_name("en"), Some("English".to_string()));
    assert_eq!(get_language_name("es"), Some("Spanish".to_string()));
    assert_eq!(get_language_name("de"), Some("German".to_string()));
}

/// Test resolving three-letter codes
#[test]
fn test_get_language_name_withThreeLetterCode_shouldReturnName() {
    assert_eq!(get_language_name("spa"), Some("Spanish".to_string()));
    assert_eq!(get_language_name("eng"), Some("English".to_string()));
}

/// Test that region subtags are ignored
#[test]
fn test_get_language_name_withRegionSubtag_shouldUsePrimaryTag() {
    assert_eq!(get_language_name("pt-BR"), Some("Portuguese".to_string()));
    assert_eq!(get_language_name("en_US"), Some("English".to_string()));
    assert_eq!(get_language_name("zh-Hans"), Some("Chinese".to_string()));
}

/// Test case insensitivity
#[test]
fn test_get_language_name_withUppercaseCode_shouldReturnName() {
    assert_eq!(get_language_name("EN"), Some("English".to_string()));
    assert_eq!(get_language_name("Es"), Some("Spanish".to_string()));
}

/// Test codes that cannot be resolved
#[test]
fn test_get_language_name_withUnknownCode_shouldReturnNone() {
    assert_eq!(get_language_name("xx"), None);
    assert_eq!(get_language_name("qqq"), None);
    assert_eq!(get_language_name(""), None);
    assert_eq!(get_language_name("x"), None);
    assert_eq!(get_language_name("english"), None);
}

/// Test the label used in log output
#[test]
fn test_display_label_withKnownCode_shouldIncludeName() {
    assert_eq!(display_label("es"), "Spanish (es)");
    assert_eq!(display_label("pt-BR"), "Portuguese (pt-BR)");
}

/// Test the label fallback for unknown codes
#[test]
fn test_display_label_withUnknownCode_shouldReturnCodeAsIs() {
    assert_eq!(display_label("xx"), "xx");
    assert_eq!(display_label("x-pirate"), "x-pirate");
}
