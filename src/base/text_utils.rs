//! Text helpers for turning raw captures into entity attributes.

/// Trim `text` and return it only if something is left.
///
/// # Example
/// ```
/// use sdl_extract::base::text_utils::non_blank;
///
/// assert_eq!(non_blank(Some("  Person  ")), Some("Person".to_string()));
/// assert_eq!(non_blank(Some("   ")), None);
/// assert_eq!(non_blank(None), None);
/// ```
pub fn non_blank(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
