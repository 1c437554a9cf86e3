//! Identifier rendering helpers.

/// Humanize a camel/Pascal-case identifier for display.
///
/// Splits on case-transition boundaries and lowercases the result, so
/// `LightBlue` becomes `light blue` and `HTTPServer` becomes `http server`.
/// Used for the strings printed by synthesized enum stream operators.
pub fn humanize_identifier(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let mut out = String::with_capacity(identifier.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary {
                out.push(' ');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}
