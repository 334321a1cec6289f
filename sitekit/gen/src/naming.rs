//! Identifier conversion from wire names to Rust names.
//!
//! Wire names are camelCase (`lastModifiedDateTime`), may carry OData
//! annotations (`@odata.nextLink`) or dashes (`client-request-id`), and
//! occasionally collide with Rust keywords (`type`, `self`).
//!
//! ## Examples
//!
//! ```
//! use sitekit_gen::naming::{pascal_case, snake_case};
//!
//! assert_eq!(snake_case("ODataError"), "odata_error");
//! assert_eq!(snake_case("eTag"), "e_tag");
//! assert_eq!(pascal_case("unknownFutureValue"), "UnknownFutureValue");
//! ```

use proc_macro2::{Ident, Span};

/// Reserved words that need the raw `r#` form.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do", "dyn",
    "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers; these get a trailing underscore.
const NON_RAW: &[&str] = &["crate", "self", "Self", "super"];

/// Converts a camelCase or PascalCase name to snake_case.
///
/// Runs of capitals stay together (`HTMLParser` -> `html_parser`), and a
/// two-letter prefix run does not split (`ODataError` -> `odata_error`).
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    let mut upper_run = 0;
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_uppercase() {
            upper_run = 0;
            out.push(c);
            continue;
        }
        if i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() {
                out.push('_');
            } else if prev.is_uppercase() && next_is_lower && upper_run >= 2 {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
        upper_run += 1;
    }
    out
}

/// Converts a wire value or snake_case name to PascalCase.
pub fn pascal_case(name: &str) -> String {
    name.replace('-', "_")
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// The snake_case field name for a wire property name, before keyword handling.
pub fn field_name(wire: &str) -> String {
    snake_case(&wire.trim_start_matches('@').replace(['.', '-'], "_"))
}

/// The Rust identifier for a wire property name.
///
/// ```
/// use sitekit_gen::naming::field_ident;
///
/// assert_eq!(field_ident("@odata.nextLink").to_string(), "odata_next_link");
/// assert_eq!(field_ident("type").to_string(), "r#type");
/// assert_eq!(field_ident("self").to_string(), "self_");
/// ```
pub fn field_ident(wire: &str) -> Ident {
    ident(&field_name(wire))
}

/// Builds an identifier, escaping keywords.
pub fn ident(name: &str) -> Ident {
    if NON_RAW.contains(&name) {
        Ident::new(&format!("{name}_"), Span::call_site())
    } else if KEYWORDS.contains(&name) {
        Ident::new_raw(name, Span::call_site())
    } else {
        Ident::new(name, Span::call_site())
    }
}

/// Whether serde needs a `rename` for `wire` to match `field`.
pub fn needs_rename(wire: &str, field: &Ident) -> bool {
    let field = field.to_string();
    field.strip_prefix("r#").unwrap_or(&field) != wire
}

#[cfg(test)]
mod tests {
    use super::*;

    // === snake_case tests ===

    #[test]
    fn snake_case_splits_camel_words() {
        assert_eq!(snake_case("lastModifiedDateTime"), "last_modified_date_time");
        assert_eq!(snake_case("sharePointIds"), "share_point_ids");
    }

    #[test]
    fn snake_case_keeps_acronym_runs() {
        assert_eq!(snake_case("HTMLParser"), "html_parser");
        assert_eq!(snake_case("ODataError"), "odata_error");
        assert_eq!(snake_case("cTag"), "c_tag");
    }

    #[test]
    fn snake_case_splits_after_digits() {
        assert_eq!(snake_case("grantedToV2"), "granted_to_v2");
        assert_eq!(snake_case("site1Id"), "site1_id");
    }

    #[test]
    fn snake_case_leaves_snake_alone() {
        assert_eq!(snake_case("term_store"), "term_store");
    }

    // === pascal_case tests ===

    #[test]
    fn pascal_case_from_camel_and_snake() {
        assert_eq!(pascal_case("oneThirdLeftColumn"), "OneThirdLeftColumn");
        assert_eq!(pascal_case("term_store"), "TermStore");
        assert_eq!(pascal_case("None"), "None");
    }

    // === field_ident tests ===

    #[test]
    fn field_ident_strips_annotations() {
        assert_eq!(field_ident("@odata.type").to_string(), "odata_type");
        assert_eq!(field_ident("@odata.deltaLink").to_string(), "odata_delta_link");
        assert_eq!(field_ident("client-request-id").to_string(), "client_request_id");
    }

    #[test]
    fn field_ident_escapes_keywords() {
        assert_eq!(field_ident("type").to_string(), "r#type");
        assert_eq!(field_ident("move").to_string(), "r#move");
        assert_eq!(field_ident("self").to_string(), "self_");
    }

    #[test]
    fn rename_only_when_wire_differs() {
        assert!(!needs_rename("type", &field_ident("type")));
        assert!(!needs_rename("name", &field_ident("name")));
        assert!(needs_rename("eTag", &field_ident("eTag")));
        assert!(needs_rename("self", &field_ident("self")));
    }
}
