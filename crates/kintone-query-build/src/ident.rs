use convert_case::{Case, Casing};
use quote::format_ident;
use std::collections::HashSet;
use syn::{Ident, parse_str};

/// Rust identifier for a field code.
///
/// A code that is already an identifier is used as is. Otherwise each dotted
/// segment has its non-identifier characters replaced by `_` and the
/// segments are joined with `__`. A leading digit gets a `_` prefix and
/// keywords get a `_` suffix.
pub(crate) fn field_ident(code: &str) -> Ident {
    let base = code.split('.').map(sanitize).collect::<Vec<_>>().join("__");

    ident_or(&base, "field")
}

/// Pascal-cased type or variant name for free text such as an option label.
pub(crate) fn pascal_ident(text: &str) -> Ident {
    ident_or(&sanitize(&text.to_case(Case::Pascal)), "Option")
}

fn ident_or(base: &str, fallback: &str) -> Ident {
    [base.to_string(), format!("{base}_"), format!("_{base}")]
        .iter()
        // reserved since edition 2024
        .filter(|candidate| candidate.as_str() != "gen")
        .find_map(|candidate| parse_str::<Ident>(candidate).ok())
        .unwrap_or_else(|| format_ident!("{}", fallback))
}

fn sanitize(segment: &str) -> String {
    segment
        .chars()
        .map(|c| if is_ident_char(c) { c } else { '_' })
        .collect()
}

fn is_ident_char(c: char) -> bool {
    c == '_'
        || c.is_ascii_alphanumeric()
        || (!c.is_ascii() && parse_str::<Ident>(&format!("_{c}")).is_ok())
}

///
/// IdentSet
///
/// Identifiers already handed out in one namespace. A clash is resolved by
/// the first free `_2`, `_3`, ... suffix, so the earlier claimant keeps the
/// plain name.
///

#[derive(Debug, Default)]
pub(crate) struct IdentSet {
    taken: HashSet<String>,
}

impl IdentSet {
    pub(crate) fn reserving<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            taken: names.into_iter().map(str::to_string).collect(),
        }
    }

    pub(crate) fn claim(&mut self, ident: Ident) -> Ident {
        if self.taken.insert(ident.to_string()) {
            return ident;
        }

        let mut n = 2_usize;
        loop {
            let candidate = format_ident!("{}_{}", ident, n);
            if self.taken.insert(candidate.to_string()) {
                return candidate;
            }
            n += 1;
        }
    }
}
