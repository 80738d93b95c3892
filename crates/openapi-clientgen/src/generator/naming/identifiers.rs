use std::{collections::BTreeSet, sync::LazyLock};

use any_ascii::any_ascii;
use regex::Regex;
use serde::Serialize;

use super::reserved::is_reserved;

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());

/// Where a sanitized identifier will be used. Each context applies its own case
/// normalization and reserved-word escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NameContext {
  TypeName,
  PropertyName,
  EnumMember,
  Parameter,
}

/// Fixed substitution table for punctuation commonly found in schema keys and enum literals.
/// Brackets are stripped so `Page[Item]` flattens to `PageItem`.
fn substitute(ch: char) -> Option<char> {
  match ch {
    '-' | '.' | '/' | '#' | '@' | ' ' | '*' | '+' => Some('_'),
    '[' | ']' | '(' | ')' | ':' | ',' | '$' => None,
    _ => Some(ch),
  }
}

/// Converts a raw document identifier into one that is valid in every emitter target.
///
/// # Rules:
/// 1. Punctuation is replaced with `_` or removed per the substitution table.
/// 2. Non-ASCII text is transliterated; any remaining invalid run becomes a single `_`.
/// 3. Type names get an uppercase first character.
/// 4. Property names drop each `_` and uppercase the character that follows it.
/// 5. A result that starts with a digit is prefixed with `_`; an empty result becomes `_`.
/// 6. Reserved words get `_` appended for type names and prepended everywhere else.
///
/// Total: never fails, worst case returning `_`.
pub fn sanitize(raw: &str, context: NameContext) -> String {
  let substituted: String = raw.chars().filter_map(substitute).collect();
  let ascii = any_ascii(&substituted);
  let mut ident = INVALID_CHARS_RE.replace_all(&ascii, "_").into_owned();

  match context {
    NameContext::TypeName => ident = upper_first(&ident),
    NameContext::PropertyName => ident = underscores_to_title_case(&ident),
    NameContext::EnumMember | NameContext::Parameter => {}
  }

  if ident.is_empty() {
    return "_".to_string();
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }

  if is_reserved(&ident) {
    match context {
      NameContext::TypeName => ident.push('_'),
      _ => ident.insert(0, '_'),
    }
  }

  ident
}

pub fn upper_first(value: &str) -> String {
  let mut chars = value.chars();
  match chars.next() {
    None => String::new(),
    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
  }
}

/// `pet_type` becomes `petType`; the first character keeps its case.
fn underscores_to_title_case(value: &str) -> String {
  let mut result = String::with_capacity(value.len());
  let mut capitalize_next = false;
  for ch in value.chars() {
    if ch == '_' {
      capitalize_next = true;
    } else if capitalize_next {
      capitalize_next = false;
      result.extend(ch.to_uppercase());
    } else {
      result.push(ch);
    }
  }
  result
}

/// Ensures a name is unique within a set of used names, appending a numeric suffix if needed.
pub fn ensure_unique(base_name: &str, used_names: &BTreeSet<String>) -> String {
  if !used_names.contains(base_name) {
    return base_name.to_string();
  }
  let mut i = 2;
  loop {
    let new_name = format!("{base_name}{i}");
    if !used_names.contains(&new_name) {
      return new_name;
    }
    i += 1;
  }
}

/// Splits a component key into its namespace prefix and local name at the last `.`.
///
/// Each prefix segment is sanitized as a type name so the namespace itself is a valid
/// dotted identifier. Keys without a separator live in the root namespace.
pub(crate) fn split_namespace(key: &str) -> (Option<String>, &str) {
  match key.rsplit_once('.') {
    Some((prefix, local)) if !prefix.is_empty() && !local.is_empty() => {
      let namespace = prefix
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(|segment| sanitize(segment, NameContext::TypeName))
        .collect::<Vec<_>>()
        .join(".");
      (Some(namespace), local)
    }
    _ => (None, key),
  }
}
