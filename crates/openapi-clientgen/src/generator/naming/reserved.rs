use std::{collections::HashSet, sync::LazyLock};

/// Words that cannot be used verbatim as identifiers by at least one emitter target.
///
/// Matching is case-sensitive: `Task` and `HttpMethod` collide with types every generated
/// client imports, while `task` is free to use.
pub(crate) static RESERVED_WORDS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    // C#
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked", "class", "const",
    "continue", "decimal", "default", "delegate", "do", "double", "else", "enum", "event", "explicit", "extern",
    "false", "finally", "fixed", "float", "for", "foreach", "goto", "if", "implicit", "in", "int", "interface",
    "internal", "is", "lock", "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short", "sizeof", "stackalloc",
    "static", "string", "struct", "switch", "this", "throw", "true", "try", "typeof", "uint", "ulong", "unchecked",
    "unsafe", "ushort", "using", "virtual", "void", "volatile", "while",
    // TypeScript / JavaScript
    "await", "debugger", "delete", "export", "extends", "function", "implements", "import", "instanceof", "let",
    "package", "var", "with", "yield",
    // client runtime types
    "Task", "HttpMethod",
  ]
  .into_iter()
  .collect()
});

pub(crate) fn is_reserved(word: &str) -> bool {
  RESERVED_WORDS.contains(word)
}
