// Reserved words of the Alpha language

pub const KEYWORDS: &[&str] = &[
    "class",
    "extern",
    "macro",
    "let",
    "const",
    "static",
    "volatile",
    "threadlocal",
    "nomangle",
    "null",
    "allowconflict",
    "global",
    "record",
    "switch",
    "case",
    "default",
    "if",
    "else",
    "for",
    "foreach",
    "do",
    "while",
    "return",
    "as",
    "true",
    "false",
];

/// Built-in type names that are also reserved.
pub const TYPE_KEYWORDS: &[&str] = &[
    "i8", "i16", "i32", "i64", "ssize", "int", "u8", "u16", "u32", "u64", "size", "unsigned",
    "float", "double", "var", "void", "bool",
];

/// Whether `word` is reserved. Type names count only with `include_types`.
pub fn is_keyword(word: &str, include_types: bool) -> bool {
    KEYWORDS.contains(&word) || (include_types && TYPE_KEYWORDS.contains(&word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_keyword() {
        assert!(is_keyword("while", false));
        assert!(is_keyword("threadlocal", true));
        assert!(!is_keyword("int", false));
        assert!(is_keyword("int", true));
        assert!(is_keyword("void", true));
        assert!(!is_keyword("hello", true));
        assert!(!is_keyword("While", true));
    }
}
