//! Static language table. Ordered: the first descriptor matching a file name wins.

use crate::{HighlightFlags, SyntaxDescriptor};

const C_FAMILY_PREPROCESSOR: &[&str] = &[
    "#if", "#ifdef", "#ifndef", "#else", "#elif", "#elifdef", "#elifndef", "#endif", "#define",
    "#undef", "#include", "#error", "#warning", "#pragma", "#line",
];

const C_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "auto", "break", "case", "const", "constexpr", "continue", "default",
    "do", "else", "enum", "extern", "false", "for", "goto", "if", "inline", "nullptr",
    "register", "restrict", "return", "sizeof", "static", "static_assert", "struct", "switch",
    "thread_local", "true", "typedef", "typeof", "typeof_unqual", "union", "volatile", "while",
    "_Alignas", "_Alignof", "_Atomic", "_BitInt", "_Bool", "_Complex", "_Decimal128",
    "_Decimal32", "_Decimal64", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "_Thread_local",
];

const C_TYPES: &[&str] = &[
    "int", "long", "short", "double", "float", "char", "unsigned", "signed", "void", "bool",
];

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "atomic_cancel", "atomic_commit",
    "atomic_noexcept", "auto", "bitand", "bitor", "break", "case", "catch", "class", "compl",
    "concept", "const", "consteval", "constexpr", "constinit", "const_cast", "continue",
    "co_await", "co_return", "co_yield", "decltype", "default", "delete", "do", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "for", "friend", "goto", "if",
    "inline", "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator",
    "or", "or_eq", "private", "protected", "public", "reflexpr", "register", "reinterpret_cast",
    "requires", "return", "sizeof", "static", "static_assert", "static_cast", "struct", "switch",
    "synchronized", "template", "this", "thread_local", "throw", "true", "try", "typedef",
    "typeid", "typename", "union", "using", "virtual", "volatile", "while", "xor", "xor_eq",
];

const CPP_TYPES: &[&str] = &[
    "bool", "char", "wchar_t", "char8_t", "char16_t", "char32_t", "float", "unsigned", "double",
    "int", "void", "long", "short", "signed",
];

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "continue", "for", "new", "switch", "assert", "default", "goto", "package",
    "synchronized", "do", "if", "private", "this", "break", "implements", "protected", "throw",
    "else", "import", "public", "true", "throws", "case", "enum", "instanceof", "return",
    "transient", "catch", "extends", "try", "final", "false", "null", "interface", "static",
    "class", "finally", "strictfp", "volatile", "const", "native", "super", "while",
];

const JAVA_TYPES: &[&str] = &[
    "boolean", "double", "byte", "int", "short", "char", "void", "long", "float",
];

pub static LANGUAGES: &[SyntaxDescriptor] = &[
    SyntaxDescriptor {
        name: "C",
        file_match: &[".c", ".h"],
        keywords: C_KEYWORDS,
        types: C_TYPES,
        single_line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        preprocessor: C_FAMILY_PREPROCESSOR,
        flags: HighlightFlags::all(),
    },
    SyntaxDescriptor {
        name: "C++",
        file_match: &[".cpp", ".hpp", ".cc", ".cxx"],
        keywords: CPP_KEYWORDS,
        types: CPP_TYPES,
        single_line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        preprocessor: C_FAMILY_PREPROCESSOR,
        flags: HighlightFlags::all(),
    },
    SyntaxDescriptor {
        name: "Java",
        file_match: &[".java"],
        keywords: JAVA_KEYWORDS,
        types: JAVA_TYPES,
        single_line_comment: Some("//"),
        block_comment: Some(("/*", "*/")),
        preprocessor: &[],
        flags: HighlightFlags::all().difference(HighlightFlags::PREPROCESSOR),
    },
];

/// Resolve the descriptor for `filename` from the built-in table.
pub fn select_for_filename(filename: &str) -> Option<&'static SyntaxDescriptor> {
    let selected = select_from(LANGUAGES, filename);
    tracing::debug!(
        target: "syntax",
        language = selected.map(|d| d.name),
        "descriptor_selected"
    );
    selected
}

/// First descriptor in `table` matching `filename`.
pub fn select_from<'a>(table: &'a [SyntaxDescriptor], filename: &str) -> Option<&'a SyntaxDescriptor> {
    table.iter().find(|d| d.matches(filename))
}
