//! Classification of raw lexer output.

use javaxray::classifier::{JAVA_DATATYPES, JAVA_KEYWORDS, classify_content};
use javaxray::{Fragment, TokenKind, Vocabulary, classify, tokenize};

fn classified(input: &str) -> Vec<Fragment> {
    let mut fragments = tokenize(input);
    classify(&mut fragments, &Vocabulary::java());
    fragments
}

#[test]
fn classify_every_keyword() {
    let vocab = Vocabulary::java();
    for word in JAVA_KEYWORDS {
        assert_eq!(classify_content(word, &vocab), TokenKind::Keyword, "{word}");
    }
}

#[test]
fn classify_every_datatype() {
    let vocab = Vocabulary::java();
    for word in JAVA_DATATYPES {
        assert_eq!(classify_content(word, &vocab), TokenKind::Datatype, "{word}");
    }
}

#[test]
fn classify_is_case_sensitive() {
    let vocab = Vocabulary::java();
    assert_eq!(classify_content("Class", &vocab), TokenKind::Identifier);
    assert_eq!(classify_content("INT", &vocab), TokenKind::Identifier);
}

#[test]
fn classify_leaves_lexer_kinds_alone() {
    let fragments = classified("\"int\" // int\n");
    let kinds: Vec<_> = fragments.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::StringLiteral,
            TokenKind::Space,
            TokenKind::LineComment,
            TokenKind::LineComment,
            TokenKind::LineComment,
            TokenKind::LineFeed,
        ]
    );
}

#[test]
fn classify_declaration() {
    let fragments = classified("long n = 0xFFL;");
    let kinds: Vec<_> = fragments.iter().map(|f| (f.kind, f.content.as_str())).collect();
    assert_eq!(
        kinds,
        vec![
            (TokenKind::Datatype, "long"),
            (TokenKind::Space, " "),
            (TokenKind::Identifier, "n"),
            (TokenKind::Space, " "),
            (TokenKind::Delimiter, "="),
            (TokenKind::Space, " "),
            (TokenKind::Numeric, "0xFFL"),
            (TokenKind::Delimiter, ";"),
        ]
    );
}

#[test]
fn classify_float_parts() {
    let fragments = classified("1.5f");
    let kinds: Vec<_> = fragments.iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Numeric, TokenKind::Delimiter, TokenKind::Numeric]
    );
}

#[test]
fn classify_symbols_outside_delimiter_set() {
    let fragments = classified("~x ^ #");
    assert_eq!(fragments[0].kind, TokenKind::Undefined);
    assert_eq!(fragments[0].content, "~x");
    let hash = fragments.last().expect("fragment");
    assert_eq!(hash.content, "#");
    assert_eq!(hash.kind, TokenKind::Symbol);
}

#[test]
fn classify_annotation_with_arguments() {
    let fragments = classified("@SuppressWarnings(\"all\")");
    assert_eq!(fragments[0].kind, TokenKind::Annotation);
    assert_eq!(fragments[0].content, "@SuppressWarnings");
    assert_eq!(fragments[2].kind, TokenKind::StringLiteral);
}

#[test]
fn classify_unresolvable_tokens_stay_undefined() {
    let fragments = classified("a$b \\u0041 \u{3bb}");
    let undefined: Vec<_> = fragments
        .iter()
        .filter(|f| f.kind == TokenKind::Undefined)
        .map(|f| f.content.as_str())
        .collect();
    assert_eq!(undefined, vec!["a$b", "\\u0041", "\u{3bb}"]);
}

#[test]
fn classify_with_custom_vocabulary() {
    let mut fragments = tokenize("fn main");
    classify(&mut fragments, &Vocabulary::new(["fn"], Vec::<String>::new()));
    assert_eq!(fragments[0].kind, TokenKind::Keyword);
    assert_eq!(fragments[2].kind, TokenKind::Identifier);
}
