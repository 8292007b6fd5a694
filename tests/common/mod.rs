#![allow(dead_code)]

use javaxray::{Converter, TokenKind};

pub const SAMPLE: &str = "\
package demo;

import java.util.List;

/**
 * Greets people.
 */
@Deprecated
public class Hello {
\tprivate static final long LIMIT = 0xFFL;

\t// entry point
\tpublic static void main(String[] args) {
\t\tchar c = '\\'';
\t\tSystem.out.println(\"hi \\\"there\\\"\" + c);
\t}
}
";

/// Condensed fragments of `input` as `(kind, content)` pairs.
pub fn fragments(input: &str) -> Vec<(TokenKind, String)> {
    Converter::new()
        .fragments(input)
        .expect("fragments")
        .into_iter()
        .map(|f| (f.kind, f.content))
        .collect()
}

pub fn frag(kind: TokenKind, content: &str) -> (TokenKind, String) {
    (kind, content.to_string())
}

/// What the pipeline should reproduce when concatenating fragment
/// contents: no carriage returns, no BOM, tabs as four spaces.
pub fn normalized(input: &str) -> String {
    input
        .strip_prefix('\u{FEFF}')
        .unwrap_or(input)
        .replace('\r', "")
        .replace('\t', "    ")
}
