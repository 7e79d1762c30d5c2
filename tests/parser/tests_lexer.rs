use rstest::rstest;
use sdl_extract::parser::{SyntaxKind, tokenize};

fn kinds(input: &str) -> Vec<SyntaxKind> {
    tokenize(input)
        .into_iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia())
        .collect()
}

#[rstest]
#[case("%0", SyntaxKind::MARKER)]
#[case("%d12", SyntaxKind::MARKER)]
#[case("%_a9", SyntaxKind::MARKER)]
#[case("type", SyntaxKind::TYPE_KW)]
#[case("implements", SyntaxKind::IMPLEMENTS_KW)]
#[case("repeatable", SyntaxKind::REPEATABLE_KW)]
#[case("Typed", SyntaxKind::IDENT)]
#[case("\"desc\"", SyntaxKind::STRING)]
#[case("\"\"\"a \"quoted\" word\"\"\"", SyntaxKind::BLOCK_STRING)]
#[case("-12", SyntaxKind::INTEGER)]
#[case("1.5e3", SyntaxKind::FLOAT)]
fn test_single_token(#[case] input: &str, #[case] expected: SyntaxKind) {
    assert_eq!(kinds(input), vec![expected], "input: {input}");
}

#[test]
fn test_token_ranges_cover_the_input() {
    let input = "union Pet = Dog %0 | Cat # pets\n";
    let tokens = tokenize(input);
    let rebuilt: String = tokens.iter().map(|t| &input[t.range]).collect();
    assert_eq!(rebuilt, input);
}

#[test]
fn test_bare_percent_is_an_error_token() {
    assert_eq!(kinds("% x"), vec![SyntaxKind::ERROR, SyntaxKind::IDENT]);
}
