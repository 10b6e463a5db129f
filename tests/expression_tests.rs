use parsiclimb::text::{end_of_input, is_char, lexeme, many1_chars, pattern, satisfy, whitespace};
use parsiclimb::{
    ChoiceExt, Cursor, ForwardRef, NoMatch, OperatorHandler, OperatorPrecedence, Parser,
    SequenceExt, attempt, between, forward_ref, map2, separated,
};

fn identifier<'code>() -> impl Parser<'code, Output = String> {
    lexeme(many1_chars(satisfy(|c: char| c.is_alphanumeric() || c == '_')))
}

fn binary(symbol: &'static str) -> impl Fn(String, String) -> Option<String> {
    move |a, b| Some(format!("({a} {symbol} {b})"))
}

fn unary(symbol: &'static str) -> impl Fn(String) -> Option<String> {
    move |a| Some(format!("({symbol}{a})"))
}

/// C-style expressions with calls, rendered fully parenthesized
fn c_expressions<'code>() -> ForwardRef<'code, String> {
    let expr = forward_ref::<String>();

    let arguments = between(
        lexeme(is_char('(')),
        separated(expr.clone(), lexeme(is_char(','))),
        lexeme(is_char(')')),
    );
    let call = map2(identifier(), arguments, |name: String, args: Vec<String>| {
        format!("{name}({})", args.join(", "))
    });
    let bracketed = between(lexeme(is_char('(')), expr.clone(), lexeme(is_char(')')));
    let primary = call.or(bracketed).or(identifier());

    let op_format = lexeme(pattern(r"[-+*/=!]").unwrap());
    let opp = OperatorPrecedence::new(op_format, primary)
        .with_operator("=", OperatorHandler::right_infix(binary("="), 10))
        .with_operator("+", OperatorHandler::left_infix(binary("+"), 50))
        .with_operator("-", OperatorHandler::left_infix(binary("-"), 50))
        .with_operator("*", OperatorHandler::left_infix(binary("*"), 70))
        .with_operator("/", OperatorHandler::left_infix(binary("/"), 70))
        .with_operator("-", OperatorHandler::prefix(unary("-"), 60))
        .with_operator("!", OperatorHandler::postfix(unary("!"), 90));
    expr.define(opp);
    expr
}

fn render(text: &str) -> Result<String, NoMatch> {
    let expr = c_expressions();
    let result = whitespace().then(&expr).skip(end_of_input());
    let mut cursor = Cursor::new(text);
    let rendered = result.parse(&mut cursor);
    expr.undefine();
    rendered
}

#[test]
fn test_calls_and_brackets() {
    assert_eq!(
        render("goo((a + b) * c, c * sqrt(d))"),
        Ok("goo(((a + b) * c), (c * sqrt(d)))".to_string())
    );
}

#[test]
fn test_empty_and_nested_calls() {
    assert_eq!(render("f()"), Ok("f()".to_string()));
    assert_eq!(render("f(g(h(x)))"), Ok("f(g(h(x)))".to_string()));
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(
        render("a = b = c + d"),
        Ok("(a = (b = (c + d)))".to_string())
    );
}

#[test]
fn test_mixed_operators() {
    assert_eq!(
        render("a - b * c / d + e"),
        Ok("((a - ((b * c) / d)) + e)".to_string())
    );
    assert_eq!(render("n! * 2"), Ok("((n!) * 2)".to_string()));
    assert_eq!(render("x - -y"), Ok("(x - (-y))".to_string()));
}

#[test]
fn test_unbalanced_input_rejected() {
    assert_eq!(render("goo((a + b) * c"), Err(NoMatch));
    assert_eq!(render("a + "), Err(NoMatch));
    assert_eq!(render("(a))"), Err(NoMatch));
}

#[test]
fn test_stops_before_closing_bracket() {
    let expr = c_expressions();
    let mut cursor = Cursor::new("foo)");

    assert_eq!(expr.parse(&mut cursor), Ok("foo".to_string()));
    assert_eq!(cursor.remaining(), ")");

    expr.undefine();
}

#[test]
fn test_expression_reusable_across_inputs() {
    let expr = c_expressions();

    for (text, expected) in [
        ("a + b", "(a + b)"),
        ("a * b", "(a * b)"),
        ("(a + b) + c", "((a + b) + c)"),
    ] {
        let mut cursor = Cursor::new(text);
        assert_eq!(expr.parse(&mut cursor), Ok(expected.to_string()));
        assert!(cursor.at_end());
    }

    expr.undefine();
}

#[test]
fn test_failed_expression_keeps_its_progress() {
    let expr = c_expressions();
    let mut cursor = Cursor::new("a + ");

    assert_eq!(expr.parse(&mut cursor), Err(NoMatch));
    assert!(cursor.at_end());

    expr.undefine();
}

#[test]
fn test_attempt_rewinds_failed_expression() {
    let expr = c_expressions();
    let guarded = attempt(&expr).or(identifier());
    let mut cursor = Cursor::new("a + ");

    assert_eq!(guarded.parse(&mut cursor), Ok("a".to_string()));
    assert_eq!(cursor.remaining(), "+ ");

    expr.undefine();
}
