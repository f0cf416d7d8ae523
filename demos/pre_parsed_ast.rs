use arithmos_rs::ast::{Evaluator, Parser};
use arithmos_rs::lexer;

fn main() {
    pretty_env_logger::init();

    let expression = "(1.5 + 2) * -4 / 2";
    let tokens = lexer::lex(expression, "<demo>").expect("Failed to lex");
    let ast = Parser::new(&tokens, "<demo>")
        .parse()
        .expect("Failed to parse");

    println!("AST: {ast}");
    println!("Result: {}", Evaluator::new().evaluate(&ast));
}
