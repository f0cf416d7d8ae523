//! Cross-checks random expressions against meval and evalexpr.

use arithmos_rs::{run, Number};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_expression(rng: &mut StdRng, depth: u32, operators: &[char]) -> String {
    if depth == 0 || rng.random_bool(0.3) {
        return rng.random_range(1..50).to_string();
    }

    let left = random_expression(rng, depth - 1, operators);
    let right = random_expression(rng, depth - 1, operators);
    let operator = operators[rng.random_range(0..operators.len())];
    if rng.random_bool(0.5) {
        format!("({left} {operator} {right})")
    } else {
        format!("{left}{operator}{right}")
    }
}

#[test]
fn float_results_match_meval() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let expression = random_expression(&mut rng, 3, &['+', '-', '*', '/']);
        let expected = meval::eval_str(&expression).unwrap();
        let actual = run(&expression, "<oracle>").unwrap().as_f64();

        // Signed zeros differ between integer and float arithmetic, which
        // flips the sign of infinities after a zero divisor.
        if !expected.is_finite() || !actual.is_finite() {
            continue;
        }
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (expected - actual).abs() <= tolerance,
            "{expression}: meval {expected}, got {actual}"
        );
    }
}

#[test]
fn integer_results_match_evalexpr() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..500 {
        let expression = random_expression(&mut rng, 3, &['+', '-', '*']);
        let expected = evalexpr::eval_int(&expression).unwrap();
        let actual = run(&expression, "<oracle>").unwrap();
        assert_eq!(actual, Number::Int(expected), "{expression}");
    }
}
