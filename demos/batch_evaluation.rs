use arithmos_rs::{run_batch, Config};

fn main() {
    pretty_env_logger::init();

    let expressions = ["3+4*2", "(3+4)*2", "10/4", "-5+2", "2*(3+", "5#"];
    let config = Config::new("<batch>");

    for (expression, result) in expressions.iter().zip(run_batch(&expressions, &config)) {
        match result {
            Ok(value) => println!("{expression} = {value}"),
            Err(err) => println!("{expression}: {err}"),
        }
    }
}
