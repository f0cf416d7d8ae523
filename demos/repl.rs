use arithmos_rs::ast::Parser;
use arithmos_rs::{lexer, run_with, Config};
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let config = Config::default();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "calc > ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }

        if let Some(source) = line.strip_prefix(":ast") {
            let parsed = lexer::lex(source, &config.source_name)
                .map_err(arithmos_rs::Error::from)
                .and_then(|tokens| {
                    Parser::new(&tokens, &config.source_name)
                        .with_max_depth(config.max_depth)
                        .parse()
                        .map_err(arithmos_rs::Error::from)
                });
            match parsed {
                Ok(ast) => writeln!(stdout, "{ast}")?,
                Err(err) => writeln!(stdout, "{err}")?,
            }
            continue;
        }

        match run_with(line, &config) {
            Ok(value) => writeln!(stdout, "{value}")?,
            Err(err) => writeln!(stdout, "{err}")?,
        }
    }
}
