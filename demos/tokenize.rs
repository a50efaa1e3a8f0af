use anyhow::Context;
use lambda_lexer::{ScanOptions, Scanner, TokenKind};
use std::io::Read;

fn main() -> anyhow::Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = take_flag(&mut args, "--json");
    let lenient = take_flag(&mut args, "--lenient");

    let source = match args.first() {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading source from stdin")?;
            buf
        }
    };

    let options = ScanOptions {
        lenient_char_literals: lenient,
    };
    let mut scanner = Scanner::with_options(&source, options);

    loop {
        let token = scanner
            .next_token()
            .with_context(|| format!("tokenizing {:?}", source.trim()))?;

        if json {
            println!("{}", serde_json::to_string(&token)?);
        } else if token.kind != TokenKind::EndOfInput {
            println!(
                "  {:>4}:{:<3} {:<18} {}",
                token.line, token.column, token.kind, token.value
            );
        }

        if token.is_end() {
            break;
        }
    }

    Ok(())
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}
