//! Line-oriented read loop over the lexer and parser.
//!
//! Each line is parsed with a fresh lexer/parser pair. When the parse is
//! clean the program's canonical text is printed back; otherwise every
//! diagnostic is printed tab-indented and the tree is discarded.

use std::io::{self, BufRead, Write};

use crate::parser::parser::parse;

const PROMPT: &str = ">> ";

/// Runs the read loop until the input reaches end of file.
pub fn start(mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let (program, errors) = parse(&line);

        if !errors.is_empty() {
            for error in &errors {
                writeln!(output, "\t{}", error)?;
            }
            continue;
        }

        writeln!(output, "{}", program)?;
    }
}
