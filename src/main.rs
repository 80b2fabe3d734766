use std::io;

use brook::repl;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::start(stdin.lock(), stdout.lock())
}
