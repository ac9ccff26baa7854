//! Interactive search prompt.
//!
//! Prints the whole book, then reads one query per line and prints the
//! matching contacts until an empty line (or end of input) is read.

use crate::book::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "what to search? > ";

/// Run the prompt against `book`, reading queries from `input` and writing
/// everything the user sees to `output`.
pub fn run_prompt<R, W>(book: &AddressBook, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "= all book =\n{}", book)?;
    writeln!(output, "\n! empty input for exit !")?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        let read = input.read_line(&mut line)?;
        let query = line.trim_end_matches(['\r', '\n']);

        if read == 0 || query.is_empty() {
            writeln!(output, "good bye!")?;
            return Ok(());
        }

        debug!(query, "Prompt query");
        let matches = book.find(query);
        if matches.is_empty() {
            writeln!(output, "no matches")?;
        } else {
            writeln!(output, "matches:\n{}", matches)?;
        }
    }
}
