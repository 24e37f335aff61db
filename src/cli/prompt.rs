use std::fmt::Display;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Input ended before a choice was made")]
    InputClosed,

    #[error("Nothing to choose from")]
    NoChoices,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Prints `items` as a numbered menu under `title` and reads a choice.
///
/// Keeps asking until a number between 1 and `items.len()` is entered and
/// returns its zero-based index.
pub fn prompt_choice<T, R, W>(
    title: &str,
    items: &[T],
    input: &mut R,
    output: &mut W,
) -> Result<usize, PromptError>
where
    T: Display,
    R: BufRead,
    W: Write,
{
    if items.is_empty() {
        return Err(PromptError::NoChoices);
    }

    writeln!(output, "\n{}", title)?;
    for (i, item) in items.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, item)?;
    }

    let mut line = String::new();
    loop {
        write!(output, "Choose a number (1-{}): ", items.len())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=items.len()).contains(&n) => return Ok(n - 1),
            Ok(_) => writeln!(output, "Please enter a number between 1 and {}.", items.len())?,
            Err(_) => writeln!(output, "Please enter a number.")?,
        }
    }
}
