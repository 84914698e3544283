use std::io::{BufRead, Write};

use crate::prelude::{AppError, Contact};

// OUTPUT FUNCTIONS
pub fn show_menu<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "\n")?;
    writeln!(out, "1. Add Contact")?;
    writeln!(out, "2. List Contacts")?;
    writeln!(out, "3. List Contacts as JSON")?;
    writeln!(out, "4. Exit")?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

pub fn prompt<W: Write>(out: &mut W, message: &str) -> Result<(), AppError> {
    writeln!(out, "\n{} \n* to go back: ", message)?;
    out.flush()?;
    Ok(())
}

pub fn display_contact(position: usize, contact: &Contact) -> String {
    format!(
        "{position:>3}. {:<15} {:<15} {}",
        contact.first_name, contact.last_name, contact.phone_number
    )
}

// INPUT FUNCTIONS

/// Reads one trimmed line, or `None` once the input is exhausted.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
