// Line-oriented numeric input with validation
use crate::model::InputError;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Reads one line and parses its first token.
///
/// Returns `Ok(None)` when the token is not a valid `T`; the rest of the line
/// is discarded either way. End of input is `InputError::Eof`.
pub fn read_number<T: FromStr, R: BufRead>(input: &mut R) -> Result<Option<T>, InputError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Eof);
    }
    Ok(line
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<T>().ok()))
}

/// Prompts until a valid `T` is entered.
pub fn prompt_number<T, R, W>(input: &mut R, out: &mut W, prompt: &str) -> Result<T, InputError>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;
        match read_number(input)? {
            Some(value) => return Ok(value),
            None => writeln!(out, "Non-numeric input detected.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_first_token() {
        let mut input = Cursor::new("3 trailing junk\n");
        assert_eq!(read_number::<i64, _>(&mut input).unwrap(), Some(3));
    }

    #[test]
    fn non_numeric_discards_line() {
        let mut input = Cursor::new("abc 4\n2\n");
        assert_eq!(read_number::<i64, _>(&mut input).unwrap(), None);
        assert_eq!(read_number::<i64, _>(&mut input).unwrap(), Some(2));
    }

    #[test]
    fn eof_is_reported() {
        let mut input = Cursor::new("");
        assert!(matches!(read_number::<i64, _>(&mut input), Err(InputError::Eof)));
    }

    #[test]
    fn prompt_retries_until_valid() {
        let mut input = Cursor::new("x\n\n0.07\n");
        let mut out = Vec::new();
        let rate: f64 = prompt_number(&mut input, &mut out, "Rate: ").unwrap();
        assert_eq!(rate, 0.07);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Rate: ").count(), 3);
        assert_eq!(text.matches("Non-numeric input detected.").count(), 2);
    }
}
