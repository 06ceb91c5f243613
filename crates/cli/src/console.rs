//! Interactive prompts and input validation.
//!
//! The `parse_*` functions turn one raw input line into a typed choice and
//! are pure. `Console` owns the reader/writer pair and re-asks until a
//! parser accepts the answer; there is no retry limit. Closed input is the
//! only way out of a prompt and surfaces as `io::ErrorKind::UnexpectedEof`.

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use trip_loader::{City, DayOfWeek, FilterSelection, Month};

/// City picked by its 1-based position in `City::ALL`
pub fn parse_city_choice(input: &str) -> Option<City> {
    let number: usize = input.trim().parse().ok()?;
    City::ALL.get(number.checked_sub(1)?).copied()
}

/// '1'..'6' picks January..June, 'a' means all months.
///
/// Returns `None` for invalid input and `Some(None)` for "all".
pub fn parse_month_choice(input: &str) -> Option<Option<Month>> {
    match input.trim() {
        "a" => Some(None),
        code => Some(Some(Month::from_number(single_digit(code)?)?)),
    }
}

/// '1'..'7' picks Monday..Sunday, 'a' means all days.
///
/// Returns `None` for invalid input and `Some(None)` for "all".
pub fn parse_day_choice(input: &str) -> Option<Option<DayOfWeek>> {
    match input.trim() {
        "a" => Some(None),
        code => Some(Some(DayOfWeek::from_index(single_digit(code)?.checked_sub(1)?)?)),
    }
}

/// "yes" or "no", case-insensitive
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Only a lone digit is a valid menu code ("01" and "+1" are not)
fn single_digit(code: &str) -> Option<u32> {
    let mut chars = code.chars();
    let digit = chars.next()?.to_digit(10)?;
    chars.next().is_none().then_some(digit)
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `question` and read one line, without the line ending.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so a
    /// garbled line is just another answer no parser accepts.
    fn read_answer(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "console input closed").into());
        }
        Ok(String::from_utf8_lossy(&line)
            .trim_end_matches(['\r', '\n'])
            .to_string())
    }

    /// Ask until `parse` accepts the answer, printing `retry_hint` after
    /// each rejected one
    pub fn ask_until<T>(
        &mut self,
        question: &str,
        retry_hint: Option<&str>,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T> {
        loop {
            let answer = self.read_answer(question)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            tracing::debug!("Rejected input {:?}", answer);
            if let Some(hint) = retry_hint {
                writeln!(self.output, "        >>>>  {}", hint.yellow())?;
            }
        }
    }

    /// True only for "yes" (any case); every other answer is a no
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.read_answer(question)?;
        Ok(answer.trim().eq_ignore_ascii_case("yes"))
    }

    pub fn select_city(&mut self) -> Result<City> {
        for (idx, city) in City::ALL.iter().enumerate() {
            writeln!(self.output, "        {:>2}. {}", idx + 1, city)?;
        }
        let question = format!(
            "\n    Enter a number for the city from list above (1 - {}):  ",
            City::ALL.len()
        );
        self.ask_until(&question, None, parse_city_choice)
    }

    pub fn select_month(&mut self) -> Result<Option<Month>> {
        self.ask_until(
            "    Select the month from January to June (1 thru 6) or 'a' for all:  ",
            Some("Pls try again! Valid inputs only:  1 thru 6 or a"),
            parse_month_choice,
        )
    }

    pub fn select_day(&mut self) -> Result<Option<DayOfWeek>> {
        self.ask_until(
            "    Enter the day from Monday to Sunday (1 thru 7) or 'a' for all:  ",
            Some("Pls try again! Valid inputs only:  1 thru 7 or a"),
            parse_day_choice,
        )
    }

    /// City, then month, then day
    pub fn select_filters(&mut self) -> Result<FilterSelection> {
        let city = self.select_city()?;
        let month = self.select_month()?;
        let day = self.select_day()?;
        Ok(FilterSelection::new(city, month, day))
    }
}

/// True when `err` means the console input was closed
pub fn is_input_closed(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}
