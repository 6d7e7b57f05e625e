// Menu module: interactive driver over the session.

pub mod handler;
pub mod input;

use crate::model::InputError;
use crate::session::Session;
use handler::{Flow, handle_choice};
use input::read_number;
use std::io::{BufRead, Write};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LoadData,
    Statistics,
    Range,
    Growth,
    Exit,
}

impl MenuChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::LoadData),
            2 => Some(MenuChoice::Statistics),
            3 => Some(MenuChoice::Range),
            4 => Some(MenuChoice::Growth),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub fn display_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\n==========================================")?;
    writeln!(out, "  STRATEGIC INVESTMENT & PORTFOLIO MANAGER ")?;
    writeln!(out, "==========================================")?;
    writeln!(out, "1. Load Historical Price Data")?;
    writeln!(out, "2. Statistical Risk & Return Analysis")?;
    writeln!(out, "3. Price Range Analysis (Sorting)")?;
    writeln!(out, "4. Future Growth Forecast")?;
    writeln!(out, "5. Exit")?;
    write!(out, "Selection: ")?;
    out.flush()
}

/// Runs the menu until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> Result<(), InputError> {
    loop {
        display_menu(out)?;
        let step = match read_number::<i64, _>(input) {
            Ok(Some(number)) => match MenuChoice::from_number(number) {
                Some(choice) => handle_choice(choice, session, input, out),
                None => {
                    writeln!(out, "\n[!] Invalid selection. Try again.")?;
                    Ok(Flow::Continue)
                }
            },
            Ok(None) => {
                writeln!(out, "Non-numeric input detected.")?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        };

        match step {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(InputError::Eof) => {
                info!("Input closed, leaving menu");
                writeln!(out, "\nExiting...")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}
