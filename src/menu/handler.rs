// menu/handler.rs

use crate::menu::MenuChoice;
use crate::menu::input::prompt_number;
use crate::model::{AnalysisError, InputError, LoadError};
use crate::session::Session;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Whether the menu loop keeps going after a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Handles a menu selection and runs the corresponding action.
pub fn handle_choice<R: BufRead, W: Write>(
    choice: MenuChoice,
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> Result<Flow, InputError> {
    info!("Handling menu choice: {:?}", choice);
    match choice {
        MenuChoice::LoadData => handle_load(session, out)?,
        MenuChoice::Statistics => {
            if !session.series().is_analyzable() {
                writeln!(out, "\n[!] Error: Load at least 2 days of data first.")?;
            } else {
                handle_statistics(session, out)?;
            }
        }
        MenuChoice::Range => {
            if !session.series().is_analyzable() {
                writeln!(out, "\n[!] Error: Load at least 2 days of data first.")?;
            } else {
                handle_range(session, out)?;
            }
        }
        MenuChoice::Growth => handle_growth(session, input, out)?,
        MenuChoice::Exit => {
            writeln!(out, "\nExiting...")?;
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

fn handle_load<W: Write>(session: &mut Session, out: &mut W) -> Result<(), InputError> {
    match session.load() {
        Ok(summary) => {
            writeln!(out, "\n[+] Successfully loaded {} price points.", summary.loaded)?;
            if session.series().is_empty() {
                writeln!(out, "[!] Warning: the price file contained no numeric values.")?;
            }
            if let Some(token) = summary.rejected_token {
                writeln!(out, "[!] Warning: stopped reading at non-numeric value '{}'.", token)?;
            }
            if summary.truncated > 0 {
                writeln!(
                    out,
                    "[!] Warning: {} price points beyond the {}-point limit were ignored.",
                    summary.truncated,
                    session.series().capacity()
                )?;
            }
        }
        Err(LoadError::NotFound(path)) => {
            warn!("Price file missing: {}", path.display());
            writeln!(out, "\n[!] Error: '{}' not found! Please create it.", path.display())?;
        }
        Err(e) => {
            warn!("Price load failed: {}", e);
            writeln!(out, "\n[!] Error: {}", e)?;
        }
    }
    Ok(())
}

fn handle_statistics<W: Write>(session: &Session, out: &mut W) -> Result<(), InputError> {
    let stats = match session.analyze() {
        Ok(stats) => stats,
        Err(e) => return report_analysis_error(e, out),
    };

    writeln!(out, "\n--- STATISTICAL ANALYSIS ---")?;
    writeln!(out, "Average Daily Return: {:.2}%", stats.mean_return * 100.0)?;
    writeln!(out, "Risk Level (Std Dev): {:.2}%", stats.std_dev * 100.0)?;
    writeln!(out, "Investment Status:    {}", stats.category)?;

    match session.save_report(&stats) {
        Ok(()) => writeln!(
            out,
            "\n[i] Summary report generated as '{}'",
            session.report_path().display()
        )?,
        Err(e) => {
            debug!("Report not saved: {:?}", e);
            writeln!(out, "[!] Error saving report.")?
        }
    }
    Ok(())
}

fn handle_range<W: Write>(session: &Session, out: &mut W) -> Result<(), InputError> {
    let range = match session.analyze_range() {
        Ok(range) => range,
        Err(e) => return report_analysis_error(e, out),
    };
    let currency = &session.config().currency;

    writeln!(out, "\n--- PRICE RANGE ANALYSIS ---")?;
    write!(out, "Sorted Prices: ")?;
    for price in &range.sorted {
        write!(out, "{:.2} ", price)?;
    }
    writeln!(out)?;
    writeln!(out, "\nLowest Recorded Price:  {}{:.2}", currency, range.min)?;
    writeln!(out, "Highest Recorded Price: {}{:.2}", currency, range.max)?;
    writeln!(out, "Total Price Spread:      {}{:.2}", currency, range.spread)?;
    Ok(())
}

fn handle_growth<R: BufRead, W: Write>(
    session: &Session,
    input: &mut R,
    out: &mut W,
) -> Result<(), InputError> {
    let currency = session.config().currency.clone();
    let principal: f64 = prompt_number(
        input,
        out,
        &format!("\nEnter Principal Investment ({}): ", currency),
    )?;
    let rate: f64 = prompt_number(
        input,
        out,
        "Enter Expected Annual Return Rate (e.g., 0.07 for 7%): ",
    )?;
    let years: i64 = prompt_number(input, out, "Enter Investment Duration (Years): ")?;

    match session.project_growth(principal, rate, years) {
        Ok(total) => writeln!(out, "\n>>> Projected Portfolio Value: {}{:.2}", currency, total)?,
        Err(e) => report_analysis_error(e, out)?,
    }
    Ok(())
}

fn report_analysis_error<W: Write>(error: AnalysisError, out: &mut W) -> Result<(), InputError> {
    warn!("Analysis rejected: {}", error);
    match error {
        AnalysisError::InsufficientData { .. } => {
            writeln!(out, "\n[!] Error: Load at least 2 days of data first.")?
        }
        other => writeln!(out, "\n[!] Error: {}.", other)?,
    }
    Ok(())
}
