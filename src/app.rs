//! The list → select → activate workflow.

use std::io::Write;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::gcloud::Gcloud;
use crate::profile::{Profile, activate_profile, list_profiles, print_profiles};
use crate::tui::{self, Selection};

pub const CANCELLED_NOTICE: &str = "Cancelled, active configuration unchanged.";

/// Anything that can ask the operator to choose among profiles.
pub trait Picker {
    fn pick(&mut self, profiles: &[Profile]) -> Result<Selection>;
}

/// The ratatui menu on the controlling terminal.
pub struct TerminalPicker;

impl Picker for TerminalPicker {
    fn pick(&mut self, profiles: &[Profile]) -> Result<Selection> {
        tui::select_profile(profiles)
    }
}

/// How a run ended, when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Activated(String),
    Cancelled,
}

/// List, let the operator choose, then activate. UI failures count as a cancel.
pub fn run_interactive(
    gcloud: &Gcloud,
    picker: &mut impl Picker,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome> {
    let profiles = list_profiles(gcloud)?;

    let picked = picker
        .pick(&profiles)
        .and_then(|selection| match selection {
            Selection::Chosen(i) => profiles
                .get(i)
                .map(Some)
                .ok_or_else(|| Error::Ui(format!("selection {} is out of range", i))),
            Selection::Cancelled => Ok(None),
        });

    let chosen = match picked {
        Ok(chosen) => chosen,
        Err(Error::Ui(msg)) => {
            warn!("terminal UI failed: {}", msg);
            writeln!(err, "Prompt failed: {}", msg)?;
            None
        }
        Err(e) => return Err(e),
    };

    match chosen {
        None => {
            info!("selection cancelled");
            writeln!(out, "{}", CANCELLED_NOTICE)?;
            Ok(Outcome::Cancelled)
        }
        Some(profile) => {
            let output = activate_profile(gcloud, &profile.name)?;
            out.write_all(&output)?;
            out.flush()?;
            Ok(Outcome::Activated(profile.name.clone()))
        }
    }
}

/// `gcswitch list`
pub fn run_list(gcloud: &Gcloud, out: &mut impl Write) -> Result<()> {
    let profiles = list_profiles(gcloud)?;
    print_profiles(&profiles, out)
}

/// `gcswitch use <name>`
pub fn run_use(gcloud: &Gcloud, name: &str, out: &mut impl Write) -> Result<Outcome> {
    let output = activate_profile(gcloud, name)?;
    out.write_all(&output)?;
    out.flush()?;
    Ok(Outcome::Activated(name.to_string()))
}
