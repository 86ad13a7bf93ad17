//! Interactive franchise application.

use std::io::{self, BufRead, Write};

use crate::application::services::{ApplicationDraft, ApplicationWizard, WizardStep};
use crate::domain::entities::FranchiseeApplication;
use crate::domain::errors::ValidationError;

use super::prompt::Prompter;

/// Walks the wizard one step at a time until it submits or the user quits.
///
/// Returns `None` when the user quits.
///
/// # Errors
/// Returns error when the terminal input or output fails.
pub fn run_wizard<R: BufRead, W: Write>(
    wizard: &mut ApplicationWizard,
    io: &mut Prompter<R, W>,
) -> io::Result<Option<FranchiseeApplication>> {
    loop {
        let step = wizard.step();
        io.say(&format!(
            "\nStep {} of {}: {}\n",
            step.number(),
            WizardStep::ALL.len(),
            step.title()
        ))?;
        fill_step(wizard.draft_mut(), step, io)?;

        let result = if wizard.is_last_step() {
            wizard.submit().map(Some)
        } else {
            wizard.advance().map(|_| None)
        };

        match result {
            Ok(Some(application)) => return Ok(Some(application)),
            Ok(None) => {}
            Err(errors) => {
                show_errors(&errors, io)?;
                match io.ask("[r]etry, [b]ack or [q]uit")?.to_ascii_lowercase().as_str() {
                    "q" | "quit" => return Ok(None),
                    "b" | "back" => {
                        if wizard.back().is_none() {
                            io.say("Already on the first step.\n")?;
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

fn show_errors<R: BufRead, W: Write>(
    errors: &ValidationError,
    io: &mut Prompter<R, W>,
) -> io::Result<()> {
    io.say("Please fix:\n")?;
    for error in &errors.errors {
        io.say(&format!("  {error}\n"))?;
    }
    Ok(())
}

fn fill_step<R: BufRead, W: Write>(
    draft: &mut ApplicationDraft,
    step: WizardStep,
    io: &mut Prompter<R, W>,
) -> io::Result<()> {
    match step {
        WizardStep::Business => {
            draft.legal_name = io.ask_with_default("Legal name", &draft.legal_name)?;
            draft.legal_type =
                io.ask_with_default("Legal type (individual/corporation)", &draft.legal_type)?;
            draft.operating_name = io.ask_with_default("Operating name", &draft.operating_name)?;
            draft.business_number =
                io.ask_with_default("Business number (optional)", &draft.business_number)?;
            draft.tax_number = io.ask_with_default("HST number (optional)", &draft.tax_number)?;
        }
        WizardStep::Contact => {
            draft.contact_name = io.ask_with_default("Contact name", &draft.contact_name)?;
            draft.email = io.ask_with_default("Email", &draft.email)?;
            draft.phone = io.ask_with_default("Phone", &draft.phone)?;
            draft.address = io.ask_with_default("Street address", &draft.address)?;
            draft.city = io.ask_with_default("City", &draft.city)?;
            draft.province = io.ask_with_default("Province (e.g. ON)", &draft.province)?;
            draft.postal_code = io.ask_with_default("Postal code", &draft.postal_code)?;
        }
        WizardStep::Territory => {
            let current: Vec<&str> = draft.preferred_fsas().iter().map(|f| f.as_str()).collect();
            if !current.is_empty() {
                io.say(&format!("Selected FSAs: {}\n", current.join(", ")))?;
            }
            let answer = io.ask("Preferred FSAs to add, -FSA to remove (e.g. M5V, M5W)")?;
            let (removals, additions): (Vec<&str>, Vec<&str>) = answer
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .partition(|part| part.starts_with('-'));
            for error in draft.add_fsas(&additions.join(",")) {
                io.say(&format!("  {error}\n"))?;
            }
            for removal in removals {
                draft.remove_fsa(removal.trim_start_matches('-'));
            }
            draft.vehicle_access = io.confirm("Do you have vehicle access", draft.vehicle_access)?;
            draft.experience =
                io.ask_with_default("Cleaning experience (optional)", &draft.experience)?;
        }
        WizardStep::Agreements => {
            draft.agrees_to_hr_bank = io.confirm(
                "Agree to schedule all jobs through HR Bank",
                draft.agrees_to_hr_bank,
            )?;
            draft.agrees_to_insurance_minimums = io.confirm(
                "Agree to carry the minimum insurance coverage",
                draft.agrees_to_insurance_minimums,
            )?;
        }
    }
    Ok(())
}
