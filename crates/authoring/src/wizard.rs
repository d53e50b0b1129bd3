use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::draft::TripDraft;
use crate::validate::{self, DraftError};

/// The three screens of the trip-creation wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Details,
    Schedule,
    Review,
}

impl WizardStep {
    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Details => Some(WizardStep::Schedule),
            WizardStep::Schedule => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    pub fn back(self) -> Option<WizardStep> {
        match self {
            WizardStep::Details => None,
            WizardStep::Schedule => Some(WizardStep::Details),
            WizardStep::Review => Some(WizardStep::Schedule),
        }
    }
}

/// Moves the wizard forward if the current step validates.
///
/// Going back never validates; only forward navigation is gated. Advancing
/// from the review step re-runs every rule and stays on review, which is
/// how the submit button decides whether the draft may be posted.
pub fn advance(step: WizardStep, draft: &TripDraft) -> Result<WizardStep, Vec<DraftError>> {
    let errors = match step {
        WizardStep::Details => validate::validate_details(draft),
        WizardStep::Schedule => validate::validate_schedule(draft),
        WizardStep::Review => validate::validate(draft),
    };

    if !errors.is_empty() {
        warn!(?step, ?errors, "wizard step blocked by validation");
        return Err(errors);
    }

    Ok(step.next().unwrap_or(step))
}
