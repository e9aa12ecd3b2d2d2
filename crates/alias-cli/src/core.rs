use std::time::Duration;

use alias::models::address::AliasAddress;
use alias::services::error::ValidationError;
use alias::services::generator::generate_alias;
use alias::services::store::NameStore;
use alias::services::track::{track, UsageEvent};
use alias::services::validate::validate;
use chrono::Utc;
use thiserror::Error;
use tokio::time::sleep;

use crate::clipboard::{self, CopyError};

/// Pause shown behind the "Generating..." status. Purely cosmetic.
const GENERATE_DELAY: Duration = Duration::from_millis(300);

/// Everything that can stop a user action. Validation and clipboard
/// failures are scoped to the single action that produced them; only prompt
/// I/O failures end the run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to copy email. Please select and copy manually. ({0})")]
    Clipboard(#[from] CopyError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),
}

/// Runs one generate action start to finish: loading state, validation,
/// generation, usage tracking. One explicit sequence rather than wrappers
/// layered around the generator.
pub async fn run_generate(raw: &str) -> Result<AliasAddress, ValidationError> {
    println!("Generating...");
    sleep(GENERATE_DELAY).await;

    let name = validate(raw)?;

    // The generator re-checks for an empty local-part on its own. A valid
    // name can never hit that guard, so map it to the empty-input error.
    let address = match generate_alias(name.as_ref(), &mut rand::thread_rng()) {
        Some(address) => address,
        None => return Err(ValidationError::EmptyInput),
    };

    track(&UsageEvent::email_generated(raw, Utc::now()));
    Ok(address)
}

/// Copies a generated address and reports the success indicator.
pub async fn copy_address(address: &AliasAddress) -> Result<(), CopyError> {
    clipboard::copy(&address.to_string()).await?;
    track(&UsageEvent::email_copied(Utc::now()));
    println!("Email copied to clipboard!");
    Ok(())
}

/// One-shot mode: validate, generate, print, copy.
pub async fn run_once(raw: &str, copy: bool, store: Option<&NameStore>) -> Result<(), AppError> {
    if let Some(store) = store {
        store.save(raw);
    }

    let address = run_generate(raw).await?;
    println!("{}", address);

    if copy {
        copy_address(&address).await?;
    }

    Ok(())
}
