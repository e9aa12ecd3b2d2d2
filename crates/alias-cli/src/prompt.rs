use alias::services::store::NameStore;
use inquire::{Confirm, InquireError, Text};
use tracing::debug;

use crate::core::{self, AppError};

/// Interactive loop: prompt for a name, generate, offer to copy, repeat.
/// Esc or Ctrl-C leaves the loop.
pub async fn run(store: Option<&NameStore>) -> Result<(), AppError> {
    let mut last = store.and_then(|s| s.load()).unwrap_or_default();

    loop {
        let raw = match Text::new("Name:")
            .with_initial_value(&last)
            .with_help_message("letters, numbers, dots, hyphens, underscores")
            .prompt()
        {
            Ok(raw) => raw,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        if let Some(store) = store {
            store.save(&raw);
        }
        last = raw.clone();

        let address = match core::run_generate(&raw).await {
            Ok(address) => address,
            Err(e) => {
                // Inline, non-fatal; the next prompt is the refocus.
                println!("{}", e);
                continue;
            }
        };

        println!("{}", address);

        let copy = match Confirm::new("Copy to clipboard?")
            .with_default(true)
            .prompt()
        {
            Ok(copy) => copy,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        if copy {
            if let Err(e) = core::copy_address(&address).await {
                debug!("clipboard copy failed: {}", e);
                println!("Failed to copy email. Please select and copy manually.");
            }
        }
    }

    Ok(())
}
