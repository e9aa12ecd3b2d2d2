use std::io;
use std::process::Stdio;

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Raised only when every clipboard path has failed; the caller surfaces it
/// and the user copies the address by hand.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("no clipboard mechanism succeeded")]
    Exhausted,
}

/// Copies text to the system clipboard.
///
/// The primary path talks to the platform clipboard through `arboard` on
/// the blocking pool. When that fails (headless session, missing display
/// server) the fallback pipes the text into the platform copy command
/// instead.
pub async fn copy(text: &str) -> Result<(), CopyError> {
    match primary(text.to_owned()).await {
        Ok(()) => Ok(()),
        Err(e) => {
            debug!("primary clipboard path failed: {}", e);
            fallback(COPY_COMMANDS, text).await
        }
    }
}

async fn primary(text: String) -> Result<(), CopyError> {
    let result = tokio::task::spawn_blocking(move || {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| CopyError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| CopyError::Unavailable(e.to_string()))
    })
    .await;

    match result {
        Ok(inner) => inner,
        Err(e) => Err(CopyError::Unavailable(e.to_string())),
    }
}

/// Candidate copy commands for the current platform, tried in order.
#[cfg(target_os = "linux")]
const COPY_COMMANDS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--input", "--clipboard"],
];

#[cfg(target_os = "macos")]
const COPY_COMMANDS: &[&[&str]] = &[&["pbcopy"]];

#[cfg(target_os = "windows")]
const COPY_COMMANDS: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const COPY_COMMANDS: &[&[&str]] = &[];

/// Tries each candidate copy command in order until one takes the text.
async fn fallback(commands: &[&[&str]], text: &str) -> Result<(), CopyError> {
    for argv in commands {
        match pipe_into(argv, text).await {
            Ok(true) => return Ok(()),
            Ok(false) => debug!("{} exited non-zero", argv[0]),
            Err(e) => debug!("{} failed to run: {}", argv[0], e),
        }
    }
    Err(CopyError::Exhausted)
}

/// Pipes `text` into one copy command. The child's stdin handle is dropped
/// on every path, so the pipe always closes and the child can exit.
async fn pipe_into(argv: &[&str], text: &str) -> io::Result<bool> {
    let mut child = Command::new(argv[0])
        .args(&argv[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).await?;
    }

    let status = child.wait().await?;
    Ok(status.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn fallback_succeeds_once_a_candidate_accepts_the_text() {
        // First candidate is missing, second exits non-zero, `cat` then
        // drains the piped text and exits zero.
        let commands: &[&[&str]] = &[&["no-such-copy-command"], &["false"], &["cat"]];
        assert!(fallback(commands, "johndoe+12345@crosseven.com")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn fallback_is_exhausted_when_every_candidate_fails() {
        let commands: &[&[&str]] = &[&["no-such-copy-command"]];
        let err = fallback(commands, "johndoe+12345@crosseven.com")
            .await
            .unwrap_err();
        assert!(matches!(err, CopyError::Exhausted));
    }

    #[tokio::test]
    async fn an_empty_candidate_list_is_exhausted_immediately() {
        let err = fallback(&[], "johndoe+12345@crosseven.com")
            .await
            .unwrap_err();
        assert!(matches!(err, CopyError::Exhausted));
    }
}
