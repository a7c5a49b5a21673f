//! Acquisition of the terminal drawing surface.

use std::io::{self, IsTerminal};

use ratatui::DefaultTerminal;
use thiserror::Error;

/// Reasons the drawing surface cannot be used.
#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("stdout is not a terminal")]
    NotATerminal,

    #[error("unable to enter raw mode on the alternate screen")]
    Init(#[from] io::Error),
}

/// Take over the terminal as a full-screen drawing surface.
///
/// On failure the terminal is left as it was found.
pub fn acquire() -> Result<DefaultTerminal, SurfaceError> {
    acquire_with(io::stdout().is_terminal(), || {
        ratatui::try_init().inspect_err(|_| ratatui::restore())
    })
}

/// Run `init` to set up the surface, but only when stdout is a terminal.
fn acquire_with<T>(
    is_terminal: bool,
    init: impl FnOnce() -> io::Result<T>,
) -> Result<T, SurfaceError> {
    if !is_terminal {
        return Err(SurfaceError::NotATerminal);
    }
    Ok(init()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SurfaceError::NotATerminal.to_string(),
            "stdout is not a terminal"
        );
        let err = SurfaceError::from(io::Error::other("no tty"));
        assert!(matches!(err, SurfaceError::Init(_)));
        assert_eq!(
            err.to_string(),
            "unable to enter raw mode on the alternate screen"
        );
    }

    #[test]
    fn test_not_a_terminal_skips_init() {
        let mut initialized = false;
        let result = acquire_with(false, || {
            initialized = true;
            Ok(())
        });
        assert!(matches!(result, Err(SurfaceError::NotATerminal)));
        assert!(!initialized);
    }

    #[test]
    fn test_init_failure_is_reported() {
        let result: Result<(), _> = acquire_with(true, || Err(io::Error::other("raw mode")));
        assert!(matches!(result, Err(SurfaceError::Init(_))));
    }

    #[test]
    fn test_terminal_runs_init() {
        let result = acquire_with(true, || Ok(7));
        assert!(matches!(result, Ok(7)));
    }
}
