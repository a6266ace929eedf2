use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Raw mode, alternate screen and mouse capture (wheel scrolling and card clicks).
pub fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// Undo [`setup_terminal`].
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// Restores the terminal when dropped unless [`TerminalGuard::release`] already did.
///
/// Covers early returns between setup and the normal teardown path.
pub struct TerminalGuard {
    armed: bool,
}

impl TerminalGuard {
    /// What: Set up the terminal and return a guard that undoes it.
    ///
    /// Inputs:
    /// - `headless`: When `true` nothing is touched and the guard is inert.
    pub fn acquire(headless: bool) -> Result<Self> {
        if !headless {
            setup_terminal()?;
        }
        Ok(Self { armed: !headless })
    }

    /// Restore now, reporting errors, and make the drop a no-op.
    pub fn release(mut self) -> Result<()> {
        if std::mem::replace(&mut self.armed, false) {
            restore_terminal()?;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.armed
            && let Err(e) = restore_terminal()
        {
            tracing::error!(error = %e, "failed to restore terminal");
        }
    }
}
