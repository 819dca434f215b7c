use std::io::Write;

use gapallet_forms_contracts::{Notification, NotificationKind, Notifier};

/// Prints notifications to the terminal: successes to stdout, errors to
/// stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        // a closed pipe is no reason to fail the submission
        let _ = match notification.kind {
            NotificationKind::Success => writeln!(std::io::stdout(), "✓ {}", notification.message),
            NotificationKind::Error => writeln!(std::io::stderr(), "✗ {}", notification.message),
        };
    }
}
