use gapallet_models::validation::ValidationError;
use gapallet_submission_contracts::SubmitError;

/// Shows transient notifications ("toasts") to the user.
///
/// How they are rendered is up to the environment.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, notification: Notification);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// What a call to `submit` ended with.
///
/// Every variant leaves the form idle and ready for another attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The backend accepted the lead and the form has been cleared.
    Submitted,
    /// Validation failed, nothing was sent.
    Invalid(ValidationError),
    /// The lead could not be delivered. The fields are kept for a retry.
    Failed(SubmitError),
    /// Another submission of the same form is still in flight. Nothing was
    /// sent.
    AlreadySubmitting,
    /// The form was unmounted, either before `submit` was called (nothing was
    /// sent) or before the backend responded (the response has been dropped).
    Discarded,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

#[cfg(feature = "mock")]
impl MockNotifier {
    pub fn with_notify(mut self, notification: Notification) -> Self {
        self.expect_notify()
            .once()
            .with(mockall::predicate::eq(notification))
            .return_const(());
        self
    }
}
