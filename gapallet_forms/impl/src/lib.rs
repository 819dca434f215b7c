use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex, MutexGuard, PoisonError,
};

use gapallet_forms_contracts::{Notification, Notifier, SubmitOutcome};
use gapallet_models::{
    contact::ContactDraft,
    lead::Lead,
    quote::QuoteDraft,
    validation::ValidationError,
};
use gapallet_submission_contracts::SubmissionClient;
use gapallet_utils::trace_instrument;
use tracing::{debug, info, warn};

pub use crate::messages::{FormKind, FormMessages};

mod messages;
#[cfg(test)]
mod tests;

pub type ContactForm<Submission, Notify> = LeadForm<ContactDraft, Submission, Notify>;
pub type QuoteForm<Submission, Notify> = LeadForm<QuoteDraft, Submission, Notify>;

/// Controller of a single lead capture form instance.
///
/// Holds the raw field values, validates them on submit, hands the record to
/// the [`SubmissionClient`] and reports the outcome through the [`Notifier`].
/// At most one submission per instance is in flight at any time. Separate
/// instances are fully independent.
#[derive(Debug)]
pub struct LeadForm<Draft, Submission, Notify> {
    draft: Mutex<Draft>,
    submitting: AtomicBool,
    mounted: AtomicBool,
    messages: FormMessages,
    submission: Submission,
    notifier: Notify,
}

impl<Draft, Submission, Notify> LeadForm<Draft, Submission, Notify>
where
    Draft: FormKind,
    Submission: SubmissionClient,
    Notify: Notifier,
{
    pub fn new(submission: Submission, notifier: Notify) -> Self {
        Self::with_messages(submission, notifier, Draft::MESSAGES)
    }

    pub fn with_messages(submission: Submission, notifier: Notify, messages: FormMessages) -> Self {
        Self {
            draft: Mutex::new(Draft::default()),
            submitting: AtomicBool::new(false),
            mounted: AtomicBool::new(true),
            messages,
            submission,
            notifier,
        }
    }

    /// Set a single field. No validation happens here.
    pub fn update_field(&self, field: Draft::Field, value: impl Into<String>) {
        debug!(form = Draft::NAME, %field, "Update field");
        self.lock_draft().set(field, value.into());
    }

    /// Snapshot of the current field values.
    pub fn fields(&self) -> Draft {
        self.lock_draft().clone()
    }

    pub fn field(&self, field: Draft::Field) -> String {
        self.lock_draft().get(field).to_owned()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Label of the submit control, which switches to a pending text while a
    /// submission is in flight.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            self.messages.pending_label
        } else {
            self.messages.submit_label
        }
    }

    /// Mark the form as gone. A response that arrives afterwards is dropped
    /// without touching the fields or raising a notification.
    pub fn unmount(&self) {
        debug!(form = Draft::NAME, "Unmount");
        self.mounted.store(false, Ordering::Release);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Validate the current fields and send them to the backend.
    ///
    /// Validation, transport and server errors are all handled here: the
    /// user is notified and the form stays ready for another attempt. Fields
    /// are only cleared after the backend accepted the lead.
    #[trace_instrument(skip(self), fields(form = Draft::NAME))]
    pub async fn submit(&self) -> SubmitOutcome {
        if !self.is_mounted() {
            debug!("Form has been unmounted, ignoring submit");
            return SubmitOutcome::Discarded;
        }

        let Some(_submitting) = SubmittingGuard::acquire(&self.submitting) else {
            debug!("Submission already in flight, ignoring submit");
            return SubmitOutcome::AlreadySubmitting;
        };

        let validated = self.lock_draft().validate();
        let record = match validated {
            Ok(record) => record,
            Err(err) => {
                info!(%err, "Rejecting invalid form");
                self.notifier
                    .notify(Notification::error(self.validation_message(&err)));
                return SubmitOutcome::Invalid(err);
            }
        };

        let lead: Lead = record.into();
        info!(resource = %lead.resource(), "Submitting lead");
        let result = self.submission.post(lead).await;

        if !self.is_mounted() {
            debug!(ok = result.is_ok(), "Form has been unmounted, discarding response");
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(()) => {
                info!("Lead submitted");
                *self.lock_draft() = Draft::default();
                self.notifier
                    .notify(Notification::success(self.messages.submitted));
                SubmitOutcome::Submitted
            }
            Err(err) => {
                match err.status() {
                    Some(status) => warn!(status, %err, "Backend rejected lead"),
                    None => warn!(%err, "Failed to deliver lead"),
                }
                self.notifier
                    .notify(Notification::error(self.messages.failed));
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn validation_message(&self, err: &ValidationError) -> &'static str {
        if err.has_missing_fields() {
            return self.messages.missing_fields;
        }
        err.invalid_fields()
            .next()
            .map_or(self.messages.missing_fields, messages::invalid_field)
    }

    fn lock_draft(&self) -> MutexGuard<'_, Draft> {
        self.draft.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds the submitting flag and clears it when dropped, which includes the
/// submit future being dropped mid-flight.
struct SubmittingGuard<'a>(&'a AtomicBool);

impl<'a> SubmittingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
