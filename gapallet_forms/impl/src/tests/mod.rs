use std::{future::Future, pin::Pin};

use gapallet_forms_contracts::MockNotifier;
use gapallet_models::{
    contact::{ContactDraft, ContactField, ContactMessage},
    lead::{LeadDraft, LeadField},
    quote::{QuoteDraft, QuoteField, QuoteRequest},
    EmailAddress, LeadEmail, LeadName, MessageContent,
};
use gapallet_submission_contracts::{MockSubmissionClient, SubmitError};
use tokio::sync::oneshot;

use crate::{ContactForm, QuoteForm};


type ContactSut = ContactForm<MockSubmissionClient, MockNotifier>;
type QuoteSut = QuoteForm<MockSubmissionClient, MockNotifier>;

type PostFuture = Pin<Box<dyn Future<Output = Result<(), SubmitError>> + Send>>;

fn jane_doe() -> ContactDraft {
    ContactDraft {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        phone: String::new(),
        company: String::new(),
        message: "Need 200 pallets".into(),
    }
}

fn jane_doe_message() -> ContactMessage {
    ContactMessage {
        name: LeadName::try_new("Jane Doe").unwrap(),
        email: EmailAddress::try_new("jane@example.com").unwrap(),
        phone: None,
        company: None,
        message: MessageContent::try_new("Need 200 pallets").unwrap(),
    }
}

fn drum_quote() -> QuoteDraft {
    QuoteDraft {
        name: "Test Customer".into(),
        email: "customer@example.com".into(),
        pallet_type: "Drum Pallet".into(),
        quantity: "12".into(),
        ..Default::default()
    }
}

fn drum_quote_request() -> QuoteRequest {
    QuoteRequest {
        name: LeadName::try_new("Test Customer").unwrap(),
        email: LeadEmail::try_new("customer@example.com").unwrap(),
        phone: None,
        company: None,
        pallet_type: gapallet_models::pallet::PalletType::Drum,
        quantity: Some(12.into()),
        dimensions: None,
        additional_info: None,
    }
}

fn fill_contact(sut: &ContactSut, draft: &ContactDraft) {
    for &field in ContactField::ALL {
        sut.update_field(field, draft.get(field));
    }
}

fn fill_quote(sut: &QuoteSut, draft: &QuoteDraft) {
    for &field in QuoteField::ALL {
        sut.update_field(field, draft.get(field));
    }
}

fn server_error() -> SubmitError {
    SubmitError::Status {
        status: 500,
        message: "Internal Server Error".into(),
    }
}

/// A post that only resolves after the test released it. `started` fires as
/// soon as the request has been dispatched.
struct PendingPost {
    started: oneshot::Receiver<()>,
    release: oneshot::Sender<Result<(), SubmitError>>,
}

fn pending_post() -> (PendingPost, impl FnOnce() -> PostFuture) {
    let (started_tx, started_rx) = oneshot::channel();
    let (release_tx, release_rx) = oneshot::channel();
    let dispatch = move || -> PostFuture {
        let _ = started_tx.send(());
        Box::pin(async move {
            release_rx
                .await
                .unwrap_or_else(|_| Err(SubmitError::Transport(anyhow::anyhow!("cancelled"))))
        })
    };
    (
        PendingPost {
            started: started_rx,
            release: release_tx,
        },
        dispatch,
    )
}
