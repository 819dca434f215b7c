use std::net::Ipv4Addr;

use gapallet_forms_contracts::{MockNotifier, Notification, SubmitOutcome};
use gapallet_forms_impl::{ContactForm, QuoteForm};
use gapallet_models::{
    contact::{ContactDraft, ContactField},
    lead::LeadResource,
    quote::{QuoteDraft, QuoteField},
};
use gapallet_submission_impl::{SubmissionClientConfig, SubmissionClientImpl};
use gapallet_testing::{
    backend::{self, RunningMockBackend},
    StatusCode,
};
use gapallet_utils::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;

async fn make_backend() -> (RunningMockBackend, SubmissionClientImpl) {
    let backend = backend::spawn(Ipv4Addr::LOCALHOST.into(), 0).await.unwrap();
    let config = SubmissionClientConfig::new(backend.base_url().clone()).unwrap();
    let client = SubmissionClientImpl::new(config).unwrap();
    (backend, client)
}

#[tokio::test]
async fn contact_submitted() {
    // Arrange
    let (backend, client) = make_backend().await;
    let notifier = MockNotifier::new().with_notify(Notification::success(
        "Message sent successfully! We'll get back to you soon.",
    ));
    let sut = ContactForm::new(client, notifier);
    sut.update_field(ContactField::Name, "Jane Doe");
    sut.update_field(ContactField::Email, "jane@example.com");
    sut.update_field(ContactField::Message, "Need 200 pallets");

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, SubmitOutcome::Submitted);
    assert_eq!(backend.post_count(), 1);
    assert_eq!(
        backend.received(LeadResource::Contact),
        [json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "message": "Need 200 pallets",
        })]
    );
    assert_eq!(backend.contacts().len(), 1);
    assert_eq!(sut.fields(), ContactDraft::default());
}

#[tokio::test]
async fn contact_missing_message_is_not_sent() {
    // Arrange
    let (backend, client) = make_backend().await;
    let notifier = MockNotifier::new()
        .with_notify(Notification::error("Please fill in all required fields"));
    let sut = ContactForm::new(client, notifier);
    sut.update_field(ContactField::Name, "Jane Doe");
    sut.update_field(ContactField::Email, "jane@example.com");

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, SubmitOutcome::Invalid(_));
    assert_eq!(backend.post_count(), 0);
    assert_eq!(sut.field(ContactField::Name), "Jane Doe");
}

#[tokio::test]
async fn contact_sends_every_filled_field() {
    // Arrange
    let (backend, client) = make_backend().await;
    let notifier = MockNotifier::new().with_notify(Notification::success(
        "Message sent successfully! We'll get back to you soon.",
    ));
    let sut = ContactForm::new(client, notifier);
    sut.update_field(ContactField::Name, "Test User");
    sut.update_field(ContactField::Email, "test@example.com");
    sut.update_field(ContactField::Phone, "(713) 555-0123");
    sut.update_field(ContactField::Company, "Test Company");
    sut.update_field(ContactField::Message, "This is a test message.");

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, SubmitOutcome::Submitted);
    assert_eq!(
        backend.received(LeadResource::Contact),
        [json!({
            "name": "Test User",
            "email": "test@example.com",
            "phone": "(713) 555-0123",
            "company": "Test Company",
            "message": "This is a test message.",
        })]
    );
}

#[tokio::test]
async fn quote_server_error_keeps_fields() {
    // Arrange
    let (backend, client) = make_backend().await;
    backend.fail_with(Some(StatusCode::INTERNAL_SERVER_ERROR));
    let notifier = MockNotifier::new().with_notify(Notification::error(
        "Failed to send quote request. Please try again.",
    ));
    let sut = QuoteForm::new(client, notifier);
    let draft = QuoteDraft {
        name: "Test Customer".into(),
        email: "customer@example.com".into(),
        phone: "(713) 555-0456".into(),
        company: "Test Logistics".into(),
        pallet_type: "GMA Stringer Pallet".into(),
        quantity: "12".into(),
        dimensions: "48x40x6".into(),
        additional_info: "Need ISPM-15 certification for export.".into(),
    };
    sut.update_field(QuoteField::Name, &draft.name);
    sut.update_field(QuoteField::Email, &draft.email);
    sut.update_field(QuoteField::Phone, &draft.phone);
    sut.update_field(QuoteField::Company, &draft.company);
    sut.update_field(QuoteField::PalletType, &draft.pallet_type);
    sut.update_field(QuoteField::Quantity, &draft.quantity);
    sut.update_field(QuoteField::Dimensions, &draft.dimensions);
    sut.update_field(QuoteField::AdditionalInfo, &draft.additional_info);

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, SubmitOutcome::Failed(err) if err.status() == Some(500));
    assert_eq!(
        backend.received(LeadResource::Quote),
        [json!({
            "name": "Test Customer",
            "email": "customer@example.com",
            "phone": "(713) 555-0456",
            "company": "Test Logistics",
            "pallet_type": "GMA Stringer Pallet",
            "quantity": 12,
            "dimensions": "48x40x6",
            "additional_info": "Need ISPM-15 certification for export.",
        })]
    );
    assert!(backend.quotes().is_empty());
    assert_eq!(sut.fields(), draft);
}

#[tokio::test]
async fn quote_retry_after_failure() {
    // Arrange
    let (backend, client) = make_backend().await;
    backend.fail_with(Some(StatusCode::SERVICE_UNAVAILABLE));
    let notifier = MockNotifier::new()
        .with_notify(Notification::error(
            "Failed to send quote request. Please try again.",
        ))
        .with_notify(Notification::success(
            "Quote request sent successfully! Our team responds within 24 hours.",
        ));
    let sut = QuoteForm::new(client, notifier);
    sut.update_field(QuoteField::Name, "Test Customer");
    sut.update_field(QuoteField::Email, "customer@example.com");
    sut.update_field(QuoteField::PalletType, "Half Pallet");
    sut.update_field(QuoteField::Quantity, "abc");

    // Act
    let first = sut.submit().await;
    backend.fail_with(None);
    let second = sut.submit().await;

    // Assert
    assert_matches!(first, SubmitOutcome::Failed(err) if err.status() == Some(503));
    assert_matches!(second, SubmitOutcome::Submitted);
    assert_eq!(backend.post_count(), 2);
    let quotes = backend.quotes();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0]["pallet_type"], "Half Pallet");
    assert_eq!(quotes[0]["quantity"], serde_json::Value::Null);
    assert_eq!(sut.fields(), QuoteDraft::default());
}
