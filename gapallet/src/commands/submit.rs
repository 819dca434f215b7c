use std::process::ExitCode;

use clap::Args;
use gapallet_forms_contracts::{Notifier, SubmitOutcome};
use gapallet_forms_impl::{FormKind, LeadForm};
use gapallet_models::{contact::ContactField, quote::QuoteField};
use gapallet_submission_contracts::SubmissionClient;

/// Values for the contact form. Every field is optional on the command line
/// so that the form itself reports what is missing.
#[derive(Debug, Default, Args)]
pub struct ContactArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,
    /// Email address
    #[arg(long)]
    pub email: Option<String>,
    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,
    /// Company name
    #[arg(long)]
    pub company: Option<String>,
    /// The message to send
    #[arg(long, short)]
    pub message: Option<String>,
}

impl ContactArgs {
    pub fn fields(self) -> Vec<(ContactField, String)> {
        [
            (ContactField::Name, self.name),
            (ContactField::Email, self.email),
            (ContactField::Phone, self.phone),
            (ContactField::Company, self.company),
            (ContactField::Message, self.message),
        ]
        .into_iter()
        .filter_map(|(field, value)| Some((field, value?)))
        .collect()
    }
}

/// Values for the quote request form.
#[derive(Debug, Default, Args)]
pub struct QuoteArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,
    /// Email address
    #[arg(long)]
    pub email: Option<String>,
    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,
    /// Company name
    #[arg(long)]
    pub company: Option<String>,
    /// One of the labels printed by `pallet-types`
    #[arg(long, short)]
    pub pallet_type: Option<String>,
    /// Number of pallets
    #[arg(long, short)]
    pub quantity: Option<String>,
    /// Custom dimensions
    #[arg(long)]
    pub dimensions: Option<String>,
    /// Anything else we should know
    #[arg(long)]
    pub additional_info: Option<String>,
}

impl QuoteArgs {
    pub fn fields(self) -> Vec<(QuoteField, String)> {
        [
            (QuoteField::Name, self.name),
            (QuoteField::Email, self.email),
            (QuoteField::Phone, self.phone),
            (QuoteField::Company, self.company),
            (QuoteField::PalletType, self.pallet_type),
            (QuoteField::Quantity, self.quantity),
            (QuoteField::Dimensions, self.dimensions),
            (QuoteField::AdditionalInfo, self.additional_info),
        ]
        .into_iter()
        .filter_map(|(field, value)| Some((field, value?)))
        .collect()
    }
}

/// Fill a fresh form with the given values and submit it once.
pub async fn submit<Draft: FormKind>(
    submission: impl SubmissionClient,
    notifier: impl Notifier,
    fields: impl IntoIterator<Item = (Draft::Field, String)>,
) -> SubmitOutcome {
    let form = LeadForm::<Draft, _, _>::new(submission, notifier);
    for (field, value) in fields {
        form.update_field(field, value);
    }
    form.submit().await
}

pub fn exit_code(outcome: &SubmitOutcome) -> ExitCode {
    match outcome {
        SubmitOutcome::Submitted => ExitCode::SUCCESS,
        SubmitOutcome::Invalid(_) => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use gapallet_forms_contracts::{MockNotifier, Notification};
    use gapallet_models::{contact::ContactDraft, quote::QuoteDraft};
    use gapallet_submission_contracts::MockSubmissionClient;
    use gapallet_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn contact_args_skip_unset_fields() {
        // Arrange
        let args = ContactArgs {
            name: Some("Jane Doe".into()),
            message: Some("Need 200 pallets".into()),
            ..Default::default()
        };

        // Act
        let fields = args.fields();

        // Assert
        assert_eq!(
            fields,
            [
                (ContactField::Name, "Jane Doe".into()),
                (ContactField::Message, "Need 200 pallets".into()),
            ]
        );
    }

    #[test]
    fn quote_args_keep_raw_values() {
        // Arrange
        let args = QuoteArgs {
            pallet_type: Some("drum pallet".into()),
            quantity: Some("a dozen".into()),
            ..Default::default()
        };

        // Act
        let fields = args.fields();

        // Assert
        assert_eq!(
            fields,
            [
                (QuoteField::PalletType, "drum pallet".into()),
                (QuoteField::Quantity, "a dozen".into()),
            ]
        );
    }

    #[tokio::test]
    async fn missing_fields_are_not_sent() {
        // Arrange
        let notifier = MockNotifier::new()
            .with_notify(Notification::error("Please fill in all required fields"));

        // Act
        let outcome = submit::<ContactDraft>(
            MockSubmissionClient::new(),
            notifier,
            ContactArgs {
                name: Some("Jane Doe".into()),
                ..Default::default()
            }
            .fields(),
        )
        .await;

        // Assert
        assert_matches!(&outcome, SubmitOutcome::Invalid(_));
        assert_eq!(exit_code(&outcome), ExitCode::from(2));
    }

    #[tokio::test]
    async fn unknown_pallet_type_is_not_sent() {
        // Arrange
        let notifier = MockNotifier::new().with_notify(Notification::error(
            "Please select a pallet type from our catalog",
        ));

        // Act
        let outcome = submit::<QuoteDraft>(
            MockSubmissionClient::new(),
            notifier,
            QuoteArgs {
                name: Some("Test Customer".into()),
                email: Some("customer@example.com".into()),
                pallet_type: Some("Plastic Pallet".into()),
                ..Default::default()
            }
            .fields(),
        )
        .await;

        // Assert
        assert_matches!(outcome, SubmitOutcome::Invalid(_));
    }

    #[test]
    fn exit_codes() {
        assert_eq!(exit_code(&SubmitOutcome::Submitted), ExitCode::SUCCESS);
        assert_eq!(exit_code(&SubmitOutcome::Discarded), ExitCode::FAILURE);
        assert_eq!(
            exit_code(&SubmitOutcome::AlreadySubmitting),
            ExitCode::FAILURE
        );
    }
}
