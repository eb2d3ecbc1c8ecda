use folio_contact::{Command, ContactFormFields, Field, SubmissionStatus};
use helpers::RecordingDelivery;
use strum::VariantArray;

mod helpers;

#[tokio::test]
async fn test_update_field_accepts_anything() -> anyhow::Result<()> {
    let command = Command::new(RecordingDelivery::default());

    for field in Field::VARIANTS {
        command.update_field(*field, "  ").await;
        assert_eq!(command.fields().await.get(*field), "  ");

        command.update_field(*field, "").await;
        assert_eq!(command.fields().await.get(*field), "");
    }

    assert_eq!(command.fields().await, ContactFormFields::default());
    assert_eq!(command.status().await, SubmissionStatus::Idle);

    Ok(())
}

#[tokio::test]
async fn test_update_field_named() -> anyhow::Result<()> {
    let command = Command::new(RecordingDelivery::default());

    command.update_field_named("name", "John Doe").await?;
    command.update_field_named("email", "john@example.com").await?;
    command.update_field_named("subject", "Hello").await?;
    command.update_field_named("message", "Hello there, friend").await?;

    let fields = command.fields().await;
    assert_eq!(fields.name, "John Doe");
    assert_eq!(fields.email, "john@example.com");
    assert_eq!(fields.subject, "Hello");
    assert_eq!(fields.message, "Hello there, friend");

    Ok(())
}

#[tokio::test]
async fn test_update_unknown_field() -> anyhow::Result<()> {
    let command = Command::new(RecordingDelivery::default());

    let err = command
        .update_field_named("phone", "555-0100")
        .await
        .unwrap_err();

    assert!(matches!(err, folio_shared::Error::UnknownField(name) if name == "phone"));
    assert_eq!(command.fields().await, ContactFormFields::default());

    Ok(())
}
