mod helpers;

use chrono::Utc;
use gpa_reminders_sdk::{CreateReminderInput, ReminderStatus, SetQuoteInput, UpdateReminderInput};
use helpers::setup::spawn_app;

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk
        .status
        .check_health()
        .await
        .expect("Expected service to be healthy");
    assert_eq!(res.message, "Service de rappels opérationnel\r\n");
}

#[actix_web::main]
#[test]
async fn test_crud_reminders() {
    let (_, sdk, _) = spawn_app().await;

    let due_at = Utc::now().timestamp_millis() + 1000 * 60 * 60;
    // The quote does not have to be registered for a reminder to exist
    let res = sdk
        .reminder
        .create(CreateReminderInput {
            due_at,
            quote_id: "DEVIS-2024-001".parse().unwrap(),
            notes: Some("Relancer le client".into()),
        })
        .await
        .expect("Expected to create reminder");
    let reminder = res.reminder;
    assert!(reminder.id.to_string().starts_with("rappel-"));
    assert_eq!(reminder.due_at, due_at);
    assert_eq!(reminder.status, ReminderStatus::Scheduled);
    assert_eq!(reminder.notes, Some("Relancer le client".into()));

    let res = sdk
        .reminder
        .list()
        .await
        .expect("Expected to list reminders");
    assert_eq!(res.reminders.len(), 1);
    assert_eq!(res.reminders[0].id, reminder.id);

    let new_due_at = due_at + 1000 * 60 * 60 * 24;
    let res = sdk
        .reminder
        .update(UpdateReminderInput {
            reminder_id: reminder.id.clone(),
            due_at: new_due_at,
            notes: Some("Client joignable le matin".into()),
        })
        .await
        .expect("Expected to update reminder");
    assert_eq!(res.reminder.id, reminder.id);
    assert_eq!(res.reminder.due_at, new_due_at);
    assert_eq!(res.reminder.notes, Some("Client joignable le matin".into()));

    let res = sdk
        .reminder
        .delete(reminder.id.clone())
        .await
        .expect("Expected to delete reminder");
    assert_eq!(res.reminder.id, reminder.id);

    // Delete after deleted should be error
    let res = sdk.reminder.delete(reminder.id.clone()).await;
    assert!(res.is_err());

    let res = sdk
        .reminder
        .list()
        .await
        .expect("Expected to list reminders");
    assert!(res.reminders.is_empty());
}

#[actix_web::main]
#[test]
async fn test_crud_quotes() {
    let (_, sdk, _) = spawn_app().await;

    let res = sdk
        .quote
        .set(SetQuoteInput {
            id: "DEVIS-2024-001".parse().unwrap(),
            client_name: "Dupont Marie".into(),
            vehicle_description: "Renault Clio".into(),
            amount: 645.5,
        })
        .await
        .expect("Expected to store quote");
    assert_eq!(res.quote.client_name, "Dupont Marie");

    let res = sdk
        .quote
        .get("DEVIS-2024-001".parse().unwrap())
        .await
        .expect("Expected to get quote");
    assert_eq!(res.quote.vehicle_description, "Renault Clio");
    assert_eq!(res.quote.amount, 645.5);

    // Posting the same id again replaces the details
    sdk.quote
        .set(SetQuoteInput {
            id: "DEVIS-2024-001".parse().unwrap(),
            client_name: "Dupont Marie".into(),
            vehicle_description: "Renault Clio".into(),
            amount: 700.0,
        })
        .await
        .expect("Expected to store quote");
    let res = sdk
        .quote
        .get("DEVIS-2024-001".parse().unwrap())
        .await
        .expect("Expected to get quote");
    assert_eq!(res.quote.amount, 700.0);

    let res = sdk.quote.get("DEVIS-0000-000".parse().unwrap()).await;
    assert!(res.is_err());
}

#[actix_web::main]
#[test]
async fn test_send_log_starts_empty() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk
        .sent_email
        .list()
        .await
        .expect("Expected to list sent emails");
    assert!(res.sent_emails.is_empty());
}
