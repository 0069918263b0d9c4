use crate::{quote::Quote, reminder::Reminder, shared::entity::ID};
use chrono::{LocalResult, TimeZone};
use chrono_tz::Europe::Paris;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Which of the two alerts of a `Reminder` lifecycle an email or
/// notification belongs to. The wire names are the historical ones used by
/// the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    #[serde(rename = "avant-rappel")]
    DueSoon,
    #[serde(rename = "rappel")]
    Due,
}

/// A record of a follow-up email handed to the relay, kept so that agents
/// can review what was sent for which `Reminder`.
#[derive(Debug, Clone)]
pub struct SentEmail {
    pub id: ID,
    pub subject: String,
    pub body: String,
    /// Timestamp in millis at which the email was handed off
    pub sent_at: i64,
    pub reminder_id: ID,
    pub kind: AlertKind,
}

impl SentEmail {
    pub fn new(
        subject: String,
        body: String,
        reminder_id: ID,
        kind: AlertKind,
        now: i64,
    ) -> Self {
        Self {
            id: ID::from_timestamp("email", now),
            subject,
            body,
            sent_at: now,
            reminder_id,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComposedEmail {
    pub subject: String,
    pub body: String,
}

/// Composes the French follow-up email for a `Reminder`. The quote section
/// is only rendered when the referenced `Quote` is known, and the due date
/// is spelled out in the agency timezone.
pub fn compose_reminder_email(
    reminder: &Reminder,
    quote: Option<&Quote>,
    kind: AlertKind,
) -> ComposedEmail {
    let subject = match kind {
        AlertKind::DueSoon => format!("[Rappel 15min] Suivi devis #{}", reminder.quote_id),
        AlertKind::Due => format!("[Rappel] Suivi devis #{}", reminder.quote_id),
    };

    let intro = match kind {
        AlertKind::DueSoon => "Rappel dans 15 minutes",
        AlertKind::Due => "Rappel",
    };
    let notes = reminder
        .notes
        .as_deref()
        .filter(|notes| !notes.is_empty())
        .unwrap_or("Aucune note spécifiée");

    let mut body = format!(
        "Bonjour,\n\n{} pour le suivi du devis #{}.\n\n",
        intro, reminder.quote_id
    );
    if let Some(quote) = quote {
        let _ = write!(
            body,
            "Informations du devis:\n- Client: {}\n- Véhicule: {}\n- Montant: {}€\n\n",
            quote.client_name, quote.vehicle_description, quote.amount
        );
    }
    let _ = write!(
        body,
        "Notes: {}\n\nDate du rappel: {}\n\nCordialement,\nGPA - Groupe Partenaire des Assurances",
        notes,
        format_datetime(reminder.due_at, Paris)
    );

    ComposedEmail { subject, body }
}

fn format_datetime(timestamp_millis: i64, tz: Tz) -> String {
    match tz.timestamp_millis_opt(timestamp_millis) {
        LocalResult::Single(datetime) => datetime.format("%d/%m/%Y %H:%M:%S").to_string(),
        _ => timestamp_millis.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sun Feb 21 2021 00:00:00 GMT+0100 (Central European Standard Time)
    const DUE_AT: i64 = 1613862000000;

    fn reminder(notes: Option<String>) -> Reminder {
        Reminder::new(DUE_AT, "DEVIS-2024-001".parse().unwrap(), notes, DUE_AT)
    }

    fn quote() -> Quote {
        Quote::new(
            "DEVIS-2024-001".parse().unwrap(),
            "Dupont Marie".into(),
            "Renault Clio".into(),
            645.5,
        )
    }

    #[test]
    fn composes_due_email_with_quote_details() {
        let email = compose_reminder_email(
            &reminder(Some("Relancer par téléphone".into())),
            Some(&quote()),
            AlertKind::Due,
        );

        assert_eq!(email.subject, "[Rappel] Suivi devis #DEVIS-2024-001");
        assert_eq!(
            email.body,
            "Bonjour,\n\n\
             Rappel pour le suivi du devis #DEVIS-2024-001.\n\n\
             Informations du devis:\n\
             - Client: Dupont Marie\n\
             - Véhicule: Renault Clio\n\
             - Montant: 645.5€\n\n\
             Notes: Relancer par téléphone\n\n\
             Date du rappel: 21/02/2021 00:00:00\n\n\
             Cordialement,\n\
             GPA - Groupe Partenaire des Assurances"
        );
    }

    #[test]
    fn composes_due_soon_email() {
        let email = compose_reminder_email(&reminder(None), Some(&quote()), AlertKind::DueSoon);

        assert_eq!(email.subject, "[Rappel 15min] Suivi devis #DEVIS-2024-001");
        assert!(email
            .body
            .contains("Rappel dans 15 minutes pour le suivi du devis #DEVIS-2024-001."));
    }

    #[test]
    fn skips_quote_section_when_quote_is_unknown() {
        let email = compose_reminder_email(&reminder(None), None, AlertKind::Due);

        assert!(!email.body.contains("Informations du devis:"));
        assert!(email.body.contains("Rappel pour le suivi du devis #DEVIS-2024-001."));
    }

    #[test]
    fn falls_back_when_no_notes_are_given() {
        let without = compose_reminder_email(&reminder(None), None, AlertKind::Due);
        let empty = compose_reminder_email(&reminder(Some("".into())), None, AlertKind::Due);

        assert!(without.body.contains("Notes: Aucune note spécifiée"));
        assert!(empty.body.contains("Notes: Aucune note spécifiée"));
    }

    #[test]
    fn spells_out_the_due_date_in_agency_time() {
        // Summer date to cover the DST offset as well
        let mut summer = reminder(None);
        summer.due_at = 1624968000000; // Tue Jun 29 2021 14:00:00 GMT+0200

        let email = compose_reminder_email(&summer, None, AlertKind::Due);
        assert!(email.body.contains("Date du rappel: 29/06/2021 14:00:00"));
    }

    #[test]
    fn alert_kind_keeps_historical_wire_names() {
        assert_eq!(
            serde_json::to_string(&AlertKind::DueSoon).unwrap(),
            "\"avant-rappel\""
        );
        assert_eq!(serde_json::to_string(&AlertKind::Due).unwrap(), "\"rappel\"");
    }
}
