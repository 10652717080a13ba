//! Daily sweep over the account store.
//!
//! Once a day at the configured wall-clock time (UTC) the scheduler
//! scans the store for accounts whose 14-day window matures exactly
//! today and sends one alert listing them to the configured channel.
//! Selection is by strict date equality, so a day the process slept
//! through is never alerted later. Matured records stay in the store;
//! they simply never match again.

use anyhow::Result;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use log::{debug, error, info};
use serenity::builder::CreateEmbed;
use serenity::http::Http;
use serenity::model::id::ChannelId;
use serenity::utils::Color;
use std::sync::Arc;
use tokio::time::sleep;

use crate::core::response::truncate_for_embed;
use crate::features::accounts::{AccountStore, ALERT_WINDOW_DAYS};

pub struct SweepScheduler {
    store: AccountStore,
    alert_channel: ChannelId,
    sweep_time: NaiveTime,
}

impl SweepScheduler {
    pub fn new(store: AccountStore, alert_channel: ChannelId, sweep_time: NaiveTime) -> Self {
        Self {
            store,
            alert_channel,
            sweep_time,
        }
    }

    /// Run the sweep loop forever. Spawned as a background task from main.
    pub async fn run(self, http: Arc<Http>) {
        info!(
            "⏰ Sweep scheduler started (daily at {} UTC, alerting channel {})",
            self.sweep_time.format("%H:%M"),
            self.alert_channel
        );

        loop {
            let now = Utc::now();
            let next = next_sweep_after(now, self.sweep_time);
            let wait = (next - now).to_std().unwrap_or_default();
            debug!("Next sweep at {next} ({}s from now)", wait.as_secs());
            sleep(wait).await;

            let today = Utc::now().date_naive();
            if let Err(e) = self.sweep(&http, today).await {
                error!("Sweep on {today} failed to send alert: {e}");
            }
        }
    }

    /// One sweep pass: select matured accounts and send the alert.
    ///
    /// An empty selection sends nothing. Records are not removed either
    /// way.
    pub async fn sweep(&self, http: &Http, today: NaiveDate) -> Result<()> {
        let matured = self.store.matured_on(today);

        if matured.is_empty() {
            debug!("Sweep on {today}: no accounts maturing");
            return Ok(());
        }

        info!(
            "🔔 Sweep on {today}: {} account(s) matured: {}",
            matured.len(),
            matured.join(", ")
        );

        let embed = build_alert_embed(&matured, today);
        self.alert_channel
            .send_message(http, |m| m.set_embed(embed))
            .await?;

        Ok(())
    }
}

/// Next occurrence of `sweep_time` strictly after `now` (UTC).
pub fn next_sweep_after(now: DateTime<Utc>, sweep_time: NaiveTime) -> DateTime<Utc> {
    let today_run = DateTime::<Utc>::from_naive_utc_and_offset(
        now.date_naive().and_time(sweep_time),
        Utc,
    );
    if today_run > now {
        today_run
    } else {
        DateTime::<Utc>::from_naive_utc_and_offset(
            (now.date_naive() + Duration::days(1)).and_time(sweep_time),
            Utc,
        )
    }
}

/// Build the alert embed listing all matured identifiers.
fn build_alert_embed(matured: &[String], today: NaiveDate) -> CreateEmbed {
    let mut embed = CreateEmbed::default();

    embed
        .title(format!("🔔 {ALERT_WINDOW_DAYS}-Day Alert"))
        .color(Color::from_rgb(237, 66, 69)); // Discord red

    let listing = matured
        .iter()
        .map(|id| format!("• {id}"))
        .collect::<Vec<_>>()
        .join("\n");
    embed.description(truncate_for_embed(&format!(
        "These accounts reached their {ALERT_WINDOW_DAYS}-day window today:\n\n{listing}\n\nWithdraw and rotate them now."
    )));

    embed.footer(|f| f.text(format!("Sweep of {today}")));

    embed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn nine_am() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn test_next_sweep_later_today() {
        let next = next_sweep_after(utc("2026-01-15T03:00:00Z"), nine_am());
        assert_eq!(next, utc("2026-01-15T09:00:00Z"));
    }

    #[test]
    fn test_next_sweep_rolls_to_tomorrow() {
        let next = next_sweep_after(utc("2026-01-15T09:00:00Z"), nine_am());
        assert_eq!(next, utc("2026-01-16T09:00:00Z"));

        let next = next_sweep_after(utc("2026-01-15T22:30:00Z"), nine_am());
        assert_eq!(next, utc("2026-01-16T09:00:00Z"));
    }

    #[test]
    fn test_selection_fires_on_exact_day_only() {
        let store = AccountStore::new();
        store.upsert("WH123", date("2026-01-01"));

        assert!(store.matured_on(date("2026-01-14")).is_empty());
        assert_eq!(store.matured_on(date("2026-01-15")), vec!["WH123"]);
        assert!(store.matured_on(date("2026-01-16")).is_empty());
    }

    #[test]
    fn test_matured_record_stays_in_store() {
        let store = AccountStore::new();
        store.upsert("WH123", date("2026-01-01"));

        // The sweep day comes and goes...
        assert_eq!(store.matured_on(date("2026-01-15")).len(), 1);

        // ...and the record is still there, now past due.
        let records = store.snapshot();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].days_until_alert(date("2026-01-18")), -3);
    }

    #[test]
    fn test_alert_embed_lists_all_matured() {
        let matured = vec!["AAA".to_string(), "BBB".to_string()];
        let embed = build_alert_embed(&matured, date("2026-01-15"));

        let description = embed.0.get("description").unwrap().as_str().unwrap();
        assert!(description.contains("• AAA"));
        assert!(description.contains("• BBB"));
        assert!(description.contains("14-day window"));
    }
}
