//! Message rendering for notifications and command replies.

use chrono::{DateTime, Utc};
use fxwatch_core::types::{Alert, Direction, Reading, Trend};

fn direction_symbol(direction: Direction) -> &'static str {
    match direction {
        Direction::Above => "📈",
        Direction::Below => "📉",
    }
}

fn local_time(ts: DateTime<Utc>) -> String {
    ts.format("%H:%M:%S").to_string()
}

/// Render the outbound notification for one monitor cycle.
pub fn notification_text(
    pair: &str,
    reading: &Reading,
    trend: &Trend,
    triggered: &[Alert],
) -> String {
    let mut text = format!("⚠️ *{} Rate Alert*\n\n", pair);
    text.push_str(&format!("{} *R$ {:.4}*\n", trend.symbol(), reading.value));
    text.push_str(&format!("📊 {}\n", trend.label()));
    text.push_str(&format!("🕒 {}\n", local_time(reading.observed_at)));

    if !triggered.is_empty() {
        text.push_str("\n🔔 *Triggered alerts:*\n");
        for alert in triggered {
            text.push_str(&format!(
                "{} R$ {:.4} ({})\n",
                direction_symbol(alert.direction),
                alert.value,
                alert.direction
            ));
        }
    }

    text
}

/// Render the reply for an interactive quote request.
pub fn quote_text(pair: &str, reading: &Reading, trend: &Trend) -> String {
    format!(
        "💵 *Current {} Rate*\n\n{} *R$ {:.4}*\n📊 {}\n🕒 Updated at {}",
        pair,
        trend.symbol(),
        reading.value,
        trend.label(),
        local_time(reading.observed_at)
    )
}

/// Render the armed alert list with 1-based display indexes.
pub fn alert_list_text(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return "📋 No alerts armed right now.".to_string();
    }

    let mut text = "📋 *Armed alerts:*\n\n".to_string();
    for (i, alert) in alerts.iter().enumerate() {
        text.push_str(&format!(
            "{}. {} R$ {:.4} ({}) - {}\n",
            i + 1,
            direction_symbol(alert.direction),
            alert.value,
            alert.direction,
            alert.created_at.format("%d/%m %H:%M")
        ));
    }
    text.push_str(&format!("\nTotal: {} alerts", alerts.len()));
    text
}
