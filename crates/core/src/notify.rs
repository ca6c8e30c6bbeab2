use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::gate::ActionKind;

/// The message a page emits after an action is invoked. Opaque to the
/// workflow model; toast rendering lives with the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionNotification {
    pub action: ActionKind,
    pub message: String,
}

pub trait NotificationSink: Send + Sync {
    fn emit(&self, notification: ActionNotification);
}

#[derive(Clone, Default)]
pub struct InMemoryNotificationSink {
    notifications: Arc<Mutex<Vec<ActionNotification>>>,
}

impl InMemoryNotificationSink {
    pub fn notifications(&self) -> Vec<ActionNotification> {
        match self.notifications.lock() {
            Ok(notifications) => notifications.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.message).collect()
    }
}

impl NotificationSink for InMemoryNotificationSink {
    fn emit(&self, notification: ActionNotification) {
        match self.notifications.lock() {
            Ok(mut notifications) => notifications.push(notification),
            Err(poisoned) => poisoned.into_inner().push(notification),
        }
    }
}

/// US-dollar display formatting used in notification messages, e.g.
/// `$12,500.00`.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let unsigned = format!("{:.2}", rounded.abs());
    let (whole, cents) = unsigned.split_once('.').unwrap_or((unsigned.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{format_usd, ActionNotification, InMemoryNotificationSink, NotificationSink};
    use crate::gate::ActionKind;

    #[test]
    fn in_memory_sink_records_notifications_in_order() {
        let sink = InMemoryNotificationSink::default();
        sink.emit(ActionNotification {
            action: ActionKind::Approve,
            message: "Approved invoice INV-4421 — KMG Concrete Services".to_string(),
        });
        sink.emit(ActionNotification {
            action: ActionKind::PayNow,
            message: "Paid $25,000.00 to KMG Concrete Services".to_string(),
        });

        let messages = sink.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("Approved"));
        assert_eq!(sink.notifications()[1].action, ActionKind::PayNow);
    }

    #[test]
    fn formats_dollars_with_thousands_grouping() {
        assert_eq!(format_usd(Decimal::new(25_000_00, 2)), "$25,000.00");
        assert_eq!(format_usd(Decimal::new(1_875_00, 2)), "$1,875.00");
        assert_eq!(format_usd(Decimal::new(124_50, 2)), "$124.50");
        assert_eq!(format_usd(Decimal::new(1_234_567_89, 2)), "$1,234,567.89");
    }

    #[test]
    fn formats_sub_dollar_and_negative_amounts() {
        assert_eq!(format_usd(Decimal::new(99, 2)), "$0.99");
        assert_eq!(format_usd(Decimal::new(-410_15, 2)), "-$410.15");
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(format_usd(Decimal::new(10_006, 3)), "$10.01");
    }
}
