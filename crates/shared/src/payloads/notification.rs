use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PushPayload;
use crate::config::{
    Action, NOTIFICATION_BADGE_URL, NOTIFICATION_ICON_URL, PRIMARY_KEY, VIBRATE_PATTERN,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    pub action: String,
    pub title: String,
    pub icon: String,
}

impl From<Action> for NotificationAction {
    fn from(action: Action) -> Self {
        Self {
            action: action.id().to_string(),
            title: action.title().to_string(),
            icon: action.icon().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    /// Milliseconds since the unix epoch
    pub date_of_arrival: i64,
    pub primary_key: u32,
}

/// Mirrors the `NotificationOptions` dictionary handed to `showNotification`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDisplayOptions {
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub vibrate: Vec<u32>,
    pub data: NotificationData,
    pub actions: Vec<NotificationAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDisplay {
    pub title: String,
    pub options: NotificationDisplayOptions,
}

impl NotificationDisplay {
    pub fn from_payload(payload: &PushPayload, arrived: DateTime<Utc>) -> Self {
        let options = NotificationDisplayOptions {
            body: payload.body().to_string(),
            icon: NOTIFICATION_ICON_URL.to_string(),
            badge: NOTIFICATION_BADGE_URL.to_string(),
            vibrate: VIBRATE_PATTERN.to_vec(),
            data: NotificationData {
                date_of_arrival: arrived.timestamp_millis(),
                primary_key: PRIMARY_KEY,
            },
            actions: Action::ALL.into_iter().map(NotificationAction::from).collect(),
        };

        Self {
            title: payload.title().to_string(),
            options,
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn arrival() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 19, 30, 0).unwrap()
    }

    #[test]
    fn test_title_and_body_from_payload() {
        let payload = PushPayload {
            title: Some("Commande #12".to_string()),
            message: Some("Order ready".to_string()),
        };
        let n = NotificationDisplay::from_payload(&payload, arrival());
        assert_eq!(n.title, "Commande #12");
        assert_eq!(n.options.body, "Order ready");
    }

    #[test]
    fn test_defaults_for_empty_payload() {
        let n = NotificationDisplay::from_payload(&PushPayload::default(), arrival());
        assert_eq!(n.title, "Restaurant AI");
        assert_eq!(n.options.body, "New Notification");
    }

    #[test]
    fn test_fixed_options() {
        for payload in [
            PushPayload::default(),
            PushPayload {
                title: Some("t".to_string()),
                message: None,
            },
        ] {
            let n = NotificationDisplay::from_payload(&payload, arrival());
            assert_eq!(n.options.vibrate, vec![100, 50, 100]);
            assert_eq!(n.options.icon, n.options.badge);
            assert_eq!(
                n.options.icon,
                "https://cdn-icons-png.flaticon.com/512/3081/3081840.png"
            );

            let ids: Vec<_> = n.options.actions.iter().map(|a| a.action.as_str()).collect();
            assert_eq!(ids, ["explore", "close"]);
            assert_eq!(n.options.actions[0].title, "Voir Commandes");
            assert_eq!(n.options.actions[1].title, "Fermer");
        }
    }

    #[test]
    fn test_arrival_data() {
        let n = NotificationDisplay::from_payload(&PushPayload::default(), arrival());
        assert_eq!(n.options.data.date_of_arrival, arrival().timestamp_millis());
        assert_eq!(n.options.data.primary_key, 1);
    }

    #[test]
    fn test_serializes_with_js_field_names() {
        let n = NotificationDisplay::from_payload(&PushPayload::default(), arrival());
        let value = serde_json::to_value(&n.options).unwrap();

        assert_eq!(
            value,
            json!({
                "body": "New Notification",
                "icon": "https://cdn-icons-png.flaticon.com/512/3081/3081840.png",
                "badge": "https://cdn-icons-png.flaticon.com/512/3081/3081840.png",
                "vibrate": [100, 50, 100],
                "data": {
                    "dateOfArrival": 1717270200000i64,
                    "primaryKey": 1,
                },
                "actions": [
                    { "action": "explore", "title": "Voir Commandes", "icon": "checkmark.png" },
                    { "action": "close", "title": "Fermer", "icon": "xmark.png" },
                ],
            })
        );
    }
}
