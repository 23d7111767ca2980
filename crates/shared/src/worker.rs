use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

use crate::{
    config::{Action, CLICK_TARGET_URL},
    error::WorkerError,
    payloads::{NotificationDisplay, PushPayload},
};

/// What the worker needs from the browser to react to push and click events
#[async_trait(?Send)]
pub trait NotificationPlatform {
    fn now(&self) -> DateTime<Utc>;

    /// Resolves once the notification is shown
    async fn show_notification(&self, notification: &NotificationDisplay)
        -> Result<(), WorkerError>;

    fn close_notification(&self);

    /// Resolves once the window is open
    async fn open_window(&self, url: &str) -> Result<(), WorkerError>;
}

/// Decodes the push data and shows the resulting notification.
///
/// Errors are returned untouched so the event's promise rejects.
#[instrument(skip_all, fields(has_data = data.is_some()))]
pub async fn handle_push<P: NotificationPlatform>(
    platform: &P,
    data: Option<&str>,
) -> Result<NotificationDisplay, WorkerError> {
    let payload = PushPayload::from_event_data(data)?;
    let notification = NotificationDisplay::from_payload(&payload, platform.now());

    debug!(title = %notification.title, body = %notification.options.body, "Showing notification");
    platform.show_notification(&notification).await?;

    Ok(notification)
}

/// Closes the clicked notification and opens the app root.
///
/// `action` is only logged: the buttons and a tap on the body all do the same thing.
#[instrument(skip(platform))]
pub async fn handle_notification_click<P: NotificationPlatform>(
    platform: &P,
    action: &str,
) -> Result<(), WorkerError> {
    let known = action.is_empty() || Action::from_id(action).is_some();
    debug!(known, "Notification clicked");

    platform.close_notification();

    info!(url = CLICK_TARGET_URL, "Opening window");
    platform.open_window(CLICK_TARGET_URL).await
}
