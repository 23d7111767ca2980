use async_trait::async_trait;
use chrono::{DateTime, Utc};
use console_error_panic_hook::set_once as set_panic_hook;
use gloo::utils::format::JsValueSerdeExt;
use shared::{
    config::SKIP_WAITING,
    error::WorkerError,
    payloads::{NotificationDisplay, NotificationDisplayOptions},
    utils::tracing::configure_tracing_once as configure_tracing,
    worker::{handle_notification_click, handle_push, NotificationPlatform},
};
use tracing::{debug, error, info, trace, warn};
use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{
    js_sys::{Promise, Reflect},
    ExtendableEvent, ExtendableMessageEvent, Notification, NotificationEvent,
    NotificationOptions, PushEvent, ServiceWorkerGlobalScope,
};

/// Matches the first argument as a result. If there is an error, it's logged
/// with the remaining arguments passed to format_args!() as a prefix, then
/// handed back as a JsValue so the event's promise rejects with it
macro_rules! log_worker_err {
    ($f:expr, $($t:tt)*) => {
        match $f {
            Ok(v) => Ok(v),
            Err(e) => {
                let e = WorkerError::from(e);
                error!("{}: {e}", format_args!($($t)*));
                Err(JsValue::from(e))
            }
        }
    };
}

/// Converts the options into the dictionary `showNotification` expects.
///
/// Goes through serde so `actions`, `vibrate` and `data` are carried even
/// where web-sys has no setter for them.
pub fn notification_options(
    options: &NotificationDisplayOptions,
) -> Result<NotificationOptions, WorkerError> {
    let value = <JsValue as JsValueSerdeExt>::from_serde(options)
        .map_err(|e| WorkerError::Serialize(e.to_string()))?;
    Ok(value.unchecked_into())
}

struct BrowserPlatform {
    sw: ServiceWorkerGlobalScope,
    // The notification that was clicked, absent for push events
    notification: Option<Notification>,
}

#[async_trait(?Send)]
impl NotificationPlatform for BrowserPlatform {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn show_notification(
        &self,
        notification: &NotificationDisplay,
    ) -> Result<(), WorkerError> {
        let options = notification_options(&notification.options)?;
        let promise = self
            .sw
            .registration()
            .show_notification_with_options(&notification.title, &options)?;
        JsFuture::from(promise).await?;
        Ok(())
    }

    fn close_notification(&self) {
        // Chrome doesn't close it by itself
        if let Some(notification) = &self.notification {
            notification.close();
        }
    }

    async fn open_window(&self, url: &str) -> Result<(), WorkerError> {
        JsFuture::from(self.sw.clients().open_window(url)).await?;
        Ok(())
    }
}

fn init() {
    set_panic_hook();
    configure_tracing();
}

/// The text of the push message, if the server sent any
fn push_data(event: &PushEvent) -> Option<String> {
    event.data().map(|d| d.text())
}

/// Id of the button that was pressed, empty for a click on the body.
/// web-sys has no getter for `NotificationEvent.action`
fn notification_action(event: &NotificationEvent) -> String {
    Reflect::get(event, &JsValue::from_str("action"))
        .ok()
        .and_then(|a| a.as_string())
        .unwrap_or_default()
}

/// Keeps the worker alive until the promise settles
fn wait_until(event: &ExtendableEvent, promise: Promise) -> Result<(), JsValue> {
    event.wait_until(&promise)
}

async fn install(sw: ServiceWorkerGlobalScope, version: String) -> Result<JsValue, JsValue> {
    trace!(version = %version, "install");

    log_worker_err!(JsFuture::from(sw.skip_waiting()?).await, "sw::skip_waiting")?;

    info!(version = %version, "Install successful");
    Ok(JsValue::undefined())
}

#[wasm_bindgen]
pub fn worker_install(
    sw: ServiceWorkerGlobalScope,
    version: String,
    event: ExtendableEvent,
) -> Result<(), JsValue> {
    init();
    wait_until(&event, future_to_promise(install(sw, version)))
}

async fn activate(sw: ServiceWorkerGlobalScope, version: String) -> Result<JsValue, JsValue> {
    trace!(version = %version, "activate");

    // Claim the clients so tabs opened before this version are controlled too
    log_worker_err!(JsFuture::from(sw.clients().claim()).await, "sw::clients::claim")?;

    Ok(JsValue::undefined())
}

#[wasm_bindgen]
pub fn worker_activate(
    sw: ServiceWorkerGlobalScope,
    version: String,
    event: ExtendableEvent,
) -> Result<(), JsValue> {
    init();
    wait_until(&event, future_to_promise(activate(sw, version)))
}

async fn message(sw: ServiceWorkerGlobalScope, data: JsValue) -> Result<JsValue, JsValue> {
    if data.as_string().as_deref() == Some(SKIP_WAITING) {
        debug!("worker_message got SKIP_WAITING");

        // MDN states the promise returned can be safely ignored
        let _ = sw.skip_waiting()?;

        return Ok(JsValue::undefined());
    }

    warn!("worker_message got unexpected message: {:?}", data);

    Ok(JsValue::undefined())
}

#[wasm_bindgen]
pub fn worker_message(
    sw: ServiceWorkerGlobalScope,
    _version: String,
    event: ExtendableMessageEvent,
) -> Result<(), JsValue> {
    init();
    wait_until(&event, future_to_promise(message(sw, event.data())))
}

async fn push(
    sw: ServiceWorkerGlobalScope,
    version: String,
    data: Option<String>,
) -> Result<JsValue, JsValue> {
    trace!(version = %version, "push");

    let platform = BrowserPlatform {
        sw,
        notification: None,
    };
    let shown = log_worker_err!(handle_push(&platform, data.as_deref()).await, "push")?;
    debug!(title = %shown.title, "Notification shown");

    Ok(JsValue::undefined())
}

#[wasm_bindgen]
pub fn worker_push(
    sw: ServiceWorkerGlobalScope,
    version: String,
    event: PushEvent,
) -> Result<(), JsValue> {
    init();
    let data = push_data(&event);
    wait_until(&event, future_to_promise(push(sw, version, data)))
}

async fn notification_click(
    sw: ServiceWorkerGlobalScope,
    notification: Notification,
    action: String,
) -> Result<JsValue, JsValue> {
    let platform = BrowserPlatform {
        sw,
        notification: Some(notification),
    };

    // This is broken in firefox android and it doesn't seem to be being worked on
    // <https://bugzilla.mozilla.org/show_bug.cgi?id=1717431>
    log_worker_err!(
        handle_notification_click(&platform, &action).await,
        "notification_click"
    )?;

    Ok(JsValue::undefined())
}

#[wasm_bindgen]
pub fn worker_notification_click(
    sw: ServiceWorkerGlobalScope,
    _version: String,
    event: NotificationEvent,
) -> Result<(), JsValue> {
    init();
    let promise = future_to_promise(notification_click(
        sw,
        event.notification(),
        notification_action(&event),
    ));
    wait_until(&event, promise)
}
