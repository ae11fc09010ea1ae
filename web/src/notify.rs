use mnemo_core::Notification;
use web_sys::{CustomEvent, CustomEventInit};

/// JSON `detail` carried by the DOM event, if the notification has a payload.
pub(crate) fn detail_json(notification: &Notification) -> Option<String> {
    if !notification.has_detail() {
        return None;
    }
    match serde_json::to_string(notification) {
        Ok(json) => Some(json),
        Err(err) => {
            log::error!("failed to encode {:?}: {}", notification, err);
            None
        }
    }
}

/// Publishes a notification on `window` as a `CustomEvent`.
pub(crate) fn dispatch(notification: &Notification) {
    use gloo::utils::window;

    let init = CustomEventInit::new();
    if let Some(json) = detail_json(notification) {
        match js_sys::JSON::parse(&json) {
            Ok(detail) => init.set_detail(&detail),
            Err(err) => log::error!("failed to parse event detail: {:?}", err),
        }
    }

    let name = notification.event_name();
    let event = match CustomEvent::new_with_event_init_dict(name, &init) {
        Ok(event) => event,
        Err(err) => {
            log::error!("failed to create {} event: {:?}", name, err);
            return;
        }
    };

    log::debug!("dispatch {}", name);
    if let Err(err) = window().dispatch_event(&event) {
        log::error!("failed to dispatch {}: {:?}", name, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_payload_events_carry_detail() {
        assert_eq!(detail_json(&Notification::GameStart), None);
        assert_eq!(detail_json(&Notification::ExitClick), None);
        assert_eq!(
            detail_json(&Notification::PairMatch {
                pairs_found: 3,
                attempts: 4
            })
            .as_deref(),
            Some(r#"{"type":"pair-match","pairsFound":3,"attempts":4}"#)
        );
    }
}
