use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

#[derive(Serialize)]
struct Envelope<'a> {
    ts: u64,
    level: LogLevel,
    event: &'a str,
}

/// Builds the single-line JSON payload for an event. Non-object `fields` are
/// dropped, and fields cannot overwrite the envelope keys.
pub fn build_payload(level: LogLevel, event: &str, fields: serde_json::Value, ts: u64) -> String {
    let mut payload = match fields {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };

    if let Ok(serde_json::Value::Object(envelope)) =
        serde_json::to_value(Envelope { ts, level, event })
    {
        payload.extend(envelope);
    }

    serde_json::Value::Object(payload).to_string()
}

pub fn log_event(threshold: LogLevel, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < threshold {
        return;
    }

    emit(&build_payload(level, event, fields, now_unix_seconds()));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

// std's clock panics on wasm32-unknown-unknown
#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
    }

    #[test]
    fn payload_flattens_fields_next_to_envelope() {
        let line = build_payload(LogLevel::Info, "theme.changed", json!({ "isDark": true }), 42);
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON");

        assert_eq!(parsed["ts"], 42);
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "theme.changed");
        assert_eq!(parsed["isDark"], true);
    }

    #[test]
    fn payload_ignores_non_object_fields() {
        let line = build_payload(LogLevel::Warn, "reveal.observer_unavailable", json!("stray"), 7);
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON");

        assert_eq!(parsed.as_object().map(|map| map.len()), Some(3));
        assert_eq!(parsed["level"], "warn");
    }

    #[test]
    fn fields_cannot_spoof_envelope_keys() {
        let line = build_payload(
            LogLevel::Info,
            "theme.changed",
            json!({ "level": "spoof", "event": "other", "ts": 0, "theme": "dark" }),
            9,
        );
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON");

        assert_eq!(line.matches("\"level\"").count(), 1);
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "theme.changed");
        assert_eq!(parsed["ts"], 9);
        assert_eq!(parsed["theme"], "dark");
    }

    #[test]
    fn event_names_are_escaped() {
        let line = build_payload(LogLevel::Warn, "odd\"name", json!({}), 1);
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON");

        assert_eq!(parsed["event"], "odd\"name");
    }
}
