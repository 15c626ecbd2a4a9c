use serde_json::json;
use tracing::warn;

use crate::api::transport::{ApiRequest, Method, Transport, TransportError};
use crate::api::types::{Envelope, FieldKind, Filter, MatchKind, ReportRow, Tag};
use crate::cli::console::Console;
use crate::cli::output;

/// Façade over the remote tracking API.
///
/// Each method performs exactly one request/response cycle. Queries return
/// `Some(payload)` on success and `None` when a diagnostic line was already
/// written (or a point lookup simply missed); list queries map a logical
/// rejection to an empty payload. Mutations print the server message
/// verbatim. Callers validate their inputs first; the gateway does not.
pub struct Gateway {
    transport: Box<dyn Transport>,
}

impl Gateway {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn tags(&self, console: &mut dyn Console) -> Option<Vec<Tag>> {
        let envelope = self.exchange(console, ApiRequest::new(Method::Get, "/api/tag"))?;
        if envelope.success {
            Some(envelope.tags.unwrap_or_default())
        } else {
            Some(Vec::new())
        }
    }

    pub fn active_tags(&self, console: &mut dyn Console) -> Option<Vec<Tag>> {
        let envelope = self.exchange(console, ApiRequest::new(Method::Get, "/api/tag/active"))?;
        if envelope.success {
            Some(envelope.tags.unwrap_or_default())
        } else {
            Some(Vec::new())
        }
    }

    /// Point lookup: `None` covers both "diagnostic already printed" and a
    /// plain miss, which callers report in their own wording.
    pub fn tag_by_name(&self, console: &mut dyn Console, name: &str) -> Option<Tag> {
        let request = ApiRequest::new(Method::Get, "/api/tag").query("name", name);
        let envelope = self.exchange(console, request)?;
        if envelope.success {
            envelope.tag
        } else {
            None
        }
    }

    pub fn remove_tag(&self, console: &mut dyn Console, name: &str) {
        let request = ApiRequest::new(Method::Delete, "/api/tag").query("name", name);
        self.exchange_message(console, request);
    }

    pub fn add_tag(&self, console: &mut dyn Console, name: &str) {
        let request =
            ApiRequest::new(Method::Post, "/api/tag/add").body(json!({ "name": name }));
        self.exchange_message(console, request);
    }

    pub fn toggle_tag(&self, console: &mut dyn Console, name: &str) {
        let request =
            ApiRequest::new(Method::Put, "/api/tag/toggleactive").body(json!({ "name": name }));
        self.exchange_message(console, request);
    }

    pub fn add_session(
        &self,
        console: &mut dyn Console,
        tag_name: &str,
        start_date: &str,
        end_date: &str,
    ) {
        let request = ApiRequest::new(Method::Post, "/api/session/add").body(json!({
            "tagName": tag_name,
            "startDate": start_date,
            "endDate": end_date,
        }));
        self.exchange_message(console, request);
    }

    pub fn filters(&self, console: &mut dyn Console, tag_name: &str) -> Option<Vec<Filter>> {
        let request = ApiRequest::new(Method::Get, "/api/filter").query("name", tag_name);
        let envelope = self.exchange(console, request)?;
        if envelope.success {
            Some(envelope.filters.unwrap_or_default())
        } else {
            Some(Vec::new())
        }
    }

    pub fn active_filters(
        &self,
        console: &mut dyn Console,
        tag_name: &str,
    ) -> Option<Vec<Filter>> {
        let request = ApiRequest::new(Method::Get, "/api/filter/active").query("name", tag_name);
        let envelope = self.exchange(console, request)?;
        if envelope.success {
            Some(envelope.filters.unwrap_or_default())
        } else {
            Some(Vec::new())
        }
    }

    pub fn filter_by_id(&self, console: &mut dyn Console, id: i64) -> Option<Filter> {
        let request = ApiRequest::new(Method::Get, "/api/filter").query("id", id.to_string());
        let envelope = self.exchange(console, request)?;
        if envelope.success {
            envelope.filter
        } else {
            None
        }
    }

    pub fn remove_filter(&self, console: &mut dyn Console, id: i64) {
        let request = ApiRequest::new(Method::Delete, "/api/filter").query("id", id.to_string());
        self.exchange_message(console, request);
    }

    pub fn add_filter(
        &self,
        console: &mut dyn Console,
        tag_name: &str,
        field: FieldKind,
        kind: MatchKind,
        value: &str,
    ) {
        let request = ApiRequest::new(Method::Post, "/api/filter/add").body(json!({
            "tagName": tag_name,
            "fieldType": field.wire_value(),
            "filterType": kind.wire_value(),
            "value": value,
        }));
        self.exchange_message(console, request);
    }

    pub fn toggle_filter(&self, console: &mut dyn Console, id: i64) {
        let request =
            ApiRequest::new(Method::Put, "/api/filter/toggleactive").body(json!({ "filterId": id }));
        self.exchange_message(console, request);
    }

    pub fn report(
        &self,
        console: &mut dyn Console,
        tag_name: &str,
        start_date: &str,
        end_date: &str,
    ) -> Option<Vec<ReportRow>> {
        let request = ApiRequest::new(Method::Post, "/api/report").body(json!({
            "tagName": tag_name,
            "startDate": start_date,
            "endDate": end_date,
        }));
        let envelope = self.exchange(console, request)?;
        if envelope.success {
            Some(envelope.report.unwrap_or_default())
        } else {
            Some(Vec::new())
        }
    }

    /// Current tracking state: `true` means paused. The server reports the
    /// value as a stringified bool whose casing is not guaranteed.
    pub fn tracking(&self, console: &mut dyn Console) -> Option<bool> {
        let envelope = self.exchange(console, ApiRequest::new(Method::Get, "/api/tracking"))?;
        if envelope.success {
            if let Some(value) = envelope.setting_value.as_deref() {
                if let Ok(parsed) = value.trim().to_ascii_lowercase().parse::<bool>() {
                    return Some(parsed);
                }
            }
        }
        console.println(&output::error(
            "Error: Invalid value returned from the server.",
        ));
        None
    }

    /// Requests a pause (`true`) or unpause. Returns `true` strictly on
    /// confirmed success so callers can chain local cache updates.
    pub fn set_tracking(&self, console: &mut dyn Console, pause: bool) -> bool {
        let request =
            ApiRequest::new(Method::Put, "/api/tracking").query("value", pause.to_string());
        match self.exchange(console, request) {
            Some(envelope) if envelope.success => {
                let verb = if pause { "paused" } else { "unpaused" };
                console.println(&output::success(&format!(
                    "Tracking {verb} successfully."
                )));
                true
            }
            Some(envelope) => {
                console.println(envelope.message.as_deref().unwrap_or_default());
                false
            }
            None => false,
        }
    }

    /// Runs one request and peels the response envelope. `None` means a
    /// diagnostic line was already written to the console.
    fn exchange(&self, console: &mut dyn Console, request: ApiRequest) -> Option<Envelope> {
        match self.transport.send(request) {
            Ok(reply) if reply.is_success() => {
                match serde_json::from_str::<Envelope>(&reply.body) {
                    Ok(envelope) => Some(envelope),
                    Err(err) => {
                        warn!(error = %err, "malformed response body");
                        console.println(&output::error(&format!("Error: {err}")));
                        None
                    }
                }
            }
            Ok(reply) => {
                warn!(status = reply.status, "request rejected");
                console.println(&output::error(&format!(
                    "{} -> {}",
                    reply.status, reply.reason
                )));
                None
            }
            Err(TransportError::Connection(err)) => {
                warn!(error = %err, "request failed");
                console.println(&output::error(&format!("Error: {err}")));
                None
            }
        }
    }

    /// Mutation pattern: print the server message whatever the verdict.
    fn exchange_message(&self, console: &mut dyn Console, request: ApiRequest) {
        if let Some(envelope) = self.exchange(console, request) {
            console.println(envelope.message.as_deref().unwrap_or_default());
        }
    }
}
