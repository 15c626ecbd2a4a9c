use std::fmt;

use crate::cli::menu::{Flow, MenuContext, MenuItem};
use crate::cli::prompts;
use crate::errors::ConsoleError;

/// Last tracking state we heard from the server. `Unknown` covers a failed
/// probe and is treated as unpaused when deciding the toggle direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingStatus {
    Paused,
    Unpaused,
    Unknown,
}

impl TrackingStatus {
    fn from_paused(paused: bool) -> Self {
        if paused {
            Self::Paused
        } else {
            Self::Unpaused
        }
    }

    /// Direction the next toggle should request.
    fn should_pause(self) -> bool {
        self != Self::Paused
    }

    fn flipped(self) -> Self {
        Self::from_paused(self.should_pause())
    }
}

impl fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Paused => "paused",
            Self::Unpaused => "unpaused",
            Self::Unknown => "unknown",
        };
        f.write_str(text)
    }
}

/// Pause/unpause toggle carrying the status in its own label. The status is
/// probed when the parent menu rebuilds its children and cached for the rest
/// of the dispatch, so the label and the confirmation always agree.
pub struct TrackingItem {
    status: TrackingStatus,
}

impl TrackingItem {
    pub fn probe(ctx: &mut MenuContext<'_>) -> Self {
        let status = match ctx.gateway.tracking(ctx.console) {
            Some(paused) => TrackingStatus::from_paused(paused),
            None => TrackingStatus::Unknown,
        };
        Self { status }
    }

    #[cfg(test)]
    pub fn with_status(status: TrackingStatus) -> Self {
        Self { status }
    }
}

impl MenuItem for TrackingItem {
    fn label(&self) -> String {
        format!("Tracking (status: {}).", self.status)
    }

    fn select(&mut self, ctx: &mut MenuContext<'_>) -> Result<Flow, ConsoleError> {
        let pause = self.status.should_pause();
        let action = if pause { "pause" } else { "unpause" };
        let question = format!("Tracking is {}, do you want to {action} it?", self.status);
        if prompts::yes_or_no(ctx.console, &question)?
            && ctx.gateway.set_tracking(ctx.console, pause)
        {
            self.status = self.status.flipped();
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::gateway::Gateway;
    use crate::api::transport::testing::FakeTransport;
    use crate::cli::console::testing::ScriptedConsole;
    use crate::settings::Settings;

    fn run_item(
        item: &mut TrackingItem,
        transport: &FakeTransport,
        inputs: &[&str],
    ) -> ScriptedConsole {
        let gateway = Gateway::new(Box::new(transport.clone()));
        let settings = Settings::default();
        let mut console = ScriptedConsole::new(inputs);
        {
            let mut ctx = MenuContext {
                console: &mut console,
                gateway: &gateway,
                settings: &settings,
            };
            item.select(&mut ctx).unwrap();
        }
        console
    }

    #[test]
    fn probe_reads_the_status_once() {
        let transport = FakeTransport::new();
        transport.push_ok(r#"{"success":true,"settingValue":"True"}"#);
        let gateway = Gateway::new(Box::new(transport.clone()));
        let settings = Settings::default();
        let mut console = ScriptedConsole::new(&[]);
        let mut ctx = MenuContext {
            console: &mut console,
            gateway: &gateway,
            settings: &settings,
        };

        let item = TrackingItem::probe(&mut ctx);

        assert_eq!(item.label(), "Tracking (status: paused).");
        assert_eq!(transport.requests()[0].path, "/api/tracking");
    }

    #[test]
    fn failed_probe_yields_unknown() {
        let transport = FakeTransport::new();
        transport.push_connection_error("connection refused");
        let gateway = Gateway::new(Box::new(transport.clone()));
        let settings = Settings::default();
        let mut console = ScriptedConsole::new(&[]);
        let mut ctx = MenuContext {
            console: &mut console,
            gateway: &gateway,
            settings: &settings,
        };

        let item = TrackingItem::probe(&mut ctx);

        assert_eq!(item.label(), "Tracking (status: unknown).");
        assert!(console.written.contains("Error: connection refused"));
    }

    #[test]
    fn unpaused_confirms_a_pause_and_flips_on_success() {
        let transport = FakeTransport::new();
        transport.push_ok(r#"{"success":true}"#);

        let mut item = TrackingItem::with_status(TrackingStatus::Unpaused);
        let console = run_item(&mut item, &transport, &["y"]);

        assert!(console
            .written
            .contains("Tracking is unpaused, do you want to pause it?"));
        assert!(console.written.contains("Tracking paused successfully."));
        assert_eq!(
            transport.requests()[0].query,
            vec![("value", "true".to_string())]
        );
        assert_eq!(item.label(), "Tracking (status: paused).");
    }

    #[test]
    fn unknown_status_requests_a_pause() {
        let transport = FakeTransport::new();
        transport.push_ok(r#"{"success":true}"#);

        let mut item = TrackingItem::with_status(TrackingStatus::Unknown);
        run_item(&mut item, &transport, &["y"]);

        assert_eq!(
            transport.requests()[0].query,
            vec![("value", "true".to_string())]
        );
        assert_eq!(item.label(), "Tracking (status: paused).");
    }

    #[test]
    fn declined_confirmation_issues_no_request() {
        let transport = FakeTransport::new();

        let mut item = TrackingItem::with_status(TrackingStatus::Paused);
        run_item(&mut item, &transport, &["n"]);

        assert_eq!(transport.request_count(), 0);
        assert_eq!(item.label(), "Tracking (status: paused).");
    }

    #[test]
    fn failed_mutation_keeps_the_cached_status() {
        let transport = FakeTransport::new();
        transport.push_ok(r#"{"success":false,"message":"setting locked"}"#);

        let mut item = TrackingItem::with_status(TrackingStatus::Paused);
        let console = run_item(&mut item, &transport, &["y"]);

        assert!(console.written.contains("setting locked"));
        assert_eq!(item.label(), "Tracking (status: paused).");
    }
}
