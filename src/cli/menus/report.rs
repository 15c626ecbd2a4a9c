use crate::cli::menu::{Flow, MenuContext, MenuItem};
use crate::cli::{output, prompts, table};
use crate::dates;
use crate::errors::ConsoleError;
use crate::settings::Settings;

/// Aggregated active-time report over an optional tag and date range.
///
/// The tag is optional; a blank start date falls back to six months before
/// now, a blank end date leaves the range open-ended. Dates are validated
/// before anything goes over the wire.
pub struct ReportItem {
    date_format: String,
}

impl ReportItem {
    pub fn new(settings: &Settings) -> Self {
        Self {
            date_format: settings.date_format.clone(),
        }
    }
}

impl MenuItem for ReportItem {
    fn label(&self) -> String {
        "Report.".to_string()
    }

    fn select(&mut self, ctx: &mut MenuContext<'_>) -> Result<Flow, ConsoleError> {
        let tag_name = prompts::text(ctx.console, "Enter name of a tag or press enter to skip: ")?;
        if !tag_name.is_empty() && ctx.gateway.tag_by_name(ctx.console, &tag_name).is_none() {
            ctx.console.println(&output::error("Error: Tag not found."));
            return Ok(Flow::Continue);
        }

        let default_start = dates::default_report_start(&self.date_format);
        let input = prompts::text(
            ctx.console,
            &format!(
                "Enter start date ({}) or press enter to use default [{}]: ",
                self.date_format, default_start
            ),
        )?;
        let start = if input.is_empty() { default_start } else { input };
        if !dates::matches_format(&start, &self.date_format) {
            ctx.console
                .println(&output::error("Error: Invalid date format."));
            return Ok(Flow::Continue);
        }

        let end = prompts::text(
            ctx.console,
            &format!(
                "Enter end date ({}) or press enter to skip: ",
                self.date_format
            ),
        )?;
        if !end.is_empty() && !dates::matches_format(&end, &self.date_format) {
            ctx.console
                .println(&output::error("Error: Invalid date format."));
            return Ok(Flow::Continue);
        }

        ctx.console.println("");
        if let Some(report) = ctx.gateway.report(ctx.console, &tag_name, &start, &end) {
            let rows: Vec<Vec<String>> = report
                .iter()
                .map(|row| {
                    vec![
                        row.name.clone(),
                        row.total_active_time.clone(),
                        row.first_occurrence.clone(),
                        row.last_occurrence.clone(),
                    ]
                })
                .collect();
            table::print_table(
                ctx.console,
                &["Name", "Total Active Time", "First Occurrence", "Last Occurrence"],
                &rows,
            );
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

    const REPORT_OK: &str = r#"{"success":true,"report":[{"name":"Work","totalActiveTime":"02:15","firstOccurence":"2026-01-01","lastOccurence":"2026-02-01"}]}"#;

    fn run_report(transport: &FakeTransport, inputs: &[&str]) -> ScriptedConsole {
        let gateway = Gateway::new(Box::new(transport.clone()));
        let settings = Settings::default();
        let mut item = ReportItem::new(&settings);
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
    fn blank_tag_skips_the_lookup_entirely() {
        let transport = FakeTransport::new();
        transport.push_ok(REPORT_OK);

        let console = run_report(&transport, &["", "2026-01-01", ""]);

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/api/report");
        assert_eq!(requests[0].body.as_ref().unwrap()["tagName"], "");
        assert!(console.written.contains("02:15"));
    }

    #[test]
    fn blank_start_date_defaults_to_six_months_back() {
        let transport = FakeTransport::new();
        transport.push_ok(REPORT_OK);

        let before = dates::default_report_start("%Y-%m-%d");
        run_report(&transport, &["", "", ""]);
        let after = dates::default_report_start("%Y-%m-%d");

        let body = transport.requests()[0].body.clone().unwrap();
        let sent = body["startDate"].as_str().unwrap().to_string();
        assert!(sent == before || sent == after);
        assert_eq!(body["endDate"], "");
    }

    #[test]
    fn invalid_start_date_aborts_before_any_report_call() {
        let transport = FakeTransport::new();

        let console = run_report(&transport, &["", "01/2026"]);

        assert_eq!(transport.request_count(), 0);
        assert!(console.written.contains("Error: Invalid date format."));
    }

    #[test]
    fn invalid_end_date_aborts_before_any_report_call() {
        let transport = FakeTransport::new();

        let console = run_report(&transport, &["", "2026-01-01", "soon"]);

        assert_eq!(transport.request_count(), 0);
        assert!(console.written.contains("Error: Invalid date format."));
    }

    #[test]
    fn missing_tag_aborts_the_report() {
        let transport = FakeTransport::new();
        transport.push_ok(r#"{"success":false}"#);

        let console = run_report(&transport, &["Ghost"]);

        assert_eq!(transport.request_count(), 1);
        assert!(console.written.contains("Error: Tag not found."));
    }
}
