use crate::api::types::{FieldKind, Filter, MatchKind};
use crate::cli::menu::{ExitItem, Flow, Menu, MenuContext, MenuItem};
use crate::cli::{output, prompts, table};
use crate::errors::ConsoleError;

pub fn menu() -> Menu {
    Menu::new("Filters.", "Filters menu", build)
}

fn build(ctx: &mut MenuContext<'_>) -> Vec<Box<dyn MenuItem>> {
    vec![
        Box::new(DisplayFilters { active_only: false }),
        Box::new(DisplayFilters { active_only: true }),
        Box::new(CreateFilter {
            fields: ctx.settings.field_options.clone(),
        }),
        Box::new(RemoveFilter),
        Box::new(ToggleFilter),
        Box::new(ExitItem),
    ]
}

struct DisplayFilters {
    active_only: bool,
}

impl MenuItem for DisplayFilters {
    fn label(&self) -> String {
        if self.active_only {
            "Display active filters.".to_string()
        } else {
            "Display filters.".to_string()
        }
    }

    fn select(&mut self, ctx: &mut MenuContext<'_>) -> Result<Flow, ConsoleError> {
        let tag_name = prompts::text(ctx.console, "Enter name of a tag: ")?;
        let filters = if self.active_only {
            ctx.gateway.active_filters(ctx.console, &tag_name)
        } else {
            ctx.gateway.filters(ctx.console, &tag_name)
        };
        if let Some(filters) = filters {
            render_filters(ctx, &filters);
        }
        Ok(Flow::Continue)
    }
}

/// Wizard that keeps creating filters until the user declines to add more.
/// A missing tag breaks out of the whole loop; the embedded "Exit" choices
/// break out without creating a filter for that round.
struct CreateFilter {
    fields: Vec<FieldKind>,
}

impl MenuItem for CreateFilter {
    fn label(&self) -> String {
        "Create a filter.".to_string()
    }

    fn select(&mut self, ctx: &mut MenuContext<'_>) -> Result<Flow, ConsoleError> {
        loop {
            let tag_name = prompts::text(ctx.console, "Enter name of a tag: ")?;
            if ctx.gateway.tag_by_name(ctx.console, &tag_name).is_none() {
                ctx.console.println(&output::error("Error: Tag not found."));
                break;
            }

            let Some(field) = pick_field(ctx, &self.fields)? else {
                break;
            };
            let Some(kind) = pick_match_kind(ctx)? else {
                break;
            };

            let value = prompts::text(ctx.console, "Enter value of a filter: ")?;
            ctx.gateway
                .add_filter(ctx.console, &tag_name, field, kind, &value);

            if !prompts::yes_or_no(ctx.console, "Do you want to add more")? {
                break;
            }
        }
        Ok(Flow::Continue)
    }
}

struct RemoveFilter;

impl MenuItem for RemoveFilter {
    fn label(&self) -> String {
        "Remove a filter.".to_string()
    }

    fn select(&mut self, ctx: &mut MenuContext<'_>) -> Result<Flow, ConsoleError> {
        let id = prompts::positive_int(ctx.console, "Enter id of a filter: ")?;
        ctx.gateway.remove_filter(ctx.console, id);
        Ok(Flow::Continue)
    }
}

struct ToggleFilter;

impl MenuItem for ToggleFilter {
    fn label(&self) -> String {
        "Enable/Disable filter.".to_string()
    }

    fn select(&mut self, ctx: &mut MenuContext<'_>) -> Result<Flow, ConsoleError> {
        let id = prompts::positive_int(ctx.console, "Enter id of a filter: ")?;
        let Some(filter) = ctx.gateway.filter_by_id(ctx.console, id) else {
            ctx.console
                .println(&output::error("Error: Filter not found."));
            return Ok(Flow::Continue);
        };

        let state = if filter.disabled { "disabled" } else { "enabled" };
        let action = if filter.disabled { "enable" } else { "disable" };
        let question = format!("Filter is {state}, do you want to {action} it?");
        if prompts::yes_or_no(ctx.console, &question)? {
            ctx.gateway.toggle_filter(ctx.console, id);
        }
        Ok(Flow::Continue)
    }
}

/// Offers the injected capability set plus a trailing "Exit" choice numbered
/// one past the last real field. `None` means the user chose to bail out.
fn pick_field(
    ctx: &mut MenuContext<'_>,
    fields: &[FieldKind],
) -> Result<Option<FieldKind>, ConsoleError> {
    let mut options: Vec<&str> = fields.iter().map(|field| field.label()).collect();
    options.push("Exit");
    let choice = prompts::pick_option(ctx.console, "Select a filter.", &options)?;
    Ok(fields.get(choice - 1).copied())
}

fn pick_match_kind(ctx: &mut MenuContext<'_>) -> Result<Option<MatchKind>, ConsoleError> {
    let mut options: Vec<&str> = MatchKind::ALL.iter().map(|kind| kind.label()).collect();
    options.push("Exit");
    let choice = prompts::pick_option(ctx.console, "Select type of filter.", &options)?;
    Ok(MatchKind::ALL.get(choice - 1).copied())
}

fn render_filters(ctx: &mut MenuContext<'_>, filters: &[Filter]) {
    let rows: Vec<Vec<String>> = filters
        .iter()
        .map(|filter| {
            vec![
                filter.id.to_string(),
                filter.field.clone(),
                filter.kind.clone(),
                filter.value.clone(),
                if filter.disabled { "Yes" } else { "No" }.to_string(),
            ]
        })
        .collect();
    table::print_table(
        ctx.console,
        &["Id", "Filter", "Type", "Value", "Disabled"],
        &rows,
    );
}
