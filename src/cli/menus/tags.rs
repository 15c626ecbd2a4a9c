use crate::api::types::Tag;
use crate::cli::menu::{ExitItem, Flow, Menu, MenuContext, MenuItem};
use crate::cli::{output, prompts, table};
use crate::dates;
use crate::errors::ConsoleError;

pub fn menu() -> Menu {
    Menu::new("Tag.", "Tag menu", build)
}

fn build(ctx: &mut MenuContext<'_>) -> Vec<Box<dyn MenuItem>> {
    vec![
        Box::new(DisplayTags { active_only: false }),
        Box::new(DisplayTags { active_only: true }),
        Box::new(CreateTag),
        Box::new(RemoveTag),
        Box::new(ToggleTag),
        Box::new(AddSession {
            date_format: ctx.settings.date_format.clone(),
        }),
        Box::new(ExitItem),
    ]
}

struct DisplayTags {
    active_only: bool,
}

impl MenuItem for DisplayTags {
    fn label(&self) -> String {
        if self.active_only {
            "Display active tags.".to_string()
        } else {
            "Display tags.".to_string()
        }
    }

    fn select(&mut self, ctx: &mut MenuContext<'_>) -> Result<Flow, ConsoleError> {
        let tags = if self.active_only {
            ctx.gateway.active_tags(ctx.console)
        } else {
            ctx.gateway.tags(ctx.console)
        };
        if let Some(tags) = tags {
            render_tags(ctx, &tags);
        }
        Ok(Flow::Continue)
    }
}

struct CreateTag;

impl MenuItem for CreateTag {
    fn label(&self) -> String {
        "Create a tag.".to_string()
    }

    fn select(&mut self, ctx: &mut MenuContext<'_>) -> Result<Flow, ConsoleError> {
        let name = prompts::text(ctx.console, "Enter name of a tag: ")?;
        ctx.gateway.add_tag(ctx.console, &name);
        Ok(Flow::Continue)
    }
}

struct RemoveTag;

impl MenuItem for RemoveTag {
    fn label(&self) -> String {
        "Remove a tag.".to_string()
    }

    fn select(&mut self, ctx: &mut MenuContext<'_>) -> Result<Flow, ConsoleError> {
        let name = prompts::text(ctx.console, "Enter name of a tag: ")?;
        ctx.gateway.remove_tag(ctx.console, &name);
        Ok(Flow::Continue)
    }
}

struct ToggleTag;

impl MenuItem for ToggleTag {
    fn label(&self) -> String {
        "Enable/Disable tag.".to_string()
    }

    fn select(&mut self, ctx: &mut MenuContext<'_>) -> Result<Flow, ConsoleError> {
        let name = prompts::text(ctx.console, "Enter name of a tag: ")?;
        let Some(tag) = ctx.gateway.tag_by_name(ctx.console, &name) else {
            ctx.console.println(&output::error("Error: Tag not found."));
            return Ok(Flow::Continue);
        };

        let state = if tag.inactive { "disabled" } else { "enabled" };
        let action = if tag.inactive { "enable" } else { "disable" };
        let question = format!("Tag is {state}, do you want to {action} it?");
        if prompts::yes_or_no(ctx.console, &question)? {
            ctx.gateway.toggle_tag(ctx.console, &name);
        }
        Ok(Flow::Continue)
    }
}

/// Records a manual start/end interval against a tag. Both dates are
/// required and validated before any remote call.
struct AddSession {
    date_format: String,
}

impl MenuItem for AddSession {
    fn label(&self) -> String {
        "Add session.".to_string()
    }

    fn select(&mut self, ctx: &mut MenuContext<'_>) -> Result<Flow, ConsoleError> {
        let tag_name = prompts::text(ctx.console, "Enter name of a tag: ")?;
        if ctx.gateway.tag_by_name(ctx.console, &tag_name).is_none() {
            ctx.console.println(&output::error("Error: Tag not found."));
            return Ok(Flow::Continue);
        }

        let start = prompts::text(
            ctx.console,
            &format!("Enter start date ({}): ", self.date_format),
        )?;
        if !dates::matches_format(&start, &self.date_format) {
            ctx.console
                .println(&output::error("Error: Invalid date format."));
            return Ok(Flow::Continue);
        }

        let end = prompts::text(
            ctx.console,
            &format!("Enter end date ({}): ", self.date_format),
        )?;
        if !dates::matches_format(&end, &self.date_format) {
            ctx.console
                .println(&output::error("Error: Invalid date format."));
            return Ok(Flow::Continue);
        }

        ctx.console.println("");
        ctx.gateway
            .add_session(ctx.console, &tag_name, &start, &end);
        Ok(Flow::Continue)
    }
}

fn render_tags(ctx: &mut MenuContext<'_>, tags: &[Tag]) {
    let rows: Vec<Vec<String>> = tags
        .iter()
        .map(|tag| vec![tag.name.clone(), yes_no(tag.inactive)])
        .collect();
    table::print_table(ctx.console, &["Name", "Disabled"], &rows);
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}
