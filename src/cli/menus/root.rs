use crate::cli::menu::{ExitItem, Menu, MenuContext, MenuItem};
use crate::cli::menus::report::ReportItem;
use crate::cli::menus::tracking::TrackingItem;
use crate::cli::menus::{filters, tags};

/// Top-level menu the program starts into.
pub fn menu() -> Menu {
    Menu::new("Main.", "Tagtrack", build)
}

fn build(ctx: &mut MenuContext<'_>) -> Vec<Box<dyn MenuItem>> {
    vec![
        Box::new(tags::menu()),
        Box::new(filters::menu()),
        Box::new(ReportItem::new(ctx.settings)),
        Box::new(TrackingItem::probe(ctx)),
        Box::new(ExitItem),
    ]
}
