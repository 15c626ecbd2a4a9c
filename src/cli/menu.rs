use crate::api::gateway::Gateway;
use crate::cli::console::Console;
use crate::cli::output;
use crate::cli::prompts;
use crate::errors::ConsoleError;
use crate::settings::Settings;

/// What the parent loop should do after a child item ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Deactivate the enclosing menu once the current dispatch finishes.
    Exit,
}

/// Shared collaborators threaded explicitly through every menu and action.
pub struct MenuContext<'a> {
    pub console: &'a mut dyn Console,
    pub gateway: &'a Gateway,
    pub settings: &'a Settings,
}

/// One selectable entry: either a terminal action or a nested [`Menu`].
pub trait MenuItem {
    fn label(&self) -> String;
    fn select(&mut self, ctx: &mut MenuContext<'_>) -> Result<Flow, ConsoleError>;
}

type BuildFn = dyn Fn(&mut MenuContext<'_>) -> Vec<Box<dyn MenuItem>>;

/// Composite node. Children are rebuilt fresh on every loop pass so their
/// labels reflect the latest remote state; nothing stale survives an
/// iteration.
pub struct Menu {
    label: &'static str,
    heading: &'static str,
    build: Box<BuildFn>,
}

impl Menu {
    pub fn new(
        label: &'static str,
        heading: &'static str,
        build: impl Fn(&mut MenuContext<'_>) -> Vec<Box<dyn MenuItem>> + 'static,
    ) -> Self {
        Self {
            label,
            heading,
            build: Box::new(build),
        }
    }

    /// Interaction loop: stays active until a child reports [`Flow::Exit`].
    /// Builders always include an exit entry, so the child list is never
    /// empty.
    pub fn run(&mut self, ctx: &mut MenuContext<'_>) -> Result<(), ConsoleError> {
        let mut active = true;
        while active {
            let mut items = (self.build)(ctx);
            let listing = render_listing(self.heading, &items);
            let choice = prompts::int_in_range(ctx.console, 1, items.len(), &listing)?;
            if items[choice - 1].select(ctx)? == Flow::Exit {
                active = false;
            }
        }
        Ok(())
    }
}

impl MenuItem for Menu {
    fn label(&self) -> String {
        self.label.to_string()
    }

    fn select(&mut self, ctx: &mut MenuContext<'_>) -> Result<Flow, ConsoleError> {
        self.run(ctx)?;
        Ok(Flow::Continue)
    }
}

/// Terminal entry that deactivates its enclosing menu.
pub struct ExitItem;

impl MenuItem for ExitItem {
    fn label(&self) -> String {
        "Exit.".to_string()
    }

    fn select(&mut self, ctx: &mut MenuContext<'_>) -> Result<Flow, ConsoleError> {
        ctx.console.clear();
        Ok(Flow::Exit)
    }
}

fn render_listing(heading: &str, items: &[Box<dyn MenuItem>]) -> String {
    let mut listing = output::heading(heading);
    for (index, item) in items.iter().enumerate() {
        listing.push('\n');
        listing.push_str(&format!("{}. {}", index + 1, item.label()));
    }
    listing
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::api::transport::testing::FakeTransport;
    use crate::cli::console::testing::ScriptedConsole;

    struct CountingAction {
        runs: Rc<Cell<usize>>,
    }

    impl MenuItem for CountingAction {
        fn label(&self) -> String {
            "Count.".to_string()
        }

        fn select(&mut self, _ctx: &mut MenuContext<'_>) -> Result<Flow, ConsoleError> {
            self.runs.set(self.runs.get() + 1);
            Ok(Flow::Continue)
        }
    }

    fn run_menu(menu: &mut Menu, inputs: &[&str]) -> ScriptedConsole {
        let gateway = Gateway::new(Box::new(FakeTransport::new()));
        let settings = Settings::default();
        let mut console = ScriptedConsole::new(inputs);
        {
            let mut ctx = MenuContext {
                console: &mut console,
                gateway: &gateway,
                settings: &settings,
            };
            menu.run(&mut ctx).unwrap();
        }
        console
    }

    fn counting_menu(runs: Rc<Cell<usize>>, builds: Rc<Cell<usize>>) -> Menu {
        Menu::new("Counting.", "Counting menu", move |_ctx| {
            builds.set(builds.get() + 1);
            vec![
                Box::new(CountingAction { runs: runs.clone() }),
                Box::new(ExitItem),
            ]
        })
    }

    #[test]
    fn children_are_rebuilt_on_every_iteration() {
        let runs = Rc::new(Cell::new(0));
        let builds = Rc::new(Cell::new(0));
        let mut menu = counting_menu(runs.clone(), builds.clone());

        run_menu(&mut menu, &["1", "1", "2"]);

        assert_eq!(runs.get(), 2);
        assert_eq!(builds.get(), 3);
    }

    #[test]
    fn exit_terminates_only_the_innermost_menu() {
        let runs = Rc::new(Cell::new(0));
        let sub_builds = Rc::new(Cell::new(0));
        let root_builds = Rc::new(Cell::new(0));

        let sub = counting_menu(runs.clone(), sub_builds.clone());
        let root_builds_handle = root_builds.clone();
        let sub_cell = std::cell::RefCell::new(Some(sub));
        let mut root = Menu::new("Root.", "Root menu", move |_ctx| {
            root_builds_handle.set(root_builds_handle.get() + 1);
            let sub = sub_cell
                .borrow_mut()
                .take()
                .unwrap_or_else(|| counting_menu(Rc::new(Cell::new(0)), Rc::new(Cell::new(0))));
            vec![Box::new(sub), Box::new(ExitItem)]
        });

        // Enter the submenu, run its action, leave it, then leave the root.
        run_menu(&mut root, &["1", "1", "2", "2"]);

        assert_eq!(runs.get(), 1);
        assert_eq!(sub_builds.get(), 2);
        assert_eq!(root_builds.get(), 2);
    }

    #[test]
    fn listing_numbers_children_from_one() {
        let runs = Rc::new(Cell::new(0));
        let builds = Rc::new(Cell::new(0));
        let mut menu = counting_menu(runs, builds);

        let console = run_menu(&mut menu, &["2"]);

        assert!(console.written.contains("1. Count."));
        assert!(console.written.contains("2. Exit."));
        assert!(console
            .written
            .contains("Please enter a number between 1 and 2 inclusive."));
    }

    #[test]
    fn out_of_range_selection_is_reprompted_against_current_children() {
        let runs = Rc::new(Cell::new(0));
        let builds = Rc::new(Cell::new(0));
        let mut menu = counting_menu(runs.clone(), builds);

        let console = run_menu(&mut menu, &["3", "2"]);

        assert_eq!(runs.get(), 0);
        assert!(console
            .written
            .contains("Error: 3 is not between 1 and 2 inclusive."));
    }

    #[test]
    fn exit_item_clears_the_screen() {
        let runs = Rc::new(Cell::new(0));
        let builds = Rc::new(Cell::new(0));
        let mut menu = counting_menu(runs, builds);

        let console = run_menu(&mut menu, &["2"]);

        assert_eq!(console.clears, 1);
    }
}
