use std::process::ExitCode;

use tracing::warn;

use tagtrack::api::gateway::Gateway;
use tagtrack::api::transport::HttpTransport;
use tagtrack::cli::console::StdConsole;
use tagtrack::cli::menu::MenuContext;
use tagtrack::cli::menus::root;
use tagtrack::errors::ConsoleError;
use tagtrack::settings::Settings;

fn main() -> ExitCode {
    tagtrack::init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            warn!(error = %err, "could not load config, using defaults");
            Settings::default()
        }
    };

    let transport = match HttpTransport::new(&settings.api_base_url) {
        Ok(transport) => transport,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let gateway = Gateway::new(Box::new(transport));

    let mut console = StdConsole::new();
    let mut ctx = MenuContext {
        console: &mut console,
        gateway: &gateway,
        settings: &settings,
    };

    match root::menu().run(&mut ctx) {
        // Stdin closing is a normal way to leave the client.
        Ok(()) | Err(ConsoleError::EndOfInput) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
