mod app;
mod cli;
mod event;
mod layout;
mod logging;
mod palette;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let _log_guard = logging::init()?;
    if let Some(command) = cli_opts.command {
        return cli::run(command);
    }

    let options = cli_opts.options()?;
    let mut app = app::App::new(options);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
