use std::io;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use tracing::{debug, info};

use dragnum::app::App;
use dragnum::cli::{parse_args, run_cli_command, VERSION};
use dragnum::config::AppConfig;
use dragnum::logging::init_logging;
use dragnum::terminal::{setup_panic_hook, TerminalManager};
use dragnum::ui;

fn main() -> Result<()> {
    // Handle --version / --help before touching the terminal
    let options = run_cli_command(parse_args(std::env::args()));

    color_eyre::install()?;

    let config =
        AppConfig::load_or_default(options.config_path.as_deref())?.with_axis_override(options.axis);
    let logging = init_logging(&config.log_level, options.log_file.as_deref())?;
    if logging {
        info!(version = VERSION, controls = config.controls.len(), "starting dragnum");
    }

    // Must be installed before the terminal enters raw mode
    setup_panic_hook();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut term_manager = TerminalManager::new()?;
    let mut app = App::new(&config, io::stdout())
        .with_config_path(AppConfig::resolve_path(options.config_path.as_deref()));

    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));

    term_manager.restore();
    result
}

async fn run_app<B, W>(terminal: &mut Terminal<B>, app: &mut App<W>) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
    W: io::Write,
{
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|f| ui::render(f, &mut *app))?;

        let Some(event) = event_stream.next().await else {
            debug!("event stream closed");
            return Ok(());
        };
        let event = event?;

        if let Event::Resize(width, height) = event {
            debug!(width, height, "terminal resized");
            continue;
        }

        app.handle_event(&event);

        if app.should_quit {
            return Ok(());
        }
    }
}
