use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use vitals::app::App;
use vitals::config::{self, load_config, load_config_from_path};
use vitals::event::{Event, EventHandler};
use vitals::format::render_report;
use vitals::health::collector::SystemCollector;
use vitals::ui;

#[derive(Parser)]
#[command(
    name = "vitals",
    about = "Point-in-time host health report: CPU load, memory, battery"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report to stdout and exit
    #[arg(long, default_value_t = false)]
    plain: bool,

    /// Theme: dark, light, sky, mono
    #[arg(long)]
    theme: Option<String>,

    /// Color support: auto, 256, truecolor, mono
    #[arg(long)]
    color: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);

    if config.general.plain {
        let mut collector = SystemCollector::system();
        print!("{}", render_report(&collector.collect()));
        return Ok(());
    }

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, config).await;

    ratatui::restore();
    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: config::Config) -> Result<()> {
    let mut app = App::new(config);
    let mut events = EventHandler::new();

    terminal.draw(|frame| ui::draw(frame, &mut app))?;

    while app.running {
        match events.next().await {
            Some(Event::Key(key)) => {
                if key.kind == crossterm::event::KeyEventKind::Press {
                    let action = app.map_key(key);
                    app.dispatch(action);
                    terminal.draw(|frame| ui::draw(frame, &mut app))?;
                }
            }
            Some(Event::Resize) => {
                terminal.draw(|frame| ui::draw(frame, &mut app))?;
            }
            None => break,
        }
    }

    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if cli.plain {
        config.general.plain = true;
    }
    if let Some(ref theme) = cli.theme {
        config.colors.theme = theme.clone();
    }
    if let Some(ref support) = cli.color {
        config.general.color_support = support.clone();
    }

    config
}
