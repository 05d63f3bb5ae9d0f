use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{error, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use mousemaze::UiMode;
use mousemaze::console::{self, SessionEnd};
use mousemaze::core::config::{self, CliOverrides};
use mousemaze::core::maze::Position;
use mousemaze::core::state::App;
use mousemaze::demos::{self, Demo};
use mousemaze::tui;

#[derive(Parser)]
#[command(name = "mousemaze", about = "Guide the mouse to the cheese", version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play the maze (the default)
    Play(PlayArgs),
    /// Run one of the standalone demos
    Demo(DemoArgs),
}

#[derive(clap::Args, Default)]
struct PlayArgs {
    /// Front-end to play with
    #[arg(long, value_enum)]
    ui: Option<UiMode>,
    /// Layout file to load instead of the built-in maze
    #[arg(long)]
    maze: Option<PathBuf>,
    /// Start cell as X,Y
    #[arg(long)]
    start: Option<Position>,
}

#[derive(clap::Args)]
struct DemoArgs {
    /// Which demo to run
    #[arg(value_enum)]
    name: Demo,
    /// Worker names for the fan-out demo
    #[arg(long, value_delimiter = ',')]
    workers: Option<Vec<String>>,
    /// Timeout for the race demo
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to mousemaze.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("mousemaze.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(|e| {
        error!("{e}");
        io::Error::other(e)
    })?;

    match args.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(play) => {
            let cli = CliOverrides {
                ui: play.ui,
                maze_file: play.maze,
                start: play.start,
                ..Default::default()
            };
            let resolved = config::resolve(&file_config, &cli);
            info!("mousemaze starting: {:?}", resolved);

            let mut app = App::from_config(&resolved).map_err(|e| {
                error!("Could not set up the maze: {e}");
                io::Error::other(e)
            })?;

            match resolved.ui {
                UiMode::Console => {
                    let end = console::run(&mut app)?;
                    info!("Console session ended: {:?}", end);
                    if end == SessionEnd::InputClosed {
                        info!("Gave up at {}", app.walker.position());
                    }
                }
                UiMode::Tui => tui::run(&mut app)?,
            }
        }
        Command::Demo(demo) => {
            let cli = CliOverrides {
                workers: demo.workers,
                timeout_ms: demo.timeout_ms,
                ..Default::default()
            };
            let resolved = config::resolve(&file_config, &cli);
            demos::run(demo.name, &resolved, &mut io::stdout()).await?;
        }
    }

    Ok(())
}
