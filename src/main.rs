//! Gomoku for two players, in a window or on the terminal.

use clap::Parser;
use gomoku::config::{Args, Frontend};
use gomoku::ui::GomokuApp;
use gomoku::{Session, TracingObserver};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(args.log_filter())?)
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::new();
    session.subscribe(Box::new(TracingObserver));

    match args.frontend {
        Frontend::Terminal => {
            let stdin = std::io::stdin();
            gomoku::terminal::run(&mut session, stdin.lock(), std::io::stdout())?;
        }
        Frontend::Gui => {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([args.width, args.height])
                    .with_min_inner_size([640.0, 480.0])
                    .with_title("Gomoku"),
                ..Default::default()
            };

            eframe::run_native(
                "Gomoku",
                options,
                Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, session)))),
            )?;
        }
    }

    Ok(())
}
