mod cli;
mod logging;
mod session;

use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use crossbeam_channel::{select, unbounded};
use sdlpad_gamepad::SdlBackend;
use sdlpad_workspace::Workspace;

use crate::cli::{Cli, Command};
use crate::session::{format_axes, Session};

fn main() {
    let cli = Cli::parse();
    logging::setup(cli.verbose, cli.no_color);

    let workspace = match Workspace::new(cli.workspace.as_deref()) {
        Ok(workspace) => workspace,
        Err(e) => {
            print_error!("failed to open workspace: {e}");
            return;
        }
    };
    let settings = match workspace.load() {
        Ok(settings) => settings,
        Err(e) => {
            print_error!("failed to load settings: {e}");
            return;
        }
    };

    let mut session = Session::start(settings, cli.nojoy, SdlBackend::init);
    match cli.command {
        Command::List => list(&mut session),
        Command::Run { interval_ms, save } => {
            run(&mut session, Duration::from_millis(interval_ms.max(1)));
            if save {
                match workspace.save(session.capture()) {
                    Ok(()) => {
                        print_info!(
                            "settings saved to {}",
                            workspace.settings_path().display()
                        );
                    }
                    Err(e) => {
                        print_error!("failed to save settings: {e}");
                    }
                }
            }
        }
    }
    session.shutdown();
}

fn list(session: &mut Session) {
    let devices = session.devices();
    if devices.is_empty() {
        print_warning!("no game controllers found");
        return;
    }
    for device in devices {
        print_info!(
            "{} {} (sensitivity {})",
            device.id.bold(),
            device.name,
            device.sensitivity
        );
        for axis in device.axes {
            let map = axis.map.map(|m| m.name()).unwrap_or("none");
            print_info!(
                "  {:<13} -> {:<8} dead zone {:.2}, scale {:.2}",
                axis.name,
                map,
                axis.dead_zone,
                axis.scale
            );
        }
    }
}

fn run(session: &mut Session, interval: Duration) {
    // Handle Ctrl+C to exit cleanly
    let (stop_tx, stop_rx) = unbounded::<()>();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    }) {
        print_error!("failed to set Ctrl+C handler: {e}");
        return;
    }

    let ticker = crossbeam_channel::tick(interval);
    print_info!("polling game controllers every {}ms", interval.as_millis());
    loop {
        select! {
            recv(stop_rx) -> _ => {
                break;
            }
            recv(ticker) -> _ => {
                if let Some(axes) = session.tick() {
                    print_debug!("{}", format_axes(&axes));
                }
            }
        }
    }
}
