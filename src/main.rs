use clap::{Arg, ArgAction, Command};
use log::{error, info};
use std::process;

use abc_advisor::utils::logging::initialize_logging;
use abc_advisor::{AdvisorConfig, AuthService, Dispatcher, Session, TerminalConsole, APP_NAME};

fn main() {
    // Every flag is optional; running bare gives the default interactive session
    let matches = Command::new(APP_NAME)
        .about("ABC Algae Bloom Control: interactive water and garden maintenance advice")
        .arg(
            Arg::new("config")
                .long("config")
                .help("JSON configuration file")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("no-pause")
                .long("no-pause")
                .help("Do not pause after each piece of advice")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Append log records to this file instead of stderr")
                .value_name("FILE"),
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => match AdvisorConfig::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        None => AdvisorConfig::default(),
    };
    if matches.get_flag("no-pause") {
        config.pause_millis = 0;
    }
    if let Some(path) = matches.get_one::<String>("log-file") {
        config.log_file = Some(path.clone());
    }

    if let Err(e) = initialize_logging(config.log_file.as_deref()) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    info!("Starting {} with {:?}", APP_NAME, config);

    // The credential store lives exactly as long as this service
    let mut auth = AuthService::new(config.hash_iterations);
    let dispatcher = Dispatcher::new(config.pause());
    let mut console = TerminalConsole::new(config.hide_password);

    let result = Session::new(&mut console, &mut auth, &dispatcher).run();
    if let Err(e) = result {
        error!("Session aborted: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    info!("Session ended, {} account(s) discarded", auth.store().len());
}
