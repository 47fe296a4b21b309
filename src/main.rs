use std::io;
use std::process::exit;

use iso_tiles::app::IsoApp;
use iso_tiles::cli::Opt;
use log::error;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use structopt::StructOpt;
use structopt_flags::LogLevel;

fn main() {
    let opt = Opt::from_args();

    if let Some(shell) = opt.completions {
        Opt::clap().gen_completions_to("iso-tiles", shell, &mut io::stdout());
        return;
    }

    if let Err(e) = TermLogger::init(
        opt.verbose.get_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialise logger: {}", e);
    }

    let config = match opt.to_app_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    };

    if let Err(e) = IsoApp::new(config).run() {
        error!("{}", e);
        exit(1);
    }
}
