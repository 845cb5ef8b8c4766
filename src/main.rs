use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use root_approximator::session::{init_logger, Console, Session, SessionCfg};


fn main() -> ExitCode {
    let cfg = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match SessionCfg::load(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => SessionCfg::default(),
    };

    if let Err(e) = init_logger(&cfg) {
        eprintln!("warning: logging disabled: {e}");
    }

    let mut session = match Session::new(cfg) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin  = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    match session.run(&mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
