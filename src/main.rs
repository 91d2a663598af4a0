use std::{env, panic, process};

use backtrace::Backtrace;
use clap::Parser;

use libshapecheck::cli::{Options, ERROR_EXIT_CODE, MISMATCH_EXIT_CODE, PANIC_EXIT_CODE};
use libshapecheck::logging;

fn main() {
    panic::set_hook(Box::new(|panic_info| {
        let message = match panic_info.payload().downcast_ref::<&str>() {
            Some(&message) => message.to_string(),
            None => match panic_info.payload().downcast_ref::<String>() {
                Some(message) => message.clone(),
                None => "<no message>".to_string(),
            },
        };

        log::error!(
            "shapecheck crashed! You are running shapecheck {}.",
            env!("CARGO_PKG_VERSION")
        );
        log::error!("This is probably a shapecheck bug.");
        log::error!("");
        log::error!("Details: {}", message);

        if let Some(location) = panic_info.location() {
            log::error!("in file {} on line {}", location.file(), location.line());
        }

        let should_backtrace = env::var("RUST_BACKTRACE")
            .map(|var| var == "1")
            .unwrap_or(false);

        if should_backtrace {
            eprintln!("{:?}", Backtrace::new());
        } else {
            eprintln!(
                "note: run with `RUST_BACKTRACE=1` environment variable to display a backtrace."
            );
        }

        process::exit(PANIC_EXIT_CODE);
    }));

    let options = Options::parse();

    logging::init_logging(options.global.verbosity, options.global.color);
    log::trace!("Running {}", options.subcommand.command_name());

    match options.run() {
        Ok(true) => {}
        Ok(false) => process::exit(MISMATCH_EXIT_CODE),
        Err(err) => {
            log::error!("{:?}", err);
            process::exit(ERROR_EXIT_CODE);
        }
    }
}
