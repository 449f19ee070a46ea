use log::LevelFilter;

use pamscan::{args, commands, errors};

fn print_err(e: &errors::Error) {
    use error_chain::ChainedError;
    use std::io::Write; // trait which holds `display_chain`
    let stderr = &mut ::std::io::stderr();
    let errmsg = "Error writing to stderr";

    writeln!(stderr, "{}", e.display_chain()).expect(errmsg);
}

fn init_logging(level: LevelFilter) {
    // RUST_LOG takes precedence over command-line flags
    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .parse_default_env()
        .init();
}

fn inner_main() -> errors::Result<()> {
    let args = args::parse_args()?;
    init_logging(args.log_level());

    match args {
        args::Args::Scan(args) => commands::scan::main(&args),
        args::Args::Compare(args) => commands::compare::main(&args),
        args::Args::None => Ok(()),
    }
}

fn main() {
    if let Err(e) = inner_main() {
        print_err(&e);

        ::std::process::exit(1);
    } else {
        ::std::process::exit(0);
    }
}
