use miniforth::{
    execute,
    runtime::{
        error,
        interpreter::{CodeManagement, Environment},
    },
};
use std::{
    env::args,
    io::{stdin, stdout, Write},
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// The environment variable that selects what gets logged, in `EnvFilter` syntax.
const LOG_ENV_VAR: &str = "MINIFORTH_LOG";

/// Log to stderr so that nothing gets mixed into the output of `.s`.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Read a line at a time and run it against the same environment until the input runs out.  Errors
/// are reported and the session carries on with whatever state the failed line left behind.
fn repl(environment: &mut Environment) -> error::Result<()> {
    let input = stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        stdout().flush()?;

        line.clear();

        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        if let Err(error) = execute(environment, line.trim_end_matches(['\n', '\r'])) {
            eprintln!("Error: {}", error);
        }
    }

    debug!("end of input");
    Ok(())
}

fn main() -> error::Result<()> {
    init_logging();

    let mut environment = Environment::new();

    // With a script argument run the whole file in batch, otherwise start the read loop.
    let args: Vec<String> = args().collect();

    if args.len() >= 2 {
        info!(script = %args[1], "running script");
        environment.process_source_file(&args[1])
    } else {
        repl(&mut environment)
    }
}
