use clap::Parser;

use spendwise_chat::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();
    spendwise_chat::logging::init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    if let Err(err) = cli::run(cli, &mut stdout.lock()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
