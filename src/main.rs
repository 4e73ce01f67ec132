use colored::Colorize;
use soapgen::cli;

fn main() {
    let command_line_interface = cli::CommandLineInterface::load();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(command_line_interface.log_level())
        .with_target(false)
        .init();

    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
