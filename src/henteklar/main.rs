use colored::Colorize;

mod cli;

fn main() {
    if let Err(message) = cli::run() {
        eprintln!("{}", message.red());
        std::process::exit(1);
    }
}
