mod cli;
mod error;
mod remove;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Err(e) = cli::run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
