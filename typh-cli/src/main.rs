//! Binary entrypoint for typh-cli (made by FontLab https://www.fontlab.com/)

fn main() {
    if let Err(err) = typh_cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
