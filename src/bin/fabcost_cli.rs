use std::process;

fn main() {
    fabcost::init();

    if let Err(err) = fabcost::cli::run_cli() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
