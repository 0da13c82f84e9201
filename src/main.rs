use charcount::cli;

fn main() {
    // Usage errors are printed inside; only I/O failures reach here.
    match cli::run() {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
