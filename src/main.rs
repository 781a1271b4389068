use std::process::ExitCode;

fn main() -> ExitCode {
    medlist_lib::run()
}
