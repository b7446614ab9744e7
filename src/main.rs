use std::process::ExitCode;

fn main() -> ExitCode {
    llm_matrix_lib::run()
}
