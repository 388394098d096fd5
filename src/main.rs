use std::process::ExitCode;

use log::error;
use timetable_csp::{solve, university, SchedulingInput, ScheduleError, SchedulingOutput};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(output) => {
            match &output.timetable {
                Some(timetable) => println!("{timetable}"),
                None => println!("No solution found."),
            }
            println!(
                "Constraints checked {} times in {} ms.",
                output.constraint_checks, output.elapsed_ms
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<SchedulingOutput, ScheduleError> {
    let input = match std::env::args().nth(1) {
        Some(path) => SchedulingInput::from_json_path(path)?,
        None => university::dataset(&mut rand::thread_rng()),
    };
    solve(&input)
}
