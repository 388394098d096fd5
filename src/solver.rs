use log::{info, warn};
use std::time::{Duration, Instant};

use crate::arc_consistency;
use crate::checker::Checker;
use crate::data::{SchedulingInput, SchedulingOutput};
use crate::error::ScheduleError;
use crate::grid::Grid;
use crate::heuristics::{value_orderer, variable_selector};
use crate::instance::ProblemInstance;
use crate::search::Backtracking;
use crate::timetable::Timetable;

/// Solves the timetabling problem by backtracking search.
///
/// Malformed input is an `Err`; an instance with no consistent timetable is
/// an `Ok` output whose `timetable` is `None`.
pub fn solve(input: &SchedulingInput) -> Result<SchedulingOutput, ScheduleError> {
    let start_time = Instant::now();
    let config = &input.solver;
    let instance = ProblemInstance::new(input)?;

    info!(
        "Scheduling {} groups over {} lessons with {} teachers and {} rooms...",
        instance.n_groups(),
        instance.total_lessons(),
        instance.n_teachers(),
        instance.n_rooms()
    );

    let mut rng = config.rng();
    let mut grid = Grid::new(&instance);
    let mut checker = Checker::new(config.coverage_categories, config.early_coverage);

    if config.arc_consistency {
        arc_consistency::enforce(&mut grid, &instance, &mut checker, &mut rng)?;

        // coverage is judged on the original curricula, so any pruned subject
        // can never be placed
        if let Some(group) =
            (0..instance.n_groups()).find(|&g| grid.curriculum(g) != instance.curriculum(g))
        {
            let duration = start_time.elapsed();
            warn!(
                "Arc consistency pruned the curriculum of {}; no solution exists ({:.2?})",
                instance.group_name(group),
                duration
            );
            return Ok(SchedulingOutput {
                timetable: None,
                constraint_checks: checker.checks(),
                elapsed_ms: elapsed_ms(duration),
            });
        }
    }

    let selector = variable_selector(config.variable_heuristic);
    let orderer = value_orderer(config.value_heuristic);
    info!(
        "Starting backtracking search ({} variables, {} values)...",
        selector.name(),
        orderer.name()
    );
    let solved = Backtracking::new(
        &instance,
        &mut grid,
        &mut checker,
        selector.as_ref(),
        orderer.as_ref(),
        &mut rng,
    )
    .run();

    let duration = start_time.elapsed();
    let timetable = if solved {
        info!("Solution found in {:.2?}", duration);
        Timetable::from_grid(&grid, &instance)
    } else {
        warn!("No solution exists; search exhausted after {:.2?}", duration);
        None
    };
    info!("Constraints checked {} times.", checker.checks());

    Ok(SchedulingOutput {
        timetable,
        constraint_checks: checker.checks(),
        elapsed_ms: elapsed_ms(duration),
    })
}

fn elapsed_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
