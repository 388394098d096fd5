mod common;

use proptest::prelude::*;
use timetable_csp::data::{ValueHeuristic, VariableHeuristic};
use timetable_csp::solve;

fn variable_heuristic() -> impl Strategy<Value = VariableHeuristic> {
    prop_oneof![
        Just(VariableHeuristic::Naive),
        Just(VariableHeuristic::Degree),
        Just(VariableHeuristic::CalendarOrder),
    ]
}

fn value_heuristic() -> impl Strategy<Value = ValueHeuristic> {
    prop_oneof![
        Just(ValueHeuristic::Naive),
        Just(ValueHeuristic::LeastConstraining),
        Just(ValueHeuristic::ForwardChecking),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn solutions_satisfy_every_hard_constraint(
        seed in any::<u64>(),
        variable in variable_heuristic(),
        value in value_heuristic(),
        arc_consistency in any::<bool>(),
        early_coverage in any::<bool>(),
    ) {
        let mut input = common::two_subjects();
        input.solver.random_seed = Some(seed);
        input.solver.variable_heuristic = variable;
        input.solver.value_heuristic = value;
        input.solver.arc_consistency = arc_consistency;
        input.solver.early_coverage = early_coverage;

        let output = solve(&input).unwrap();
        let timetable = output.timetable.as_ref();
        prop_assert!(timetable.is_some());
        common::assert_valid(&input, timetable.unwrap());
    }

    #[test]
    fn arc_consistency_never_prunes_a_solvable_instance(seed in any::<u64>()) {
        let mut input = common::two_by_two();
        input.solver.random_seed = Some(seed);
        input.solver.arc_consistency = true;
        prop_assert!(solve(&input).unwrap().timetable.is_some());
    }
}
