//! Property tests over random traces for every policy.

use pagesim::{compare, Capacity, PolicyKind, ReplacementPolicy, RunResult, StepLabel};
use proptest::prelude::*;

fn trace_strategy() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(vec!['A', 'B', 'C', 'D', 'E', 'F']), 0..48)
}

fn run(kind: PolicyKind, trace: &[char], capacity: usize) -> RunResult<char> {
    kind.build::<char>()
        .run(trace, Capacity::new(capacity).unwrap())
}

proptest! {
    #[test]
    fn prop_counts_cover_trace(trace in trace_strategy(), capacity in 1usize..6) {
        for kind in PolicyKind::ALL {
            let result = run(kind, &trace, capacity);
            prop_assert_eq!(result.len(), trace.len());
            prop_assert_eq!(result.hit_count() + result.fault_count(), trace.len());
            prop_assert_eq!(result.hit_history().len(), trace.len());
            prop_assert_eq!(result.snapshots().len(), trace.len());
        }
    }

    #[test]
    fn prop_snapshots_respect_capacity(trace in trace_strategy(), capacity in 1usize..6) {
        for kind in PolicyKind::ALL {
            let result = run(kind, &trace, capacity);
            let mut faults = 0;
            for (index, step) in result.steps().iter().enumerate() {
                if !step.hit {
                    faults += 1;
                }
                prop_assert!(step.snapshot.len() <= capacity);
                prop_assert_eq!(step.snapshot.len(), faults.min(capacity));
                prop_assert!(step.snapshot.contains(&trace[index]));
            }
        }
    }

    #[test]
    fn prop_hits_match_previous_snapshot(trace in trace_strategy(), capacity in 1usize..6) {
        for kind in PolicyKind::ALL {
            let result = run(kind, &trace, capacity);
            let mut previous: &[char] = &[];
            for (index, step) in result.steps().iter().enumerate() {
                prop_assert_eq!(step.hit, previous.contains(&step.page));

                let migrated = !step.hit && previous.len() == capacity;
                prop_assert_eq!(step.evicted.is_some(), migrated);
                prop_assert_eq!(result.label(index) == Some(StepLabel::Migrated), migrated);
                if let Some(victim) = &step.evicted {
                    prop_assert!(previous.contains(victim));
                    prop_assert!(!step.snapshot.contains(victim));
                }
                previous = step.snapshot.as_slice();
            }
        }
    }

    #[test]
    fn prop_fresh_instances_are_deterministic(trace in trace_strategy(), capacity in 1usize..6) {
        for kind in PolicyKind::ALL {
            let first = run(kind, &trace, capacity);
            let second = run(kind, &trace, capacity);
            prop_assert_eq!(first.checksum(), second.checksum());
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn prop_rerun_resets_state(trace in trace_strategy(), other in trace_strategy(), capacity in 1usize..6) {
        let capacity = Capacity::new(capacity).unwrap();
        for kind in PolicyKind::ALL {
            let mut policy = kind.build::<char>();
            let first = policy.run(&trace, capacity);
            policy.run(&other, capacity);
            let again = policy.run(&trace, capacity);
            prop_assert_eq!(first, again);
        }
    }

    #[test]
    fn prop_optimal_never_faults_more(trace in trace_strategy(), capacity in 1usize..6) {
        let results = compare(&trace, capacity, &PolicyKind::ALL).unwrap();
        let optimal = run(PolicyKind::Optimal, &trace, capacity).fault_count();
        for result in &results {
            prop_assert!(optimal <= result.fault_count(), "{} beat Optimal", result.name());
        }
    }

    #[test]
    fn prop_fifo_evicts_oldest(trace in trace_strategy(), capacity in 1usize..6) {
        let result = run(PolicyKind::Fifo, &trace, capacity);
        let mut previous: &[char] = &[];
        for step in result.steps() {
            if step.evicted.is_some() {
                prop_assert_eq!(step.evicted.as_ref(), previous.first());
            }
            previous = step.snapshot.as_slice();
        }
    }

    #[test]
    fn prop_lru_keeps_latest_at_back(trace in trace_strategy(), capacity in 1usize..6) {
        let result = run(PolicyKind::Lru, &trace, capacity);
        let mut previous: &[char] = &[];
        for step in result.steps() {
            prop_assert_eq!(step.snapshot.last(), Some(&step.page));
            if step.evicted.is_some() {
                prop_assert_eq!(step.evicted.as_ref(), previous.first());
            }
            previous = step.snapshot.as_slice();
        }
    }

    #[test]
    fn prop_lru_more_frames_never_fault_more(trace in trace_strategy(), capacity in 1usize..6) {
        let smaller = run(PolicyKind::Lru, &trace, capacity).fault_count();
        let larger = run(PolicyKind::Lru, &trace, capacity + 1).fault_count();
        prop_assert!(larger <= smaller);
    }
}
