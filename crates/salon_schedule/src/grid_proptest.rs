#[cfg(test)]
mod tests {
    use crate::grid::{resolve_day_grid, Placement, TimeGrid};
    use crate::models::catalog_from;
    use crate::test_support::{appointment, date, service, workers};
    use chrono::Duration;
    use proptest::prelude::*;
    use salon_config::StartSlotPolicy;

    fn policy(exact: bool) -> StartSlotPolicy {
        if exact {
            StartSlotPolicy::ExactMatch
        } else {
            StartSlotPolicy::FirstCovered
        }
    }

    proptest! {
        // ceil(duration / 30), never 0
        #[test]
        fn test_span_is_ceiling_of_half_hours(duration_minutes in 1..=600i64) {
            let grid = TimeGrid::salon_day();
            let span = grid.span_slots(Duration::minutes(duration_minutes));
            prop_assert_eq!(span as i64, (duration_minutes + 29) / 30);
            prop_assert!(span >= 1);
        }

        // Aligned appointments: Start at the start slot, Continuation on every
        // other covered slot, never attributed outside [start, end)
        #[test]
        fn test_aligned_appointment_placement(
            start_index in 0..22usize,
            duration_minutes in 1..=240u32,
            exact in any::<bool>(),
        ) {
            let grid = TimeGrid::salon_day().with_policy(policy(exact));
            let day = date(2024, 6, 3);
            let svc = service("s", "Service", duration_minutes, 1000);
            let services = catalog_from(vec![svc.clone()]);
            let workers = workers();
            let start = grid.slots()[start_index].at(day);
            let appointments = vec![appointment("a", &svc, "w1", start)];

            let result = resolve_day_grid(&grid, day, &workers[..1], &appointments, &services);

            for slot in grid.slots() {
                let t = slot.at(day);
                let cell = result.placement("w1", slot.index).unwrap();
                let a = &appointments[0];
                if a.start_time <= t && t < a.end_time {
                    if t == a.start_time {
                        match cell {
                            Placement::Start { appointment, span_slots, .. } => {
                                prop_assert_eq!(&appointment.id, &a.id);
                                prop_assert_eq!(*span_slots as u32, (duration_minutes + 29) / 30);
                            }
                            other => prop_assert!(false, "expected Start at {}, got {:?}", t, other),
                        }
                    } else {
                        prop_assert!(
                            matches!(cell, Placement::Continuation { .. }),
                            "expected Continuation at {}, got {:?}", t, cell
                        );
                    }
                } else {
                    prop_assert!(cell.appointment().is_none(), "{} should be free", t);
                }
            }
        }

        // Any start minute: at most one block per appointment; exact matching
        // never draws an unaligned one, first-covered always draws a covered one
        #[test]
        fn test_block_count_for_any_start(
            minute_of_day in (8 * 60)..(20 * 60u32),
            duration_minutes in 1..=180u32,
        ) {
            let day = date(2024, 6, 3);
            let svc = service("s", "Service", duration_minutes, 1000);
            let services = catalog_from(vec![svc.clone()]);
            let workers = workers();
            let start = day.and_hms_opt(minute_of_day / 60, minute_of_day % 60, 0).unwrap();
            let appointments = vec![appointment("a", &svc, "w1", start)];

            let covered = TimeGrid::salon_day()
                .slots()
                .iter()
                .filter(|s| appointments[0].covers(s.at(day)))
                .count();
            let aligned = minute_of_day % 30 == 0 && covered > 0 && TimeGrid::salon_day()
                .slots()
                .iter()
                .any(|s| s.at(day) == start);

            let first = resolve_day_grid(&TimeGrid::salon_day(), day, &workers[..1], &appointments, &services);
            prop_assert_eq!(first.block_count(), usize::from(covered > 0));

            let exact_grid = TimeGrid::salon_day().with_policy(StartSlotPolicy::ExactMatch);
            let exact = resolve_day_grid(&exact_grid, day, &workers[..1], &appointments, &services);
            prop_assert_eq!(exact.block_count(), usize::from(aligned));
        }
    }
}
