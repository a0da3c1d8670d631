#[cfg(test)]
mod tests {
    use crate::booking::NewAppointmentRequest;
    use crate::grid::{resolve_day_grid, Placement, TimeGrid};
    use crate::models::{AppointmentStatus, Recurrence};
    use crate::recurrence::{expand_recurrence, recurrence_boundary};
    use crate::test_support::{services, workers, SequentialIds};
    use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn seed(day_offset: u64, minute_of_day: u32) -> NaiveDateTime {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        base.checked_add_days(Days::new(day_offset))
            .unwrap()
            .and_hms_opt(minute_of_day / 60, minute_of_day % 60, 0)
            .unwrap()
    }

    fn any_recurrence() -> impl Strategy<Value = Recurrence> {
        prop_oneof![
            Just(Recurrence::None),
            Just(Recurrence::Weekly),
            Just(Recurrence::BiWeekly),
            Just(Recurrence::Monthly),
        ]
    }

    proptest! {
        #[test]
        fn test_none_always_books_exactly_one(
            day_offset in 0..730u64,
            minute_of_day in 0..(24 * 60u32),
            end_offset in -400..400i64,
        ) {
            let start = seed(day_offset, minute_of_day);
            let mut request = NewAppointmentRequest::single("c", "s1", "w1", start);
            request.recurrence_end_date = Some(start.date() + Duration::days(end_offset));
            let instances = expand_recurrence(&request, &services(), &mut SequentialIds::default());
            prop_assert_eq!(instances.len(), 1);
            prop_assert_eq!(instances[0].start_time, start);
            prop_assert!(instances[0].recurrence_id.is_none());
        }

        #[test]
        fn test_weekly_window_of_n_weeks(
            day_offset in 0..730u64,
            minute_of_day in 0..(24 * 60u32),
            weeks in 0..30i64,
        ) {
            let start = seed(day_offset, minute_of_day);
            let request = NewAppointmentRequest::single("c", "s1", "w1", start)
                .repeating(Recurrence::Weekly, start.date() + Duration::days(7 * weeks));
            let instances = expand_recurrence(&request, &services(), &mut SequentialIds::default());

            prop_assert_eq!(instances.len() as i64, weeks + 1);
            for pair in instances.windows(2) {
                prop_assert_eq!(pair[1].start_time - pair[0].start_time, Duration::days(7));
            }
            let series: HashSet<_> = instances.iter().map(|a| a.recurrence_id.clone()).collect();
            prop_assert_eq!(series.len(), 1);
            prop_assert!(instances[0].recurrence_id.is_some());
        }

        #[test]
        fn test_end_before_start_books_nothing(
            day_offset in 1..730u64,
            minute_of_day in 0..(24 * 60u32),
            days_before in 1..400i64,
            recurrence in any_recurrence().prop_filter("repeating only", |r| r.is_recurring()),
        ) {
            let start = seed(day_offset, minute_of_day);
            let request = NewAppointmentRequest::single("c", "s1", "w1", start)
                .repeating(recurrence, start.date() - Duration::days(days_before));
            let instances = expand_recurrence(&request, &services(), &mut SequentialIds::default());
            prop_assert!(instances.is_empty());
        }

        // Instances are ordered, inside the window, one service long, confirmed
        // and uniquely identified
        #[test]
        fn test_instance_invariants(
            day_offset in 0..730u64,
            minute_of_day in 0..(24 * 60u32),
            window_days in 0..400i64,
            service_id in prop_oneof![Just("s1"), Just("s2"), Just("s3")],
            recurrence in any_recurrence(),
        ) {
            let start = seed(day_offset, minute_of_day);
            let catalog = services();
            let request = NewAppointmentRequest::single("c", service_id, "w1", start)
                .repeating(recurrence, start.date() + Duration::days(window_days));
            let boundary = recurrence_boundary(&request);
            let instances = expand_recurrence(&request, &catalog, &mut SequentialIds::default());

            prop_assert!(!instances.is_empty());
            prop_assert_eq!(instances[0].start_time, start);
            let ids: HashSet<&str> = instances.iter().map(|a| a.id.as_str()).collect();
            prop_assert_eq!(ids.len(), instances.len());
            for (i, instance) in instances.iter().enumerate() {
                prop_assert!(instance.start_time <= boundary);
                prop_assert_eq!(instance.end_time - instance.start_time, catalog[service_id].duration());
                prop_assert_eq!(instance.status, AppointmentStatus::Confirmed);
                if i > 0 {
                    prop_assert!(instances[i - 1].start_time < instance.start_time);
                }
            }
        }

        // Monthly keeps the seed's day of month when the month has it
        #[test]
        fn test_monthly_keeps_day_of_month(
            day_offset in 0..730u64,
            months in 1..24u32,
        ) {
            let start = seed(day_offset, 10 * 60);
            let end = start.date().checked_add_months(chrono::Months::new(months)).unwrap();
            let request = NewAppointmentRequest::single("c", "s1", "w1", start)
                .repeating(Recurrence::Monthly, end);
            let instances = expand_recurrence(&request, &services(), &mut SequentialIds::default());

            prop_assert_eq!(instances.len() as u32, months + 1);
            for instance in &instances {
                let day = instance.start_time.day();
                prop_assert!(day <= start.day());
                if start.day() <= 28 {
                    prop_assert_eq!(day, start.day());
                }
                prop_assert_eq!(instance.start_time.time(), start.time());
            }
        }

        // Each generated instance draws a block at its own start time
        #[test]
        fn test_instances_start_on_their_own_slot(
            day_offset in 0..730u64,
            slot_index in 0..22usize,
            window_days in 0..120i64,
            service_id in prop_oneof![Just("s1"), Just("s2"), Just("s3")],
            recurrence in any_recurrence(),
        ) {
            let grid = TimeGrid::salon_day();
            let start = seed(day_offset, 9 * 60 + 30 * slot_index as u32);
            let catalog = services();
            let staff = workers();
            let request = NewAppointmentRequest::single("c", service_id, "w1", start)
                .repeating(recurrence, start.date() + Duration::days(window_days));
            let instances = expand_recurrence(&request, &catalog, &mut SequentialIds::default());

            for instance in &instances {
                let day = resolve_day_grid(
                    &grid,
                    instance.date(),
                    staff.iter().filter(|w| w.id == "w1"),
                    std::iter::once(instance),
                    &catalog,
                );
                match day.placement("w1", slot_index) {
                    Some(Placement::Start { appointment, span_slots, .. }) => {
                        prop_assert_eq!(&appointment.id, &instance.id);
                        prop_assert_eq!(*span_slots, grid.span_slots(catalog[service_id].duration()));
                    }
                    other => prop_assert!(false, "expected a start, got {:?}", other),
                }
            }
        }
    }
}
