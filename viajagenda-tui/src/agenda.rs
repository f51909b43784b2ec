use std::cmp::Ordering;
use std::collections::BTreeMap;

use time::Date;

use crate::locale::{day_label, month_label, parse_iso_date};
use crate::types::Activity;

/// All activities of one calendar month, days in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    pub label: String,
    pub first_day: Date,
    pub days: Vec<DayGroup>,
}

/// All activities of one calendar day, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub label: String,
    pub date: Date,
    pub activities: Vec<Activity>,
}

/// Display order inside a day: priority descending, then start time
/// ascending. A missing start time compares as the empty string.
pub fn compare_within_day(a: &Activity, b: &Activity) -> Ordering {
    b.sort_priority().cmp(&a.sort_priority()).then_with(|| {
        a.start_time
            .as_deref()
            .unwrap_or("")
            .cmp(b.start_time.as_deref().unwrap_or(""))
    })
}

/// Group activities into months and days for the agenda.
///
/// Activities without a parseable `yyyy-MM-dd` date are left out. Buckets are
/// keyed by calendar date, so two months or days never merge just because
/// their labels read alike.
pub fn group_by_month_and_day(activities: &[Activity]) -> Vec<MonthGroup> {
    let mut months: BTreeMap<Date, BTreeMap<Date, Vec<Activity>>> = BTreeMap::new();

    for activity in activities {
        let Some(date) = activity.date.as_deref().and_then(parse_iso_date) else {
            continue;
        };
        let first_day = date.replace_day(1).unwrap_or(date);
        months
            .entry(first_day)
            .or_default()
            .entry(date)
            .or_default()
            .push(activity.clone());
    }

    months
        .into_iter()
        .map(|(first_day, days)| MonthGroup {
            label: month_label(first_day),
            first_day,
            days: days
                .into_iter()
                .map(|(date, mut activities)| {
                    activities.sort_by(compare_within_day);
                    DayGroup {
                        label: day_label(date),
                        date,
                        activities,
                    }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Status};
    use time::macros::date;

    fn activity(id: i64, date: Option<&str>, priority: Option<i64>, start: Option<&str>) -> Activity {
        Activity {
            id,
            title: format!("Atividade {id}"),
            image: None,
            description: "descrição".to_string(),
            location_url: None,
            date: date.map(str::to_string),
            start_time: start.map(str::to_string),
            end_time: None,
            estimated_cost: None,
            category: Some(Category::Passeio),
            priority,
            status: Status::Pendente,
        }
    }

    fn ids(day: &DayGroup) -> Vec<i64> {
        day.activities.iter().map(|a| a.id).collect()
    }

    #[test]
    fn groups_march_example() {
        let input = vec![
            activity(1, Some("2024-03-05"), Some(3), Some("09:00")),
            activity(2, Some("2024-03-05"), Some(5), Some("08:00")),
            activity(3, Some("2024-03-01"), Some(1), None),
        ];

        let groups = group_by_month_and_day(&input);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "março de 2024");
        assert_eq!(groups[0].first_day, date!(2024 - 03 - 01));

        let days = &groups[0].days;
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, date!(2024 - 03 - 01));
        assert_eq!(days[0].label, "sexta-feira, 1 de março");
        assert_eq!(days[1].date, date!(2024 - 03 - 05));
        assert_eq!(ids(&days[1]), vec![2, 1]);
    }

    #[test]
    fn drops_activities_without_valid_date() {
        let input = vec![
            activity(1, None, Some(1), None),
            activity(2, Some(""), Some(1), None),
            activity(3, Some("2024-02-31"), Some(1), None),
            activity(4, Some("não sei"), Some(1), None),
            activity(5, Some("2024-06-10"), Some(1), None),
        ];

        let groups = group_by_month_and_day(&input);
        let all: Vec<i64> = groups
            .iter()
            .flat_map(|m| m.days.iter())
            .flat_map(|d| d.activities.iter().map(|a| a.id))
            .collect();
        assert_eq!(all, vec![5]);
    }

    #[test]
    fn every_dated_activity_lands_in_its_own_month_and_day() {
        let input = vec![
            activity(1, Some("2025-01-15"), Some(2), None),
            activity(2, Some("2024-12-31"), Some(2), None),
            activity(3, Some("2025-01-02"), Some(2), None),
            activity(4, Some("2025-01-15"), Some(4), None),
        ];

        let groups = group_by_month_and_day(&input);
        let mut seen = 0;
        for month in &groups {
            for day in &month.days {
                assert_eq!(day.date.replace_day(1).unwrap(), month.first_day);
                for a in &day.activities {
                    assert_eq!(parse_iso_date(a.date.as_deref().unwrap()), Some(day.date));
                    seen += 1;
                }
            }
        }
        assert_eq!(seen, input.len());
    }

    #[test]
    fn months_and_days_are_chronological() {
        let input = vec![
            activity(1, Some("2025-02-03"), Some(1), None),
            activity(2, Some("2024-11-20"), Some(1), None),
            activity(3, Some("2025-02-01"), Some(1), None),
            activity(4, Some("2024-11-02"), Some(1), None),
        ];

        let groups = group_by_month_and_day(&input);
        let months: Vec<Date> = groups.iter().map(|m| m.first_day).collect();
        assert_eq!(months, vec![date!(2024 - 11 - 01), date!(2025 - 02 - 01)]);
        for month in &groups {
            assert!(month.days.windows(2).all(|w| w[0].date <= w[1].date));
        }
    }

    #[test]
    fn same_day_in_different_years_does_not_merge() {
        let input = vec![
            activity(1, Some("2024-03-05"), Some(1), None),
            activity(2, Some("2025-03-05"), Some(1), None),
        ];

        let groups = group_by_month_and_day(&input);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "março de 2024");
        assert_eq!(groups[1].label, "março de 2025");
    }

    #[test]
    fn orders_by_priority_then_start_time() {
        let input = vec![
            activity(1, Some("2024-07-01"), Some(2), Some("14:00:00")),
            activity(2, Some("2024-07-01"), Some(2), None),
            activity(3, Some("2024-07-01"), None, Some("07:00:00")),
            activity(4, Some("2024-07-01"), Some(5), Some("20:00:00")),
            activity(5, Some("2024-07-01"), Some(2), Some("09:30:00")),
        ];

        let groups = group_by_month_and_day(&input);
        let day = &groups[0].days[0];
        assert_eq!(ids(day), vec![4, 2, 5, 1, 3]);

        for pair in day.activities.windows(2) {
            let (x, y) = (&pair[0], &pair[1]);
            assert!(x.sort_priority() >= y.sort_priority());
            if x.sort_priority() == y.sort_priority() {
                assert!(x.start_time.as_deref().unwrap_or("") <= y.start_time.as_deref().unwrap_or(""));
            }
        }
    }

    #[test]
    fn unknown_priority_is_not_rewritten() {
        let input = vec![activity(1, Some("2024-07-01"), None, None)];
        let groups = group_by_month_and_day(&input);
        assert_eq!(groups[0].days[0].activities[0].priority, None);
    }

    #[test]
    fn empty_input_gives_empty_agenda() {
        assert!(group_by_month_and_day(&[]).is_empty());
    }
}
