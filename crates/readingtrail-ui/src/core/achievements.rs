//! Staggered presentation schedule for unlocked achievements.

use readingtrail_api_models::AchievementRecord;

/// Default gap between consecutive achievement modals.
pub const DEFAULT_STAGGER_MS: u32 = 500;

/// Achievement with its onset delay relative to the first one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledAchievement {
    /// Delay from the moment the batch arrived.
    pub delay_ms: u32,
    /// Record to present.
    pub record: AchievementRecord,
}

/// Spread records `interval_ms` apart, preserving order.
#[must_use]
pub fn stagger_schedule(
    records: Vec<AchievementRecord>,
    interval_ms: u32,
) -> Vec<ScheduledAchievement> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| ScheduledAchievement {
            delay_ms: u32::try_from(index)
                .unwrap_or(u32::MAX)
                .saturating_mul(interval_ms),
            record,
        })
        .collect()
}

/// Points line, for example `+10 điểm`.
#[must_use]
pub fn points_label(points: i64, unit: &str) -> String {
    format!("+{points} {unit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> AchievementRecord {
        AchievementRecord {
            icon: "fa-trophy".to_string(),
            name: name.to_string(),
            description: String::new(),
            points: 5,
        }
    }

    #[test]
    fn three_records_are_half_a_second_apart() {
        let schedule = stagger_schedule(
            vec![record("a"), record("b"), record("c")],
            DEFAULT_STAGGER_MS,
        );
        let delays: Vec<u32> = schedule.iter().map(|item| item.delay_ms).collect();
        assert_eq!(delays, vec![0, 500, 1_000]);
        assert_eq!(schedule[2].record.name, "c");
    }

    #[test]
    fn empty_batch_schedules_nothing() {
        assert!(stagger_schedule(Vec::new(), DEFAULT_STAGGER_MS).is_empty());
    }

    #[test]
    fn points_label_is_signed() {
        assert_eq!(points_label(10, "điểm"), "+10 điểm");
    }
}
