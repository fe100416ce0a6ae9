//! SM-2 (SuperMemo 2) style scheduling for flashcards.
//!
//! Each card carries an ease factor and an interval in days:
//! - The ease factor moves by the classic SM-2 delta computed from the grade weight
//!   and never drops below 1.3
//! - A failed recall (AGAIN) sends the interval back to 1 day
//! - The first passing recall from the initial step jumps to 6 days
//! - Later passing recalls multiply the interval by the new ease factor
//! - Intervals never exceed `MAX_INTERVAL` days

use super::{Flashcard, Grade};
use chrono::{DateTime, Duration, Utc};

pub const INITIAL_EASE_FACTOR: f64 = 2.5;
pub const MIN_EASE_FACTOR: f64 = 1.3;
pub const INITIAL_INTERVAL: u32 = 1;
pub const FIRST_SUCCESS_INTERVAL: u32 = 6;
/// Longest interval in days (about a century).
pub const MAX_INTERVAL: u32 = 36_500;
pub const MS_PER_DAY: i64 = 86_400_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduleUpdate {
    pub next_review: DateTime<Utc>,
    pub ease_factor: f64,
    pub interval: u32,
}

/// Calculates the card's next ease factor, interval and review time for `grade`.
pub fn compute_update(card: &Flashcard, grade: Grade, now: DateTime<Utc>) -> ScheduleUpdate {
    let weight = grade.weight();
    let ease = card.effective_ease_factor();
    let interval = card.effective_interval();

    let new_ease = (ease + (0.1 - (5.0 - weight) * (0.08 + (5.0 - weight) * 0.02)))
        .max(MIN_EASE_FACTOR);

    let new_interval = if weight < 0.5 {
        INITIAL_INTERVAL
    } else if interval == INITIAL_INTERVAL {
        FIRST_SUCCESS_INTERVAL
    } else {
        ((interval as f64 * new_ease).round() as u32).clamp(INITIAL_INTERVAL, MAX_INTERVAL)
    };

    let next_review = now
        .checked_add_signed(Duration::milliseconds(new_interval as i64 * MS_PER_DAY))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    ScheduleUpdate {
        next_review,
        ease_factor: new_ease,
        interval: new_interval,
    }
}

/// Returns `card` updated for one answer: schedule, `last_reviewed` and counters.
pub fn apply_outcome(
    card: &Flashcard,
    correct: bool,
    time_spent_ms: u64,
    now: DateTime<Utc>,
) -> Flashcard {
    let grade = Grade::from_performance(correct, time_spent_ms);
    let update = compute_update(card, grade, now);

    Flashcard {
        last_reviewed: Some(now),
        next_review: Some(update.next_review),
        ease_factor: update.ease_factor,
        interval: update.interval,
        review_count: card.review_count.saturating_add(1),
        correct_count: card.correct_count.saturating_add(u32::from(correct)),
        incorrect_count: card.incorrect_count.saturating_add(u32::from(!correct)),
        ..card.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn card_with(ease_factor: f64, interval: u32) -> Flashcard {
        let mut card = Flashcard::with_id("c1", "q", "a", now());
        card.ease_factor = ease_factor;
        card.interval = interval;
        card
    }

    #[test]
    fn test_again_resets_interval() {
        let next = compute_update(&card_with(2.5, 30), Grade::Again, now());
        assert_eq!(next.interval, 1);
        assert!((next.ease_factor - 1.7).abs() < 1e-9);
        assert_eq!(next.next_review, now() + Duration::days(1));
    }

    #[test]
    fn test_first_success_jumps_to_six_days() {
        for grade in [Grade::Hard, Grade::Good, Grade::Easy] {
            let next = compute_update(&card_with(2.5, 1), grade, now());
            assert_eq!(next.interval, 6);
            assert_eq!(next.next_review, now() + Duration::days(6));
        }
    }

    #[test]
    fn test_later_success_multiplies_by_new_ease() {
        let next = compute_update(&card_with(2.5, 6), Grade::Easy, now());
        let expected_ease = 2.5 + (0.1 - 3.7 * (0.08 + 3.7 * 0.02));
        assert!((next.ease_factor - expected_ease).abs() < 1e-9);
        assert_eq!(next.interval, (6.0 * expected_ease).round() as u32);
    }

    #[test]
    fn test_ef_floor() {
        let next = compute_update(&card_with(1.3, 6), Grade::Again, now());
        assert_eq!(next.ease_factor, MIN_EASE_FACTOR);
        assert_eq!(next.interval, 1);

        let next = compute_update(&card_with(1.3, 6), Grade::Good, now());
        assert_eq!(next.ease_factor, MIN_EASE_FACTOR);
        assert_eq!(next.interval, 8);
    }

    #[test]
    fn test_missing_state_uses_defaults() {
        let next = compute_update(&card_with(0.0, 0), Grade::Good, now());
        assert_eq!(next.interval, 6);
        assert!(next.ease_factor < INITIAL_EASE_FACTOR);
    }

    #[test]
    fn test_apply_outcome_incorrect_answer() {
        let card = Flashcard::with_id("c1", "q", "a", now());
        let reviewed = apply_outcome(&card, false, 3_000, now());

        assert_eq!(reviewed.interval, 1);
        assert!(reviewed.ease_factor < 2.5);
        assert_eq!(reviewed.incorrect_count, 1);
        assert_eq!(reviewed.correct_count, 0);
        assert_eq!(reviewed.review_count, 1);
        assert_eq!(reviewed.last_reviewed, Some(now()));
        assert_eq!(reviewed.question, card.question);
    }

    #[test]
    fn test_apply_outcome_good_answer_from_initial_step() {
        let card = card_with(2.5, 1);
        let reviewed = apply_outcome(&card, true, 5_000, now());

        assert_eq!(reviewed.interval, 6);
        assert_eq!(reviewed.correct_count, 1);
        assert_eq!(reviewed.incorrect_count, 0);
        assert_eq!(reviewed.next_review, Some(now() + Duration::days(6)));
    }

    #[test]
    fn test_huge_stored_interval_is_capped() {
        let reviewed = apply_outcome(&card_with(2.5, 200_000_000), true, 5_000, now());
        assert_eq!(reviewed.interval, MAX_INTERVAL);
        assert_eq!(
            reviewed.next_review,
            Some(now() + Duration::days(i64::from(MAX_INTERVAL)))
        );
    }

    #[test]
    fn test_long_streak_of_correct_answers() {
        let mut card = Flashcard::with_id("c1", "q", "a", now());
        for _ in 0..300 {
            card = apply_outcome(&card, true, 5_000, now());
        }
        assert_eq!(card.interval, MAX_INTERVAL);
        assert_eq!(card.correct_count, 300);
    }

    #[test]
    fn test_next_review_saturates_near_end_of_time() {
        let late = DateTime::<Utc>::MAX_UTC - Duration::days(10);
        let next = compute_update(&card_with(2.5, 6), Grade::Good, late);
        assert_eq!(next.next_review, DateTime::<Utc>::MAX_UTC);
    }

    fn any_grade() -> impl Strategy<Value = Grade> {
        prop::sample::select(Grade::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_ease_never_below_floor(ease in 0.0f64..5.0, interval in 0u32..400, grade in any_grade()) {
            let next = compute_update(&card_with(ease, interval), grade, now());
            prop_assert!(next.ease_factor >= MIN_EASE_FACTOR);
            prop_assert!(next.interval >= 1);
        }

        #[test]
        fn prop_interval_never_above_cap(interval in 0u32..=u32::MAX, grade in any_grade()) {
            let next = compute_update(&card_with(2.5, interval), grade, now());
            prop_assert!(next.interval <= MAX_INTERVAL);
        }

        #[test]
        fn prop_again_always_resets(ease in 1.3f64..5.0, interval in 1u32..400) {
            let next = compute_update(&card_with(ease, interval), Grade::Again, now());
            prop_assert_eq!(next.interval, 1);
        }

        #[test]
        fn prop_counts_never_decrease(correct in any::<bool>(), ms in 0u64..120_000, reviews in 0u32..50) {
            let mut card = card_with(2.5, 3);
            card.review_count = reviews;
            card.correct_count = reviews / 2;
            card.incorrect_count = reviews - reviews / 2;

            let next = apply_outcome(&card, correct, ms, now());
            prop_assert_eq!(next.review_count, card.review_count + 1);
            prop_assert_eq!(
                next.correct_count + next.incorrect_count,
                card.correct_count + card.incorrect_count + 1
            );
        }
    }
}
