//! Integration tests for toggles, streaks and statistics through the
//! registry.

use chrono::{Days, NaiveDate};
use habitroom_core::{
    weekly_completion_rate, CompletionState, Config, FixedClock, HabitRegistry, MemoryStore,
};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
}

fn ago(n: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(n)).unwrap()
}

fn config() -> Config {
    let mut config = Config::default();
    config.tracking.seed_defaults = false;
    config
}

fn registry(kv: &MemoryStore) -> HabitRegistry<&MemoryStore, FixedClock> {
    HabitRegistry::open(kv, FixedClock(today()), &config()).unwrap()
}

/// Toggle `id` on `date` until it reaches `state`.
fn mark(reg: &mut HabitRegistry<&MemoryStore, FixedClock>, id: &str, date: NaiveDate, state: CompletionState) {
    while reg.get(id).unwrap().entries().get(date) != state {
        reg.toggle_completion(id, date).unwrap();
    }
}

#[test]
fn three_consecutive_done_days() {
    let kv = MemoryStore::new();
    let mut reg = registry(&kv);
    let id = reg.add("Run").unwrap().unwrap().id().to_string();
    for n in [2, 1, 0] {
        mark(&mut reg, &id, ago(n), CompletionState::Done);
    }
    assert_eq!(reg.get(&id).unwrap().streak(), 3);
}

#[test]
fn unset_yesterday_caps_streak_at_one() {
    let kv = MemoryStore::new();
    let mut reg = registry(&kv);
    let id = reg.add("Run").unwrap().unwrap().id().to_string();
    mark(&mut reg, &id, ago(3), CompletionState::Done);
    mark(&mut reg, &id, ago(2), CompletionState::Done);
    mark(&mut reg, &id, today(), CompletionState::Done);
    assert_eq!(reg.get(&id).unwrap().streak(), 1);
}

#[test]
fn unset_today_yields_zero() {
    let kv = MemoryStore::new();
    let mut reg = registry(&kv);
    let id = reg.add("Run").unwrap().unwrap().id().to_string();
    mark(&mut reg, &id, ago(1), CompletionState::Done);
    assert_eq!(reg.get(&id).unwrap().streak(), 0);
}

#[test]
fn partial_days_count_toward_streak() {
    let kv = MemoryStore::new();
    let mut reg = registry(&kv);
    let id = reg.add("Run").unwrap().unwrap().id().to_string();
    mark(&mut reg, &id, ago(2), CompletionState::Partial);
    mark(&mut reg, &id, ago(1), CompletionState::Done);
    mark(&mut reg, &id, today(), CompletionState::Partial);
    let habit = reg.get(&id).unwrap();
    assert_eq!(habit.streak(), 3);
    assert_eq!(habit.best_streak(), 3);
}

#[test]
fn weekly_rate_with_done_and_partial() {
    let kv = MemoryStore::new();
    let mut reg = registry(&kv);
    let id = reg.add("Run").unwrap().unwrap().id().to_string();
    mark(&mut reg, &id, today(), CompletionState::Done);
    mark(&mut reg, &id, ago(1), CompletionState::Partial);
    let habit = reg.get(&id).unwrap();
    assert_eq!(weekly_completion_rate(habit.entries(), today()), 21);
    assert_eq!(reg.stats(7)[0].rate_label(), "21%");
}

#[test]
fn blank_add_leaves_registry_unchanged() {
    let kv = MemoryStore::new();
    let mut reg = registry(&kv);
    assert!(reg.add("  ").unwrap().is_none());
    assert_eq!(reg.len(), 0);

    let habit = reg.add("Run").unwrap().unwrap();
    assert_eq!((habit.streak(), habit.best_streak()), (0, 0));
    assert_eq!(reg.len(), 1);
}

#[test]
fn best_streak_survives_a_broken_streak() {
    let kv = MemoryStore::new();
    let mut reg = registry(&kv);
    let id = reg.add("Run").unwrap().unwrap().id().to_string();
    for n in [3, 2, 1, 0] {
        mark(&mut reg, &id, ago(n), CompletionState::Done);
    }
    assert_eq!(reg.get(&id).unwrap().best_streak(), 4);

    mark(&mut reg, &id, ago(1), CompletionState::Unset);
    let habit = reg.get(&id).unwrap();
    assert_eq!(habit.streak(), 1);
    assert_eq!(habit.best_streak(), 4);
}

#[derive(Debug, Clone)]
enum Op {
    Add,
    Toggle { habit: usize, days_ago: u64 },
    Rename { habit: usize },
    Delete { habit: usize },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::Add),
        8 => (0usize..4, 0u64..12).prop_map(|(habit, days_ago)| Op::Toggle { habit, days_ago }),
        1 => (0usize..4).prop_map(|habit| Op::Rename { habit }),
        1 => (0usize..4).prop_map(|habit| Op::Delete { habit }),
    ]
}

proptest! {
    #[test]
    fn streak_invariants_hold_across_operations(ops in prop::collection::vec(arb_op(), 1..80)) {
        let kv = MemoryStore::new();
        let mut reg = registry(&kv);
        reg.add("first").unwrap();

        for op in ops {
            let before: Vec<(String, u32)> = reg
                .habits()
                .iter()
                .map(|h| (h.id().to_string(), h.best_streak()))
                .collect();
            let pick = |i: usize| before.get(i % before.len().max(1)).map(|(id, _)| id.clone());

            match op {
                Op::Add => {
                    reg.add("another").unwrap();
                }
                Op::Toggle { habit, days_ago } => {
                    if let Some(id) = pick(habit) {
                        reg.toggle_completion(&id, ago(days_ago)).unwrap();
                    }
                }
                Op::Rename { habit } => {
                    if let Some(id) = pick(habit) {
                        reg.rename(&id, "renamed").unwrap();
                    }
                }
                Op::Delete { habit } => {
                    if let Some(id) = pick(habit) {
                        reg.delete(&id).unwrap();
                    }
                }
            }

            for habit in reg.habits() {
                prop_assert!(habit.best_streak() >= habit.streak());
                prop_assert!(habit.entries().iter().all(|(d, _)| d <= today()));
                if let Some((_, old_best)) = before.iter().find(|(id, _)| id == habit.id()) {
                    prop_assert!(habit.best_streak() >= *old_best);
                }
            }
        }
    }

    #[test]
    fn three_toggles_restore_unset(days_ago in 0u64..365) {
        let kv = MemoryStore::new();
        let mut reg = registry(&kv);
        let id = reg.add("cycle").unwrap().unwrap().id().to_string();
        let date = ago(days_ago);
        let states: Vec<_> = (0..3)
            .map(|_| reg.toggle_completion(&id, date).unwrap().unwrap())
            .collect();
        prop_assert_eq!(
            states,
            vec![CompletionState::Done, CompletionState::Partial, CompletionState::Unset]
        );
        prop_assert!(reg.get(&id).unwrap().entries().is_empty());
    }
}
