use super::*;

/// Tests a first-time user winning on a low draw.
///
/// Expected: Completed win, stock decremented, chance reset to 1, 24h cooldown stored
#[test]
fn first_roll_wins_on_low_draw() -> Result<(), StorageError> {
    let rewards = InMemoryRewardRepository::new(state(2, &[]));
    let cooldowns = InMemoryCooldownRepository::default();
    let draw = FixedDraw(0.005);
    let engine = RewardService::new(&rewards, &cooldowns, &draw, Duration::hours(24));

    let outcome = engine.attempt_at(42, now())?;

    let AttemptOutcome::Completed(result) = outcome else {
        panic!("expected a completed attempt, got {outcome:?}");
    };
    assert!(result.won);
    assert_eq!(result.giftcards_remaining, 1);
    assert_eq!(result.success_chance, 1);
    assert_eq!(result.fail_chance, 99);

    let stored = rewards.snapshot();
    assert_eq!(stored.giftcards_remaining, 1);
    assert_eq!(stored.user_chances.get(&42), Some(&1));
    assert_eq!(
        cooldowns.snapshot().entry_at(42, now()),
        CooldownEntry::Active(now() + Duration::hours(24))
    );

    Ok(())
}

/// Tests a loss raising the user's chance by one point.
///
/// Expected: Completed loss, chance 50 -> 51, stock unchanged, cooldown renewed
#[test]
fn loss_raises_chance() -> Result<(), StorageError> {
    let rewards = InMemoryRewardRepository::new(state(1, &[(42, 50)]));
    let cooldowns = InMemoryCooldownRepository::default();
    let draw = FixedDraw(0.6);
    let engine = RewardService::new(&rewards, &cooldowns, &draw, Duration::hours(24));

    let outcome = engine.attempt_at(42, now())?;

    let AttemptOutcome::Completed(result) = outcome else {
        panic!("expected a completed attempt, got {outcome:?}");
    };
    assert!(!result.won);
    assert_eq!(result.giftcards_remaining, 1);
    assert_eq!(result.success_chance, 51);
    assert_eq!(result.fail_chance, 49);
    assert_eq!(rewards.snapshot().user_chances.get(&42), Some(&51));
    assert_eq!(cooldowns.saves(), 1);

    Ok(())
}

/// Tests that the chance never exceeds 100.
///
/// Expected: a 100% user always wins; a 99% user losing is capped at 100
#[test]
fn chance_is_capped_at_one_hundred() -> Result<(), StorageError> {
    let rewards = InMemoryRewardRepository::new(state(5, &[(1, 100), (2, 99)]));
    let cooldowns = InMemoryCooldownRepository::default();
    let draw = FixedDraw(0.999);
    let engine = RewardService::new(&rewards, &cooldowns, &draw, Duration::hours(24));

    let AttemptOutcome::Completed(first) = engine.attempt_at(1, now())? else {
        panic!("expected a completed attempt");
    };
    let AttemptOutcome::Completed(second) = engine.attempt_at(2, now())? else {
        panic!("expected a completed attempt");
    };

    assert!(first.won);
    assert!(!second.won);
    assert_eq!(second.success_chance, 100);
    assert_eq!(second.fail_chance, 0);

    Ok(())
}

/// Tests that an ended event short-circuits without drawing or writing.
///
/// Expected: EventEnded, no saves to either repository
#[test]
fn ended_event_mutates_nothing() -> Result<(), StorageError> {
    let rewards = InMemoryRewardRepository::new(state(0, &[(42, 30)]));
    let cooldowns = InMemoryCooldownRepository::default();
    let draw = FixedDraw(0.0);
    let engine = RewardService::new(&rewards, &cooldowns, &draw, Duration::hours(24));

    assert_eq!(engine.attempt_at(42, now())?, AttemptOutcome::EventEnded);
    assert_eq!(rewards.saves(), 0);
    assert_eq!(cooldowns.saves(), 0);
    assert_eq!(rewards.snapshot(), state(0, &[(42, 30)]));

    Ok(())
}

/// Tests that the stock only ever decreases and stops at zero.
///
/// Expected: remaining 3 -> 2 -> 1 -> 0, then EventEnded for every later attempt
#[test]
fn stock_is_monotonic_and_terminal() -> Result<(), StorageError> {
    let rewards = InMemoryRewardRepository::new(state(3, &[]));
    let cooldowns = InMemoryCooldownRepository::default();
    let draw = SequenceDraw::new(&[0.9, 0.0, 0.5, 0.0, 0.0, 0.0]);
    let engine = RewardService::new(&rewards, &cooldowns, &draw, Duration::hours(24));

    let mut previous = rewards.snapshot().giftcards_remaining;
    for user in 1..=10u64 {
        let outcome = engine.attempt_at(user, now())?;
        let remaining = rewards.snapshot().giftcards_remaining;

        assert!(remaining <= previous);
        if previous == 0 {
            assert_eq!(outcome, AttemptOutcome::EventEnded);
        }
        previous = remaining;
    }

    assert_eq!(previous, 0);

    Ok(())
}

/// Tests a zero-chance user stored on disk.
///
/// Expected: a positive draw loses and raises the chance to 1
#[test]
fn zero_chance_user_loses_on_positive_draw() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_reward_state(fixture::reward_state(2, &[(42, 0)]))
        .build()
        .unwrap();
    let rewards = JsonRewardRepository::new(test.state_path(), 2);
    let cooldowns = JsonCooldownRepository::new(test.cooldowns_path());
    let draw = FixedDraw(0.000_001);
    let engine = RewardService::new(&rewards, &cooldowns, &draw, Duration::hours(24));

    let AttemptOutcome::Completed(result) = engine.attempt_at(42, now())? else {
        panic!("expected a completed attempt");
    };

    assert!(!result.won);
    assert_eq!(result.success_chance, 1);
    assert_eq!(
        test.read_json(fixture::STATE_FILE).unwrap(),
        Some(fixture::reward_state(2, &[(42, 1)]))
    );

    Ok(())
}
