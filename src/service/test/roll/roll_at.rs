use super::*;

/// Tests a first roll that wins and triggers the low-stock announcement.
///
/// remaining=2, no prior chance, draw 0.005.
///
/// Expected: Won, remaining 1, announcement published, chance 1, cooldown now+24h
#[tokio::test]
async fn win_announces_low_stock() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_reward_state(fixture::reward_state(2, &[]))
        .build()
        .unwrap();
    let service = json_service(&test, 0.005);
    let notifier = RecordingNotifier::default();

    let outcome = service.roll_at(42, now()).await?;

    let RollOutcome::Won(result) = outcome else {
        panic!("expected a win, got {outcome:?}");
    };
    assert_eq!(result.giftcards_remaining, 1);
    assert_eq!(result.success_chance, 1);

    let announced = announce_giftcard_status(&notifier, result.giftcards_remaining).await;
    assert!(announced.is_some());
    assert_eq!(
        notifier.published(),
        vec![
            "@here there's only 1 Giftcard left, goodluck users! Try your luck by using command `/roll`"
                .to_string()
        ]
    );

    assert_eq!(
        test.read_json(fixture::STATE_FILE).unwrap(),
        Some(fixture::reward_state(1, &[(42, 1)]))
    );
    let ledger = JsonCooldownRepository::new(test.cooldowns_path()).load()?;
    assert_eq!(
        ledger.entry_at(42, now()),
        CooldownEntry::Active(now() + Duration::hours(24))
    );

    Ok(())
}

/// Tests a losing roll.
///
/// remaining=1, chance 50, draw 0.6.
///
/// Expected: Lost, chance 51, remaining 1
#[tokio::test]
async fn loss_raises_chance() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_reward_state(fixture::reward_state(1, &[(42, 50)]))
        .build()
        .unwrap();
    let service = json_service(&test, 0.6);

    let outcome = service.roll_at(42, now()).await?;

    let RollOutcome::Lost(result) = outcome else {
        panic!("expected a loss, got {outcome:?}");
    };
    assert_eq!(result.success_chance, 51);
    assert_eq!(result.fail_chance, 49);
    assert_eq!(result.giftcards_remaining, 1);
    assert_eq!(
        test.read_json(fixture::STATE_FILE).unwrap(),
        Some(fixture::reward_state(1, &[(42, 51)]))
    );

    Ok(())
}

/// Tests rolling after the last giftcard was claimed.
///
/// Expected: EventEnded, no document written or created
#[tokio::test]
async fn ended_event_writes_nothing() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_reward_state(fixture::reward_state(0, &[(42, 12)]))
        .build()
        .unwrap();
    let modified_before = test.modified(fixture::STATE_FILE);
    let service = json_service(&test, 0.0);

    assert_eq!(service.roll_at(42, now()).await?, RollOutcome::EventEnded);

    assert_eq!(test.modified(fixture::STATE_FILE), modified_before);
    assert_eq!(
        test.read_json(fixture::STATE_FILE).unwrap(),
        Some(fixture::reward_state(0, &[(42, 12)]))
    );
    assert!(!test.cooldowns_path().exists());

    Ok(())
}

/// Tests rolling while on cooldown.
///
/// Expected: OnCooldown(3600s), neither document touched
#[tokio::test]
async fn cooldown_blocks_without_touching_state() -> Result<(), StorageError> {
    let mut ledger = crate::model::cooldown::CooldownLedger::new();
    ledger.set_expiry(42, now() + Duration::hours(1));
    let store = GiftcardStore {
        rewards: InMemoryRewardRepository::new(RewardState::new(2)),
        cooldowns: InMemoryCooldownRepository::new(ledger),
    };
    let service = RollService::new(store, Arc::new(FixedDraw(0.0)), RollSettings::default());

    let outcome = service.roll_at(42, now()).await?;

    assert_eq!(
        outcome,
        RollOutcome::OnCooldown {
            retry_after: Duration::seconds(3600)
        }
    );
    service
        .with_store(|store| {
            assert_eq!(store.rewards.saves(), 0);
            assert_eq!(store.cooldowns.saves(), 0);
        })
        .await;

    Ok(())
}

/// Tests that repeated early attempts do not move the stored expiry.
///
/// Expected: remaining wait shrinks with time and expiry is unchanged
#[tokio::test]
async fn repeated_early_attempts_keep_stored_expiry() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_reward_state(fixture::reward_state(2, &[]))
        .build()
        .unwrap();
    let service = json_service(&test, 0.9);

    service.roll_at(42, now()).await?;
    let expiry_before = JsonCooldownRepository::new(test.cooldowns_path())
        .load()?
        .raw_expiry(42)
        .map(str::to_string);

    let first = service.roll_at(42, now() + Duration::hours(1)).await?;
    let second = service.roll_at(42, now() + Duration::hours(2)).await?;

    assert_eq!(
        first,
        RollOutcome::OnCooldown {
            retry_after: Duration::hours(23)
        }
    );
    assert_eq!(
        second,
        RollOutcome::OnCooldown {
            retry_after: Duration::hours(22)
        }
    );
    let expiry_after = JsonCooldownRepository::new(test.cooldowns_path())
        .load()?
        .raw_expiry(42)
        .map(str::to_string);
    assert_eq!(expiry_before, expiry_after);

    Ok(())
}

/// Tests that a malformed cooldown entry lets the user roll.
///
/// Expected: attempt runs and a fresh expiry replaces the malformed value
#[tokio::test]
async fn malformed_cooldown_allows_roll() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_cooldowns(fixture::cooldowns(&[(42, "not-a-date")]))
        .build()
        .unwrap();
    let service = json_service(&test, 0.9);

    let outcome = service.roll_at(42, now()).await?;

    assert!(matches!(outcome, RollOutcome::Lost(_)));
    let ledger = JsonCooldownRepository::new(test.cooldowns_path()).load()?;
    assert_eq!(
        ledger.entry_at(42, now()),
        CooldownEntry::Active(now() + Duration::hours(24))
    );

    Ok(())
}

/// Tests rolling once the cooldown has lapsed.
///
/// Expected: second attempt runs 24h later and raises the chance again
#[tokio::test]
async fn roll_allowed_after_cooldown_expires() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().unwrap();
    let service = json_service(&test, 0.9);

    service.roll_at(42, now()).await?;
    let outcome = service.roll_at(42, now() + Duration::hours(24)).await?;

    let RollOutcome::Lost(result) = outcome else {
        panic!("expected a loss, got {outcome:?}");
    };
    assert_eq!(result.success_chance, 3);
    let state = JsonRewardRepository::new(test.state_path(), 2).load()?;
    assert_eq!(state.success_chance(42), 3);

    Ok(())
}

/// Tests the scheduled cleanup entry point.
///
/// Expected: expired entries removed under the roll lock
#[tokio::test]
async fn garbage_collect_purges_expired_entries() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_cooldowns(fixture::cooldowns(&[
            (1, "2000-01-01T00:00:00+00:00"),
            (2, "3000-01-01T00:00:00+00:00"),
        ]))
        .build()
        .unwrap();
    let service = json_service(&test, 0.9);

    let report = service.garbage_collect().await?;

    assert_eq!(report.expired, vec![1]);
    assert_eq!(
        test.read_json(fixture::COOLDOWN_FILE).unwrap(),
        Some(fixture::cooldowns(&[(2, "3000-01-01T00:00:00+00:00")]))
    );

    Ok(())
}

/// Tests an ended event whose document holds one unreadable chance.
///
/// Expected: EventEnded, stock stays at 0
#[tokio::test]
async fn bad_chance_entry_does_not_reopen_event() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_reward_state(serde_json::json!({
            "giftcards_remaining": 0,
            "user_chances": { "42": 5, "43": 7.5, "44": "lots" }
        }))
        .build()
        .unwrap();
    let service = json_service(&test, 0.0);

    assert_eq!(service.roll_at(42, now()).await?, RollOutcome::EventEnded);
    assert_eq!(service.roll_at(99, now()).await?, RollOutcome::EventEnded);

    let state = JsonRewardRepository::new(test.state_path(), 2).load()?;
    assert_eq!(state.giftcards_remaining, 0);

    Ok(())
}

/// Tests a ledger where another user's entry is unreadable.
///
/// Expected: the user on cooldown stays denied; the unreadable entry's owner may roll
#[tokio::test]
async fn bad_cooldown_entry_keeps_other_users_on_cooldown() -> Result<(), StorageError> {
    let expiry = fixture::timestamp(now() + Duration::hours(23));
    let test = TestBuilder::new()
        .with_raw_cooldowns(&format!(
            r#"{{"123": "{expiry}", "456": 17, "U": "not-a-date"}}"#
        ))
        .build()
        .unwrap();
    let service = json_service(&test, 0.9);

    assert_eq!(
        service.roll_at(123, now()).await?,
        RollOutcome::OnCooldown {
            retry_after: Duration::hours(23)
        }
    );
    assert!(matches!(
        service.roll_at(456, now()).await?,
        RollOutcome::Lost(_)
    ));
    assert_eq!(
        service.roll_at(123, now() + Duration::hours(1)).await?,
        RollOutcome::OnCooldown {
            retry_after: Duration::hours(22)
        }
    );

    Ok(())
}
