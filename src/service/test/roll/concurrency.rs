use super::*;

/// Tests many users rolling concurrently against the same documents.
///
/// Without the store lock, interleaved load/mutate/save cycles would drop updates.
///
/// Expected: every user's chance and cooldown recorded
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_rolls_lose_no_updates() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().unwrap();
    let service = json_service(&test, 0.99);

    let handles: Vec<_> = (1..=25u64)
        .map(|user| {
            let service = service.clone();
            tokio::spawn(async move { service.roll(user).await })
        })
        .collect();

    for handle in handles {
        let outcome = handle.await.expect("roll task panicked")?;
        assert!(matches!(outcome, RollOutcome::Lost(_)));
    }

    let state = JsonRewardRepository::new(test.state_path(), 2).load()?;
    let ledger = JsonCooldownRepository::new(test.cooldowns_path()).load()?;

    assert_eq!(state.user_chances.len(), 25);
    assert!(state.user_chances.values().all(|chance| *chance == 2));
    assert_eq!(ledger.len(), 25);

    Ok(())
}
