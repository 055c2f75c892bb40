use super::*;

/// Tests that save writes the documented JSON shape.
///
/// Expected: Ok with string user keys and integer values
#[test]
fn writes_document_shape() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().unwrap();
    let repo = JsonRewardRepository::new(test.state_path(), 2);

    let mut state = RewardState::new(2);
    state.set_success_chance(123, 4);
    repo.save(&state)?;

    assert_eq!(
        test.read_json(fixture::STATE_FILE).unwrap(),
        Some(fixture::reward_state(2, &[(123, 4)]))
    );

    Ok(())
}

/// Tests that saving a loaded state preserves every recognized field.
///
/// Expected: Ok with identical state after reload
#[test]
fn save_of_load_preserves_values() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_reward_state(fixture::reward_state(1, &[(42, 50), (43, 100), (44, 0)]))
        .build()
        .unwrap();
    let repo = JsonRewardRepository::new(test.state_path(), 2);

    let before = repo.load()?;
    repo.save(&before)?;
    let after = repo.load()?;

    assert_eq!(before, after);

    Ok(())
}

/// Tests that saving over a corrupted document replaces it.
///
/// Expected: Ok with valid document on disk
#[test]
fn replaces_corrupted_document() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_raw_reward_state("garbage")
        .build()
        .unwrap();
    let repo = JsonRewardRepository::new(test.state_path(), 2);

    let mut state = repo.load()?;
    state.claim_giftcard();
    repo.save(&state)?;

    assert_eq!(
        test.read_json(fixture::STATE_FILE).unwrap(),
        Some(fixture::reward_state(1, &[]))
    );

    Ok(())
}
