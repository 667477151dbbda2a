use TrackerLibrary::management::utils::run_guard::RunGuard;

//The guard covers a single process-wide slot, so its lifecycle is
//exercised in one test to keep the assertions ordered.
#[test]
fn only_one_guard_exists_at_a_time() {
    let guard = RunGuard::acquire().expect("first acquisition must succeed");
    assert!(RunGuard::acquire().is_none());
    drop(guard);
    let guard = RunGuard::acquire().expect("slot must be free again after release");
    drop(guard);
}
