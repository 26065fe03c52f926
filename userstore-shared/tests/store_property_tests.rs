//! Property tests for the in-memory user store
//!
//! Random operation sequences are replayed against the store and a plain
//! `BTreeMap` model; the two must agree after every step.

use std::collections::{BTreeMap, HashSet};
use std::thread;

use proptest::prelude::*;
use userstore_shared::models::user::{NewUser, UserChanges};
use userstore_shared::store::{InMemoryUserStore, StoreError, UserStore};

#[derive(Debug, Clone)]
enum Op {
    Create,
    Update(u64),
    Delete(u64),
    Get(u64),
}

fn arb_op() -> impl Strategy<Value = Op> {
    // Target ids range a little past what a sequence can create so that
    // never-issued ids get exercised too.
    prop_oneof![
        3 => Just(Op::Create),
        2 => (1u64..40).prop_map(Op::Update),
        2 => (1u64..40).prop_map(Op::Delete),
        1 => (1u64..40).prop_map(Op::Get),
    ]
}

proptest! {
    /// Ids are issued 1, 2, 3, ... regardless of interleaved deletes, and the
    /// store's contents always match the model.
    #[test]
    fn prop_store_matches_model(ops in proptest::collection::vec(arb_op(), 1..60)) {
        let store = InMemoryUserStore::new();
        let mut model: BTreeMap<u64, (String, String)> = BTreeMap::new();
        let mut issued: Vec<u64> = Vec::new();

        for (step, op) in ops.into_iter().enumerate() {
            match op {
                Op::Create => {
                    let user = store.create(NewUser::new(
                        format!("u{step}"),
                        format!("u{step}@example.com"),
                    ));
                    prop_assert_eq!(user.id, issued.len() as u64 + 1);
                    prop_assert_eq!(user.created_at, user.updated_at);
                    issued.push(user.id);
                    model.insert(user.id, (user.username, user.email));
                }
                Op::Update(id) => {
                    let changes = UserChanges::new(format!("n{step}"), format!("n{step}@example.com"));
                    match store.update(id, changes.clone()) {
                        Ok(user) => {
                            prop_assert!(model.contains_key(&id));
                            prop_assert_eq!(user.id, id);
                            prop_assert!(user.created_at <= user.updated_at);
                            model.insert(id, (changes.username, changes.email));
                        }
                        Err(e) => {
                            prop_assert!(!model.contains_key(&id));
                            prop_assert_eq!(e, StoreError::NotFound(id));
                        }
                    }
                }
                Op::Delete(id) => {
                    let removed = model.remove(&id).is_some();
                    match store.delete(id) {
                        Ok(()) => prop_assert!(removed),
                        Err(e) => {
                            prop_assert!(!removed);
                            prop_assert_eq!(e, StoreError::NotFound(id));
                        }
                    }
                }
                Op::Get(id) => {
                    match store.get_by_id(id) {
                        Ok(user) => {
                            let (username, email) = model.get(&id).cloned().unwrap_or_default();
                            prop_assert_eq!(user.username, username);
                            prop_assert_eq!(user.email, email);
                        }
                        Err(e) => {
                            prop_assert!(!model.contains_key(&id));
                            prop_assert_eq!(e, StoreError::NotFound(id));
                        }
                    }
                }
            }

            let mut listed: Vec<u64> = store.list_all().into_iter().map(|u| u.id).collect();
            listed.sort_unstable();
            let expected: Vec<u64> = model.keys().copied().collect();
            prop_assert_eq!(listed, expected);
        }

        let distinct: HashSet<u64> = issued.iter().copied().collect();
        prop_assert_eq!(distinct.len(), issued.len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// K concurrent creates yield exactly K records with ids 1..=K.
    #[test]
    fn prop_concurrent_creates_are_unique(k in 100usize..400, threads in 2usize..16) {
        let store = InMemoryUserStore::new();

        let ids: Vec<u64> = thread::scope(|s| {
            let handles: Vec<_> = (0..threads)
                .map(|t| {
                    let store = &store;
                    s.spawn(move || {
                        (t..k)
                            .step_by(threads)
                            .map(|i| store.create(NewUser::new(format!("u{i}"), "u@example.com")).id)
                            .collect::<Vec<u64>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        prop_assert_eq!(ids.len(), k);
        let distinct: HashSet<u64> = ids.into_iter().collect();
        prop_assert_eq!(distinct, (1..=k as u64).collect::<HashSet<u64>>());
        prop_assert_eq!(store.count(), k);
    }
}
