use {
    crate::{LOCAL_DOMAIN, MAILBOX, STORAGE_LOCATIONS, VALIDATORS},
    hyperlane_types::{mailbox::Domain, va::QueryMsg},
    ledger_types::{Addr, ImmutableCtx, Json, JsonSerExt, Order, StdResult},
};

pub fn query(ctx: ImmutableCtx, msg: QueryMsg) -> StdResult<Json> {
    match msg {
        QueryMsg::AnnouncedStorageLocations { validators } => {
            let res = query_announced_storage_locations(ctx, validators)?;
            res.to_json_value()
        },
        QueryMsg::AnnouncedValidators {} => {
            let res = query_announced_validators(ctx)?;
            res.to_json_value()
        },
        QueryMsg::Mailbox {} => {
            let res = query_mailbox(ctx)?;
            res.to_json_value()
        },
        QueryMsg::LocalDomain {} => {
            let res = query_local_domain(ctx)?;
            res.to_json_value()
        },
    }
}

/// One entry per input validator, in input order. A validator that never
/// announced gets an empty list.
pub fn query_announced_storage_locations(
    ctx: ImmutableCtx,
    validators: Vec<Addr>,
) -> StdResult<Vec<Vec<String>>> {
    validators
        .iter()
        .map(|validator| -> StdResult<_> {
            Ok(STORAGE_LOCATIONS
                .may_load(ctx.storage, validator)?
                .unwrap_or_default())
        })
        .collect()
}

pub fn query_announced_validators(ctx: ImmutableCtx) -> StdResult<Vec<Addr>> {
    VALIDATORS.values(ctx.storage, Order::Ascending).collect()
}

pub fn query_mailbox(ctx: ImmutableCtx) -> StdResult<Addr> {
    MAILBOX.load(ctx.storage)
}

pub fn query_local_domain(ctx: ImmutableCtx) -> StdResult<Domain> {
    LOCAL_DOMAIN.load(ctx.storage)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{NEXT_VALIDATOR_INDEX, create, execute::init_module},
        hyperlane_types::va::InstantiateMsg,
        ledger_types::{MockStorage, MutableCtx, ResultExt},
        serde_json::json,
    };

    // Writes the announcement state directly, bypassing signature checks.
    fn setup(announcements: &[(Addr, &str)]) -> MockStorage {
        let mut storage = MockStorage::new();
        let cap = init_module(&mut storage, Addr::mock(1)).unwrap();

        create(
            MutableCtx {
                storage: &mut storage,
                sender: Addr::mock(1),
            },
            &cap,
            InstantiateMsg {
                mailbox: Addr::mock(2),
                domain: 88888,
            },
        )
        .should_succeed();

        for (validator, location) in announcements {
            if !STORAGE_LOCATIONS.has(&storage, validator) {
                let (index, _) = NEXT_VALIDATOR_INDEX.increment(&mut storage).unwrap();
                VALIDATORS.save(&mut storage, &index, validator).unwrap();
            }

            STORAGE_LOCATIONS
                .may_update(&mut storage, validator, |maybe| -> StdResult<_> {
                    let mut locations = maybe.unwrap_or_default();
                    locations.push(location.to_string());
                    Ok(locations)
                })
                .unwrap();
        }

        storage
    }

    #[test]
    fn querying_validators_in_announcement_order() {
        // Addresses deliberately out of byte order.
        let storage = setup(&[
            (Addr::mock(9), "a"),
            (Addr::mock(3), "b"),
            (Addr::mock(9), "c"),
            (Addr::mock(5), "d"),
        ]);
        let ctx = ImmutableCtx { storage: &storage };

        query_announced_validators(ctx).should_succeed_and_equal(vec![
            Addr::mock(9),
            Addr::mock(3),
            Addr::mock(5),
        ]);
    }

    #[test]
    fn querying_storage_locations() {
        let storage = setup(&[(Addr::mock(9), "a"), (Addr::mock(3), "b"), (Addr::mock(9), "c")]);
        let ctx = ImmutableCtx { storage: &storage };

        query_announced_storage_locations(ctx, vec![
            Addr::mock(3),
            Addr::mock(7),
            Addr::mock(9),
            Addr::mock(3),
        ])
        .should_succeed_and_equal(vec![
            vec!["b".to_string()],
            vec![],
            vec!["a".to_string(), "c".to_string()],
            vec!["b".to_string()],
        ]);

        query_announced_storage_locations(ctx, vec![])
            .should_succeed_and_equal(Vec::<Vec<String>>::new());
    }

    #[test]
    fn querying_as_json() {
        let storage = setup(&[(Addr::mock(9), "a")]);
        let ctx = ImmutableCtx { storage: &storage };

        query(ctx, QueryMsg::Mailbox {})
            .should_succeed_and_equal(json!("0x0202020202020202020202020202020202020202"));
        query(ctx, QueryMsg::LocalDomain {}).should_succeed_and_equal(json!(88888));
        query(ctx, QueryMsg::AnnouncedValidators {})
            .should_succeed_and_equal(json!(["0x0909090909090909090909090909090909090909"]));
        query(ctx, QueryMsg::AnnouncedStorageLocations {
            validators: vec![Addr::mock(9), Addr::mock(1)],
        })
        .should_succeed_and_equal(json!([["a"], []]));
    }
}
