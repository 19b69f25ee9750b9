//! Tests for the ladder service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{MockLadderRepository, MockUserRepository};
use crate::domain::{ErrorCode, LadderNumber, UserAccount, UserId};
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};

#[fixture]
fn caller() -> Email {
    Email::new("ada@example.com").expect("valid email")
}

fn ladder(id: i32, number: i32) -> Ladder {
    Ladder {
        id: LadderId::new(id).expect("positive id"),
        number: LadderNumber::new(number).expect("positive number"),
        name: format!("Ladder {number}"),
        end_date: Utc
            .with_ymd_and_hms(2025, 12, 31, 23, 59, 59)
            .single()
            .expect("valid timestamp"),
        is_active: true,
    }
}

fn account(email: &Email) -> UserAccount {
    UserAccount {
        id: UserId::random(),
        email: email.clone(),
        name: Some("Ada".to_owned()),
        ladder_id: None,
        partner_id: None,
    }
}

fn make_service(
    users: MockUserRepository,
    ladders: MockLadderRepository,
) -> LadderService<MockUserRepository, MockLadderRepository> {
    LadderService::new(Arc::new(users), Arc::new(ladders))
}

#[rstest]
#[tokio::test]
async fn list_combines_current_and_active_ladders(caller: Email) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_current_ladder()
        .times(1)
        .return_once(|_| Ok(Some(ladder(2, 2))));
    let mut ladders = MockLadderRepository::new();
    ladders
        .expect_list_active()
        .times(1)
        .return_once(|| Ok(vec![ladder(1, 1), ladder(2, 2)]));

    let overview = make_service(users, ladders)
        .list_ladders(&caller)
        .await
        .expect("overview");

    assert_eq!(overview.current_ladder.map(|l| l.id.get()), Some(2));
    assert_eq!(overview.all_ladders.len(), 2);
}

#[rstest]
#[tokio::test]
async fn list_without_current_ladder_leaves_it_empty(caller: Email) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_current_ladder()
        .return_once(|_| Ok(None));
    let mut ladders = MockLadderRepository::new();
    ladders.expect_list_active().return_once(|| Ok(Vec::new()));

    let overview = make_service(users, ladders)
        .list_ladders(&caller)
        .await
        .expect("overview");

    assert!(overview.current_ladder.is_none());
    assert!(overview.all_ladders.is_empty());
}

#[rstest]
#[tokio::test]
async fn list_maps_store_failures_to_internal(caller: Email) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_current_ladder()
        .return_once(|_| Ok(None));
    let mut ladders = MockLadderRepository::new();
    ladders
        .expect_list_active()
        .return_once(|| Err(LadderRepositoryError::connection("refused")));

    let err = make_service(users, ladders)
        .list_ladders(&caller)
        .await
        .expect_err("store failure");
    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn join_assigns_the_caller(caller: Email) {
    let me = account(&caller);
    let my_id = me.id;
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .return_once(move |_| Ok(Some(me)));
    users
        .expect_assign_ladder()
        .withf(move |user, ladder| *user == my_id && ladder.get() == 3)
        .times(1)
        .return_once(|_, _| Ok(()));
    let mut ladders = MockLadderRepository::new();
    ladders
        .expect_find_active()
        .return_once(|_| Ok(Some(ladder(3, 3))));

    let joined = make_service(users, ladders)
        .join_ladder(&caller, LadderId::new(3).expect("positive id"))
        .await
        .expect("joined");
    assert_eq!(joined.number.get(), 3);
}

#[rstest]
#[tokio::test]
async fn join_unknown_or_inactive_ladder_is_not_found(caller: Email) {
    let me = account(&caller);
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_email()
        .return_once(move |_| Ok(Some(me)));
    users.expect_assign_ladder().times(0);
    let mut ladders = MockLadderRepository::new();
    ladders.expect_find_active().return_once(|_| Ok(None));

    let err = make_service(users, ladders)
        .join_ladder(&caller, LadderId::new(7).expect("positive id"))
        .await
        .expect_err("missing ladder");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn join_for_missing_caller_is_not_found(caller: Email) {
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().return_once(|_| Ok(None));
    let mut ladders = MockLadderRepository::new();
    ladders.expect_find_active().times(0);

    let err = make_service(users, ladders)
        .join_ladder(&caller, LadderId::new(1).expect("positive id"))
        .await
        .expect_err("missing caller");
    assert_eq!(err.code(), ErrorCode::NotFound);
}
