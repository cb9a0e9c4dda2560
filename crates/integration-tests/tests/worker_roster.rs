//! Worker roster persistence tests.
//!
//! These run against a live `PostgreSQL` instance; `#[sqlx::test]` provisions
//! a fresh database from the API crate's migrations for each case, so the
//! partial unique index on active relations is exercised for real.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use sqlx::PgPool;

use brewbox_api::db::{RepositoryError, UserRepository, WorkerRelationRepository};
use brewbox_api::error::AppError;
use brewbox_api::services::CoffeeShopService;
use brewbox_core::{CoffeeShopId, Role, UserId};

async fn seed_user(pool: &PgPool, login: &str) -> UserId {
    UserRepository::new(pool)
        .create(Some(login), Some(login), None, Role::Member)
        .await
        .expect("user inserts")
        .id
}

async fn seed_shop(pool: &PgPool, creator_id: UserId) -> CoffeeShopId {
    CoffeeShopService::new(pool)
        .create(creator_id, "Roastery", "1 Bean St", None, None, None)
        .await
        .expect("shop creates")
        .id
}

// ===== Creation =====

#[sqlx::test(migrations = "../api/migrations")]
async fn test_creator_is_enrolled_with_the_shop(pool: PgPool) {
    let creator = seed_user(&pool, "owner").await;
    let shop_id = seed_shop(&pool, creator).await;

    let relation = WorkerRelationRepository::new(&pool)
        .get_active(creator, shop_id)
        .await
        .expect("lookup succeeds")
        .expect("creator has an active relation");

    assert_eq!(relation.worker_id, creator);
    assert_eq!(relation.coffee_shop_id, shop_id);
}

// ===== Active uniqueness =====

#[sqlx::test(migrations = "../api/migrations")]
async fn test_duplicate_active_add_is_rejected_as_conflict(pool: PgPool) {
    let creator = seed_user(&pool, "owner").await;
    let shop_id = seed_shop(&pool, creator).await;
    let worker = seed_user(&pool, "barista").await;

    let repo = WorkerRelationRepository::new(&pool);
    repo.create(worker, shop_id).await.expect("first add");

    let err = repo
        .create(worker, shop_id)
        .await
        .expect_err("second add hits the unique index");

    assert!(matches!(err, RepositoryError::Conflict(_)));
    assert_eq!(
        AppError::from(err).into_response().status(),
        StatusCode::CONFLICT
    );
}

#[sqlx::test(migrations = "../api/migrations")]
async fn test_readd_after_removal_creates_a_fresh_relation(pool: PgPool) {
    let creator = seed_user(&pool, "owner").await;
    let shop_id = seed_shop(&pool, creator).await;
    let worker = seed_user(&pool, "barista").await;

    let repo = WorkerRelationRepository::new(&pool);
    let first = repo.create(worker, shop_id).await.expect("first add");

    repo.soft_delete(first.id).await.expect("removal succeeds");

    let second = repo.create(worker, shop_id).await.expect("re-add succeeds");
    assert_ne!(second.id, first.id);

    let active = repo
        .get_active(worker, shop_id)
        .await
        .expect("lookup succeeds")
        .expect("re-added relation is active");
    assert_eq!(active.id, second.id);
}

#[sqlx::test(migrations = "../api/migrations")]
async fn test_same_worker_in_two_shops_is_allowed(pool: PgPool) {
    let creator = seed_user(&pool, "owner").await;
    let first_shop = seed_shop(&pool, creator).await;
    let second_shop = seed_shop(&pool, creator).await;
    let worker = seed_user(&pool, "barista").await;

    let repo = WorkerRelationRepository::new(&pool);
    repo.create(worker, first_shop).await.expect("first shop");
    repo.create(worker, second_shop).await.expect("second shop");
}
