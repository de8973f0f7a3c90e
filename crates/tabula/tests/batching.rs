mod support;
use support::{point_row, points, sqlite_db, sqlite_db_with, Point};

use pretty_assertions::assert_eq;
use tabula::{stmt, Db};

fn rows_in(sql: &str) -> usize {
    sql.matches("),(").count() + 1
}

async fn all_points(db: &mut Db) -> Vec<Point> {
    let mut dest = vec![];
    db.select(
        stmt::select(&point_row(), "t1", &mut dest).order_by(stmt::order_by("x", stmt::Order::Asc)),
    )
    .await
    .unwrap();
    dest
}

#[tokio::test]
async fn bulk_insert_is_split_into_batches() {
    let (mut db, log) = sqlite_db();
    let row = point_row();
    db.create_table(&stmt::create(&row, "t1")).await.unwrap();
    log.clear();

    let values = points(0..650);
    assert_eq!(db.insert(&stmt::insert(&row, "t1", &values)).await.unwrap(), 650);

    let statements = log.statements();
    assert_eq!(statements.len(), 5);
    assert_eq!(statements[0], "BEGIN;");
    assert_eq!(
        statements[1..4].iter().map(|sql| rows_in(sql)).collect::<Vec<_>>(),
        [300, 300, 50]
    );
    assert!(statements[1].starts_with("INSERT INTO t1 (x,y) VALUES (0,0.000000),(1,0.500000)"));
    assert!(statements[3].ends_with("(649,324.500000);"));
    assert_eq!(statements[4], "COMMIT;");

    assert_eq!(all_points(&mut db).await, values);
}

#[tokio::test]
async fn batch_size_is_configurable() {
    let (mut db, log) = sqlite_db_with(Db::builder().max_writes(100));
    assert_eq!(db.max_writes(), 100);

    let row = point_row();
    db.create_table(&stmt::create(&row, "t1")).await.unwrap();
    log.clear();

    db.insert(&stmt::insert(&row, "t1", &points(0..250))).await.unwrap();

    let statements = log.statements();
    assert_eq!(
        statements[1..statements.len() - 1]
            .iter()
            .map(|sql| rows_in(sql))
            .collect::<Vec<_>>(),
        [100, 100, 50]
    );
}

#[tokio::test]
async fn batch_size_is_at_least_one() {
    let (db, _) = sqlite_db_with(Db::builder().max_writes(0));
    assert_eq!(db.max_writes(), 1);

    let (db, _) = sqlite_db();
    assert_eq!(db.max_writes(), 300);
}

#[tokio::test]
async fn empty_insert_sends_nothing() {
    let (mut db, log) = sqlite_db();
    let row = point_row();

    assert_eq!(db.insert(&stmt::insert(&row, "t1", &[])).await.unwrap(), 0);
    assert_eq!(db.upsert(&stmt::upsert(&row, "t1", &[])).await.unwrap(), 0);
    assert!(log.is_empty());
}

#[tokio::test]
async fn failed_batch_rolls_back_every_batch() {
    let (mut db, log) = sqlite_db_with(Db::builder().max_writes(2));
    let row = point_row();
    db.create_table(&stmt::create(&row, "t1")).await.unwrap();
    log.clear();

    // The third batch repeats a primary key of the first
    let mut values = points(0..4);
    values.push(Point { x: 1, y: 9.0 });

    let err = db.insert(&stmt::insert(&row, "t1", &values)).await.unwrap_err();
    assert!(err.is_execute(), "{err}");

    let statements = log.statements();
    assert_eq!(statements.len(), 5);
    assert_eq!(statements[0], "BEGIN;");
    assert_eq!(statements[4], "ROLLBACK;");
    assert_eq!(db.transaction_depth(), 0);

    assert_eq!(all_points(&mut db).await, vec![]);
}

#[tokio::test]
async fn bulk_insert_inside_transaction_uses_savepoint() {
    let (mut db, log) = sqlite_db();
    let row = point_row();
    db.create_table(&stmt::create(&row, "t1")).await.unwrap();
    log.clear();

    db.start_transaction().await.unwrap();
    db.insert(&stmt::insert(&row, "t1", &points(0..3))).await.unwrap();
    db.commit().await.unwrap();

    assert_eq!(
        log.statements(),
        [
            "BEGIN;",
            "SAVEPOINT sp_1;",
            "INSERT INTO t1 (x,y) VALUES (0,0.000000),(1,0.500000),(2,1.000000);",
            "RELEASE SAVEPOINT sp_1;",
            "COMMIT;",
        ]
    );
}
