use std::time::{Duration, Instant};

use cipherlite::{DbError, Engine, EngineOptions, Location, Query, Value};

fn memory_engine() -> Engine {
    Engine::open(EngineOptions::new(Location::Memory, "test-key")).expect("open in-memory engine")
}

#[test]
fn invalid_sql_fails_with_the_offending_text() {
    let engine = memory_engine();

    let err = engine.execute(&Query::from("SELEC 1")).unwrap_err();
    match err {
        DbError::InvalidQuery { query, message } => {
            assert_eq!(query, "SELEC 1");
            assert!(!message.is_empty());
        }
        other => panic!("expected InvalidQuery, got {other:?}"),
    }

    let err = engine.execute_raw("SELEC 1").unwrap_err();
    assert!(matches!(err, DbError::InvalidQuery { ref query, .. } if query == "SELEC 1"));
}

#[test]
fn invalid_sql_with_parameters_fails_at_prepare() {
    let engine = memory_engine();

    let q = Query::builder()
        .push("SELEC ")
        .bind(1_i64)
        .build();
    let err = engine.fetch(&q, |row| row.int(0), |_| {}).unwrap_err();
    assert!(matches!(err, DbError::InvalidQuery { .. }));
}

#[test]
fn surplus_parameters_fail_as_unknown() {
    let engine = memory_engine();

    // One placeholder, two values: the second bind is out of range.
    let q = Query::new("SELECT ?", vec![Value::Int(1), Value::Int(2)]);
    let err = engine.fetch_one(&q, |row| row.int(0)).unwrap_err();
    assert!(matches!(err, DbError::Unknown(_)));
}

#[test]
fn zero_rows_means_zero_consumer_calls() -> Result<(), Box<dyn std::error::Error>> {
    let engine = memory_engine();
    engine.execute_raw("CREATE TABLE empty (n INTEGER)")?;

    let q = Query::builder()
        .push("SELECT n FROM empty WHERE n = ")
        .bind(42_i64)
        .build();

    let mut calls = 0;
    engine.fetch(&q, |row| row.int(0), |_| calls += 1)?;
    assert_eq!(calls, 0);

    assert!(engine.fetch_one(&q, |row| row.int(0))?.is_none());
    Ok(())
}

#[test]
fn failing_calls_leak_no_statement_handles() -> Result<(), Box<dyn std::error::Error>> {
    let engine = memory_engine();
    engine.execute_raw("CREATE TABLE t (n INTEGER)")?;

    for _ in 0..200 {
        // Prepare failure.
        assert!(engine.execute(&Query::from("SELEC 1")).is_err());
        // Mid-binding failure after a successful prepare.
        let q = Query::new("SELECT ?", vec![Value::Int(1), Value::Int(2)]);
        assert!(engine.fetch_one(&q, |row| row.int(0)).is_err());
    }

    // The connection stays usable; nothing holds the schema or handles open.
    engine.execute(&Query::from("INSERT INTO t VALUES (1)"))?;
    engine.execute_raw("DROP TABLE t")?;
    Ok(())
}

#[test]
fn adapter_errors_propagate() -> Result<(), Box<dyn std::error::Error>> {
    let engine = memory_engine();
    engine.execute_raw("CREATE TABLE t (s TEXT)")?;
    engine.execute(&Query::from("INSERT INTO t VALUES ('abc')"))?;

    // Reading text as a strict integer fails inside the adapter.
    let err = engine
        .fetch_one(&Query::from("SELECT s FROM t"), |row| row.blob(0))
        .unwrap_err();
    assert!(matches!(err, DbError::Unknown(_)));
    Ok(())
}

#[test]
fn configured_delay_blocks_before_the_operation() -> Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::open(
        EngineOptions::new(Location::Memory, "test-key").delay(Duration::from_millis(50)),
    )?;

    let started = Instant::now();
    engine.execute_raw("SELECT 1")?;
    assert!(started.elapsed() >= Duration::from_millis(50));
    Ok(())
}

#[test]
fn close_surfaces_no_error_on_a_healthy_engine() -> Result<(), Box<dyn std::error::Error>> {
    let engine = memory_engine();
    engine.execute_raw("CREATE TABLE t (n INTEGER)")?;
    engine.close()?;
    Ok(())
}
