use chrono::DateTime;
use cipherlite::{Query, Value};

fn placeholder_count(text: &str) -> usize {
    text.matches('?').count()
}

#[test]
fn placeholder_count_matches_parameter_count() {
    let q = Query::builder()
        .push("INSERT INTO t (a, b, c) VALUES (")
        .bind(1_i64)
        .push(", ")
        .bind("two")
        .push(", ")
        .bind(3.0_f64)
        .push(")")
        .build();

    assert_eq!(q.text(), "INSERT INTO t (a, b, c) VALUES (?, ?, ?)");
    assert_eq!(placeholder_count(q.text()), q.params().len());
}

#[test]
fn parameter_order_is_left_to_right() {
    let q = Query::builder()
        .push("SELECT * FROM t WHERE a = ")
        .bind(10_i64)
        .push(" AND b = ")
        .bind("middle")
        .push(" AND c = ")
        .bind(true)
        .build();

    assert_eq!(
        q.params(),
        &[
            Value::Int(10),
            Value::Text("middle".to_string()),
            Value::Bool(true),
        ]
    );
}

#[test]
fn literal_query_has_no_parameters() {
    let q = Query::from("PRAGMA user_version");
    assert!(!q.has_params());
    assert_eq!(q.text(), "PRAGMA user_version");
}

#[test]
fn caller_text_only_travels_through_parameters() {
    let hostile = "x'; DROP TABLE player; --";
    let q = Query::builder()
        .push("SELECT * FROM player WHERE name = ")
        .bind(hostile)
        .build();

    assert!(!q.text().contains(hostile));
    assert_eq!(q.params()[0].as_text(), Some(hostile));
}

#[test]
fn enums_bind_by_their_raw_integer() {
    enum Suit {
        Clubs = 2,
    }

    impl From<Suit> for i64 {
        fn from(suit: Suit) -> i64 {
            suit as i64
        }
    }

    let q = Query::builder()
        .push("SELECT ")
        .bind_enum(Suit::Clubs)
        .build();
    assert_eq!(q.params(), &[Value::Int(2)]);
}

#[test]
fn join_binds_one_text_parameter() {
    let q = Query::builder()
        .push("SELECT ")
        .bind_join(&[1_i64, 2, 3], "")
        .build();

    assert_eq!(q.text(), "SELECT ?");
    assert_eq!(q.params(), &[Value::Text("123".to_string())]);
}

#[test]
fn join_honours_the_separator() {
    let q = Query::builder()
        .push("SELECT ")
        .bind_join(&["a".to_string(), "b".to_string(), "c".to_string()], ", ")
        .build();

    assert_eq!(q.params(), &[Value::Text("a, b, c".to_string())]);
}

#[test]
fn join_accepts_every_scalar_kind() {
    let chars = Query::builder().bind_join(&['x', 'y'], "").build();
    assert_eq!(chars.params()[0].as_text(), Some("xy"));

    let floats = Query::builder().bind_join(&[1.5_f64, 2.5], ",").build();
    assert_eq!(floats.params()[0].as_text(), Some("1.5,2.5"));

    let strs = Query::builder().bind_join(&["a", "b"], "").build();
    assert_eq!(strs.params()[0].as_text(), Some("ab"));

    let dt = DateTime::from_timestamp(1_700_000_000, 0).unwrap().naive_utc();
    let dates = Query::builder().bind_join(&[dt, dt], ",").build();
    assert_eq!(
        dates.params()[0].as_text(),
        Some("1700000000,1700000000")
    );
}

#[test]
fn optional_values_bind_null() {
    let q = Query::builder()
        .push("INSERT INTO t VALUES (")
        .bind(Option::<i64>::None)
        .push(")")
        .build();
    assert!(q.params()[0].is_null());
}
