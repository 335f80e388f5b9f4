use chrono::NaiveDateTime;

/// Scalar kinds accepted by [`QueryBuilder::bind_join`](super::QueryBuilder::bind_join).
///
/// Each element writes its own string form into the joined buffer. Dates
/// serialize as their whole epoch-second count, matching the stored integer
/// form used for timestamp comparisons.
pub trait JoinValue {
    fn push_joined(&self, out: &mut String);
}

impl JoinValue for char {
    fn push_joined(&self, out: &mut String) {
        out.push(*self);
    }
}

impl JoinValue for i64 {
    fn push_joined(&self, out: &mut String) {
        out.push_str(&self.to_string());
    }
}

impl JoinValue for f64 {
    fn push_joined(&self, out: &mut String) {
        out.push_str(&self.to_string());
    }
}

impl JoinValue for String {
    fn push_joined(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl JoinValue for &str {
    fn push_joined(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl JoinValue for NaiveDateTime {
    fn push_joined(&self, out: &mut String) {
        out.push_str(&self.and_utc().timestamp().to_string());
    }
}
