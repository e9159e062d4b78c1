use chrono::{Local, NaiveDate, Utc};

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The local calendar date at the moment of invocation. The
    /// reminder batch derives its today/tomorrow window from this.
    fn local_date(&self) -> NaiveDate;
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn local_date(&self) -> NaiveDate {
        Local::now().naive_local().date()
    }

    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
