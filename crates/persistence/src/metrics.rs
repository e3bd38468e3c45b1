//! Database metrics collection.

use metrics::{counter, gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

/// Record how long a named query took.
pub fn record_query_duration(query_name: &str, duration_secs: f64) {
    histogram!(
        "database_query_duration_seconds",
        "query" => query_name.to_string()
    )
    .record(duration_secs);
}

/// Count a query that returned an error.
pub fn record_query_error(query_name: &str) {
    counter!(
        "database_query_errors_total",
        "query" => query_name.to_string()
    )
    .increment(1);
}

/// Record connection pool usage.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();
    let active = size.saturating_sub(idle);

    gauge!("database_connections_active").set(active as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(size as f64);
}

/// Record the number of rows currently stored in a table.
pub fn record_table_rows(table: &str, rows: i64) {
    gauge!("database_table_rows", "table" => table.to_string()).set(rows as f64);
}

/// Times one repository query.
///
/// ```ignore
/// let timer = QueryTimer::new("find_post_by_id");
/// let result = sqlx::query_as::<_, PostEntity>(...).fetch_optional(&pool).await;
/// timer.finish(&result);
/// result
/// ```
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration, and an error count if the query failed.
    pub fn finish<T>(self, result: &Result<T, sqlx::Error>) {
        record_query_duration(self.query_name, self.start.elapsed().as_secs_f64());
        if let Err(err) = result {
            record_query_error(self.query_name);
            tracing::debug!(query = self.query_name, error = %err, "query failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_timer_keeps_name() {
        let timer = QueryTimer::new("count_users");
        assert_eq!(timer.query_name, "count_users");
    }

    #[test]
    fn test_query_timer_finish_without_recorder() {
        // With no recorder installed the metrics macros are no-ops.
        let ok: Result<i64, sqlx::Error> = Ok(1);
        QueryTimer::new("ok_query").finish(&ok);

        let err: Result<i64, sqlx::Error> = Err(sqlx::Error::RowNotFound);
        QueryTimer::new("failing_query").finish(&err);
    }
}
