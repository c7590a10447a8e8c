//! Connect-on-first-use handle
//!
//! Stores open their connection the first time a request needs it. Concurrent
//! first requests wait on a single initializer; a failed attempt is not
//! remembered, so the next request tries again.

use std::future::Future;

use tokio::sync::OnceCell;

pub struct LazyConnection<T> {
    label: &'static str,
    cell: OnceCell<T>,
}

impl<T> LazyConnection<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            cell: OnceCell::new(),
        }
    }

    /// Return the connection, running `connect` if none is established yet
    pub async fn get_or_connect<F, Fut, E>(&self, connect: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        self.cell
            .get_or_try_init(|| async {
                tracing::info!("Connecting to {} store...", self.label);
                match connect().await {
                    Ok(conn) => {
                        tracing::info!("{} store connection established", self.label);
                        Ok(conn)
                    }
                    Err(e) => {
                        tracing::error!("Failed to connect to {} store: {}", self.label, e);
                        Err(e)
                    }
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_concurrent_first_use_connects_once() {
        let lazy = Arc::new(LazyConnection::<usize>::new("test"));
        let attempts = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let lazy = lazy.clone();
            let attempts = attempts.clone();
            handles.push(tokio::spawn(async move {
                let conn = lazy
                    .get_or_connect(|| async {
                        let n = attempts.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(20)).await;
                        Ok::<_, String>(n + 100)
                    })
                    .await
                    .unwrap();
                *conn
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap(), 100);
        }
        assert_eq!(attempts.load(Ordering::SeqCst), 1);

        // Later callers get the stored connection without reconnecting
        let conn = lazy
            .get_or_connect(|| async { Err::<usize, _>("unreachable".to_string()) })
            .await
            .unwrap();
        assert_eq!(*conn, 100);
    }

    #[tokio::test]
    async fn test_failed_connect_is_retried() {
        let lazy = LazyConnection::<&'static str>::new("test");

        let first = lazy
            .get_or_connect(|| async { Err::<&'static str, _>("refused".to_string()) })
            .await;
        assert_eq!(first.unwrap_err(), "refused");

        let second = lazy
            .get_or_connect(|| async { Ok::<_, String>("up") })
            .await
            .unwrap();
        assert_eq!(*second, "up");
    }
}
