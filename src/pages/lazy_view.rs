use std::{io, path::PathBuf, sync::Arc, time::Duration};

use async_trait::async_trait;
use thiserror::Error;
use tokio::{sync::OnceCell, time::timeout};
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ViewLoadError {
    #[error("failed to read view {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: io::Error,
    },

    #[error("loading view {location} timed out after {after:?}")]
    Timeout { location: String, after: Duration },
}

/// Where a lazily loaded view's markup comes from.
#[async_trait]
pub trait ViewSource: Send + Sync {
    fn location(&self) -> String;

    async fn read(&self) -> io::Result<String>;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        FileSource { path }
    }
}

#[async_trait]
impl ViewSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn read(&self) -> io::Result<String> {
        tokio::fs::read_to_string(&self.path).await
    }
}

/// A page template fetched on first use.
///
/// Concurrent callers share one in-flight load. A failed load leaves the cell
/// empty so the next navigation tries again.
#[derive(Clone)]
pub struct LazyView {
    source: Arc<dyn ViewSource>,
    load_timeout: Duration,
    cell: Arc<OnceCell<Arc<str>>>,
}

impl LazyView {
    pub fn new(source: Arc<dyn ViewSource>, load_timeout: Duration) -> Self {
        LazyView {
            source,
            load_timeout,
            cell: Arc::new(OnceCell::new()),
        }
    }

    pub fn from_file(path: PathBuf, load_timeout: Duration) -> Self {
        Self::new(Arc::new(FileSource::new(path)), load_timeout)
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    pub async fn get(&self) -> Result<Arc<str>, ViewLoadError> {
        self.cell
            .get_or_try_init(|| self.load())
            .await
            .map(Arc::clone)
    }

    async fn load(&self) -> Result<Arc<str>, ViewLoadError> {
        let location = self.source.location();
        info!("Loading view {}", location);

        let result = match timeout(self.load_timeout, self.source.read()).await {
            Ok(Ok(contents)) => Ok(Arc::from(contents)),
            Ok(Err(source)) => Err(ViewLoadError::Io { location, source }),
            Err(_) => Err(ViewLoadError::Timeout {
                location,
                after: self.load_timeout,
            }),
        };

        if let Err(ref e) = result {
            error!("{}", e);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    const MARKUP: &str = "<main>{{page_state}}</main>";

    fn assets_path(file: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join(file)
    }

    /// Counts reads. With `stall_first`, the first read never completes.
    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
        stall_first: bool,
        delay: Duration,
    }

    impl CountingSource {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ViewSource for CountingSource {
        fn location(&self) -> String {
            "memory".to_string()
        }

        async fn read(&self) -> io::Result<String> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.stall_first && call == 0 {
                std::future::pending::<()>().await;
            }
            tokio::time::sleep(self.delay).await;
            Ok(MARKUP.to_string())
        }
    }

    #[tokio::test]
    async fn loads_on_first_get_only() {
        let view = LazyView::from_file(assets_path("location-update.html"), Duration::from_secs(5));
        assert!(!view.is_loaded());

        let first = view.get().await.unwrap();
        assert!(view.is_loaded());
        assert!(first.contains("{{page_state}}"));

        let second = view.get().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn concurrent_gets_share_one_read() {
        let source = Arc::new(CountingSource {
            delay: Duration::from_millis(20),
            ..Default::default()
        });
        let view = LazyView::new(source.clone(), Duration::from_secs(5));
        let other = view.clone();

        let (a, b, c) = tokio::join!(view.get(), other.get(), view.get());

        let a = a.unwrap();
        assert!(Arc::ptr_eq(&a, &b.unwrap()));
        assert!(Arc::ptr_eq(&a, &c.unwrap()));
        assert_eq!(source.calls(), 1);
        assert!(other.is_loaded());
    }

    #[tokio::test]
    async fn timed_out_load_is_retried() {
        let source = Arc::new(CountingSource {
            stall_first: true,
            ..Default::default()
        });
        let view = LazyView::new(source.clone(), Duration::from_millis(50));

        let err = view.get().await.unwrap_err();
        assert!(matches!(err, ViewLoadError::Timeout { .. }));
        assert!(!view.is_loaded());

        let markup = view.get().await.unwrap();
        assert_eq!(&*markup, MARKUP);
        assert!(view.is_loaded());
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn failed_load_is_not_cached() {
        let view = LazyView::from_file(assets_path("missing.html"), Duration::from_secs(5));

        let err = view.get().await.unwrap_err();
        assert!(matches!(err, ViewLoadError::Io { .. }));
        assert!(err.to_string().contains("missing.html"));
        assert!(!view.is_loaded());

        assert!(view.get().await.is_err());
    }
}
