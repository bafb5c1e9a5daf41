//! Fake extraction backend
//!
//! Writes a (sparse) file of the configured size instead of running yt-dlp.

#![allow(dead_code)]

use std::fs::File;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use audiodrop::download::{DownloadError, DownloadOutput, DownloadRequest, MediaSource};

#[derive(Debug, Clone)]
pub enum FakeBehavior {
    /// Produce a file of `size` bytes titled `title`
    Produce { size: u64, title: String },
    /// Fail with a yt-dlp style message
    Fail(String),
}

pub struct FakeSource {
    dir: PathBuf,
    behavior: FakeBehavior,
    calls: AtomicUsize,
    requests: Mutex<Vec<DownloadRequest>>,
}

impl FakeSource {
    pub fn new(dir: impl Into<PathBuf>, behavior: FakeBehavior) -> Self {
        Self {
            dir: dir.into(),
            behavior,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn producing(dir: impl Into<PathBuf>, size: u64, title: &str) -> Self {
        Self::new(
            dir,
            FakeBehavior::Produce {
                size,
                title: title.to_string(),
            },
        )
    }

    pub fn failing(dir: impl Into<PathBuf>, message: &str) -> Self {
        Self::new(dir, FakeBehavior::Fail(message.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<DownloadRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaSource for FakeSource {
    fn name(&self) -> &str {
        "fake"
    }

    async fn fetch(&self, request: &DownloadRequest) -> Result<DownloadOutput, DownloadError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        match &self.behavior {
            FakeBehavior::Produce { size, title } => {
                let file_path = self.dir.join(format!("media{}.m4a", n));
                let file = File::create(&file_path).map_err(|e| DownloadError::FileNotFound(e.to_string()))?;
                file.set_len(*size).map_err(|e| DownloadError::FileNotFound(e.to_string()))?;
                Ok(DownloadOutput {
                    file_path,
                    title: title.clone(),
                })
            }
            FakeBehavior::Fail(message) => Err(DownloadError::YtDlp(message.clone())),
        }
    }
}
