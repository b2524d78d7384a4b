use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::entities::StoredSession;
use crate::error::Error;
use crate::session::SessionRepository;

/// Keeps the session as one JSON blob on disk.
#[derive(Debug)]
pub struct FileSessionRepository {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl FileSessionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        staging.into()
    }
}

#[async_trait]
impl SessionRepository for FileSessionRepository {
    #[tracing::instrument(skip(self))]
    async fn get(&self) -> Result<StoredSession, Error> {
        match fs::read_to_string(&self.path).await {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(StoredSession::default()),
            Err(err) => Err(err.into()),
        }
    }

    #[tracing::instrument(skip(self, session))]
    async fn set(&self, session: &StoredSession) -> Result<(), Error> {
        let data = serde_json::to_vec_pretty(session)?;

        let _guard = self.write_guard.lock().await;
        let staging = self.staging_path();
        fs::write(&staging, data).await?;
        fs::rename(&staging, &self.path).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn clear(&self) -> Result<(), Error> {
        let _guard = self.write_guard.lock().await;

        match fs::remove_file(&self.path).await {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}
