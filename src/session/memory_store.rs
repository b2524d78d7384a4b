use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::entities::StoredSession;
use crate::error::Error;
use crate::session::SessionRepository;

#[derive(Debug, Default)]
pub struct MemorySessionRepository {
    session: Mutex<StoredSession>,
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn get(&self) -> Result<StoredSession, Error> {
        Ok(self.session.lock().await.clone())
    }

    async fn set(&self, session: &StoredSession) -> Result<(), Error> {
        *self.session.lock().await = session.clone();
        Ok(())
    }

    async fn clear(&self) -> Result<(), Error> {
        *self.session.lock().await = StoredSession::default();
        Ok(())
    }
}
