mod file_store;
mod memory_store;

use async_trait::async_trait;

use crate::entities::StoredSession;
use crate::error::Error;

pub use file_store::FileSessionRepository;
pub use memory_store::MemorySessionRepository;

/// Device-local persistence for the session token, email and profile.
#[async_trait]
pub trait SessionRepository {
    /// Returns an empty session when nothing has been stored yet.
    async fn get(&self) -> Result<StoredSession, Error>;
    async fn set(&self, session: &StoredSession) -> Result<(), Error>;
    async fn clear(&self) -> Result<(), Error>;
}

pub type DynSessionRepository = Box<dyn SessionRepository + Send + Sync>;
