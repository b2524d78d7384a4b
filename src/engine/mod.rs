mod launch_api;
mod place_api;
mod search_api;
mod session_api;

use std::sync::Mutex;
use tokio::sync::Mutex as AsyncMutex;

use crate::{
    api::API,
    catalog::{RandomSource, RngSource},
    config::Config,
    error::Error,
    external::google_maps::GoogleMaps,
    session::{DynSessionRepository, FileSessionRepository},
};

type DynRandomSource = Box<dyn RandomSource + Send>;

pub struct Engine {
    config: Config,
    rand: Mutex<DynRandomSource>,
    search_guard: AsyncMutex<()>,
    // Held across every read-modify-write of the stored session.
    session_guard: AsyncMutex<()>,
    sessions: DynSessionRepository,
    maps: GoogleMaps,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: Config) -> Self {
        let sessions = Box::new(FileSessionRepository::new(config.session_path.clone()));

        Self::with_sessions(config, sessions)
    }

    pub fn with_sessions(config: Config, sessions: DynSessionRepository) -> Self {
        let rand: DynRandomSource = match config.rng_seed {
            Some(seed) => Box::new(RngSource::seeded(seed)),
            None => Box::new(RngSource::from_entropy()),
        };

        Self {
            maps: GoogleMaps::new(config.google_maps.clone()),
            rand: Mutex::new(rand),
            search_guard: AsyncMutex::new(()),
            session_guard: AsyncMutex::new(()),
            sessions,
            config,
        }
    }

    pub fn with_random_source(self, rand: DynRandomSource) -> Self {
        Self {
            rand: Mutex::new(rand),
            ..self
        }
    }

    fn with_rand<T>(&self, f: impl FnOnce(&mut dyn RandomSource) -> T) -> Result<T, Error> {
        let mut rand = self.rand.lock().map_err(|_| Error::unexpected_error())?;

        Ok(f(&mut **rand))
    }
}

impl API for Engine {}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Engine;
    use crate::catalog::ConstantSource;
    use crate::config::{Config, GoogleMapsConfig};
    use crate::session::MemorySessionRepository;

    pub fn engine() -> Engine {
        Engine::with_sessions(Config::immediate(), Box::new(MemorySessionRepository::default()))
            .with_random_source(Box::new(ConstantSource(0.5)))
    }

    pub fn engine_with_maps(api_base: String) -> Engine {
        let config = Config {
            google_maps: GoogleMapsConfig {
                api_base,
                api_key: Some("test-key".into()),
            },
            ..Config::immediate()
        };

        Engine::with_sessions(config, Box::new(MemorySessionRepository::default()))
    }
}
