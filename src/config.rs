use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::Error;

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub session_path: PathBuf,
    pub search_latency: Duration,
    pub sign_in_latency: Duration,
    pub launch_timeout: Duration,
    pub rng_seed: Option<u64>,
    pub google_maps: GoogleMapsConfig,
}

#[derive(Clone, Debug)]
pub struct GoogleMapsConfig {
    pub api_base: String,
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            session_path: PathBuf::from("ridecompare-session.json"),
            search_latency: Duration::from_millis(2000),
            sign_in_latency: Duration::from_millis(500),
            launch_timeout: Duration::from_millis(3000),
            rng_seed: None,
            google_maps: GoogleMapsConfig::default(),
        }
    }
}

impl Default for GoogleMapsConfig {
    fn default() -> Self {
        Self {
            api_base: "https://maps.googleapis.com".into(),
            api_key: None,
        }
    }
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parsed_var<T: FromStr>(key: &str) -> Result<Option<T>, Error> {
    optional_var(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| Error::config_error(&format!("{} is not valid: {}", key, value)))
        })
        .transpose()
}

fn millis_var(key: &str, default: Duration) -> Result<Duration, Error> {
    Ok(parsed_var::<u64>(key)?
        .map(Duration::from_millis)
        .unwrap_or(default))
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let defaults = Self::default();

        Ok(Self {
            listen_addr: parsed_var("RIDECOMPARE_LISTEN_ADDR")?.unwrap_or(defaults.listen_addr),
            session_path: optional_var("RIDECOMPARE_SESSION_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.session_path),
            search_latency: millis_var("RIDECOMPARE_SEARCH_LATENCY_MS", defaults.search_latency)?,
            sign_in_latency: millis_var(
                "RIDECOMPARE_SIGN_IN_LATENCY_MS",
                defaults.sign_in_latency,
            )?,
            launch_timeout: millis_var("RIDECOMPARE_LAUNCH_TIMEOUT_MS", defaults.launch_timeout)?,
            rng_seed: parsed_var("RIDECOMPARE_RNG_SEED")?,
            google_maps: GoogleMapsConfig {
                api_base: optional_var("GOOGLE_MAPS_API_BASE")
                    .unwrap_or(defaults.google_maps.api_base),
                api_key: optional_var("GOOGLE_MAPS_API_KEY"),
            },
        })
    }

    /// Zero latencies and a fixed seed, for tests and local tooling.
    pub fn immediate() -> Self {
        Self {
            search_latency: Duration::ZERO,
            sign_in_latency: Duration::ZERO,
            rng_seed: Some(0),
            ..Self::default()
        }
    }
}
