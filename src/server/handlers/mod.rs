pub mod launches;
pub mod places;
pub mod profile;
pub mod routes;
pub mod searches;
pub mod sessions;
