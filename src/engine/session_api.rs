use super::Engine;

use async_trait::async_trait;

use crate::{
    api::SessionAPI,
    entities::{Destination, UserProfile},
    error::Error,
};

#[async_trait]
impl SessionAPI for Engine {
    #[tracing::instrument(skip(self, password))]
    async fn sign_in(&self, email: String, password: String) -> Result<Destination, Error> {
        if email.is_empty() || password.is_empty() {
            return Err(Error::validation_error("Please fill in all fields"));
        }

        tokio::time::sleep(self.config.sign_in_latency).await;

        let _guard = self.session_guard.lock().await;
        let mut session = self.sessions.get().await?;
        session.sign_in(email);
        self.sessions.set(&session).await?;

        tracing::info!("signed in");

        Ok(Destination::Search)
    }

    #[tracing::instrument(skip(self))]
    async fn sign_out(&self) -> Result<Destination, Error> {
        let _guard = self.session_guard.lock().await;
        let mut session = self.sessions.get().await?;
        session.sign_out();
        self.sessions.set(&session).await?;

        tracing::info!("signed out");

        Ok(Destination::Authentication)
    }

    #[tracing::instrument(skip(self))]
    async fn startup_destination(&self) -> Destination {
        match self.sessions.get().await {
            Ok(session) if session.is_signed_in() => Destination::Search,
            Ok(_) => Destination::Authentication,
            Err(err) => {
                tracing::warn!("could not read session, asking for sign in: {}", err);
                Destination::Authentication
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn load_profile(&self) -> Result<UserProfile, Error> {
        let session = self.sessions.get().await?;

        Ok(match (session.profile, session.email) {
            (Some(profile), _) => profile,
            (None, Some(email)) => UserProfile::with_email(email),
            (None, None) => UserProfile::default(),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn save_profile(&self, profile: UserProfile) -> Result<UserProfile, Error> {
        profile.validate()?;

        let _guard = self.session_guard.lock().await;
        let mut session = self.sessions.get().await?;
        session.profile = Some(profile.clone());
        self.sessions.set(&session).await?;

        tracing::info!("profile updated");

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use tokio_test::{assert_err, assert_ok};

    use crate::api::SessionAPI;
    use crate::config::Config;
    use crate::engine::{test_support, Engine};
    use crate::entities::{Destination, StoredSession, UserProfile, VehicleClass};
    use crate::error::Error;
    use crate::session::{FileSessionRepository, SessionRepository};

    struct BrokenRepository;

    #[async_trait]
    impl SessionRepository for BrokenRepository {
        async fn get(&self) -> Result<StoredSession, Error> {
            Err(Error::storage_error("unreadable"))
        }

        async fn set(&self, _session: &StoredSession) -> Result<(), Error> {
            Err(Error::storage_error("read-only"))
        }

        async fn clear(&self) -> Result<(), Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn fresh_install_starts_at_authentication() {
        let engine = test_support::engine();
        assert_eq!(engine.startup_destination().await, Destination::Authentication);
    }

    #[tokio::test]
    async fn sign_in_then_out() {
        let engine = test_support::engine();

        let destination = assert_ok!(
            engine
                .sign_in("rider@example.com".into(), "secret".into())
                .await
        );
        assert_eq!(destination, Destination::Search);
        assert_eq!(engine.startup_destination().await, Destination::Search);

        assert_eq!(assert_ok!(engine.sign_out().await), Destination::Authentication);
        assert_eq!(engine.startup_destination().await, Destination::Authentication);

        let profile = assert_ok!(engine.load_profile().await);
        assert_eq!(profile.email, "rider@example.com");
    }

    #[tokio::test]
    async fn sign_in_needs_both_fields() {
        let engine = test_support::engine();

        let err = assert_err!(engine.sign_in("".into(), "secret".into()).await);
        assert!(err.is_validation_error());

        let err = assert_err!(engine.sign_in("rider@example.com".into(), "".into()).await);
        assert!(err.is_validation_error());
        assert_eq!(engine.startup_destination().await, Destination::Authentication);
    }

    #[tokio::test]
    async fn padded_email_is_stored_as_entered() {
        let engine = test_support::engine();

        assert_ok!(engine.sign_in(" rider@example.com ".into(), "pw".into()).await);

        let profile = assert_ok!(engine.load_profile().await);
        assert_eq!(profile.email, " rider@example.com ");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn sign_out_and_profile_save_do_not_overwrite_each_other() {
        let dir = tempfile::tempdir().unwrap();
        let engine = Engine::with_sessions(
            Config::immediate(),
            Box::new(FileSessionRepository::new(dir.path().join("session.json"))),
        );

        for round in 0..50 {
            assert_ok!(engine.sign_in("rider@example.com".into(), "pw".into()).await);

            let profile = UserProfile {
                name: format!("Asha {}", round),
                ..UserProfile::with_email("rider@example.com")
            };
            let (signed_out, saved) =
                tokio::join!(engine.sign_out(), engine.save_profile(profile.clone()));
            assert_ok!(signed_out);
            assert_ok!(saved);

            assert_eq!(engine.startup_destination().await, Destination::Authentication);
            assert_eq!(assert_ok!(engine.load_profile().await), profile);
        }
    }

    #[tokio::test]
    async fn profile_defaults_to_stored_email_then_saves() {
        let engine = test_support::engine();
        assert_ok!(engine.sign_in("rider@example.com".into(), "pw".into()).await);

        let mut profile = assert_ok!(engine.load_profile().await);
        assert_eq!(profile.email, "rider@example.com");
        assert_eq!(profile.preferred_vehicle, VehicleClass::Sedan);

        let err = assert_err!(engine.save_profile(profile.clone()).await);
        assert!(err.is_validation_error());

        profile.name = "Asha".into();
        profile.preferred_vehicle = VehicleClass::Bike;
        assert_ok!(engine.save_profile(profile.clone()).await);

        assert_eq!(assert_ok!(engine.load_profile().await), profile);
    }

    #[tokio::test]
    async fn unreadable_storage_routes_to_authentication() {
        let engine = Engine::with_sessions(Config::immediate(), Box::new(BrokenRepository));

        assert_eq!(engine.startup_destination().await, Destination::Authentication);

        let err = assert_err!(
            engine
                .save_profile(UserProfile {
                    name: "Asha".into(),
                    ..UserProfile::default()
                })
                .await
        );
        assert_eq!(err.code, 2);
    }
}
