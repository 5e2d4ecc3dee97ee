use async_trait::async_trait;
use chrono::Utc;
use skills_backend::domain::{AuthIdentity, AuthProvider, UserSession};
use skills_backend::error::AppResult;
use skills_backend::infrastructure::repositories::AuthRepository;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct MockAuthRepo {
    pub identities: Mutex<Vec<AuthIdentity>>,
    pub sessions: Mutex<Vec<UserSession>>,
    rotate_after_lookup: AtomicBool,
}

impl MockAuthRepo {
    pub fn push_identity(&self, identity: AuthIdentity) {
        self.identities
            .lock()
            .expect("identities mutex poisoned")
            .push(identity);
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().expect("sessions mutex poisoned").len()
    }

    pub fn active_session_count(&self) -> usize {
        self.sessions
            .lock()
            .expect("sessions mutex poisoned")
            .iter()
            .filter(|session| session.revoked_at.is_none())
            .count()
    }

    /// Makes the next session lookup lose a rotation race: the caller gets the live
    /// snapshot while the stored session is already revoked.
    pub fn rotate_after_next_lookup(&self) {
        self.rotate_after_lookup.store(true, Ordering::SeqCst);
    }

    /// Moves every session's expiry into the past.
    pub fn expire_all_sessions(&self) {
        let past = Utc::now() - chrono::Duration::minutes(1);
        for session in self
            .sessions
            .lock()
            .expect("sessions mutex poisoned")
            .iter_mut()
        {
            session.expires_at = past;
        }
    }
}

#[async_trait]
impl AuthRepository for MockAuthRepo {
    async fn find_identity_by_user_id(
        &self,
        user_id: Uuid,
        provider: AuthProvider,
    ) -> AppResult<Option<AuthIdentity>> {
        Ok(self
            .identities
            .lock()
            .expect("identities mutex poisoned")
            .iter()
            .find(|identity| identity.user_id == user_id && identity.provider == provider)
            .cloned())
    }

    async fn create_session(&self, session: &UserSession) -> AppResult<UserSession> {
        self.sessions
            .lock()
            .expect("sessions mutex poisoned")
            .push(session.clone());
        Ok(session.clone())
    }

    async fn find_session_by_token_hash(&self, token_hash: &str) -> AppResult<Option<UserSession>> {
        let mut sessions = self.sessions.lock().expect("sessions mutex poisoned");
        let Some(stored) = sessions
            .iter_mut()
            .find(|session| session.refresh_token_hash == token_hash)
        else {
            return Ok(None);
        };
        let snapshot = stored.clone();
        if self.rotate_after_lookup.swap(false, Ordering::SeqCst) {
            stored.revoked_at = Some(Utc::now());
            stored.revoked_reason = Some("rotated".to_string());
        }
        Ok(Some(snapshot))
    }

    async fn revoke_session(&self, id: Uuid, reason: &str) -> AppResult<bool> {
        let mut sessions = self.sessions.lock().expect("sessions mutex poisoned");
        match sessions
            .iter_mut()
            .find(|session| session.id == id && session.revoked_at.is_none())
        {
            Some(session) => {
                session.revoked_at = Some(Utc::now());
                session.revoked_reason = Some(reason.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_replaced_by(&self, id: Uuid, replaced_by: Uuid) -> AppResult<()> {
        let mut sessions = self.sessions.lock().expect("sessions mutex poisoned");
        if let Some(session) = sessions.iter_mut().find(|session| session.id == id) {
            session.replaced_by = Some(replaced_by);
        }
        Ok(())
    }

    async fn revoke_family(&self, family_id: Uuid, reason: &str) -> AppResult<()> {
        let now = Utc::now();
        for session in self
            .sessions
            .lock()
            .expect("sessions mutex poisoned")
            .iter_mut()
            .filter(|session| session.family_id == family_id && session.revoked_at.is_none())
        {
            session.revoked_at = Some(now);
            session.revoked_reason = Some(reason.to_string());
        }
        Ok(())
    }

    async fn touch_session(&self, id: Uuid) -> AppResult<()> {
        let mut sessions = self.sessions.lock().expect("sessions mutex poisoned");
        if let Some(session) = sessions.iter_mut().find(|session| session.id == id) {
            session.last_seen_at = Some(Utc::now());
        }
        Ok(())
    }
}
