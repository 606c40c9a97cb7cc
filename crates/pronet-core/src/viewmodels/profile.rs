use crate::error::CoreError;
use crate::model::UserProfile;
use crate::services::ProfileSource;

/// Own-profile editing and viewing other members.
pub struct ProfileViewModel<S: ProfileSource> {
    source: S,
    profile: Option<UserProfile>,
    is_loading: bool,
    error_message: Option<String>,
}

impl<S: ProfileSource> ProfileViewModel<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            profile: None,
            is_loading: false,
            error_message: None,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn profile_mut(&mut self) -> Option<&mut UserProfile> {
        self.profile.as_mut()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub async fn load_own_profile(&mut self) {
        self.error_message = None;
        self.is_loading = true;
        let result = self.source.fetch_profile().await;
        self.finish(result);
    }

    pub async fn load_other_user_profile(&mut self, user_id: &str) {
        self.error_message = None;
        self.is_loading = true;
        let result = self.source.load_other_profile(user_id).await;
        self.finish(result);
    }

    /// Persist the loaded profile. Returns `false` when nothing is loaded.
    pub async fn save_profile(&mut self) -> bool {
        let Some(profile) = self.profile.as_ref() else {
            return false;
        };
        self.error_message = None;
        self.is_loading = true;
        let result = self.source.save_profile(profile).await;
        self.is_loading = false;

        result.unwrap_or_else(|err| {
            self.error_message = Some(err.display_message());
            false
        })
    }

    fn finish(&mut self, result: Result<UserProfile, CoreError>) {
        self.is_loading = false;
        match result {
            Ok(profile) => self.profile = Some(profile),
            Err(err) => self.error_message = Some(err.display_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockLatency;
    use crate::services::MockProfileSource;

    #[tokio::test]
    async fn load_edit_save() {
        let mut vm = ProfileViewModel::new(MockProfileSource::new(MockLatency::NONE));
        assert!(!vm.save_profile().await);

        vm.load_own_profile().await;
        assert_eq!(vm.profile().map(|p| p.full_name.as_str()), Some("Sample"));
        if let Some(p) = vm.profile_mut() {
            p.headline = "Recruiter".into();
        }
        assert!(vm.save_profile().await);
    }

    #[tokio::test]
    async fn other_profile_has_friends() {
        let mut vm = ProfileViewModel::new(MockProfileSource::new(MockLatency::NONE));
        vm.load_other_user_profile("ava-johnson").await;
        let p = vm.profile().cloned().unwrap_or_default();
        assert_eq!(p.full_name, "Ava Johnson");
        assert_eq!(p.friends.len(), 3);
        assert!(p.friends.iter().all(|f| f.name != "Ava Johnson"));
    }
}
