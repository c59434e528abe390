//! Allow-listed profile change set.

use crate::User;

use chrono::Utc;

/// The only fields a user may change after registration. Email and the
/// credential hash are deliberately absent; they cannot travel this path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub can_teach: Option<Vec<String>>,
    pub want_to_learn: Option<Vec<String>>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.bio.is_none()
            && self.can_teach.is_none()
            && self.want_to_learn.is_none()
    }

    /// Merge the provided fields into `user`, leaving absent ones untouched.
    /// Bumps `updated_at`; last write wins.
    pub fn apply(&self, user: &mut User) {
        if let Some(first_name) = &self.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            user.last_name = last_name.clone();
        }
        if let Some(bio) = &self.bio {
            user.bio = Some(bio.clone());
        }
        if let Some(can_teach) = &self.can_teach {
            user.can_teach = can_teach.clone();
        }
        if let Some(want_to_learn) = &self.want_to_learn {
            user.want_to_learn = want_to_learn.clone();
        }
        user.updated_at = Utc::now();
    }
}
