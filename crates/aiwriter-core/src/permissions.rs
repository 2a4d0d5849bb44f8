//! Capability checks for the acting user

use std::collections::HashSet;
use std::fmt;

use crate::config::Settings;
use crate::error::{AiWriterError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Generate content, create posts
    EditPosts,
    /// Change settings, test the API connection
    ManageOptions,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::EditPosts => "edit_posts",
            Capability::ManageOptions => "manage_options",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait PermissionChecker {
    fn current_user_can(&self, capability: Capability) -> bool;

    fn current_user_id(&self) -> u64;

    /// Fails with `PermissionDenied(message)` when the capability is missing
    fn require(&self, capability: Capability, message: &str) -> Result<()> {
        if self.current_user_can(capability) {
            Ok(())
        } else {
            tracing::debug!(%capability, "permission denied");
            Err(AiWriterError::PermissionDenied(message.to_string()))
        }
    }
}

/// A fixed capability set, usually read from the `[user]` settings table
#[derive(Debug, Clone, Default)]
pub struct GrantedCapabilities {
    user_id: u64,
    granted: HashSet<Capability>,
}

impl GrantedCapabilities {
    pub fn new(user_id: u64, granted: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            user_id,
            granted: granted.into_iter().collect(),
        }
    }

    /// Unknown capability names are ignored
    pub fn from_settings(settings: &Settings) -> Self {
        let granted = [Capability::EditPosts, Capability::ManageOptions]
            .into_iter()
            .filter(|cap| settings.has_capability(cap.as_str()));
        Self::new(settings.user.id, granted)
    }
}

impl PermissionChecker for GrantedCapabilities {
    fn current_user_can(&self, capability: Capability) -> bool {
        self.granted.contains(&capability)
    }

    fn current_user_id(&self) -> u64 {
        self.user_id
    }
}
