use aiwriter_core::Result;
use aiwriter_core::permissions::Capability;
use serde::Serialize;

use super::Actions;
use crate::openai::{ConnectionReport, test_connection};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionTested {
    pub message: String,
    pub model_info: ConnectionReport,
}

impl Actions<'_> {
    /// Checks a key against the model listing.
    ///
    /// A non-blank `api_key` takes precedence over the configured one.
    pub fn test_connection(&self, api_key: Option<&str>) -> Result<ConnectionTested> {
        self.permissions
            .require(Capability::ManageOptions, "Insufficient permissions.")?;

        let api = self.api_settings()?;
        let key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or(&api.api_key);

        let report = test_connection(self.transport, &api.base_url, key)?;
        Ok(ConnectionTested {
            message: report.message(),
            model_info: report,
        })
    }
}
