//! The decommission list: repositories to delete in bulk.
//!
//! ```yaml
//! repositories:
//!   - legacy-service
//!   - old-prototype
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::manifest::validate_names;
use crate::persistence::read_yaml_file;

/// Names of repositories to decommission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecommissionList {
    /// Repository names, in file order.
    #[serde(default)]
    pub repositories: Vec<String>,
}

impl DecommissionList {
    /// Loads and validates a decommission list.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a name
    /// is empty or listed twice.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ghrm_config::DecommissionList;
    ///
    /// # fn example() -> ghrm_config::Result<()> {
    /// let list = DecommissionList::load("decommission.yaml")?;
    /// println!("{} repositories to delete", list.repositories.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let Some(list) = read_yaml_file::<Self>(path)? else {
            warn!(path = %path.display(), "empty decommission list");
            return Ok(Self::default());
        };

        validate_names(list.repositories.iter().map(String::as_str))?;
        Ok(list)
    }
}
