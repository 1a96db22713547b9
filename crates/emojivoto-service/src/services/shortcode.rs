//! Shortcode-to-operation table
//!
//! The deployed resource is a JSON object mapping each vote operation to the
//! shortcode it counts (`{"VoteDoughnut": ":doughnut:"}`). It is read once at
//! startup, inverted to `shortcode -> operation`, and every entry is resolved
//! against the voting client before the server accepts requests.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use emojivoto_common::OperationPolicy;
use emojivoto_core::{VoteOperation, VotingClient};
use tracing::{error, info};

use super::error::{ServiceError, ServiceResult};

/// Immutable mapping from shortcode to a resolved vote operation
#[derive(Debug, Clone, Default)]
pub struct ShortcodeTable {
    operations: HashMap<String, VoteOperation>,
}

impl ShortcodeTable {
    /// Read and resolve the table resource at `path`
    pub fn load(
        path: &Path,
        client: &dyn VotingClient,
        policy: OperationPolicy,
    ) -> ServiceResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ServiceError::config(format!(
                "cannot read shortcode table {}: {e}",
                path.display()
            ))
        })?;

        let table = Self::from_json(&json, client, policy)?;
        info!(
            path = %path.display(),
            entries = table.len(),
            "Shortcode table loaded"
        );
        Ok(table)
    }

    /// Parse and resolve a table given as JSON text
    pub fn from_json(
        json: &str,
        client: &dyn VotingClient,
        policy: OperationPolicy,
    ) -> ServiceResult<Self> {
        let entries: BTreeMap<String, String> = serde_json::from_str(json)
            .map_err(|e| ServiceError::config(format!("malformed shortcode table: {e}")))?;

        Self::resolve(entries, client, policy)
    }

    /// Resolve `(operation, shortcode)` entries against the voting client
    ///
    /// Two operations claiming one shortcode is always an error. Entries whose
    /// operation the client does not implement fail the whole table under
    /// [`OperationPolicy::Strict`] and are dropped under
    /// [`OperationPolicy::Lenient`].
    pub fn resolve<I>(
        entries: I,
        client: &dyn VotingClient,
        policy: OperationPolicy,
    ) -> ServiceResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut by_shortcode: BTreeMap<String, String> = BTreeMap::new();
        for (operation, shortcode) in entries {
            if let Some(existing) = by_shortcode.get(&shortcode) {
                return Err(ServiceError::config(format!(
                    "shortcode {shortcode} is mapped to both {existing} and {operation}"
                )));
            }
            by_shortcode.insert(shortcode, operation);
        }

        let mut operations = HashMap::with_capacity(by_shortcode.len());
        let mut unimplemented = Vec::new();

        for (shortcode, name) in by_shortcode {
            match VoteOperation::resolve(&name, client) {
                Some(operation) => {
                    operations.insert(shortcode, operation);
                }
                None => {
                    error!(
                        shortcode = %shortcode,
                        operation = %name,
                        "Voting client lacks implementation of operation"
                    );
                    unimplemented.push(format!("{name} ({shortcode})"));
                }
            }
        }

        if !unimplemented.is_empty() && policy == OperationPolicy::Strict {
            return Err(ServiceError::config(format!(
                "operations not implemented by the voting client: {}",
                unimplemented.join(", ")
            )));
        }

        Ok(Self { operations })
    }

    /// Operation registered for a shortcode, if any
    pub fn lookup(&self, shortcode: &str) -> Option<&VoteOperation> {
        self.operations.get(shortcode)
    }

    /// Number of resolved entries
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
