use uuid::Uuid;

use crate::{
    errors::StoreError,
    storage::{PersistenceGateway, Result, CATALOG_STORE},
};

use super::{code::CptCode, group::Group};

const PLACEHOLDER_TITLE: &str = "New Group";

/// Owns the grouped code catalog. Loads prior state at construction and
/// writes its full state back to the gateway after every successful mutation;
/// rejected mutations and no-ops write nothing.
pub struct Catalog {
    groups: Vec<Group>,
    gateway: Box<dyn PersistenceGateway>,
}

impl Catalog {
    /// Opens the catalog from the gateway's persisted document. Absence seeds
    /// the built-in starter groups.
    pub fn open(gateway: Box<dyn PersistenceGateway>) -> Result<Self> {
        let groups = match gateway.load(CATALOG_STORE)? {
            Some(json) => serde_json::from_str(&json)?,
            None => default_groups(),
        };
        Ok(Self { groups, gateway })
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, id: Uuid) -> Option<&Group> {
        self.groups.iter().find(|group| group.id == id)
    }

    /// Total number of codes across all groups.
    pub fn code_count(&self) -> usize {
        self.groups.iter().map(|group| group.codes.len()).sum()
    }

    /// Appends a new empty group with a placeholder title and returns its id.
    pub fn create_group(&mut self) -> Uuid {
        let group = Group::new(PLACEHOLDER_TITLE);
        let id = group.id;
        self.groups.push(group);
        self.persist();
        id
    }

    /// Retitles a group. The new title must be non-empty after trimming.
    pub fn rename_group(&mut self, id: Uuid, new_title: &str) -> Result<()> {
        let title = new_title.trim();
        if title.is_empty() {
            return Err(StoreError::Invalid("group title must not be empty".into()));
        }
        let group = self
            .groups
            .iter_mut()
            .find(|group| group.id == id)
            .ok_or(StoreError::GroupNotFound(id))?;
        group.title = title.to_string();
        self.persist();
        Ok(())
    }

    /// Removes a group and its entire code run. Ledger entries referencing the
    /// discarded codes are untouched; they keep their snapshot by value.
    pub fn delete_group(&mut self, id: Uuid) -> Result<()> {
        let before = self.groups.len();
        self.groups.retain(|group| group.id != id);
        if self.groups.len() == before {
            return Err(StoreError::GroupNotFound(id));
        }
        self.persist();
        Ok(())
    }

    /// Validates and appends a code to the end of the target group. The wRVU
    /// text must parse to a finite, non-negative number.
    pub fn add_code(
        &mut self,
        group_id: Uuid,
        code: &str,
        description: &str,
        wrvu_text: &str,
    ) -> Result<()> {
        let code = code.trim();
        if code.is_empty() {
            return Err(StoreError::Invalid("code must not be empty".into()));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(StoreError::Invalid("description must not be empty".into()));
        }
        let wrvu_value: f64 = wrvu_text
            .trim()
            .parse()
            .map_err(|_| StoreError::Invalid(format!("`{}` is not a number", wrvu_text)))?;
        if !wrvu_value.is_finite() || wrvu_value < 0.0 {
            return Err(StoreError::Invalid(format!(
                "wRVU value must be finite and non-negative, got `{}`",
                wrvu_text
            )));
        }
        let group = self
            .groups
            .iter_mut()
            .find(|group| group.id == group_id)
            .ok_or(StoreError::GroupNotFound(group_id))?;
        group.codes.push(CptCode::new(code, description, wrvu_value));
        self.persist();
        Ok(())
    }

    /// Removes the first code with a matching `code` field from the named
    /// group only. Codes with the same value in other groups are untouched;
    /// code identity is group-scoped.
    pub fn delete_code(&mut self, group_id: Uuid, code: &str) -> Result<()> {
        let group = self
            .groups
            .iter_mut()
            .find(|group| group.id == group_id)
            .ok_or(StoreError::GroupNotFound(group_id))?;
        let position = group.position(code).ok_or_else(|| StoreError::CodeNotFound {
            group: group_id,
            code: code.to_string(),
        })?;
        group.codes.remove(position);
        self.persist();
        Ok(())
    }

    /// Moves the source group to the slot currently occupied by the target
    /// group; intervening groups shift by one, all others keep relative order.
    /// Equal ids are an Ok no-op.
    pub fn reorder_groups(&mut self, source: Uuid, target: Uuid) -> Result<()> {
        if source == target {
            return Ok(());
        }
        let source_index = self
            .index_of(source)
            .ok_or(StoreError::GroupNotFound(source))?;
        if self.index_of(target).is_none() {
            return Err(StoreError::GroupNotFound(target));
        }
        let moved = self.groups.remove(source_index);
        // Target is re-located after the removal so the moved group lands at
        // the slot the target occupies now.
        let insert_at = self.index_of(target).unwrap_or(self.groups.len());
        self.groups.insert(insert_at, moved);
        self.persist();
        Ok(())
    }

    /// Moves a code to the index currently occupied by the target code in the
    /// target group — same-group reorder or cross-group move. An identical
    /// source and target is an Ok no-op. Total code count is conserved.
    pub fn reorder_codes(
        &mut self,
        source_group: Uuid,
        source_code: &str,
        target_group: Uuid,
        target_code: &str,
    ) -> Result<()> {
        if source_group == target_group && source_code == target_code {
            return Ok(());
        }
        let source_index = self
            .index_of(source_group)
            .ok_or(StoreError::GroupNotFound(source_group))?;
        let code_index =
            self.groups[source_index]
                .position(source_code)
                .ok_or_else(|| StoreError::CodeNotFound {
                    group: source_group,
                    code: source_code.to_string(),
                })?;
        let target_index = self
            .index_of(target_group)
            .ok_or(StoreError::GroupNotFound(target_group))?;
        if self.groups[target_index].position(target_code).is_none() {
            return Err(StoreError::CodeNotFound {
                group: target_group,
                code: target_code.to_string(),
            });
        }
        let moved = self.groups[source_index].codes.remove(code_index);
        let insert_at = self.groups[target_index]
            .position(target_code)
            .unwrap_or(self.groups[target_index].codes.len());
        self.groups[target_index].codes.insert(insert_at, moved);
        self.persist();
        Ok(())
    }

    fn index_of(&self, id: Uuid) -> Option<usize> {
        self.groups.iter().position(|group| group.id == id)
    }

    /// Writes the full group list to the gateway. Persistence is not
    /// transactional with the mutation: a failed save is logged and the
    /// in-memory state stands.
    fn persist(&self) {
        match serde_json::to_string_pretty(&self.groups) {
            Ok(json) => {
                if let Err(err) = self.gateway.save(CATALOG_STORE, &json) {
                    tracing::warn!("catalog save failed: {err}");
                }
            }
            Err(err) => tracing::warn!("catalog serialize failed: {err}"),
        }
    }
}

/// Starter catalog for first runs: the standard office-visit evaluation codes
/// plus an empty group ready for customization.
fn default_groups() -> Vec<Group> {
    vec![
        Group::with_codes(
            "Evaluation & Management",
            vec![
                CptCode::new("99213", "Office Visit Level 3", 0.97),
                CptCode::new("99214", "Office Visit Level 4", 1.5),
                CptCode::new("99215", "Office Visit Level 5", 2.11),
            ],
        ),
        Group::new("Procedures"),
    ]
}
