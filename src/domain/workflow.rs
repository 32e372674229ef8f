use crate::error::{AppError, AppResult};

/// A workflow identifier known to the orchestration system. Only obtainable
/// by resolving classifier output against the catalog, so holding one proves
/// the name is launchable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowName(String);

impl WorkflowName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Fixed mapping from human-readable label to workflow identifier, built at
/// startup and read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct WorkflowCatalog {
    entries: Vec<(String, String)>,
}

impl WorkflowCatalog {
    pub fn builtin() -> Self {
        Self::from_entries([
            ("IT - Singapore", "Onboarding_IT_SG"),
            ("HR - Malaysia", "Onboarding_HR_MY"),
            ("Finance - Remote", "Onboarding_Fin_Remote"),
        ])
    }

    pub fn from_entries<L, I>(entries: impl IntoIterator<Item = (L, I)>) -> Self
    where
        L: Into<String>,
        I: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(label, id)| (label.into(), id.into()))
                .collect(),
        }
    }

    /// Parses a catalog from a JSON object of label → identifier, the shape
    /// accepted in the `WORKFLOW_CATALOG` environment variable.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let parsed: serde_json::Map<String, serde_json::Value> = serde_json::from_str(raw)
            .map_err(|err| AppError::Configuration(format!("invalid workflow catalog: {err}")))?;

        let mut entries = Vec::with_capacity(parsed.len());
        for (label, value) in parsed {
            let id = value.as_str().ok_or_else(|| {
                AppError::Configuration(format!(
                    "workflow catalog entry '{label}' must map to a string"
                ))
            })?;
            entries.push((label, id.to_string()));
        }

        if entries.is_empty() {
            return Err(AppError::Configuration(
                "workflow catalog must not be empty".to_string(),
            ));
        }

        Ok(Self { entries })
    }

    /// Every identifier the classifier may select, in catalog order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, id)| id.as_str())
    }

    /// Resolves raw classifier output to a catalog member. Surrounding
    /// whitespace is tolerated; anything else must match an identifier
    /// exactly or the classification is rejected.
    pub fn resolve(&self, raw: &str) -> AppResult<WorkflowName> {
        let candidate = raw.trim();
        self.entries
            .iter()
            .find(|(_, id)| id == candidate)
            .map(|(_, id)| WorkflowName(id.clone()))
            .ok_or_else(|| AppError::UnknownWorkflow(candidate.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_identifier() {
        let catalog = WorkflowCatalog::builtin();
        let name = catalog.resolve("Onboarding_HR_MY").unwrap();
        assert_eq!(name.as_str(), "Onboarding_HR_MY");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let catalog = WorkflowCatalog::builtin();
        let name = catalog.resolve("  Onboarding_IT_SG\n").unwrap();
        assert_eq!(name.as_str(), "Onboarding_IT_SG");
    }

    #[test]
    fn rejects_identifier_outside_catalog() {
        let catalog = WorkflowCatalog::builtin();
        let error = catalog.resolve("Onboarding_Legal_UK").unwrap_err();
        assert!(matches!(error, AppError::UnknownWorkflow(name) if name == "Onboarding_Legal_UK"));
    }

    #[test]
    fn parses_catalog_from_json() {
        let catalog =
            WorkflowCatalog::from_json(r#"{"Legal - UK": "Onboarding_Legal_UK"}"#).unwrap();
        assert_eq!(
            catalog.identifiers().collect::<Vec<_>>(),
            vec!["Onboarding_Legal_UK"]
        );
    }

    #[test]
    fn rejects_empty_or_malformed_catalog_json() {
        assert!(matches!(
            WorkflowCatalog::from_json("{}"),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            WorkflowCatalog::from_json(r#"{"IT": 3}"#),
            Err(AppError::Configuration(_))
        ));
        assert!(matches!(
            WorkflowCatalog::from_json("not json"),
            Err(AppError::Configuration(_))
        ));
    }
}
