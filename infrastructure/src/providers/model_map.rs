//! Catalog model → vendor model id routing table

use super::ProviderKind;
use promptsmith_domain::CatalogModel;
use std::collections::HashMap;

/// Where a catalog model is served from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRoute {
    pub provider: ProviderKind,
    pub vendor_model_id: String,
}

/// Vendor model id used when no override is configured
pub fn default_vendor_id(model: CatalogModel) -> &'static str {
    match model {
        CatalogModel::Gpt41 => "gpt-4.1",
        CatalogModel::Gpt41Mini => "gpt-4.1-mini",
        CatalogModel::ClaudeOpus4 => "claude-opus-4-20250514",
        CatalogModel::ClaudeSonnet4 => "claude-sonnet-4-20250514",
        CatalogModel::Grok3 => "grok-3",
        CatalogModel::Grok3Mini => "grok-3-mini",
        CatalogModel::Gemini25Pro => "gemini-2.5-pro",
        CatalogModel::Gemini25Flash => "gemini-2.5-flash",
    }
}

#[derive(Debug, Clone)]
pub struct ModelMap {
    routes: HashMap<CatalogModel, ModelRoute>,
}

impl Default for ModelMap {
    fn default() -> Self {
        let routes = CatalogModel::ALL
            .into_iter()
            .map(|model| {
                let route = ModelRoute {
                    provider: ProviderKind::for_family(model.family()),
                    vendor_model_id: default_vendor_id(model).to_string(),
                };
                (model, route)
            })
            .collect();
        Self { routes }
    }
}

impl ModelMap {
    /// Build the default table and apply `overrides` (catalog name → vendor id).
    ///
    /// Returns the map plus the override keys that named no catalog model.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> (Self, Vec<String>) {
        let mut map = Self::default();
        let mut unknown = Vec::new();
        for (name, vendor_id) in overrides {
            let vendor_id = vendor_id.trim();
            match name.parse::<CatalogModel>() {
                Ok(model) if !vendor_id.is_empty() => {
                    if let Some(route) = map.routes.get_mut(&model) {
                        route.vendor_model_id = vendor_id.to_string();
                    }
                }
                Ok(_) => {}
                Err(_) => unknown.push(name.clone()),
            }
        }
        unknown.sort();
        (map, unknown)
    }

    pub fn resolve(&self, model: CatalogModel) -> Option<&ModelRoute> {
        self.routes.get(&model)
    }
}
