// Configuration type definitions

use serde::Deserialize;

use crate::theme::StyleOptions;

/// Autocomplete configuration section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AutocompleteConfig {
    #[serde(default)]
    pub enabled: bool,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub style: StyleOptions,
}
