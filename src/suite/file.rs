//! Suite files
//!
//! A suite file is YAML with a list of template components and a list of
//! cases that refer to them by name:
//!
//! ```yaml
//! components:
//!   - name: HelloWorld
//!     template: <h1>Welcome to Your Vue.js App</h1><h2>Essential Links</h2>
//! cases:
//!   - name: renders the links heading
//!     component: HelloWorld
//!     selector: h2
//!     expected: Essential Links
//! ```
//!
//! Templates are not parsed at load time. A broken template fails only the
//! cases that render it, as a render error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::{Suite, TestCase};
use crate::component::ComponentDescription;
use crate::selector::{Selector, SelectorError};

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("failed to read suite file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid suite file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("component '{0}' is defined more than once")]
    DuplicateComponent(String),

    #[error("case '{case}' refers to unknown component '{component}'")]
    UnknownComponent { case: String, component: String },

    #[error("case '{case}': {source}")]
    InvalidSelector {
        case: String,
        #[source]
        source: SelectorError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteFile {
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
    #[serde(default)]
    pub cases: Vec<CaseEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentEntry {
    pub name: String,
    pub template: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseEntry {
    pub name: String,
    pub component: String,
    pub selector: String,
    pub expected: String,
}

impl SuiteFile {
    pub fn from_yaml_str(source: &str) -> Result<Self, SuiteError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SuiteError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SuiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }

    /// Look up a component entry by name
    pub fn component(&self, name: &str) -> Option<ComponentDescription> {
        self.components
            .iter()
            .find(|c| c.name == name)
            .map(|c| ComponentDescription::from_template(&c.name, &c.template))
    }

    /// Resolve component references and validate selectors
    pub fn into_suite(self) -> Result<Suite, SuiteError> {
        let mut components: HashMap<String, ComponentDescription> = HashMap::new();
        for entry in self.components {
            if components.contains_key(&entry.name) {
                return Err(SuiteError::DuplicateComponent(entry.name));
            }
            let description = ComponentDescription::from_template(&entry.name, entry.template);
            components.insert(entry.name, description);
        }

        let mut suite = Suite::new();
        for case in self.cases {
            let component = components.get(&case.component).cloned().ok_or_else(|| {
                SuiteError::UnknownComponent {
                    case: case.name.clone(),
                    component: case.component.clone(),
                }
            })?;
            let selector =
                Selector::parse(&case.selector).map_err(|source| SuiteError::InvalidSelector {
                    case: case.name.clone(),
                    source,
                })?;
            suite.add_case(TestCase::new(case.name, component, selector, case.expected));
        }
        Ok(suite)
    }
}
