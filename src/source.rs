use std::path::{Path, PathBuf};

use crate::{
    catalog,
    error::{Error, Result},
    knowledge::KnowledgeBase,
};

/// Environment variable naming a JSON knowledge file.
pub const KNOWLEDGE_ENV: &str = "DASHQA_KNOWLEDGE";

/// File looked up under the XDG data directories (`~/.local/share/dashqa/`).
pub const KNOWLEDGE_FILE_NAME: &str = "knowledge.json";

/// Where the knowledge base is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeSource {
    File(PathBuf),
    Builtin,
}

impl KnowledgeSource {
    /// Resolve the knowledge source from, in order of priority:
    /// 1. An explicit path (from --knowledge)
    /// 2. The DASHQA_KNOWLEDGE environment variable
    /// 3. `knowledge.json` in the XDG data directories, if present
    /// 4. The built-in dashboard catalog
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(KNOWLEDGE_ENV)
            .filter(|val| !val.is_empty())
            .map(PathBuf::from);
        let data_file = xdg::BaseDirectories::with_prefix("dashqa")
            .find_data_file(KNOWLEDGE_FILE_NAME);

        Self::pick(explicit, from_env, data_file)
    }

    fn pick(
        explicit: Option<&Path>,
        from_env: Option<PathBuf>,
        data_file: Option<PathBuf>,
    ) -> Result<Self> {
        let requested = explicit.map(Path::to_path_buf).or(from_env);
        if let Some(path) = requested {
            if !path.is_file() {
                return Err(Error::KnowledgeFile(path));
            }
            return Ok(Self::File(path));
        }

        Ok(data_file.map_or(Self::Builtin, Self::File))
    }

    pub fn load(&self) -> Result<KnowledgeBase> {
        match self {
            Self::File(path) => KnowledgeBase::load(path),
            Self::Builtin => {
                let knowledge = catalog::builtin();
                tracing::info!(
                    entries = knowledge.entries().len(),
                    "using built-in catalog"
                );
                Ok(knowledge)
            }
        }
    }
}

impl std::fmt::Display for KnowledgeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Builtin => write!(f, "built-in catalog"),
        }
    }
}
