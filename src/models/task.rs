use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse intent of a user message, used to pick a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    GeneralChat,
    Coding,
    Reasoning,
    Math,
    Creative,
    Multilingual,
    FastResponse,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 7] = [
        Self::GeneralChat,
        Self::Coding,
        Self::Reasoning,
        Self::Math,
        Self::Creative,
        Self::Multilingual,
        Self::FastResponse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeneralChat => "general_chat",
            Self::Coding => "coding",
            Self::Reasoning => "reasoning",
            Self::Math => "math",
            Self::Creative => "creative",
            Self::Multilingual => "multilingual",
            Self::FastResponse => "fast_response",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde_name() {
        for task in TaskCategory::ALL {
            let json = serde_json::to_string(&task).unwrap();
            assert_eq!(json, format!("\"{}\"", task));
        }
    }
}
