use crate::models::{ModelDescriptor, RequestFormat, TaskCategory};

/// Key of the model used when no registry entry supports a task.
pub const DEFAULT_MODEL_KEY: &str = "llama-3.2-3b";

/// Immutable, ordered set of remote models.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    models: Vec<ModelDescriptor>,
    default_index: usize,
}

impl ModelRegistry {
    /// Returns `None` when `default_key` is not one of `models`.
    pub fn new(models: Vec<ModelDescriptor>, default_key: &str) -> Option<Self> {
        let default_index = models.iter().position(|m| m.key == default_key)?;
        Some(Self {
            models,
            default_index,
        })
    }

    /// Hosted models known to answer on the Hugging Face inference API.
    pub fn builtin() -> Self {
        use RequestFormat::{Chat, Standard};
        use TaskCategory::*;

        let models = vec![
            ModelDescriptor::new(
                "mistral-7b",
                "mistralai/Mistral-7B-Instruct-v0.3",
                &[GeneralChat, FastResponse],
                1,
                Chat,
                "Fast general-purpose chat",
            ),
            ModelDescriptor::new(
                DEFAULT_MODEL_KEY,
                "meta-llama/Llama-3.2-3B-Instruct",
                &[GeneralChat, FastResponse],
                2,
                Chat,
                "Efficient conversational model",
            ),
            ModelDescriptor::new(
                "qwen-coder-7b",
                "Qwen/Qwen2.5-Coder-7B-Instruct",
                &[Coding],
                1,
                Chat,
                "Specialized coding assistant",
            ),
            ModelDescriptor::new(
                "deepseek-coder",
                "deepseek-ai/deepseek-coder-6.7b-instruct",
                &[Coding],
                2,
                Chat,
                "Code generation and explanation",
            ),
            ModelDescriptor::new(
                "qwen-math",
                "Qwen/Qwen2.5-Math-7B-Instruct",
                &[Reasoning, Math],
                1,
                Chat,
                "Math problem solving",
            ),
            ModelDescriptor::new(
                "deepseek-r1",
                "deepseek-ai/DeepSeek-R1-Distill-Qwen-7B",
                &[Reasoning, Math],
                2,
                Chat,
                "Step-by-step reasoning",
            ),
            ModelDescriptor::new(
                "llama-8b",
                "meta-llama/Llama-3.1-8B-Instruct",
                &[Creative, GeneralChat],
                1,
                Chat,
                "Creative writing",
            ),
            ModelDescriptor::new(
                "qwen-multilingual",
                "Qwen/Qwen2.5-7B-Instruct",
                &[Multilingual, GeneralChat],
                1,
                Chat,
                "Multilingual conversation",
            ),
            ModelDescriptor::new(
                "gpt2",
                "openai-community/gpt2",
                &[GeneralChat, FastResponse],
                10,
                Standard,
                "Small text-generation backup",
            ),
        ];

        Self {
            models,
            default_index: 1,
        }
    }

    pub fn get(&self, key: &str) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.key == key)
    }

    pub fn default_model(&self) -> &ModelDescriptor {
        &self.models[self.default_index]
    }

    pub fn models(&self) -> &[ModelDescriptor] {
        &self.models
    }

    /// Pick a model for `task`.
    ///
    /// A known `override_key` always wins. Otherwise the supporting model
    /// with the lowest priority is chosen, earlier entries winning ties, and
    /// the default model covers tasks nobody supports. Unknown override keys
    /// are ignored.
    pub fn select(&self, task: TaskCategory, override_key: Option<&str>) -> &ModelDescriptor {
        if let Some(model) = override_key.and_then(|key| self.get(key)) {
            return model;
        }

        // ordered by (priority, declaration order)
        self.models
            .iter()
            .enumerate()
            .filter(|(_, model)| model.supports(task))
            .min_by_key(|(index, model)| (model.priority, *index))
            .map(|(_, model)| model)
            .unwrap_or_else(|| self.default_model())
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
