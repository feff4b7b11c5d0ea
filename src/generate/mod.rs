//! Task generation: prompt a text collaborator for a breakdown, fall back to
//! the deterministic domain templates when it fails.

mod parse;
mod prompt;
mod templates;

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::GenerationConfig;
use crate::model::{ProjectContext, ResourceContext, Task};
use crate::textgen::TextGenerator;

pub use parse::parse_task_response;
pub use prompt::build_task_prompt;
pub use templates::template_tasks;

pub struct TaskGenerator {
    generator: Option<Arc<dyn TextGenerator>>,
    config: GenerationConfig,
}

impl TaskGenerator {
    pub fn new(generator: Arc<dyn TextGenerator>, config: GenerationConfig) -> Self {
        Self {
            generator: Some(generator),
            config,
        }
    }

    /// Template-only generator for offline runs.
    pub fn offline(config: GenerationConfig) -> Self {
        Self {
            generator: None,
            config,
        }
    }

    /// Produce the task breakdown. Never fails: a missing collaborator, a
    /// timeout, a transport error, or an unparseable response all land on the
    /// template fallback.
    pub async fn generate(
        &self,
        context: &ProjectContext,
        resources: &ResourceContext,
    ) -> Vec<Task> {
        let Some(generator) = &self.generator else {
            info!("No text generator configured, using task templates");
            return template_tasks(context);
        };

        let prompt = build_task_prompt(context, resources);
        let call = generator.generate_text(&prompt);

        let response =
            match tokio::time::timeout(Duration::from_secs(self.config.timeout_secs), call).await {
                Ok(Ok(text)) => text,
                Ok(Err(e)) => {
                    warn!(error = %e, "Task generation failed, using templates");
                    return template_tasks(context);
                }
                Err(_) => {
                    warn!(
                        timeout_secs = self.config.timeout_secs,
                        "Task generation timed out, using templates"
                    );
                    return template_tasks(context);
                }
            };

        match parse_task_response(&response) {
            Some(tasks) => {
                info!(task_count = tasks.len(), "Generated tasks from model response");
                tasks
            }
            None => {
                warn!("Model response contained no usable tasks, using templates");
                template_tasks(context)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::error::{PlanError, Result};

    struct CannedGenerator(String);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate_text(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate_text(&self, _prompt: &str) -> Result<String> {
            Err(PlanError::TextGeneration("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn test_uses_model_response_when_parseable() {
        let response = r#"[{"title": "Custom Task", "estimated_hours": 10}]"#.to_string();
        let generator = TaskGenerator::new(
            Arc::new(CannedGenerator(response)),
            GenerationConfig::default(),
        );

        let tasks = generator.generate(&ProjectContext::default(), &ResourceContext::default()).await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Custom Task");
    }

    #[tokio::test]
    async fn test_falls_back_on_failure() {
        let generator =
            TaskGenerator::new(Arc::new(FailingGenerator), GenerationConfig::default());
        let tasks = generator.generate(&ProjectContext::default(), &ResourceContext::default()).await;
        assert!(tasks.iter().any(|t| t.title == "Requirements Analysis"));
    }

    #[tokio::test]
    async fn test_falls_back_on_garbage() {
        let generator = TaskGenerator::new(
            Arc::new(CannedGenerator("no plan today".into())),
            GenerationConfig::default(),
        );
        let tasks = generator.generate(&ProjectContext::default(), &ResourceContext::default()).await;
        assert!(tasks.iter().any(|t| t.title == "Technical Architecture Design"));
    }

    #[tokio::test]
    async fn test_offline_uses_templates() {
        let generator = TaskGenerator::offline(GenerationConfig::default());
        let tasks = generator.generate(&ProjectContext::default(), &ResourceContext::default()).await;
        assert!(!tasks.is_empty());
        assert_eq!(tasks[0].title, "Requirements Analysis");
    }
}
