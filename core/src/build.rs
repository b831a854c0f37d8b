//! Hand-off of finished definitions to the host.
//!
//! The loader only assembles records. Turning them into playable characters
//! is the host's job, done through a [`CharacterBuilder`]. One character
//! failing to build never stops the others.

use anyhow::Result;
use roster_shared::CharacterDefinition;
use serde::Serialize;

/// Host hook that turns a definition into a playable character.
///
/// # Example
///
/// ```ignore
/// struct EngineBuilder { /* engine handles */ }
///
/// impl CharacterBuilder for EngineBuilder {
///     fn build(&mut self, data: &CharacterDefinition) -> anyhow::Result<()> {
///         // spawn prefab, swap sprites, apply stats...
///         Ok(())
///     }
/// }
/// ```
pub trait CharacterBuilder {
    fn build(&mut self, data: &CharacterDefinition) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildFailure {
    pub name: String,
    pub message: String,
}

/// Outcome of [`build_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Labels of the characters that built, in input order.
    pub built: Vec<String>,
    pub failed: Vec<BuildFailure>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Build every definition, isolating failures per character.
pub fn build_all<'a, I>(builder: &mut dyn CharacterBuilder, definitions: I) -> BuildReport
where
    I: IntoIterator<Item = &'a CharacterDefinition>,
{
    let mut report = BuildReport::default();

    for data in definitions {
        let name = data.label().to_string();
        tracing::info!("Building {}", name);
        match builder.build(data) {
            Ok(()) => {
                tracing::info!("Built {}", name);
                report.built.push(name);
            }
            Err(err) => {
                tracing::error!("Failed to build {}: {:#}", name, err);
                report.failed.push(BuildFailure {
                    name,
                    message: format!("{:#}", err),
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    /// Fails for any character named "Broken".
    #[derive(Default)]
    struct RecordingBuilder {
        seen: Vec<String>,
    }

    impl CharacterBuilder for RecordingBuilder {
        fn build(&mut self, data: &CharacterDefinition) -> Result<()> {
            self.seen.push(data.label().to_string());
            if data.name.as_deref() == Some("Broken") {
                bail!("missing prefab");
            }
            Ok(())
        }
    }

    fn named(name: &str) -> CharacterDefinition {
        let mut data = CharacterDefinition::default();
        data.name = Some(name.to_string());
        data
    }

    #[test]
    fn test_failures_are_isolated() {
        let definitions = vec![named("Ace"), named("Broken"), named("Mia")];
        let mut builder = RecordingBuilder::default();

        let report = build_all(&mut builder, &definitions);

        assert_eq!(builder.seen, vec!["Ace", "Broken", "Mia"]);
        assert_eq!(report.built, vec!["Ace", "Mia"]);
        assert_eq!(
            report.failed,
            vec![BuildFailure {
                name: "Broken".to_string(),
                message: "missing prefab".to_string(),
            }]
        );
        assert!(!report.is_success());
    }

    #[test]
    fn test_empty_input() {
        let mut builder = RecordingBuilder::default();
        let report = build_all(&mut builder, &Vec::<CharacterDefinition>::new());
        assert!(report.is_success());
        assert!(report.built.is_empty());
    }
}
