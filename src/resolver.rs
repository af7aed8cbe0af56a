//! Graph resolution: decide which configured graph to report on.
//!
//! A graph is either named up front or picked through an [`InteractionPort`].
//! Selection and lookup are separate steps so callers can echo an
//! interactive choice before it is validated.

use crate::constants::{CHOOSE_GRAPH_QUESTION, DEFAULT_CHOICE};
use crate::domain::{Configuration, GraphDefinition, ResolveError};
use crate::ports::InteractionPort;

// ============================================================================
// Types
// ============================================================================

/// The graph name to look up, and how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub name: String,
    /// `true` when the name came from the interactive prompt.
    pub chosen: bool,
}

/// A graph that exists in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedGraph<'a> {
    pub name: &'a str,
    pub definition: &'a GraphDefinition,
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolves the graph to report on.
///
/// # Arguments
///
/// * `config` - Every configured graph
/// * `requested` - Graph name given by the caller, if any
/// * `interact` - Asked only when no name was given
///
/// # Errors
///
/// - [`ResolveError::NoGraphsConfigured`] when `config` is empty
/// - [`ResolveError::GraphNotConfigured`] when the name is not a key
/// - [`ResolveError::Prompt`] when the prompt fails
pub fn resolve<'a>(
    config: &'a Configuration,
    requested: Option<&str>,
    interact: &mut dyn InteractionPort,
) -> Result<ResolvedGraph<'a>, ResolveError> {
    let selection = select_graph_name(config, requested, interact)?;
    lookup(config, &selection.name)
}

/// Picks a graph name without checking that it is configured.
///
/// # Errors
///
/// Returns [`ResolveError::NoGraphsConfigured`] for an empty configuration,
/// before any prompt, and [`ResolveError::Prompt`] if the prompt fails.
pub fn select_graph_name(
    config: &Configuration,
    requested: Option<&str>,
    interact: &mut dyn InteractionPort,
) -> Result<Selection, ResolveError> {
    if config.is_empty() {
        return Err(ResolveError::NoGraphsConfigured);
    }

    if let Some(name) = requested {
        return Ok(Selection {
            name: name.to_string(),
            chosen: false,
        });
    }

    let candidates = choice_labels(config);
    let label = interact
        .choose_one(CHOOSE_GRAPH_QUESTION, &candidates, DEFAULT_CHOICE)
        .map_err(ResolveError::Prompt)?;

    let name = name_from_label(&label).to_string();
    tracing::debug!("Graph '{name}' chosen from {} candidate(s)", candidates.len());

    Ok(Selection { name, chosen: true })
}

/// Finds a graph by exact name.
///
/// # Errors
///
/// Returns [`ResolveError::GraphNotConfigured`] when `name` is not a key.
pub fn lookup<'a>(
    config: &'a Configuration,
    name: &str,
) -> Result<ResolvedGraph<'a>, ResolveError> {
    config
        .get_key_value(name)
        .map(|(key, definition)| ResolvedGraph {
            name: key.as_str(),
            definition,
        })
        .ok_or_else(|| ResolveError::not_configured(name))
}

// ============================================================================
// Choice Labels
// ============================================================================

/// Builds `"<name>\t(<class> - <graph>)"` labels in configuration order.
#[must_use]
pub fn choice_labels(config: &Configuration) -> Vec<String> {
    config
        .iter()
        .map(|(name, definition)| definition.choice_label(name))
        .collect()
}

/// Extracts the graph name from a choice label: everything before the first
/// tab, or the whole label when it has none.
#[must_use]
pub fn name_from_label(label: &str) -> &str {
    label.split_once('\t').map_or(label, |(name, _)| name)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ConfigMother, GraphMother, ScriptedPrompt};
    use rstest::*;

    #[test]
    fn test_empty_config_never_prompts() {
        let config = Configuration::default();
        let mut prompt = ScriptedPrompt::answering("order\t(Order - order)");

        for requested in [None, Some("order")] {
            let err = resolve(&config, requested, &mut prompt).unwrap_err();
            assert!(matches!(err, ResolveError::NoGraphsConfigured));
        }
        assert!(prompt.calls.is_empty());
    }

    #[test]
    fn test_named_graph_resolves_without_prompt() {
        let config = ConfigMother::order_and_invoice();
        let mut prompt = ScriptedPrompt::answering("unused");

        let resolved = resolve(&config, Some("order"), &mut prompt).unwrap();

        assert_eq!(resolved.name, "order");
        assert_eq!(resolved.definition, &GraphMother::order());
        assert!(prompt.calls.is_empty());
    }

    #[rstest]
    #[case::unknown("missing")]
    #[case::case_mismatch("Order")]
    #[case::empty("")]
    fn test_unknown_name_is_not_configured(#[case] name: &str) {
        let config = ConfigMother::order_and_invoice();
        let mut prompt = ScriptedPrompt::answering("unused");

        match resolve(&config, Some(name), &mut prompt).unwrap_err() {
            ResolveError::GraphNotConfigured { name: missing } => assert_eq!(missing, name),
            other => panic!("Expected GraphNotConfigured, got {other:?}"),
        }
    }

    #[test]
    fn test_prompt_receives_labels_and_default() {
        let config = ConfigMother::order_and_invoice();
        let mut prompt = ScriptedPrompt::answering("invoice\t(App\\Invoice - invoicing)");

        let resolved = resolve(&config, None, &mut prompt).unwrap();

        assert_eq!(resolved.name, "invoice");
        assert_eq!(prompt.calls.len(), 1);
        let call = &prompt.calls[0];
        assert_eq!(call.question, "Which state machine would you like to know about?");
        assert_eq!(
            call.candidates,
            [
                "order\t(App\\Order - order)",
                "invoice\t(App\\Invoice - invoicing)"
            ]
        );
        assert_eq!(call.default, 0);
    }

    #[test]
    fn test_selection_marks_interactive_choice() {
        let config = ConfigMother::order_and_invoice();
        let mut prompt = ScriptedPrompt::answering("order\t(App\\Order - order)");

        let chosen = select_graph_name(&config, None, &mut prompt).unwrap();
        assert_eq!(chosen, Selection { name: "order".into(), chosen: true });

        let given = select_graph_name(&config, Some("invoice"), &mut prompt).unwrap();
        assert_eq!(given, Selection { name: "invoice".into(), chosen: false });
    }

    #[test]
    fn test_chosen_label_for_unknown_graph() {
        let config = ConfigMother::order_and_invoice();
        let mut prompt = ScriptedPrompt::answering("ghost\t(Ghost - ghost)");

        let err = resolve(&config, None, &mut prompt).unwrap_err();
        assert!(matches!(err, ResolveError::GraphNotConfigured { .. }));
    }

    #[test]
    fn test_prompt_failure_is_surfaced() {
        let config = ConfigMother::order_and_invoice();
        let mut prompt = ScriptedPrompt::failing();

        let err = resolve(&config, None, &mut prompt).unwrap_err();
        assert!(matches!(err, ResolveError::Prompt(_)));
    }

    #[rstest]
    #[case::label("alpha\t(Foo - bar)", "alpha")]
    #[case::several_tabs("alpha\tbeta\tgamma", "alpha")]
    #[case::no_tab("alpha", "alpha")]
    #[case::leading_tab("\t(Foo - bar)", "")]
    fn test_name_from_label(#[case] label: &str, #[case] expected: &str) {
        assert_eq!(name_from_label(label), expected);
    }

    #[test]
    fn test_labels_round_trip_to_names() {
        let config = ConfigMother::order_and_invoice();
        let labels = choice_labels(&config);
        let names: Vec<&str> = labels.iter().map(|label| name_from_label(label)).collect();
        assert_eq!(names, ["order", "invoice"]);
    }
}
