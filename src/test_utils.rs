//! Shared test utilities and Mother pattern factories.
//!
//! Reusable graph fixtures plus recording doubles for the interaction port
//! and the output sink.
#![allow(dead_code)]

use std::io;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::domain::{
    CallableRef, CallbackDefinition, CallbackGroup, Callbacks, Configuration, GraphDefinition,
    TransitionDefinition, Transitions, ValueList,
};
use crate::ports::{InteractionPort, OutputSink};
use crate::render::Table;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TransitionMother;

impl TransitionMother {
    #[must_use]
    pub fn single(from: &[&str], to: &str) -> TransitionDefinition {
        TransitionDefinition {
            from: ValueList::new(from.iter().copied()),
            to: to.to_string(),
        }
    }

    /// `count` transitions `step-0..` moving `s0 -> s1 -> ...`.
    #[must_use]
    pub fn chain(count: usize) -> Transitions {
        (0..count)
            .map(|index| {
                let from = format!("s{index}");
                let to = format!("s{}", index + 1);
                (format!("step-{index}"), Self::single(&[from.as_str()], &to))
            })
            .collect()
    }
}

pub struct CallbackMother;

impl CallbackMother {
    #[must_use]
    pub fn literal(callable: &str) -> CallbackDefinition {
        CallbackDefinition {
            on: None,
            callable: CallableRef::literal(callable),
            args: None,
        }
    }

    #[must_use]
    pub fn scoped(on: &str, callable: CallableRef, args: &[&str]) -> CallbackDefinition {
        CallbackDefinition {
            on: Some(ValueList::from(on)),
            callable,
            args: (!args.is_empty()).then(|| ValueList::new(args.iter().copied())),
        }
    }

    #[must_use]
    pub fn inline() -> CallbackDefinition {
        CallbackDefinition {
            on: None,
            callable: CallableRef::Inline,
            args: None,
        }
    }
}

pub struct GraphMother;

impl GraphMother {
    /// Two states and a single `pay` transition, no callbacks.
    #[must_use]
    pub fn order() -> GraphDefinition {
        let transitions: Transitions = [(
            "pay".to_string(),
            TransitionMother::single(&["new"], "paid"),
        )]
        .into_iter()
        .collect();

        GraphDefinition {
            class: "App\\Order".to_string(),
            graph: "order".to_string(),
            states: vec!["new".to_string(), "paid".to_string()],
            transitions,
            callbacks: None,
        }
    }

    /// Invoice graph with a multi-source transition and two callback types.
    #[must_use]
    pub fn with_callbacks() -> GraphDefinition {
        let transitions: Transitions = [
            (
                "pay".to_string(),
                TransitionMother::single(&["new"], "paid"),
            ),
            (
                "cancel".to_string(),
                TransitionMother::single(&["new", "paid"], "cancelled"),
            ),
        ]
        .into_iter()
        .collect();

        let mut guard = CallbackGroup::new();
        guard.insert(
            "can-cancel".to_string(),
            CallbackMother::scoped("cancel", CallableRef::literal("is_cancellable"), &[]),
        );

        let mut after = CallbackGroup::new();
        after.insert(
            "mark-paid".to_string(),
            CallbackMother::scoped(
                "pay",
                CallableRef::named_pair("OrderService", "markPaid"),
                &["object", "event"],
            ),
        );
        after.insert("audit".to_string(), CallbackMother::inline());

        let mut callbacks = Callbacks::new();
        callbacks.insert("guard".to_string(), guard);
        callbacks.insert("after".to_string(), after);

        GraphDefinition {
            class: "App\\Invoice".to_string(),
            graph: "invoicing".to_string(),
            states: vec!["new".to_string(), "paid".to_string(), "cancelled".to_string()],
            transitions,
            callbacks: Some(callbacks),
        }
    }
}

pub struct ConfigMother;

impl ConfigMother {
    #[must_use]
    pub fn order_only() -> Configuration {
        Configuration::new([("order".to_string(), GraphMother::order())])
    }

    #[must_use]
    pub fn order_and_invoice() -> Configuration {
        Configuration::new([
            ("order".to_string(), GraphMother::order()),
            ("invoice".to_string(), GraphMother::with_callbacks()),
        ])
    }
}

// ============================================================================
// Port Doubles
// ============================================================================

/// One recorded `choose_one` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCall {
    pub question: String,
    pub candidates: Vec<String>,
    pub default: usize,
}

/// Interaction port returning a fixed answer, or failing, and recording calls.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answer: Option<String>,
    pub calls: Vec<PromptCall>,
}

impl ScriptedPrompt {
    #[must_use]
    pub fn answering(label: &str) -> Self {
        Self {
            answer: Some(label.to_string()),
            calls: Vec::new(),
        }
    }

    /// A prompt whose input is already closed.
    #[must_use]
    pub fn failing() -> Self {
        Self::default()
    }
}

impl InteractionPort for ScriptedPrompt {
    fn choose_one(
        &mut self,
        question: &str,
        candidates: &[String],
        default: usize,
    ) -> io::Result<String> {
        self.calls.push(PromptCall {
            question: question.to_string(),
            candidates: candidates.to_vec(),
            default,
        });
        self.answer
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no answer scripted"))
    }
}

/// Everything an [`OutputSink`] received, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Table(Table),
    Info(String),
    Error(String),
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    #[must_use]
    pub fn tables(&self) -> Vec<&Table> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Table(table) => Some(table),
                _ => None,
            })
            .collect()
    }
}

impl OutputSink for RecordingSink {
    fn table(&mut self, table: &Table) -> io::Result<()> {
        self.events.push(SinkEvent::Table(table.clone()));
        Ok(())
    }

    fn info(&mut self, message: &str) -> io::Result<()> {
        self.events.push(SinkEvent::Info(message.to_string()));
        Ok(())
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        self.events.push(SinkEvent::Error(message.to_string()));
        Ok(())
    }
}

// ============================================================================
// Filesystem
// ============================================================================

/// Writes `content` to `name` inside `dir` and returns its path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let file = dir.path().join(name);
    std::fs::write(&file, content).unwrap();
    file
}
