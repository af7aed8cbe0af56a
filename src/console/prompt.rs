//! Console interaction ports.
//!
//! [`TerminalPrompt`] asks a numbered choice question on a line-based
//! terminal; [`DefaultChoice`] answers without asking.

use std::io::{self, BufRead, Write};

use crate::ports::InteractionPort;
use crate::resolver::name_from_label;
use crate::theme::{Tone, paint};

fn default_candidate(candidates: &[String], default: usize) -> io::Result<&String> {
    candidates.get(default).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "default choice {default} is out of range for {} candidate(s)",
                candidates.len()
            ),
        )
    })
}

// ============================================================================
// TerminalPrompt
// ============================================================================

/// Line-based choice prompt.
///
/// ```text
///  Which state machine would you like to know about? [order]:
///   [0] order	(App\Order - order)
///   [1] invoice	(App\Invoice - invoicing)
///  >
/// ```
///
/// An empty answer picks the default. An index, a full label or a bare graph
/// name picks that candidate. Anything else is rejected and the question is
/// asked again. End of input picks the default.
#[derive(Debug)]
pub struct TerminalPrompt<R: BufRead, W: Write> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Returns the output writer, mainly for inspecting what was asked.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(
        &mut self,
        question: &str,
        candidates: &[String],
        default_label: &str,
    ) -> io::Result<()> {
        let name = name_from_label(default_label);
        writeln!(self.output)?;
        writeln!(
            self.output,
            " {} [{}]:",
            paint(question, Tone::Question, self.color),
            paint(name, Tone::Accent, self.color)
        )?;
        for (index, candidate) in candidates.iter().enumerate() {
            let marker = format!("[{index}]");
            writeln!(
                self.output,
                "  {} {candidate}",
                paint(&marker, Tone::Accent, self.color)
            )?;
        }
        write!(self.output, " > ")?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> InteractionPort for TerminalPrompt<R, W> {
    fn choose_one(
        &mut self,
        question: &str,
        candidates: &[String],
        default: usize,
    ) -> io::Result<String> {
        let default_label = default_candidate(candidates, default)?.clone();

        loop {
            self.ask(question, candidates, &default_label)?;

            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                tracing::debug!("Prompt input closed, using default choice {default}");
                writeln!(self.output)?;
                return Ok(default_label);
            }

            let answer = answer.trim();
            if let Some(index) = match_answer(answer, candidates, default) {
                return Ok(candidates[index].clone());
            }

            let message = format!("Value \"{answer}\" is invalid");
            writeln!(self.output, " {}", paint(&message, Tone::Error, self.color))?;
        }
    }
}

/// Maps a typed answer to a candidate index.
///
/// # Returns
///
/// `Some(index)` for an empty answer (the default), an in-range index, an
/// exact label or an exact graph name; `None` otherwise.
#[must_use]
pub fn match_answer(answer: &str, candidates: &[String], default: usize) -> Option<usize> {
    if answer.is_empty() {
        return Some(default);
    }

    if let Ok(index) = answer.parse::<usize>()
        && index < candidates.len()
    {
        return Some(index);
    }

    candidates
        .iter()
        .position(|label| label == answer)
        .or_else(|| {
            candidates
                .iter()
                .position(|label| name_from_label(label) == answer)
        })
}

// ============================================================================
// DefaultChoice
// ============================================================================

/// Non-interactive port that always takes the default candidate.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultChoice;

impl InteractionPort for DefaultChoice {
    fn choose_one(
        &mut self,
        _question: &str,
        candidates: &[String],
        default: usize,
    ) -> io::Result<String> {
        default_candidate(candidates, default).cloned()
    }
}

// ============================================================================
// Tests
// ============================================================================
