//! Terminal front-end for the wizard.
//!
//! Renders the current step and turns menu choices into wizard events. It reads
//! state only through `Wizard::session()` and never keeps its own copy.

pub mod clipboard;

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Select};
use thiserror::Error;

use crate::catalog::{missing_required, FieldKind, GOALS, TONES};
use crate::wizard::{Step, Wizard, WizardEvent, WizardSession};
use clipboard::ClipboardWriter;

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("Prompt failed: {0}")]
    Prompt(#[from] DialoguerError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputsAction {
    Continue,
    Edit,
    Back,
}

impl InputsAction {
    fn label(self) -> &'static str {
        match self {
            InputsAction::Continue => "Continue to Tone Selection",
            InputsAction::Edit => "Edit inputs",
            InputsAction::Back => "Back",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToneAction {
    Generate,
    ChangeTone,
    Back,
}

impl ToneAction {
    const ALL: [ToneAction; 3] = [ToneAction::Generate, ToneAction::ChangeTone, ToneAction::Back];

    fn label(self) -> &'static str {
        match self {
            ToneAction::Generate => "Generate Post",
            ToneAction::ChangeTone => "Choose a different tone",
            ToneAction::Back => "Back",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultAction {
    Copy,
    StartOver,
    Back,
    Quit,
}

impl ResultAction {
    fn label(self) -> &'static str {
        match self {
            ResultAction::Copy => "Copy to Clipboard",
            ResultAction::StartOver => "Create a New Post",
            ResultAction::Back => "Back",
            ResultAction::Quit => "Quit",
        }
    }
}

/// Number, title and subtitle shown above each step.
fn step_header(step: Step) -> (u8, &'static str, &'static str) {
    match step {
        Step::Goal => (
            1,
            "Choose Your Content Goal",
            "What kind of impact do you want to make with this post?",
        ),
        Step::Inputs => (
            2,
            "Provide Key Inputs",
            "Give the AI the essential 'ingredients' for your post.",
        ),
        Step::Tone => (
            3,
            "Select a Tone of Voice",
            "How do you want to sound to your audience?",
        ),
        Step::Result => (4, "Your LinkedIn Post", "Review it, copy it, or start over."),
    }
}

fn inputs_actions(session: &WizardSession) -> Vec<InputsAction> {
    if session.can_continue() {
        vec![InputsAction::Continue, InputsAction::Edit, InputsAction::Back]
    } else {
        vec![InputsAction::Edit, InputsAction::Back]
    }
}

fn result_actions(session: &WizardSession) -> Vec<ResultAction> {
    let mut actions = Vec::with_capacity(4);
    if session.can_copy() {
        actions.push(ResultAction::Copy);
    }
    actions.extend([ResultAction::StartOver, ResultAction::Back, ResultAction::Quit]);
    actions
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt helpers
// ────────────────────────────────────────────────────────────────────────────

/// `None` when the user cancels (Esc, q, or Ctrl-C).
fn select(prompt: &str, items: &[&str], default: usize) -> Result<Option<usize>, TerminalError> {
    match Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact_opt()
    {
        Ok(choice) => Ok(choice),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn read_text(label: &str, initial: &str) -> Result<Option<String>, TerminalError> {
    match Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Long-text values are edited on one line with `\n` standing in for line breaks.
fn to_line(kind: FieldKind, value: &str) -> String {
    match kind {
        FieldKind::ShortText => value.to_string(),
        FieldKind::LongText => value.replace('\n', "\\n"),
    }
}

fn from_line(kind: FieldKind, line: String) -> String {
    match kind {
        FieldKind::ShortText => line,
        FieldKind::LongText => line.replace("\\n", "\n"),
    }
}

fn print_header(step: Step) {
    let (number, title, subtitle) = step_header(step);
    println!();
    println!("Step {number}: {title}");
    println!("{subtitle}");
    println!();
}

// ────────────────────────────────────────────────────────────────────────────
// Steps
// ────────────────────────────────────────────────────────────────────────────

/// Drives the wizard until the user quits.
pub async fn run(
    wizard: &mut Wizard,
    clipboard: &mut dyn ClipboardWriter,
) -> Result<(), TerminalError> {
    loop {
        let flow = match wizard.session().step {
            Step::Goal => goal_step(wizard)?,
            Step::Inputs => inputs_step(wizard)?,
            Step::Tone => tone_step(wizard).await?,
            Step::Result => result_step(wizard, clipboard)?,
        };
        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

fn goal_step(wizard: &mut Wizard) -> Result<Flow, TerminalError> {
    print_header(Step::Goal);

    let mut items: Vec<&str> = GOALS.iter().map(|g| g.label()).collect();
    items.push("Quit");
    let default = wizard
        .session()
        .selected_goal
        .and_then(|goal| GOALS.iter().position(|g| *g == goal))
        .unwrap_or(0);

    match select("Content goal", &items, default)? {
        Some(i) if i < GOALS.len() => {
            wizard.dispatch(WizardEvent::SelectGoal(GOALS[i]));
            Ok(Flow::Continue)
        }
        _ => Ok(Flow::Quit),
    }
}

fn inputs_step(wizard: &mut Wizard) -> Result<Flow, TerminalError> {
    print_header(Step::Inputs);

    for field in wizard.session().input_fields() {
        let current = wizard
            .session()
            .inputs
            .get(field.key)
            .map(|v| to_line(field.kind, v))
            .unwrap_or_default();
        let hint = match field.kind {
            FieldKind::ShortText => field.placeholder.to_string(),
            FieldKind::LongText => format!("{} (use \\n for line breaks)", field.placeholder),
        };
        println!("  {hint}");

        let Some(value) = read_text(field.label, &current)? else {
            return Ok(Flow::Quit);
        };
        wizard.dispatch(WizardEvent::ChangeInput {
            key: field.key.to_string(),
            value: from_line(field.kind, value),
        });
    }

    let session = wizard.session();
    if !session.can_continue() {
        if let Some(goal) = session.selected_goal {
            let missing: Vec<&str> = missing_required(goal, &session.inputs)
                .iter()
                .map(|f| f.label)
                .collect();
            println!("Still needed: {}", missing.join(", "));
        }
    }

    let actions = inputs_actions(session);
    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
    match select("Next", &labels, 0)?.map(|i| actions[i]) {
        Some(InputsAction::Continue) => {
            wizard.dispatch(WizardEvent::Continue);
        }
        Some(InputsAction::Edit) => {}
        Some(InputsAction::Back) => {
            wizard.dispatch(WizardEvent::Back);
        }
        None => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

async fn tone_step(wizard: &mut Wizard) -> Result<Flow, TerminalError> {
    print_header(Step::Tone);

    let mut items: Vec<&str> = TONES.iter().map(|t| t.label()).collect();
    items.push("Back");
    let default = wizard
        .session()
        .selected_tone
        .and_then(|tone| TONES.iter().position(|t| *t == tone))
        .unwrap_or(0);

    match select("Tone", &items, default)? {
        Some(i) if i < TONES.len() => {
            wizard.dispatch(WizardEvent::SelectTone(TONES[i]));
        }
        Some(_) => {
            wizard.dispatch(WizardEvent::Back);
            return Ok(Flow::Continue);
        }
        None => return Ok(Flow::Quit),
    }

    let labels: Vec<&str> = ToneAction::ALL.iter().map(|a| a.label()).collect();
    match select("Next", &labels, 0)?.map(|i| ToneAction::ALL[i]) {
        Some(ToneAction::Generate) => {
            println!("Crafting...");
            wizard.generate().await;
            if let (Step::Tone, Some(error)) =
                (wizard.session().step, wizard.session().last_error.as_deref())
            {
                println!("{error}");
            }
        }
        Some(ToneAction::ChangeTone) => {}
        Some(ToneAction::Back) => {
            wizard.dispatch(WizardEvent::Back);
        }
        None => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn result_step(
    wizard: &mut Wizard,
    clipboard: &mut dyn ClipboardWriter,
) -> Result<Flow, TerminalError> {
    print_header(Step::Result);

    let session = wizard.session();
    match session.last_error.as_deref() {
        Some(error) => println!("Error: {error}"),
        None => {
            println!("────────────────────────────────────────");
            println!("{}", session.generated_post);
            println!("────────────────────────────────────────");
        }
    }

    let actions = result_actions(session);
    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
    match select("Next", &labels, 0)?.map(|i| actions[i]) {
        Some(ResultAction::Copy) => match clipboard.write_text(&wizard.session().generated_post) {
            Ok(()) => println!("Copied!"),
            Err(e) => {
                tracing::warn!("{e}");
                println!("Clipboard unavailable; copy the post above manually.");
            }
        },
        Some(ResultAction::StartOver) => {
            wizard.dispatch(WizardEvent::StartOver);
        }
        Some(ResultAction::Back) => {
            wizard.dispatch(WizardEvent::Back);
        }
        Some(ResultAction::Quit) | None => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
