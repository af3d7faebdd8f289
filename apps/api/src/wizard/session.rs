//! Wizard session and its pure transition function.
//!
//! Steps: Goal → Inputs → Tone → Result. `transition` never performs I/O; when a
//! generation should start it hands back a `Command` for the driver to execute.

use serde::Serialize;
use uuid::Uuid;

use crate::catalog::{
    field_spec, fields_for, missing_required, ContentGoal, InputFieldSpec, Tone, UserInputs,
};
use crate::generation::gateway::{GenerationError, GenerationRequest};

pub const INCOMPLETE_SELECTION_MESSAGE: &str = "Please fill in all required fields.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Goal,
    Inputs,
    Tone,
    Result,
}

/// Identifies one generation attempt so late results can be matched or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GenerationTicket(Uuid);

impl GenerationTicket {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GenerationTicket {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WizardSession {
    pub step: Step,
    pub selected_goal: Option<ContentGoal>,
    pub inputs: UserInputs,
    pub selected_tone: Option<Tone>,
    pub generated_post: String,
    pub last_error: Option<String>,
    /// Ticket of the in-flight generation, if any.
    pub pending: Option<GenerationTicket>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    SelectGoal(ContentGoal),
    ChangeInput { key: String, value: String },
    Continue,
    SelectTone(Tone),
    Generate(GenerationTicket),
    GenerationFinished {
        ticket: GenerationTicket,
        result: Result<String, GenerationError>,
    },
    Back,
    StartOver,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Generate {
        ticket: GenerationTicket,
        request: GenerationRequest,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub session: WizardSession,
    pub command: Option<Command>,
}

impl Transition {
    fn stay(session: WizardSession) -> Self {
        Self {
            session,
            command: None,
        }
    }
}

impl WizardSession {
    /// Fields for the selected goal, empty before a goal is chosen.
    pub fn input_fields(&self) -> &'static [InputFieldSpec] {
        self.selected_goal.map(fields_for).unwrap_or(&[])
    }

    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// True when every required field of the selected goal is filled in.
    pub fn inputs_complete(&self) -> bool {
        match self.selected_goal {
            Some(goal) => missing_required(goal, &self.inputs).is_empty(),
            None => false,
        }
    }

    pub fn can_continue(&self) -> bool {
        self.step == Step::Inputs && !self.is_generating() && self.inputs_complete()
    }

    pub fn can_generate(&self) -> bool {
        self.step == Step::Tone
            && !self.is_generating()
            && self.selected_tone.is_some()
            && self.inputs_complete()
    }

    /// Nothing to copy after a failure.
    pub fn can_copy(&self) -> bool {
        self.step == Step::Result && self.last_error.is_none() && !self.generated_post.is_empty()
    }

    fn generation_request(&self) -> Option<GenerationRequest> {
        if !self.inputs_complete() {
            return None;
        }
        Some(GenerationRequest::new(
            self.selected_goal?,
            self.inputs.clone(),
            self.selected_tone?,
        ))
    }
}

/// Applies one event. Events that are not valid for the current step leave the
/// session unchanged.
pub fn transition(session: &WizardSession, event: WizardEvent) -> Transition {
    let mut next = session.clone();

    // Controls are disabled while a generation is outstanding.
    if next.is_generating()
        && !matches!(
            event,
            WizardEvent::GenerationFinished { .. } | WizardEvent::StartOver
        )
    {
        return Transition::stay(next);
    }

    match (next.step, event) {
        (_, WizardEvent::StartOver) => Transition::stay(WizardSession::default()),

        (Step::Goal, WizardEvent::SelectGoal(goal)) => {
            next.selected_goal = Some(goal);
            next.inputs.clear();
            next.step = Step::Inputs;
            Transition::stay(next)
        }

        (Step::Inputs, WizardEvent::ChangeInput { key, value }) => {
            if let Some(goal) = next.selected_goal {
                if field_spec(goal, &key).is_some() {
                    next.inputs.insert(key, value);
                }
            }
            Transition::stay(next)
        }

        (Step::Inputs, WizardEvent::Continue) => {
            if next.can_continue() {
                next.step = Step::Tone;
            }
            Transition::stay(next)
        }

        (Step::Tone, WizardEvent::SelectTone(tone)) => {
            next.selected_tone = Some(tone);
            Transition::stay(next)
        }

        (Step::Tone, WizardEvent::Generate(ticket)) => match next.generation_request() {
            Some(request) => {
                next.last_error = None;
                next.generated_post.clear();
                next.pending = Some(ticket);
                Transition {
                    session: next,
                    command: Some(Command::Generate { ticket, request }),
                }
            }
            None => {
                next.last_error = Some(INCOMPLETE_SELECTION_MESSAGE.to_string());
                Transition::stay(next)
            }
        },

        (_, WizardEvent::GenerationFinished { ticket, result }) => {
            if next.pending != Some(ticket) {
                tracing::warn!("Discarding stale generation result");
                return Transition::stay(next);
            }
            next.pending = None;
            match result {
                Ok(post) => {
                    next.generated_post = post;
                    next.last_error = None;
                }
                Err(e) => {
                    next.generated_post.clear();
                    next.last_error = Some(e.to_string());
                }
            }
            next.step = Step::Result;
            Transition::stay(next)
        }

        (Step::Inputs, WizardEvent::Back) => {
            next.step = Step::Goal;
            Transition::stay(next)
        }
        (Step::Tone, WizardEvent::Back) => {
            next.step = Step::Inputs;
            Transition::stay(next)
        }
        (Step::Result, WizardEvent::Back) => {
            next.step = Step::Tone;
            Transition::stay(next)
        }

        _ => Transition::stay(next),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GOALS;
    use crate::generation::gateway::PROVIDER_FAILURE_MESSAGE;

    fn apply(session: &WizardSession, event: WizardEvent) -> WizardSession {
        transition(session, event).session
    }

    fn input(key: &str, value: &str) -> WizardEvent {
        WizardEvent::ChangeInput {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    fn at_tone(goal: ContentGoal, values: &[(&str, &str)]) -> WizardSession {
        let mut s = apply(&WizardSession::default(), WizardEvent::SelectGoal(goal));
        for (k, v) in values {
            s = apply(&s, input(k, v));
        }
        let s = apply(&s, WizardEvent::Continue);
        assert_eq!(s.step, Step::Tone);
        s
    }

    fn article_at_tone() -> WizardSession {
        at_tone(
            ContentGoal::ArticleShare,
            &[("url", "https://x.com/a"), ("takeaway", "80% haven't adopted this")],
        )
    }

    #[test]
    fn test_selecting_goal_always_clears_inputs() {
        for goal in GOALS {
            let mut s = article_at_tone();
            s = apply(&s, WizardEvent::Back);
            s = apply(&s, WizardEvent::Back);
            assert_eq!(s.step, Step::Goal);
            assert!(!s.inputs.is_empty());

            let s = apply(&s, WizardEvent::SelectGoal(goal));
            assert_eq!(s.step, Step::Inputs);
            assert_eq!(s.selected_goal, Some(goal));
            assert!(s.inputs.is_empty(), "inputs leaked into {goal:?}");
        }
    }

    #[test]
    fn test_continue_disabled_iff_required_field_empty() {
        for goal in GOALS {
            let fields = fields_for(goal);
            let mut s = apply(&WizardSession::default(), WizardEvent::SelectGoal(goal));
            assert!(!s.can_continue());

            for (i, f) in fields.iter().enumerate() {
                s = apply(&s, input(f.key, "filled"));
                let remaining_required = fields[i + 1..].iter().any(|f| f.required);
                assert_eq!(s.can_continue(), !remaining_required, "{goal:?} after {}", f.key);
            }
        }
    }

    #[test]
    fn test_continue_blocked_leaves_step() {
        let s = apply(
            &WizardSession::default(),
            WizardEvent::SelectGoal(ContentGoal::PersonalStory),
        );
        let s = apply(&s, input("situation", "Project failed"));
        let s = apply(&s, WizardEvent::Continue);
        assert_eq!(s.step, Step::Inputs);
    }

    #[test]
    fn test_whitespace_only_required_value_allows_continue() {
        let s = apply(
            &WizardSession::default(),
            WizardEvent::SelectGoal(ContentGoal::Milestone),
        );
        let s = apply(&s, input("achievement", "   "));
        assert!(s.can_continue());

        let s = apply(&s, input("achievement", ""));
        assert!(!s.can_continue());
    }

    #[test]
    fn test_engaging_question_continues_without_stance() {
        let s = apply(
            &WizardSession::default(),
            WizardEvent::SelectGoal(ContentGoal::EngagingQuestion),
        );
        let s = apply(&s, input("topic", "Remote work"));
        assert!(s.can_continue());
        let s = apply(&s, WizardEvent::Continue);
        assert_eq!(s.step, Step::Tone);
        let s = apply(&s, WizardEvent::SelectTone(Tone::Casual));
        assert!(s.can_generate());
    }

    #[test]
    fn test_unknown_input_key_is_ignored() {
        let s = apply(
            &WizardSession::default(),
            WizardEvent::SelectGoal(ContentGoal::Milestone),
        );
        let s = apply(&s, input("url", "https://x.com"));
        assert!(s.inputs.is_empty());
    }

    #[test]
    fn test_tone_reselection_stays_on_step() {
        let s = apply(&article_at_tone(), WizardEvent::SelectTone(Tone::Casual));
        let s = apply(&s, WizardEvent::SelectTone(Tone::Technical));
        assert_eq!(s.step, Step::Tone);
        assert_eq!(s.selected_tone, Some(Tone::Technical));
    }

    #[test]
    fn test_generate_without_tone_is_rejected_locally() {
        let t = transition(&article_at_tone(), WizardEvent::Generate(GenerationTicket::new()));
        assert!(t.command.is_none());
        assert_eq!(t.session.step, Step::Tone);
        assert_eq!(
            t.session.last_error.as_deref(),
            Some(INCOMPLETE_SELECTION_MESSAGE)
        );
        assert!(!t.session.is_generating());
    }

    #[test]
    fn test_generate_emits_command_with_snapshot() {
        let s = apply(&article_at_tone(), WizardEvent::SelectTone(Tone::Technical));
        let ticket = GenerationTicket::new();
        let t = transition(&s, WizardEvent::Generate(ticket));

        assert_eq!(t.session.pending, Some(ticket));
        assert!(t.session.is_generating());
        match t.command {
            Some(Command::Generate {
                ticket: sent,
                request,
            }) => {
                assert_eq!(sent, ticket);
                assert_eq!(request.goal, Some(ContentGoal::ArticleShare));
                assert_eq!(request.tone, Some(Tone::Technical));
                assert_eq!(
                    request.inputs.unwrap().get("url").map(String::as_str),
                    Some("https://x.com/a")
                );
            }
            None => panic!("expected a generate command"),
        }
    }

    #[test]
    fn test_second_generate_while_pending_is_ignored() {
        let s = apply(&article_at_tone(), WizardEvent::SelectTone(Tone::Technical));
        let first = GenerationTicket::new();
        let s = apply(&s, WizardEvent::Generate(first));
        let t = transition(&s, WizardEvent::Generate(GenerationTicket::new()));
        assert!(t.command.is_none());
        assert_eq!(t.session.pending, Some(first));

        let t = transition(&s, WizardEvent::Back);
        assert_eq!(t.session.step, Step::Tone);
    }

    #[test]
    fn test_success_moves_to_result_with_post() {
        let s = apply(&article_at_tone(), WizardEvent::SelectTone(Tone::Technical));
        let ticket = GenerationTicket::new();
        let s = apply(&s, WizardEvent::Generate(ticket));
        let s = apply(
            &s,
            WizardEvent::GenerationFinished {
                ticket,
                result: Ok("Post text".to_string()),
            },
        );

        assert_eq!(s.step, Step::Result);
        assert_eq!(s.generated_post, "Post text");
        assert!(s.last_error.is_none());
        assert!(!s.is_generating());
        assert!(s.can_copy());
    }

    #[test]
    fn test_failure_moves_to_result_with_error_and_no_copy() {
        let s = apply(&article_at_tone(), WizardEvent::SelectTone(Tone::Technical));
        let ticket = GenerationTicket::new();
        let s = apply(&s, WizardEvent::Generate(ticket));
        let s = apply(
            &s,
            WizardEvent::GenerationFinished {
                ticket,
                result: Err(GenerationError::Provider),
            },
        );

        assert_eq!(s.step, Step::Result);
        assert_eq!(s.last_error.as_deref(), Some(PROVIDER_FAILURE_MESSAGE));
        assert!(s.generated_post.is_empty());
        assert!(!s.can_copy());
    }

    #[test]
    fn test_stale_result_after_start_over_is_discarded() {
        let s = apply(&article_at_tone(), WizardEvent::SelectTone(Tone::Technical));
        let stale = GenerationTicket::new();
        let s = apply(&s, WizardEvent::Generate(stale));
        let s = apply(&s, WizardEvent::StartOver);
        assert_eq!(s, WizardSession::default());

        let s = apply(
            &s,
            WizardEvent::GenerationFinished {
                ticket: stale,
                result: Ok("late".to_string()),
            },
        );
        assert_eq!(s, WizardSession::default());
    }

    #[test]
    fn test_stale_result_does_not_hijack_new_generation() {
        let s = apply(&article_at_tone(), WizardEvent::SelectTone(Tone::Technical));
        let stale = GenerationTicket::new();
        let s = apply(&s, WizardEvent::Generate(stale));
        let s = apply(&s, WizardEvent::StartOver);

        let s = apply(&s, WizardEvent::SelectGoal(ContentGoal::Milestone));
        let s = apply(&s, input("achievement", "10k customers"));
        let s = apply(&s, WizardEvent::Continue);
        let s = apply(&s, WizardEvent::SelectTone(Tone::Inspirational));
        let current = GenerationTicket::new();
        let s = apply(&s, WizardEvent::Generate(current));

        let s = apply(
            &s,
            WizardEvent::GenerationFinished {
                ticket: stale,
                result: Ok("late".to_string()),
            },
        );
        assert_eq!(s.step, Step::Tone);
        assert_eq!(s.pending, Some(current));
    }

    #[test]
    fn test_back_navigation_preserves_data() {
        let s = apply(&article_at_tone(), WizardEvent::SelectTone(Tone::Technical));
        let ticket = GenerationTicket::new();
        let s = apply(&s, WizardEvent::Generate(ticket));
        let s = apply(
            &s,
            WizardEvent::GenerationFinished {
                ticket,
                result: Ok("Post".to_string()),
            },
        );

        let s = apply(&s, WizardEvent::Back);
        assert_eq!(s.step, Step::Tone);
        assert_eq!(s.selected_tone, Some(Tone::Technical));

        let s = apply(&s, WizardEvent::Back);
        assert_eq!(s.step, Step::Inputs);
        let s = apply(&s, WizardEvent::Back);
        assert_eq!(s.step, Step::Goal);
        assert_eq!(s.selected_goal, Some(ContentGoal::ArticleShare));
        assert_eq!(s.inputs.len(), 2);

        let s = apply(&s, WizardEvent::Back);
        assert_eq!(s.step, Step::Goal);
    }

    #[test]
    fn test_start_over_from_result_is_initial_session() {
        let s = apply(&article_at_tone(), WizardEvent::SelectTone(Tone::Technical));
        let ticket = GenerationTicket::new();
        let s = apply(&s, WizardEvent::Generate(ticket));
        let s = apply(
            &s,
            WizardEvent::GenerationFinished {
                ticket,
                result: Err(GenerationError::EmptyResponse),
            },
        );
        let s = apply(&s, WizardEvent::StartOver);

        assert_eq!(s, WizardSession::default());
        assert_eq!(
            serde_json::to_string(&s).unwrap(),
            serde_json::to_string(&WizardSession::default()).unwrap()
        );
    }

    #[test]
    fn test_events_for_other_steps_are_ignored() {
        let s = WizardSession::default();
        assert_eq!(apply(&s, WizardEvent::Continue), s);
        assert_eq!(apply(&s, WizardEvent::SelectTone(Tone::Casual)), s);
        assert_eq!(apply(&s, input("topic", "x")), s);
    }
}
