//! The four-step post-crafting flow.
//!
//! `session` holds the state and the pure transition function. `Wizard` owns one
//! session plus the gateway and runs the single suspending operation (generation).

pub mod session;

pub use session::{
    transition, Command, GenerationTicket, Step, Transition, WizardEvent, WizardSession,
    INCOMPLETE_SELECTION_MESSAGE,
};

use tracing::info;

use crate::generation::gateway::GenerationGateway;

pub struct Wizard {
    session: WizardSession,
    gateway: GenerationGateway,
}

impl Wizard {
    pub fn new(gateway: GenerationGateway) -> Self {
        Self {
            session: WizardSession::default(),
            gateway,
        }
    }

    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    /// Applies an event and returns any command it produced.
    pub fn dispatch(&mut self, event: WizardEvent) -> Option<Command> {
        let Transition { session, command } = transition(&self.session, event);
        self.session = session;
        command
    }

    /// Runs a generation for the current selections.
    ///
    /// Never fails: provider and validation errors land in `session().last_error`.
    pub async fn generate(&mut self) {
        let Some(Command::Generate { ticket, request }) =
            self.dispatch(WizardEvent::Generate(GenerationTicket::new()))
        else {
            return;
        };

        info!("Wizard requesting generation");
        let result = self.gateway.generate(request).await;
        self.dispatch(WizardEvent::GenerationFinished { ticket, result });
    }
}
