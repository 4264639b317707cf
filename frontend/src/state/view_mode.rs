//! State machine for the start screen.
//!
//! Chooser → AuthoringSeed on "start document"; AuthoringSeed → Chooser on
//! back. Submitting a non-empty seed, or picking the conversational path
//! from the chooser, leaves the screen by handing a seed to the
//! document-creation flow.

use std::fmt;

use leptos::*;
use thiserror::Error;

/// Which panel the start screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Upload files or start a document
    #[default]
    Chooser,
    /// Free-text description of the document to write
    AuthoringSeed,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chooser => write!(f, "chooser"),
            Self::AuthoringSeed => write!(f, "authoring-seed"),
        }
    }
}

/// User actions on the start screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    StartDocument,
    Back,
    Submit(String),
    Converse,
}

impl fmt::Display for ViewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartDocument => write!(f, "start document"),
            Self::Back => write!(f, "back"),
            Self::Submit(_) => write!(f, "submit"),
            Self::Converse => write!(f, "converse"),
        }
    }
}

/// Result of a valid action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Stay on the screen, showing this mode
    Show(ViewMode),
    /// Leave the screen and create a document from this seed
    CreateDocument(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewModeError {
    #[error("Describe the document you want to write")]
    EmptySeed,

    #[error("Cannot {action} from {from}")]
    InvalidTransition { from: ViewMode, action: String },
}

impl ViewMode {
    pub fn transition(self, action: ViewAction) -> Result<Transition, ViewModeError> {
        match (self, action) {
            (Self::Chooser, ViewAction::StartDocument) => Ok(Transition::Show(Self::AuthoringSeed)),
            (Self::Chooser, ViewAction::Converse) => Ok(Transition::CreateDocument(String::new())),
            (Self::AuthoringSeed, ViewAction::Back) => Ok(Transition::Show(Self::Chooser)),
            (Self::AuthoringSeed, ViewAction::Submit(text)) => {
                let seed = text.trim();
                if seed.is_empty() {
                    Err(ViewModeError::EmptySeed)
                } else {
                    Ok(Transition::CreateDocument(seed.to_string()))
                }
            }
            (from, action) => Err(ViewModeError::InvalidTransition {
                from,
                action: action.to_string(),
            }),
        }
    }
}

/// Reactive holder of the current [`ViewMode`].
#[derive(Clone)]
pub struct ViewModeMachine {
    mode: RwSignal<ViewMode>,
    on_create_document: Callback<String>,
}

impl ViewModeMachine {
    pub fn new(on_create_document: Callback<String>) -> Self {
        Self {
            mode: create_rw_signal(ViewMode::default()),
            on_create_document,
        }
    }

    pub fn mode(&self) -> Signal<ViewMode> {
        self.mode.into()
    }

    pub fn current(&self) -> ViewMode {
        self.mode.get_untracked()
    }

    /// Apply `action`. Rejected actions leave the mode unchanged.
    ///
    /// Leaving the screen resets the mode to the chooser before handing the
    /// seed over.
    pub fn dispatch(&self, action: ViewAction) -> Result<(), ViewModeError> {
        let current = self.current();
        match current.transition(action) {
            Ok(Transition::Show(next)) => {
                log::debug!("View mode: {} → {}", current, next);
                self.mode.set(next);
                Ok(())
            }
            Ok(Transition::CreateDocument(seed)) => {
                log::info!("📝 Creating document (seed: {} chars)", seed.chars().count());
                self.mode.set(ViewMode::Chooser);
                self.on_create_document.call(seed);
                Ok(())
            }
            Err(e) => {
                log::warn!("⚠️ {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn machine() -> (ViewModeMachine, Rc<RefCell<Vec<String>>>) {
        let seeds = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seeds);
        let callback = Callback::new(move |seed: String| sink.borrow_mut().push(seed));
        (ViewModeMachine::new(callback), seeds)
    }

    #[test]
    fn test_transition_table() {
        use ViewMode::*;

        assert_eq!(
            Chooser.transition(ViewAction::StartDocument),
            Ok(Transition::Show(AuthoringSeed))
        );
        assert_eq!(
            AuthoringSeed.transition(ViewAction::Back),
            Ok(Transition::Show(Chooser))
        );
        assert_eq!(
            AuthoringSeed.transition(ViewAction::Submit("  a shop  ".into())),
            Ok(Transition::CreateDocument("a shop".into()))
        );
        assert_eq!(
            Chooser.transition(ViewAction::Converse),
            Ok(Transition::CreateDocument(String::new()))
        );

        assert!(matches!(
            Chooser.transition(ViewAction::Back),
            Err(ViewModeError::InvalidTransition { .. })
        ));
        assert!(matches!(
            Chooser.transition(ViewAction::Submit("text".into())),
            Err(ViewModeError::InvalidTransition { .. })
        ));
        assert!(matches!(
            AuthoringSeed.transition(ViewAction::StartDocument),
            Err(ViewModeError::InvalidTransition { .. })
        ));
        assert!(matches!(
            AuthoringSeed.transition(ViewAction::Converse),
            Err(ViewModeError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_seed_submission_flow() {
        let runtime = create_runtime();
        let (machine, seeds) = machine();
        assert_eq!(machine.current(), ViewMode::Chooser);

        machine.dispatch(ViewAction::StartDocument).unwrap();
        assert_eq!(machine.current(), ViewMode::AuthoringSeed);

        assert_eq!(
            machine.dispatch(ViewAction::Submit("   ".into())),
            Err(ViewModeError::EmptySeed)
        );
        assert_eq!(machine.current(), ViewMode::AuthoringSeed);
        assert!(seeds.borrow().is_empty());

        machine
            .dispatch(ViewAction::Submit("build me a shop".into()))
            .unwrap();
        assert_eq!(*seeds.borrow(), vec!["build me a shop".to_string()]);
        runtime.dispose();
    }

    #[test]
    fn test_back_and_converse() {
        let runtime = create_runtime();
        let (machine, seeds) = machine();

        machine.dispatch(ViewAction::StartDocument).unwrap();
        machine.dispatch(ViewAction::Back).unwrap();
        assert_eq!(machine.current(), ViewMode::Chooser);

        machine.dispatch(ViewAction::Converse).unwrap();
        assert_eq!(*seeds.borrow(), vec![String::new()]);
        assert_eq!(machine.current(), ViewMode::Chooser);
        runtime.dispose();
    }
}
