use std::cell::RefCell;
use std::collections::VecDeque;

/// Blocking user dialogs: a yes/no confirmation and a fire-and-forget notice.
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
    fn notify(&self, message: &str);
}

/// Replays queued confirmation answers and records every message shown.
/// Confirms by default once the queue runs dry.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<bool>>,
    confirmations: RefCell<Vec<String>>,
    notices: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.borrow().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }

    pub fn last_notice(&self) -> Option<String> {
        self.notices.borrow().last().cloned()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirmations.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(true)
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}
