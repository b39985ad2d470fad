//! Modal stack for managing overlays
//!
//! Only the top modal receives input; modals render bottom to top.

/// Represents a modal overlay that can be displayed on top of the page
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Help dialog showing all keyboard shortcuts
    Help,
    /// Placeholder notice shown when a game is launched
    LaunchNotice { message: String },
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(Modal::LaunchNotice {
            message: "Loading Chess".to_string(),
        });
        assert_eq!(
            stack.top(),
            Some(&Modal::LaunchNotice {
                message: "Loading Chess".to_string()
            })
        );

        assert!(matches!(stack.pop(), Some(Modal::LaunchNotice { .. })));
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert!(stack.is_empty());
    }
}
