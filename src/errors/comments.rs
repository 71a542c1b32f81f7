use super::errors::ErrorImpl;

/// Comment matching state of a scan. Comments do not nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentState {
    Normal,
    InComment { opened_at: u32 },
    Terminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentEvent {
    Open,
    Close,
    Eof,
}

impl CommentState {
    /// Applies `event` seen on `line`. Returns the next state and, when the
    /// event is malformed, the error kind with the line it is reported on.
    pub fn on(self, event: CommentEvent, line: u32) -> (CommentState, Option<(ErrorImpl, u32)>) {
        match (self, event) {
            (CommentState::Normal, CommentEvent::Open) => {
                (CommentState::InComment { opened_at: line }, None)
            }
            (CommentState::Normal, CommentEvent::Close) => {
                (CommentState::Normal, Some((ErrorImpl::UnmatchedComment, line)))
            }
            (CommentState::Normal, CommentEvent::Eof) => (CommentState::Terminal, None),
            // a second opener is comment text
            (state @ CommentState::InComment { .. }, CommentEvent::Open) => (state, None),
            (CommentState::InComment { .. }, CommentEvent::Close) => (CommentState::Normal, None),
            (CommentState::InComment { opened_at }, CommentEvent::Eof) => (
                CommentState::Terminal,
                Some((ErrorImpl::UnclosedComment, opened_at)),
            ),
            (CommentState::Terminal, _) => (CommentState::Terminal, None),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, CommentState::Terminal)
    }
}
