//! Question/answer transcript kept by the session

pub const PENDING_ANSWER: &str = "Loading answer...";
pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't process your question. Please try again.";

/// Identifier of a transcript entry. Strictly increasing for the lifetime of
/// a transcript, including across `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerStatus {
    Pending,
    Resolved(String),
    Failed,
}

impl AnswerStatus {
    pub fn display_text(&self) -> &str {
        match self {
            AnswerStatus::Pending => PENDING_ANSWER,
            AnswerStatus::Resolved(answer) => answer,
            AnswerStatus::Failed => FALLBACK_ANSWER,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AnswerStatus::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaEntry {
    pub id: EntryId,
    pub question: String,
    pub status: AnswerStatus,
}

impl QaEntry {
    pub fn answer_text(&self) -> &str {
        self.status.display_text()
    }
}

/// Append-only list of exchanges; only an entry's status changes after
/// insertion, and only from `Pending`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<QaEntry>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_question(&mut self, question: impl Into<String>) -> EntryId {
        self.next_id += 1;
        let id = EntryId(self.next_id);
        self.entries.push(QaEntry {
            id,
            question: question.into(),
            status: AnswerStatus::Pending,
        });
        id
    }

    /// Returns false when the entry is gone or already settled.
    pub fn resolve(&mut self, id: EntryId, answer: impl Into<String>) -> bool {
        self.settle(id, AnswerStatus::Resolved(answer.into()))
    }

    pub fn fail(&mut self, id: EntryId) -> bool {
        self.settle(id, AnswerStatus::Failed)
    }

    fn settle(&mut self, id: EntryId, status: AnswerStatus) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) if entry.status.is_pending() => {
                entry.status = status;
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: EntryId) -> Option<&QaEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[QaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&QaEntry> {
        self.entries.last()
    }

    pub fn has_pending(&self) -> bool {
        self.entries.iter().any(|e| e.status.is_pending())
    }

    /// Drops every entry but keeps the id counter moving forward.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
