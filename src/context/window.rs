use crate::providers::ChatMessage;
use std::collections::VecDeque;

/// One candidate/interviewer pair. Immutable once appended.
#[derive(Debug, Clone)]
pub struct Exchange {
    /// What the candidate said (transcribed or typed)
    pub candidate: String,
    /// The interviewer's raw response, tags included
    pub interviewer: String,
}

/// Fixed-capacity FIFO window over the most recent exchanges.
///
/// Capacity is set at construction and never changes. Appending at capacity
/// evicts the oldest exchange, so the window always holds the last N
/// exchanges in chronological order.
#[derive(Debug, Clone)]
pub struct ContextWindow {
    capacity: usize,
    exchanges: VecDeque<Exchange>,
}

impl ContextWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            exchanges: VecDeque::with_capacity(capacity),
        }
    }

    /// Append an exchange, evicting the oldest one if the window is full.
    /// A zero-capacity window retains nothing.
    pub fn add_exchange(&mut self, candidate: impl Into<String>, interviewer: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.exchanges.len() == self.capacity {
            self.exchanges.pop_front();
        }
        self.exchanges.push_back(Exchange {
            candidate: candidate.into(),
            interviewer: interviewer.into(),
        });
    }

    /// Replay the window as role-tagged chat messages, oldest exchange
    /// first, candidate before interviewer within each exchange.
    pub fn messages(&self) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.exchanges.len() * 2);
        for exchange in &self.exchanges {
            messages.push(ChatMessage::user(exchange.candidate.clone()));
            messages.push(ChatMessage::assistant(exchange.interviewer.clone()));
        }
        messages
    }

    pub fn exchange_count(&self) -> usize {
        self.exchanges.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.exchanges.clear();
    }

    pub fn exchanges(&self) -> impl Iterator<Item = &Exchange> {
        self.exchanges.iter()
    }
}
