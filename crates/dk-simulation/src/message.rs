use std::collections::VecDeque;

/// Player-facing message log.
///
/// Lines may carry `[color=NAME]...[/color]` markup. The log stores it
/// verbatim; interpreting it is up to the renderer.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: VecDeque<String>,
    capacity: usize,
}

impl MessageLog {
    /// Create a log holding at most `capacity` lines (0 = unlimited).
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            capacity,
        }
    }

    /// Append a line, dropping the oldest ones past capacity.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push_back(message.into());
        if self.capacity > 0 {
            while self.messages.len() > self.capacity {
                self.messages.pop_front();
            }
        }
    }

    /// All lines, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().rev().map(String::as_str)
    }

    /// The `n` newest lines, newest first.
    pub fn recent(&self, n: usize) -> Vec<&str> {
        self.iter().take(n).collect()
    }

    /// The newest line.
    pub fn latest(&self) -> Option<&str> {
        self.messages.back().map(String::as_str)
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    /// Number of stored lines.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Line cap, 0 for unlimited.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_reads_newest_first() {
        let mut log = MessageLog::new(0);
        log.push("one");
        log.push("two");
        log.push("three");
        assert_eq!(log.recent(2), vec!["three", "two"]);
        assert_eq!(log.latest(), Some("three"));
    }

    #[test]
    fn log_drops_oldest_past_capacity() {
        let mut log = MessageLog::new(3);
        for i in 0..10 {
            log.push(format!("msg {i}"));
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["msg 9", "msg 8", "msg 7"]);
        assert!(!log.contains("msg 6"));
    }

    #[test]
    fn unlimited_log_keeps_everything() {
        let mut log = MessageLog::new(0);
        for i in 0..500 {
            log.push(format!("msg {i}"));
        }
        assert_eq!(log.len(), 500);
    }
}
