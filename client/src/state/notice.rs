//! Banner notices raised outside of any form (e.g. session expiry).
//!
//! DESIGN
//! ======
//! One notice is visible at a time. Each shown notice bumps `seq` so an
//! auto-dismiss timer scheduled for an older notice cannot clear a newer one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Warning,
}

impl NoticeKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "notice--info",
            Self::Warning => "notice--warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Warning, message: message.into() }
    }
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
    pub seq: u64,
}

impl NoticeState {
    /// Replace the visible notice; returns the sequence number it was shown under.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.seq += 1;
        self.current = Some(notice);
        self.seq
    }

    /// Clear the notice if it is still the one shown under `seq`.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if self.seq != seq || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}
