//! One-of-N selections: the FAQ accordion and the tab strip.
//!
//! Both close everything, then open the requested entry. The accordion
//! may end with nothing open; the tab strip always has one active pane.

/// FAQ entries where at most one answer is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// All answers hidden.
    pub fn new(len: usize) -> Self {
        Accordion { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the visible answer, if any.
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Question clicked: hide every answer, then show this one unless it
    /// was the one already showing.
    pub fn toggle(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        let open = if self.is_open(index) { None } else { Some(index) };
        Accordion { open, ..self }
    }
}

/// Tab strip with exactly one active pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tabs {
    len: usize,
    active: usize,
}

impl Tabs {
    /// First pane active. An empty strip is treated as a single pane.
    pub fn new(len: usize) -> Self {
        Tabs {
            len: len.max(1),
            active: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Tab clicked: it becomes the only active pane.
    pub fn select(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        Tabs {
            active: index,
            ..self
        }
    }

    pub fn next(self) -> Self {
        self.select((self.active + 1) % self.len)
    }

    pub fn prev(self) -> Self {
        self.select((self.active + self.len - 1) % self.len)
    }
}

// ============================================================================
// TESTS
// ============================================================================
