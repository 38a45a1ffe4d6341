/// Skills accordion. At most one category is open.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Accordion { len, open: None }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// `aria-expanded` for the header at `index`.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Clicking the open header closes it; clicking another closes the open one first.
    /// Out-of-range clicks are ignored.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return self.open;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        self.open
    }

    pub fn collapse_all(&mut self) {
        self.open = None;
    }
}
