use crate::observer::Observer;
use crate::store::ButtonStore;

pub struct LogObserver {
    changes: usize,
}

impl LogObserver {
    pub fn new() -> Self {
        Self { changes: 0 }
    }

    pub fn changes(&self) -> usize {
        self.changes
    }
}

impl Observer for LogObserver {
    fn notify(&mut self, store: &ButtonStore) {
        self.changes += 1;

        log::debug!(
            "Buttons changed [change: {}, selection: {:?}, colors: {:?}]",
            self.changes,
            store.selection(),
            store.buttons().iter().map(|b| b.color.as_str()).collect::<Vec<_>>()
        );
    }
}
