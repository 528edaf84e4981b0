use crate::store::ButtonStore;

pub mod logger;

pub use self::logger::LogObserver;

/// Something that has to redraw or forward state whenever the view mutates its store.
pub trait Observer {
    fn notify(&mut self, store: &ButtonStore);
}
