pub mod debounce;
pub mod long_press;
pub mod snapshot;
pub mod store;

pub use debounce::{Button, Buttons, Debouncer, Edge, Position, Switch, Switches};
pub use long_press::LongPress;
pub use snapshot::Snapshot;
pub use store::Store;
