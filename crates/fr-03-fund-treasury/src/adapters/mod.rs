pub mod bindings;
pub mod clock;

pub use bindings::LedgerBindings;
pub use clock::SystemTimeSource;
