//! Concrete client stores behind the [`ClientRepository`] port.
//!
//! [`ClientRepository`]: crate::domain::ports::ClientRepository

pub mod in_memory;
pub mod key_value;

use crate::domain::ports::ClientRepositoryBox;
use clap::ValueEnum;
use in_memory::InMemoryClientStore;
use key_value::KeyValueClientStore;

/// Which client store to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StoreKind {
    /// Append-only list, insertion order.
    #[default]
    InMemory,
    /// Map keyed by client id, last write wins.
    KeyValue,
}

impl StoreKind {
    pub fn build(self) -> ClientRepositoryBox {
        match self {
            StoreKind::InMemory => Box::new(InMemoryClientStore::new()),
            StoreKind::KeyValue => Box::new(KeyValueClientStore::new()),
        }
    }
}
