//! Persistence for sourcebook records.
//!
//! Repositories own identity: they hand out storage ids to currency groups,
//! their denominations, treasures and races when those are first stored.
//! Two backends share the same table logic:
//! - [`InMemoryRepository`] for tests and one-shot runs
//! - [`FileRepository`] which snapshots each table to a bincode file
//!
//! [`codec`] converts dictionary-valued fields to and from JSON columns.

pub mod codec;
mod error;
mod file;
mod memory;
mod record;
mod table;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileRepository;
pub use memory::InMemoryRepository;
pub use record::Record;
pub use traits::Repository;
