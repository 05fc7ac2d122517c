//! Database access layer for Stagefront
//!
//! Three tables: venues, artists, shows. Shows carry foreign keys to both
//! venues and artists with ON DELETE CASCADE, so removing a venue or an
//! artist removes its bookings. Foreign key enforcement is switched on per
//! connection via PRAGMA.

mod init;
mod models;

pub use init::{init_database, init_in_memory};
pub use models::{Artist, Show, Venue};
