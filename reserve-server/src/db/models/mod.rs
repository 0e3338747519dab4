//! Database Models
//!
//! Entity structs persisted in SurrealDB plus their create/update payloads

pub mod dining_table;
pub mod reservation;
pub mod serde_helpers;

pub use dining_table::{DiningTable, DiningTableCreate, DiningTableUpdate};
pub use reservation::{
    ConfirmedReservation, Reservation, ReservationCreate, ReservationStage, Shift,
};
