//! Domain model: participants, expenses, money value objects, settlements and
//! the ports the application layer talks to.

pub mod expense;
pub mod money;
pub mod participant;
pub mod ports;
pub mod report;
pub mod settlement;
