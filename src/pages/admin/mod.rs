//! Admin-module pages: overview plus the CRUD screens.

pub mod classes;
pub mod overview;
pub mod rooms;
pub mod students;
pub mod teachers;
