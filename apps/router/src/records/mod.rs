// Records backend: salary, hierarchy and schedule tables behind POST /hr-tasks/send.
// Rows are keyed by employee id or role; names are resolved by the directory only.

pub mod handlers;
pub mod search;
pub mod seed;
