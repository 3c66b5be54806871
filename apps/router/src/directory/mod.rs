// Directory backend: owns the employee identity table and answers POST /tasks/send.
// Identity resolution (name → id) lives here and nowhere else.

pub mod handlers;
pub mod search;
pub mod seed;
