pub mod criteria;
pub mod employee;
pub mod hr;
pub mod routing;
pub mod task;
