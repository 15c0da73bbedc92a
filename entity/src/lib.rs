pub mod allocation;
pub mod charge;
pub mod payment;
pub mod room;
pub mod student_profile;

pub mod prelude;
