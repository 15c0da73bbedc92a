pub use super::allocation::Entity as Allocation;
pub use super::charge::Entity as Charge;
pub use super::payment::Entity as Payment;
pub use super::room::Entity as Room;
pub use super::student_profile::Entity as StudentProfile;
