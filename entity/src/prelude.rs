pub use super::activity::Entity as Activity;
pub use super::admin::Entity as Admin;
pub use super::class::Entity as Class;
pub use super::member::Entity as Member;
pub use super::subscription::Entity as Subscription;
pub use super::super_admin::Entity as SuperAdmin;
pub use super::trainer::Entity as Trainer;
