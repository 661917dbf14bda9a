pub mod places;
pub mod seeding;
pub mod users;
pub mod warehouses;
