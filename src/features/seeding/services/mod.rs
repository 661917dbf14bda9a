mod seeding_service;

pub use seeding_service::SeedingService;
