mod synthesis;

pub use synthesis::synthesize_warehouse;
