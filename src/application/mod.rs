mod usage;

pub use usage::UsageService;
