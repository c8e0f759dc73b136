mod command;
mod dashboard;
mod query;

pub use self::command::CardCommandService;
pub use self::dashboard::CardDashboardService;
pub use self::query::CardQueryService;
