mod command;
mod dashboard;
mod query;

pub use self::command::CardCommandRepository;
pub use self::dashboard::CardDashboardRepository;
pub use self::query::CardQueryRepository;
