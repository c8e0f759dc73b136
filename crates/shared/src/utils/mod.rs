mod currency;
mod date;
mod logs;
mod shutdown;

pub use self::currency::{deserialize_amount, format_currency, parse_currency};
pub use self::date::{deserialize_display_date, format_display_date, parse_display_date};
pub use self::logs::Logger;
pub use self::shutdown::shutdown_signal;
