mod current_conditions;
mod forecast;
mod statistics;

pub use current_conditions::CurrentConditionsDisplay;
pub use forecast::{Forecast, ForecastDisplay};
pub use statistics::{KindStats, StatisticsDisplay, StatisticsSummary};
