use croner::{
    Cron,
    parser::{CronParser, Seconds},
};

pub trait CronExt {
    /// Converts string cron pattern to `Cron` instance.
    fn parse_pattern(pattern: impl AsRef<str>) -> anyhow::Result<Cron>;
}

impl CronExt for Cron {
    /// Converts a string cron pattern to `Cron` instance.
    fn parse_pattern(pattern: impl AsRef<str>) -> anyhow::Result<Cron> {
        Ok(CronParser::builder()
            // Schedules come from Quartz-style clients, so the seconds part is mandatory.
            .seconds(Seconds::Required)
            // require both day-of-month and day-of-week to match (Quartz Mode)
            .dom_and_dow(true)
            .build()
            .parse(pattern.as_ref())?)
    }
}
