use journal_archive_config::Config;
use journal_archive_engine::{
    ArchiveSession, DataSource, LoadError, LoadState, PaperLinks, ParseOptions, io,
};
use std::thread;
use std::time::Duration;

/// Everything needed to fetch and parse the archive once
#[derive(Debug, Clone)]
pub struct LoadSettings {
    pub source: DataSource,
    pub options: ParseOptions,
    pub links: PaperLinks,
    pub attempts: u32,
    pub retry_delay: Duration,
}

impl LoadSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            source: DataSource::parse(&config.data_source),
            options: ParseOptions {
                delimiter: config.delimiter,
            },
            links: PaperLinks::new(config.papers_base.clone()),
            attempts: config.fetch_retries.max(1),
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        }
    }
}

/// Load the archive, retrying failed network fetches with a fixed delay
pub fn load_session(settings: &LoadSettings) -> Result<ArchiveSession, LoadError> {
    let attempts = settings.attempts.max(1);
    let mut state = LoadState::Idle;

    for attempt in 1..=attempts {
        state.begin();
        log::info!(
            "Loading articles from {} (attempt {attempt}/{attempts})",
            settings.source
        );
        let result = io::load_articles(&settings.source, &settings.options)
            .map(|parsed| ArchiveSession::new(parsed.records, settings.links.clone()));
        state.finish(result);

        let Some(error) = state.error() else {
            break;
        };
        if !error.is_transient() {
            log::error!("Load failed: {error}");
            break;
        }
        if attempt == attempts {
            log::error!("Giving up after {attempts} attempts: {error}");
            break;
        }
        log::warn!(
            "Load failed: {error}; retrying in {}ms",
            settings.retry_delay.as_millis()
        );
        thread::sleep(settings.retry_delay);
    }

    state
        .into_result()
        .unwrap_or_else(|| Err(LoadError::Io(std::io::Error::other("load never started"))))
}
