use core::time::Duration;

use fantoccini::{Client as Driver, Locator, error::CmdError};
use scraper::{Html, Selector};

pub mod extract;

pub const SEARCH_URL: &str = "https://bulletin.uga.edu/Course/Index";

const PREFIX_ENTRY: &str = "courseSubjectNav";
const SUFFIX_ENTRY: &str = "courseNumberNav";
const SEARCH_BUTTON: &str = "btnSearchPrefixCourseNav";
const RESULTS_PANE: &str = "paginationContent";

pub struct Config {
    /// Bound on the wait for the results pane.
    pub timeout: Duration,
    /// Total tries per lookup. One by default; retries are opt-in.
    pub attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(12),
            attempts: 1,
        }
    }
}

pub struct Context {
    pub driver: Driver,
    pub cfg: Config,
    pub sel_results: Selector,
}

impl Context {
    #[must_use]
    pub fn new(driver: Driver, cfg: Config) -> Self {
        Self {
            driver,
            cfg,
            sel_results: Selector::parse(&format!("#{RESULTS_PANE}")).unwrap(),
        }
    }
}

/// Outcome of one course lookup.
#[derive(Debug)]
pub enum Description {
    Found(String),
    NotFound,
    Error(CmdError),
}

impl Description {
    /// Render to the plain string surface: the description text itself, or
    /// one of the two fixed placeholder strings.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Found(text) => text,
            Self::NotFound => "Description not found".to_owned(),
            Self::Error(_) => "Error retrieving description".to_owned(),
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Search the bulletin for one course and pull its description out of the
/// results pane. Never fails outward: every driver error ends up as
/// [`Description::Error`] after a log line naming the course.
pub async fn fetch_description(prefix: &str, suffix: &str, ctx: &Context) -> Description {
    let mut attempt = 0;
    loop {
        attempt += 1;
        match attempt_once(prefix, suffix, ctx).await {
            Ok(Some(text)) => return Description::Found(text),
            Ok(None) => return Description::NotFound,
            Err(e) => {
                tracing::warn!(target: "bulletin", "({prefix} {suffix}) attempt #{attempt} err: {e:?}");
                if attempt >= ctx.cfg.attempts {
                    return Description::Error(e);
                }
            }
        }
    }
}

async fn attempt_once(
    prefix: &str,
    suffix: &str,
    ctx: &Context,
) -> Result<Option<String>, CmdError> {
    ctx.driver.goto(SEARCH_URL).await?;

    let prefix_entry = ctx.driver.find(Locator::Id(PREFIX_ENTRY)).await?;
    let suffix_entry = ctx.driver.find(Locator::Id(SUFFIX_ENTRY)).await?;
    let button = ctx.driver.find(Locator::Id(SEARCH_BUTTON)).await?;

    prefix_entry.send_keys(prefix).await?;
    suffix_entry.send_keys(suffix).await?;

    // The search button sits inside a collapsed nav bar, where an element
    // click would fail the interactability check. Click it from script.
    ctx.driver
        .execute("arguments[0].click();", vec![serde_json::to_value(&button)?])
        .await?;

    ctx.driver
        .wait()
        .at_most(ctx.cfg.timeout)
        .for_element(Locator::Id(RESULTS_PANE))
        .await?;

    // Extraction runs against a static snapshot, not live session elements.
    let page = ctx.driver.source().await?;
    let doc = Html::parse_document(&page);

    Ok(extract::description_from_page(&doc, &ctx.sel_results))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_site_behavior() {
        let cfg = Config::default();
        assert_eq!(cfg.timeout, Duration::from_secs(12));
        assert_eq!(cfg.attempts, 1);
    }

    #[test]
    fn sentinel_rendering() {
        let found = Description::Found("An intensive study.".to_owned());
        assert!(found.is_found());
        assert_eq!(found.into_text(), "An intensive study.");

        assert_eq!(Description::NotFound.into_text(), "Description not found");
        assert_eq!(
            Description::Error(CmdError::WaitTimeout).into_text(),
            "Error retrieving description"
        );
    }
}
