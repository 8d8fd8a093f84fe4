use fantoccini::{Client, ClientBuilder, error::NewSessionError};
use serde_json::json;

mod constants {
    macro_rules! env_or_default {
        ($name:expr, $default:expr) => {
            if let Some(s) = option_env!($name) {
                s
            } else {
                $default
            }
        };
    }

    pub const WEBDRIVER_URL: &str = env_or_default!("WEBDRIVER_URL", "http://localhost:9515");
}

/// Connect to the local chromedriver and start a session.
pub async fn get_driver(headless: bool) -> Result<Client, NewSessionError> {
    let mut builder = ClientBuilder::native();
    if headless {
        let mut caps = serde_json::Map::new();
        caps.insert(
            "goog:chromeOptions".to_owned(),
            json!({ "args": ["--headless=new", "--window-size=1920,1080"] }),
        );
        builder.capabilities(caps);
    }
    builder.connect(constants::WEBDRIVER_URL).await
}
