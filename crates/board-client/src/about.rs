use tracing::error;

use board_types::api::AboutUsContent;

const FALLBACK_ERROR: &str = "Failed to fetch content";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AboutUsView {
    Loading,
    Error(String),
    Loaded(AboutUsContent),
}

pub struct AboutUsPage {
    server_hostname: String,
    view: AboutUsView,
}

impl AboutUsPage {
    pub fn new(server_hostname: impl Into<String>) -> Self {
        Self {
            server_hostname: server_hostname.into(),
            view: AboutUsView::Loading,
        }
    }

    pub fn view(&self) -> &AboutUsView {
        &self.view
    }

    /// Issues the single GET for this mount. Once the page has left
    /// `Loading` it never fetches again.
    pub async fn mount(&mut self, client: &reqwest::Client) {
        if self.view != AboutUsView::Loading {
            return;
        }

        self.view = match fetch_content(client, &self.server_hostname).await {
            Ok(content) => AboutUsView::Loaded(content),
            Err(message) => {
                error!("Error fetching content: {}", message);
                AboutUsView::Error(message)
            }
        };
    }

    pub fn render(&self) -> String {
        match &self.view {
            AboutUsView::Loading => "Loading...".to_string(),
            AboutUsView::Error(message) => format!("Error: {}", message),
            AboutUsView::Loaded(content) => format!(
                "{}\n\n{}\n\n[image: {}]",
                content.title, content.description, content.image_url
            ),
        }
    }
}

async fn fetch_content(client: &reqwest::Client, server_hostname: &str) -> Result<AboutUsContent, String> {
    let url = format!("{}/aboutus", server_hostname.trim_end_matches('/'));

    let response = client.get(&url).send().await.map_err(|e| describe(&e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("Request failed with status code {}", status.as_u16()));
    }

    let bytes = response.bytes().await.map_err(|e| describe(&e))?;
    serde_json::from_slice(&bytes).map_err(|e| describe(&e))
}

fn describe(e: &dyn std::error::Error) -> String {
    let message = e.to_string();
    if message.is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        message
    }
}
