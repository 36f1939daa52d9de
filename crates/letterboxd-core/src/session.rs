//! Browser session for client-rendered pages
//!
//! Letterboxd fills its poster grids and "where to watch" panel with
//! JavaScript, so pages are loaded in headless Chrome rather than fetched
//! with a plain HTTP client.

use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::BrowserOptions;
use crate::error::{Result, ScrapeError};
use crate::wait::{WaitPolicy, wait_until};

/// Something that can load a URL and hand back its rendered HTML
#[async_trait]
pub trait PageSource: Send {
    /// Navigate to `url`, wait for `ready_selector` to appear (bounded by
    /// `wait`) and return the page HTML.
    ///
    /// A render wait that times out is not an error; whatever has rendered
    /// so far is returned.
    ///
    /// # Errors
    /// `Navigation` if the page cannot be loaded or read
    async fn render(
        &mut self,
        url: &str,
        ready_selector: &str,
        wait: &WaitPolicy,
    ) -> Result<String>;
}

/// A running Chrome instance with a single reusable tab
///
/// Call [`BrowserSession::close`] when done. Dropping the session without
/// closing it still stops the event loop, and chromiumoxide kills the
/// child process on drop.
pub struct BrowserSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch Chrome and open a blank tab
    ///
    /// # Errors
    /// `Browser` if Chrome cannot be found or started
    pub async fn launch(options: &BrowserOptions) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .arg("--disable-dev-shm-usage")
            .arg(format!("--user-agent={}", options.user_agent));

        if !options.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &options.chrome_path {
            builder = builder.chrome_executable(path);
        }

        let config = builder.build().map_err(ScrapeError::Browser)?;

        let (browser, mut handler) = Browser::launch(config).await?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!(error = %e, "browser handler error");
                }
            }
            debug!("browser handler task ended");
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                handler_task.abort();
                return Err(e.into());
            }
        };

        info!(headless = options.headless, "browser session started");

        Ok(Self {
            browser,
            page,
            handler_task,
        })
    }

    /// Shut Chrome down and wait for the process to exit
    pub async fn close(mut self) -> Result<()> {
        let closed = self.browser.close().await;
        if let Err(e) = self.browser.wait().await {
            warn!(error = %e, "waiting for browser exit failed");
        }
        debug!("browser session closed");
        closed.map(|_| ()).map_err(ScrapeError::from)
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler_task.abort();
    }
}

#[async_trait]
impl PageSource for BrowserSession {
    async fn render(
        &mut self,
        url: &str,
        ready_selector: &str,
        wait: &WaitPolicy,
    ) -> Result<String> {
        debug!(url, "navigating");
        self.page
            .goto(url)
            .await
            .map_err(|e| ScrapeError::navigation(url, e))?;

        let page = &self.page;
        let ready = wait_until(wait, || async move {
            page.find_element(ready_selector).await.is_ok()
        })
        .await;

        if !ready {
            debug!(
                url,
                selector = ready_selector,
                timeout_ms = wait.timeout.as_millis() as u64,
                "render wait timed out, reading page as is"
            );
        }

        self.page
            .content()
            .await
            .map_err(|e| ScrapeError::navigation(url, e))
    }
}
