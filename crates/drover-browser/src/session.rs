use crate::{Error, Result};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

/// Browser flags a session applies unless the caller overrides them
pub const DEFAULT_BROWSER_FLAGS: &[&str] = &["--headless", "--disable-gpu"];

const DEFAULT_PORT: u16 = 9515;

/// Configures and spawns a chromedriver-backed automation session
pub struct SessionBuilder {
    driver_path: PathBuf,
    port: u16,
    browser_flags: Vec<String>,
}

impl SessionBuilder {
    /// Create a builder for the chromedriver executable at `driver_path`
    pub fn new(driver_path: PathBuf) -> Self {
        Self {
            driver_path,
            port: DEFAULT_PORT,
            browser_flags: DEFAULT_BROWSER_FLAGS
                .iter()
                .map(|flag| flag.to_string())
                .collect(),
        }
    }

    /// Override the port chromedriver listens on
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Replace the default browser flags
    pub fn browser_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.browser_flags = flags.into_iter().map(Into::into).collect();
        self
    }

    /// Spawn the chromedriver process and return the session handle
    pub fn spawn(&self) -> Result<DriverSession> {
        tracing::debug!(
            "Spawning chromedriver at {} on port {}",
            self.driver_path.display(),
            self.port
        );

        let child = Command::new(&self.driver_path)
            .args(self.build_args())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Session(format!("Failed to launch chromedriver: {e}")))?;

        Ok(DriverSession {
            child,
            port: self.port,
            browser_flags: self.browser_flags.clone(),
        })
    }

    /// Build chromedriver command-line arguments
    fn build_args(&self) -> Vec<String> {
        vec![format!("--port={}", self.port)]
    }
}

/// A running chromedriver process plus the browser flags negotiated for it.
///
/// WebDriver clients pass the flags along when creating a browser session
/// against [`DriverSession::endpoint`].
#[derive(Debug)]
pub struct DriverSession {
    child: Child,
    port: u16,
    browser_flags: Vec<String>,
}

impl DriverSession {
    /// HTTP endpoint WebDriver clients should connect to
    pub fn endpoint(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Flags to apply to browser instances started through this session
    pub fn browser_flags(&self) -> &[String] {
        &self.browser_flags
    }

    /// OS process id of the chromedriver process
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Kill the chromedriver process and wait for it to exit
    pub fn shutdown(mut self) -> Result<()> {
        self.child.kill()?;
        self.child.wait()?;
        Ok(())
    }
}
