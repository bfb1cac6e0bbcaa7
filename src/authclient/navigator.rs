/// Sends the user somewhere else, e.g. to the OAuth login page.
pub trait Navigator {
    fn navigate(&self, url: &str) -> Result<(), anyhow::Error>;
}

/// Opens urls in the system browser.
#[derive(Default)]
pub struct BrowserNavigator {}

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> Result<(), anyhow::Error> {
        open::that(url)?;
        Ok(())
    }
}

#[cfg(test)]
pub struct MockNavigator {
    pub tx: crossbeam::channel::Sender<String>,
    pub rx: crossbeam::channel::Receiver<String>,
    pub fail: bool,
}

#[cfg(test)]
impl Default for MockNavigator {
    fn default() -> Self {
        let (tx, rx) = crossbeam::channel::unbounded();
        Self {
            tx,
            rx,
            fail: false,
        }
    }
}

#[cfg(test)]
impl Navigator for MockNavigator {
    fn navigate(&self, url: &str) -> Result<(), anyhow::Error> {
        if self.fail {
            return Err(anyhow::anyhow!("mock navigation failure"));
        }
        self.tx.send(url.to_string()).map_err(|e| anyhow::anyhow!(e))
    }
}
