use crate::colors::ColorScheme;
use musigraph_core::{Authorizer, MusigraphError, Result};
use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Opens the authorization page and waits for the operator to press Enter.
/// There is no timeout: the run stays blocked until input arrives.
pub struct ConsoleAuthorizer<'a, R: BufRead> {
    input: R,
    colors: &'a ColorScheme,
    launch_browser: bool,
}

impl<'a, R: BufRead> ConsoleAuthorizer<'a, R> {
    pub fn new(input: R, colors: &'a ColorScheme) -> Self {
        Self {
            input,
            colors,
            launch_browser: true,
        }
    }

    pub fn without_browser(mut self) -> Self {
        self.launch_browser = false;
        self
    }
}

impl<R: BufRead> Authorizer for ConsoleAuthorizer<'_, R> {
    fn authorize(&mut self, url: &str) -> Result<()> {
        if self.launch_browser && !open_in_browser(url) {
            tracing::warn!("could not launch a browser for the authorization page");
        }

        println!("🔑 Authorize musigraph to read your Last.fm account:");
        println!("   {}", self.colors.url(url));
        print!("Press Enter once you have granted access... ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(MusigraphError::Authorization(
                "input closed before authorization was confirmed".to_string(),
            ));
        }

        Ok(())
    }
}

fn open_in_browser(url: &str) -> bool {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else {
        Command::new("xdg-open")
    };

    command
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .is_ok()
}
