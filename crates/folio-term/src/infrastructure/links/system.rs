use async_trait::async_trait;
use tokio::process::Command;

use crate::domain::models::Link;
use crate::domain::models::LinkError;
use crate::domain::models::LinkOpener;
use crate::domain::models::LinkOpenerName;

/// Hands links to the desktop's default handler.
pub struct SystemOpener {
    program: Option<&'static str>,
    args: &'static [&'static str],
}

impl Default for SystemOpener {
    fn default() -> SystemOpener {
        #[allow(unused_mut, unused_assignments)]
        let mut opener = SystemOpener {
            program: None,
            args: &[],
        };

        #[cfg(target_os = "macos")]
        {
            opener.program = Some("open");
        }

        #[cfg(target_os = "windows")]
        {
            opener.program = Some("cmd");
            opener.args = &["/C", "start", ""];
        }

        #[cfg(any(
            target_os = "linux",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd"
        ))]
        {
            opener.program = Some("xdg-open");
        }

        return opener;
    }
}

#[async_trait]
impl LinkOpener for SystemOpener {
    fn name(&self) -> LinkOpenerName {
        LinkOpenerName::System
    }

    async fn open(&self, link: Link) -> Result<(), LinkError> {
        let Some(program) = self.program else {
            return Err(LinkError::Unsupported);
        };

        let status = Command::new(program)
            .args(self.args)
            .arg(link.url())
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .await
            .map_err(|source| LinkError::Launch {
                program: program.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(LinkError::ExitStatus {
                program: program.to_string(),
                status: status.code().unwrap_or(-1),
            });
        }

        Ok(())
    }
}
