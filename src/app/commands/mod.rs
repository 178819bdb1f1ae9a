pub mod generate;
pub mod interactive;
pub mod replay;

use std::path::PathBuf;

use tracing::debug;

use crate::app::AppContext;
use crate::domain::{AppError, Answer, RenderedConfig, config_file_name};
use crate::ports::{ConfigStore, Console};

/// Write a rendered config and report where it went.
pub(crate) fn write_config<C: Console, S: ConfigStore>(
    ctx: &AppContext<C, S>,
    answer: &Answer,
    rendered: &RenderedConfig,
) -> Result<PathBuf, AppError> {
    ctx.store().ensure_writable()?;
    let path = ctx.store().write(&config_file_name(&rendered.name), &rendered.document)?;
    debug!(name = %rendered.name, preset = ?answer.preset, "config written");

    ctx.console().success(&format!(
        "Config written to {}, move it to the appropriate config folder and reload the nginx webserver, Enjoy!",
        path.display()
    ));
    if answer.uses_tls() {
        ctx.console().warn(
            "Caution: SSL config is commented out by default, please generate the key and point to it correctly as necessary.",
        );
    }
    Ok(path)
}
