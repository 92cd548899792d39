use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let tracker = open_tracker(cfg)?;
        let path = expand_tilde(file);

        let written = ExportLogic::export(tracker.state(), *format, &path, range.as_deref(), *force)?;
        success(format!(
            "{} export completed: {} ({} logged actions)",
            format.as_str().to_uppercase(),
            path.display(),
            written
        ));
    }

    Ok(())
}
