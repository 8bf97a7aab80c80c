//! Run orchestration: setup, fresh/resume decision, the import itself,
//! and the post-run index pass.

use std::fs;
use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use tracing::info;

use actlog_config::Config;
use actlog_engine::{CsvIpTable, FactWriter, IngestOptions, IpLocator, NoLocations, RowDispatcher};
use actlog_extract::CourseNameTable;
use actlog_sink::{
    create_indexes, ensure_tables, truncate_all, Destination, MySqlDestination, MySqlSettings,
};

use crate::Cli;

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    crate::init_logging(effective_log_level(cli.log_level.as_deref(), &config))?;

    let course_names = CourseNameTable::load(&config.references.course_names)
        .context("cannot load the course-name table")?;
    let locator: Box<dyn IpLocator> = match &config.references.ip_locations {
        Some(path) => Box::new(CsvIpTable::load(path).context("cannot load ip locations")?),
        None => Box::new(NoLocations),
    };

    let mut destination = connect(&cli, &config)?;
    ensure_tables(&mut destination).context("cannot create destination tables")?;
    let resume_from = decide_resume(&cli, &mut destination)?;

    let mut dispatcher = RowDispatcher::new(course_names, locator);
    let mut writer = FactWriter::new(destination, config.batching.big, config.batching.small);

    let summary = actlog_engine::run(
        &cli.source,
        &mut dispatcher,
        &mut writer,
        IngestOptions { resume_from },
    )?;

    create_indexes(writer.destination_mut()).context("index pass failed")?;

    info!(
        rows = summary.rows_processed,
        last_row_id = summary.last_row_id,
        truncated_values = summary.truncated_values,
        "import complete"
    );
    Ok(())
}

/// The `--log-level` flag wins; without it the config file's `[log]`
/// section decides.
fn effective_log_level<'a>(flag: Option<&'a str>, config: &'a Config) -> &'a str {
    flag.unwrap_or_else(|| config.log.level.as_str())
}

fn load_config(cli: &Cli) -> Result<Config> {
    if cli.config.exists() {
        Config::from_file(&cli.config)
            .with_context(|| format!("cannot load config '{}'", cli.config.display()))
    } else {
        Ok(Config::default())
    }
}

fn connect(cli: &Cli, config: &Config) -> Result<MySqlDestination> {
    let Some(user) = cli.user.clone().or_else(|| config.database.user.clone()) else {
        bail!("no database user: pass --user or set [database] user in the config");
    };

    let password = if cli.password {
        print!("Password: ");
        io::stdout().flush()?;
        read_password()?
    } else if let Some(path) = &config.database.password_file {
        fs::read_to_string(path)
            .with_context(|| format!("cannot read password file '{path}'"))?
            .trim_end()
            .to_owned()
    } else {
        String::new()
    };

    let settings = MySqlSettings {
        host: config.database.host.clone(),
        port: config.database.port,
        user,
        password,
        database: config.database.database.clone(),
    };
    Ok(MySqlDestination::connect(&settings)?)
}

/// Work out whether this run starts fresh, resumes, or asks.
///
/// `--fresh` and `--resume-from` decide outright. With neither, a
/// destination already holding rows prompts interactively: wipe, or
/// resume past its last committed row id.
fn decide_resume(cli: &Cli, destination: &mut MySqlDestination) -> Result<Option<u64>> {
    if cli.fresh {
        truncate_all(destination).context("cannot wipe destination tables")?;
        return Ok(None);
    }
    if cli.resume_from.is_some() {
        return Ok(cli.resume_from);
    }

    let Some(last) = destination.max_row_id("Activities")? else {
        return Ok(None);
    };

    print!("Destination tables already hold data through row {last}. Wipe them and start fresh? [y/N]: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
        truncate_all(destination).context("cannot wipe destination tables")?;
        Ok(None)
    } else {
        info!(resume_from = last, "resuming past the last committed row");
        Ok(Some(last))
    }
}

/// Read password from terminal (hides input)
fn read_password() -> Result<String> {
    rpassword::read_password().context("failed to read password")
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use actlog_config::Config;

    use super::effective_log_level;

    #[test]
    fn test_config_log_level_applies_without_flag() {
        let config = Config::from_str("[log]\nlevel = \"debug\"").unwrap();
        assert_eq!(effective_log_level(None, &config), "debug");
    }

    #[test]
    fn test_flag_overrides_config_log_level() {
        let config = Config::from_str("[log]\nlevel = \"debug\"").unwrap();
        assert_eq!(effective_log_level(Some("trace"), &config), "trace");
    }

    #[test]
    fn test_default_level_is_info() {
        let config = Config::default();
        assert_eq!(effective_log_level(None, &config), "info");
    }
}
