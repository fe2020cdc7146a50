use anyhow::Context;
use box_volume::utils::{logger, validation::Validate};
use box_volume::{
    BoxError, CliConfig, InspectProgram, InteractiveProgram, Mode, OutputFormat, PresetProgram,
    Program, Report, Settings, TomlConfig, VolumeEngine,
};
use clap::Parser;
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.format == Some(OutputFormat::Json) {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let file_config = match config.config.as_deref().map(load_config).transpose() {
        Ok(file_config) => file_config,
        Err(e) => fail(&e),
    };

    let mode = config.mode();
    let settings = Settings::resolve(
        file_config.as_ref(),
        mode.dimension_args().into(),
        config.format,
    );
    tracing::debug!("Resolved settings: {:?}", settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match mode {
        Mode::Preset(_) => run(PresetProgram::new(settings), settings.format, &mut out),
        Mode::Inspect(_) => run(InspectProgram::new(settings), settings.format, &mut out),
        // Machine formats keep stdout parseable, so prompts go to stderr.
        Mode::Interactive if settings.format == OutputFormat::Text => run(
            InteractiveProgram::new(io::stdin().lock(), io::stdout()),
            settings.format,
            &mut out,
        ),
        Mode::Interactive => run(
            InteractiveProgram::new(io::stdin().lock(), io::stderr()),
            settings.format,
            &mut out,
        ),
    };

    match result {
        Ok(report) => {
            tracing::debug!("Run finished: {:?}", report);
        }
        Err(e) => fail(&e),
    }

    io::Write::flush(&mut out).context("Failed to flush stdout")?;
    Ok(())
}

fn load_config(path: &str) -> box_volume::Result<TomlConfig> {
    tracing::info!("Loading configuration from: {}", path);
    let file_config = TomlConfig::from_file(path)?;
    file_config.validate()?;
    Ok(file_config)
}

fn run<P: Program, W: io::Write>(
    program: P,
    format: OutputFormat,
    out: &mut W,
) -> box_volume::Result<Report> {
    VolumeEngine::with_format(program, format).run(out)
}

fn fail(e: &BoxError) -> ! {
    tracing::error!(
        "Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!();
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
