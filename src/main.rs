//! tfe-ws-audit - Main entry point

use clap::Parser;
use log::{debug, error, info, warn};
use std::time::Instant;

use tfe_ws_audit::output::{log_summary, print_summary, write_report};
use tfe_ws_audit::ui::{create_progress_bar, finish_progress_bar};
use tfe_ws_audit::{
    audit_organizations, logging, resolve_organizations, summarize, AuditConfig, AuditSettings,
    CancellationFlag, Cli, Result, TfeClient, TokenResolver, WorkspaceApi,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(&cli.log_level, cli.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let start = Instant::now();
    let outcome = run(&cli).await;

    let elapsed = start.elapsed().as_secs_f64();
    info!(
        "Total runtime: {:.2} seconds ({:.2} minutes)",
        elapsed,
        elapsed / 60.0
    );

    if let Err(e) = outcome {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    info!("Starting TFE workspace audit v{}", env!("CARGO_PKG_VERSION"));

    let config = AuditConfig::load(&cli.config)?;
    let settings = AuditSettings::resolve(cli, &config);
    debug!("Effective settings: {:?}", settings);

    let token = TokenResolver::for_url(&settings.tfe_url)
        .resolve(cli.token.as_deref(), settings.batch)?;
    let client = TfeClient::new(token, &settings.tfe_url);
    info!("Using TFE API at {}", client.base_url());

    let resolved = resolve_organizations(
        settings.explicit_orgs.as_deref(),
        &settings.configured_orgs,
        || client.list_all_organizations(),
    )
    .await?;

    let cancel = CancellationFlag::new();
    let handler_flag = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, finishing in-flight organizations");
            handler_flag.cancel();
        }
    });

    info!(
        "Processing {} organizations in {} mode with {} workers",
        resolved.names.len(),
        settings.mode,
        settings.max_workers
    );

    let progress = create_progress_bar(resolved.names.len(), settings.batch);
    let records = audit_organizations(
        &client,
        &resolved.names,
        settings.mode,
        settings.max_workers,
        &progress,
        &cancel,
    )
    .await;
    finish_progress_bar(progress, cancel.is_cancelled());

    let report_path = write_report(&records, settings.mode, &settings.report)?;
    debug!("Report saved at {}", report_path.display());

    let summary = summarize(&records)?;
    log_summary(&summary, settings.mode);
    print_summary(&summary, settings.mode);

    if cancel.is_cancelled() {
        warn!("Run was cancelled; unstarted organizations are marked in the report");
    }

    Ok(())
}
