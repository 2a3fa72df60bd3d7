// agri-bootstrap-cli/src/main.rs
// ============================================================================
// Module: Agri Bootstrap CLI Entry Point
// Description: Command dispatcher for idempotent pipeline provisioning.
// Purpose: Provide a safe CLI over the role, bucket, and schedule procedures.
// Dependencies: clap, agri-bootstrap-{aws,config,core}, serde_json, thiserror, tokio.
// ============================================================================

//! ## Overview
//! The Agri Bootstrap CLI runs the provisioning procedures against the cloud
//! account behind the active credentials. All user-facing strings are routed
//! through the message catalog. Text mode emits per-step progress lines;
//! JSON mode suppresses them and emits one machine-readable summary.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use agri_bootstrap_aws::AwsSettings;
use agri_bootstrap_aws::EventBridgeScheduleClient;
use agri_bootstrap_aws::IamRoleClient;
use agri_bootstrap_aws::S3BucketClient;
use agri_bootstrap_aws::StsIdentityClient;
use agri_bootstrap_aws::load_sdk_config;
use agri_bootstrap_cli::summary::ProvisionSummary;
use agri_bootstrap_cli::t;
use agri_bootstrap_config::BootstrapConfig;
use agri_bootstrap_core::BucketProvisioner;
use agri_bootstrap_core::BucketReport;
use agri_bootstrap_core::ProgressSink;
use agri_bootstrap_core::RoleProvisioner;
use agri_bootstrap_core::RoleReport;
use agri_bootstrap_core::ScheduleProvisioner;
use agri_bootstrap_core::ScheduleReport;
use agri_bootstrap_core::StepEvent;
use clap::ArgAction;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "agri-bootstrap", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Optional config file path (defaults to agri-bootstrap.toml or env override).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Output format for progress and summaries.
    #[arg(long, value_enum, value_name = "FORMAT", default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Provision the execution role and its layered permissions.
    Role,
    /// Provision the storage bucket and its folder layout.
    Bucket,
    /// Provision the automated monitoring schedule.
    Schedule,
    /// Provision the bucket, role, and schedule in dependency order.
    Up,
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate the Agri Bootstrap configuration file.
    Validate,
}

/// Output formats for progress and summaries.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable progress lines.
    Text,
    /// One machine-readable summary document.
    Json,
}

/// Shared per-invocation context resolved from global flags.
struct CommandContext {
    /// Optional config file path override.
    config_path: Option<PathBuf>,
    /// Selected output format.
    format: OutputFormat,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for catalog-formatted error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a formatted message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let ctx = CommandContext {
        config_path: cli.config,
        format: cli.format,
    };

    match command {
        Commands::Role => command_role(&ctx).await,
        Commands::Bucket => command_bucket(&ctx).await,
        Commands::Schedule => command_schedule(&ctx).await,
        Commands::Up => command_up(&ctx).await,
        Commands::Config {
            command,
        } => command_config(&ctx, &command),
    }
}

/// Prints top-level CLI help.
fn show_help() -> CliResult<()> {
    Cli::command()
        .print_help()
        .map_err(|err| CliError::new(output_error("stdout", &err)))
}

// ============================================================================
// SECTION: Provisioning Commands
// ============================================================================

/// Executes the `role` command.
async fn command_role(ctx: &CommandContext) -> CliResult<ExitCode> {
    let config = load_config(ctx)?;
    let report = provision_role(ctx, &config).await?;
    write_summary(ctx, &ProvisionSummary {
        role: Some(report),
        ..ProvisionSummary::default()
    })?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `bucket` command.
async fn command_bucket(ctx: &CommandContext) -> CliResult<ExitCode> {
    let config = load_config(ctx)?;
    let report = provision_bucket(ctx, &config).await?;
    write_summary(ctx, &ProvisionSummary {
        bucket: Some(report),
        ..ProvisionSummary::default()
    })?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `schedule` command.
async fn command_schedule(ctx: &CommandContext) -> CliResult<ExitCode> {
    let config = load_config(ctx)?;
    let report = provision_schedule(ctx, &config).await?;
    write_summary(ctx, &ProvisionSummary {
        schedule: Some(report),
        ..ProvisionSummary::default()
    })?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the `up` command: bucket, then role, then schedule.
///
/// The bucket comes first so the role's custom policy can reference it, and
/// the role precedes the schedule whose target will assume it. There is no
/// rollback on partial failure; re-running converges.
async fn command_up(ctx: &CommandContext) -> CliResult<ExitCode> {
    let config = load_config(ctx)?;
    emit_text(ctx, &t!("up.start"))?;
    let bucket = provision_bucket(ctx, &config).await?;
    let role = provision_role(ctx, &config).await?;
    let schedule = provision_schedule(ctx, &config).await?;
    emit_text(ctx, &t!("up.done"))?;
    write_summary(ctx, &ProvisionSummary {
        role: Some(role),
        bucket: Some(bucket),
        schedule: Some(schedule),
    })?;
    Ok(ExitCode::SUCCESS)
}

/// Runs the role provisioner and emits its progress lines.
async fn provision_role(
    ctx: &CommandContext,
    config: &BootstrapConfig,
) -> CliResult<RoleReport> {
    let spec = config.role_spec();
    emit_text(ctx, &t!("role.start", role = spec.name))?;
    let sdk = load_sdk_config(&AwsSettings::for_region(config.region.clone())).await;
    let identity = StsIdentityClient::new(&sdk);
    let roles = IamRoleClient::new(&sdk);
    let mut renderer = ProgressRenderer::new(ctx.format);
    let report = RoleProvisioner::new(&identity, &roles)
        .run(&spec, &mut renderer)
        .await
        .map_err(|err| CliError::new(t!("role.failed", error = err)))?;
    emit_text(ctx, &t!("role.done", arn = report.role_arn))?;
    emit_text(ctx, &t!("role.propagation", seconds = report.propagation_wait_secs))?;
    Ok(report)
}

/// Runs the bucket provisioner and emits its progress lines.
async fn provision_bucket(
    ctx: &CommandContext,
    config: &BootstrapConfig,
) -> CliResult<BucketReport> {
    let spec = config.bucket_spec();
    emit_text(ctx, &t!("bucket.start", bucket = spec.name, region = spec.region))?;
    let settings = AwsSettings::for_region(config.region.clone());
    let sdk = load_sdk_config(&settings).await;
    let buckets = S3BucketClient::new(&sdk, settings.force_path_style);
    let mut renderer = ProgressRenderer::new(ctx.format);
    let report = BucketProvisioner::new(&buckets)
        .run(&spec, &mut renderer)
        .await
        .map_err(|err| CliError::new(t!("bucket.failed", error = err)))?;
    emit_text(ctx, &t!("bucket.done", bucket = report.name, region = report.region))?;
    Ok(report)
}

/// Runs the schedule provisioner and emits its progress lines.
async fn provision_schedule(
    ctx: &CommandContext,
    config: &BootstrapConfig,
) -> CliResult<ScheduleReport> {
    let spec = config.schedule_spec();
    emit_text(ctx, &t!("schedule.start", frequency = spec.frequency.as_str()))?;
    let sdk = load_sdk_config(&AwsSettings::for_region(config.region.clone())).await;
    let identity = StsIdentityClient::new(&sdk);
    let schedules = EventBridgeScheduleClient::new(&sdk);
    let mut renderer = ProgressRenderer::new(ctx.format);
    let report = ScheduleProvisioner::new(&identity, &schedules)
        .run(&spec, &mut renderer)
        .await
        .map_err(|err| CliError::new(t!("schedule.failed", error = err)))?;
    emit_text(ctx, &t!("schedule.done", rule = report.rule_name))?;
    Ok(report)
}

// ============================================================================
// SECTION: Config Command
// ============================================================================

/// Executes the `config` command.
fn command_config(ctx: &CommandContext, command: &ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate => {
            load_config(ctx)?;
            write_stdout_line(&t!("config.validate.ok"))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Loads and validates the bootstrap configuration.
fn load_config(ctx: &CommandContext) -> CliResult<BootstrapConfig> {
    BootstrapConfig::load(ctx.config_path.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

// ============================================================================
// SECTION: Progress Rendering
// ============================================================================

/// Progress sink rendering step events as catalog-formatted lines.
struct ProgressRenderer {
    /// Selected output format; JSON mode suppresses progress lines.
    format: OutputFormat,
}

impl ProgressRenderer {
    /// Creates a renderer for the selected output format.
    const fn new(format: OutputFormat) -> Self {
        Self {
            format,
        }
    }
}

impl ProgressSink for ProgressRenderer {
    fn record(&mut self, event: &StepEvent) {
        if self.format != OutputFormat::Text {
            return;
        }
        // Progress lines are best-effort; a failed write never aborts a
        // provisioning step that already completed remotely.
        let _ = write_stdout_line(&render_event(event));
    }
}

/// Renders a step event into its catalog line.
fn render_event(event: &StepEvent) -> String {
    match event {
        StepEvent::AccountResolved {
            account,
        } => t!("role.identity", account = account),
        StepEvent::RoleCreated {
            name,
        } => t!("role.created", role = name),
        StepEvent::RoleAlreadyPresent {
            name,
        } => t!("role.exists", role = name),
        StepEvent::ManagedPolicyAttached {
            policy_arn,
        } => t!("role.managed_attached", arn = policy_arn),
        StepEvent::PolicyCreated {
            name,
        } => t!("role.policy_created", policy = name),
        StepEvent::PolicyAlreadyPresent {
            name,
        } => t!("role.policy_exists", policy = name),
        StepEvent::CustomPolicyAttached {
            policy_arn,
        } => t!("role.policy_attached", arn = policy_arn),
        StepEvent::BucketCreated {
            name,
            region,
        } => t!("bucket.created", bucket = name, region = region),
        StepEvent::BucketAlreadyPresent {
            name,
        } => t!("bucket.exists", bucket = name),
        StepEvent::PrefixSeeded {
            key,
        } => t!("bucket.prefix", key = key),
        StepEvent::RuleUpserted {
            name,
            expression,
        } => t!("schedule.rule", rule = name, expression = expression),
        StepEvent::TargetUpserted {
            target_arn,
        } => t!("schedule.target", arn = target_arn),
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a line to stdout in text mode only.
fn emit_text(ctx: &CommandContext, message: &str) -> CliResult<()> {
    if ctx.format != OutputFormat::Text {
        return Ok(());
    }
    write_stdout_line(message).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes the JSON summary document in JSON mode only.
fn write_summary(ctx: &CommandContext, summary: &ProvisionSummary) -> CliResult<()> {
    if ctx.format != OutputFormat::Json {
        return Ok(());
    }
    let mut bytes = serde_json::to_vec_pretty(summary)
        .map_err(|err| CliError::new(t!("summary.serialize_failed", error = err)))?;
    bytes.push(b'\n');
    write_stdout_bytes(&bytes).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a catalog output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
