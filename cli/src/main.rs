//! issuedigest CLI - weekly magazine digest generator

mod github;
mod mail;
mod summarize;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use issuedigest::{
    extract_text, extract_text_from_file, parse_outline, parse_outline_file, render_digest,
    resolve_latest_issue, ComposeOptions, LocatorOptions,
};

use github::GitHubContents;
use mail::{Delivery, MailSettings};
use summarize::Summarizer;

#[derive(Parser)]
#[command(name = "issuedigest")]
#[command(version)]
#[command(about = "Turn the latest magazine issue into a summarized PDF digest", long_about = None)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    summary: SummaryArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    mail: MailArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
struct SourceArgs {
    /// Repository holding the issues (owner/name)
    #[arg(long, global = true, default_value = "Monkfishare/The_Economist")]
    repo: String,

    /// Folder containing one sub-folder per issue
    #[arg(long, global = true, default_value = "TE/2026")]
    base_path: String,

    /// Branch used when a download link has to be synthesized
    #[arg(long, global = true, default_value = "main")]
    branch: String,

    /// GitHub token for higher rate limits
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,
}

#[derive(Args, Clone)]
struct SummaryArgs {
    /// Gemini API key
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Gemini model
    #[arg(long, global = true, default_value = "gemini-2.5-flash")]
    model: String,
}

#[derive(Args, Clone)]
struct OutputArgs {
    /// Output directory
    #[arg(short, long, global = true, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Output file name prefix
    #[arg(long, global = true, default_value = "Economist_Summary")]
    product_name: String,
}

#[derive(Args, Clone)]
struct MailArgs {
    /// Sender account, also receives the digest
    #[arg(long, global = true, env = "EMAIL_USER")]
    email_user: Option<String>,

    /// Sender account password
    #[arg(long, global = true, env = "EMAIL_PASSWORD", hide_env_values = true)]
    email_password: Option<String>,

    /// Additional recipients (comma separated)
    #[arg(long, global = true, value_delimiter = ',')]
    recipients: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate, summarize and render the latest issue (default)
    Run,

    /// Show the latest issue and its download URL
    Locate {
        /// Output JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the text of a local PDF
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Render an outline file to a digest PDF
    Render {
        /// Outline file (## sections, ### headlines)
        #[arg(value_name = "OUTLINE")]
        input: PathBuf,

        /// Issue label shown on the first page and used in the file name
        #[arg(short, long)]
        label: String,
    },

    /// Show the parsed outline as JSON
    Outline {
        /// Outline file (## sections, ### headlines)
        #[arg(value_name = "OUTLINE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

impl SourceArgs {
    fn locator_options(&self) -> LocatorOptions {
        LocatorOptions::new()
            .with_repo(&self.repo)
            .with_base_path(&self.base_path)
            .with_default_branch(&self.branch)
    }

    fn contents(&self) -> Result<GitHubContents, reqwest::Error> {
        GitHubContents::new(&self.repo, self.github_token.clone())
    }
}

impl MailArgs {
    fn settings(&self) -> MailSettings {
        MailSettings {
            user: self.email_user.clone(),
            password: self.email_password.clone(),
            recipients: self.recipients.clone(),
        }
    }
}

impl OutputArgs {
    fn compose_options(&self) -> ComposeOptions {
        ComposeOptions::new().with_product_name(&self.product_name)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Run) => {
            cmd_run(&cli.source, &cli.summary, &cli.output, &cli.mail)
        }
        Some(Commands::Locate { json }) => cmd_locate(&cli.source, json),
        Some(Commands::Extract { ref input }) => cmd_extract(input),
        Some(Commands::Render {
            ref input,
            ref label,
        }) => cmd_render(input, label, &cli.output),
        Some(Commands::Outline { ref input, compact }) => cmd_outline(input, compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

fn cmd_run(
    source: &SourceArgs,
    summary: &SummaryArgs,
    output: &OutputArgs,
    mail: &MailArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let api_key = summary
        .api_key
        .clone()
        .ok_or("GEMINI_API_KEY is not set (use --api-key)")?;

    let contents = source.contents()?;
    let pb = spinner();

    pb.set_message("Checking for the latest issue...");
    let issue = resolve_latest_issue(&contents, &source.locator_options())?;
    pb.println(format!(
        "{} {}",
        "Latest issue:".green(),
        issue.issue_label.bold()
    ));

    pb.set_message("Downloading PDF...");
    let data = contents.download(&issue.artifact_url)?;

    pb.set_message("Extracting full text...");
    let text = extract_text(&data);
    if text.trim().is_empty() {
        pb.finish_and_clear();
        return Err("PDF text empty".into());
    }

    pb.set_message(format!("Summarizing with {}...", summary.model));
    let summarizer = Summarizer::new(api_key, summary.model.clone())?;
    let outline_text = summarizer.summarize(&text)?;

    pb.set_message("Typesetting PDF...");
    let outline = parse_outline(&outline_text);
    if outline.is_empty() {
        log::warn!("Summary contained no outline content");
    }
    let digest = render_digest(
        &outline,
        &issue.issue_label,
        &output.compose_options(),
        &output.output,
    )?;

    pb.finish_and_clear();
    println!(
        "{} {} ({} pages)",
        "Success! Published:".green().bold(),
        digest.path.display(),
        digest.page_count
    );

    match mail.settings().send_digest(&digest.path) {
        Ok(Delivery::Sent(count)) => {
            println!("{} {} recipients", "Email sent to".green(), count)
        }
        Ok(Delivery::Skipped(reason)) => {
            println!("{} {}", "Skipping email:".yellow(), reason)
        }
        Err(e) => eprintln!("{} {}", "Failed to send email:".yellow(), e),
    }

    Ok(())
}

fn cmd_locate(source: &SourceArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let contents = source.contents()?;
    let issue = resolve_latest_issue(&contents, &source.locator_options())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&issue)?);
    } else {
        println!("{}: {}", "Issue".bold(), issue.issue_label);
        println!("{}: {}", "URL".bold(), issue.artifact_url);
    }

    Ok(())
}

fn cmd_extract(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = extract_text_from_file(input)?;
    if text.is_empty() {
        return Err(format!("no text could be extracted from {}", input.display()).into());
    }
    println!("{}", text);
    Ok(())
}

fn cmd_render(
    input: &Path,
    label: &str,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let outline = parse_outline_file(input)?;
    let digest = render_digest(&outline, label, &output.compose_options(), &output.output)?;

    println!("{} {}", "Saved to".green(), digest.path.display());
    println!(
        "  {} {} sections, {} pages",
        "└─".dimmed(),
        outline.sections().count(),
        digest.page_count
    );

    Ok(())
}

fn cmd_outline(input: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(input)?;
    let outline = parse_outline(&raw);

    let json = if compact {
        serde_json::to_string(&outline)?
    } else {
        serde_json::to_string_pretty(&outline)?
    };
    println!("{}", json);

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "issuedigest".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Weekly magazine digest generator");
}
