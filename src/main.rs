mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::input::metrics::RawMetrics;
use crate::input::{DEFAULT_USERNAME, InputError, ProfileInput, RawProfile, load_profiles};
use crate::model::profile::Platform;
use crate::pipeline::stage2_traits::{run_stage2, score_traits};
use crate::pipeline::stage3_report::{write_batch_reports, write_profile_reports};
use crate::report::json::render_profile_json;
use crate::report::text::render_report_text;
use crate::report::{ProfileReport, ReportError};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

/// Map social-media behavior metrics to Big Five style trait scores.
#[derive(Debug, Parser)]
#[command(name = "footprint-traits", version, about)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a single profile and render its dashboard
    Score(ScoreArgs),
    /// Score every profile in a JSON or TSV file
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
struct ScoreArgs {
    #[command(flatten)]
    profile: ProfileArgs,

    /// Read the first profile from a .json/.tsv file (optionally .gz) instead of flags
    #[arg(long, conflicts_with = "profile")]
    input: Option<PathBuf>,

    /// Write report.txt, summary.json and chart.svg into this directory
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the JSON summary instead of the text report
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
#[group(id = "profile", multiple = true)]
struct ProfileArgs {
    #[arg(long, default_value = DEFAULT_USERNAME)]
    username: String,
    #[arg(long, default_value = "twitter")]
    platform: Platform,
    /// Total posts analyzed [0, 1000]
    #[arg(long, default_value_t = 245, allow_negative_numbers = true)]
    posts_count: i64,
    /// Average likes per post [0, 100]
    #[arg(long, default_value_t = 23.5, allow_negative_numbers = true)]
    avg_likes: f64,
    /// Total comments [0, 10000]
    #[arg(long, default_value_t = 1245, allow_negative_numbers = true)]
    comments_count: i64,
    /// Posts per week [0, 50]
    #[arg(long, default_value_t = 7, allow_negative_numbers = true)]
    post_frequency: i64,
    /// Average response time in hours [0, 48]
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    response_time_hours: i64,
    /// Positive sentiment percent [0, 100]
    #[arg(long, default_value_t = 65, allow_negative_numbers = true)]
    sentiment_positive: i64,
    /// Neutral sentiment percent [0, 100]
    #[arg(long, default_value_t = 25, allow_negative_numbers = true)]
    sentiment_neutral: i64,
    /// Emoji per post [0, 20]
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    emoji_usage: i64,
    /// Hashtags per post [0, 10]
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    hashtag_usage: i64,
}

impl ProfileArgs {
    fn to_raw(&self) -> RawProfile {
        RawProfile {
            username: self.username.clone(),
            platform: Some(self.platform.name().to_string()),
            metrics: RawMetrics {
                posts_count: self.posts_count,
                avg_likes: self.avg_likes,
                comments_count: self.comments_count,
                post_frequency: self.post_frequency,
                response_time_hours: self.response_time_hours,
                sentiment_positive: self.sentiment_positive,
                sentiment_neutral: self.sentiment_neutral,
                emoji_usage: self.emoji_usage,
                hashtag_usage: self.hashtag_usage,
            },
        }
    }
}

#[derive(Debug, Args)]
struct BatchArgs {
    /// Profile table (.json or .tsv, optionally .gz)
    #[arg(long)]
    input: PathBuf,
    /// Output directory for traits.tsv, summary.json and report.txt
    #[arg(long)]
    out: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Score(args) => run_score(&args),
        Command::Batch(args) => run_batch(&args),
    }
}

fn resolve_score_profile(args: &ScoreArgs) -> Result<ProfileInput, InputError> {
    match &args.input {
        Some(path) => {
            let mut profiles = load_profiles(path)?;
            if profiles.len() > 1 {
                tracing::warn!(
                    path = %path.display(),
                    ignored = profiles.len() - 1,
                    "score uses only the first profile; use batch for the rest"
                );
            }
            Ok(profiles.swap_remove(0))
        }
        None => args.profile.to_raw().validate(),
    }
}

fn run_score(args: &ScoreArgs) -> Result<(), AppError> {
    let profile = resolve_score_profile(args)?;
    let scores = score_traits(&profile.features);
    tracing::info!(
        username = %profile.username,
        engagement_rate = profile.features.engagement_rate,
        dominant = scores.dominant().name(),
        "scored profile"
    );

    if let Some(out_dir) = &args.out {
        write_profile_reports(&profile, &scores, out_dir)?;
        return Ok(());
    }

    let rendered = if args.json {
        render_profile_json(&profile.summary(), &profile.features, &scores)?
    } else {
        render_report_text(&ProfileReport {
            summary: profile.summary(),
            scores,
        })
    };
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(AppError::Stdout)
}

fn run_batch(args: &BatchArgs) -> Result<(), AppError> {
    let profiles = load_profiles(&args.input)?;
    let features = profiles.iter().map(|p| p.features).collect::<Vec<_>>();
    let scores = run_stage2(&features);
    write_batch_reports(&profiles, &scores, &args.out)?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
