use crate::infra::{parse_effort_unit, parse_timeframe, TemplateRationaleProvider};
use clap::Args;
use rice_backlog::backlog::{
    assemble_response, fallback_notes, provider_payload, rank_items, validate_output,
    validate_request, BacklogItem, EffortUnit, ItemInputs, RationaleProvider, ReachEstimate,
    ReachUnit, ScoreRequest, ScoreResponse, Timeframe,
};
use rice_backlog::error::AppError;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a JSON score request (timeframe, effortUnit, items)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the markdown export instead of the JSON response
    #[arg(long)]
    pub(crate) markdown: bool,
    /// Print the CSV export instead of the JSON response
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Timeframe to rank the sample backlog against
    #[arg(long, default_value = "month", value_parser = parse_timeframe)]
    pub(crate) timeframe: Timeframe,
    /// Unit the sample effort estimates are in
    #[arg(long, default_value = "days", value_parser = parse_effort_unit)]
    pub(crate) effort_unit: EffortUnit,
    /// Which sample backlog to score (saas|consumer)
    #[arg(long, default_value = "saas", value_parser = parse_sample_set)]
    pub(crate) sample: SampleSet,
}

/// Built-in demo backlogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SampleSet {
    Saas,
    Consumer,
}

pub(crate) fn parse_sample_set(raw: &str) -> Result<SampleSet, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "saas" => Ok(SampleSet::Saas),
        "consumer" => Ok(SampleSet::Consumer),
        other => Err(format!("unknown sample set '{other}' (expected saas|consumer)")),
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let request: ScoreRequest = serde_json::from_str(&raw)
        .map_err(|err| std::io::Error::new(ErrorKind::InvalidData, err))?;

    let response = score_request(request)?;

    if args.markdown {
        println!("{}", response.exports.markdown);
    } else if args.csv {
        let document = response
            .exports
            .csv_document()
            .map_err(|err| std::io::Error::new(ErrorKind::InvalidData, err))?;
        println!("{document}");
    } else {
        let pretty = serde_json::to_string_pretty(&response)
            .map_err(|err| std::io::Error::new(ErrorKind::InvalidData, err))?;
        println!("{pretty}");
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let request = ScoreRequest {
        timeframe: args.timeframe,
        effort_unit: args.effort_unit,
        items: sample_backlog(args.sample),
    };

    let response = score_request(request)?;

    println!("{}", response.exports.markdown);
    println!("Top picks: {}", response.summary.top3.join(", "));
    println!("Quick wins: {}", response.summary.quick_wins.join(", "));
    println!(
        "High risk / high reward: {}",
        response.summary.high_risk_high_reward.join(", ")
    );

    Ok(())
}

fn score_request(request: ScoreRequest) -> Result<ScoreResponse, AppError> {
    validate_request(&request)?;
    let ScoreRequest {
        timeframe,
        effort_unit,
        items,
    } = request;

    let ranked = rank_items(items, timeframe);
    let payload = provider_payload(&ranked);
    let provider = TemplateRationaleProvider;
    let notes = match provider.annotate(timeframe, effort_unit, &payload) {
        Ok(notes) => notes,
        Err(err) => {
            warn!(%err, "rationale provider failed, using deterministic fallback");
            fallback_notes(&ranked)
        }
    };

    let response = assemble_response(timeframe, effort_unit, ranked, &notes);
    validate_output(&response)?;
    Ok(response)
}

pub(crate) fn sample_backlog(set: SampleSet) -> Vec<BacklogItem> {
    match set {
        SampleSet::Saas => saas_backlog(),
        SampleSet::Consumer => consumer_backlog(),
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_item(
    item_id: &str,
    title: &str,
    description: &str,
    evidence: &str,
    reach: f64,
    unit: ReachUnit,
    impact: f64,
    confidence: f64,
    effort: f64,
) -> BacklogItem {
    BacklogItem {
        item_id: item_id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        evidence: evidence.to_string(),
        inputs: ItemInputs {
            reach: ReachEstimate {
                value: reach,
                unit,
                timeframe: Timeframe::Month,
            },
            impact,
            confidence,
            effort,
        },
    }
}

fn saas_backlog() -> Vec<BacklogItem> {
    vec![
        sample_item(
            "I1",
            "Onboarding checklist",
            "Interactive first-run experience to reduce drop-off after signup.",
            "40% drop-off after signup",
            5000.0,
            ReachUnit::Users,
            1.0,
            95.0,
            3.0,
        ),
        sample_item(
            "I2",
            "Slack integration",
            "Post notifications to Slack channels for teams.",
            "Top requested feature in survey (23 votes)",
            3000.0,
            ReachUnit::Users,
            2.0,
            85.0,
            10.0,
        ),
        sample_item(
            "I3",
            "2FA authentication",
            "Add two-factor authentication for enterprise customers.",
            "3 enterprise clients requested this",
            500.0,
            ReachUnit::Accounts,
            3.0,
            90.0,
            13.0,
        ),
        sample_item(
            "I4",
            "API rate limit dashboard",
            "Show real-time API usage and limits.",
            "",
            1200.0,
            ReachUnit::Users,
            1.0,
            70.0,
            5.0,
        ),
        sample_item(
            "I5",
            "Bulk email templates",
            "Allow users to create and save reusable email templates.",
            "",
            2000.0,
            ReachUnit::Users,
            2.0,
            80.0,
            8.0,
        ),
        sample_item(
            "I6",
            "Advanced analytics",
            "Custom reports and data export features.",
            "",
            800.0,
            ReachUnit::Users,
            3.0,
            60.0,
            21.0,
        ),
        sample_item(
            "I7",
            "Team collaboration",
            "Real-time co-editing and commenting.",
            "",
            600.0,
            ReachUnit::Users,
            3.0,
            40.0,
            21.0,
        ),
        sample_item(
            "I8",
            "Mobile app (iOS)",
            "Native iOS app for on-the-go access.",
            "",
            1500.0,
            ReachUnit::Users,
            2.0,
            50.0,
            34.0,
        ),
    ]
}

fn consumer_backlog() -> Vec<BacklogItem> {
    vec![
        sample_item(
            "I1",
            "Push notifications",
            "Engagement alerts and updates.",
            "Similar apps see 2x retention",
            20000.0,
            ReachUnit::Users,
            2.0,
            85.0,
            8.0,
        ),
        sample_item(
            "I2",
            "Social sharing",
            "Share to Instagram, TikTok, Twitter.",
            "",
            12000.0,
            ReachUnit::Users,
            2.0,
            80.0,
            8.0,
        ),
        sample_item(
            "I3",
            "Dark mode",
            "System-wide dark theme toggle.",
            "Reddit thread with 500+ upvotes",
            8000.0,
            ReachUnit::Users,
            1.0,
            90.0,
            5.0,
        ),
        sample_item(
            "I4",
            "AI photo filters",
            "ML-powered aesthetic filters.",
            "Competitor feature driving 30% engagement",
            15000.0,
            ReachUnit::Users,
            3.0,
            60.0,
            21.0,
        ),
        sample_item(
            "I5",
            "Offline mode",
            "Cache content for offline viewing.",
            "",
            3000.0,
            ReachUnit::Users,
            2.0,
            70.0,
            13.0,
        ),
        sample_item(
            "I6",
            "Referral program",
            "Invite friends, earn rewards.",
            "",
            5000.0,
            ReachUnit::Users,
            3.0,
            75.0,
            13.0,
        ),
    ]
}
