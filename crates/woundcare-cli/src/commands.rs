use std::path::{Path, PathBuf};

use eyre::WrapErr;
use serde::Serialize;
use uuid::Uuid;
use woundcare_core::config::WoundcareConfig;
use woundcare_core::models::context::PatientContext;
use woundcare_core::models::history::HistoryEntry;
use woundcare_core::models::risk::RiskResult;
use woundcare_perception::WoundImage;
use woundcare_pipeline::Pipeline;
use woundcare_report::{NoGenerator, Summary, render_report, summarize};
use woundcare_storage::FileHistoryStore;

use crate::cli::{AssessArgs, Cli, Command, ConfigAction};
use crate::config;

/// JSON printed by `assess`.
#[derive(Debug, Serialize)]
pub struct AssessmentOutput {
    pub subject_id: String,
    pub result: RiskResult,
    pub summary: Summary,
    /// Id of the appended history entry, absent with `--no-record`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded: Option<Uuid>,
}

pub async fn run(cli: Cli) -> eyre::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    match cli.command {
        Command::Assess(args) => {
            let config = config::load_or_default(&config_path)?;
            let store = FileHistoryStore::new(data_dir(cli.data_dir)?);
            let output = assess(&args, config, &store).await?;
            if args.report {
                let context = patient_context(&args);
                let text = render_report(
                    &output.result,
                    &output.subject_id,
                    Some(jiff::Timestamp::now()),
                    Some(&context),
                    Some(&output.summary),
                )?;
                println!("{text}");
            } else {
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Command::History { subject, limit } => {
            let store = FileHistoryStore::new(data_dir(cli.data_dir)?);
            let entries = history(&store, &subject, limit).await?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Command::Config { action } => match action {
            ConfigAction::Show => {
                let config = config::load_or_default(&config_path)?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Init { force } => init_config(&config_path, force)?,
        },
        Command::Rules => {
            for rule in woundcare_decision::rules::rules() {
                println!("{:<10} {}", rule.status.label(), rule.id);
            }
        }
    }
    Ok(())
}

fn data_dir(flag: Option<PathBuf>) -> eyre::Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir),
        None => config::default_data_dir(),
    }
}

pub fn patient_context(args: &AssessArgs) -> PatientContext {
    PatientContext {
        age: args.age,
        diabetes: args.diabetes,
        pain: args.pain,
        notes: args.notes.clone(),
    }
}

/// Decode, assess, summarize and (unless `--no-record`) append to history.
pub async fn assess(
    args: &AssessArgs,
    config: WoundcareConfig,
    store: &FileHistoryStore,
) -> eyre::Result<AssessmentOutput> {
    let bytes = tokio::fs::read(&args.image)
        .await
        .wrap_err_with(|| format!("failed to read {}", args.image.display()))?;
    let image = WoundImage::decode(&bytes)?;

    let pipeline = Pipeline::new(config)?;
    let result = pipeline.run(&image, &args.subject, store).await?;

    let context = patient_context(args);
    let summary = summarize::<NoGenerator>(None, &result, Some(&context)).await;

    let recorded = if args.no_record {
        None
    } else {
        let entry = HistoryEntry::from_result(&args.subject, &result, Some(context))
            .with_image_path(args.image.display().to_string());
        store.append(&entry).await?;
        Some(entry.id)
    };

    Ok(AssessmentOutput {
        subject_id: args.subject.clone(),
        result,
        summary,
        recorded,
    })
}

pub async fn history(
    store: &FileHistoryStore,
    subject_id: &str,
    limit: Option<usize>,
) -> eyre::Result<Vec<HistoryEntry>> {
    let mut entries = store.list(subject_id).await?;
    if let Some(limit) = limit {
        let skip = entries.len().saturating_sub(limit);
        entries = entries.split_off(skip);
    }
    Ok(entries)
}

pub fn init_config(path: &Path, force: bool) -> eyre::Result<()> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    config::save_config_to(path, &WoundcareConfig::default())?;
    println!("{}", path.display());
    Ok(())
}
