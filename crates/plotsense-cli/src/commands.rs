use std::ffi::OsStr;
use std::fs;

use anyhow::{Context, Result, bail};
use tracing::info;

use plotsense_analyze::{classify, generate};
use plotsense_ingest::load_rows;
use plotsense_model::{Row, VisionAnalysis};
use plotsense_vision::{StubDetector, StyleDetector};

use crate::cli::{InspectArgs, SuggestArgs};
use crate::summary::{print_detection, print_profiles, print_suggestions};

pub fn run_suggest(args: &SuggestArgs) -> Result<()> {
    let detection = detect_style(args)?;

    let rows: Vec<Row> = match &args.data {
        Some(path) => load_rows(path).with_context(|| format!("load {}", path.display()))?,
        None => match &detection {
            // No dataset: preview against the detector's synthetic rows.
            Some(analysis) => analysis.sample_data.clone(),
            None => bail!("provide a data file, an --image, or both"),
        },
    };

    let preferred = args
        .style
        .clone()
        .or_else(|| detection.as_ref().map(|d| d.detected_label.clone()));
    info!(
        rows = rows.len(),
        preferred = preferred.as_deref().unwrap_or("none"),
        "generating suggestions"
    );
    let suggestions = generate(&rows, preferred.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if let Some(dir) = &args.specs_dir {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        for suggestion in &suggestions {
            let path = dir.join(format!("{}.vl.json", suggestion.id));
            let spec = serde_json::to_string_pretty(&suggestion.render_spec)?;
            fs::write(&path, spec).with_context(|| format!("write {}", path.display()))?;
        }
        println!("Wrote {} specs to {}", suggestions.len(), dir.display());
    }

    if let Some(analysis) = &detection {
        print_detection(analysis);
    }
    print_suggestions(&suggestions, args.limit);
    Ok(())
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let rows = load_rows(&args.data)
        .with_context(|| format!("load {}", args.data.display()))?;
    let profiles = classify(&rows);
    println!("Source: {}", args.data.display());
    println!("Rows: {}", rows.len());
    print_profiles(&profiles);
    Ok(())
}

fn detect_style(args: &SuggestArgs) -> Result<Option<VisionAnalysis>> {
    let Some(path) = &args.image else {
        return Ok(None);
    };
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or_default();
    Ok(Some(StubDetector::new().analyze(name, &bytes)))
}
