use anyhow::{Context, anyhow};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, info_span, warn};

use autocat::{
    autocat_serde::{read_profile, write_autocat},
    categorizer::UserScoreCategorizer,
    executable_utils::initialize_executable,
    model::AutoCatUserScore,
    processor::Processor,
    storage::GameDatabase,
};
use gamelib::library::GameLibrary;

fn main() -> anyhow::Result<()> {
    let (args, config) = initialize_executable().map_err(|e| anyhow!(e))?;

    if let Some(path) = &args.write_steam_preset {
        let xml = write_autocat(&AutoCatUserScore::steam_preset("Steam Reviews"))?;
        fs::write(path, xml).with_context(|| format!("writing preset to {}", path.display()))?;
        info!(path = %path.display(), "Wrote Steam review preset");
        return Ok(());
    }

    let metrics = if args.metrics {
        Some(PrometheusBuilder::new().install_recorder()?)
    } else {
        None
    };

    let settings = &config.categorizer;
    let (mut library, database) = GameLibrary::load(Path::new(&settings.library_path))
        .with_context(|| format!("loading library {}", settings.library_path))?;
    let database = Arc::new(database);

    let profile = fs::read_to_string(&settings.profile_path)
        .with_context(|| format!("reading autocat profile {}", settings.profile_path))?;
    let mut autocats = read_profile(&profile)?;

    if !settings.autocats.is_empty() {
        for name in &settings.autocats {
            if !autocats.iter().any(|a| &a.name == name) {
                warn!(autocat = %name, "Configured autocat not found in profile");
            }
        }
        autocats.retain(|a| settings.autocats.contains(&a.name));
    }

    for autocat in autocats {
        let span = info_span!("autocat", name = %autocat.name);
        let database: Arc<dyn GameDatabase> = database.clone();
        let processor = Processor::new(UserScoreCategorizer::new(autocat, Some(database), span));

        let summary = library.categorize(&processor)?;
        info!(summary = %serde_json::to_string(&summary)?, "Autocat finished");
    }

    if let Some(output) = &settings.output_path {
        library
            .save(Path::new(output), &database)
            .with_context(|| format!("saving library to {output}"))?;
    }

    if let Some(handle) = metrics {
        println!("{}", handle.render());
    }

    Ok(())
}
