use bandana_variants::config::init;
use bandana_variants::generator::{make_rng, run};

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};

fn main() -> anyhow::Result<()> {
    let config = init().context("failed to load configuration")?;
    let mut rng = make_rng(config.seed);

    let pb = ProgressBar::new(config.count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message(format!("Palette: {}", config.palette_name));

    let result = run(&config, &mut rng, |variant, output_path| {
        let file_name = output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| output_path.display().to_string());
        pb.suspend(|| println!("Generated {}", file_name));
        pb.set_message(format!("{} ({})", variant.pattern, file_name));
        pb.inc(1);
    });

    match result {
        Ok(written) => {
            pb.finish_with_message(format!(
                "Finished: {} variants (Saved to: {})",
                written.len(),
                config.output_dir.display()
            ));
            Ok(())
        }
        Err(e) => {
            pb.abandon_with_message("Failed");
            Err(e).context("variant generation aborted")
        }
    }
}
