use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::commands::*;
use crate::config;
use crate::config::ParleyConfig;
use crate::error::{ParleyError, Result};
use crate::export::{segments_to_srt, segments_to_vtt, OutputFormat};
use crate::segment::{
    has_speaker_labels, merge_adjacent_speaker_segments, parse_transcript, remove_custom_fillers,
    remove_filler_words_from_segments, rename_speaker, segments_to_text, unique_speakers,
    Strategy, TranscriptSegment,
};
use crate::speaker::speaker_color;
use crate::timeline::{
    estimate_segment_timestamps, find_segment_at_time, format_duration, format_timestamp,
};

pub fn handle_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Segment {
            file,
            strategy,
            merge,
            clean,
            duration,
            json,
            no_labels,
        } => handle_segment(&file, strategy, merge, clean, duration, json, no_labels),
        Commands::Export {
            file,
            format,
            duration,
            output,
        } => handle_export(&file, format, duration, output),
        Commands::Clean { file, output } => handle_clean(&file, output),
        Commands::Speakers { file } => handle_speakers(&file),
        Commands::Rename {
            file,
            from,
            to,
            output,
        } => handle_rename(&file, from, to, output),
        Commands::Locate {
            file,
            duration,
            time,
        } => handle_locate(&file, duration, time),
        Commands::Config { action } => handle_config(action),
    }
}

fn read_transcript(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ParleyError::TranscriptNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Load segments from a JSON dump (`.json`) or by parsing raw transcript text.
fn load_segments(path: &Path, strategy: Strategy) -> Result<Vec<TranscriptSegment>> {
    let content = read_transcript(path)?;
    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(parse_transcript(&content, strategy))
    }
}

fn render(segments: &[TranscriptSegment], format: OutputFormat, include_labels: bool) -> String {
    match format {
        OutputFormat::Text => segments_to_text(segments, include_labels),
        OutputFormat::Srt => segments_to_srt(segments),
        OutputFormat::Vtt => segments_to_vtt(segments),
    }
}

fn apply_extra_fillers(
    segments: &[TranscriptSegment],
    extra: &[String],
) -> Vec<TranscriptSegment> {
    segments
        .iter()
        .map(|segment| {
            let mut cleaned = segment.clone();
            cleaned.text = remove_custom_fillers(&segment.text, extra);
            cleaned
        })
        .collect()
}

fn print_segment(segment: &TranscriptSegment, include_labels: bool) {
    let prefix = if segment.is_timed() {
        format!("[{}] ", format_timestamp(segment.start))
    } else {
        String::new()
    };
    match &segment.speaker {
        Some(name) if include_labels => println!("{}{}: {}", prefix, name, segment.text),
        _ => println!("{}{}", prefix, segment.text),
    }
}

fn handle_segment(
    file: &Path,
    strategy: Option<Strategy>,
    merge: bool,
    clean: bool,
    duration: Option<f64>,
    json: bool,
    no_labels: bool,
) -> Result<()> {
    let cfg = config::load_config()?;
    let content = read_transcript(file)?;

    let strategy = strategy.unwrap_or(cfg.segmentation.strategy);
    let mut segments = parse_transcript(&content, strategy);
    debug!("parsed {} segments with {:?}", segments.len(), strategy);

    if merge || cfg.segmentation.merge_turns {
        segments = merge_adjacent_speaker_segments(&segments);
    }
    if clean {
        segments = remove_filler_words_from_segments(&segments);
        if !cfg.cleaning.extra_fillers.is_empty() {
            segments = apply_extra_fillers(&segments, &cfg.cleaning.extra_fillers);
        }
    }
    if let Some(duration) = duration {
        segments = estimate_segment_timestamps(&segments, duration);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else if segments.is_empty() {
        println!("No segments found.");
    } else {
        for segment in &segments {
            print_segment(segment, !no_labels);
        }
    }
    Ok(())
}

fn handle_export(
    file: &Path,
    format: Option<OutputFormat>,
    duration: Option<f64>,
    output: Option<PathBuf>,
) -> Result<()> {
    let cfg = config::load_config()?;
    let format = format.unwrap_or(cfg.export.format);

    let mut segments = load_segments(file, cfg.segmentation.strategy)?;
    if let Some(duration) = duration {
        segments = estimate_segment_timestamps(&segments, duration);
    }

    if matches!(format, OutputFormat::Srt | OutputFormat::Vtt)
        && !segments.is_empty()
        && !segments.iter().any(|s| s.is_timed())
    {
        return Err(ParleyError::Export(
            "segments carry no timestamps; pass --duration or export a timed JSON dump"
                .to_string(),
        ));
    }

    let content = render(&segments, format, cfg.export.include_labels);
    debug!("rendering {} segments as {:?}", segments.len(), format);

    match output {
        Some(path) => {
            let path = if path.extension().is_none() {
                path.with_extension(format.extension())
            } else {
                path
            };
            fs::write(&path, content)?;
            println!("Wrote {}", path.display());
        }
        None => {
            print!("{}", content);
            if !content.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}

fn handle_clean(file: &Path, output: Option<PathBuf>) -> Result<()> {
    let cfg = config::load_config()?;
    let content = read_transcript(file)?;

    // keep the output label-free when the input never carried labels
    let include_labels = has_speaker_labels(&content);

    let segments = parse_transcript(&content, cfg.segmentation.strategy);
    let mut cleaned = remove_filler_words_from_segments(&segments);
    if !cfg.cleaning.extra_fillers.is_empty() {
        cleaned = apply_extra_fillers(&cleaned, &cfg.cleaning.extra_fillers);
    }

    let text = segments_to_text(&cleaned, include_labels);
    match output {
        Some(path) => {
            fs::write(&path, &text)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn handle_speakers(file: &Path) -> Result<()> {
    let cfg = config::load_config()?;
    let segments = load_segments(file, cfg.segmentation.strategy)?;

    let speakers = unique_speakers(&segments);
    if speakers.is_empty() {
        println!("No speakers found.");
        return Ok(());
    }

    for name in &speakers {
        println!("{:<24} {}", name, speaker_color(name));
    }
    Ok(())
}

fn handle_rename(
    file: &Path,
    from: Option<String>,
    to: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let cfg = config::load_config()?;
    let is_json = file.extension().and_then(|e| e.to_str()) == Some("json");
    let segments = load_segments(file, cfg.segmentation.strategy)?;

    let speakers = unique_speakers(&segments);
    if speakers.is_empty() {
        println!("No speakers to rename.");
        return Ok(());
    }

    let from = match from {
        Some(name) => name,
        None => select_speaker_interactive(&speakers)?,
    };
    if !speakers.iter().any(|s| s == &from) {
        return Err(ParleyError::UnknownSpeaker(from));
    }

    let to = match to {
        Some(name) => name,
        None => prompt_new_name(&from)?,
    };

    let renamed = rename_speaker(&segments, &from, &to);
    let text = if is_json {
        serde_json::to_string_pretty(&renamed)?
    } else {
        segments_to_text(&renamed, true)
    };

    match output {
        Some(path) => {
            fs::write(&path, &text)?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn select_speaker_interactive(speakers: &[String]) -> Result<String> {
    use dialoguer::{theme::ColorfulTheme, Select};

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a speaker")
        .items(speakers)
        .default(0)
        .interact()
        .map_err(|e| ParleyError::Config(format!("Selection cancelled: {}", e)))?;

    Ok(speakers[selection].clone())
}

fn prompt_new_name(from: &str) -> Result<String> {
    use dialoguer::{theme::ColorfulTheme, Input};

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("New name for {}", from))
        .interact_text()
        .map_err(|e| ParleyError::Config(format!("Prompt cancelled: {}", e)))?;

    Ok(name)
}

fn handle_locate(file: &Path, duration: f64, time: f64) -> Result<()> {
    let cfg = config::load_config()?;
    let segments = load_segments(file, cfg.segmentation.strategy)?;
    let timed = estimate_segment_timestamps(&segments, duration);

    match find_segment_at_time(&timed, time) {
        Some(index) => {
            println!(
                "At {} of {}:",
                format_timestamp(time),
                format_duration(duration)
            );
            print_segment(&timed[index], true);
        }
        None => println!("No segment at {}.", format_timestamp(time)),
    }
    Ok(())
}

fn handle_config(action: ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let config = config::load_config()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigCommands::Path => {
            println!("{}", config::config_path()?.display());
        }
        ConfigCommands::Init => {
            let path = config::config_path()?;
            config::save_config(&ParleyConfig::default())?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigCommands::Edit => {
            let path = config::config_path()?;
            if !path.exists() {
                config::save_config(&ParleyConfig::default())?;
            }
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            let status = std::process::Command::new(editor).arg(&path).status()?;
            if !status.success() {
                eprintln!("Editor exited with {}", status);
            }
        }
    }
    Ok(())
}
