/*!
 * Application controller.
 *
 * Drives one run end to end: sheet and column selection (interactive or from
 * CLI flags), translation of the selected columns with a progress bar, and
 * writing the output file. The selection layer validates everything before
 * the core translation ever runs.
 */

use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::providers::libretranslate::LibreTranslate;
use crate::sheet_io;
use crate::translation::{RetryPolicy, Translator};

/// Main application controller
pub struct Controller {
    /// Application configuration
    config: Config,
}

impl Controller {
    /// Create a new controller with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run a full translation job on one workbook
    ///
    /// `sheet_arg` and `columns_arg` come from the CLI; when either is absent
    /// the operator is prompted on stdin.
    pub async fn run(
        &self,
        input_path: &Path,
        sheet_arg: Option<String>,
        columns_arg: Option<String>,
    ) -> Result<(), AppError> {
        if !input_path.exists() {
            return Err(AppError::File(format!("Input file does not exist: {:?}", input_path)));
        }

        let names = sheet_io::sheet_names(input_path)?;
        if names.is_empty() {
            return Err(AppError::File(format!("No sheets found in {:?}", input_path)));
        }

        let sheet_name = match sheet_arg {
            Some(arg) => resolve_sheet(&names, &arg)?,
            None => {
                println!("Available sheets:");
                for (index, name) in names.iter().enumerate() {
                    println!("{}. {}", index + 1, name);
                }
                let answer = prompt("\nEnter the sheet number to translate: ")?;
                resolve_sheet(&names, &answer)?
            }
        };
        info!("Selected sheet: {}", sheet_name);

        let sheet = sheet_io::read_sheet(input_path, &sheet_name)?;
        let column_names = sheet.column_names();

        let selected = match columns_arg {
            Some(arg) => resolve_columns(&column_names, &arg)?,
            None => {
                println!("\nAvailable columns:");
                for (index, name) in column_names.iter().enumerate() {
                    println!("{}. {}", index + 1, name);
                }
                let answer = prompt("\nEnter the column numbers to translate (comma-separated, e.g. 1,3,5): ")?;
                resolve_columns(&column_names, &answer)?
            }
        };
        info!("Selected columns: {}", selected.join(", "));

        let provider = LibreTranslate::new(
            self.config.translation.endpoint.clone(),
            self.config.translation.api_key.clone(),
        );
        let translator = Translator::new(
            Box::new(provider),
            RetryPolicy::from_config(&self.config.translation),
            self.config.source_language.clone(),
            self.config.target_language.clone(),
        );

        let progress_bar = ProgressBar::new(selected.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} columns ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Translating");

        info!("Translating {} -> {}, please wait…",
              self.config.source_language, self.config.target_language);

        let start_time = Instant::now();
        let pb = progress_bar.clone();
        let translated = sheet.translate_columns(&translator, &selected, move |completed, _total| {
            pb.set_position(completed as u64);
        }).await?;
        progress_bar.finish_with_message("Translation complete");

        let output_path = sheet_io::output_path(Path::new(&self.config.output_dir), &translated.name);
        sheet_io::write_csv(&translated, &output_path)?;

        let (hits, misses, hit_rate) = translator.cache().stats();
        info!("Cache: {} hits, {} misses ({:.0}% hit rate)", hits, misses, hit_rate * 100.0);
        info!("Translated sheet saved to: {}", output_path.display());
        info!("Processing time: {:.2} seconds", start_time.elapsed().as_secs_f64());

        Ok(())
    }
}

/// Resolve a sheet argument, accepting a 1-based number or an exact name
pub fn resolve_sheet(names: &[String], input: &str) -> Result<String, AppError> {
    let input = input.trim();

    if let Ok(number) = input.parse::<usize>() {
        if number == 0 || number > names.len() {
            return Err(AppError::InvalidSelection(format!(
                "Sheet number {} is out of range (1-{})", number, names.len()
            )));
        }
        return Ok(names[number - 1].clone());
    }

    names.iter()
        .find(|name| name.as_str() == input)
        .cloned()
        .ok_or_else(|| AppError::InvalidSelection(format!("No sheet named '{}'", input)))
}

/// Resolve a comma-separated column selection, accepting 1-based numbers or
/// exact names, deduplicated in first-seen order
pub fn resolve_columns(column_names: &[&str], input: &str) -> Result<Vec<String>, AppError> {
    let mut selected: Vec<String> = Vec::new();

    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let name = if let Ok(number) = token.parse::<usize>() {
            if number == 0 || number > column_names.len() {
                return Err(AppError::InvalidSelection(format!(
                    "Column number {} is out of range (1-{})", number, column_names.len()
                )));
            }
            column_names[number - 1].to_string()
        } else {
            column_names.iter()
                .find(|name| **name == token)
                .map(|name| name.to_string())
                .ok_or_else(|| AppError::InvalidSelection(format!("No column named '{}'", token)))?
        };

        if !selected.contains(&name) {
            selected.push(name);
        }
    }

    if selected.is_empty() {
        return Err(AppError::InvalidSelection("No columns selected".to_string()));
    }

    Ok(selected)
}

/// Print a prompt and read one line from stdin
fn prompt(message: &str) -> Result<String, AppError> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
