// wordidx-cli: shared pieces of the command-line tools.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, bail};
use serde::Serialize;
use tracing::debug;
use wordidx::tokenizer::Tokenizer;
use wordidx::{IndexConfig, WordIndex};

/// Dictionary used when neither `--dictionary` nor `WORDIDX_DICT_PATH` is set.
pub const DEFAULT_DICTIONARY: &str = "dictionaries/large";

/// Pick the dictionary path: the explicit one if given, else the default
/// relative to the working directory.
pub fn resolve_dictionary(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(|| PathBuf::from(DEFAULT_DICTIONARY), Path::to_path_buf)
}

/// Seconds spent in each index operation.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Timings {
    pub load: f64,
    pub check: f64,
    pub size: f64,
    pub unload: f64,
}

impl Timings {
    pub fn total(&self) -> f64 {
        self.load + self.check + self.size + self.unload
    }
}

/// Result of spell checking one text against one dictionary.
#[derive(Debug, Clone, Serialize)]
pub struct SpellReport {
    pub misspelled: Vec<String>,
    pub words_misspelled: usize,
    pub words_in_dictionary: usize,
    pub words_in_text: usize,
    pub timings: Timings,
}

/// Load `dictionary`, check every word of `text`, then unload.
pub fn spell_check(
    config: IndexConfig,
    dictionary: &Path,
    text: &[u8],
) -> anyhow::Result<SpellReport> {
    let mut index = WordIndex::with_config(config).context("invalid index configuration")?;
    let mut timings = Timings::default();

    let started = Instant::now();
    index
        .load_path(dictionary)
        .with_context(|| format!("could not load {}", dictionary.display()))?;
    timings.load = started.elapsed().as_secs_f64();

    let mut misspelled = Vec::new();
    let mut words_in_text = 0;
    let started = Instant::now();
    for token in Tokenizer::with_max_len(text, config.max_word_len) {
        words_in_text += 1;
        if !index.check(token.word) {
            misspelled.push(String::from_utf8_lossy(token.word).into_owned());
        }
    }
    timings.check = started.elapsed().as_secs_f64();

    let started = Instant::now();
    let words_in_dictionary = index.size();
    timings.size = started.elapsed().as_secs_f64();

    let started = Instant::now();
    if !index.unload() {
        bail!("could not unload {}", dictionary.display());
    }
    timings.unload = started.elapsed().as_secs_f64();

    debug!(
        words_in_text,
        misspelled = misspelled.len(),
        total_secs = timings.total(),
        "spell check finished"
    );

    Ok(SpellReport {
        words_misspelled: misspelled.len(),
        misspelled,
        words_in_dictionary,
        words_in_text,
        timings,
    })
}

impl SpellReport {
    /// Write the classic plain-text report.
    pub fn write_text(&self, out: &mut impl Write, list_misspelled: bool) -> io::Result<()> {
        if list_misspelled {
            writeln!(out, "\nMISSPELLED WORDS\n")?;
            for word in &self.misspelled {
                writeln!(out, "{word}")?;
            }
        }
        writeln!(out)?;
        writeln!(out, "WORDS MISSPELLED:     {}", self.words_misspelled)?;
        writeln!(out, "WORDS IN DICTIONARY:  {}", self.words_in_dictionary)?;
        writeln!(out, "WORDS IN TEXT:        {}", self.words_in_text)?;
        writeln!(out, "TIME IN load:         {:.2}", self.timings.load)?;
        writeln!(out, "TIME IN check:        {:.2}", self.timings.check)?;
        writeln!(out, "TIME IN size:         {:.2}", self.timings.size)?;
        writeln!(out, "TIME IN unload:       {:.2}", self.timings.unload)?;
        writeln!(out, "TIME IN TOTAL:        {:.2}", self.timings.total())?;
        Ok(())
    }

    /// Write the report as a single JSON object.
    pub fn write_json(&self, out: &mut impl Write) -> anyhow::Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
