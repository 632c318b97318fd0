//! Rendering of frequency reports

use super::OutputFormat;
use akshara_core::{AnalysisReport, RankedItem};
use anyhow::Result;
use std::io::Write;

const RULE: &str = "==================================================";

/// Write `report` to `writer` in the requested format
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &AnalysisReport,
    format: OutputFormat,
    pretty_json: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(writer, report)?,
        OutputFormat::Json => {
            if pretty_json {
                serde_json::to_writer_pretty(&mut *writer, report)?;
            } else {
                serde_json::to_writer(&mut *writer, report)?;
            }
            writeln!(writer)?;
        }
        OutputFormat::Markdown => write_markdown(writer, report)?,
    }
    writer.flush()?;
    Ok(())
}

fn write_text<W: Write>(writer: &mut W, report: &AnalysisReport) -> Result<()> {
    write_text_table(writer, "Syllable Frequency Analysis:", &report.top_syllables)?;
    write_text_table(writer, "Leading Consonants:", &report.top_consonants)?;
    write_text_table(writer, "Consonant-Vowel Combinations:", &report.consonant_combinations)?;
    write_text_table(writer, "Vowel Usage:", &report.vowel_usage)?;
    write_text_table(writer, "Word Beginnings:", &report.word_beginnings)?;

    writeln!(writer, "Word Length Distribution:")?;
    writeln!(writer, "{RULE}")?;
    for bucket in &report.word_lengths {
        writeln!(
            writer,
            "{} characters: {} words ({:.1}%)",
            bucket.characters, bucket.words, bucket.percentage
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "Syllables per Word:")?;
    writeln!(writer, "{RULE}")?;
    for bucket in &report.syllables_per_word {
        writeln!(
            writer,
            "{}: {} words ({:.1}%)",
            bucket.syllables, bucket.words, bucket.percentage
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "Total words: {}", report.total_words)?;
    writeln!(writer, "Total characters: {}", report.total_characters)?;
    writeln!(writer, "Unique characters: {}", report.unique_characters)?;
    writeln!(
        writer,
        "Average word length: {:.2} characters",
        report.average_word_length
    )?;
    if let Some(word) = &report.longest_word {
        writeln!(writer, "Longest word: {} ({} characters)", word.word, word.length)?;
    }
    if let Some(word) = &report.shortest_word {
        writeln!(writer, "Shortest word: {} ({} characters)", word.word, word.length)?;
    }
    writeln!(writer, "Total unique syllables: {}", report.unique_syllables)?;
    writeln!(writer, "Total syllable occurrences: {}", report.total_syllables)?;
    writeln!(
        writer,
        "Average syllables per word: {:.2}",
        report.average_syllables_per_word
    )?;
    Ok(())
}

fn write_text_table<W: Write>(writer: &mut W, title: &str, rows: &[RankedItem]) -> Result<()> {
    writeln!(writer, "{title}")?;
    writeln!(writer, "{RULE}")?;
    for row in rows {
        writeln!(
            writer,
            "'{}': {} times ({:.1}%)",
            row.item, row.count, row.percentage
        )?;
    }
    writeln!(writer)?;
    Ok(())
}

fn write_markdown<W: Write>(writer: &mut W, report: &AnalysisReport) -> Result<()> {
    writeln!(writer, "# Syllable Report")?;
    writeln!(writer)?;
    write_markdown_table(writer, "Top Syllables", "Syllable", &report.top_syllables)?;
    write_markdown_table(writer, "Leading Consonants", "Consonant", &report.top_consonants)?;
    write_markdown_table(
        writer,
        "Consonant-Vowel Combinations",
        "Syllable",
        &report.consonant_combinations,
    )?;
    write_markdown_table(writer, "Vowel Usage", "Vowel", &report.vowel_usage)?;
    write_markdown_table(writer, "Word Beginnings", "Beginning", &report.word_beginnings)?;

    writeln!(writer, "## Word Lengths")?;
    writeln!(writer)?;
    writeln!(writer, "| Characters | Words | % |")?;
    writeln!(writer, "|---:|---:|---:|")?;
    for bucket in &report.word_lengths {
        writeln!(
            writer,
            "| {} | {} | {:.2} |",
            bucket.characters, bucket.words, bucket.percentage
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "## Syllables per Word")?;
    writeln!(writer)?;
    writeln!(writer, "| Syllables | Words | % |")?;
    writeln!(writer, "|---:|---:|---:|")?;
    for bucket in &report.syllables_per_word {
        writeln!(
            writer,
            "| {} | {} | {:.2} |",
            bucket.syllables, bucket.words, bucket.percentage
        )?;
    }
    writeln!(writer)?;

    writeln!(writer, "## Word Statistics")?;
    writeln!(writer)?;
    writeln!(writer, "- Total characters: {}", report.total_characters)?;
    writeln!(writer, "- Unique characters: {}", report.unique_characters)?;
    writeln!(writer, "- Average word length: {:.2}", report.average_word_length)?;
    if let Some(word) = &report.longest_word {
        writeln!(writer, "- Longest word: {} ({})", word.word, word.length)?;
    }
    if let Some(word) = &report.shortest_word {
        writeln!(writer, "- Shortest word: {} ({})", word.word, word.length)?;
    }
    writeln!(writer)?;

    writeln!(writer, "---")?;
    writeln!(
        writer,
        "*Total words: {} | Unique syllables: {} | Syllable occurrences: {} | Average per word: {:.2}*",
        report.total_words,
        report.unique_syllables,
        report.total_syllables,
        report.average_syllables_per_word
    )?;
    Ok(())
}

fn write_markdown_table<W: Write>(
    writer: &mut W,
    title: &str,
    header: &str,
    rows: &[RankedItem],
) -> Result<()> {
    writeln!(writer, "## {title}")?;
    writeln!(writer)?;
    writeln!(writer, "| # | {header} | Count | % |")?;
    writeln!(writer, "|---:|---|---:|---:|")?;
    for (rank, row) in rows.iter().enumerate() {
        writeln!(
            writer,
            "| {} | {} | {} | {:.2} |",
            rank + 1,
            row.item,
            row.count,
            row.percentage
        )?;
    }
    writeln!(writer)?;
    Ok(())
}
